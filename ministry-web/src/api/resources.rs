//! Resource library, JSON search and catalog import

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use ministry_common::db::Resource;
use ministry_common::fields::normalize_tags;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::context::{FlashLevel, RequestContext};
use super::form::FormFields;
use crate::db::resources::{self, ResourceFilter, ResourceInput};
use crate::error::{ApiError, ApiResult, AppError, AppResult};
use crate::services::importer::{self, ImportFilter, ImportSelector};
use crate::views::resources::{self as pages, ResourceFormValues};
use crate::AppState;

const LIBRARY: &str = "/resources/library";
const SEARCH_LIMIT: i64 = 10;
const RECOMMEND_LIMIT: i64 = 5;

/// GET /resources/
pub async fn index() -> Redirect {
    Redirect::to(LIBRARY)
}

/// GET /resources/library
pub async fn library(
    State(state): State<AppState>,
    ctx: RequestContext,
    Query(query): Query<FormFields>,
) -> AppResult<Response> {
    let filter = ResourceFilter {
        resource_type: query.optional("type"),
        topic: query.optional("topic"),
        search: query.optional("search"),
    };

    let list = resources::search_resources(&state.db, &filter, None).await?;
    let types = resources::distinct_types(&state.db).await?;
    let topics = resources::distinct_resource_topics(&state.db).await?;
    ctx.render(&state, pages::library_page(&list, &types, &topics, &filter))
        .await
}

/// GET /resources/resource/:id
pub async fn view_resource(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let resource = resources::find_resource(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Resource"))?;
    ctx.render(&state, pages::resource_page(&resource, ctx.user.is_some()))
        .await
}

fn resource_values(form: &FormFields) -> ResourceFormValues {
    ResourceFormValues {
        title: form.text("title"),
        author: form.text("author"),
        resource_type: form.text("resource_type"),
        topic: form.text("topic"),
        description: form.text("description"),
        content: form.text("content"),
        url: form.text("url"),
        tags: form.text("tags"),
        is_amillennial: form.checked("is_amillennial"),
    }
}

fn resource_input(values: &ResourceFormValues) -> ResourceInput {
    ResourceInput {
        title: values.title.clone(),
        author: values.author.clone(),
        resource_type: values.resource_type.clone(),
        topic: values.topic.clone(),
        description: values.description.clone(),
        content: values.content.clone(),
        url: values.url.clone(),
        tags: normalize_tags(&values.tags),
        is_amillennial: values.is_amillennial,
    }
}

/// GET /resources/resource/new
pub async fn new_resource_form(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    ctx.require_user()?;
    let page = pages::resource_form_page("Add Resource", "/resources/resource/new", &ResourceFormValues::default());
    ctx.render(&state, page).await
}

/// POST /resources/resource/new
pub async fn create_resource(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let values = resource_values(&form);

    if values.title.is_empty() {
        ctx.flash(&state, FlashLevel::Danger, "Title is required.").await?;
        let page = pages::resource_form_page("Add Resource", "/resources/resource/new", &values);
        return ctx.render(&state, page).await;
    }

    match resources::insert_resource(&state.db, &resource_input(&values)).await {
        Ok(id) => {
            info!("Added resource {} ({})", values.title, id);
            ctx.redirect_with(
                &state,
                FlashLevel::Success,
                "Resource added successfully!",
                &format!("/resources/resource/{}", id),
            )
            .await
        }
        Err(e) => ctx.write_failed(&state, "adding resource", e, "/resources/resource/new").await,
    }
}

/// GET /resources/resource/:id/edit
pub async fn edit_resource_form(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let resource = resources::find_resource(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Resource"))?;

    let action = format!("/resources/resource/{}/edit", id);
    let page = pages::resource_form_page("Edit Resource", &action, &ResourceFormValues::from_resource(&resource));
    ctx.render(&state, page).await
}

/// POST /resources/resource/:id/edit
pub async fn update_resource(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    ctx.require_user()?;
    resources::find_resource(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Resource"))?;

    let action = format!("/resources/resource/{}/edit", id);
    let values = resource_values(&form);
    if values.title.is_empty() {
        ctx.flash(&state, FlashLevel::Danger, "Title is required.").await?;
        return ctx
            .render(&state, pages::resource_form_page("Edit Resource", &action, &values))
            .await;
    }

    match resources::update_resource(&state.db, id, &resource_input(&values)).await {
        Ok(()) => {
            ctx.redirect_with(
                &state,
                FlashLevel::Success,
                "Resource updated successfully!",
                &format!("/resources/resource/{}", id),
            )
            .await
        }
        Err(e) => ctx.write_failed(&state, "updating resource", e, &action).await,
    }
}

/// POST /resources/resource/:id/delete
pub async fn delete_resource(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_user()?;
    resources::find_resource(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Resource"))?;

    match resources::delete_resource(&state.db, id).await {
        Ok(()) => {
            info!("Deleted resource {}", id);
            ctx.redirect_with(&state, FlashLevel::Success, "Resource deleted successfully!", LIBRARY)
                .await
        }
        Err(e) => ctx.write_failed(&state, "deleting resource", e, LIBRARY).await,
    }
}

fn search_result(resource: &Resource) -> Value {
    json!({
        "id": resource.id,
        "title": resource.title,
        "author": resource.author,
        "resource_type": resource.resource_type,
        "topic": resource.topic,
        "url": format!("/resources/resource/{}", resource.id),
    })
}

/// GET /resources/api/search?q=
pub async fn api_search(
    State(state): State<AppState>,
    Query(query): Query<FormFields>,
) -> ApiResult<Json<Value>> {
    let term = query
        .optional("q")
        .ok_or_else(|| ApiError::BadRequest("Search term is required".to_string()))?;

    let filter = ResourceFilter {
        search: Some(term),
        ..ResourceFilter::default()
    };
    let found = resources::search_resources(&state.db, &filter, Some(SEARCH_LIMIT)).await?;
    let results: Vec<Value> = found.iter().map(search_result).collect();

    Ok(Json(json!({
        "success": true,
        "results": results,
    })))
}

/// GET /resources/api/recommend?topic=
pub async fn api_recommend(
    State(state): State<AppState>,
    Query(query): Query<FormFields>,
) -> ApiResult<Json<Value>> {
    let topic = query
        .optional("topic")
        .ok_or_else(|| ApiError::BadRequest("Topic is required".to_string()))?;

    let found = resources::recommend_for_topic(&state.db, &topic, RECOMMEND_LIMIT).await?;
    let results: Vec<Value> = found.iter().map(search_result).collect();

    Ok(Json(json!({
        "success": true,
        "results": results,
    })))
}

/// GET /resources/import
pub async fn import_form(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    ctx.require_user()?;
    ctx.render(&state, pages::import_page()).await
}

/// POST /resources/import
pub async fn import(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    ctx.require_user()?;

    let source = form.optional("source").unwrap_or_else(|| "all".to_string());
    let selector = match ImportSelector::parse(&source) {
        Ok(selector) => selector,
        Err(e) => {
            warn!("Rejected import request: {}", e);
            return ctx
                .redirect_with(
                    &state,
                    FlashLevel::Danger,
                    &format!("Error importing resources: unknown source '{}'", source),
                    "/resources/import",
                )
                .await;
        }
    };
    let filter = ImportFilter::new(form.optional("resource_type"), form.optional("topic"));

    let report = importer::run_import(&state.db, selector, &filter).await;
    info!(
        "Import from '{}' finished: {} resource(s) added",
        source,
        report.total_inserted()
    );

    for catalog in &report.catalogs {
        let level = if catalog.error.is_some() {
            FlashLevel::Danger
        } else {
            FlashLevel::Success
        };
        ctx.flash(&state, level, &catalog.to_string()).await?;
    }
    Ok(Redirect::to(LIBRARY).into_response())
}

/// Resource routes
pub fn resources_routes() -> Router<AppState> {
    Router::new()
        .route("/resources", get(index))
        .route("/resources/", get(index))
        .route("/resources/library", get(library))
        .route("/resources/resource/new", get(new_resource_form).post(create_resource))
        .route("/resources/resource/:id", get(view_resource))
        .route("/resources/resource/:id/edit", get(edit_resource_form).post(update_resource))
        .route("/resources/resource/:id/delete", post(delete_resource))
        .route("/resources/api/search", get(api_search))
        .route("/resources/api/recommend", get(api_recommend))
        .route("/resources/import", get(import_form).post(import))
}
