//! Apologetics: objections, responses, authors and debate preparation

use axum::{
    extract::{Path, Query, State},
    response::{Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use ministry_common::db::ApologeticsObjection;
use ministry_common::fields::{encode_json, split_list};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::context::{FlashLevel, RequestContext};
use super::form::FormFields;
use crate::db::apologetics::{self, ResponseInput};
use crate::db::resources;
use crate::error::{ApiError, ApiResult, AppError, AppResult};
use crate::services::suggestions;
use crate::views::apologetics::{self as pages, ResponseFormValues};
use crate::AppState;

/// GET /apologetics/
pub async fn index(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    let categories = apologetics::list_categories(&state.db).await?;
    ctx.render(&state, pages::index_page(&categories)).await
}

pub async fn index_redirect() -> Redirect {
    Redirect::permanent("/apologetics/")
}

/// GET /apologetics/objections?category=
pub async fn objections(
    State(state): State<AppState>,
    ctx: RequestContext,
    Query(query): Query<FormFields>,
) -> AppResult<Response> {
    let category = match query.id("category") {
        Some(id) => Some(
            apologetics::find_category(&state.db, id)
                .await?
                .ok_or_else(|| AppError::not_found("Category"))?,
        ),
        None => None,
    };
    let list = apologetics::list_objections(&state.db, category.as_ref().map(|c| c.id)).await?;
    ctx.render(&state, pages::objections_page(category.as_ref(), &list)).await
}

/// GET /apologetics/objection/:id
pub async fn view_objection(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let objection = apologetics::find_objection(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Objection"))?;
    let category = apologetics::find_category(&state.db, objection.category_id).await?;
    let responses = apologetics::responses_for_objection(&state.db, id).await?;

    let mut linked: Vec<i64> = Vec::new();
    for resource_id in responses.iter().flat_map(|r| r.resource_ids()) {
        if !linked.contains(&resource_id) {
            linked.push(resource_id);
        }
    }
    let related = resources::resources_by_ids(&state.db, &linked).await?;

    let page = pages::objection_page(&objection, category.as_ref(), &responses, &related, ctx.user_id());
    ctx.render(&state, page).await
}

fn response_values(form: &FormFields) -> ResponseFormValues {
    ResponseFormValues {
        title: form.text("title"),
        response_text: form.text("response_text"),
        scripture_references: form.text("scripture_references"),
        resource_ids: form.ids("resources"),
    }
}

fn response_input(values: &ResponseFormValues) -> ministry_common::Result<ResponseInput> {
    let additional_resources = if values.resource_ids.is_empty() {
        String::new()
    } else {
        encode_json(&values.resource_ids)?
    };
    Ok(ResponseInput {
        title: values.title.clone(),
        response_text: values.response_text.clone(),
        scripture_references: split_list(&values.scripture_references).join(", "),
        additional_resources,
    })
}

/// Render the response form with the resource pickers
async fn render_response_form(
    state: &AppState,
    ctx: &RequestContext,
    heading: &str,
    action: &str,
    objection: &ApologeticsObjection,
    values: &ResponseFormValues,
) -> AppResult<Response> {
    let amillennial = resources::resources_by_flag(&state.db, true).await?;
    let other = resources::resources_by_flag(&state.db, false).await?;
    let page = pages::response_form_page(heading, action, objection, values, &amillennial, &other);
    ctx.render(state, page).await
}

/// GET /apologetics/response/new/:objection_id
pub async fn new_response_form(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(objection_id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let objection = apologetics::find_objection(&state.db, objection_id)
        .await?
        .ok_or_else(|| AppError::not_found("Objection"))?;

    let action = format!("/apologetics/response/new/{}", objection_id);
    render_response_form(
        &state,
        &ctx,
        "New Response",
        &action,
        &objection,
        &ResponseFormValues::default(),
    )
    .await
}

/// POST /apologetics/response/new/:objection_id
pub async fn create_response(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(objection_id): Path<i64>,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    let user_id = ctx.require_user()?.id;
    let objection = apologetics::find_objection(&state.db, objection_id)
        .await?
        .ok_or_else(|| AppError::not_found("Objection"))?;

    let action = format!("/apologetics/response/new/{}", objection_id);
    let values = response_values(&form);
    if values.title.is_empty() || values.response_text.is_empty() {
        ctx.flash(&state, FlashLevel::Danger, "Title and response text are required")
            .await?;
        return render_response_form(&state, &ctx, "New Response", &action, &objection, &values).await;
    }

    let view = format!("/apologetics/objection/{}", objection_id);
    let input = response_input(&values)?;
    match apologetics::create_response(&state.db, objection_id, user_id, &input).await {
        Ok(id) => {
            info!("User {} added response {} to objection {}", user_id, id, objection_id);
            ctx.redirect_with(&state, FlashLevel::Success, "Response added successfully!", &view)
                .await
        }
        Err(e) => ctx.write_failed(&state, "adding response", e, &action).await,
    }
}

/// GET /apologetics/response/:id/edit
pub async fn edit_response_form(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let response = apologetics::find_response(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Response"))?;
    let view = format!("/apologetics/objection/{}", response.objection_id);
    if !ctx.owns(response.user_id) {
        return ctx
            .deny(&state, "You do not have permission to edit this response.", &view)
            .await;
    }
    let objection = apologetics::find_objection(&state.db, response.objection_id)
        .await?
        .ok_or_else(|| AppError::not_found("Objection"))?;

    let action = format!("/apologetics/response/{}/edit", id);
    render_response_form(
        &state,
        &ctx,
        "Edit Response",
        &action,
        &objection,
        &ResponseFormValues::from_response(&response),
    )
    .await
}

/// POST /apologetics/response/:id/edit
pub async fn update_response(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let response = apologetics::find_response(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Response"))?;
    let view = format!("/apologetics/objection/{}", response.objection_id);
    if !ctx.owns(response.user_id) {
        return ctx
            .deny(&state, "You do not have permission to edit this response.", &view)
            .await;
    }

    let action = format!("/apologetics/response/{}/edit", id);
    let values = response_values(&form);
    if values.title.is_empty() || values.response_text.is_empty() {
        let objection = apologetics::find_objection(&state.db, response.objection_id)
            .await?
            .ok_or_else(|| AppError::not_found("Objection"))?;
        ctx.flash(&state, FlashLevel::Danger, "Title and response text are required")
            .await?;
        return render_response_form(&state, &ctx, "Edit Response", &action, &objection, &values).await;
    }

    let input = response_input(&values)?;
    match apologetics::update_response(&state.db, id, &input).await {
        Ok(()) => {
            ctx.redirect_with(&state, FlashLevel::Success, "Response updated successfully!", &view)
                .await
        }
        Err(e) => ctx.write_failed(&state, "updating response", e, &action).await,
    }
}

/// POST /apologetics/response/:id/delete
pub async fn delete_response(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let response = apologetics::find_response(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Response"))?;
    let view = format!("/apologetics/objection/{}", response.objection_id);
    if !ctx.owns(response.user_id) {
        return ctx
            .deny(&state, "You do not have permission to delete this response.", &view)
            .await;
    }

    match apologetics::delete_response(&state.db, id).await {
        Ok(()) => {
            info!("Deleted response {}", id);
            ctx.redirect_with(&state, FlashLevel::Success, "Response deleted successfully!", &view)
                .await
        }
        Err(e) => ctx.write_failed(&state, "deleting response", e, &view).await,
    }
}

/// GET /apologetics/authors?amillennial=1
pub async fn authors(
    State(state): State<AppState>,
    ctx: RequestContext,
    Query(query): Query<FormFields>,
) -> AppResult<Response> {
    let amillennial_only = query.id("amillennial").is_some_and(|v| v != 0);
    let list = apologetics::list_authors(&state.db, amillennial_only).await?;
    ctx.render(&state, pages::authors_page(&list, amillennial_only)).await
}

/// GET /apologetics/author/:id
pub async fn view_author(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let author = apologetics::find_author(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Author"))?;
    let works = apologetics::works_for_author(&state.db, id).await?;
    let quotes = apologetics::quotes_for_author(&state.db, id).await?;
    ctx.render(&state, pages::author_page(&author, &works, &quotes)).await
}

/// GET /apologetics/debate-preparation?category=
pub async fn debate_preparation(
    State(state): State<AppState>,
    ctx: RequestContext,
    Query(query): Query<FormFields>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let categories = apologetics::list_categories(&state.db).await?;

    let selected = query.id("category");
    let list = match selected {
        Some(category_id) => {
            apologetics::find_category(&state.db, category_id)
                .await?
                .ok_or_else(|| AppError::not_found("Category"))?;
            apologetics::list_objections(&state.db, Some(category_id)).await?
        }
        None => Vec::new(),
    };

    ctx.render(&state, pages::debate_preparation_page(&categories, selected, &list))
        .await
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub objection_id: Option<i64>,
}

/// POST /apologetics/api/generate_response
pub async fn generate_response(
    State(state): State<AppState>,
    ctx: RequestContext,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<Json<Value>> {
    if ctx.user.is_none() {
        return Err(ApiError::Unauthorized);
    }
    let objection_id = request
        .objection_id
        .ok_or_else(|| ApiError::BadRequest("Objection ID is required".to_string()))?;

    let objection = apologetics::find_objection(&state.db, objection_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Objection not found".to_string()))?;
    let category_name = apologetics::find_category(&state.db, objection.category_id)
        .await?
        .map(|c| c.name)
        .unwrap_or_default();

    Ok(Json(json!({
        "success": true,
        "response": suggestions::draft_response(&objection.title, &category_name),
    })))
}

/// Apologetics routes
pub fn apologetics_routes() -> Router<AppState> {
    Router::new()
        .route("/apologetics", get(index_redirect))
        .route("/apologetics/", get(index))
        .route("/apologetics/objections", get(objections))
        .route("/apologetics/objection/:id", get(view_objection))
        .route("/apologetics/response/new/:objection_id", get(new_response_form).post(create_response))
        .route("/apologetics/response/:id/edit", get(edit_response_form).post(update_response))
        .route("/apologetics/response/:id/delete", post(delete_response))
        .route("/apologetics/authors", get(authors))
        .route("/apologetics/author/:id", get(view_author))
        .route("/apologetics/debate-preparation", get(debate_preparation))
        .route("/apologetics/api/generate_response", post(generate_response))
}
