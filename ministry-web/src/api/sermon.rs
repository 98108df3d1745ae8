//! Sermon builder and sermon series

use axum::{
    extract::{Path, State},
    response::{Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use ministry_common::fields::{encode_json, parse_illustrations_text, parse_outline_text};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::context::{FlashLevel, RequestContext};
use super::form::{DateField, FormFields};
use crate::db::sermons::{self, SeriesInput, SermonInput};
use crate::error::{ApiError, ApiResult, AppError, AppResult};
use crate::services::suggestions;
use crate::views::sermon::{self as pages, SeriesFormValues, SermonFormValues};
use crate::AppState;

const MY_SERMONS: &str = "/sermon/my_sermons";
const SERIES_LIST: &str = "/sermon/series";

/// GET /sermon/
pub async fn index(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    ctx.render(&state, pages::index_page(ctx.user.is_some())).await
}

pub async fn index_redirect() -> Redirect {
    Redirect::permanent("/sermon/")
}

fn sermon_values(form: &FormFields) -> SermonFormValues {
    SermonFormValues {
        title: form.text("title"),
        scripture_passage: form.text("scripture_passage"),
        theme: form.text("theme"),
        content: form.text("content"),
        outline_text: form.text("outline"),
        illustrations_text: form.text("illustrations"),
        sermon_date: form.text("sermon_date"),
    }
}

/// Validated sermon input, or the flash explaining why not
fn sermon_input(values: &SermonFormValues, date: &DateField) -> Result<SermonInput, (FlashLevel, String)> {
    if values.title.is_empty() || values.scripture_passage.is_empty() {
        return Err((
            FlashLevel::Danger,
            "Title and Scripture Passage are required.".to_string(),
        ));
    }
    if date.is_invalid() {
        return Err((
            FlashLevel::Warning,
            "Invalid sermon date format. Please use YYYY-MM-DD.".to_string(),
        ));
    }

    let outline = encode_json(&parse_outline_text(&values.outline_text))
        .map_err(|e| (FlashLevel::Danger, e.to_string()))?;
    let illustrations = encode_json(&parse_illustrations_text(&values.illustrations_text))
        .map_err(|e| (FlashLevel::Danger, e.to_string()))?;

    Ok(SermonInput {
        title: values.title.clone(),
        scripture_passage: values.scripture_passage.clone(),
        theme: values.theme.clone(),
        content: values.content.clone(),
        outline,
        illustrations,
        sermon_date: date.value(),
    })
}

/// GET /sermon/build
pub async fn build_form(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    ctx.require_user()?;
    let page = pages::sermon_form_page("Build a Sermon", "/sermon/build", &SermonFormValues::default());
    ctx.render(&state, page).await
}

/// POST /sermon/build
pub async fn build(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    let user_id = ctx.require_user()?.id;
    let values = sermon_values(&form);

    let input = match sermon_input(&values, &form.date("sermon_date")) {
        Ok(input) => input,
        Err((level, message)) => {
            ctx.flash(&state, level, &message).await?;
            let page = pages::sermon_form_page("Build a Sermon", "/sermon/build", &values);
            return ctx.render(&state, page).await;
        }
    };

    match sermons::create_sermon(&state.db, user_id, &input).await {
        Ok(id) => {
            info!("User {} created sermon {}", user_id, id);
            ctx.redirect_with(
                &state,
                FlashLevel::Success,
                "Sermon created successfully!",
                &format!("/sermon/sermon/{}", id),
            )
            .await
        }
        Err(e) => ctx.write_failed(&state, "creating sermon", e, "/sermon/build").await,
    }
}

/// GET /sermon/my_sermons
pub async fn my_sermons(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    let user_id = ctx.require_user()?.id;
    let list = sermons::sermons_for_user(&state.db, user_id).await?;
    ctx.render(&state, pages::my_sermons_page(&list)).await
}

/// GET /sermon/sermon/:id
pub async fn view_sermon(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let user_id = ctx.require_user()?.id;
    let sermon = sermons::find_sermon(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Sermon"))?;
    if !ctx.owns(sermon.user_id) {
        return ctx
            .deny(&state, "You do not have permission to view this sermon.", MY_SERMONS)
            .await;
    }

    let series = match sermon.series_id {
        Some(series_id) => sermons::find_series(&state.db, series_id).await?,
        None => None,
    };
    let my_series = sermons::series_for_user(&state.db, user_id).await?;
    ctx.render(&state, pages::sermon_page(&sermon, series.as_ref(), &my_series))
        .await
}

/// GET /sermon/sermon/:id/edit
pub async fn edit_sermon_form(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let sermon = sermons::find_sermon(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Sermon"))?;
    if !ctx.owns(sermon.user_id) {
        return ctx
            .deny(&state, "You do not have permission to edit this sermon.", MY_SERMONS)
            .await;
    }

    let action = format!("/sermon/sermon/{}/edit", id);
    let page = pages::sermon_form_page("Edit Sermon", &action, &SermonFormValues::from_sermon(&sermon));
    ctx.render(&state, page).await
}

/// POST /sermon/sermon/:id/edit
pub async fn update_sermon(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let sermon = sermons::find_sermon(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Sermon"))?;
    if !ctx.owns(sermon.user_id) {
        return ctx
            .deny(&state, "You do not have permission to edit this sermon.", MY_SERMONS)
            .await;
    }

    let action = format!("/sermon/sermon/{}/edit", id);
    let values = sermon_values(&form);
    let input = match sermon_input(&values, &form.date("sermon_date")) {
        Ok(input) => input,
        Err((level, message)) => {
            ctx.flash(&state, level, &message).await?;
            return ctx
                .render(&state, pages::sermon_form_page("Edit Sermon", &action, &values))
                .await;
        }
    };

    let view = format!("/sermon/sermon/{}", id);
    match sermons::update_sermon(&state.db, id, &input).await {
        Ok(()) => {
            ctx.redirect_with(&state, FlashLevel::Success, "Sermon updated successfully!", &view)
                .await
        }
        Err(e) => ctx.write_failed(&state, "updating sermon", e, &action).await,
    }
}

/// POST /sermon/sermon/:id/delete
pub async fn delete_sermon(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let sermon = sermons::find_sermon(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Sermon"))?;
    if !ctx.owns(sermon.user_id) {
        return ctx
            .deny(&state, "You do not have permission to delete this sermon.", MY_SERMONS)
            .await;
    }

    match sermons::delete_sermon(&state.db, id).await {
        Ok(()) => {
            info!("Deleted sermon {}", id);
            ctx.redirect_with(&state, FlashLevel::Success, "Sermon deleted successfully!", MY_SERMONS)
                .await
        }
        Err(e) => ctx.write_failed(&state, "deleting sermon", e, MY_SERMONS).await,
    }
}

/// POST /sermon/sermon/add_to_series/:id
pub async fn add_to_series(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let sermon = sermons::find_sermon(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Sermon"))?;
    if !ctx.owns(sermon.user_id) {
        return ctx
            .deny(&state, "You do not have permission to modify this sermon.", MY_SERMONS)
            .await;
    }

    let view = format!("/sermon/sermon/{}", id);
    let Some(series_id) = form.id("series_id") else {
        return ctx
            .redirect_with(&state, FlashLevel::Warning, "You must select a sermon series.", &view)
            .await;
    };

    let series = match sermons::find_series(&state.db, series_id).await? {
        Some(series) if ctx.owns(series.user_id) => series,
        _ => {
            return ctx
                .redirect_with(&state, FlashLevel::Danger, "Invalid sermon series selected.", &view)
                .await;
        }
    };

    let position = form.id("position").filter(|p| *p >= 0);
    match sermons::attach_to_series(&state.db, id, &series, position).await {
        Ok(()) => {
            let message = format!("Sermon added to series \"{}\" successfully!", series.title);
            ctx.redirect_with(&state, FlashLevel::Success, &message, &view).await
        }
        Err(e) => ctx.write_failed(&state, "adding sermon to series", e, &view).await,
    }
}

#[derive(Debug, Deserialize)]
pub struct OutlineRequest {
    #[serde(default)]
    pub scripture: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
}

/// POST /sermon/api/generate_outline
pub async fn generate_outline(
    ctx: RequestContext,
    Json(request): Json<OutlineRequest>,
) -> ApiResult<Json<Value>> {
    if ctx.user.is_none() {
        return Err(ApiError::Unauthorized);
    }
    if request.scripture.as_deref().map_or(true, |s| s.trim().is_empty()) {
        return Err(ApiError::BadRequest("Scripture passage is required".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "outline": suggestions::sermon_outline(),
    })))
}

/// POST /sermon/api/suggest_illustrations
pub async fn suggest_illustrations(
    ctx: RequestContext,
    Json(request): Json<OutlineRequest>,
) -> ApiResult<Json<Value>> {
    if ctx.user.is_none() {
        return Err(ApiError::Unauthorized);
    }
    if request.theme.as_deref().map_or(true, |t| t.trim().is_empty()) {
        return Err(ApiError::BadRequest("Theme is required".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "illustrations": suggestions::sermon_illustrations(),
    })))
}

fn series_values(form: &FormFields) -> SeriesFormValues {
    SeriesFormValues {
        title: form.text("title"),
        description: form.text("description"),
        theme: form.text("theme"),
        start_date: form.text("start_date"),
        end_date: form.text("end_date"),
    }
}

/// Series input plus warnings for dates that did not parse
///
/// A malformed date leaves the field unset; the record is still saved.
fn series_input(form: &FormFields) -> (SeriesInput, Vec<&'static str>) {
    let start = form.date("start_date");
    let end = form.date("end_date");

    let mut warnings = Vec::new();
    if start.is_invalid() {
        warnings.push("Invalid start date format. Please use YYYY-MM-DD.");
    }
    if end.is_invalid() {
        warnings.push("Invalid end date format. Please use YYYY-MM-DD.");
    }

    let input = SeriesInput {
        title: form.text("title"),
        description: form.text("description"),
        theme: form.text("theme"),
        start_date: start.value(),
        end_date: end.value(),
    };
    (input, warnings)
}

/// GET /sermon/series
pub async fn series_list(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    let user_id = ctx.require_user()?.id;
    let list = sermons::series_for_user(&state.db, user_id).await?;
    ctx.render(&state, pages::series_list_page(&list)).await
}

/// GET /sermon/series/new
pub async fn new_series_form(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    ctx.require_user()?;
    let page = pages::series_form_page("New Sermon Series", "/sermon/series/new", &SeriesFormValues::default());
    ctx.render(&state, page).await
}

/// POST /sermon/series/new
pub async fn create_series(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    let user_id = ctx.require_user()?.id;
    let (input, warnings) = series_input(&form);

    if input.title.is_empty() {
        ctx.flash(&state, FlashLevel::Danger, "Title is required for a sermon series.")
            .await?;
        let page = pages::series_form_page("New Sermon Series", "/sermon/series/new", &series_values(&form));
        return ctx.render(&state, page).await;
    }

    match sermons::create_series(&state.db, user_id, &input).await {
        Ok(id) => {
            for warning in warnings {
                ctx.flash(&state, FlashLevel::Warning, warning).await?;
            }
            info!("User {} created sermon series {}", user_id, id);
            ctx.redirect_with(
                &state,
                FlashLevel::Success,
                "Sermon series created successfully!",
                &format!("/sermon/series/{}", id),
            )
            .await
        }
        Err(e) => ctx.write_failed(&state, "creating sermon series", e, "/sermon/series/new").await,
    }
}

/// GET /sermon/series/:id
pub async fn view_series(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let series = sermons::find_series(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Sermon series"))?;
    if !ctx.owns(series.user_id) {
        return ctx
            .deny(&state, "You do not have permission to view this sermon series.", SERIES_LIST)
            .await;
    }

    let members = sermons::sermons_in_series(&state.db, id).await?;
    ctx.render(&state, pages::series_page(&series, &members)).await
}

/// GET /sermon/series/:id/edit
pub async fn edit_series_form(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let series = sermons::find_series(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Sermon series"))?;
    if !ctx.owns(series.user_id) {
        return ctx
            .deny(&state, "You do not have permission to edit this sermon series.", SERIES_LIST)
            .await;
    }

    let action = format!("/sermon/series/{}/edit", id);
    let page = pages::series_form_page("Edit Sermon Series", &action, &SeriesFormValues::from_series(&series));
    ctx.render(&state, page).await
}

/// POST /sermon/series/:id/edit
pub async fn update_series(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let series = sermons::find_series(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Sermon series"))?;
    if !ctx.owns(series.user_id) {
        return ctx
            .deny(&state, "You do not have permission to edit this sermon series.", SERIES_LIST)
            .await;
    }

    let action = format!("/sermon/series/{}/edit", id);
    let (input, warnings) = series_input(&form);
    if input.title.is_empty() {
        ctx.flash(&state, FlashLevel::Danger, "Title is required for a sermon series.")
            .await?;
        let page = pages::series_form_page("Edit Sermon Series", &action, &series_values(&form));
        return ctx.render(&state, page).await;
    }

    match sermons::update_series(&state.db, id, &input).await {
        Ok(()) => {
            for warning in warnings {
                ctx.flash(&state, FlashLevel::Warning, warning).await?;
            }
            ctx.redirect_with(
                &state,
                FlashLevel::Success,
                "Sermon series updated successfully!",
                &format!("/sermon/series/{}", id),
            )
            .await
        }
        Err(e) => ctx.write_failed(&state, "updating sermon series", e, &action).await,
    }
}

/// POST /sermon/series/:id/delete
///
/// Sermons in the series are kept and unlinked.
pub async fn delete_series(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let series = sermons::find_series(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Sermon series"))?;
    if !ctx.owns(series.user_id) {
        return ctx
            .deny(&state, "You do not have permission to delete this sermon series.", SERIES_LIST)
            .await;
    }

    match sermons::delete_series(&state.db, id).await {
        Ok(unlinked) => {
            info!("Deleted sermon series {} ({} sermon(s) unlinked)", id, unlinked);
            ctx.redirect_with(
                &state,
                FlashLevel::Success,
                "Sermon series deleted successfully!",
                SERIES_LIST,
            )
            .await
        }
        Err(e) => ctx.write_failed(&state, "deleting sermon series", e, SERIES_LIST).await,
    }
}

/// Sermon routes
pub fn sermon_routes() -> Router<AppState> {
    Router::new()
        .route("/sermon", get(index_redirect))
        .route("/sermon/", get(index))
        .route("/sermon/build", get(build_form).post(build))
        .route("/sermon/my_sermons", get(my_sermons))
        .route("/sermon/sermon/:id", get(view_sermon))
        .route("/sermon/sermon/:id/edit", get(edit_sermon_form).post(update_sermon))
        .route("/sermon/sermon/:id/delete", post(delete_sermon))
        .route("/sermon/sermon/add_to_series/:id", post(add_to_series))
        .route("/sermon/api/generate_outline", post(generate_outline))
        .route("/sermon/api/suggest_illustrations", post(suggest_illustrations))
        .route("/sermon/series", get(series_list))
        .route("/sermon/series/new", get(new_series_form).post(create_series))
        .route("/sermon/series/:id", get(view_series))
        .route("/sermon/series/:id/edit", get(edit_series_form).post(update_series))
        .route("/sermon/series/:id/delete", post(delete_series))
}
