//! Counseling session notes and suggestion endpoints

use axum::{
    extract::{Path, State},
    response::{Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use ministry_common::fields::split_list;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::context::{FlashLevel, RequestContext};
use super::form::FormFields;
use crate::db::counseling::{self, CounselingInput};
use crate::error::{ApiError, ApiResult, AppError, AppResult};
use crate::services::suggestions;
use crate::views::counseling::{self as pages, SessionFormValues};
use crate::AppState;

const MY_SESSIONS: &str = "/counseling/my_sessions";

/// GET /counseling/
pub async fn index(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    ctx.render(&state, pages::index_page(ctx.user.is_some())).await
}

pub async fn index_redirect() -> Redirect {
    Redirect::permanent("/counseling/")
}

fn session_values(form: &FormFields) -> SessionFormValues {
    SessionFormValues {
        title: form.text("title"),
        description: form.text("description"),
        topic: form.text("topic"),
        notes: form.text("notes"),
        scripture_references: form.text("scripture_references"),
    }
}

fn session_input(values: &SessionFormValues) -> CounselingInput {
    CounselingInput {
        title: values.title.clone(),
        description: values.description.clone(),
        topic: values.topic.clone(),
        notes: values.notes.clone(),
        scripture_references: split_list(&values.scripture_references).join(", "),
    }
}

/// GET /counseling/session/new
pub async fn new_session_form(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    ctx.require_user()?;
    let page = pages::session_form_page(
        "New Counseling Session",
        "/counseling/session/new",
        &SessionFormValues::default(),
    );
    ctx.render(&state, page).await
}

/// POST /counseling/session/new
pub async fn create_session(
    State(state): State<AppState>,
    ctx: RequestContext,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    let user_id = ctx.require_user()?.id;
    let values = session_values(&form);

    if values.title.is_empty() || values.topic.is_empty() {
        ctx.flash(&state, FlashLevel::Danger, "Title and Topic are required.").await?;
        let page = pages::session_form_page("New Counseling Session", "/counseling/session/new", &values);
        return ctx.render(&state, page).await;
    }

    match counseling::create_counseling_session(&state.db, user_id, &session_input(&values)).await {
        Ok(id) => {
            info!("User {} created counseling session {}", user_id, id);
            ctx.redirect_with(
                &state,
                FlashLevel::Success,
                "Counseling session created successfully!",
                &format!("/counseling/session/{}", id),
            )
            .await
        }
        Err(e) => {
            ctx.write_failed(&state, "creating counseling session", e, "/counseling/session/new")
                .await
        }
    }
}

/// GET /counseling/my_sessions
pub async fn my_sessions(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    let user_id = ctx.require_user()?.id;
    let list = counseling::counseling_sessions_for_user(&state.db, user_id).await?;
    ctx.render(&state, pages::my_sessions_page(&list)).await
}

/// GET /counseling/session/:id
pub async fn view_session(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let session = counseling::find_counseling_session(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Counseling session"))?;
    if !ctx.owns(session.user_id) {
        return ctx
            .deny(&state, "You do not have permission to view this counseling session.", MY_SESSIONS)
            .await;
    }

    let suggested = suggestions::scriptures_for_topic(&session.topic);
    let advice = suggestions::advice_for_topic(&session.topic);
    ctx.render(&state, pages::session_page(&session, suggested, advice)).await
}

/// GET /counseling/session/:id/edit
pub async fn edit_session_form(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let session = counseling::find_counseling_session(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Counseling session"))?;
    if !ctx.owns(session.user_id) {
        return ctx
            .deny(&state, "You do not have permission to edit this counseling session.", MY_SESSIONS)
            .await;
    }

    let action = format!("/counseling/session/{}/edit", id);
    let page = pages::session_form_page(
        "Edit Counseling Session",
        &action,
        &SessionFormValues::from_session(&session),
    );
    ctx.render(&state, page).await
}

/// POST /counseling/session/:id/edit
pub async fn update_session(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let session = counseling::find_counseling_session(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Counseling session"))?;
    if !ctx.owns(session.user_id) {
        return ctx
            .deny(&state, "You do not have permission to edit this counseling session.", MY_SESSIONS)
            .await;
    }

    let action = format!("/counseling/session/{}/edit", id);
    let values = session_values(&form);
    if values.title.is_empty() || values.topic.is_empty() {
        ctx.flash(&state, FlashLevel::Danger, "Title and Topic are required.").await?;
        let page = pages::session_form_page("Edit Counseling Session", &action, &values);
        return ctx.render(&state, page).await;
    }

    match counseling::update_counseling_session(&state.db, id, &session_input(&values)).await {
        Ok(()) => {
            ctx.redirect_with(
                &state,
                FlashLevel::Success,
                "Counseling session updated successfully!",
                &format!("/counseling/session/{}", id),
            )
            .await
        }
        Err(e) => ctx.write_failed(&state, "updating counseling session", e, &action).await,
    }
}

/// POST /counseling/session/:id/delete
pub async fn delete_session(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let session = counseling::find_counseling_session(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Counseling session"))?;
    if !ctx.owns(session.user_id) {
        return ctx
            .deny(&state, "You do not have permission to delete this counseling session.", MY_SESSIONS)
            .await;
    }

    match counseling::delete_counseling_session(&state.db, id).await {
        Ok(()) => {
            info!("Deleted counseling session {}", id);
            ctx.redirect_with(
                &state,
                FlashLevel::Success,
                "Counseling session deleted successfully!",
                MY_SESSIONS,
            )
            .await
        }
        Err(e) => ctx.write_failed(&state, "deleting counseling session", e, MY_SESSIONS).await,
    }
}

#[derive(Debug, Deserialize)]
pub struct TopicRequest {
    #[serde(default)]
    pub topic: Option<String>,
    /// Free-text description; accepted but not used for the canned advice
    #[serde(default)]
    pub situation: Option<String>,
}

impl TopicRequest {
    fn topic(&self) -> ApiResult<&str> {
        self.topic
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::BadRequest("Topic is required".to_string()))
    }
}

/// POST /counseling/api/suggest_scriptures
pub async fn suggest_scriptures(
    ctx: RequestContext,
    Json(request): Json<TopicRequest>,
) -> ApiResult<Json<Value>> {
    if ctx.user.is_none() {
        return Err(ApiError::Unauthorized);
    }
    let topic = request.topic()?;

    Ok(Json(json!({
        "success": true,
        "scriptures": suggestions::scriptures_for_topic(topic),
    })))
}

/// POST /counseling/api/counseling_advice
pub async fn counseling_advice(
    ctx: RequestContext,
    Json(request): Json<TopicRequest>,
) -> ApiResult<Json<Value>> {
    if ctx.user.is_none() {
        return Err(ApiError::Unauthorized);
    }
    let topic = request.topic()?;

    Ok(Json(json!({
        "success": true,
        "advice": suggestions::advice_for_topic(topic),
    })))
}

/// Counseling routes
pub fn counseling_routes() -> Router<AppState> {
    Router::new()
        .route("/counseling", get(index_redirect))
        .route("/counseling/", get(index))
        .route("/counseling/session/new", get(new_session_form).post(create_session))
        .route("/counseling/my_sessions", get(my_sessions))
        .route("/counseling/session/:id", get(view_session))
        .route("/counseling/session/:id/edit", get(edit_session_form).post(update_session))
        .route("/counseling/session/:id/delete", post(delete_session))
        .route("/counseling/api/suggest_scriptures", post(suggest_scriptures))
        .route("/counseling/api/counseling_advice", post(counseling_advice))
}
