//! Home, dashboard, profile, user guide and the 404 page

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use super::context::RequestContext;
use crate::db::users;
use crate::error::AppResult;
use crate::views::{self, Page};
use crate::AppState;

/// GET /
pub async fn home(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    ctx.render(&state, views::pages::home_page(ctx.user.as_ref())).await
}

/// GET /dashboard
pub async fn dashboard(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    let user = ctx.require_user()?;
    let activity = users::user_activity(&state.db, user.id).await?;
    ctx.render(&state, views::pages::dashboard_page(user, &activity)).await
}

/// GET /profile
pub async fn profile(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    let user = ctx.require_user()?;
    ctx.render(&state, views::pages::profile_page(user)).await
}

/// GET /user_guide
pub async fn user_guide(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    ctx.render(&state, views::pages::user_guide_page()).await
}

/// Fallback for unknown paths
pub async fn not_found(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    let page = Page::new(
        "Page Not Found",
        r#"<p>The page you requested does not exist.</p><p><a href="/">Return home</a></p>"#,
    );
    let response = ctx.render(&state, page).await?;
    Ok((StatusCode::NOT_FOUND, response).into_response())
}

/// Home, dashboard, profile and guide routes
pub fn pages_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/dashboard", get(dashboard))
        .route("/profile", get(profile))
        .route("/user_guide", get(user_guide))
}
