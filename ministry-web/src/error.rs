//! Error types for ministry-web
//!
//! [`AppError`] renders HTML error pages for browser routes; [`ApiError`]
//! renders `{"success": false, "message": ...}` for the JSON endpoints.
//! Server-side failures are logged with full detail and shown to the
//! user with a generic message only.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::views;

const GENERIC_FAILURE: &str = "Something went wrong while processing your request.";

/// Error type for HTML handlers
#[derive(Debug, Error)]
pub enum AppError {
    /// Record or page not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed request (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Authenticated but not allowed (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Page needs a logged-in user; redirects to the login form
    #[error("Login required for {next}")]
    LoginRequired { next: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),

    /// ministry-common error
    #[error("Common error: {0}")]
    Common(#[from] ministry_common::Error),
}

impl AppError {
    pub fn not_found(what: &str) -> Self {
        AppError::NotFound(format!("{} not found", what))
    }
}

/// Login URL that returns to `next` afterwards. Only local paths are kept.
pub fn login_redirect_target(next: &str) -> String {
    if is_local_path(next) && next != "/" {
        format!("/auth/login?next={}", urlencoding::encode(next))
    } else {
        "/auth/login".to_string()
    }
}

/// True for `/path` but not `//host` or absolute URLs
pub fn is_local_path(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//") && !target.contains('\\')
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::LoginRequired { next } => {
                return Redirect::to(&login_redirect_target(&next)).into_response();
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::Common(ministry_common::Error::NotFound(msg)) => (StatusCode::NOT_FOUND, msg),
            AppError::Common(ministry_common::Error::InvalidInput(msg)) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            other => {
                error!("Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
        };

        (status, Html(views::error_page(status, &message))).into_response()
    }
}

/// Result type for HTML handlers
pub type AppResult<T> = Result<T, AppError>;

/// Error type for JSON endpoints
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// No logged-in user (401)
    #[error("Authentication required")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// ministry-common error
    #[error("Common error: {0}")]
    Common(#[from] ministry_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Please log in to use this feature".to_string(),
            ),
            ApiError::Common(ministry_common::Error::NotFound(msg)) => (StatusCode::NOT_FOUND, msg),
            ApiError::Common(ministry_common::Error::InvalidInput(msg)) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            other => {
                error!("API request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
        };

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Result type for JSON handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_redirect_keeps_local_paths_only() {
        assert_eq!(
            login_redirect_target("/sermon/build"),
            "/auth/login?next=%2Fsermon%2Fbuild"
        );
        assert_eq!(login_redirect_target("//evil.example"), "/auth/login");
        assert_eq!(login_redirect_target("https://evil.example"), "/auth/login");
        assert_eq!(login_redirect_target("/"), "/auth/login");
    }

    #[test]
    fn test_login_redirect_encodes_query() {
        assert_eq!(
            login_redirect_target("/resources/library?topic=Faith Crisis"),
            "/auth/login?next=%2Fresources%2Flibrary%3Ftopic%3DFaith%20Crisis"
        );
    }

    #[test]
    fn test_login_required_is_redirect() {
        let response = AppError::LoginRequired {
            next: "/doctrine/compare".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[test]
    fn test_common_not_found_maps_to_404() {
        let response =
            AppError::Common(ministry_common::Error::NotFound("Sermon 9".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
