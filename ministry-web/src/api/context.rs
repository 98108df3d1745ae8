//! Per-request session context
//!
//! The session layer resolves the session cookie once per request and
//! stores a [`SessionHandle`] in the request extensions. Visitors without a
//! cookie get a stored session (and a cookie) only when a flash is queued. Handlers take a [`RequestContext`], which adds
//! the logged-in user, and use it for flashes, ownership checks and page
//! rendering.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap, HeaderValue},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
};
use ministry_common::db::{Session, User};
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::db::{sessions, users};
use crate::error::{AppError, AppResult};
use crate::views::{self, Page};
use crate::AppState;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "ministry_session";

/// Session resolved by [`session_middleware`]
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub user_id: Option<i64>,
    slot: Arc<Mutex<SessionSlot>>,
}

#[derive(Debug, Default)]
struct SessionSlot {
    id: Option<i64>,
    /// Token of a session created during this request
    issued_token: Option<String>,
}

impl SessionHandle {
    fn stored(session: &Session) -> Self {
        Self {
            user_id: session.user_id,
            slot: Arc::new(Mutex::new(SessionSlot {
                id: Some(session.id),
                issued_token: None,
            })),
        }
    }

    fn unstored() -> Self {
        Self {
            user_id: None,
            slot: Arc::new(Mutex::new(SessionSlot::default())),
        }
    }

    /// Stored session id, if any
    pub async fn id(&self) -> Option<i64> {
        self.slot.lock().await.id
    }

    /// Stored session id, creating an anonymous session on first use
    pub async fn ensure(&self, state: &AppState) -> ministry_common::Result<i64> {
        let mut slot = self.slot.lock().await;
        if let Some(id) = slot.id {
            return Ok(id);
        }

        let (session, token) = sessions::create_session(&state.db, None, state.config.session_ttl).await?;
        debug!("Created anonymous session {}", session.id);
        slot.id = Some(session.id);
        slot.issued_token = Some(token);
        Ok(session.id)
    }

    async fn issued_token(&self) -> Option<String> {
        self.slot.lock().await.issued_token.clone()
    }
}

/// Flash message severity; doubles as the CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Info => "info",
            FlashLevel::Warning => "warning",
            FlashLevel::Danger => "danger",
        }
    }
}

/// Extract a cookie value from request headers
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value for a session token
pub fn session_cookie(token: &str, max_age: chrono::Duration) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        token,
        max_age.num_seconds().max(0)
    )
}

/// Resolve the session cookie for every page request
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let existing = match cookie_value(request.headers(), SESSION_COOKIE) {
        Some(token) => match sessions::find_active_session(&state.db, &token).await {
            Ok(found) => found,
            Err(e) => return AppError::from(e).into_response(),
        },
        None => None,
    };

    let handle = match existing {
        Some(session) => SessionHandle::stored(&session),
        None => SessionHandle::unstored(),
    };
    request.extensions_mut().insert(handle.clone());

    let mut response = next.run(request).await;

    // Handlers that rotate the session set their own cookie
    if let Some(token) = handle.issued_token().await {
        if !response.headers().contains_key(header::SET_COOKIE) {
            match HeaderValue::from_str(&session_cookie(&token, state.config.session_ttl)) {
                Ok(value) => {
                    response.headers_mut().append(header::SET_COOKIE, value);
                }
                Err(e) => error!("Invalid session cookie header: {}", e),
            }
        }
    }

    response
}

/// Session, current user and request path for a handler
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub session: SessionHandle,
    pub user: Option<User>,
    /// Path and query of the current request
    pub path: String,
}

#[async_trait]
impl FromRequestParts<AppState> for RequestContext {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<SessionHandle>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer not installed".to_string()))?;

        let user = match session.user_id {
            Some(id) => users::find_user(&state.db, id).await?,
            None => None,
        };

        let path = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());

        Ok(Self { session, user, path })
    }
}

impl RequestContext {
    /// The logged-in user, or a redirect to the login page
    pub fn require_user(&self) -> AppResult<&User> {
        self.user.as_ref().ok_or_else(|| AppError::LoginRequired {
            next: self.path.clone(),
        })
    }

    /// The logged-in administrator
    pub fn require_admin(&self) -> AppResult<&User> {
        let user = self.require_user()?;
        if user.is_admin() {
            Ok(user)
        } else {
            warn!("User {} denied admin page {}", user.username, self.path);
            Err(AppError::Forbidden(
                "You need administrator rights to manage doctrine records.".to_string(),
            ))
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }

    /// True when the current user owns a record
    pub fn owns(&self, owner_id: i64) -> bool {
        self.user_id() == Some(owner_id)
    }

    /// Queue a flash for the next rendered page
    pub async fn flash(&self, state: &AppState, level: FlashLevel, message: &str) -> AppResult<()> {
        let session_id = self.session.ensure(state).await?;
        sessions::push_flash(&state.db, session_id, level.as_str(), message).await?;
        Ok(())
    }

    /// Flash then redirect (303)
    pub async fn redirect_with(
        &self,
        state: &AppState,
        level: FlashLevel,
        message: &str,
        to: &str,
    ) -> AppResult<Response> {
        self.flash(state, level, message).await?;
        Ok(Redirect::to(to).into_response())
    }

    /// Refuse access to another user's record
    pub async fn deny(&self, state: &AppState, message: &str, to: &str) -> AppResult<Response> {
        warn!("User {:?} denied {}", self.user_id(), self.path);
        self.redirect_with(state, FlashLevel::Danger, message, to).await
    }

    /// Report a failed write: log the cause, flash a generic message, redirect
    pub async fn write_failed(
        &self,
        state: &AppState,
        action: &str,
        cause: impl std::fmt::Display,
        to: &str,
    ) -> AppResult<Response> {
        error!("Error {}: {}", action, cause);
        self.redirect_with(
            state,
            FlashLevel::Danger,
            &format!("Error {}. Please try again.", action),
            to,
        )
        .await
    }

    /// Render a page inside the site layout, consuming pending flashes
    pub async fn render(&self, state: &AppState, page: Page) -> AppResult<Response> {
        let flashes = match self.session.id().await {
            Some(session_id) => sessions::take_flashes(&state.db, session_id).await?,
            None => Vec::new(),
        };
        Ok(Html(views::layout(&page, self.user.as_ref(), &flashes)).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value_parsing() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; ministry_session=abc123 ; other=1"),
        );
        assert_eq!(cookie_value(&headers, SESSION_COOKIE), Some("abc123".to_string()));
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("tok", chrono::Duration::hours(1));
        assert!(cookie.starts_with("ministry_session=tok;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=3600"));
    }
}
