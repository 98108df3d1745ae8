//! ministry-web library - pastoral ministry web application
//!
//! Doctrine comparison, sermon and series planning, counseling notes,
//! a resource library with catalog import, and apologetics material,
//! served as HTML pages over a SQLite store.

use std::sync::Arc;
use std::time::Instant;

use axum::{middleware, Router};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod error;
pub mod seed;
pub mod services;
pub mod views;

pub use error::{ApiError, AppError};

/// Runtime options handlers need
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Lifetime of a browser session
    pub session_ttl: chrono::Duration,
    /// Denomination pinned first in the anchor comparison
    pub anchor_denomination: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_ttl: chrono::Duration::hours(24 * 7),
            anchor_denomination: "Amillennial".to_string(),
        }
    }
}

impl From<&ministry_common::config::Settings> for AppConfig {
    fn from(settings: &ministry_common::config::Settings) -> Self {
        // Capped at ten years
        let hours = settings.session_ttl_hours.min(24 * 365 * 10) as i64;
        Self {
            session_ttl: chrono::Duration::hours(hours),
            anchor_denomination: settings.anchor_denomination.clone(),
        }
    }
}

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    /// Server start time, for uptime reporting
    pub startup_time: Instant,
}

impl AppState {
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
            startup_time: Instant::now(),
        }
    }
}

/// Build application router
///
/// Every page runs behind the session layer so flash messages work for
/// anonymous visitors. `/health` sits outside it and never creates sessions.
pub fn build_router(state: AppState) -> Router {
    let pages = Router::new()
        .merge(api::pages_routes())
        .merge(api::auth_routes())
        .merge(api::doctrine_routes())
        .merge(api::sermon_routes())
        .merge(api::counseling_routes())
        .merge(api::resources_routes())
        .merge(api::apologetics_routes())
        .fallback(api::pages::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::session_middleware,
        ));

    Router::new()
        .merge(pages)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
