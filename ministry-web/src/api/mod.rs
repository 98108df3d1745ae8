//! HTTP handlers for ministry-web

pub mod apologetics;
pub mod auth;
pub mod context;
pub mod counseling;
pub mod doctrine;
pub mod form;
pub mod health;
pub mod pages;
pub mod resources;
pub mod sermon;

pub use apologetics::apologetics_routes;
pub use auth::auth_routes;
pub use context::session_middleware;
pub use counseling::counseling_routes;
pub use doctrine::doctrine_routes;
pub use health::health_routes;
pub use pages::pages_routes;
pub use resources::resources_routes;
pub use sermon::sermon_routes;
