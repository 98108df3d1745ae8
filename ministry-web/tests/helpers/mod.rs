//! Shared fixtures for ministry-web integration tests
//!
//! Each test gets its own in-memory database and router. Requests are
//! driven through `tower::ServiceExt::oneshot`; the session cookie is
//! carried by hand.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use ministry_common::auth::{hash_password, Role};
use ministry_common::db::init_memory_database;
use ministry_web::api::context::SESSION_COOKIE;
use ministry_web::db::users::{self, NewUser};
use ministry_web::{build_router, AppConfig, AppState};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const PASSWORD: &str = "correct horse battery";

pub struct TestApp {
    pub pool: SqlitePool,
    router: Router,
}

/// Status, headers and body text of a response
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub cookie: Option<String>,
    pub body: String,
}

impl TestResponse {
    async fn read(response: Response<Body>) -> Self {
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let cookie = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(|v| {
                v.split(';')
                    .next()
                    .and_then(|pair| pair.strip_prefix(&format!("{}=", SESSION_COOKIE)))
                    .map(str::to_string)
            });
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8_lossy(&bytes).to_string();
        Self {
            status,
            location,
            cookie,
            body,
        }
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// `a=1&b=2` from pairs
pub fn form_body(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = init_memory_database().await.unwrap();
        let state = AppState::new(pool.clone(), AppConfig::default());
        Self {
            pool,
            router: build_router(state),
        }
    }

    /// App with the reference content seeded
    pub async fn seeded() -> Self {
        let app = Self::new().await;
        ministry_web::seed::seed_all(&app.pool, Some("admin password 123"))
            .await
            .unwrap();
        app
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        TestResponse::read(response).await
    }

    fn builder(method: &str, uri: &str, cookie: Option<&str>) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = cookie {
            builder = builder.header(header::COOKIE, format!("{}={}", SESSION_COOKIE, token));
        }
        builder
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        let request = Self::builder("GET", uri, cookie).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_form(&self, uri: &str, pairs: &[(&str, &str)], cookie: Option<&str>) -> TestResponse {
        let request = Self::builder("POST", uri, cookie)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form_body(pairs)))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, json: serde_json::Value, cookie: Option<&str>) -> TestResponse {
        let request = Self::builder("POST", uri, cookie)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Insert a user directly; returns the id
    pub async fn create_user(&self, username: &str) -> i64 {
        users::create_user(
            &self.pool,
            &NewUser {
                username: username.to_string(),
                email: format!("{}@example.org", username),
                password_hash: hash_password(PASSWORD).unwrap(),
                first_name: String::new(),
                last_name: String::new(),
                role: Role::User,
            },
        )
        .await
        .unwrap()
    }

    /// Log in through the form and return the session token
    pub async fn login(&self, username: &str) -> String {
        self.login_as(username, PASSWORD).await
    }

    pub async fn login_as(&self, username: &str, password: &str) -> String {
        let response = self
            .post_form(
                "/auth/login",
                &[("username", username), ("password", password)],
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "login failed for {}", username);
        response.cookie.expect("login sets a session cookie")
    }

    /// Create and log in a user; returns (user id, session token)
    pub async fn user_session(&self, username: &str) -> (i64, String) {
        let id = self.create_user(username).await;
        let token = self.login(username).await;
        (id, token)
    }
}
