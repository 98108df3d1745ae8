//! Registration, login, logout and health

mod helpers;

use axum::http::StatusCode;
use helpers::{TestApp, PASSWORD};
use ministry_web::db::sessions;

#[tokio::test]
async fn test_health_reports_module_without_session() {
    let app = TestApp::new().await;

    let response = app.get("/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.cookie.is_none(), "/health must not create sessions");

    let json = response.json();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["module"], "ministry-web");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["git_hash"], env!("GIT_HASH"));
    assert!(!json["build_profile"].as_str().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_anonymous_page_view_stores_no_session() {
    let app = TestApp::new().await;

    let response = app.get("/", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.cookie.is_none());
    assert!(response.body.contains("/auth/login"));
    assert_eq!(sessions::count_sessions(&app.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_cookieless_traffic_keeps_session_table_bounded() {
    let app = TestApp::new().await;

    for _ in 0..50 {
        app.get("/no-such-page", None).await;
        app.post_json(
            "/sermon/api/generate_outline",
            serde_json::json!({"scripture": "John 1:1"}),
            None,
        )
        .await;
    }
    assert_eq!(sessions::count_sessions(&app.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_anonymous_flash_creates_session_once() {
    let app = TestApp::new().await;

    let response = app
        .post_form("/auth/login", &[("username", "nobody"), ("password", "x")], None)
        .await;
    let token = response.cookie.expect("flash needs a stored session");
    assert_eq!(sessions::count_sessions(&app.pool).await.unwrap(), 1);

    // The same cookie is reused for the next flash
    let response = app
        .post_form("/auth/login", &[("username", "nobody"), ("password", "x")], Some(&token))
        .await;
    assert!(response.cookie.is_none());
    assert!(response.body.contains("Invalid username or password."));
    assert_eq!(sessions::count_sessions(&app.pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/auth/register",
            &[
                ("username", "ruth"),
                ("email", "ruth@example.org"),
                ("first_name", "Ruth"),
                ("password", PASSWORD),
                ("password2", PASSWORD),
            ],
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/auth/login"));

    let token = app.login("ruth").await;
    let dashboard = app.get("/dashboard", Some(&token)).await;
    assert_eq!(dashboard.status, StatusCode::OK);
    assert!(dashboard.body.contains("Logged in successfully!"));
}

#[tokio::test]
async fn test_register_rejects_mismatched_passwords() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/auth/register",
            &[
                ("username", "ruth"),
                ("email", "ruth@example.org"),
                ("password", PASSWORD),
                ("password2", "something else"),
            ],
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Passwords do not match"));
    assert!(response.body.contains("ruth@example.org"), "form keeps entered values");
}

#[tokio::test]
async fn test_register_rejects_duplicate_username() {
    let app = TestApp::new().await;
    app.create_user("naomi").await;

    let response = app
        .post_form(
            "/auth/register",
            &[
                ("username", "naomi"),
                ("email", "other@example.org"),
                ("password", PASSWORD),
                ("password2", PASSWORD),
            ],
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("User with that username or email already exists."));
}

#[tokio::test]
async fn test_wrong_password_rerenders_and_stays_anonymous() {
    let app = TestApp::new().await;
    app.create_user("boaz").await;

    let response = app
        .post_form(
            "/auth/login",
            &[("username", "boaz"), ("password", "not the password")],
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Invalid username or password."));
    assert!(response.body.contains(r#"value="boaz""#));

    let token = response.cookie.expect("anonymous session cookie");
    let dashboard = app.get("/dashboard", Some(&token)).await;
    assert_eq!(dashboard.status, StatusCode::SEE_OTHER);
    assert_eq!(
        dashboard.location.as_deref(),
        Some("/auth/login?next=%2Fdashboard")
    );
}

#[tokio::test]
async fn test_login_returns_to_requested_page() {
    let app = TestApp::new().await;
    app.create_user("lydia").await;

    let response = app.get("/sermon/build", None).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(
        response.location.as_deref(),
        Some("/auth/login?next=%2Fsermon%2Fbuild")
    );

    let response = app
        .post_form(
            "/auth/login",
            &[
                ("username", "lydia"),
                ("password", PASSWORD),
                ("next", "/sermon/build"),
            ],
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/sermon/build"));
}

#[tokio::test]
async fn test_login_ignores_external_next() {
    let app = TestApp::new().await;
    app.create_user("lydia").await;

    let response = app
        .post_form(
            "/auth/login",
            &[
                ("username", "lydia"),
                ("password", PASSWORD),
                ("next", "//evil.example/"),
            ],
            None,
        )
        .await;
    assert_eq!(response.location.as_deref(), Some("/"));
}

#[tokio::test]
async fn test_logout_rotates_session() {
    let app = TestApp::new().await;
    let (_, token) = app.user_session("silas").await;

    let response = app.post_form("/auth/logout", &[], Some(&token)).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/auth/login"));
    let anonymous = response.cookie.expect("new anonymous session");
    assert_ne!(anonymous, token);

    // The old token no longer resolves to a logged-in user
    let dashboard = app.get("/dashboard", Some(&token)).await;
    assert_eq!(dashboard.status, StatusCode::SEE_OTHER);

    let login_page = app.get("/auth/login", Some(&anonymous)).await;
    assert!(login_page.body.contains("You have been logged out."));
}

#[tokio::test]
async fn test_unknown_path_is_404_page() {
    let app = TestApp::new().await;

    let response = app.get("/no/such/page", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Page Not Found"));
}
