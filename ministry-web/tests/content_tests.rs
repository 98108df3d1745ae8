//! Sermon series, resource import and the JSON suggestion endpoints

mod helpers;

use axum::http::StatusCode;
use helpers::TestApp;
use ministry_web::db::resources;
use ministry_web::db::sermons::{self, SeriesInput, SermonInput};
use serde_json::json;

#[tokio::test]
async fn test_deleting_series_unlinks_sermons() {
    let app = TestApp::new().await;
    let (user_id, token) = app.user_session("barnabas").await;

    let series_id = sermons::create_series(
        &app.pool,
        user_id,
        &SeriesInput {
            title: "Romans".to_string(),
            ..SeriesInput::default()
        },
    )
    .await
    .unwrap();
    let sermon_id = sermons::create_sermon(
        &app.pool,
        user_id,
        &SermonInput {
            title: "Justified".to_string(),
            scripture_passage: "Romans 5:1".to_string(),
            ..SermonInput::default()
        },
    )
    .await
    .unwrap();

    let response = app
        .post_form(
            &format!("/sermon/sermon/add_to_series/{}", sermon_id),
            &[("series_id", &series_id.to_string()), ("position", "1")],
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let sermon = sermons::find_sermon(&app.pool, sermon_id).await.unwrap().unwrap();
    assert_eq!(sermon.series_id, Some(series_id));
    assert_eq!(sermon.series_position, Some(1));

    let response = app
        .post_form(&format!("/sermon/series/{}/delete", series_id), &[], Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/sermon/series"));

    assert!(sermons::find_series(&app.pool, series_id).await.unwrap().is_none());
    let sermon = sermons::find_sermon(&app.pool, sermon_id).await.unwrap().unwrap();
    assert_eq!(sermon.series_id, None);
    assert_eq!(sermon.series_position, None);
}

#[tokio::test]
async fn test_cannot_attach_to_another_users_series() {
    let app = TestApp::new().await;
    let (owner, token) = app.user_session("barnabas").await;
    let other = app.create_user("mark").await;

    let foreign_series = sermons::create_series(
        &app.pool,
        other,
        &SeriesInput {
            title: "Acts".to_string(),
            ..SeriesInput::default()
        },
    )
    .await
    .unwrap();
    let sermon_id = sermons::create_sermon(
        &app.pool,
        owner,
        &SermonInput {
            title: "Pentecost".to_string(),
            scripture_passage: "Acts 2".to_string(),
            ..SermonInput::default()
        },
    )
    .await
    .unwrap();

    let response = app
        .post_form(
            &format!("/sermon/sermon/add_to_series/{}", sermon_id),
            &[("series_id", &foreign_series.to_string())],
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let sermon = sermons::find_sermon(&app.pool, sermon_id).await.unwrap().unwrap();
    assert_eq!(sermon.series_id, None);

    let view = app.get(&format!("/sermon/sermon/{}", sermon_id), Some(&token)).await;
    assert!(view.body.contains("Invalid sermon series selected."));
}

#[tokio::test]
async fn test_series_with_bad_date_is_saved_with_warning() {
    let app = TestApp::new().await;
    let (user_id, token) = app.user_session("barnabas").await;

    let response = app
        .post_form(
            "/sermon/series/new",
            &[("title", "Advent"), ("start_date", "12/01/2026")],
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let series = sermons::series_for_user(&app.pool, user_id).await.unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].start_date, None);

    let page = app.get(response.location.as_deref().unwrap(), Some(&token)).await;
    assert!(page.body.contains("Invalid start date format. Please use YYYY-MM-DD."));
}

#[tokio::test]
async fn test_sermon_requires_title_and_passage() {
    let app = TestApp::new().await;
    let (user_id, token) = app.user_session("barnabas").await;

    let response = app
        .post_form("/sermon/build", &[("title", "No passage")], Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Title and Scripture Passage are required."));
    assert!(sermons::sermons_for_user(&app.pool, user_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_import_twice_adds_nothing_second_time() {
    let app = TestApp::new().await;
    let (_, token) = app.user_session("luke").await;

    let first = app
        .post_form("/resources/import", &[("source", "all")], Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::SEE_OTHER);
    assert_eq!(first.location.as_deref(), Some("/resources/library"));
    let after_first = resources::count_resources(&app.pool).await.unwrap();
    assert!(after_first > 0);

    let library = app.get("/resources/library", Some(&token)).await;
    assert!(library.body.contains("e-Sword: added 1 resource(s), skipped 2 existing"));

    app.post_form("/resources/import", &[("source", "all")], Some(&token))
        .await;
    assert_eq!(resources::count_resources(&app.pool).await.unwrap(), after_first);

    let library = app.get("/resources/library", Some(&token)).await;
    assert!(library.body.contains("e-Sword: added 0 resource(s), skipped 3 existing"));
}

#[tokio::test]
async fn test_import_rejects_unknown_source() {
    let app = TestApp::new().await;
    let (_, token) = app.user_session("luke").await;

    let response = app
        .post_form("/resources/import", &[("source", "zotero")], Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/resources/import"));
    assert_eq!(resources::count_resources(&app.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_resource_search_api() {
    let app = TestApp::new().await;
    let (_, token) = app.user_session("luke").await;
    app.post_form("/resources/import", &[("source", "logos")], Some(&token))
        .await;

    let missing = app.get("/resources/api/search", None).await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.json()["success"], false);
    assert_eq!(missing.json()["message"], "Search term is required");

    let found = app.get("/resources/api/search?q=a", None).await;
    assert_eq!(found.status, StatusCode::OK);
    let json = found.json();
    assert_eq!(json["success"], true);
    let results = json["results"].as_array().unwrap();
    assert!(!results.is_empty());
    assert!(results.len() <= 10);
    assert!(results[0]["url"]
        .as_str()
        .unwrap()
        .starts_with("/resources/resource/"));
}

#[tokio::test]
async fn test_suggestion_endpoints_need_login() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/sermon/api/generate_outline", json!({"scripture": "John 1"}), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["success"], false);
}

#[tokio::test]
async fn test_sermon_outline_and_illustrations() {
    let app = TestApp::new().await;
    let (_, token) = app.user_session("apphia").await;

    let missing = app
        .post_json("/sermon/api/generate_outline", json!({"theme": "Hope"}), Some(&token))
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.json()["message"], "Scripture passage is required");

    let outline = app
        .post_json(
            "/sermon/api/generate_outline",
            json!({"scripture": "Romans 8:28"}),
            Some(&token),
        )
        .await;
    let json = outline.json();
    assert_eq!(json["success"], true);
    let sections = json["outline"].as_array().unwrap();
    assert_eq!(sections.len(), 5);
    assert_eq!(sections[0]["title"], "Introduction");

    let illustrations = app
        .post_json(
            "/sermon/api/suggest_illustrations",
            json!({"theme": "Hope"}),
            Some(&token),
        )
        .await;
    assert_eq!(illustrations.json()["illustrations"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_counseling_suggestions() {
    let app = TestApp::new().await;
    let (_, token) = app.user_session("onesimus").await;

    let scriptures = app
        .post_json(
            "/counseling/api/suggest_scriptures",
            json!({"topic": "Grief"}),
            Some(&token),
        )
        .await;
    let json = scriptures.json();
    assert_eq!(json["success"], true);
    assert_eq!(json["scriptures"][0], "Psalm 34:18");

    let fallback = app
        .post_json(
            "/counseling/api/suggest_scriptures",
            json!({"topic": "Gardening"}),
            Some(&token),
        )
        .await;
    assert_eq!(
        fallback.json()["scriptures"],
        json!(["John 3:16", "Romans 8:28", "Philippians 4:13"])
    );

    let missing = app
        .post_json("/counseling/api/counseling_advice", json!({}), Some(&token))
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.json()["message"], "Topic is required");
}

#[tokio::test]
async fn test_generate_apologetics_response() {
    let app = TestApp::seeded().await;
    let (_, token) = app.user_session("tertius").await;

    let objection = ministry_web::db::apologetics::list_objections(&app.pool, None)
        .await
        .unwrap()
        .into_iter()
        .next()
        .unwrap();

    let response = app
        .post_json(
            "/apologetics/api/generate_response",
            json!({"objection_id": objection.id}),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["success"], true);
    assert_eq!(
        json["response"]["title"],
        format!("Response to: {}", objection.title)
    );

    let missing = app
        .post_json(
            "/apologetics/api/generate_response",
            json!({"objection_id": 99999}),
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.json()["message"], "Objection not found");
}
