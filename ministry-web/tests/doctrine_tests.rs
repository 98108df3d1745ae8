//! Doctrine comparison over seeded denominations

mod helpers;

use axum::http::StatusCode;
use helpers::TestApp;
use ministry_web::db::doctrine::{self, BeliefInput};
use ministry_web::seed::data::BELIEFS;
use ministry_web::services::comparison::{self, ComparisonError, ComparisonRequest};
use sqlx::SqlitePool;

async fn denomination_id(pool: &SqlitePool, name: &str) -> i64 {
    doctrine::find_denomination_by_name(pool, name)
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("{} not seeded", name))
        .id
}

fn seeded_summary(denomination: &str, topic: &str) -> &'static str {
    BELIEFS
        .iter()
        .find(|b| b.denomination == denomination && b.topic == topic)
        .map(|b| b.summary)
        .unwrap()
}

#[tokio::test]
async fn test_baptist_and_lutheran_baptism_verbatim() {
    let app = TestApp::seeded().await;
    let baptist = denomination_id(&app.pool, "Baptist").await;
    let lutheran = denomination_id(&app.pool, "Lutheran").await;

    let request = ComparisonRequest::new(vec![baptist, lutheran], vec!["Baptism".to_string()]).unwrap();
    let matrix = comparison::compare(&app.pool, &request).await.unwrap();

    assert_eq!(matrix.cell_count(), 2);
    assert_eq!(matrix.denominations(), vec!["Baptist", "Lutheran"]);
    assert_eq!(
        matrix.get("Baptism", "Baptist").unwrap().summary,
        seeded_summary("Baptist", "Baptism")
    );
    assert_eq!(
        matrix.get("Baptism", "Lutheran").unwrap().summary,
        seeded_summary("Lutheran", "Baptism")
    );
}

#[tokio::test]
async fn test_every_pair_has_one_entry_with_placeholders() {
    let app = TestApp::seeded().await;
    let catholic = denomination_id(&app.pool, "Roman Catholic").await;
    let baptist = denomination_id(&app.pool, "Baptist").await;
    let methodist = denomination_id(&app.pool, "Methodist").await;

    let topics = vec![
        "Salvation".to_string(),
        "Baptism".to_string(),
        "Church Music".to_string(),
    ];
    let request = ComparisonRequest::new(vec![catholic, baptist, methodist], topics).unwrap();
    let matrix = comparison::compare(&app.pool, &request).await.unwrap();

    assert_eq!(matrix.cell_count(), 9);
    for name in ["Roman Catholic", "Baptist", "Methodist"] {
        let entry = matrix.get("Church Music", name).unwrap();
        assert_eq!(entry.summary, "No information available");
        assert_eq!(entry.scripture_references, "");
    }
}

#[tokio::test]
async fn test_lowest_id_belief_wins() {
    let app = TestApp::seeded().await;
    let baptist = denomination_id(&app.pool, "Baptist").await;
    let lutheran = denomination_id(&app.pool, "Lutheran").await;

    doctrine::create_belief(
        &app.pool,
        baptist,
        &BeliefInput {
            topic: "Baptism".to_string(),
            summary: "A later duplicate".to_string(),
            scripture_references: String::new(),
        },
    )
    .await
    .unwrap();

    let request = ComparisonRequest::new(vec![baptist, lutheran], vec!["Baptism".to_string()]).unwrap();
    let matrix = comparison::compare(&app.pool, &request).await.unwrap();
    assert_eq!(
        matrix.get("Baptism", "Baptist").unwrap().summary,
        seeded_summary("Baptist", "Baptism")
    );
}

#[tokio::test]
async fn test_unknown_denomination_is_not_found() {
    let app = TestApp::seeded().await;
    let baptist = denomination_id(&app.pool, "Baptist").await;

    let request = ComparisonRequest::new(vec![baptist, 9999], vec!["Baptism".to_string()]).unwrap();
    let err = comparison::compare(&app.pool, &request).await.unwrap_err();
    assert!(matches!(err, ComparisonError::UnknownDenomination(9999)));
}

#[tokio::test]
async fn test_single_denomination_rejected_over_http() {
    let app = TestApp::seeded().await;
    let (_, token) = app.user_session("priscilla").await;
    let baptist = denomination_id(&app.pool, "Baptist").await.to_string();

    let response = app
        .post_form(
            "/doctrine/compare",
            &[("denominations", &baptist), ("topics", "Baptism")],
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/doctrine/compare"));

    let form = app.get("/doctrine/compare", Some(&token)).await;
    assert!(form.body.contains("Please select at least two denominations to compare."));
}

#[tokio::test]
async fn test_compare_and_save_round_trip() {
    let app = TestApp::seeded().await;
    let (user_id, token) = app.user_session("aquila").await;
    let baptist = denomination_id(&app.pool, "Baptist").await.to_string();
    let lutheran = denomination_id(&app.pool, "Lutheran").await.to_string();

    let results = app
        .post_form(
            "/doctrine/compare",
            &[
                ("denominations", &baptist),
                ("denominations", &lutheran),
                ("topics", "Baptism"),
            ],
            Some(&token),
        )
        .await;
    assert_eq!(results.status, StatusCode::OK);
    assert!(results.body.contains("Ordinance (symbolic act) for believers only"));
    assert!(results.body.contains("/doctrine/save_comparison"));

    let saved = app
        .post_form(
            "/doctrine/save_comparison",
            &[
                ("title", "Baptism views"),
                ("denominations", &baptist),
                ("denominations", &lutheran),
                ("topics", "Baptism"),
            ],
            Some(&token),
        )
        .await;
    assert_eq!(saved.status, StatusCode::SEE_OTHER);
    let location = saved.location.unwrap();
    assert!(location.starts_with("/doctrine/comparison/"));

    let list = ministry_web::db::comparisons::comparisons_for_user(&app.pool, user_id)
        .await
        .unwrap();
    assert_eq!(list.len(), 1);
    let ids = ministry_web::db::comparisons::comparison_denomination_ids(&app.pool, list[0].id)
        .await
        .unwrap();
    assert_eq!(
        ids,
        vec![baptist.parse::<i64>().unwrap(), lutheran.parse::<i64>().unwrap()]
    );

    let view = app.get(&location, Some(&token)).await;
    assert_eq!(view.status, StatusCode::OK);
    assert!(view.body.contains("Comparison saved successfully"));
    assert!(view.body.contains("Baptism views"));
    assert!(view.body.contains("Ordinance (symbolic act) for believers only"));
}

#[tokio::test]
async fn test_save_requires_title() {
    let app = TestApp::seeded().await;
    let (user_id, token) = app.user_session("aquila").await;
    let baptist = denomination_id(&app.pool, "Baptist").await.to_string();
    let lutheran = denomination_id(&app.pool, "Lutheran").await.to_string();

    let response = app
        .post_form(
            "/doctrine/save_comparison",
            &[
                ("denominations", &baptist),
                ("denominations", &lutheran),
                ("topics", "Baptism"),
            ],
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert!(ministry_web::db::comparisons::comparisons_for_user(&app.pool, user_id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_topics_api_lists_belief_topics() {
    let app = TestApp::seeded().await;
    let baptist = denomination_id(&app.pool, "Baptist").await;

    let response = app.get(&format!("/doctrine/api/topics/{}", baptist), None).await;
    assert_eq!(response.status, StatusCode::OK);
    let topics = response.json();
    let topics: Vec<&str> = topics
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t.as_str())
        .collect();
    assert!(topics.contains(&"Baptism"));
    assert!(topics.contains(&"Salvation"));
}

#[tokio::test]
async fn test_anchor_comparison_without_selection_warns() {
    let app = TestApp::seeded().await;
    let (_, token) = app.user_session("apollos").await;

    let response = app
        .get("/doctrine/amillennial_comparison?compare=true", Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("Please select at least one denomination to compare with amillennial theology."));
}

#[tokio::test]
async fn test_anchor_comparison_pins_anchor_first() {
    let app = TestApp::seeded().await;
    let baptist = denomination_id(&app.pool, "Baptist").await;
    let anchor = comparison::load_anchor(&app.pool, "Amillennial").await.unwrap();
    assert!(!anchor.topics.is_empty());

    let matrix = comparison::compare_with_anchor(&app.pool, &anchor, &[baptist, anchor.denomination.id])
        .await
        .unwrap();
    assert_eq!(matrix.denominations(), vec!["Amillennial", "Baptist"]);
    assert_eq!(matrix.rows.len(), anchor.topics.len());
}

#[tokio::test]
async fn test_missing_anchor_redirects_with_warning() {
    let app = TestApp::new().await;
    let (_, token) = app.user_session("apollos").await;

    let response = app.get("/doctrine/amillennial_comparison", Some(&token)).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/doctrine/"));

    let index = app.get("/doctrine/", Some(&token)).await;
    assert!(index.body.contains("Amillennial theological foundation not found."));
}

#[tokio::test]
async fn test_non_admin_cannot_add_denomination() {
    let app = TestApp::seeded().await;
    let (_, token) = app.user_session("demas").await;

    let response = app
        .post_form(
            "/doctrine/denomination/new",
            &[("name", "Quaker"), ("description", "Friends")],
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(doctrine::find_denomination_by_name(&app.pool, "Quaker")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_admin_adds_denomination_and_belief() {
    let app = TestApp::seeded().await;
    let token = app.login_as("admin", "admin password 123").await;

    let response = app
        .post_form(
            "/doctrine/denomination/new",
            &[("name", "Quaker"), ("description", "Religious Society of Friends")],
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let quaker = denomination_id(&app.pool, "Quaker").await;

    let response = app
        .post_form(
            &format!("/doctrine/denomination/{}/belief", quaker),
            &[("topic", "Baptism"), ("summary", "Inward baptism of the Spirit")],
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let beliefs = doctrine::beliefs_for_denomination(&app.pool, quaker).await.unwrap();
    assert_eq!(beliefs.len(), 1);
    assert_eq!(beliefs[0].summary, "Inward baptism of the Spirit");
}
