//! Records owned by one user cannot be read or changed by another

mod helpers;

use axum::http::StatusCode;
use helpers::TestApp;
use ministry_web::db::apologetics::{self, ResponseInput};
use ministry_web::db::comparisons::{self, NewComparison};
use ministry_web::db::counseling::{self, CounselingInput};
use ministry_web::db::sermons::{self, SermonInput};
use ministry_common::db::ComparisonMatrix;

#[tokio::test]
async fn test_other_user_cannot_edit_sermon() {
    let app = TestApp::new().await;
    let (owner, _) = app.user_session("timothy").await;
    let (_, intruder) = app.user_session("alexander").await;

    let sermon_id = sermons::create_sermon(
        &app.pool,
        owner,
        &SermonInput {
            title: "Grace Alone".to_string(),
            scripture_passage: "Ephesians 2:8-9".to_string(),
            ..SermonInput::default()
        },
    )
    .await
    .unwrap();

    let response = app
        .post_form(
            &format!("/sermon/sermon/{}/edit", sermon_id),
            &[("title", "Hijacked"), ("scripture_passage", "Jude 1")],
            Some(&intruder),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/sermon/my_sermons"));

    let sermon = sermons::find_sermon(&app.pool, sermon_id).await.unwrap().unwrap();
    assert_eq!(sermon.title, "Grace Alone");

    let list = app.get("/sermon/my_sermons", Some(&intruder)).await;
    assert!(list.body.contains("You do not have permission to edit this sermon."));

    let view = app.get(&format!("/sermon/sermon/{}", sermon_id), Some(&intruder)).await;
    assert_eq!(view.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_other_user_cannot_delete_counseling_session() {
    let app = TestApp::new().await;
    let (owner, _) = app.user_session("titus").await;
    let (_, intruder) = app.user_session("hymenaeus").await;

    let session_id = counseling::create_counseling_session(
        &app.pool,
        owner,
        &CounselingInput {
            title: "Pre-marital".to_string(),
            topic: "Marriage".to_string(),
            ..CounselingInput::default()
        },
    )
    .await
    .unwrap();

    let response = app
        .post_form(
            &format!("/counseling/session/{}/delete", session_id),
            &[],
            Some(&intruder),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/counseling/my_sessions"));
    assert!(counseling::find_counseling_session(&app.pool, session_id)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_other_user_cannot_view_or_delete_comparison() {
    let app = TestApp::new().await;
    let (owner, _) = app.user_session("phoebe").await;
    let (_, intruder) = app.user_session("diotrephes").await;

    let comparison_id = comparisons::insert_comparison(
        &app.pool,
        &NewComparison {
            title: "Private notes",
            description: "",
            user_id: owner,
            denomination_ids: &[],
            topics: &[],
            matrix: &ComparisonMatrix::default(),
        },
    )
    .await
    .unwrap();

    let view = app
        .get(&format!("/doctrine/comparison/{}", comparison_id), Some(&intruder))
        .await;
    assert_eq!(view.status, StatusCode::SEE_OTHER);
    assert_eq!(view.location.as_deref(), Some("/doctrine/my_comparisons"));

    let delete = app
        .post_form(
            &format!("/doctrine/comparison/{}/delete", comparison_id),
            &[],
            Some(&intruder),
        )
        .await;
    assert_eq!(delete.status, StatusCode::SEE_OTHER);
    assert!(comparisons::find_comparison(&app.pool, comparison_id)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_other_user_cannot_edit_apologetics_response() {
    let app = TestApp::seeded().await;
    let (owner, _) = app.user_session("stephen").await;
    let (_, intruder) = app.user_session("saul").await;

    let objection = apologetics::list_objections(&app.pool, None)
        .await
        .unwrap()
        .into_iter()
        .next()
        .expect("seeded objection");
    let response_id = apologetics::create_response(
        &app.pool,
        objection.id,
        owner,
        &ResponseInput {
            title: "Symbolic millennium".to_string(),
            response_text: "Revelation is apocalyptic literature.".to_string(),
            ..ResponseInput::default()
        },
    )
    .await
    .unwrap();

    let response = app
        .post_form(
            &format!("/apologetics/response/{}/edit", response_id),
            &[("title", "Changed"), ("response_text", "Changed")],
            Some(&intruder),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(
        response.location,
        Some(format!("/apologetics/objection/{}", objection.id))
    );

    let stored = apologetics::find_response(&app.pool, response_id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Symbolic millennium");
}

#[tokio::test]
async fn test_owner_can_edit_sermon() {
    let app = TestApp::new().await;
    let (owner, token) = app.user_session("timothy").await;

    let sermon_id = sermons::create_sermon(
        &app.pool,
        owner,
        &SermonInput {
            title: "Grace Alone".to_string(),
            scripture_passage: "Ephesians 2:8-9".to_string(),
            ..SermonInput::default()
        },
    )
    .await
    .unwrap();

    let response = app
        .post_form(
            &format!("/sermon/sermon/{}/edit", sermon_id),
            &[
                ("title", "Saved by Grace"),
                ("scripture_passage", "Ephesians 2:1-10"),
                ("outline", "Introduction\n- Dead in sin\nConclusion"),
            ],
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location, Some(format!("/sermon/sermon/{}", sermon_id)));

    let sermon = sermons::find_sermon(&app.pool, sermon_id).await.unwrap().unwrap();
    assert_eq!(sermon.title, "Saved by Grace");
    let outline = sermon.outline_sections();
    assert_eq!(outline.len(), 2);
    assert_eq!(outline[0].points, vec!["Dead in sin"]);
}
