//! Tests for database initialization
//!
//! Covers automatic creation of the database file, idempotent schema
//! creation, and foreign key enforcement.

use ministry_common::db::init::{init_database, init_memory_database};
use tempfile::TempDir;

const EXPECTED_TABLES: [&str; 19] = [
    "schema_version",
    "users",
    "sessions",
    "flash_messages",
    "denominations",
    "beliefs",
    "doctrine_comparisons",
    "comparison_denominations",
    "comparison_topics",
    "sermon_series",
    "sermons",
    "counseling_sessions",
    "resources",
    "apologetics_categories",
    "apologetics_objections",
    "apologetics_responses",
    "theological_authors",
    "theological_works",
    "theological_quotes",
];

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("ministry.db");

    let result = init_database(&db_path).await;

    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("ministry.db");

    let pool1 = init_database(&db_path).await;
    assert!(pool1.is_ok());

    sqlx::query("INSERT INTO denominations (name, description) VALUES ('Baptist', '')")
        .execute(pool1.as_ref().unwrap())
        .await
        .unwrap();
    drop(pool1);

    // Second open must keep existing rows
    let pool2 = init_database(&db_path).await.expect("reopen");
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM denominations")
        .fetch_one(&pool2)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_all_tables_created() {
    let pool = init_memory_database().await.unwrap();

    for table in EXPECTED_TABLES {
        let found: Option<String> =
            sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")
                .bind(table)
                .fetch_optional(&pool)
                .await
                .unwrap();
        assert!(found.is_some(), "Missing table {}", table);
    }
}

#[tokio::test]
async fn test_schema_creation_is_idempotent() {
    let pool = init_memory_database().await.unwrap();

    ministry_common::db::create_schema(&pool).await.unwrap();

    let versions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_version")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(versions, 1);
}

#[tokio::test]
async fn test_foreign_keys_enforced() {
    let pool = init_memory_database().await.unwrap();

    let result = sqlx::query(
        "INSERT INTO beliefs (topic, summary, scripture_references, denomination_id) VALUES ('Baptism', 'x', '', 999)",
    )
    .execute(&pool)
    .await;

    assert!(result.is_err(), "Belief with unknown denomination should be rejected");
}

#[tokio::test]
async fn test_duplicate_beliefs_per_topic_allowed() {
    let pool = init_memory_database().await.unwrap();

    sqlx::query("INSERT INTO denominations (name, description) VALUES ('Lutheran', '')")
        .execute(&pool)
        .await
        .unwrap();

    for summary in ["first", "second"] {
        sqlx::query(
            "INSERT INTO beliefs (topic, summary, scripture_references, denomination_id) VALUES ('Baptism', ?, '', 1)",
        )
        .bind(summary)
        .execute(&pool)
        .await
        .unwrap();
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM beliefs WHERE topic = 'Baptism'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);
}
