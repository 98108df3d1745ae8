//! Saved doctrine comparisons
//!
//! The ordered denomination ids and topics of a comparison are stored as
//! rows of `comparison_denominations` / `comparison_topics` keyed by
//! `(comparison_id, position)`; the result matrix is a JSON snapshot.

use chrono::Utc;
use ministry_common::db::{ComparisonMatrix, DoctrineComparison};
use ministry_common::fields::encode_json;
use ministry_common::Result;
use sqlx::SqlitePool;

/// A comparison ready to be saved
#[derive(Debug, Clone)]
pub struct NewComparison<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub user_id: i64,
    pub denomination_ids: &'a [i64],
    pub topics: &'a [String],
    pub matrix: &'a ComparisonMatrix,
}

/// Insert the comparison and its ordered selections in one transaction
pub async fn insert_comparison(pool: &SqlitePool, comparison: &NewComparison<'_>) -> Result<i64> {
    let results = encode_json(comparison.matrix)?;
    let mut tx = pool.begin().await?;

    let id = sqlx::query(
        r#"
        INSERT INTO doctrine_comparisons (title, description, results, created_at, user_id)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(comparison.title)
    .bind(comparison.description)
    .bind(&results)
    .bind(Utc::now())
    .bind(comparison.user_id)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    for (position, denomination_id) in comparison.denomination_ids.iter().enumerate() {
        sqlx::query(
            "INSERT INTO comparison_denominations (comparison_id, position, denomination_id) VALUES (?, ?, ?)",
        )
        .bind(id)
        .bind(position as i64)
        .bind(denomination_id)
        .execute(&mut *tx)
        .await?;
    }

    for (position, topic) in comparison.topics.iter().enumerate() {
        sqlx::query("INSERT INTO comparison_topics (comparison_id, position, topic) VALUES (?, ?, ?)")
            .bind(id)
            .bind(position as i64)
            .bind(topic)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(id)
}

pub async fn find_comparison(pool: &SqlitePool, id: i64) -> Result<Option<DoctrineComparison>> {
    let row = sqlx::query_as::<_, DoctrineComparison>("SELECT * FROM doctrine_comparisons WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// A user's comparisons, newest first
pub async fn comparisons_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<DoctrineComparison>> {
    let rows = sqlx::query_as::<_, DoctrineComparison>(
        "SELECT * FROM doctrine_comparisons WHERE user_id = ? ORDER BY created_at DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Denomination ids in their saved order
pub async fn comparison_denomination_ids(pool: &SqlitePool, comparison_id: i64) -> Result<Vec<i64>> {
    let ids = sqlx::query_scalar(
        "SELECT denomination_id FROM comparison_denominations WHERE comparison_id = ? ORDER BY position",
    )
    .bind(comparison_id)
    .fetch_all(pool)
    .await?;
    Ok(ids)
}

/// Topics in their saved order
pub async fn comparison_topics(pool: &SqlitePool, comparison_id: i64) -> Result<Vec<String>> {
    let topics = sqlx::query_scalar(
        "SELECT topic FROM comparison_topics WHERE comparison_id = ? ORDER BY position",
    )
    .bind(comparison_id)
    .fetch_all(pool)
    .await?;
    Ok(topics)
}

pub async fn update_comparison_details(
    pool: &SqlitePool,
    id: i64,
    title: &str,
    description: &str,
) -> Result<()> {
    sqlx::query("UPDATE doctrine_comparisons SET title = ?, description = ? WHERE id = ?")
        .bind(title)
        .bind(description)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete a comparison; join rows cascade
pub async fn delete_comparison(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM doctrine_comparisons WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
