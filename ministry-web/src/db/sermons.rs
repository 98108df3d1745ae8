//! Sermons and sermon series

use chrono::{NaiveDate, Utc};
use ministry_common::db::{Sermon, SermonSeries};
use ministry_common::Result;
use sqlx::SqlitePool;

/// Editable sermon fields; outline and illustrations are JSON text
#[derive(Debug, Clone, Default)]
pub struct SermonInput {
    pub title: String,
    pub scripture_passage: String,
    pub theme: String,
    pub content: String,
    pub outline: String,
    pub illustrations: String,
    pub sermon_date: Option<NaiveDate>,
}

pub async fn create_sermon(pool: &SqlitePool, user_id: i64, input: &SermonInput) -> Result<i64> {
    let now = Utc::now();
    let result = sqlx::query(
        r#"
        INSERT INTO sermons (title, scripture_passage, theme, content, outline, illustrations,
                             sermon_date, created_at, updated_at, user_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.title)
    .bind(&input.scripture_passage)
    .bind(&input.theme)
    .bind(&input.content)
    .bind(&input.outline)
    .bind(&input.illustrations)
    .bind(input.sermon_date)
    .bind(now)
    .bind(now)
    .bind(user_id)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn find_sermon(pool: &SqlitePool, id: i64) -> Result<Option<Sermon>> {
    let row = sqlx::query_as::<_, Sermon>("SELECT * FROM sermons WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// A user's sermons, newest first
pub async fn sermons_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Sermon>> {
    let rows = sqlx::query_as::<_, Sermon>(
        "SELECT * FROM sermons WHERE user_id = ? ORDER BY created_at DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn update_sermon(pool: &SqlitePool, id: i64, input: &SermonInput) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE sermons
        SET title = ?, scripture_passage = ?, theme = ?, content = ?, outline = ?,
            illustrations = ?, sermon_date = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.title)
    .bind(&input.scripture_passage)
    .bind(&input.theme)
    .bind(&input.content)
    .bind(&input.outline)
    .bind(&input.illustrations)
    .bind(input.sermon_date)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_sermon(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM sermons WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Link a sermon to a series; an unset sermon date takes the series start
pub async fn attach_to_series(
    pool: &SqlitePool,
    sermon_id: i64,
    series: &SermonSeries,
    position: Option<i64>,
) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE sermons
        SET series_id = ?, series_position = ?, sermon_date = COALESCE(sermon_date, ?), updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(series.id)
    .bind(position)
    .bind(series.start_date)
    .bind(Utc::now())
    .bind(sermon_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Editable series fields
#[derive(Debug, Clone, Default)]
pub struct SeriesInput {
    pub title: String,
    pub description: String,
    pub theme: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

pub async fn create_series(pool: &SqlitePool, user_id: i64, input: &SeriesInput) -> Result<i64> {
    let now = Utc::now();
    let result = sqlx::query(
        r#"
        INSERT INTO sermon_series (title, description, theme, start_date, end_date,
                                   created_at, updated_at, user_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.theme)
    .bind(input.start_date)
    .bind(input.end_date)
    .bind(now)
    .bind(now)
    .bind(user_id)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn find_series(pool: &SqlitePool, id: i64) -> Result<Option<SermonSeries>> {
    let row = sqlx::query_as::<_, SermonSeries>("SELECT * FROM sermon_series WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// A user's series, newest first
pub async fn series_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<SermonSeries>> {
    let rows = sqlx::query_as::<_, SermonSeries>(
        "SELECT * FROM sermon_series WHERE user_id = ? ORDER BY created_at DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Sermons of a series by position; unpositioned sermons last
pub async fn sermons_in_series(pool: &SqlitePool, series_id: i64) -> Result<Vec<Sermon>> {
    let rows = sqlx::query_as::<_, Sermon>(
        r#"
        SELECT * FROM sermons
        WHERE series_id = ?
        ORDER BY series_position IS NULL, series_position, id
        "#,
    )
    .bind(series_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn update_series(pool: &SqlitePool, id: i64, input: &SeriesInput) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE sermon_series
        SET title = ?, description = ?, theme = ?, start_date = ?, end_date = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.theme)
    .bind(input.start_date)
    .bind(input.end_date)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Delete a series, unlinking its sermons in the same transaction
///
/// Returns the number of sermons unlinked.
pub async fn delete_series(pool: &SqlitePool, id: i64) -> Result<u64> {
    let mut tx = pool.begin().await?;

    let unlinked = sqlx::query(
        "UPDATE sermons SET series_id = NULL, series_position = NULL WHERE series_id = ?",
    )
    .bind(id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    sqlx::query("DELETE FROM sermon_series WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(unlinked)
}
