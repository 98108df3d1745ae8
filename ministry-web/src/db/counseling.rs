//! Counseling session notes

use chrono::Utc;
use ministry_common::db::CounselingSession;
use ministry_common::Result;
use sqlx::SqlitePool;

#[derive(Debug, Clone, Default)]
pub struct CounselingInput {
    pub title: String,
    pub description: String,
    pub topic: String,
    pub notes: String,
    pub scripture_references: String,
}

pub async fn create_counseling_session(
    pool: &SqlitePool,
    user_id: i64,
    input: &CounselingInput,
) -> Result<i64> {
    let now = Utc::now();
    let result = sqlx::query(
        r#"
        INSERT INTO counseling_sessions (title, description, topic, notes, scripture_references,
                                         created_at, updated_at, user_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.topic)
    .bind(&input.notes)
    .bind(&input.scripture_references)
    .bind(now)
    .bind(now)
    .bind(user_id)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn find_counseling_session(pool: &SqlitePool, id: i64) -> Result<Option<CounselingSession>> {
    let row = sqlx::query_as::<_, CounselingSession>("SELECT * FROM counseling_sessions WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// A user's sessions, newest first
pub async fn counseling_sessions_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<CounselingSession>> {
    let rows = sqlx::query_as::<_, CounselingSession>(
        "SELECT * FROM counseling_sessions WHERE user_id = ? ORDER BY created_at DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn update_counseling_session(pool: &SqlitePool, id: i64, input: &CounselingInput) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE counseling_sessions
        SET title = ?, description = ?, topic = ?, notes = ?, scripture_references = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.topic)
    .bind(&input.notes)
    .bind(&input.scripture_references)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_counseling_session(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM counseling_sessions WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
