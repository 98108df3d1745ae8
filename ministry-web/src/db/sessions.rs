//! Browser sessions and their pending flash messages

use chrono::{Duration, Utc};
use ministry_common::auth::{generate_session_token, hash_session_token};
use ministry_common::db::{FlashMessage, Session};
use ministry_common::Result;
use sqlx::{SqliteExecutor, SqlitePool};

/// Create a session and return it with the cookie token
///
/// Expired rows are purged in the same transaction.
pub async fn create_session(
    pool: &SqlitePool,
    user_id: Option<i64>,
    ttl: Duration,
) -> Result<(Session, String)> {
    let token = generate_session_token();
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    purge_expired(&mut *tx).await?;
    let session = sqlx::query_as::<_, Session>(
        r#"
        INSERT INTO sessions (token_hash, user_id, created_at, expires_at)
        VALUES (?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(hash_session_token(&token))
    .bind(user_id)
    .bind(now)
    .bind(now + ttl)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok((session, token))
}

/// Unexpired session for a cookie token
pub async fn find_active_session(pool: &SqlitePool, token: &str) -> Result<Option<Session>> {
    let session = sqlx::query_as::<_, Session>(
        "SELECT * FROM sessions WHERE token_hash = ? AND expires_at > ?",
    )
    .bind(hash_session_token(token))
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;
    Ok(session)
}

/// Replace a session with a fresh one for `user_id` (login / logout)
///
/// The old row (if one was stored) and its pending flashes are removed in
/// the same transaction, along with any expired rows.
pub async fn rotate_session(
    pool: &SqlitePool,
    old_session_id: Option<i64>,
    user_id: Option<i64>,
    ttl: Duration,
) -> Result<(Session, String)> {
    let token = generate_session_token();
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    if let Some(old_session_id) = old_session_id {
        sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(old_session_id)
            .execute(&mut *tx)
            .await?;
    }
    purge_expired(&mut *tx).await?;

    let session = sqlx::query_as::<_, Session>(
        r#"
        INSERT INTO sessions (token_hash, user_id, created_at, expires_at)
        VALUES (?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(hash_session_token(&token))
    .bind(user_id)
    .bind(now)
    .bind(now + ttl)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok((session, token))
}

/// Remove expired sessions; returns how many were deleted
pub async fn delete_expired_sessions(pool: &SqlitePool) -> Result<u64> {
    purge_expired(pool).await
}

async fn purge_expired<'e, E: SqliteExecutor<'e>>(executor: E) -> Result<u64> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
        .bind(Utc::now())
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

pub async fn count_sessions(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sessions")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn push_flash(pool: &SqlitePool, session_id: i64, level: &str, message: &str) -> Result<()> {
    sqlx::query(
        "INSERT INTO flash_messages (session_id, level, message, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(session_id)
    .bind(level)
    .bind(message)
    .bind(Utc::now())
    .execute(pool)
    .await?;
    Ok(())
}

/// Read and clear the pending flashes of a session, oldest first
pub async fn take_flashes(pool: &SqlitePool, session_id: i64) -> Result<Vec<FlashMessage>> {
    let mut tx = pool.begin().await?;

    let flashes = sqlx::query_as::<_, FlashMessage>(
        "SELECT * FROM flash_messages WHERE session_id = ? ORDER BY id",
    )
    .bind(session_id)
    .fetch_all(&mut *tx)
    .await?;

    if !flashes.is_empty() {
        sqlx::query("DELETE FROM flash_messages WHERE session_id = ?")
            .bind(session_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(flashes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ministry_common::db::init_memory_database;

    #[tokio::test]
    async fn test_create_session_purges_expired_rows() {
        let pool = init_memory_database().await.unwrap();

        let (stale, _) = create_session(&pool, None, Duration::hours(-1)).await.unwrap();
        push_flash(&pool, stale.id, "info", "never shown").await.unwrap();
        assert_eq!(count_sessions(&pool).await.unwrap(), 1);

        let (fresh, token) = create_session(&pool, None, Duration::hours(1)).await.unwrap();
        assert_eq!(count_sessions(&pool).await.unwrap(), 1);
        assert_eq!(find_active_session(&pool, &token).await.unwrap().map(|s| s.id), Some(fresh.id));
        assert!(take_flashes(&pool, stale.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rotate_without_stored_session() {
        let pool = init_memory_database().await.unwrap();

        let (session, _) = rotate_session(&pool, None, None, Duration::hours(1)).await.unwrap();
        let (rotated, _) = rotate_session(&pool, Some(session.id), None, Duration::hours(1)).await.unwrap();

        assert_ne!(session.id, rotated.id);
        assert_eq!(count_sessions(&pool).await.unwrap(), 1);
    }
}
