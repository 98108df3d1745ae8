//! User accounts

use chrono::Utc;
use ministry_common::auth::Role;
use ministry_common::db::User;
use ministry_common::Result;
use serde::Serialize;
use sqlx::SqlitePool;

/// Fields for a new account; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Save a new user, returning its id
pub async fn create_user(pool: &SqlitePool, user: &NewUser) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (username, email, password_hash, first_name, last_name, role, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(user.role.as_str())
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn find_user(pool: &SqlitePool, id: i64) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// True if either the username or the email is taken
pub async fn username_or_email_taken(pool: &SqlitePool, username: &str, email: &str) -> Result<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ? OR lower(email) = lower(?)")
            .bind(username)
            .bind(email)
            .fetch_one(pool)
            .await?;
    Ok(count > 0)
}

pub async fn count_users(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Per-user record counts shown on the dashboard
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserActivity {
    pub sermons: i64,
    pub series: i64,
    pub counseling_sessions: i64,
    pub comparisons: i64,
    pub responses: i64,
}

pub async fn user_activity(pool: &SqlitePool, user_id: i64) -> Result<UserActivity> {
    let row: (i64, i64, i64, i64, i64) = sqlx::query_as(
        r#"
        SELECT
            (SELECT COUNT(*) FROM sermons WHERE user_id = ?1),
            (SELECT COUNT(*) FROM sermon_series WHERE user_id = ?1),
            (SELECT COUNT(*) FROM counseling_sessions WHERE user_id = ?1),
            (SELECT COUNT(*) FROM doctrine_comparisons WHERE user_id = ?1),
            (SELECT COUNT(*) FROM apologetics_responses WHERE user_id = ?1)
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(UserActivity {
        sermons: row.0,
        series: row.1,
        counseling_sessions: row.2,
        comparisons: row.3,
        responses: row.4,
    })
}
