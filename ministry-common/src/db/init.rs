//! Database initialization
//!
//! Creates the SQLite file on first run and brings every table into
//! existence. All statements are `CREATE TABLE IF NOT EXISTS`, so running
//! initialization against an existing database is a no-op.

use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Current schema version recorded in `schema_version`
pub const SCHEMA_VERSION: i64 = 1;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let options = SqliteConnectOptions::from_str(&format!("sqlite://{}", db_path.display()))?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5))
        // WAL allows concurrent readers with one writer
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    create_schema(&pool).await?;

    Ok(pool)
}

/// In-memory database with the full schema
///
/// A single connection that never expires: every connection to `:memory:`
/// is a separate database.
pub async fn init_memory_database() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Create every table (idempotent)
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    create_schema_version_table(pool).await?;

    // Accounts and sessions
    create_users_table(pool).await?;
    create_sessions_table(pool).await?;
    create_flash_messages_table(pool).await?;

    // Doctrine
    create_denominations_table(pool).await?;
    create_beliefs_table(pool).await?;
    create_doctrine_comparisons_table(pool).await?;
    create_comparison_denominations_table(pool).await?;
    create_comparison_topics_table(pool).await?;

    // Sermons and counseling
    create_sermon_series_table(pool).await?;
    create_sermons_table(pool).await?;
    create_counseling_sessions_table(pool).await?;

    // Library
    create_resources_table(pool).await?;

    // Apologetics
    create_apologetics_categories_table(pool).await?;
    create_apologetics_objections_table(pool).await?;
    create_apologetics_responses_table(pool).await?;
    create_theological_authors_table(pool).await?;
    create_theological_works_table(pool).await?;
    create_theological_quotes_table(pool).await?;

    sqlx::query("INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?, ?)")
        .bind(SCHEMA_VERSION)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await?;

    Ok(())
}

async fn execute(pool: &SqlitePool, sql: &str) -> Result<()> {
    sqlx::query(sql).execute(pool).await?;
    Ok(())
}

async fn create_schema_version_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TIMESTAMP NOT NULL
        )
        "#,
    )
    .await
}

async fn create_users_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            first_name TEXT NOT NULL DEFAULT '',
            last_name TEXT NOT NULL DEFAULT '',
            role TEXT NOT NULL DEFAULT 'user',
            created_at TIMESTAMP NOT NULL
        )
        "#,
    )
    .await
}

async fn create_sessions_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            token_hash TEXT NOT NULL UNIQUE,
            user_id INTEGER REFERENCES users(id) ON DELETE CASCADE,
            created_at TIMESTAMP NOT NULL,
            expires_at TIMESTAMP NOT NULL
        )
        "#,
    )
    .await
}

async fn create_flash_messages_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS flash_messages (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id INTEGER NOT NULL REFERENCES sessions(id) ON DELETE CASCADE,
            level TEXT NOT NULL,
            message TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL
        )
        "#,
    )
    .await
}

async fn create_denominations_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS denominations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            description TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .await
}

async fn create_beliefs_table(pool: &SqlitePool) -> Result<()> {
    // (denomination_id, topic) is intentionally not unique
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS beliefs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            topic TEXT NOT NULL,
            summary TEXT NOT NULL,
            scripture_references TEXT NOT NULL DEFAULT '',
            denomination_id INTEGER NOT NULL REFERENCES denominations(id) ON DELETE CASCADE
        )
        "#,
    )
    .await?;

    execute(
        pool,
        "CREATE INDEX IF NOT EXISTS idx_beliefs_denomination ON beliefs(denomination_id, topic)",
    )
    .await
}

async fn create_doctrine_comparisons_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS doctrine_comparisons (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            results TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMP NOT NULL,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    )
    .await
}

async fn create_comparison_denominations_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS comparison_denominations (
            comparison_id INTEGER NOT NULL REFERENCES doctrine_comparisons(id) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            denomination_id INTEGER NOT NULL REFERENCES denominations(id) ON DELETE CASCADE,
            PRIMARY KEY (comparison_id, position)
        )
        "#,
    )
    .await
}

async fn create_comparison_topics_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS comparison_topics (
            comparison_id INTEGER NOT NULL REFERENCES doctrine_comparisons(id) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            topic TEXT NOT NULL,
            PRIMARY KEY (comparison_id, position)
        )
        "#,
    )
    .await
}

async fn create_sermon_series_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS sermon_series (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            theme TEXT NOT NULL DEFAULT '',
            start_date DATE,
            end_date DATE,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    )
    .await
}

async fn create_sermons_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS sermons (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            scripture_passage TEXT NOT NULL DEFAULT '',
            theme TEXT NOT NULL DEFAULT '',
            content TEXT NOT NULL DEFAULT '',
            outline TEXT NOT NULL DEFAULT '[]',
            illustrations TEXT NOT NULL DEFAULT '[]',
            sermon_date DATE,
            series_position INTEGER,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            series_id INTEGER REFERENCES sermon_series(id) ON DELETE SET NULL
        )
        "#,
    )
    .await
}

async fn create_counseling_sessions_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS counseling_sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            topic TEXT NOT NULL DEFAULT '',
            notes TEXT NOT NULL DEFAULT '',
            scripture_references TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    )
    .await
}

async fn create_resources_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS resources (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL DEFAULT '',
            resource_type TEXT NOT NULL DEFAULT '',
            topic TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            content TEXT NOT NULL DEFAULT '',
            url TEXT NOT NULL DEFAULT '',
            tags TEXT NOT NULL DEFAULT '',
            is_amillennial INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMP NOT NULL
        )
        "#,
    )
    .await?;

    execute(pool, "CREATE INDEX IF NOT EXISTS idx_resources_url ON resources(url)").await?;
    execute(pool, "CREATE INDEX IF NOT EXISTS idx_resources_title ON resources(title)").await
}

async fn create_apologetics_categories_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS apologetics_categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            description TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .await
}

async fn create_apologetics_objections_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS apologetics_objections (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            objection_text TEXT NOT NULL,
            source TEXT NOT NULL DEFAULT '',
            difficulty_level INTEGER NOT NULL DEFAULT 1 CHECK (difficulty_level BETWEEN 1 AND 5),
            category_id INTEGER NOT NULL REFERENCES apologetics_categories(id) ON DELETE CASCADE
        )
        "#,
    )
    .await
}

async fn create_apologetics_responses_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS apologetics_responses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            response_text TEXT NOT NULL,
            scripture_references TEXT NOT NULL DEFAULT '',
            additional_resources TEXT NOT NULL DEFAULT '[]',
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL,
            objection_id INTEGER NOT NULL REFERENCES apologetics_objections(id) ON DELETE CASCADE,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    )
    .await
}

async fn create_theological_authors_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS theological_authors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            timeperiod TEXT NOT NULL DEFAULT '',
            tradition TEXT NOT NULL DEFAULT '',
            bio TEXT NOT NULL DEFAULT '',
            is_amillennial INTEGER NOT NULL DEFAULT 0,
            image_url TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .await
}

async fn create_theological_works_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS theological_works (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            publication_year INTEGER,
            description TEXT NOT NULL DEFAULT '',
            url TEXT NOT NULL DEFAULT '',
            author_id INTEGER NOT NULL REFERENCES theological_authors(id) ON DELETE CASCADE
        )
        "#,
    )
    .await
}

async fn create_theological_quotes_table(pool: &SqlitePool) -> Result<()> {
    execute(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS theological_quotes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            quote_text TEXT NOT NULL,
            source TEXT NOT NULL DEFAULT '',
            topic TEXT NOT NULL DEFAULT '',
            context TEXT NOT NULL DEFAULT '',
            author_id INTEGER NOT NULL REFERENCES theological_authors(id) ON DELETE CASCADE
        )
        "#,
    )
    .await
}
