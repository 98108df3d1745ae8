//! Denominations and beliefs

use ministry_common::db::{Belief, Denomination};
use ministry_common::Result;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub async fn list_denominations(pool: &SqlitePool) -> Result<Vec<Denomination>> {
    let rows = sqlx::query_as::<_, Denomination>("SELECT * FROM denominations ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_denomination(pool: &SqlitePool, id: i64) -> Result<Option<Denomination>> {
    let row = sqlx::query_as::<_, Denomination>("SELECT * FROM denominations WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_denomination_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Denomination>> {
    let row = sqlx::query_as::<_, Denomination>("SELECT * FROM denominations WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Denominations whose id is in `ids` (unordered)
pub async fn denominations_by_ids(pool: &SqlitePool, ids: &[i64]) -> Result<Vec<Denomination>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM denominations WHERE id IN (");
    let mut separated = query.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");

    let rows = query.build_query_as::<Denomination>().fetch_all(pool).await?;
    Ok(rows)
}

pub async fn create_denomination(pool: &SqlitePool, name: &str, description: &str) -> Result<i64> {
    let result = sqlx::query("INSERT INTO denominations (name, description) VALUES (?, ?)")
        .bind(name)
        .bind(description)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

/// Beliefs of one denomination in insertion order
pub async fn beliefs_for_denomination(pool: &SqlitePool, denomination_id: i64) -> Result<Vec<Belief>> {
    let rows = sqlx::query_as::<_, Belief>(
        "SELECT * FROM beliefs WHERE denomination_id = ? ORDER BY id",
    )
    .bind(denomination_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Beliefs of several denominations, lowest id first
pub async fn beliefs_for_denominations(pool: &SqlitePool, denomination_ids: &[i64]) -> Result<Vec<Belief>> {
    if denomination_ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut query: QueryBuilder<Sqlite> =
        QueryBuilder::new("SELECT * FROM beliefs WHERE denomination_id IN (");
    let mut separated = query.separated(", ");
    for id in denomination_ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(") ORDER BY id");

    let rows = query.build_query_as::<Belief>().fetch_all(pool).await?;
    Ok(rows)
}

/// Every distinct belief topic, in order of first appearance
pub async fn distinct_topics(pool: &SqlitePool) -> Result<Vec<String>> {
    let rows = sqlx::query_scalar("SELECT topic FROM beliefs GROUP BY topic ORDER BY MIN(id)")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Belief fields from the admin form
#[derive(Debug, Clone)]
pub struct BeliefInput {
    pub topic: String,
    pub summary: String,
    pub scripture_references: String,
}

pub async fn find_belief(pool: &SqlitePool, id: i64) -> Result<Option<Belief>> {
    let row = sqlx::query_as::<_, Belief>("SELECT * FROM beliefs WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create_belief(pool: &SqlitePool, denomination_id: i64, input: &BeliefInput) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO beliefs (topic, summary, scripture_references, denomination_id) VALUES (?, ?, ?, ?)",
    )
    .bind(&input.topic)
    .bind(&input.summary)
    .bind(&input.scripture_references)
    .bind(denomination_id)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update_belief(pool: &SqlitePool, id: i64, input: &BeliefInput) -> Result<()> {
    sqlx::query("UPDATE beliefs SET topic = ?, summary = ?, scripture_references = ? WHERE id = ?")
        .bind(&input.topic)
        .bind(&input.summary)
        .bind(&input.scripture_references)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete_belief(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM beliefs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
