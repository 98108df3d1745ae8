//! Apologetics categories, objections, responses and theological authors

use chrono::Utc;
use ministry_common::db::{
    ApologeticsCategory, ApologeticsObjection, ApologeticsResponse, TheologicalAuthor,
    TheologicalQuote, TheologicalWork,
};
use ministry_common::Result;
use sqlx::SqlitePool;

pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<ApologeticsCategory>> {
    let rows = sqlx::query_as::<_, ApologeticsCategory>("SELECT * FROM apologetics_categories ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_category(pool: &SqlitePool, id: i64) -> Result<Option<ApologeticsCategory>> {
    let row = sqlx::query_as::<_, ApologeticsCategory>("SELECT * FROM apologetics_categories WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn count_categories(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM apologetics_categories")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Objections, optionally limited to one category, easiest first
pub async fn list_objections(pool: &SqlitePool, category_id: Option<i64>) -> Result<Vec<ApologeticsObjection>> {
    let rows = match category_id {
        Some(category_id) => {
            sqlx::query_as::<_, ApologeticsObjection>(
                "SELECT * FROM apologetics_objections WHERE category_id = ? ORDER BY difficulty_level, title",
            )
            .bind(category_id)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, ApologeticsObjection>(
                "SELECT * FROM apologetics_objections ORDER BY difficulty_level, title",
            )
            .fetch_all(pool)
            .await?
        }
    };
    Ok(rows)
}

pub async fn find_objection(pool: &SqlitePool, id: i64) -> Result<Option<ApologeticsObjection>> {
    let row = sqlx::query_as::<_, ApologeticsObjection>("SELECT * FROM apologetics_objections WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Responses to an objection, oldest first
pub async fn responses_for_objection(pool: &SqlitePool, objection_id: i64) -> Result<Vec<ApologeticsResponse>> {
    let rows = sqlx::query_as::<_, ApologeticsResponse>(
        "SELECT * FROM apologetics_responses WHERE objection_id = ? ORDER BY created_at, id",
    )
    .bind(objection_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_response(pool: &SqlitePool, id: i64) -> Result<Option<ApologeticsResponse>> {
    let row = sqlx::query_as::<_, ApologeticsResponse>("SELECT * FROM apologetics_responses WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Editable response fields; `additional_resources` is a JSON id list
#[derive(Debug, Clone, Default)]
pub struct ResponseInput {
    pub title: String,
    pub response_text: String,
    pub scripture_references: String,
    pub additional_resources: String,
}

pub async fn create_response(
    pool: &SqlitePool,
    objection_id: i64,
    user_id: i64,
    input: &ResponseInput,
) -> Result<i64> {
    let now = Utc::now();
    let result = sqlx::query(
        r#"
        INSERT INTO apologetics_responses (title, response_text, scripture_references,
                                           additional_resources, created_at, updated_at,
                                           objection_id, user_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.title)
    .bind(&input.response_text)
    .bind(&input.scripture_references)
    .bind(&input.additional_resources)
    .bind(now)
    .bind(now)
    .bind(objection_id)
    .bind(user_id)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update_response(pool: &SqlitePool, id: i64, input: &ResponseInput) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE apologetics_responses
        SET title = ?, response_text = ?, scripture_references = ?, additional_resources = ?,
            updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.title)
    .bind(&input.response_text)
    .bind(&input.scripture_references)
    .bind(&input.additional_resources)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_response(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM apologetics_responses WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Authors by name, optionally only amillennial ones
pub async fn list_authors(pool: &SqlitePool, amillennial_only: bool) -> Result<Vec<TheologicalAuthor>> {
    let sql = if amillennial_only {
        "SELECT * FROM theological_authors WHERE is_amillennial = 1 ORDER BY name"
    } else {
        "SELECT * FROM theological_authors ORDER BY name"
    };
    let rows = sqlx::query_as::<_, TheologicalAuthor>(sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_author(pool: &SqlitePool, id: i64) -> Result<Option<TheologicalAuthor>> {
    let row = sqlx::query_as::<_, TheologicalAuthor>("SELECT * FROM theological_authors WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Works of an author, oldest publication first
pub async fn works_for_author(pool: &SqlitePool, author_id: i64) -> Result<Vec<TheologicalWork>> {
    let rows = sqlx::query_as::<_, TheologicalWork>(
        "SELECT * FROM theological_works WHERE author_id = ? ORDER BY publication_year IS NULL, publication_year, title",
    )
    .bind(author_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn quotes_for_author(pool: &SqlitePool, author_id: i64) -> Result<Vec<TheologicalQuote>> {
    let rows = sqlx::query_as::<_, TheologicalQuote>(
        "SELECT * FROM theological_quotes WHERE author_id = ? ORDER BY id",
    )
    .bind(author_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
