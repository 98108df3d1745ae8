//! Resource library
//!
//! Insert and lookup functions take any executor so the importer can run
//! them inside its per-catalog transaction.

use chrono::Utc;
use ministry_common::db::Resource;
use ministry_common::Result;
use sqlx::{Executor, QueryBuilder, Sqlite, SqlitePool};

/// Editable resource fields
#[derive(Debug, Clone, Default)]
pub struct ResourceInput {
    pub title: String,
    pub author: String,
    pub resource_type: String,
    pub topic: String,
    pub description: String,
    pub content: String,
    pub url: String,
    pub tags: String,
    pub is_amillennial: bool,
}

/// Library filters; blank values are ignored
#[derive(Debug, Clone, Default)]
pub struct ResourceFilter {
    pub resource_type: Option<String>,
    pub topic: Option<String>,
    pub search: Option<String>,
}

pub async fn insert_resource<'e, E>(executor: E, input: &ResourceInput) -> Result<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        r#"
        INSERT INTO resources (title, author, resource_type, topic, description, content,
                               url, tags, is_amillennial, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.title)
    .bind(&input.author)
    .bind(&input.resource_type)
    .bind(&input.topic)
    .bind(&input.description)
    .bind(&input.content)
    .bind(&input.url)
    .bind(&input.tags)
    .bind(input.is_amillennial)
    .bind(Utc::now())
    .execute(executor)
    .await?;
    Ok(result.last_insert_rowid())
}

/// First resource with exactly this URL
pub async fn find_by_url<'e, E>(executor: E, url: &str) -> Result<Option<Resource>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, Resource>("SELECT * FROM resources WHERE url = ? ORDER BY id LIMIT 1")
        .bind(url)
        .fetch_optional(executor)
        .await?;
    Ok(row)
}

/// First resource with exactly this title
pub async fn find_by_title<'e, E>(executor: E, title: &str) -> Result<Option<Resource>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, Resource>("SELECT * FROM resources WHERE title = ? ORDER BY id LIMIT 1")
        .bind(title)
        .fetch_optional(executor)
        .await?;
    Ok(row)
}

pub async fn find_resource(pool: &SqlitePool, id: i64) -> Result<Option<Resource>> {
    let row = sqlx::query_as::<_, Resource>("SELECT * FROM resources WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Escape `%`, `_` and `\` for a `LIKE ... ESCAPE '\'` pattern
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Filtered library listing ordered by title
pub async fn search_resources(
    pool: &SqlitePool,
    filter: &ResourceFilter,
    limit: Option<i64>,
) -> Result<Vec<Resource>> {
    let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM resources WHERE 1 = 1");

    if let Some(resource_type) = filter.resource_type.as_deref().filter(|t| !t.is_empty()) {
        query.push(" AND resource_type = ").push_bind(resource_type.to_string());
    }
    if let Some(topic) = filter.topic.as_deref().filter(|t| !t.is_empty()) {
        query.push(" AND topic = ").push_bind(topic.to_string());
    }
    if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
        let pattern = like_pattern(term);
        query.push(" AND (");
        for (i, column) in ["title", "author", "description", "tags"].iter().enumerate() {
            if i > 0 {
                query.push(" OR ");
            }
            query
                .push(format!("{} LIKE ", column))
                .push_bind(pattern.clone())
                .push(" ESCAPE '\\'");
        }
        query.push(")");
    }

    query.push(" ORDER BY title, id");
    if let Some(limit) = limit {
        query.push(" LIMIT ").push_bind(limit);
    }

    let rows = query.build_query_as::<Resource>().fetch_all(pool).await?;
    Ok(rows)
}

/// Resources on a topic, newest first
pub async fn recommend_for_topic(pool: &SqlitePool, topic: &str, limit: i64) -> Result<Vec<Resource>> {
    let rows = sqlx::query_as::<_, Resource>(
        "SELECT * FROM resources WHERE topic = ? ORDER BY created_at DESC, id DESC LIMIT ?",
    )
    .bind(topic)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Resources split by the amillennial flag, each ordered by title
pub async fn resources_by_flag(pool: &SqlitePool, is_amillennial: bool) -> Result<Vec<Resource>> {
    let rows = sqlx::query_as::<_, Resource>(
        "SELECT * FROM resources WHERE is_amillennial = ? ORDER BY title, id",
    )
    .bind(is_amillennial)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Resources for a list of ids, in the order given; unknown ids are skipped
pub async fn resources_by_ids(pool: &SqlitePool, ids: &[i64]) -> Result<Vec<Resource>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM resources WHERE id IN (");
    let mut separated = query.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");

    let rows = query.build_query_as::<Resource>().fetch_all(pool).await?;
    Ok(ids
        .iter()
        .filter_map(|id| rows.iter().find(|r| r.id == *id).cloned())
        .collect())
}

pub async fn distinct_types(pool: &SqlitePool) -> Result<Vec<String>> {
    let rows = sqlx::query_scalar(
        "SELECT DISTINCT resource_type FROM resources WHERE resource_type != '' ORDER BY resource_type",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn distinct_resource_topics(pool: &SqlitePool) -> Result<Vec<String>> {
    let rows = sqlx::query_scalar("SELECT DISTINCT topic FROM resources WHERE topic != '' ORDER BY topic")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn update_resource(pool: &SqlitePool, id: i64, input: &ResourceInput) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE resources
        SET title = ?, author = ?, resource_type = ?, topic = ?, description = ?, content = ?,
            url = ?, tags = ?, is_amillennial = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.title)
    .bind(&input.author)
    .bind(&input.resource_type)
    .bind(&input.topic)
    .bind(&input.description)
    .bind(&input.content)
    .bind(&input.url)
    .bind(&input.tags)
    .bind(input.is_amillennial)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_resource(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM resources WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn count_resources(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM resources")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("grace"), "%grace%");
        assert_eq!(like_pattern("100%_\\"), "%100\\%\\_\\\\%");
    }
}
