//! First-run reference data
//!
//! Every routine is safe to run repeatedly: denominations and apologetics
//! material are only inserted into empty tables, anchor beliefs are added
//! topic by topic, and the admin account is only created when no user
//! exists. Each routine runs in a single transaction.

use std::fmt;

use ministry_common::auth::{hash_password_blocking, Role};
use ministry_common::Result;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::db::users::{self, NewUser};

pub mod data;

use data::{ANCHOR_BELIEFS, ANCHOR_DESCRIPTION, AUTHORS, BELIEFS, CATEGORIES, DENOMINATIONS};

/// Username of the bootstrap administrator
pub const ADMIN_USERNAME: &str = "admin";

/// What a seed run changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub denominations: u64,
    pub beliefs: u64,
    pub anchor_beliefs: u64,
    pub admin_created: bool,
    pub categories: u64,
    pub objections: u64,
    pub authors: u64,
    pub works: u64,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        *self == SeedReport::default()
    }
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} denominations, {} beliefs, {} anchor beliefs, admin {}, {} categories, {} objections, {} authors, {} works",
            self.denominations,
            self.beliefs,
            self.anchor_beliefs,
            if self.admin_created { "created" } else { "unchanged" },
            self.categories,
            self.objections,
            self.authors,
            self.works
        )
    }
}

/// Insert the reference denominations and their beliefs into an empty table
pub async fn seed_denominations(pool: &SqlitePool, report: &mut SeedReport) -> Result<()> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM denominations")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        info!("Denominations already present ({}), skipping", existing);
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    let mut ids: Vec<(&str, i64)> = Vec::with_capacity(DENOMINATIONS.len());

    for seed in DENOMINATIONS {
        let id = sqlx::query("INSERT INTO denominations (name, description) VALUES (?, ?)")
            .bind(seed.name)
            .bind(seed.description)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        ids.push((seed.name, id));
    }

    let mut beliefs = 0;
    for seed in BELIEFS {
        let Some((_, denomination_id)) = ids.iter().find(|(name, _)| *name == seed.denomination) else {
            warn!("Belief on {} references unknown denomination {}", seed.topic, seed.denomination);
            continue;
        };
        sqlx::query(
            "INSERT INTO beliefs (topic, summary, scripture_references, denomination_id) VALUES (?, ?, ?, ?)",
        )
        .bind(seed.topic)
        .bind(seed.summary)
        .bind(seed.scripture_references)
        .bind(denomination_id)
        .execute(&mut *tx)
        .await?;
        beliefs += 1;
    }

    tx.commit().await?;

    report.denominations += ids.len() as u64;
    report.beliefs += beliefs;
    info!("Seeded {} denominations with {} beliefs", ids.len(), beliefs);
    Ok(())
}

/// Ensure the anchor denomination exists with all of its topic beliefs
pub async fn seed_anchor_beliefs(pool: &SqlitePool, report: &mut SeedReport) -> Result<()> {
    let Some(anchor_name) = ANCHOR_BELIEFS.first().map(|b| b.denomination) else {
        return Ok(());
    };

    let mut tx = pool.begin().await?;

    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM denominations WHERE name = ?")
        .bind(anchor_name)
        .fetch_optional(&mut *tx)
        .await?;
    let anchor_id = match existing {
        Some(id) => id,
        None => {
            report.denominations += 1;
            sqlx::query("INSERT INTO denominations (name, description) VALUES (?, ?)")
                .bind(anchor_name)
                .bind(ANCHOR_DESCRIPTION)
                .execute(&mut *tx)
                .await?
                .last_insert_rowid()
        }
    };

    let mut added = 0;
    for seed in ANCHOR_BELIEFS {
        let present: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM beliefs WHERE denomination_id = ? AND topic = ?")
                .bind(anchor_id)
                .bind(seed.topic)
                .fetch_one(&mut *tx)
                .await?;
        if present > 0 {
            continue;
        }
        sqlx::query(
            "INSERT INTO beliefs (topic, summary, scripture_references, denomination_id) VALUES (?, ?, ?, ?)",
        )
        .bind(seed.topic)
        .bind(seed.summary)
        .bind(seed.scripture_references)
        .bind(anchor_id)
        .execute(&mut *tx)
        .await?;
        added += 1;
    }

    tx.commit().await?;

    report.anchor_beliefs += added;
    if added > 0 {
        info!("Added {} {} beliefs", added, anchor_name);
    }
    Ok(())
}

/// Create the administrator account when no user exists
///
/// Without a configured password a random one is generated and logged once.
pub async fn seed_admin(pool: &SqlitePool, password: Option<&str>, report: &mut SeedReport) -> Result<()> {
    if users::count_users(pool).await? > 0 {
        return Ok(());
    }

    let password = match password.map(str::trim).filter(|p| !p.is_empty()) {
        Some(password) => password.to_string(),
        None => {
            let generated = uuid::Uuid::new_v4().simple().to_string();
            warn!(
                "No admin password configured; generated password for '{}': {}",
                ADMIN_USERNAME, generated
            );
            generated
        }
    };

    let user = NewUser {
        username: ADMIN_USERNAME.to_string(),
        email: "admin@localhost".to_string(),
        password_hash: hash_password_blocking(password).await?,
        first_name: String::new(),
        last_name: String::new(),
        role: Role::Admin,
    };
    users::create_user(pool, &user).await?;

    report.admin_created = true;
    info!("Created administrator account '{}'", ADMIN_USERNAME);
    Ok(())
}

/// Insert apologetics categories, objections and authors into empty tables
pub async fn seed_apologetics(pool: &SqlitePool, report: &mut SeedReport) -> Result<()> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM apologetics_categories")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    let mut seeded = SeedReport::default();

    for category in CATEGORIES {
        let category_id = sqlx::query("INSERT INTO apologetics_categories (name, description) VALUES (?, ?)")
            .bind(category.name)
            .bind(category.description)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        seeded.categories += 1;

        for objection in category.objections {
            sqlx::query(
                r#"
                INSERT INTO apologetics_objections (title, objection_text, source, difficulty_level, category_id)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(objection.title)
            .bind(objection.objection_text)
            .bind(objection.source)
            .bind(objection.difficulty_level)
            .bind(category_id)
            .execute(&mut *tx)
            .await?;
            seeded.objections += 1;
        }
    }

    for author in AUTHORS {
        let present: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM theological_authors WHERE name = ?")
            .bind(author.name)
            .fetch_one(&mut *tx)
            .await?;
        if present > 0 {
            continue;
        }

        let author_id = sqlx::query(
            r#"
            INSERT INTO theological_authors (name, timeperiod, tradition, bio, is_amillennial)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(author.name)
        .bind(author.timeperiod)
        .bind(author.tradition)
        .bind(author.bio)
        .bind(author.is_amillennial)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();
        seeded.authors += 1;

        for work in author.works {
            sqlx::query(
                "INSERT INTO theological_works (title, publication_year, description, author_id) VALUES (?, ?, ?, ?)",
            )
            .bind(work.title)
            .bind(work.publication_year)
            .bind(work.description)
            .bind(author_id)
            .execute(&mut *tx)
            .await?;
            seeded.works += 1;
        }
    }

    tx.commit().await?;

    info!(
        "Seeded {} apologetics categories, {} objections, {} authors",
        seeded.categories, seeded.objections, seeded.authors
    );
    report.categories += seeded.categories;
    report.objections += seeded.objections;
    report.authors += seeded.authors;
    report.works += seeded.works;
    Ok(())
}

/// Run every seed routine in order
pub async fn seed_all(pool: &SqlitePool, admin_password: Option<&str>) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    seed_denominations(pool, &mut report).await?;
    seed_anchor_beliefs(pool, &mut report).await?;
    seed_admin(pool, admin_password, &mut report).await?;
    seed_apologetics(pool, &mut report).await?;

    if report.is_empty() {
        info!("Seed data already present");
    } else {
        info!("Seed complete: {}", report);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ministry_common::auth::verify_password;
    use ministry_common::db::init_memory_database;

    use crate::db::doctrine;

    #[tokio::test]
    async fn test_seed_all_is_idempotent() {
        let pool = init_memory_database().await.unwrap();

        let first = seed_all(&pool, Some("correct horse battery")).await.unwrap();
        assert_eq!(first.denominations, DENOMINATIONS.len() as u64 + 1);
        assert_eq!(first.beliefs, BELIEFS.len() as u64);
        assert_eq!(first.anchor_beliefs, ANCHOR_BELIEFS.len() as u64);
        assert!(first.admin_created);

        let second = seed_all(&pool, Some("correct horse battery")).await.unwrap();
        assert!(second.is_empty());
        assert_eq!(
            doctrine::list_denominations(&pool).await.unwrap().len(),
            DENOMINATIONS.len() + 1
        );
    }

    #[tokio::test]
    async fn test_anchor_beliefs_fill_missing_topics() {
        let pool = init_memory_database().await.unwrap();
        let anchor_id = doctrine::create_denomination(&pool, "Amillennial", "").await.unwrap();
        let first = &ANCHOR_BELIEFS[0];
        doctrine::create_belief(
            &pool,
            anchor_id,
            &doctrine::BeliefInput {
                topic: first.topic.to_string(),
                summary: "existing".to_string(),
                scripture_references: String::new(),
            },
        )
        .await
        .unwrap();

        let mut report = SeedReport::default();
        seed_anchor_beliefs(&pool, &mut report).await.unwrap();
        assert_eq!(report.denominations, 0);
        assert_eq!(report.anchor_beliefs, ANCHOR_BELIEFS.len() as u64 - 1);

        let beliefs = doctrine::beliefs_for_denomination(&pool, anchor_id).await.unwrap();
        assert_eq!(beliefs.len(), ANCHOR_BELIEFS.len());
        assert_eq!(beliefs[0].summary, "existing");
    }

    #[tokio::test]
    async fn test_admin_uses_configured_password() {
        let pool = init_memory_database().await.unwrap();
        let mut report = SeedReport::default();
        seed_admin(&pool, Some("s3cret-pass"), &mut report).await.unwrap();

        let admin = users::find_by_username(&pool, ADMIN_USERNAME).await.unwrap().unwrap();
        assert!(admin.is_admin());
        assert!(verify_password("s3cret-pass", &admin.password_hash));
    }

    #[tokio::test]
    async fn test_apologetics_seeded_once() {
        let pool = init_memory_database().await.unwrap();
        let mut report = SeedReport::default();
        seed_apologetics(&pool, &mut report).await.unwrap();
        assert_eq!(report.categories, CATEGORIES.len() as u64);
        assert_eq!(report.authors, AUTHORS.len() as u64);

        let mut again = SeedReport::default();
        seed_apologetics(&pool, &mut again).await.unwrap();
        assert!(again.is_empty());
    }
}
