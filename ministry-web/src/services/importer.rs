//! Resource importer
//!
//! Merges the built-in catalogs into the resource library. Each catalog is
//! imported in its own transaction; a descriptor is skipped when a resource
//! with the same non-empty URL, or else the same title, already exists.
//! Lookups see rows inserted earlier in the same batch, so re-running an
//! import inserts nothing.

use std::fmt;

use ministry_common::{Error, Result};
use sqlx::SqlitePool;
use tracing::{error, info};

use crate::db::resources::{self, ResourceInput};
use crate::services::catalogs::{CatalogSource, ResourceDescriptor};

/// Which catalogs to import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportSelector {
    One(CatalogSource),
    All,
}

impl ImportSelector {
    /// Parse a form value: `esword`, `logos`, `amillennial` or `all`
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim() {
            "all" => Ok(ImportSelector::All),
            other => CatalogSource::ALL
                .iter()
                .find(|source| source.key() == other)
                .map(|source| ImportSelector::One(*source))
                .ok_or_else(|| Error::InvalidInput(format!("Unknown import source: {}", other))),
        }
    }

    pub fn sources(&self) -> Vec<CatalogSource> {
        match self {
            ImportSelector::One(source) => vec![*source],
            ImportSelector::All => CatalogSource::ALL.to_vec(),
        }
    }
}

/// Exact-match filters; `None` matches everything
#[derive(Debug, Clone, Default)]
pub struct ImportFilter {
    pub resource_type: Option<String>,
    pub topic: Option<String>,
}

impl ImportFilter {
    pub fn new(resource_type: Option<String>, topic: Option<String>) -> Self {
        let blank_to_none = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            resource_type: blank_to_none(resource_type),
            topic: blank_to_none(topic),
        }
    }

    pub fn matches(&self, descriptor: &ResourceDescriptor) -> bool {
        self.resource_type
            .as_deref()
            .map_or(true, |t| t == descriptor.resource_type)
            && self.topic.as_deref().map_or(true, |t| t == descriptor.topic)
    }
}

/// Outcome of importing one catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogReport {
    pub source: CatalogSource,
    pub inserted: u64,
    pub skipped: u64,
    /// Set when the catalog's transaction was rolled back
    pub error: Option<String>,
}

impl fmt::Display for CatalogReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(_) => write!(f, "{}: error saving resources, nothing added", self.source),
            None => write!(
                f,
                "{}: added {} resource(s), skipped {} existing",
                self.source, self.inserted, self.skipped
            ),
        }
    }
}

/// Outcome of an import run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub catalogs: Vec<CatalogReport>,
}

impl ImportReport {
    pub fn total_inserted(&self) -> u64 {
        self.catalogs.iter().map(|c| c.inserted).sum()
    }

    pub fn has_errors(&self) -> bool {
        self.catalogs.iter().any(|c| c.error.is_some())
    }

    /// One line per catalog
    pub fn message(&self) -> String {
        self.catalogs
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn to_input(descriptor: &ResourceDescriptor, source: CatalogSource) -> ResourceInput {
    ResourceInput {
        title: descriptor.title.to_string(),
        author: descriptor.author.to_string(),
        resource_type: descriptor.resource_type.to_string(),
        topic: descriptor.topic.to_string(),
        description: descriptor.description.to_string(),
        content: String::new(),
        url: descriptor.url.to_string(),
        tags: descriptor.tags.to_string(),
        is_amillennial: source.is_amillennial(),
    }
}

/// Import one catalog inside a transaction; returns (inserted, skipped)
async fn import_catalog(pool: &SqlitePool, source: CatalogSource, filter: &ImportFilter) -> Result<(u64, u64)> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;
    let mut skipped = 0;

    for descriptor in source.descriptors().iter().filter(|d| filter.matches(d)) {
        let existing = if descriptor.url.is_empty() {
            None
        } else {
            resources::find_by_url(&mut *tx, descriptor.url).await?
        };
        let existing = match existing {
            Some(found) => Some(found),
            None => resources::find_by_title(&mut *tx, descriptor.title).await?,
        };

        if existing.is_some() {
            skipped += 1;
            continue;
        }

        resources::insert_resource(&mut *tx, &to_input(descriptor, source)).await?;
        inserted += 1;
    }

    tx.commit().await?;
    Ok((inserted, skipped))
}

/// Import the selected catalogs in order; a failing catalog does not stop the rest
pub async fn run_import(pool: &SqlitePool, selector: ImportSelector, filter: &ImportFilter) -> ImportReport {
    let mut report = ImportReport::default();

    for source in selector.sources() {
        let catalog = match import_catalog(pool, source, filter).await {
            Ok((inserted, skipped)) => {
                info!("{} import: {} added, {} skipped", source, inserted, skipped);
                CatalogReport {
                    source,
                    inserted,
                    skipped,
                    error: None,
                }
            }
            Err(e) => {
                error!("{} import rolled back: {}", source, e);
                CatalogReport {
                    source,
                    inserted: 0,
                    skipped: 0,
                    error: Some(e.to_string()),
                }
            }
        };
        report.catalogs.push(catalog);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use ministry_common::db::init_memory_database;

    #[test]
    fn test_selector_parse() {
        assert_eq!(ImportSelector::parse("all").unwrap(), ImportSelector::All);
        assert_eq!(
            ImportSelector::parse("logos").unwrap(),
            ImportSelector::One(CatalogSource::Logos)
        );
        assert!(ImportSelector::parse("kindle").is_err());
        assert_eq!(ImportSelector::All.sources().len(), 3);
    }

    #[test]
    fn test_filter_blank_matches_all() {
        let filter = ImportFilter::new(Some("  ".to_string()), None);
        assert!(CatalogSource::Logos.descriptors().iter().all(|d| filter.matches(d)));

        let filter = ImportFilter::new(Some("Dictionary".to_string()), Some("Biblical Studies".to_string()));
        let matched: Vec<_> = CatalogSource::Logos
            .descriptors()
            .iter()
            .filter(|d| filter.matches(d))
            .map(|d| d.title)
            .collect();
        assert_eq!(matched, vec!["Lexham Bible Dictionary"]);
    }

    #[tokio::test]
    async fn test_import_is_idempotent() {
        let pool = init_memory_database().await.unwrap();

        let first = run_import(&pool, ImportSelector::All, &ImportFilter::default()).await;
        assert!(!first.has_errors());
        assert!(first.total_inserted() > 0);
        let count = resources::count_resources(&pool).await.unwrap();

        let second = run_import(&pool, ImportSelector::All, &ImportFilter::default()).await;
        assert_eq!(second.total_inserted(), 0);
        assert_eq!(resources::count_resources(&pool).await.unwrap(), count);
    }

    #[tokio::test]
    async fn test_url_match_wins_over_title() {
        let pool = init_memory_database().await.unwrap();

        // All three e-Sword entries share one download URL
        let report = run_import(&pool, ImportSelector::One(CatalogSource::ESword), &ImportFilter::default()).await;
        let esword = &report.catalogs[0];
        assert_eq!(esword.inserted, 1);
        assert_eq!(esword.skipped, 2);
        assert_eq!(report.message(), "e-Sword: added 1 resource(s), skipped 2 existing");
        assert_eq!(resources::count_resources(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_amillennial_catalog_is_flagged() {
        let pool = init_memory_database().await.unwrap();

        run_import(&pool, ImportSelector::One(CatalogSource::Amillennial), &ImportFilter::default()).await;
        let flagged = resources::resources_by_flag(&pool, true).await.unwrap();
        assert!(!flagged.is_empty());
        assert!(resources::resources_by_flag(&pool, false).await.unwrap().is_empty());
        assert!(flagged.iter().any(|r| r.title == "Amillennialism 101"));
    }

    #[tokio::test]
    async fn test_existing_title_is_skipped() {
        let pool = init_memory_database().await.unwrap();
        let input = ResourceInput {
            title: "Faithlife Study Bible".to_string(),
            ..Default::default()
        };
        resources::insert_resource(&pool, &input).await.unwrap();

        let report = run_import(&pool, ImportSelector::One(CatalogSource::Logos), &ImportFilter::default()).await;
        assert_eq!(report.catalogs[0].inserted, 2);
        assert_eq!(report.catalogs[0].skipped, 1);
    }
}
