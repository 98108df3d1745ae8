//! Doctrine comparison engine
//!
//! Cross-tabulates N denominations against M topics. Every (topic,
//! denomination) cell is filled: the first belief (lowest id) whose topic
//! matches exactly, or a "No information available" placeholder.

use ministry_common::db::{Belief, BeliefEntry, ComparisonMatrix, Denomination, TopicRow, NO_INFORMATION};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::debug;

use crate::db::doctrine;

/// Minimum number of distinct denominations in a comparison
pub const MIN_DENOMINATIONS: usize = 2;

#[derive(Debug, Error)]
pub enum ComparisonError {
    #[error("Please select at least two denominations to compare.")]
    TooFewDenominations,

    #[error("Please select at least one topic to compare.")]
    NoTopics,

    #[error("Please select at least one denomination to compare with amillennial theology.")]
    NoAnchorSelection,

    #[error("Amillennial theological foundation not found.")]
    AnchorMissing(String),

    #[error("Denomination {0} not found")]
    UnknownDenomination(i64),

    #[error(transparent)]
    Store(#[from] ministry_common::Error),
}

impl ComparisonError {
    /// True for errors caused by the user's selection
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ComparisonError::TooFewDenominations
                | ComparisonError::NoTopics
                | ComparisonError::NoAnchorSelection
        )
    }
}

/// A validated comparison selection
///
/// Duplicates are removed keeping the first occurrence; blank topics are
/// dropped. Construction fails before any database access when fewer than
/// two denominations or no topic remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    denomination_ids: Vec<i64>,
    topics: Vec<String>,
}

impl ComparisonRequest {
    pub fn new(denomination_ids: Vec<i64>, topics: Vec<String>) -> Result<Self, ComparisonError> {
        let mut ids: Vec<i64> = Vec::with_capacity(denomination_ids.len());
        for id in denomination_ids {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        let mut unique_topics: Vec<String> = Vec::with_capacity(topics.len());
        for topic in topics {
            let topic = topic.trim();
            if !topic.is_empty() && !unique_topics.iter().any(|t| t == topic) {
                unique_topics.push(topic.to_string());
            }
        }

        if ids.len() < MIN_DENOMINATIONS {
            return Err(ComparisonError::TooFewDenominations);
        }
        if unique_topics.is_empty() {
            return Err(ComparisonError::NoTopics);
        }

        Ok(Self {
            denomination_ids: ids,
            topics: unique_topics,
        })
    }

    pub fn denomination_ids(&self) -> &[i64] {
        &self.denomination_ids
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }
}

/// Build the matrix from already-loaded rows
///
/// `denominations` gives the column order; `beliefs` must be sorted by id
/// so that the first match is the lowest id.
pub fn build_matrix(denominations: &[Denomination], beliefs: &[Belief], topics: &[String]) -> ComparisonMatrix {
    let rows = topics
        .iter()
        .map(|topic| TopicRow {
            topic: topic.clone(),
            entries: denominations
                .iter()
                .map(|denomination| {
                    match beliefs
                        .iter()
                        .find(|b| b.denomination_id == denomination.id && &b.topic == topic)
                    {
                        Some(belief) => BeliefEntry {
                            denomination_id: denomination.id,
                            denomination: denomination.name.clone(),
                            summary: belief.summary.clone(),
                            scripture_references: belief.scripture_references.clone(),
                        },
                        None => BeliefEntry {
                            denomination_id: denomination.id,
                            denomination: denomination.name.clone(),
                            summary: NO_INFORMATION.to_string(),
                            scripture_references: String::new(),
                        },
                    }
                })
                .collect(),
        })
        .collect();

    ComparisonMatrix { rows }
}

/// Load denominations in the requested order; any unknown id is an error
async fn load_denominations(pool: &SqlitePool, ids: &[i64]) -> Result<Vec<Denomination>, ComparisonError> {
    let found = doctrine::denominations_by_ids(pool, ids).await?;
    ids.iter()
        .map(|id| {
            found
                .iter()
                .find(|d| d.id == *id)
                .cloned()
                .ok_or(ComparisonError::UnknownDenomination(*id))
        })
        .collect()
}

/// Run a validated comparison against the store
pub async fn compare(pool: &SqlitePool, request: &ComparisonRequest) -> Result<ComparisonMatrix, ComparisonError> {
    let denominations = load_denominations(pool, request.denomination_ids()).await?;
    let beliefs = doctrine::beliefs_for_denominations(pool, request.denomination_ids()).await?;

    let matrix = build_matrix(&denominations, &beliefs, request.topics());
    debug!(
        "Compared {} denominations over {} topics ({} cells)",
        denominations.len(),
        request.topics().len(),
        matrix.cell_count()
    );
    Ok(matrix)
}

/// The anchor denomination and its topics in belief order
#[derive(Debug, Clone)]
pub struct Anchor {
    pub denomination: Denomination,
    pub topics: Vec<String>,
}

/// Look up the anchor denomination by name
pub async fn load_anchor(pool: &SqlitePool, anchor_name: &str) -> Result<Anchor, ComparisonError> {
    let denomination = doctrine::find_denomination_by_name(pool, anchor_name)
        .await?
        .ok_or_else(|| ComparisonError::AnchorMissing(anchor_name.to_string()))?;

    let mut topics: Vec<String> = Vec::new();
    for belief in doctrine::beliefs_for_denomination(pool, denomination.id).await? {
        if !topics.contains(&belief.topic) {
            topics.push(belief.topic);
        }
    }

    Ok(Anchor { denomination, topics })
}

impl Anchor {
    /// Comparison request with the anchor pinned first
    pub fn request(&self, selected: &[i64]) -> Result<ComparisonRequest, ComparisonError> {
        let others: Vec<i64> = selected
            .iter()
            .copied()
            .filter(|id| *id != self.denomination.id)
            .collect();
        if others.is_empty() {
            return Err(ComparisonError::NoAnchorSelection);
        }

        let mut ids = Vec::with_capacity(others.len() + 1);
        ids.push(self.denomination.id);
        ids.extend(others);
        ComparisonRequest::new(ids, self.topics.clone())
    }
}

/// Compare selected denominations against the anchor's topics
pub async fn compare_with_anchor(
    pool: &SqlitePool,
    anchor: &Anchor,
    selected: &[i64],
) -> Result<ComparisonMatrix, ComparisonError> {
    let request = anchor.request(selected)?;
    compare(pool, &request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn denomination(id: i64, name: &str) -> Denomination {
        Denomination {
            id,
            name: name.to_string(),
            description: String::new(),
        }
    }

    fn belief(id: i64, denomination_id: i64, topic: &str, summary: &str) -> Belief {
        Belief {
            id,
            topic: topic.to_string(),
            summary: summary.to_string(),
            scripture_references: format!("ref {}", id),
            denomination_id,
        }
    }

    #[test]
    fn test_request_rejects_single_denomination() {
        let err = ComparisonRequest::new(vec![4], vec!["Baptism".to_string()]).unwrap_err();
        assert!(matches!(err, ComparisonError::TooFewDenominations));

        // Duplicates collapse to one denomination
        let err = ComparisonRequest::new(vec![4, 4], vec!["Baptism".to_string()]).unwrap_err();
        assert!(matches!(err, ComparisonError::TooFewDenominations));
    }

    #[test]
    fn test_request_rejects_blank_topics() {
        let err = ComparisonRequest::new(vec![1, 2], vec!["  ".to_string()]).unwrap_err();
        assert!(matches!(err, ComparisonError::NoTopics));
        assert!(err.is_validation());
    }

    #[test]
    fn test_request_dedups_preserving_order() {
        let request = ComparisonRequest::new(
            vec![3, 1, 3],
            vec!["Salvation".to_string(), "Baptism".to_string(), "Salvation".to_string()],
        )
        .unwrap();
        assert_eq!(request.denomination_ids(), &[3, 1]);
        assert_eq!(request.topics(), &["Salvation".to_string(), "Baptism".to_string()]);
    }

    #[test]
    fn test_matrix_has_every_cell() {
        let denominations = vec![denomination(2, "Lutheran"), denomination(1, "Baptist")];
        let beliefs = vec![belief(1, 1, "Baptism", "Believer's baptism by immersion")];
        let topics = vec!["Baptism".to_string(), "Communion".to_string()];

        let matrix = build_matrix(&denominations, &beliefs, &topics);

        assert_eq!(matrix.cell_count(), topics.len() * denominations.len());
        assert_eq!(matrix.denominations(), vec!["Lutheran", "Baptist"]);
        assert_eq!(
            matrix.get("Baptism", "Baptist").map(|e| e.summary.as_str()),
            Some("Believer's baptism by immersion")
        );
        assert!(matrix.get("Baptism", "Lutheran").is_some_and(|e| e.is_placeholder()));
        assert!(matrix.get("Communion", "Baptist").is_some_and(|e| e.is_placeholder()));
    }

    #[test]
    fn test_lowest_id_belief_wins() {
        let denominations = vec![denomination(1, "Baptist"), denomination(2, "Lutheran")];
        let beliefs = vec![
            belief(5, 1, "Baptism", "first"),
            belief(9, 1, "Baptism", "second"),
        ];
        let matrix = build_matrix(&denominations, &beliefs, &["Baptism".to_string()]);
        assert_eq!(matrix.get("Baptism", "Baptist").map(|e| e.summary.as_str()), Some("first"));
    }

    #[test]
    fn test_topic_match_is_exact() {
        let denominations = vec![denomination(1, "Baptist"), denomination(2, "Lutheran")];
        let beliefs = vec![belief(1, 1, "baptism", "lowercase")];
        let matrix = build_matrix(&denominations, &beliefs, &["Baptism".to_string()]);
        assert!(matrix.get("Baptism", "Baptist").is_some_and(|e| e.is_placeholder()));
    }

    #[test]
    fn test_anchor_request_pins_anchor_first() {
        let anchor = Anchor {
            denomination: denomination(9, "Amillennial"),
            topics: vec!["Millennium".to_string()],
        };

        let request = anchor.request(&[3, 9, 4]).unwrap();
        assert_eq!(request.denomination_ids(), &[9, 3, 4]);

        let err = anchor.request(&[9]).unwrap_err();
        assert!(matches!(err, ComparisonError::NoAnchorSelection));
    }
}
