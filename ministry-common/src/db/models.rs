//! Database models
//!
//! One struct per table row. Text columns holding structured data keep
//! their raw form here; accessor methods decode them with the lenient
//! policy from [`crate::fields`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::auth::Role;
use crate::fields::{self, Illustration, OutlineSection};

/// Placeholder summary used when a denomination has no belief on a topic
pub const NO_INFORMATION: &str = "No information available";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }

    /// Full name when known, otherwise the username
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Browser session; `user_id` is `None` until login
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: i64,
    pub token_hash: String,
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FlashMessage {
    pub id: i64,
    pub session_id: i64,
    pub level: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Denomination {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Belief {
    pub id: i64,
    pub topic: String,
    pub summary: String,
    pub scripture_references: String,
    pub denomination_id: i64,
}

/// Saved comparison; the ordered denomination ids and topics live in
/// `comparison_denominations` and `comparison_topics`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DoctrineComparison {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub results: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
}

impl DoctrineComparison {
    /// Stored result snapshot; malformed content yields an empty matrix
    pub fn matrix(&self) -> ComparisonMatrix {
        ComparisonMatrix::decode(&self.results)
    }
}

/// One denomination's position on one topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeliefEntry {
    pub denomination_id: i64,
    pub denomination: String,
    pub summary: String,
    #[serde(default)]
    pub scripture_references: String,
}

impl BeliefEntry {
    pub fn is_placeholder(&self) -> bool {
        self.summary == NO_INFORMATION && self.scripture_references.is_empty()
    }
}

/// Matrix row: one topic across every compared denomination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRow {
    pub topic: String,
    pub entries: Vec<BeliefEntry>,
}

/// Topic × denomination cross-tabulation, rows and columns in request order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonMatrix {
    pub rows: Vec<TopicRow>,
}

impl ComparisonMatrix {
    /// Look up a cell by topic and denomination name
    pub fn get(&self, topic: &str, denomination: &str) -> Option<&BeliefEntry> {
        self.rows
            .iter()
            .find(|row| row.topic == topic)
            .and_then(|row| row.entries.iter().find(|e| e.denomination == denomination))
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|row| row.entries.len()).sum()
    }

    /// Column headers in order
    pub fn denominations(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.entries.iter().map(|e| e.denomination.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn topics(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.topic.as_str()).collect()
    }

    /// Decode a stored snapshot (decode-or-default)
    pub fn decode(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        serde_json::from_str(raw).unwrap_or_else(|e| {
            tracing::debug!("Discarding malformed comparison results: {}", e);
            Self::default()
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SermonSeries {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub theme: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Sermon {
    pub id: i64,
    pub title: String,
    pub scripture_passage: String,
    pub theme: String,
    pub content: String,
    pub outline: String,
    pub illustrations: String,
    pub sermon_date: Option<NaiveDate>,
    pub series_position: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: i64,
    pub series_id: Option<i64>,
}

impl Sermon {
    pub fn outline_sections(&self) -> Vec<OutlineSection> {
        fields::decode_json_list(&self.outline)
    }

    pub fn illustration_list(&self) -> Vec<Illustration> {
        fields::decode_json_list(&self.illustrations)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CounselingSession {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub topic: String,
    pub notes: String,
    pub scripture_references: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: i64,
}

impl CounselingSession {
    pub fn scripture_list(&self) -> Vec<String> {
        fields::parse_scripture_list(&self.scripture_references)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resource {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub resource_type: String,
    pub topic: String,
    pub description: String,
    pub content: String,
    pub url: String,
    pub tags: String,
    pub is_amillennial: bool,
    pub created_at: DateTime<Utc>,
}

impl Resource {
    pub fn tag_list(&self) -> Vec<String> {
        fields::split_list(&self.tags)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApologeticsCategory {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApologeticsObjection {
    pub id: i64,
    pub title: String,
    pub objection_text: String,
    pub source: String,
    pub difficulty_level: i64,
    pub category_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApologeticsResponse {
    pub id: i64,
    pub title: String,
    pub response_text: String,
    pub scripture_references: String,
    pub additional_resources: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub objection_id: i64,
    pub user_id: i64,
}

impl ApologeticsResponse {
    /// Linked resource ids (decode-or-default)
    pub fn resource_ids(&self) -> Vec<i64> {
        fields::decode_json_list(&self.additional_resources)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TheologicalAuthor {
    pub id: i64,
    pub name: String,
    pub timeperiod: String,
    pub tradition: String,
    pub bio: String,
    pub is_amillennial: bool,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TheologicalWork {
    pub id: i64,
    pub title: String,
    pub publication_year: Option<i64>,
    pub description: String,
    pub url: String,
    pub author_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TheologicalQuote {
    pub id: i64,
    pub quote_text: String,
    pub source: String,
    pub topic: String,
    pub context: String,
    pub author_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, name: &str, summary: &str) -> BeliefEntry {
        BeliefEntry {
            denomination_id: id,
            denomination: name.to_string(),
            summary: summary.to_string(),
            scripture_references: String::new(),
        }
    }

    #[test]
    fn test_matrix_lookup() {
        let matrix = ComparisonMatrix {
            rows: vec![TopicRow {
                topic: "Baptism".to_string(),
                entries: vec![entry(1, "Baptist", "Believer's baptism"), entry(2, "Lutheran", NO_INFORMATION)],
            }],
        };

        assert_eq!(matrix.get("Baptism", "Baptist").map(|e| e.summary.as_str()), Some("Believer's baptism"));
        assert!(matrix.get("Baptism", "Lutheran").is_some_and(|e| e.is_placeholder()));
        assert!(matrix.get("Salvation", "Baptist").is_none());
        assert_eq!(matrix.cell_count(), 2);
        assert_eq!(matrix.denominations(), vec!["Baptist", "Lutheran"]);
    }

    #[test]
    fn test_matrix_decode_or_default() {
        assert_eq!(ComparisonMatrix::decode(""), ComparisonMatrix::default());
        assert_eq!(ComparisonMatrix::decode("{\"Baptism\": {}}"), ComparisonMatrix::default());
    }

    #[test]
    fn test_display_name() {
        let mut user = User {
            id: 1,
            username: "pastor_j".to_string(),
            email: "j@example.org".to_string(),
            password_hash: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            role: "pastor".to_string(),
            created_at: Utc::now(),
        };
        assert_eq!(user.display_name(), "pastor_j");
        user.first_name = "John".to_string();
        assert_eq!(user.display_name(), "John");
        assert_eq!(user.role(), Role::Pastor);
        assert!(!user.is_admin());
    }
}
