//! Structured fields stored as text columns
//!
//! Outlines, illustrations, scripture lists, tags and linked resource ids
//! are typed here and serialized to text for storage. Decoding is lenient:
//! malformed or legacy content becomes an empty list instead of an error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// One heading of a sermon outline with its bullet points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineSection {
    pub title: String,
    #[serde(default)]
    pub points: Vec<String>,
}

impl OutlineSection {
    pub fn new(title: &str, points: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            points: points.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// A sermon illustration idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Illustration {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Illustration {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Decode a JSON list, falling back to an empty list
///
/// # Examples
///
/// ```
/// use ministry_common::fields::{decode_json_list, OutlineSection};
///
/// let outline: Vec<OutlineSection> = decode_json_list("not json");
/// assert!(outline.is_empty());
///
/// let ids: Vec<i64> = decode_json_list("[3, 5]");
/// assert_eq!(ids, vec![3, 5]);
/// ```
pub fn decode_json_list<T: DeserializeOwned>(raw: &str) -> Vec<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str(trimmed) {
        Ok(list) => list,
        Err(e) => {
            debug!("Discarding malformed stored list ({} bytes): {}", raw.len(), e);
            Vec::new()
        }
    }
}

/// Serialize a value for a text column
pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::Internal(format!("Serialization failed: {}", e)))
}

/// Parse the outline editor's text
///
/// Accepts either a JSON outline or plain text where each non-bullet line
/// starts a section and lines starting with `-` or `*` are its points.
pub fn parse_outline_text(text: &str) -> Vec<OutlineSection> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        if let Ok(outline) = serde_json::from_str(trimmed) {
            return outline;
        }
    }

    let mut sections: Vec<OutlineSection> = Vec::new();
    for line in trimmed.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(point) = line.strip_prefix('-').or_else(|| line.strip_prefix('*')) {
            let point = point.trim();
            if point.is_empty() {
                continue;
            }
            match sections.last_mut() {
                Some(section) => section.points.push(point.to_string()),
                None => sections.push(OutlineSection {
                    title: String::new(),
                    points: vec![point.to_string()],
                }),
            }
        } else {
            sections.push(OutlineSection {
                title: line.to_string(),
                points: Vec::new(),
            });
        }
    }
    sections
}

/// Render an outline back into editor text
pub fn format_outline_text(outline: &[OutlineSection]) -> String {
    let mut out = String::new();
    for section in outline {
        if !section.title.is_empty() {
            out.push_str(&section.title);
            out.push('\n');
        }
        for point in &section.points {
            out.push_str("- ");
            out.push_str(point);
            out.push('\n');
        }
    }
    out
}

/// Parse illustrations text: JSON, or one `Title: description` per line
pub fn parse_illustrations_text(text: &str) -> Vec<Illustration> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        if let Ok(list) = serde_json::from_str(trimmed) {
            return list;
        }
    }

    trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(':') {
            Some((title, description)) => Illustration::new(title.trim(), description.trim()),
            None => Illustration::new(line, ""),
        })
        .collect()
}

/// Render illustrations back into editor text
pub fn format_illustrations_text(illustrations: &[Illustration]) -> String {
    illustrations
        .iter()
        .map(|i| {
            if i.description.is_empty() {
                i.title.clone()
            } else {
                format!("{}: {}", i.title, i.description)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split a comma separated list, trimming whitespace and dropping empties
///
/// # Examples
///
/// ```
/// use ministry_common::fields::split_list;
///
/// assert_eq!(split_list(" grace, ,faith ,"), vec!["grace", "faith"]);
/// ```
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize a tag string to `a, b, c`
pub fn normalize_tags(raw: &str) -> String {
    split_list(raw).join(", ")
}

/// Scripture references: a JSON array of strings, otherwise a comma list
pub fn parse_scripture_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        if let Ok(list) = serde_json::from_str::<Vec<String>>(trimmed) {
            return list
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
    }
    split_list(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_text_parsing() {
        let outline = parse_outline_text(
            "Introduction\n- Hook\n- Context\n\nMain Point 1\n* Exposition\n",
        );
        assert_eq!(
            outline,
            vec![
                OutlineSection::new("Introduction", &["Hook", "Context"]),
                OutlineSection::new("Main Point 1", &["Exposition"]),
            ]
        );
    }

    #[test]
    fn test_outline_text_accepts_json() {
        let json = r#"[{"title":"Conclusion","points":["Apply"]}]"#;
        assert_eq!(
            parse_outline_text(json),
            vec![OutlineSection::new("Conclusion", &["Apply"])]
        );
    }

    #[test]
    fn test_outline_format_then_parse_keeps_sections() {
        let outline = vec![
            OutlineSection::new("Intro", &["a"]),
            OutlineSection::new("Body", &[]),
        ];
        assert_eq!(parse_outline_text(&format_outline_text(&outline)), outline);
    }

    #[test]
    fn test_leading_point_without_heading() {
        let outline = parse_outline_text("- orphan point");
        assert_eq!(outline.len(), 1);
        assert_eq!(outline[0].title, "");
        assert_eq!(outline[0].points, vec!["orphan point"]);
    }

    #[test]
    fn test_malformed_json_decodes_to_empty() {
        let outline: Vec<OutlineSection> = decode_json_list("[{\"title\":");
        assert!(outline.is_empty());
        let outline: Vec<OutlineSection> = decode_json_list("");
        assert!(outline.is_empty());
        // Wrong shape is also malformed
        let illustrations: Vec<Illustration> = decode_json_list("{\"title\":\"x\"}");
        assert!(illustrations.is_empty());
    }

    #[test]
    fn test_illustrations_text() {
        let list = parse_illustrations_text("Lost sheep: a shepherd searching\nA plain idea");
        assert_eq!(
            list,
            vec![
                Illustration::new("Lost sheep", "a shepherd searching"),
                Illustration::new("A plain idea", ""),
            ]
        );
        assert_eq!(
            format_illustrations_text(&list),
            "Lost sheep: a shepherd searching\nA plain idea"
        );
    }

    #[test]
    fn test_scripture_list_forms() {
        assert_eq!(
            parse_scripture_list(r#"["John 3:16", " Romans 8:28 "]"#),
            vec!["John 3:16", "Romans 8:28"]
        );
        assert_eq!(
            parse_scripture_list("Psalm 23, Matthew 11:28-30"),
            vec!["Psalm 23", "Matthew 11:28-30"]
        );
        assert!(parse_scripture_list("   ").is_empty());
    }

    #[test]
    fn test_normalize_tags() {
        assert_eq!(normalize_tags("eschatology,  kingdom ,,"), "eschatology, kingdom");
    }
}
