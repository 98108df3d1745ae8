//! Form and query-string field access
//!
//! HTML forms repeat keys for multi-selects (`denominations=1&denominations=3`),
//! so fields are kept as ordered pairs instead of a map.

use chrono::NaiveDate;
use serde::Deserialize;

/// Ordered `name=value` pairs from a form body or query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value for `name`, untouched
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First value for `name`, trimmed; empty when absent
    pub fn text(&self, name: &str) -> String {
        self.raw(name).map(|v| v.trim().to_string()).unwrap_or_default()
    }

    /// Trimmed value, `None` when absent or blank
    pub fn optional(&self, name: &str) -> Option<String> {
        let value = self.text(name);
        (!value.is_empty()).then_some(value)
    }

    /// Every non-blank value for a repeated field, in submission order
    pub fn all(&self, name: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect()
    }

    /// Every value of a repeated field that parses as an id
    pub fn ids(&self, name: &str) -> Vec<i64> {
        self.all(name)
            .iter()
            .filter_map(|value| value.parse().ok())
            .collect()
    }

    pub fn id(&self, name: &str) -> Option<i64> {
        self.optional(name).and_then(|value| value.parse().ok())
    }

    /// Checkbox semantics: present and not "0"/"false"
    pub fn checked(&self, name: &str) -> bool {
        match self.optional(name) {
            Some(value) => !matches!(value.to_ascii_lowercase().as_str(), "0" | "false" | "off"),
            None => false,
        }
    }

    /// Optional ISO date field
    pub fn date(&self, name: &str) -> DateField {
        match self.optional(name) {
            None => DateField::Empty,
            Some(value) => match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
                Ok(date) => DateField::Valid(date),
                Err(_) => DateField::Invalid(value),
            },
        }
    }
}

/// Result of reading an optional date input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateField {
    Empty,
    Valid(NaiveDate),
    Invalid(String),
}

impl DateField {
    pub fn value(&self) -> Option<NaiveDate> {
        match self {
            DateField::Valid(date) => Some(*date),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, DateField::Invalid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_repeated_fields_keep_order() {
        let form = fields(&[
            ("denominations", "4"),
            ("topics", "Baptism"),
            ("denominations", "3"),
            ("denominations", "abc"),
            ("topics", "  "),
        ]);

        assert_eq!(form.ids("denominations"), vec![4, 3]);
        assert_eq!(form.all("topics"), vec!["Baptism"]);
    }

    #[test]
    fn test_text_and_optional() {
        let form = fields(&[("title", "  Grace  "), ("theme", "")]);
        assert_eq!(form.text("title"), "Grace");
        assert_eq!(form.optional("theme"), None);
        assert_eq!(form.text("missing"), "");
    }

    #[test]
    fn test_dates() {
        let form = fields(&[("start", "2026-01-04"), ("end", "04/01/2026")]);
        assert_eq!(
            form.date("start"),
            DateField::Valid(NaiveDate::from_ymd_opt(2026, 1, 4).unwrap())
        );
        assert!(form.date("end").is_invalid());
        assert_eq!(form.date("none"), DateField::Empty);
    }

    #[test]
    fn test_checked() {
        let form = fields(&[("a", "1"), ("b", "false"), ("c", "on")]);
        assert!(form.checked("a"));
        assert!(!form.checked("b"));
        assert!(form.checked("c"));
        assert!(!form.checked("d"));
    }
}
