//! Record data model for extracted and manually entered name tags.

use serde::{Deserialize, Serialize};

/// Where a record came from. Determines survivability across
/// reprocessing: `Ocr` records are replaced by a new OCR batch, `Manual`
/// records only go away through explicit deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    /// Extracted from OCR output.
    Ocr,
    /// Entered by the user.
    Manual,
}

/// One extracted or manually entered (name, organization) entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Full display name. Non-empty after trimming.
    pub name: String,

    /// First whitespace-delimited token of `name`.
    pub first_name: String,

    /// Remaining tokens of `name` joined by single spaces. May be empty.
    pub last_name: String,

    /// Affiliated organization. May be empty.
    pub organization: String,

    /// Origin of this record.
    pub source: RecordSource,
}

impl Record {
    /// Create a record, deriving `first_name`/`last_name` from the name.
    pub fn new(
        name: impl Into<String>,
        organization: impl Into<String>,
        source: RecordSource,
    ) -> Self {
        let name = name.into();
        let (first_name, last_name) = split_name(&name);
        Self {
            name,
            first_name,
            last_name,
            organization: organization.into(),
            source,
        }
    }

    /// Replace the name and recompute the derived name parts.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        let (first, last) = split_name(&self.name);
        self.first_name = first;
        self.last_name = last;
    }
}

/// Split a full name into (first name, last name).
///
/// The first whitespace-delimited token becomes the first name; the rest
/// are joined by single spaces. An empty or single-token name yields an
/// empty last name.
pub fn split_name(name: &str) -> (String, String) {
    let mut tokens = name.split_whitespace();
    let first = tokens.next().unwrap_or_default().to_string();
    let last = tokens.collect::<Vec<_>>().join(" ");
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_name_two_tokens() {
        assert_eq!(
            split_name("John Smith"),
            ("John".to_string(), "Smith".to_string())
        );
    }

    #[test]
    fn test_split_name_many_tokens() {
        assert_eq!(
            split_name("Jane Q Public"),
            ("Jane".to_string(), "Q Public".to_string())
        );
    }

    #[test]
    fn test_split_name_single_token() {
        assert_eq!(split_name("Cher"), ("Cher".to_string(), String::new()));
    }

    #[test]
    fn test_split_name_collapses_whitespace() {
        assert_eq!(
            split_name("  John   Smith "),
            ("John".to_string(), "Smith".to_string())
        );
    }

    #[test]
    fn test_set_name_recomputes_parts() {
        let mut record = Record::new("John Smith", "Acme", RecordSource::Ocr);
        record.set_name("Jane Q Public");
        assert_eq!(record.first_name, "Jane");
        assert_eq!(record.last_name, "Q Public");
        assert_eq!(record.organization, "Acme");
    }
}
