//! Normalization of raw OCR text into candidate lines.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Everything that is not an ASCII letter, digit, or whitespace.
    static ref NOISE: Regex = Regex::new(r"[^a-zA-Z0-9\s]").unwrap();
}

/// Reduce raw OCR text to a sequence of non-empty cleaned lines.
///
/// Splits on newlines (`\n` or `\r\n`), drops lines that are empty after
/// trimming, strips every character that is not an ASCII letter, digit,
/// or whitespace, trims again, and drops lines that became empty. An
/// empty result is a valid state, not an error.
pub fn clean_lines(raw_text: &str) -> Vec<String> {
    raw_text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| NOISE.replace_all(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_simple_lines() {
        let lines = clean_lines("John Smith\nAcme Corporation");
        assert_eq!(lines, vec!["John Smith", "Acme Corporation"]);
    }

    #[test]
    fn test_clean_strips_noise() {
        let lines = clean_lines("Jane Doe!\n*** Tech Inc. ***\n---");
        assert_eq!(lines, vec!["Jane Doe", "Tech Inc"]);
    }

    #[test]
    fn test_clean_drops_blank_lines() {
        let lines = clean_lines("Alice Johnson\n\n   \nGlobal Enterprises");
        assert_eq!(lines, vec!["Alice Johnson", "Global Enterprises"]);
    }

    #[test]
    fn test_clean_handles_crlf() {
        let lines = clean_lines("John Smith\r\nAcme Corporation\r\n");
        assert_eq!(lines, vec!["John Smith", "Acme Corporation"]);
    }

    #[test]
    fn test_clean_empty_input() {
        assert!(clean_lines("").is_empty());
    }

    #[test]
    fn test_clean_is_idempotent() {
        let first = clean_lines("  J0hn 5mith!\nA c m e C0rp.\n\n@@@\n");
        let second = clean_lines(&first.join("\n"));
        assert_eq!(first, second);
    }
}
