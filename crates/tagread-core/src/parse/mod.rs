//! OCR text parsing: cleaning and record extraction.

mod cleaner;
mod extractor;
mod known;

pub use cleaner::clean_lines;
pub use extractor::RecordExtractor;
pub use known::{known_records, matches_known_tag, KnownTag, KNOWN_TAGS};
