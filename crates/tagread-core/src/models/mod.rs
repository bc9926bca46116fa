//! Data models for records and configuration.

pub mod config;
pub mod record;

pub use config::TagreadConfig;
pub use record::{Record, RecordSource};
