//! Export of the record table as CSV or JSON.

use serde::Serialize;

use crate::error::ExportError;
use crate::models::record::Record;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// The download file name for this format.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Csv => "nametag_data.csv",
            Self::Json => "nametag_data.json",
        }
    }

    /// The MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }
}

/// One exported row. First/last name and the source tag are deliberately
/// omitted from exports.
#[derive(Serialize)]
struct ExportRow<'a> {
    number: usize,
    name: &'a str,
    organization: &'a str,
}

/// Render records in the given format.
///
/// Fails with [`ExportError::NoRecords`] on an empty record set; callers
/// are expected not to offer export in that state.
///
/// CSV fields are written verbatim, without quoting or escaping, to
/// reproduce the original export format exactly. A comma inside a name
/// or organization therefore shifts the row's columns.
pub fn render(records: &[Record], format: ExportFormat) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoRecords);
    }

    match format {
        ExportFormat::Csv => {
            let mut lines = vec!["Number,Name,Organization".to_string()];
            lines.extend(
                records
                    .iter()
                    .enumerate()
                    .map(|(i, r)| format!("{},{},{}", i + 1, r.name, r.organization)),
            );
            Ok(lines.join("\n"))
        }
        ExportFormat::Json => {
            let rows: Vec<ExportRow> = records
                .iter()
                .enumerate()
                .map(|(i, r)| ExportRow {
                    number: i + 1,
                    name: &r.name,
                    organization: &r.organization,
                })
                .collect();
            Ok(serde_json::to_string_pretty(&rows)?)
        }
    }
}
