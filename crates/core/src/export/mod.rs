//! Month export serialization.
//!
//! Two user-invoked formats: a pretty-printed JSON array of `{day, events}`
//! objects and a CSV table with one row per event. Both cover only the days
//! that exist in the displayed month.

mod csv;
mod json;

pub use csv::export_csv;
pub use json::export_json;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::MonthRef;

/// Errors that can occur when serializing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize events: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// User-facing export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Download name for a month's export: `events-{year}-{month}.{ext}`.
pub fn file_name(month: MonthRef, format: ExportFormat) -> String {
    format!(
        "events-{}-{}.{}",
        month.year,
        month.month,
        format.extension()
    )
}
