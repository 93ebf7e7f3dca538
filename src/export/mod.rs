//! File export of stored records (CSV / pretty JSON).

mod fs_utils;
mod json_csv;
mod model;

pub use fs_utils::{confirm_overwrite, ensure_writable};
pub use json_csv::{export_csv, export_json};
pub use model::WorkRecordExport;

use crate::errors::AppResult;
use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Write `rows` to `path` in this format.
    pub fn write<T: Serialize>(&self, rows: &[T], path: &Path) -> AppResult<()> {
        match self {
            ExportFormat::Csv => export_csv(rows, path),
            ExportFormat::Json => export_json(rows, path),
        }
    }
}
