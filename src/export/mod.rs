// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod load;

pub use fs_utils::ensure_writable;
pub use load::load_columns;

use crate::errors::{AppError, AppResult};
use crate::table::ColumnMap;
use crate::ui::messages::success;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Shared completion message for every writer.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// Column file formats, both for reading and writing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnFormat {
    Json,
    Yaml,
    Csv,
}

impl ColumnFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnFormat::Json => "json",
            ColumnFormat::Yaml => "yaml",
            ColumnFormat::Csv => "csv",
        }
    }

    /// Guess the format from the file extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(ColumnFormat::Json),
            "yaml" | "yml" => Ok(ColumnFormat::Yaml),
            "csv" => Ok(ColumnFormat::Csv),
            _ => Err(AppError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Format to write `path` in.
    ///
    /// A recognised extension decides, and an explicit `requested` format
    /// must agree with it. Unknown extensions take `requested`, then `fallback`.
    pub fn for_output(
        path: &Path,
        requested: Option<ColumnFormat>,
        fallback: ColumnFormat,
    ) -> AppResult<Self> {
        match (Self::from_path(path).ok(), requested) {
            (Some(ext), Some(req)) if ext != req => Err(AppError::FormatMismatch {
                requested: req.as_str().to_string(),
                path: path.display().to_string(),
            }),
            (Some(ext), _) => Ok(ext),
            (None, Some(req)) => Ok(req),
            (None, None) => Ok(fallback),
        }
    }
}

/// Write `columns` to `path` in `format`, overwriting any existing file.
pub fn write_columns(path: &Path, columns: &ColumnMap, format: ColumnFormat) -> AppResult<()> {
    match format {
        ColumnFormat::Json => json_csv::export_json(columns, path),
        ColumnFormat::Yaml => json_csv::export_yaml(columns, path),
        ColumnFormat::Csv => json_csv::export_csv(columns, path),
    }
}
