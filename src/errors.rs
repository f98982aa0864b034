//! Unified application error type.
//! All modules (table, export, config, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("--format {requested} does not match output file {path}")]
    FormatMismatch { requested: String, path: String },

    // ---------------------------
    // Table errors
    // ---------------------------
    #[error("Invalid alignment value: '{0}' (expected left, right or center)")]
    InvalidAlignment(String),

    #[error("Column index {index} out of range (table has {columns} columns)")]
    ColumnOutOfRange { index: usize, columns: usize },

    #[error("Visibility mask has {found} entries, expected {expected}")]
    MaskMismatch { expected: usize, found: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
