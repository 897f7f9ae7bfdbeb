//! Error types for loading and rendering the diary.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed diary data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate entry date: {0}")]
    DuplicateDate(String),
    #[error("Invalid entry date {date:?} (expected yyyy-mm-dd)")]
    InvalidDate { date: String },
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DiaryError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DiaryError>;
