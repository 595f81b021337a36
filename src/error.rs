//! Error type shared by every stage of request handling.

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// Filesystem listing failed while enumerating datasets.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The model catalog could not be opened or queried.
    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A table record does not carry a column named in the header.
    #[error("table row {row} has no value for column {column:?}")]
    MissingField { row: usize, column: String },

    #[error("invalid header value: {0}")]
    HeaderValue(#[from] http::header::InvalidHeaderValue),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("page render error: {0}")]
    Page(String),
}

pub type Result<T> = std::result::Result<T, PortalError>;

impl PortalError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
