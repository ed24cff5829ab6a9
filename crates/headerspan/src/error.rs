//! Error types for headerspan.
//!
//! Building a model and computing a selection never fail; errors only arise
//! when loading configuration or column definitions.

use std::path::PathBuf;

/// Result type alias for headerspan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading configuration or column definitions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A column definition that cannot be displayed.
    #[error("Invalid column definition '{id}': {message}")]
    InvalidColumnDef { id: String, message: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a column definition error.
    pub fn invalid_column(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidColumnDef {
            id: id.into(),
            message: message.into(),
        }
    }
}
