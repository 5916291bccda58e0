//! Error types for the knowledge-base crate

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for knowledge base operations
pub type Result<T> = std::result::Result<T, KnowledgeBaseError>;

#[derive(Error, Debug)]
pub enum KnowledgeBaseError {
    /// The insight file could not be read
    #[error("Failed to read insights from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The insight file is not a JSON object of entries
    #[error("Failed to parse insights from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No entry exists for the requested key
    #[error("No data found for {key}")]
    EntryNotFound { key: String },
}
