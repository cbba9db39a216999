//! Error types for catalog operations

use std::path::PathBuf;
use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A content directory could not be listed
    #[error("Failed to read directory {path:?}: {source}")]
    ReadDir {
        /// Directory path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A file could not be read
    #[error("Failed to read {path:?}: {source}")]
    ReadFile {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// An output artifact could not be written
    #[error("Failed to write {path:?}: {source}")]
    WriteFile {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The frontmatter block is not a YAML mapping
    #[error("Invalid frontmatter in {file}: {reason}")]
    Frontmatter {
        /// Relative path of the content file
        file: String,
        /// Parse failure
        reason: String,
    },

    /// A schema document could not be loaded or compiled
    #[error("Schema error ({schema}): {reason}")]
    Schema {
        /// Schema name or path
        schema: String,
        /// Failure reason
        reason: String,
    },

    /// A built-in content pattern failed to compile
    #[error("Invalid pattern {pattern:?}: {reason}")]
    Pattern {
        /// Regular expression source
        pattern: String,
        /// Compiler message
        reason: String,
    },

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, CatalogError>;
