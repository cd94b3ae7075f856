use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a catalog.
#[derive(Error, Debug)]
pub enum IndexError {
    /// The catalog file could not be read.
    #[error("failed to read catalog at {}", .path.display())]
    Io {
        /// Path of the catalog file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The catalog is not a JSON array of documents.
    #[error("failed to parse catalog")]
    Parse(#[from] serde_json::Error),

    /// Two documents share the same id.
    #[error("duplicate document id: {0}")]
    DuplicateId(String),
}

/// The result type used by the index.
pub type IndexResult<T> = std::result::Result<T, IndexError>;
