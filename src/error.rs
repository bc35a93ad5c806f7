//! Failures that stop a query from running at all.
//!
//! Lookups that find nothing are not errors: they return `None` or an empty `Vec` and leave the
//! exit-status policy to the caller. Only loading the document can fail.

use std::io;
use std::path::PathBuf;

/// Errors raised while loading a specification document or serialising results.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source document could not be read (missing, unreadable, or not UTF-8).
    #[error("failed to load specification from {}: {source}", .path.display())]
    Load {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Results could not be written as JSON.
    #[error("failed to serialise results: {0}")]
    Json(#[from] serde_json::Error),
    /// Results could not be written to the output stream.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
