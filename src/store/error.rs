//! Postcard store error types
//!
//! Defines all errors that can occur in the store layer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the postcard store
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Named source file does not exist
    #[error("Source not found: {0:?}")]
    SourceNotFound(PathBuf),

    /// A record failed to parse during an index rebuild
    #[error("Parse error at record {position}: {reason}")]
    Parse {
        /// Position of the offending record in the record sequence
        position: usize,
        /// What was wrong with it
        reason: String,
    },
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
