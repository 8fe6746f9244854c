//! Storage error module.
//!
//! This module defines the errors that saving and loading word files can
//! produce. Each outcome the caller has to tell apart gets its own variant.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting or restoring a trie.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Save refused because the destination file is already there.
    #[error("File already exists, try another name: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Load failed because the source file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Any other read or write failure.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The file being read or written
        path: PathBuf,
        /// The underlying error
        #[source]
        source: io::Error,
    },

    /// The stem cannot name a file inside the storage directory.
    #[error("Invalid file name: {0:?}")]
    InvalidStem(String),
}
