//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::{
    ConfigError, ErrorContext, ErrorReporter, StorageError, TracingErrorReporter, WordTrieError,
};
use std::io;
use std::path::PathBuf;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = WordTrieError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Storage errors keep their distinct messages when wrapped.
#[test]
fn test_storage_error_display() {
    let exists: WordTrieError = StorageError::AlreadyExists(PathBuf::from("words.txt")).into();
    assert_eq!(
        exists.to_string(),
        "Storage error: File already exists, try another name: words.txt"
    );

    let missing: WordTrieError = StorageError::NotFound(PathBuf::from("gone.txt")).into();
    assert_eq!(missing.to_string(), "Storage error: File not found: gone.txt");

    let io_error = StorageError::Io {
        path: PathBuf::from("disk.txt"),
        source: io::Error::new(io::ErrorKind::Other, "disk full"),
    };
    assert_eq!(io_error.to_string(), "I/O error on disk.txt: disk full");
    assert!(std::error::Error::source(&io_error).is_some());
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let config_error: WordTrieError = ConfigError::ValidationError("bad".to_string()).into();
    assert!(config_error.to_string().contains("bad"));

    let io_error: WordTrieError = io::Error::new(io::ErrorKind::NotFound, "file not found").into();
    assert!(io_error.to_string().contains("file not found"));
}

/// Test that the default tracing error reporter can be used.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let context = ErrorContext::new(StorageError::InvalidStem(String::new()), "test_component");

    // Just make sure this doesn't panic
    reporter.report(&context);
}
