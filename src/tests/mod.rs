//! Test modules for the word trie.
//!
//! This module contains the crate-level test suites:
//! - Property-based tests for the trie algorithms using proptest
//! - Session tests that drive the menu through persistence failures
//! - Configuration and error handling tests
//! - Shared fixtures and strategies

pub mod config_tests;
pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_list_strategy, word_strategy, TestFixture};
