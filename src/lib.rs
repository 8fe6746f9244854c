//! Word Trie Library
//!
//! This library contains the components of the word trie application: the
//! prefix tree itself, flat-file persistence, the interactive menu session,
//! and the configuration and error plumbing around them.
//!
//! # Architecture
//!
//! - The trie never fails; its operations are total over all strings.
//! - Only persistence can fail, and each failure kind has its own variant.
//! - State is passed explicitly: a session owns its trie, nothing is global.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;
pub mod session;
pub mod storage;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::WordTrie;
pub use session::Session;
pub use storage::WordStore;

/// Version information for the word trie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
