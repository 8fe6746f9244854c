//! Data structures for the word trie.
//!
//! This module contains the in-memory prefix tree and its node type.
//! The structures are single-owner: mutation goes through `&mut`, and no
//! internal locking is performed.

pub mod word_trie;

// Re-export common data structures
pub use word_trie::{TrieNode, WordTrie, Words};
