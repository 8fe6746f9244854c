//! Word Trie Implementation
//!
//! This module provides a prefix tree that stores a set of words, answers
//! exact-word and prefix queries, and deletes words while pruning exactly the
//! branch that no other word needs. Every walk is iterative, so input length
//! never turns into recursion depth.

mod iter;
mod node;

use std::io::{self, BufRead, Write};

pub use iter::Words;
pub use node::TrieNode;

/// A set of words stored as a prefix tree.
///
/// Invariants kept by every operation:
/// * the root always exists, even when no word is stored;
/// * a node is terminal iff a stored word ends at it;
/// * no node other than the root is both childless and non-terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTrie {
    /// The root node, representing the empty prefix
    root: TrieNode,

    /// Number of stored words
    len: usize,
}

impl WordTrie {
    /// Creates a new empty `WordTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word into the trie.
    ///
    /// Missing nodes along the path are created on demand and the final node
    /// is marked terminal. Inserting a word that is already stored leaves the
    /// trie unchanged. The empty word marks the root itself.
    ///
    /// # Returns
    ///
    /// `true` if the word was not stored before, `false` otherwise.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.child_or_insert(c);
        }

        let is_new = !node.is_terminal;
        if is_new {
            node.is_terminal = true;
            self.len += 1;
        }
        tracing::debug!(bytes = word.len(), is_new, words = self.len, "Inserted word");
        is_new
    }

    /// Checks whether `word` is stored.
    ///
    /// A path that exists only as the prefix of longer words is not a match.
    pub fn search<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.find_node(word.as_ref())
            .map_or(false, |node| node.is_terminal)
    }

    /// Checks whether any stored word begins with `prefix`.
    pub fn starts_with<P>(&self, prefix: P) -> bool
    where
        P: AsRef<str>,
    {
        // Every surviving node leads to at least one terminal node, so the
        // path existing is enough unless it is the bare root.
        match self.find_node(prefix.as_ref()) {
            Some(node) => node.is_terminal || !node.has_no_children(),
            None => false,
        }
    }

    /// Removes `word` from the trie, pruning nodes that no longer lead to
    /// any stored word.
    ///
    /// Absent words, including paths that are only prefixes of stored words,
    /// are left alone. Nodes shared with other words are never removed.
    ///
    /// # Returns
    ///
    /// `true` if the word was stored and has been removed, `false` otherwise.
    pub fn delete<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let chars: Vec<char> = word.as_ref().chars().collect();

        // Locate the word and remember the deepest node on its path that has
        // to survive: the root, any terminal node, or any branching node.
        let mut cut = 0;
        let mut node = &self.root;
        for (depth, &c) in chars.iter().enumerate() {
            if depth > 0 && (node.is_terminal || node.child_count() > 1) {
                cut = depth;
            }
            node = match node.child(c) {
                Some(child) => child,
                None => return false,
            };
        }

        if !node.is_terminal {
            return false;
        }
        let prunable = node.has_no_children();

        // Walk again with mutable access, either to the word's node to clear
        // its flag, or to the cut point to detach the dead suffix.
        let stop = if prunable { cut } else { chars.len() };
        let mut node = &mut self.root;
        for &c in &chars[..stop] {
            node = match node.child_mut(c) {
                Some(child) => child,
                None => return false,
            };
        }

        if prunable && !chars.is_empty() {
            node.remove_child(chars[cut]);
            tracing::debug!(
                pruned = chars.len() - cut,
                "Detached dead branch after delete"
            );
        } else {
            node.is_terminal = false;
        }

        self.len -= 1;
        true
    }

    /// Returns a lazy iterator over every stored word.
    ///
    /// Words are produced in ascending character order, each word before
    /// the longer words it prefixes.
    pub fn words(&self) -> Words<'_> {
        Words::new(String::new(), &self.root)
    }

    /// Returns a lazy iterator over the stored words that begin with `prefix`.
    pub fn words_with_prefix<P>(&self, prefix: P) -> Words<'_>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        match self.find_node(prefix) {
            Some(node) => Words::new(prefix.to_string(), node),
            None => Words::empty(),
        }
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the trie holds no words and no nodes besides the root.
    pub fn is_empty(&self) -> bool {
        !self.root.is_terminal && self.root.has_no_children()
    }

    /// Returns the number of nodes in the trie, the root included.
    ///
    /// This walks the whole tree, so it's an O(n) operation.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children().map(|(_, child)| child));
        }
        count
    }

    /// Removes every word, leaving a bare root.
    pub fn clear(&mut self) {
        self.root.clear_children();
        self.root.is_terminal = false;
        self.len = 0;
    }

    /// Returns a reference to the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Writes every stored word to `writer`, one per line, each followed by
    /// `\n`.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of words written.
    /// * `Err(io::Error)` - If the writer failed.
    pub fn write_words<W: Write>(&self, mut writer: W) -> io::Result<usize> {
        let mut count = 0;
        for word in self.words() {
            writer.write_all(word.as_bytes())?;
            writer.write_all(b"\n")?;
            count += 1;
        }
        writer.flush()?;
        Ok(count)
    }

    /// Reads words from `reader`, one per line, and inserts them.
    ///
    /// Lines are taken verbatim without their `\n` or `\r\n` terminator; a
    /// blank line stands for the empty word. Every line is read before the
    /// first insertion, so a read failure leaves the trie unchanged.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of words that were not stored before.
    /// * `Err(io::Error)` - If reading failed or the input is not UTF-8.
    pub fn read_words<R: BufRead>(&mut self, reader: R) -> io::Result<usize> {
        let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
        Ok(lines.into_iter().filter(|word| self.insert(word)).count())
    }

    fn find_node(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in path.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }
}

impl<S: AsRef<str>> Extend<S> for WordTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
