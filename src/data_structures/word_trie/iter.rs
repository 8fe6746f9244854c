//! Lazy depth-first enumeration of stored words.

use super::node::TrieNode;

/// Iterator over the words stored below a node.
///
/// Words come out in ascending character order, and a word is always
/// yielded before any longer word that extends it.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    /// Path of the node most recently visited
    path: String,
    /// Pending nodes: byte length of the parent's path, incoming edge, node
    stack: Vec<(usize, Option<char>, &'a TrieNode)>,
}

impl<'a> Words<'a> {
    /// Starts a traversal at `node`, whose path from the root is `prefix`.
    pub(crate) fn new(prefix: String, node: &'a TrieNode) -> Self {
        Self {
            stack: vec![(prefix.len(), None, node)],
            path: prefix,
        }
    }

    /// An iterator that yields nothing.
    pub(crate) fn empty() -> Self {
        Self {
            path: String::new(),
            stack: Vec::new(),
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((parent_len, edge, node)) = self.stack.pop() {
            self.path.truncate(parent_len);
            if let Some(c) = edge {
                self.path.push(c);
            }

            // Reverse so the smallest character is popped first.
            let len = self.path.len();
            self.stack
                .extend(node.children().rev().map(|(c, child)| (len, Some(c), child)));

            if node.is_terminal {
                return Some(self.path.clone());
            }
        }
        None
    }
}
