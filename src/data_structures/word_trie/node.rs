//! Node implementation for the word trie.
//!
//! A node owns its children outright, so the whole trie is a strict tree
//! with no shared or back references.

use std::collections::{btree_map, BTreeMap};
use std::fmt;

/// A node in the word trie.
///
/// Each node sits at the end of one character edge. Terminal nodes mark the
/// end of a stored word.
#[derive(Default)]
pub struct TrieNode {
    /// Map of characters to child nodes, ordered by character
    children: BTreeMap<char, TrieNode>,

    /// Whether a stored word ends at this node
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached through `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Returns the child reached through `c` for mutation, if any.
    pub fn child_mut(&mut self, c: char) -> Option<&mut TrieNode> {
        self.children.get_mut(&c)
    }

    /// Returns the child reached through `c`, attaching a fresh node first
    /// when the edge does not exist yet.
    pub fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }

    /// Attaches `node` under `c`, replacing any previous child.
    pub fn set_child(&mut self, c: char, node: TrieNode) {
        self.children.insert(c, node);
    }

    /// Detaches and returns the child reached through `c`.
    pub fn remove_child(&mut self, c: char) -> Option<TrieNode> {
        self.children.remove(&c)
    }

    /// Whether this node has no outgoing edges.
    pub fn has_no_children(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of outgoing edges.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Iterates over the outgoing edges in ascending character order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(c, node)| (*c, node))
    }

    /// Drops every child of this node.
    pub(crate) fn clear_children(&mut self) {
        self.children.clear();
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the outgoing edges, never the subtree.
        f.debug_struct("TrieNode")
            .field("edges", &self.children.keys().collect::<String>())
            .field("is_terminal", &self.is_terminal)
            .finish()
    }
}

/// A node being copied: the edge it hangs from, the source edges still to
/// visit, and the children copied so far.
struct CloneFrame<'a> {
    edge: Option<char>,
    is_terminal: bool,
    pending: btree_map::Iter<'a, char, TrieNode>,
    copied: BTreeMap<char, TrieNode>,
}

impl<'a> CloneFrame<'a> {
    fn new(edge: Option<char>, node: &'a TrieNode) -> Self {
        Self {
            edge,
            is_terminal: node.is_terminal,
            pending: node.children.iter(),
            copied: BTreeMap::new(),
        }
    }
}

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        // Post-order copy driven by a heap stack, one frame per level.
        let mut stack = vec![CloneFrame::new(None, self)];
        loop {
            let next = match stack.last_mut() {
                Some(frame) => frame.pending.next(),
                None => return Self::new(),
            };
            if let Some((&c, child)) = next {
                stack.push(CloneFrame::new(Some(c), child));
                continue;
            }

            let Some(done) = stack.pop() else {
                return Self::new();
            };
            let node = TrieNode {
                children: done.copied,
                is_terminal: done.is_terminal,
            };
            match (stack.last_mut(), done.edge) {
                (Some(parent), Some(c)) => {
                    parent.copied.insert(c, node);
                }
                _ => return node,
            }
        }
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.is_terminal != b.is_terminal || a.children.len() != b.children.len() {
                return false;
            }
            for ((ca, na), (cb, nb)) in a.children.iter().zip(&b.children) {
                if ca != cb {
                    return false;
                }
                stack.push((na, nb));
            }
        }
        true
    }
}

impl Eq for TrieNode {}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Flatten the subtree onto a heap stack so that dropping a long chain
        // never recurses once per character.
        let mut stack: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
