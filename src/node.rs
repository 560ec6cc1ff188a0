//! Provides the node storage strategies which a Trie is built from.
//!
//! Every vertex of a Trie is a node which exclusively owns its children and
//! records whether the path from the root to it spells a complete word.
//! Two storage strategies satisfy the same [`TrieNode`] contract:
//!
//!  - [`ArrayNode`]: a fixed array of 26 slots indexed by `c - 'a'`. Dense
//!    and O(1), but restricted to the lowercase ASCII alphabet.
//!  - [`MapNode`]: a [`HashMap`] keyed by `char`. Sparse, and accepts any
//!    character.
//!
//! ```
//! use strategic_trie::node::{ArrayNode, MapNode, TrieNode};
//!
//! let mut root = ArrayNode::default();
//! root.add_child('c').set_terminal(true);
//! assert!(root.has_child('c'));
//! assert!(root.child('c').is_some_and(|n| n.is_terminal()));
//!
//! assert!(!ArrayNode::accepts('é'));
//! assert!(MapNode::accepts('é'));
//! ```

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Number of slots in an [`ArrayNode`]: one per letter `'a'..='z'`.
pub const ALPHABET_SIZE: usize = 26;

/// Operations every node storage strategy must support.
///
/// Nodes never decide *when* to create or prune children; that is the job
/// of a [`crate::algorithm::TrieAlgorithm`]. A node only stores what it is
/// told to.
pub trait TrieNode: Default {
    /// Can this storage represent `c`?
    fn accepts(c: char) -> bool;

    /// Does a child exist for `c`?
    fn has_child(&self, c: char) -> bool {
        self.child(c).is_some()
    }

    /// Create a new empty child for `c` and return it. Any existing child
    /// (and its whole subtree) for `c` is replaced. The terminal flag and the
    /// other children are left alone.
    fn add_child(&mut self, c: char) -> &mut Self;

    /// Return the child for `c`, creating an empty one only if it is absent.
    fn child_or_insert(&mut self, c: char) -> &mut Self;

    /// Unlink the child for `c`, dropping its subtree. Returns false if there
    /// was no such child.
    ///
    /// The node does not check whether the child is still needed.
    fn remove_child(&mut self, c: char) -> bool;

    /// Get the child for `c`.
    fn child(&self, c: char) -> Option<&Self>;

    /// Get the child for `c` mutably.
    fn child_mut(&mut self, c: char) -> Option<&mut Self>;

    /// Mark (or unmark) this node as the end of a word.
    fn set_terminal(&mut self, terminal: bool);

    /// Does a word end at this node?
    fn is_terminal(&self) -> bool;

    /// How many children does this node have?
    fn len(&self) -> usize;

    /// Does this node have no children? The terminal flag is not considered.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A non-terminal node without children serves no word and, unless it is
    /// the root, must be pruned.
    fn is_prunable(&self) -> bool {
        !self.is_terminal() && self.is_empty()
    }
}

/// Dense node storage: one slot per lowercase ASCII letter.
///
/// Reads of characters outside `'a'..='z'` report absence. Writes of such
/// characters panic, see [`ArrayNode::add_child`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", from = "ArrayNodeRepr")
)]
pub struct ArrayNode {
    children: [Option<Box<ArrayNode>>; ALPHABET_SIZE],
    // Always equal to the number of occupied slots
    #[cfg_attr(feature = "serde", serde(skip))]
    len: usize,
    terminal: bool,
}

// Deserialized form of an ArrayNode: the child count is rebuilt from the
// slots rather than trusted from the input.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(crate = "serde_crate")]
struct ArrayNodeRepr {
    children: [Option<Box<ArrayNode>>; ALPHABET_SIZE],
    terminal: bool,
}

#[cfg(feature = "serde")]
impl From<ArrayNodeRepr> for ArrayNode {
    fn from(repr: ArrayNodeRepr) -> Self {
        let len = repr.children.iter().filter(|slot| slot.is_some()).count();
        Self {
            children: repr.children,
            len,
            terminal: repr.terminal,
        }
    }
}

// Subtrees are freed from a work-list so that dropping a long chain of
// nodes doesn't recurse once per level.
impl Drop for ArrayNode {
    fn drop(&mut self) {
        let mut pending: Vec<Box<ArrayNode>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl ArrayNode {
    fn slot(c: char) -> Option<usize> {
        if Self::accepts(c) {
            Some(c as usize - 'a' as usize)
        } else {
            None
        }
    }

    fn write_slot(c: char) -> usize {
        match Self::slot(c) {
            Some(idx) => idx,
            None => panic!("ArrayNode cannot store {c:?}: only 'a'..='z' are supported"),
        }
    }
}

impl TrieNode for ArrayNode {
    fn accepts(c: char) -> bool {
        c.is_ascii_lowercase()
    }

    /// # Panics
    ///
    /// Panics if `c` is not in `'a'..='z'`.
    fn add_child(&mut self, c: char) -> &mut Self {
        let idx = Self::write_slot(c);
        if self.children[idx].is_none() {
            self.len += 1;
        }
        self.children[idx].insert(Box::default())
    }

    /// # Panics
    ///
    /// Panics if `c` is not in `'a'..='z'`.
    fn child_or_insert(&mut self, c: char) -> &mut Self {
        let idx = Self::write_slot(c);
        if self.children[idx].is_none() {
            self.len += 1;
        }
        self.children[idx].get_or_insert_with(Box::default)
    }

    fn remove_child(&mut self, c: char) -> bool {
        let removed = match Self::slot(c) {
            Some(idx) => self.children[idx].take().is_some(),
            None => false,
        };
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn child(&self, c: char) -> Option<&Self> {
        match Self::slot(c) {
            Some(idx) => self.children[idx].as_deref(),
            None => None,
        }
    }

    fn child_mut(&mut self, c: char) -> Option<&mut Self> {
        match Self::slot(c) {
            Some(idx) => self.children[idx].as_deref_mut(),
            None => None,
        }
    }

    fn set_terminal(&mut self, terminal: bool) {
        self.terminal = terminal;
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// Sparse node storage: children live in a map keyed by `char`, so any
/// character is accepted.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct MapNode {
    children: HashMap<char, MapNode>,
    terminal: bool,
}

impl Drop for MapNode {
    fn drop(&mut self) {
        let mut pending: Vec<MapNode> = self.children.drain().map(|(_, node)| node).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, node)| node));
        }
    }
}

impl TrieNode for MapNode {
    fn accepts(_c: char) -> bool {
        true
    }

    fn has_child(&self, c: char) -> bool {
        self.children.contains_key(&c)
    }

    fn add_child(&mut self, c: char) -> &mut Self {
        let child = self.children.entry(c).or_default();
        *child = MapNode::default();
        child
    }

    fn child_or_insert(&mut self, c: char) -> &mut Self {
        self.children.entry(c).or_default()
    }

    fn remove_child(&mut self, c: char) -> bool {
        self.children.remove(&c).is_some()
    }

    fn child(&self, c: char) -> Option<&Self> {
        self.children.get(&c)
    }

    fn child_mut(&mut self, c: char) -> Option<&mut Self> {
        self.children.get_mut(&c)
    }

    fn set_terminal(&mut self, terminal: bool) {
        self.terminal = terminal;
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn len(&self) -> usize {
        self.children.len()
    }
}
