//! Provides the traversal strategies which implement Trie operations.
//!
//! A strategy holds no state of its own: it is handed the root node of a
//! Trie and walks it. This means strategies may be swapped on a populated
//! Trie without affecting the stored words.
//!
//! Two strategies are provided and they are observably identical:
//!  - [`Iterative`]: loops, with an explicit stack of `(char, parent)` pairs
//!    to drive pruning during deletion. Uses heap space rather than call
//!    depth, so is preferable for very long words.
//!  - [`Recursive`]: one call frame per character; pruning happens as the
//!    frames return.
//!
//! [`Algorithm`] is a value which selects one of them at runtime and is what
//! a [`crate::trie::Trie`] stores.
//!
//! Deletion never disturbs other words: after clearing the terminal flag of
//! the deleted word, nodes are pruned bottom-up only while they are
//! non-terminal and childless. The root is never pruned.
//!
//! The empty word is represented by the root: inserting `""` marks the root
//! terminal, and `""` is always a contained prefix.
//!
//! ```
//! use strategic_trie::algorithm::{Iterative, Recursive, TrieAlgorithm};
//! use strategic_trie::node::{MapNode, TrieNode};
//!
//! let mut root = MapNode::default();
//! Iterative.insert_word(&mut root, "cat");
//! assert!(Recursive.contains_word(&root, "cat"));
//! assert!(Recursive.contains_prefix(&root, "ca"));
//! assert!(Recursive.delete_word(&mut root, "cat"));
//! assert!(root.is_empty());
//! ```

use std::str::Chars;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::node::TrieNode;

/// Operations every traversal strategy must support.
///
/// Characters which the node storage cannot represent are never stored, so
/// the read operations and [`TrieAlgorithm::delete_word`] report them as
/// absent. Inserting them is a caller error: [`crate::trie::Trie`] rejects
/// such words before they reach a strategy.
pub trait TrieAlgorithm {
    /// Insert a word below `root`. Inserting a word twice changes nothing.
    fn insert_word<N: TrieNode>(&self, root: &mut N, word: &str);

    /// Delete a word below `root`, pruning nodes that no longer serve any
    /// word. Returns false, without touching the tree, if the word was not
    /// present as a complete word.
    fn delete_word<N: TrieNode>(&self, root: &mut N, word: &str) -> bool;

    /// Was this exact word inserted?
    fn contains_word<N: TrieNode>(&self, root: &N, word: &str) -> bool;

    /// Does any inserted word start with this prefix? A word is a prefix of
    /// itself.
    fn contains_prefix<N: TrieNode>(&self, root: &N, prefix: &str) -> bool;
}

/// Loop based traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Iterative;

impl Iterative {
    fn last_matching_node<'a, N: TrieNode>(mut node: &'a N, word: &str) -> Option<&'a N> {
        for c in word.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }

    fn last_matching_node_mut<'a, N: TrieNode, P: IntoIterator<Item = char>>(
        mut node: &'a mut N,
        path: P,
    ) -> Option<&'a mut N> {
        for c in path {
            node = node.child_mut(c)?;
        }
        Some(node)
    }
}

impl TrieAlgorithm for Iterative {
    fn insert_word<N: TrieNode>(&self, root: &mut N, word: &str) {
        let mut node = root;
        for c in word.chars() {
            node = node.child_or_insert(c);
        }
        node.set_terminal(true);
    }

    fn delete_word<N: TrieNode>(&self, root: &mut N, word: &str) -> bool {
        let mut stack: Vec<(char, &N)> = Vec::with_capacity(word.len());
        let mut node: &N = root;
        for c in word.chars() {
            match node.child(c) {
                Some(child) => {
                    stack.push((c, node));
                    node = child;
                }
                None => return false,
            }
        }
        if !node.is_terminal() {
            return false;
        }

        // Unwind to find the shallowest edge which must go. `prunable` says
        // whether the node below the popped parent is garbage once the word
        // is gone.
        let mut prune = None;
        let mut prunable = node.is_empty();
        while let Some((c, parent)) = stack.pop() {
            if !prunable {
                break;
            }
            prune = Some((stack.len(), c));
            // Losing its only child leaves the parent empty
            prunable = parent.len() == 1 && !parent.is_terminal();
        }

        match prune {
            // Dropping the edge drops the word's node along with it
            Some((depth, c)) => {
                match Self::last_matching_node_mut(root, word.chars().take(depth)) {
                    Some(parent) => parent.remove_child(c),
                    None => false,
                }
            }
            None => match Self::last_matching_node_mut(root, word.chars()) {
                Some(node) => {
                    node.set_terminal(false);
                    true
                }
                None => false,
            },
        }
    }

    fn contains_word<N: TrieNode>(&self, root: &N, word: &str) -> bool {
        Self::last_matching_node(root, word).is_some_and(|node| node.is_terminal())
    }

    fn contains_prefix<N: TrieNode>(&self, root: &N, prefix: &str) -> bool {
        Self::last_matching_node(root, prefix).is_some()
    }
}

/// Call stack based traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Recursive;

impl Recursive {
    fn insert<N: TrieNode>(node: &mut N, chars: &mut Chars<'_>) {
        match chars.next() {
            Some(c) => Self::insert(node.child_or_insert(c), chars),
            None => node.set_terminal(true),
        }
    }

    fn delete<N: TrieNode>(node: &mut N, chars: &mut Chars<'_>) -> bool {
        let Some(c) = chars.next() else {
            if !node.is_terminal() {
                return false;
            }
            node.set_terminal(false);
            return true;
        };
        let Some(child) = node.child_mut(c) else {
            return false;
        };
        let deleted = Self::delete(child, chars);
        if deleted && child.is_prunable() {
            node.remove_child(c);
        }
        deleted
    }

    fn last_matching_node<'a, N: TrieNode>(node: &'a N, chars: &mut Chars<'_>) -> Option<&'a N> {
        match chars.next() {
            Some(c) => Self::last_matching_node(node.child(c)?, chars),
            None => Some(node),
        }
    }
}

impl TrieAlgorithm for Recursive {
    fn insert_word<N: TrieNode>(&self, root: &mut N, word: &str) {
        Self::insert(root, &mut word.chars());
    }

    fn delete_word<N: TrieNode>(&self, root: &mut N, word: &str) -> bool {
        Self::delete(root, &mut word.chars())
    }

    fn contains_word<N: TrieNode>(&self, root: &N, word: &str) -> bool {
        Self::last_matching_node(root, &mut word.chars()).is_some_and(|node| node.is_terminal())
    }

    fn contains_prefix<N: TrieNode>(&self, root: &N, prefix: &str) -> bool {
        Self::last_matching_node(root, &mut prefix.chars()).is_some()
    }
}

/// Selects a traversal strategy at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Algorithm {
    /// Use [`Iterative`].
    #[default]
    Iterative,
    /// Use [`Recursive`].
    Recursive,
}

impl Algorithm {
    /// Every available strategy.
    pub const ALL: [Algorithm; 2] = [Algorithm::Iterative, Algorithm::Recursive];
}

impl TrieAlgorithm for Algorithm {
    fn insert_word<N: TrieNode>(&self, root: &mut N, word: &str) {
        match self {
            Algorithm::Iterative => Iterative.insert_word(root, word),
            Algorithm::Recursive => Recursive.insert_word(root, word),
        }
    }

    fn delete_word<N: TrieNode>(&self, root: &mut N, word: &str) -> bool {
        match self {
            Algorithm::Iterative => Iterative.delete_word(root, word),
            Algorithm::Recursive => Recursive.delete_word(root, word),
        }
    }

    fn contains_word<N: TrieNode>(&self, root: &N, word: &str) -> bool {
        match self {
            Algorithm::Iterative => Iterative.contains_word(root, word),
            Algorithm::Recursive => Recursive.contains_word(root, word),
        }
    }

    fn contains_prefix<N: TrieNode>(&self, root: &N, prefix: &str) -> bool {
        match self {
            Algorithm::Iterative => Iterative.contains_prefix(root, prefix),
            Algorithm::Recursive => Recursive.contains_prefix(root, prefix),
        }
    }
}
