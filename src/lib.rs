//! Provides a simple Trie implementation for storing words, built from two
//! independent choices:
//!
//!  - how each node stores its children ([`crate::node`]): a dense array
//!    for the lowercase alphabet ([`crate::node::ArrayNode`]) or a sparse map
//!    which accepts any character ([`crate::node::MapNode`]);
//!  - how the tree is walked ([`crate::algorithm`]): with loops and an
//!    explicit stack ([`crate::algorithm::Iterative`]) or with recursion
//!    ([`crate::algorithm::Recursive`]).
//!
//! Every combination gives identical results. The walking strategy is held
//! by value in the [`crate::trie::Trie`] and may be swapped on a populated
//! Trie.
//!
//! The interface supports inserting and deleting words and checking for
//! words and prefixes. Deleting a word prunes the nodes which no longer lead
//! to any word, without disturbing the others.
//!
//! ```
//! use strategic_trie::algorithm::Algorithm;
//! use strategic_trie::node::TrieNode;
//! use strategic_trie::trie::ArrayTrie;
//!
//! let mut trie = ArrayTrie::new(Algorithm::Iterative);
//! for word in ["dog", "d", "do", "doggie"] {
//!     trie.insert_word(word).unwrap();
//! }
//! assert!(trie.delete_word("doggie"));
//! assert!(trie.contains_word("dog"));
//! assert!(!trie.root().is_empty());
//! ```
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * algorithm : [`crate::algorithm`]
//! * node : [`crate::node`]
//!
//! Typical usages for this data structure:
//!  - Dictionaries and spell checking
//!  - Autocomplete style prefix checks
//!  - Comparing storage and traversal trade-offs on the same data
//!  - ...

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod algorithm;

pub mod error;

pub mod node;

pub mod trie;
