//! Provides a Trie of words built from a choice of node storage and
//! traversal strategy.
//!
//! The node storage is chosen with a type parameter and is fixed for the
//! lifetime of the Trie. The traversal strategy is a value and may be
//! swapped at any time without losing the stored words.
//!
//! Example 1
//! ```
//! use strategic_trie::algorithm::Algorithm;
//! use strategic_trie::trie::ArrayTrie;
//!
//! let mut trie = ArrayTrie::new(Algorithm::Recursive);
//! trie.insert_word("cat").expect("lowercase letters only");
//! trie.insert_word("ca").expect("lowercase letters only");
//!
//! assert!(trie.contains_word("cat"));
//! assert!(trie.contains_word("ca"));
//! assert!(!trie.contains_word("c"));
//! assert!(trie.contains_prefix("c"));
//!
//! // Characters outside 'a'..='z' cannot be stored in array nodes
//! assert!(trie.insert_word("Cat").is_err());
//! ```
//!
//! Example 2
//! ```
//! use strategic_trie::algorithm::Algorithm;
//! use strategic_trie::trie::MapTrie;
//!
//! let mut trie = MapTrie::default();
//! trie.insert_word("doggie").unwrap();
//! trie.insert_word("dog").unwrap();
//!
//! // Swap strategies on a populated trie
//! trie.set_algorithm(Algorithm::Recursive);
//! assert!(trie.delete_word("doggie"));
//! assert!(!trie.delete_word("doggie"));
//! assert!(trie.contains_word("dog"));
//! assert!(!trie.contains_prefix("dogg"));
//!
//! assert!(trie.delete_word("dog"));
//! assert!(trie.is_empty());
//! ```
//!
//! A Trie does no locking of its own. To share one between threads, wrap it
//! in a lock which guards every operation, e.g. `Arc<RwLock<MapTrie>>`.

use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::algorithm::{Algorithm, TrieAlgorithm};
use crate::error::{Result, TrieError};
use crate::node::{ArrayNode, MapNode, TrieNode};

/// Stores words as paths of nodes below a root.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Trie<N = MapNode> {
    root: N,
    algorithm: Algorithm,
}

/// A Trie with dense storage for the lowercase ASCII alphabet.
pub type ArrayTrie = Trie<ArrayNode>;

/// A Trie with sparse storage accepting any character.
pub type MapTrie = Trie<MapNode>;

impl<N: TrieNode> Trie<N> {
    /// Create a new, empty Trie using the supplied traversal strategy.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            root: N::default(),
            algorithm,
        }
    }

    /// The traversal strategy currently in use.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Replace the traversal strategy. Stored words are unaffected.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        trace!(from = ?self.algorithm, to = ?algorithm, "swapping trie algorithm");
        self.algorithm = algorithm;
    }

    /// The root node. It always exists, even when the Trie is empty.
    pub fn root(&self) -> &N {
        &self.root
    }

    /// Insert a word. Inserting a word which is already present changes
    /// nothing. The empty word is stored on the root.
    ///
    /// Returns [`TrieError::InvalidCharacter`] if the word contains a
    /// character the node storage cannot represent, in which case the Trie
    /// is left untouched.
    pub fn insert_word(&mut self, word: &str) -> Result<()> {
        if let Some((position, character)) = word.chars().enumerate().find(|(_, c)| !N::accepts(*c))
        {
            debug!(word, %character, position, "rejecting word");
            return Err(TrieError::InvalidCharacter {
                character,
                position,
            });
        }
        trace!(word, algorithm = ?self.algorithm, "inserting word");
        self.algorithm.insert_word(&mut self.root, word);
        Ok(())
    }

    /// Delete a word. Returns true if the word was present (and now isn't).
    /// Other words, including those sharing a prefix with this one, are not
    /// affected.
    pub fn delete_word(&mut self, word: &str) -> bool {
        let deleted = self.algorithm.delete_word(&mut self.root, word);
        trace!(word, deleted, algorithm = ?self.algorithm, "deleting word");
        deleted
    }

    /// Was this exact word inserted? A word which is only the prefix of
    /// inserted words is not contained.
    pub fn contains_word(&self, word: &str) -> bool {
        self.algorithm.contains_word(&self.root, word)
    }

    /// Does any inserted word start with the supplied prefix?
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.algorithm.contains_prefix(&self.root, prefix)
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.root.is_empty() && !self.root.is_terminal()
    }

    /// Clear the Trie. The traversal strategy is kept.
    pub fn clear(&mut self) {
        self.root = N::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill<N: TrieNode>(trie: &mut Trie<N>, words: &[&str]) {
        for word in words {
            trie.insert_word(word).expect("valid word");
        }
    }

    #[test]
    fn it_can_create_an_empty_trie() {
        let trie = ArrayTrie::new(Algorithm::Iterative);
        assert!(trie.is_empty());
        assert!(trie.root().is_empty());
        assert_eq!(Algorithm::Iterative, trie.algorithm());

        let trie = MapTrie::default();
        assert!(trie.is_empty());
        assert_eq!(Algorithm::Iterative, trie.algorithm());
    }

    #[test]
    fn it_finds_exact_word() {
        for algorithm in Algorithm::ALL {
            let mut trie = ArrayTrie::new(algorithm);
            assert!(!trie.contains_word("cat"));
            trie.insert_word("cat").unwrap();
            assert!(trie.contains_word("cat"));
            assert!(!trie.contains_word("cats"));
            assert!(!trie.contains_word("ca"));
        }
    }

    #[test]
    fn it_can_swap_algorithm_without_losing_words() {
        let mut trie = MapTrie::new(Algorithm::Iterative);
        fill(&mut trie, &["dog", "d", "do", "doggie"]);
        let before = trie.clone();

        trie.set_algorithm(Algorithm::Recursive);
        assert_eq!(Algorithm::Recursive, trie.algorithm());
        assert_eq!(before.root(), trie.root());
        for word in ["dog", "d", "do", "doggie"] {
            assert!(trie.contains_word(word));
        }

        assert!(trie.delete_word("doggie"));
        trie.set_algorithm(Algorithm::Iterative);
        assert!(!trie.contains_word("doggie"));
        assert!(trie.contains_word("dog"));
        assert!(!trie.is_empty());
    }

    #[test]
    fn it_empties_after_deleting_every_word() {
        for algorithm in Algorithm::ALL {
            let mut trie = ArrayTrie::new(algorithm);
            fill(&mut trie, &["dog", "d", "do", "doggie"]);
            assert!(trie.delete_word("doggie"));
            for word in ["d", "dog", "do"] {
                assert!(trie.delete_word(word));
            }
            for word in ["dog", "d", "do", "doggie"] {
                assert!(!trie.contains_word(word));
            }
            assert!(trie.root().is_empty());
            assert!(trie.is_empty());
        }
    }

    #[test]
    fn it_can_remove_a_missing_word() {
        for algorithm in Algorithm::ALL {
            let mut trie = MapTrie::new(algorithm);
            assert!(!trie.delete_word("nonexistent"));
            assert!(trie.is_empty());
        }
    }

    #[test]
    fn it_rejects_invalid_characters_for_arrays() {
        let mut trie = ArrayTrie::default();
        trie.insert_word("cat").unwrap();
        let before = trie.clone();

        assert_eq!(
            Err(TrieError::InvalidCharacter {
                character: 'T',
                position: 2
            }),
            trie.insert_word("caT")
        );
        assert_eq!(
            Err(TrieError::InvalidCharacter {
                character: 'é',
                position: 3
            }),
            trie.insert_word("café")
        );
        // Nothing was created on the way to the bad character
        assert_eq!(before, trie);
        assert!(!trie.contains_prefix("caf"));
    }

    #[test]
    fn it_reports_invalid_characters_as_absent() {
        let mut trie = ArrayTrie::default();
        trie.insert_word("cat").unwrap();
        assert!(!trie.contains_word("Cat"));
        assert!(!trie.contains_prefix("c@"));
        assert!(!trie.delete_word("cat!"));
        assert!(trie.contains_word("cat"));
    }

    #[test]
    fn it_accepts_any_character_for_maps() {
        let mut trie = MapTrie::default();
        assert!(trie.insert_word("Café au lait").is_ok());
        assert!(trie.contains_word("Café au lait"));
        assert!(trie.contains_prefix("Café"));
        assert!(trie.delete_word("Café au lait"));
        assert!(trie.is_empty());
    }

    #[test]
    fn it_stores_the_empty_word_on_the_root() {
        let mut trie = ArrayTrie::default();
        trie.insert_word("").unwrap();
        assert!(trie.contains_word(""));
        assert!(trie.root().is_terminal());
        assert!(trie.root().is_empty());
        assert!(!trie.is_empty());
        assert!(trie.delete_word(""));
        assert!(trie.is_empty());
    }

    #[test]
    fn it_can_clear_a_trie() {
        let mut trie = MapTrie::new(Algorithm::Recursive);
        fill(&mut trie, &["", "abc", "abd"]);
        trie.clear();
        assert!(trie.is_empty());
        assert!(!trie.contains_word("abc"));
        assert!(!trie.contains_word(""));
        assert_eq!(Algorithm::Recursive, trie.algorithm());
    }

    #[test]
    fn it_matches_results_across_storages() {
        let words = ["cat", "ca", "cata", "dog", "d", "do", "doggie"];
        for algorithm in Algorithm::ALL {
            let mut array = ArrayTrie::new(algorithm);
            let mut map = MapTrie::new(algorithm);
            fill(&mut array, &words);
            fill(&mut map, &words);
            for probe in ["c", "ca", "cat", "cata", "catas", "d", "dogg", "x", ""] {
                assert_eq!(array.contains_word(probe), map.contains_word(probe));
                assert_eq!(array.contains_prefix(probe), map.contains_prefix(probe));
            }
            for word in ["cata", "c", "do", "doggie", "dog"] {
                assert_eq!(array.delete_word(word), map.delete_word(word));
            }
            for probe in words {
                assert_eq!(array.contains_word(probe), map.contains_word(probe));
            }
        }
    }

    #[test]
    fn it_deletes_and_drops_very_long_words() {
        let long = "a".repeat(200_000);
        let short = "a".repeat(100_000);
        let mut map = MapTrie::new(Algorithm::Iterative);
        let mut array = ArrayTrie::new(Algorithm::Iterative);
        for word in [&long, &short] {
            map.insert_word(word).unwrap();
            array.insert_word(word).unwrap();
        }
        assert!(map.delete_word(&long));
        assert!(array.delete_word(&long));
        assert!(map.contains_word(&short));
        assert!(!array.contains_word(&long));

        map.insert_word(&long).unwrap();
        array.clear();
        assert!(array.is_empty());
        drop(map);
    }

    // serialization tests
    #[test]
    fn it_serializes_array_trie_to_json() {
        let mut t1 = ArrayTrie::new(Algorithm::Recursive);
        fill(&mut t1, &["cat", "ca", "cata"]);
        // Round trip via serde to create a new trie and then
        // check for equality
        let t_str = serde_json::to_string(&t1).expect("serializing");
        let t2: ArrayTrie = serde_json::from_str(&t_str).expect("deserializing");
        assert_eq!(t1, t2);
        assert!(t2.contains_word("cata"));
    }

    #[test]
    fn it_serializes_map_trie_to_json() {
        let mut t1 = MapTrie::default();
        fill(&mut t1, &["", "naïve", "nab"]);
        let t_str = serde_json::to_string(&t1).expect("serializing");
        let t2: MapTrie = serde_json::from_str(&t_str).expect("deserializing");
        assert_eq!(t1, t2);
        assert!(t2.contains_word(""));
        assert!(t2.contains_prefix("naï"));
    }

    // Overwrite (or add) a child count on every node
    fn tamper_len(value: &mut serde_json::Value) {
        match value {
            serde_json::Value::Object(map) => {
                if map.contains_key("children") {
                    map.insert("len".to_string(), serde_json::Value::from(0));
                }
                map.values_mut().for_each(tamper_len);
            }
            serde_json::Value::Array(items) => items.iter_mut().for_each(tamper_len),
            _ => {}
        }
    }

    #[test]
    fn it_rebuilds_array_child_counts_when_deserializing() {
        let mut t1 = ArrayTrie::default();
        fill(&mut t1, &["ab", "ac"]);
        let t_str = serde_json::to_string(&t1).expect("serializing");
        assert!(!t_str.contains("\"len\""));

        let mut value: serde_json::Value = serde_json::from_str(&t_str).expect("parsing");
        tamper_len(&mut value);
        let mut t2: ArrayTrie = serde_json::from_value(value).expect("deserializing");
        assert_eq!(t1, t2);
        assert_eq!(1, t2.root().len());
        assert!(!t2.root().is_empty());

        assert!(t2.delete_word("ab"));
        assert!(t2.contains_word("ac"));
        assert!(t2.delete_word("ac"));
        assert!(t2.is_empty());
    }
}
