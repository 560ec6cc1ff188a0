//! Errors reported by the [`crate::trie::Trie`] façade.

/// Errors which can be returned when mutating a Trie.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// The word contains a character the node storage cannot represent.
    #[error("character {character:?} at position {position} is outside the supported alphabet")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// Index (in chars, not bytes) of the character within the word.
        position: usize,
    },
}

/// Convenience alias for results carrying a [`TrieError`].
pub type Result<T> = std::result::Result<T, TrieError>;
