//! Shared types for wordkit.
//!
//! - [`character`] -- consonant classification and simple case mapping
//! - [`wordlist`] -- the sorted, immutable [`WordList`] and the [`WordSet`] view

pub mod character;
pub mod wordlist;

pub use wordlist::{LoadOptions, SortPolicy, WordList, WordSet};

/// Error type for word-list construction and word encoding.
#[derive(Debug, thiserror::Error)]
pub enum WordError {
    /// The word list violates the sorted-order invariant required by
    /// binary search.
    #[error("word list is not sorted: {next:?} at position {index} sorts before {previous:?}")]
    Unsorted {
        index: usize,
        previous: String,
        next: String,
    },

    /// A word contains a character outside the supported alphabet.
    #[error("unsupported character {ch:?} in word {word:?}")]
    UnsupportedCharacter { word: String, ch: char },

    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}
