//! Word-puzzle algorithms over sorted word lists and text corpora.
//!
//! # Modules
//!
//! - [`histogram`] -- character frequency counts
//! - [`classify`] -- palindrome, rotation, duplicate-letter and alphabet classifiers
//! - [`rotate`] -- cyclic consonant rotation preserving vowels and case
//! - [`window`] -- longest substring with at most k distinct characters
//! - [`search`] -- prefix and suffix range search over a sorted list
//! - [`chain`] -- word chains linked by suffix/prefix overlap (backtracking)
//! - [`elimination`] -- words that stay words when one letter is removed
//! - [`anagram`] -- anagram grouping by prime-product codes
//! - [`corpus`] -- text normalization and word frequencies

pub mod anagram;
pub mod chain;
pub mod classify;
pub mod corpus;
pub mod elimination;
pub mod histogram;
pub mod rotate;
pub mod search;
pub mod window;

pub use wordkit_core::{WordError, WordList, WordSet};
