// Sorted word list and membership set

use std::path::Path;

use hashbrown::HashSet;
use tracing::debug;

use crate::WordError;

/// What to do when input words are not in sorted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPolicy {
    /// Reject unsorted input with [`WordError::Unsorted`].
    #[default]
    Verify,
    /// Sort the words after reading them.
    Sort,
}

/// Options controlling how a word list is read from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub sort: SortPolicy,
    /// Lowercase every word before the sort policy is applied.
    pub lowercase: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            sort: SortPolicy::Verify,
            lowercase: false,
        }
    }
}

/// An immutable word list sorted by code point.
///
/// String ordering in Rust compares UTF-8 bytes, which coincides with
/// code-point order, so every binary search over the list agrees with
/// `str`'s `Ord`. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a list from words that must already be sorted.
    pub fn from_sorted(words: Vec<String>) -> Result<Self, WordError> {
        if let Some(index) = words.windows(2).position(|w| w[0] > w[1]) {
            return Err(WordError::Unsorted {
                index: index + 1,
                previous: words[index].clone(),
                next: words[index + 1].clone(),
            });
        }
        Ok(Self { words })
    }

    /// Build a list from words in any order, sorting them.
    pub fn from_unsorted<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();
        words.sort_unstable();
        Self { words }
    }

    /// Parse a line-oriented word list.
    ///
    /// Each line is trimmed; empty lines and lines starting with `#` are
    /// skipped.
    pub fn parse(contents: &str, options: LoadOptions) -> Result<Self, WordError> {
        let words: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| {
                if options.lowercase {
                    line.to_lowercase()
                } else {
                    line.to_string()
                }
            })
            .collect();

        let list = match options.sort {
            SortPolicy::Verify => Self::from_sorted(words)?,
            SortPolicy::Sort => Self::from_unsorted(words),
        };
        debug!(words = list.len(), policy = ?options.sort, "parsed word list");
        Ok(list)
    }

    /// Read and parse a word list file.
    pub fn load(path: &Path, options: LoadOptions) -> Result<Self, WordError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents, options)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Binary-search membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    /// The sublist of words with exactly `len` characters. Filtering keeps
    /// the list sorted.
    pub fn with_len(&self, len: usize) -> WordList {
        Self {
            words: self
                .words
                .iter()
                .filter(|w| w.chars().count() == len)
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// A hash set view over a slice of words for constant-time membership.
#[derive(Debug, Clone)]
pub struct WordSet<'a> {
    words: HashSet<&'a str>,
}

impl<'a> WordSet<'a> {
    pub fn new<S: AsRef<str>>(words: &'a [S]) -> Self {
        Self {
            words: words.iter().map(AsRef::as_ref).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
