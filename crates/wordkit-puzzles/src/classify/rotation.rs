// Rotodromes: words that turn into other words under cyclic rotation

use wordkit_core::WordSet;
use wordkit_core::character::byte_offset;

use super::{WordClassifier, select};

/// Words for which some rotation `w[i..] + w[..i]` with `1 <= i < len`
/// is a different word of the same list.
///
/// Offset 0 is never tried, so a word is never its own rotodrome.
#[derive(Debug, Clone)]
pub struct Rotodrome<'a> {
    words: WordSet<'a>,
}

impl<'a> Rotodrome<'a> {
    pub fn new<S: AsRef<str>>(words: &'a [S]) -> Self {
        Self {
            words: WordSet::new(words),
        }
    }
}

impl WordClassifier for Rotodrome<'_> {
    fn matches(&self, word: &str) -> bool {
        let len = word.chars().count();
        let mut rotated = String::with_capacity(word.len());
        for i in 1..len {
            let split = byte_offset(word, i);
            rotated.clear();
            rotated.push_str(&word[split..]);
            rotated.push_str(&word[..split]);
            if rotated != word && self.words.contains(&rotated) {
                return true;
            }
        }
        false
    }
}

pub fn rotodromes<S: AsRef<str>>(words: &[S]) -> Vec<&str> {
    select(&Rotodrome::new(words), words)
}
