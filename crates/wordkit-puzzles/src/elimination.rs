// Letter-elimination table
//
// Which words stay words when one letter is removed? The table is built
// bottom-up by word length: level 1 holds the one-letter words, and a word
// of length L enters level L only if deleting some single letter yields a
// word already in level L-1. Every word in the table can therefore be
// whittled down one letter at a time to a single letter.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

/// Words of one length mapped to the shorter words they reduce to, in
/// order of the deleted position.
pub type Level = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EliminationTable {
    /// `levels[i]` holds the words of length `i + 1`.
    levels: Vec<Level>,
}

impl EliminationTable {
    /// Build the table from a word list. Construction stops at the first
    /// length with no qualifying words.
    pub fn build<S: AsRef<str>>(words: &[S]) -> Self {
        let mut by_len: BTreeMap<usize, BTreeSet<&str>> = BTreeMap::new();
        for word in words {
            let word = word.as_ref();
            by_len.entry(word.chars().count()).or_default().insert(word);
        }

        let mut levels: Vec<Level> = Vec::new();
        let singles: Level = by_len
            .get(&1)
            .into_iter()
            .flatten()
            .map(|w| (w.to_string(), Vec::new()))
            .collect();
        if singles.is_empty() {
            return Self { levels };
        }
        levels.push(singles);

        let mut len = 2;
        while let (Some(candidates), Some(previous)) = (by_len.get(&len), levels.last()) {
            let mut level = Level::new();
            for &word in candidates {
                let targets = shorter_words(word, previous);
                if !targets.is_empty() {
                    level.insert(word.to_string(), targets);
                }
            }
            debug!(len, words = level.len(), "built elimination level");
            if level.is_empty() {
                break;
            }
            levels.push(level);
            len += 1;
        }

        Self { levels }
    }

    /// Level for words of `len` characters.
    pub fn level(&self, len: usize) -> Option<&Level> {
        len.checked_sub(1).and_then(|i| self.levels.get(i))
    }

    /// Longest word length present in the table, 0 when empty.
    pub fn max_len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.targets(word).is_some()
    }

    /// Shorter words `word` reduces to. One-letter words have no targets.
    pub fn targets(&self, word: &str) -> Option<&[String]> {
        self.level(word.chars().count())?
            .get(word)
            .map(Vec::as_slice)
    }

    /// Reduce `word` to a single letter, always taking the first target.
    pub fn reduction_path<'a>(&'a self, word: &'a str) -> Option<Vec<&'a str>> {
        let mut path = vec![word];
        let mut current = word;
        loop {
            let targets = self.targets(current)?;
            match targets.first() {
                Some(next) => {
                    current = next.as_str();
                    path.push(current);
                }
                None => return Some(path),
            }
        }
    }
}

/// Distinct words of `previous` obtained by deleting one character of `word`.
fn shorter_words(word: &str, previous: &Level) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for (skip, _) in word.char_indices() {
        let end = word[skip..]
            .chars()
            .next()
            .map_or(word.len(), |c| skip + c.len_utf8());
        let mut candidate = String::with_capacity(word.len());
        candidate.push_str(&word[..skip]);
        candidate.push_str(&word[end..]);
        if previous.contains_key(&candidate) && !found.contains(&candidate) {
            found.push(candidate);
        }
    }
    found
}
