// Word frequencies over a line-oriented corpus

use hashbrown::HashMap;
use serde::Serialize;

use super::normalize::{normalize_line, split_words};

/// One ranked word and its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Occurrence counts of the words of a corpus.
#[derive(Debug, Clone, Default)]
pub struct WordFrequency {
    counts: HashMap<String, usize>,
}

impl WordFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the words of every line. Empty lines are skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut freq = Self::new();
        for line in lines {
            freq.add_line(line.as_ref());
        }
        freq
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    pub fn add_line(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        let normalized = normalize_line(line);
        for word in split_words(&normalized) {
            *self.counts.entry_ref(word).or_insert(0) += 1;
        }
    }

    /// Occurrences of `word`, zero if never seen.
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of word occurrences.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// All words, most frequent first; equal counts in reverse alphabetical
    /// order.
    pub fn ranked(&self) -> Vec<WordCount> {
        let mut ranked: Vec<WordCount> = self
            .counts
            .iter()
            .map(|(word, &count)| WordCount {
                word: word.clone(),
                count,
            })
            .collect();
        ranked.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| b.word.cmp(&a.word)));
        ranked
    }

    /// The `n` most frequent words.
    pub fn top(&self, n: usize) -> Vec<WordCount> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Words that occur exactly once, alphabetically.
    pub fn hapax(&self) -> Vec<&str> {
        let mut once: Vec<&str> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count == 1)
            .map(|(word, _)| word.as_str())
            .collect();
        once.sort_unstable();
        once
    }
}
