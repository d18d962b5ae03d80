// Character frequency histogram

use hashbrown::HashMap;

/// Occurrence counts of individual characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: HashMap<char, usize>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every character of every word.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hist = Self::new();
        for word in words {
            hist.add(word.as_ref());
        }
        hist
    }

    /// Count every character of a block of text, whitespace included.
    pub fn from_text(text: &str) -> Self {
        let mut hist = Self::new();
        hist.add(text);
        hist
    }

    pub fn add(&mut self, word: &str) {
        for c in word.chars() {
            *self.counts.entry(c).or_insert(0) += 1;
        }
    }

    /// Count for `c`, zero if never seen.
    pub fn count(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Number of distinct characters seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(char, count)` pairs, most frequent first; ties by character.
    pub fn by_frequency(&self) -> Vec<(char, usize)> {
        let mut items: Vec<(char, usize)> = self.counts.iter().map(|(&c, &n)| (c, n)).collect();
        items.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        items
    }
}
