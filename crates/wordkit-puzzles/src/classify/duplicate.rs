// Doubled-letter finders

use super::{WordClassifier, select};

/// Count non-overlapping pairs of equal adjacent characters, scanning left
/// to right. After a pair at `i` the scan resumes at `i + 2`, so `"aaa"`
/// holds one pair and `"aaaa"` two.
pub fn consecutive_duplicate_pair_count(word: &str) -> usize {
    let chars: Vec<char> = word.chars().collect();
    let mut count = 0;
    let mut i = 0;
    while i + 1 < chars.len() {
        if chars[i] == chars[i + 1] {
            count += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    count
}

/// Whether `word` contains three doubled pairs back to back, as in
/// "bookkeeper" (`ookkee`). The pairs need not be distinct letters.
fn has_consecutive_triple(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    chars
        .windows(6)
        .any(|w| w[0] == w[1] && w[2] == w[3] && w[4] == w[5])
}

/// Words holding at least three doubled-letter pairs anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct TripleDuplicate;

impl WordClassifier for TripleDuplicate {
    fn matches(&self, word: &str) -> bool {
        consecutive_duplicate_pair_count(word) >= 3
    }
}

/// Words holding three doubled-letter pairs in a row.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsecutiveTripleDuplicate;

impl WordClassifier for ConsecutiveTripleDuplicate {
    fn matches(&self, word: &str) -> bool {
        has_consecutive_triple(word)
    }
}

pub fn triple_duplicate<S: AsRef<str>>(words: &[S]) -> Vec<&str> {
    select(&TripleDuplicate, words)
}

pub fn consec_triple_duplicate<S: AsRef<str>>(words: &[S]) -> Vec<&str> {
    select(&ConsecutiveTripleDuplicate, words)
}
