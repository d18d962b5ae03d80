// Prefix and suffix range search over a sorted word list
//
// In a sorted list all words sharing a prefix form one contiguous run that
// starts at the lower bound of the prefix itself. Both ends of the run are
// found by binary search, so no sentinel "greater than every continuation"
// string is needed.

use std::ops::Range;

use wordkit_core::WordList;
use wordkit_core::character::reversed;

/// Index range of the words in `words` that start with `prefix`.
///
/// An empty prefix matches the whole list. The range is empty (but still
/// positioned at the insertion point) when nothing matches.
pub fn prefix_range(words: &WordList, prefix: &str) -> Range<usize> {
    prefix_range_in(words.as_slice(), prefix)
}

/// Words of `words` starting with `prefix`, in sorted order.
pub fn with_prefix<'a>(words: &'a WordList, prefix: &str) -> &'a [String] {
    &words.as_slice()[prefix_range(words, prefix)]
}

fn prefix_range_in(sorted: &[String], prefix: &str) -> Range<usize> {
    let start = sorted.partition_point(|w| w.as_str() < prefix);
    let len = sorted[start..].partition_point(|w| w.starts_with(prefix));
    start..start + len
}

/// Suffix lookups via a sorted list of reversed words.
///
/// Building the index costs one sort; each query is then a prefix search
/// for the reversed suffix.
#[derive(Debug, Clone)]
pub struct SuffixIndex {
    reversed: Vec<String>,
}

impl SuffixIndex {
    pub fn new(words: &WordList) -> Self {
        let mut reversed: Vec<String> = words.iter().map(reversed).collect();
        reversed.sort_unstable();
        Self { reversed }
    }

    /// Words ending with `suffix`, sorted.
    pub fn with_suffix(&self, suffix: &str) -> Vec<String> {
        let key = reversed(suffix);
        let mut found: Vec<String> = self.reversed[prefix_range_in(&self.reversed, &key)]
            .iter()
            .map(|w| reversed(w))
            .collect();
        found.sort_unstable();
        found
    }

    /// Number of words ending with `suffix`.
    pub fn count(&self, suffix: &str) -> usize {
        prefix_range_in(&self.reversed, &reversed(suffix)).len()
    }

    pub fn len(&self) -> usize {
        self.reversed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reversed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(words: &[&str]) -> WordList {
        WordList::from_unsorted(words.iter().copied())
    }

    #[test]
    fn prefix_range_brackets_matches() {
        let words = list(&["ab", "abc", "abd", "b"]);
        assert_eq!(prefix_range(&words, "ab"), 0..3);
        assert_eq!(with_prefix(&words, "ab"), &["ab", "abc", "abd"]);
    }

    #[test]
    fn prefix_range_no_match() {
        let words = list(&["ab", "abc", "abd", "b"]);
        let range = prefix_range(&words, "abz");
        assert!(range.is_empty());
        assert_eq!(range.start, 3);
        assert!(with_prefix(&words, "c").is_empty());
        assert!(with_prefix(&words, "a").len() == 3);
    }

    #[test]
    fn empty_prefix_matches_everything() {
        let words = list(&["x", "y", "z"]);
        assert_eq!(prefix_range(&words, ""), 0..3);
    }

    #[test]
    fn prefix_past_z_continuations() {
        // Continuations after 'z' and outside ASCII are still inside the run.
        let words = list(&["ab", "abz", "abzz", "ab\u{00E4}", "ac"]);
        assert_eq!(with_prefix(&words, "ab").len(), 4);
    }

    #[test]
    fn prefix_on_empty_list() {
        let words = WordList::default();
        assert_eq!(prefix_range(&words, "a"), 0..0);
    }

    #[test]
    fn suffix_search() {
        let words = list(&["coitus", "detritus", "itus", "kangaroo", "roo", "tabula", "zoo"]);
        let index = SuffixIndex::new(&words);
        assert_eq!(index.with_suffix("itus"), vec!["coitus", "detritus", "itus"]);
        assert_eq!(index.with_suffix("roo"), vec!["kangaroo", "roo"]);
        assert_eq!(index.count("oo"), 3);
        assert!(index.with_suffix("xyz").is_empty());
        assert_eq!(index.len(), 7);
    }
}
