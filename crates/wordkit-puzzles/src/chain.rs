// Word chains built by backtracking
//
// In a word chain every word starts with the previous word minus its first
// k characters, e.g. grama -> ramal -> amala -> malar -> alarm for k = 1.
// Candidates for the next word come from a prefix range search over the
// sorted list, so each extension costs two binary searches instead of a
// scan of the whole list.

use serde::{Deserialize, Serialize};
use wordkit_core::WordList;
use wordkit_core::character::byte_offset;

use crate::search::with_prefix;

/// Chain search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainOptions {
    /// Number of leading characters dropped from a word to get the prefix
    /// of the next word.
    pub overlap: usize,
    /// Number of words in a complete chain.
    pub target_len: usize,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            overlap: 1,
            target_len: 3,
        }
    }
}

/// Complete `seed` into a chain of `options.target_len` distinct words.
///
/// Candidates are tried in sorted order and the first complete chain found
/// is returned. A candidate must be longer than the previous word minus the
/// overlap, and must not already occur in the chain. Returns `None` when the
/// search is exhausted, when `seed` is empty, or when `seed` already holds
/// more than `target_len` words.
pub fn word_chain<'a>(
    words: &'a WordList,
    seed: &[&'a str],
    options: ChainOptions,
) -> Option<Vec<&'a str>> {
    if seed.is_empty() || seed.len() > options.target_len {
        return None;
    }
    let mut chain = seed.to_vec();
    if backtrack(words, &mut chain, options) {
        Some(chain)
    } else {
        None
    }
}

fn backtrack<'a>(words: &'a WordList, chain: &mut Vec<&'a str>, options: ChainOptions) -> bool {
    if chain.len() == options.target_len {
        return true;
    }
    let Some(&last) = chain.last() else {
        return false;
    };

    let suffix = &last[byte_offset(last, options.overlap)..];
    let min_len = last.chars().count().saturating_sub(options.overlap);

    for candidate in with_prefix(words, suffix) {
        let candidate = candidate.as_str();
        if candidate.chars().count() > min_len && !chain.contains(&candidate) {
            chain.push(candidate);
            if backtrack(words, chain, options) {
                return true;
            }
            chain.pop();
        }
    }
    false
}

/// Grow a chain from `first` one word at a time, as long as a chain of the
/// next length exists, up to `max_len` words.
///
/// Each step restarts the search from `first`, so the result is the first
/// chain of the greatest reachable length. The result always contains at
/// least `first`.
pub fn longest_word_chain<'a>(
    words: &'a WordList,
    first: &'a str,
    overlap: usize,
    max_len: usize,
) -> Vec<&'a str> {
    let mut best = vec![first];
    while best.len() < max_len {
        let options = ChainOptions {
            overlap,
            target_len: best.len() + 1,
        };
        match word_chain(words, &[first], options) {
            Some(chain) => best = chain,
            None => break,
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(words: &[&str]) -> WordList {
        WordList::from_unsorted(words.iter().copied())
    }

    fn opts(overlap: usize, target_len: usize) -> ChainOptions {
        ChainOptions {
            overlap,
            target_len,
        }
    }

    #[test]
    fn two_word_chain() {
        let words = list(&["ab", "ba", "abc"]);
        assert_eq!(word_chain(&words, &["ab"], opts(1, 2)), Some(vec!["ab", "ba"]));
    }

    #[test]
    fn five_word_chain() {
        let words = list(&["alarm", "amala", "grama", "malar", "ramal"]);
        assert_eq!(
            word_chain(&words, &["grama"], opts(1, 5)),
            Some(vec!["grama", "ramal", "amala", "malar", "alarm"])
        );
    }

    #[test]
    fn backtracks_out_of_dead_end() {
        let words = list(&["ab", "bc", "bd", "dx"]);
        assert_eq!(
            word_chain(&words, &["ab"], opts(1, 3)),
            Some(vec!["ab", "bd", "dx"])
        );
    }

    #[test]
    fn candidate_must_outgrow_suffix() {
        let words = list(&["abc", "bc", "bcd"]);
        assert_eq!(
            word_chain(&words, &["abc"], opts(1, 2)),
            Some(vec!["abc", "bcd"])
        );
    }

    #[test]
    fn words_never_repeat() {
        let words = list(&["aa"]);
        assert_eq!(word_chain(&words, &["aa"], opts(1, 2)), None);
    }

    #[test]
    fn exhausted_search_returns_none() {
        let words = list(&["ab", "cd"]);
        assert_eq!(word_chain(&words, &["ab"], opts(1, 2)), None);
    }

    #[test]
    fn seed_already_complete() {
        let words = list(&["ab"]);
        assert_eq!(word_chain(&words, &["ab"], opts(1, 1)), Some(vec!["ab"]));
    }

    #[test]
    fn invalid_seeds() {
        let words = list(&["ab", "ba"]);
        assert_eq!(word_chain(&words, &[], opts(1, 2)), None);
        assert_eq!(word_chain(&words, &["ab", "ba"], opts(1, 1)), None);
    }

    #[test]
    fn overlap_longer_than_word() {
        let words = list(&["ab", "cd"]);
        assert_eq!(
            word_chain(&words, &["ab"], opts(5, 2)),
            Some(vec!["ab", "cd"])
        );
    }

    #[test]
    fn seed_words_need_not_be_in_list() {
        let words = list(&["bat"]);
        assert_eq!(
            word_chain(&words, &["xba"], opts(1, 2)),
            Some(vec!["xba", "bat"])
        );
    }

    #[test]
    fn longest_chain_grows_until_stuck() {
        let words = list(&["alarm", "amala", "grama", "malar", "ramal"]);
        assert_eq!(longest_word_chain(&words, "grama", 1, 10).len(), 5);
        assert_eq!(longest_word_chain(&words, "grama", 1, 3).len(), 3);
        assert_eq!(longest_word_chain(&words, "alarm", 1, 10), vec!["alarm"]);
    }

    #[test]
    fn default_options() {
        assert_eq!(ChainOptions::default(), opts(1, 3));
    }
}
