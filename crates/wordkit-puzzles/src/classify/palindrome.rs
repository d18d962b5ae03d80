// Palindromes, semordnilaps and almost-palindromes

use wordkit_core::WordSet;
use wordkit_core::character::reversed;

use super::{WordClassifier, select};

/// Check whether a word reads the same forwards and backwards.
pub fn is_palindrome(word: &str) -> bool {
    word.chars().eq(word.chars().rev())
}

/// Words that read the same in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Palindrome;

impl WordClassifier for Palindrome {
    fn matches(&self, word: &str) -> bool {
        is_palindrome(word)
    }
}

/// Words whose reversal is a different word of the same list.
#[derive(Debug, Clone)]
pub struct Semordnilap<'a> {
    words: WordSet<'a>,
}

impl<'a> Semordnilap<'a> {
    pub fn new<S: AsRef<str>>(words: &'a [S]) -> Self {
        Self {
            words: WordSet::new(words),
        }
    }
}

impl WordClassifier for Semordnilap<'_> {
    fn matches(&self, word: &str) -> bool {
        let rev = reversed(word);
        rev != word && self.words.contains(&rev)
    }
}

/// Words of more than two characters that are not palindromes but become
/// one when a single character is removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlmostPalindrome;

impl WordClassifier for AlmostPalindrome {
    fn matches(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() <= 2 || is_palindrome(word) {
            return false;
        }
        (0..chars.len()).any(|skip| {
            let rest: Vec<char> = chars
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &c)| c)
                .collect();
            rest.iter().eq(rest.iter().rev())
        })
    }
}

pub fn palindromes<S: AsRef<str>>(words: &[S]) -> Vec<&str> {
    select(&Palindrome, words)
}

pub fn semordnilap<S: AsRef<str>>(words: &[S]) -> Vec<&str> {
    select(&Semordnilap::new(words), words)
}

pub fn almost_palindromes<S: AsRef<str>>(words: &[S]) -> Vec<&str> {
    select(&AlmostPalindrome, words)
}
