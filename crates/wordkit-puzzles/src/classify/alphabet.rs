// Words spelled with a restricted set of characters

use hashbrown::HashSet;

use super::{WordClassifier, select};

/// Non-empty words made up only of the allowed characters.
#[derive(Debug, Clone)]
pub struct LimitedAlphabet {
    allowed: HashSet<char>,
}

impl LimitedAlphabet {
    pub fn new(chars: &str) -> Self {
        Self {
            allowed: chars.chars().collect(),
        }
    }
}

impl WordClassifier for LimitedAlphabet {
    fn matches(&self, word: &str) -> bool {
        !word.is_empty() && word.chars().all(|c| self.allowed.contains(&c))
    }
}

pub fn limited_alphabet<'w, S: AsRef<str>>(words: &'w [S], chars: &str) -> Vec<&'w str> {
    select(&LimitedAlphabet::new(chars), words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hexadecimal_words() {
        let words = ["hello", "abc", "xyz", "facade", "bead"];
        assert_eq!(limited_alphabet(&words, "abcdef"), vec!["abc", "facade", "bead"]);
    }

    #[test]
    fn empty_word_never_matches() {
        assert!(!LimitedAlphabet::new("abc").matches(""));
    }

    #[test]
    fn empty_alphabet_matches_nothing() {
        let words = ["a", "b"];
        assert!(limited_alphabet(&words, "").is_empty());
    }
}
