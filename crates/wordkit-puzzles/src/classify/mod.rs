// Word classifiers
//
// Each classifier is a predicate over a single word. Classifiers that need
// to look other words up (semordnilaps, rotodromes) borrow a WordSet built
// once from the input list.

pub mod alphabet;
pub mod duplicate;
pub mod palindrome;
pub mod rotation;

pub use alphabet::{LimitedAlphabet, limited_alphabet};
pub use duplicate::{
    ConsecutiveTripleDuplicate, TripleDuplicate, consec_triple_duplicate,
    consecutive_duplicate_pair_count, triple_duplicate,
};
pub use palindrome::{
    AlmostPalindrome, Palindrome, Semordnilap, almost_palindromes, is_palindrome, palindromes,
    semordnilap,
};
pub use rotation::{Rotodrome, rotodromes};

/// Trait for single-word predicates.
pub trait WordClassifier {
    /// Whether `word` belongs to the class.
    fn matches(&self, word: &str) -> bool;
}

/// Keep the words accepted by `classifier`, in input order.
pub fn select<'w, S: AsRef<str>>(classifier: &dyn WordClassifier, words: &'w [S]) -> Vec<&'w str> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| classifier.matches(w))
        .collect()
}
