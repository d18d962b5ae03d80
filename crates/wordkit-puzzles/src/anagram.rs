// Anagram grouping by prime-product codes
//
// Each letter a..z is assigned one of the first 26 primes. The code of a
// word is the product of its letters' primes. Multiplication is
// commutative and prime factorization is unique, so two words share a code
// exactly when they are anagrams of each other. Codes outgrow u128 for long
// words, hence BigUint.

use hashbrown::HashMap;
use num_bigint::BigUint;
use num_traits::One;
use tracing::debug;
use wordkit_core::WordError;
use wordkit_core::character::is_ascii_lower_letter;

/// The first 26 primes, one per letter from `a` to `z`.
const PRIMES: [u32; 26] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101,
];

fn letter_prime(c: char) -> Option<u32> {
    if is_ascii_lower_letter(c) {
        Some(PRIMES[(c as u8 - b'a') as usize])
    } else {
        None
    }
}

/// Product of the letter primes of `word`. The empty word has code 1.
///
/// Fails on any character outside `a`..`z`; input must be lowercased and
/// stripped of non-letters first.
pub fn prime_code(word: &str) -> Result<BigUint, WordError> {
    let mut code = BigUint::one();
    for c in word.chars() {
        let prime = letter_prime(c).ok_or_else(|| WordError::UnsupportedCharacter {
            word: word.to_string(),
            ch: c,
        })?;
        code *= prime;
    }
    Ok(code)
}

/// Words grouped by prime code. Each group keeps its words in input order.
#[derive(Debug, Clone, Default)]
pub struct AnagramGroups {
    groups: HashMap<BigUint, Vec<String>>,
}

impl AnagramGroups {
    /// Group `words` by prime code, failing on the first word with an
    /// unsupported character.
    pub fn build<I, S>(words: I) -> Result<Self, WordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups: HashMap<BigUint, Vec<String>> = HashMap::new();
        for word in words {
            let word = word.as_ref();
            groups
                .entry(prime_code(word)?)
                .or_default()
                .push(word.to_string());
        }
        debug!(groups = groups.len(), "grouped anagrams");
        Ok(Self { groups })
    }

    /// Words sharing `code`.
    pub fn get(&self, code: &BigUint) -> Option<&[String]> {
        self.groups.get(code).map(Vec::as_slice)
    }

    /// Anagrams of `word` found in the groups, `word` included if present.
    pub fn anagrams_of(&self, word: &str) -> Result<&[String], WordError> {
        let code = prime_code(word)?;
        Ok(self.get(&code).unwrap_or(&[]))
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BigUint, &[String])> {
        self.groups.iter().map(|(code, words)| (code, words.as_slice()))
    }

    /// Groups of at least `min` words, ordered by their first word.
    pub fn with_min_size(&self, min: usize) -> Vec<&[String]> {
        let mut found: Vec<&[String]> = self
            .groups
            .values()
            .filter(|words| words.len() >= min)
            .map(Vec::as_slice)
            .collect();
        found.sort_unstable_by(|a, b| a.first().cmp(&b.first()));
        found
    }
}

/// Map every prime code occurring in `words` to the words producing it.
pub fn all_anagrams<I, S>(words: I) -> Result<AnagramGroups, WordError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    AnagramGroups::build(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_codes() {
        assert_eq!(prime_code("a").unwrap(), BigUint::from(2u32));
        assert_eq!(prime_code("z").unwrap(), BigUint::from(101u32));
        assert_eq!(prime_code("abc").unwrap(), BigUint::from(30u32));
        assert_eq!(prime_code("").unwrap(), BigUint::one());
    }

    #[test]
    fn anagrams_share_codes() {
        let bca = prime_code("bca").unwrap();
        assert_eq!(bca, prime_code("abc").unwrap());
        assert_eq!(bca, prime_code("cab").unwrap());
        assert_ne!(bca, prime_code("xyz").unwrap());
        // same letters, different multiplicities
        assert_ne!(prime_code("aab").unwrap(), prime_code("abb").unwrap());
    }

    #[test]
    fn long_words_do_not_overflow() {
        let word = "z".repeat(40);
        let expected = (0..40).fold(BigUint::one(), |acc, _| acc * 101u32);
        assert_eq!(prime_code(&word).unwrap(), expected);
        assert!(prime_code(&word).unwrap().bits() > 128);
    }

    #[test]
    fn unsupported_characters_fail_fast() {
        for word in ["Abc", "don't", "na\u{00EF}ve", "a b"] {
            match prime_code(word) {
                Err(WordError::UnsupportedCharacter { word: w, .. }) => assert_eq!(w, word),
                other => panic!("expected unsupported character for {word:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn grouping() {
        let groups = all_anagrams(["bca", "abc", "cab", "xyz"]).unwrap();
        assert_eq!(groups.len(), 2);
        let code = prime_code("abc").unwrap();
        assert_eq!(groups.get(&code).unwrap(), &["bca", "abc", "cab"]);
        assert_eq!(groups.anagrams_of("zyx").unwrap(), &["xyz"]);
        assert!(groups.anagrams_of("qq").unwrap().is_empty());
    }

    #[test]
    fn grouping_rejects_bad_words() {
        assert!(all_anagrams(["abc", "ABC"]).is_err());
    }

    #[test]
    fn groups_by_minimum_size() {
        let groups =
            all_anagrams(["listen", "silent", "enlist", "stone", "notes", "tinsel", "apple"])
                .unwrap();
        let big = groups.with_min_size(2);
        assert_eq!(big.len(), 2);
        assert_eq!(big[0], &["listen", "silent", "enlist", "tinsel"]);
        assert_eq!(big[1], &["stone", "notes"]);
        assert_eq!(groups.with_min_size(1).len(), 3);
        assert_eq!(groups.iter().count(), 3);
    }
}
