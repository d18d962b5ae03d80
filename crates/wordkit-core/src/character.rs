// Character classification and case utilities

/// English consonants (lowercase). `y` counts as a consonant.
const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'y', 'z',
];

/// Check whether a character is a consonant (case-insensitive).
///
/// Only the 21 ASCII consonant letters qualify; accented letters,
/// digits and punctuation do not.
pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&simple_lower(c))
}

/// Check whether a character is one of the 26 lowercase ASCII letters.
pub fn is_ascii_lower_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

// to_lowercase / to_uppercase may expand to several characters; only the
// first is kept so that rewriting never changes a word's length.

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Return `c` cased like `template`: uppercase if `template` is uppercase,
/// lowercase otherwise.
pub fn match_case(c: char, template: char) -> char {
    if is_upper(template) {
        simple_upper(c)
    } else {
        simple_lower(c)
    }
}

/// Reverse a string by characters.
pub fn reversed(word: &str) -> String {
    word.chars().rev().collect()
}

/// Byte offset of the `n`th character of `word`, or `word.len()` when
/// `n` is past the end.
pub fn byte_offset(word: &str, n: usize) -> usize {
    word.char_indices().nth(n).map_or(word.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consonants() {
        assert!(is_consonant('b'));
        assert!(is_consonant('K'));
        assert!(is_consonant('y'));
        assert!(is_consonant('Z'));
        assert!(!is_consonant('a'));
        assert!(!is_consonant('1'));
        assert!(!is_consonant(' '));
        assert!(!is_consonant('\u{0161}')); // š
    }

    #[test]
    fn ascii_lower_letters() {
        assert!(is_ascii_lower_letter('a'));
        assert!(is_ascii_lower_letter('z'));
        assert!(!is_ascii_lower_letter('A'));
        assert!(!is_ascii_lower_letter('\u{00E4}')); // ä
        assert!(!is_ascii_lower_letter('\''));
    }

    #[test]
    fn simple_case_mapping() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_lower('a'), 'a');
        assert_eq!(simple_upper('z'), 'Z');
        assert_eq!(simple_upper('\u{00E4}'), '\u{00C4}'); // ä -> Ä
    }

    #[test]
    fn uppercase_detection() {
        assert!(is_upper('Q'));
        assert!(!is_upper('q'));
        assert!(!is_upper('1'));
        assert!(!is_upper(' '));
    }

    #[test]
    fn match_case_follows_template() {
        assert_eq!(match_case('n', 'D'), 'N');
        assert_eq!(match_case('N', 'd'), 'n');
        assert_eq!(match_case('K', ' '), 'k');
    }

    #[test]
    fn reversed_by_chars() {
        assert_eq!(reversed("stop"), "pots");
        assert_eq!(reversed(""), "");
        assert_eq!(reversed("\u{00E4}b"), "b\u{00E4}");
    }

    #[test]
    fn byte_offsets() {
        assert_eq!(byte_offset("abc", 0), 0);
        assert_eq!(byte_offset("abc", 2), 2);
        assert_eq!(byte_offset("abc", 3), 3);
        assert_eq!(byte_offset("abc", 9), 3);
        assert_eq!(byte_offset("\u{00E4}bc", 1), 2);
    }
}
