// Cyclic consonant rotation
//
// The consonants of a text are rotated as one cyclic sequence while vowels,
// digits, whitespace and punctuation stay where they are. Each position keeps
// its original capitalization: "Ilkka" becomes "Ikkla".

use wordkit_core::character::{is_consonant, match_case};

/// Rotate the consonants of `text` by `offset` positions.
///
/// The `j`th consonant position receives the consonant found at position
/// `(j + offset) mod n` of the consonant sequence, where `n` is the number of
/// consonants. Negative offsets rotate the other way, so
/// `rotate_consonants(&rotate_consonants(t, k), -k) == t`. A text without
/// consonants is returned unchanged.
pub fn rotate_consonants(text: &str, offset: isize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let consonants: Vec<char> = chars.iter().copied().filter(|&c| is_consonant(c)).collect();
    if consonants.is_empty() {
        return text.to_string();
    }

    let n = consonants.len();
    // rem_euclid keeps the shift in 0..n for negative offsets
    let shift = offset.rem_euclid(n as isize) as usize;

    let mut result = String::with_capacity(text.len());
    let mut pos = 0;
    for &c in &chars {
        if is_consonant(c) {
            let incoming = consonants[(pos + shift) % n];
            result.push(match_case(incoming, c));
            pos += 1;
        } else {
            result.push(c);
        }
    }
    result
}
