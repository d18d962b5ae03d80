// Line normalization for word counting
//
// Contractions are expanded from a fixed literal table so that the single
// quotes left afterwards are real quotation marks. Two suffix rules then
// drop possessive "'s" and expand "'ll".

/// Literal contraction expansions, applied in order.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("you're", "you are"),
    ("i'm", "i am"),
    ("we're", "we are"),
    ("they're", "they are"),
    ("won't", "will not"),
    ("can't", "can not"),
    ("shan't", "shall not"),
    ("shouldn't", "should not"),
    ("mustn't", "must not"),
    ("aren't", "are not"),
];

/// Suffix rules: `pattern` is replaced only at the end of a word.
const SUFFIX_RULES: &[(&str, &str)] = &[("'s", ""), ("'ll", " will")];

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replace every non-overlapping `pattern` that is not followed by a word
/// character.
fn replace_at_word_end(line: &str, pattern: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(pos) = rest.find(pattern) {
        let after = &rest[pos + pattern.len()..];
        out.push_str(&rest[..pos]);
        if after.chars().next().is_none_or(|c| !is_word_char(c)) {
            out.push_str(replacement);
        } else {
            out.push_str(pattern);
        }
        rest = after;
    }
    out.push_str(rest);
    out
}

/// Lowercase a line, expand contractions and apply the suffix rules.
pub fn normalize_line(line: &str) -> String {
    let mut line = line.trim_end_matches(['\n', '\r']).to_lowercase();
    for (contraction, expansion) in CONTRACTIONS {
        if line.contains(contraction) {
            line = line.replace(contraction, expansion);
        }
    }
    for (pattern, replacement) in SUFFIX_RULES {
        line = replace_at_word_end(&line, pattern, replacement);
    }
    line
}

/// Split a normalized line into maximal runs of the letters `a`..`z`.
pub fn split_words(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| !c.is_ascii_lowercase())
        .filter(|w| !w.is_empty())
}
