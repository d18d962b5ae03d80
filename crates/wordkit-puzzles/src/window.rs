// Longest substring with at most k distinct characters
//
// Sliding window over the text. The window is never stored explicitly: it
// is implied by the smallest "last seen" index among the (at most k)
// characters currently tracked.

use hashbrown::HashMap;

/// Return the longest substring of `text` holding at most `k` distinct
/// characters. When several substrings share the maximum length the first
/// one wins. `k == 0` and empty text yield an empty string.
pub fn longest_substring_with_k_distinct(text: &str, k: usize) -> &str {
    if k == 0 || text.is_empty() {
        return "";
    }

    let offsets: Vec<(usize, char)> = text.char_indices().collect();
    let mut last_seen: HashMap<char, usize> = HashMap::with_capacity(k + 1);
    let mut run = 0;
    let mut best_len = 0;
    let mut best_start = 0;

    for (i, &(_, c)) in offsets.iter().enumerate() {
        if last_seen.len() < k || last_seen.contains_key(&c) {
            last_seen.insert(c, i);
            run += 1;
            if run > best_len {
                best_len = run;
                best_start = i + 1 - run;
            }
        } else {
            // Evict the character whose last occurrence is oldest; the window
            // now starts right after that occurrence.
            let Some((&oldest, &oldest_index)) = last_seen.iter().min_by_key(|&(_, &idx)| idx)
            else {
                continue;
            };
            last_seen.remove(&oldest);
            last_seen.insert(c, i);
            run = i - oldest_index;
        }
    }

    let start = offsets[best_start].0;
    let end = offsets
        .get(best_start + best_len)
        .map_or(text.len(), |&(byte, _)| byte);
    &text[start..end]
}
