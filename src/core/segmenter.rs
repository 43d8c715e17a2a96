//! Multi-syllable segmentation
//!
//! Splits a token that is not a single syllable into syllables, trying the longest
//! convertible prefix first and backtracking to shorter prefixes when the remainder
//! cannot be segmented. Results are memoized per remaining suffix.

use std::collections::HashMap;

use crate::core::assembler::convert_syllable;

/// Shortest prefix (in characters) tried as a syllable
const MIN_SYLLABLE_CHARS: usize = 2;

/// Segment `token` into independently convertible syllables
///
/// Returns the concatenated Thai text, `Some("")` for an empty token, or `None` when no
/// split converts completely.
pub fn segment(token: &str) -> Option<String> {
    let token = token.to_lowercase();
    let mut memo = HashMap::new();
    let result = segment_from(&token, 0, &mut memo);
    log::trace!("segment '{}': {} suffixes memoized", token, memo.len());
    result
}

/// Segment the suffix of `token` starting at byte offset `start`
fn segment_from(
    token: &str,
    start: usize,
    memo: &mut HashMap<usize, Option<String>>,
) -> Option<String> {
    let rest = &token[start..];
    if rest.is_empty() {
        return Some(String::new());
    }
    if let Some(cached) = memo.get(&start) {
        return cached.clone();
    }

    // boundaries[n - 1] = byte length of the first n characters
    let boundaries: Vec<usize> = rest
        .char_indices()
        .map(|(i, _)| i)
        .skip(1)
        .chain(std::iter::once(rest.len()))
        .collect();

    let mut result = None;
    for chars in (MIN_SYLLABLE_CHARS..=boundaries.len()).rev() {
        let end = boundaries[chars - 1];
        let Some(head) = convert_syllable(&rest[..end]) else {
            continue;
        };
        if end == rest.len() {
            result = Some(head);
            break;
        }
        if let Some(tail) = segment_from(token, start + end, memo) {
            result = Some(head + &tail);
            break;
        }
    }

    memo.insert(start, result.clone());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_syllable() {
        assert_eq!(segment("khr").as_deref(), Some("คร"));
        assert_eq!(segment("kin").as_deref(), Some("กิน"));
    }

    #[test]
    fn test_vowelless_compound() {
        // "khkh" is not one syllable; kh + kh is
        assert_eq!(segment("khkh").as_deref(), Some("ขข"));
        assert_eq!(segment("ngkhr").as_deref(), Some("งคร"));
    }

    #[test]
    fn test_backtracks_to_shorter_prefix() {
        // "khr" + "k" leaves one letter; "kh" + "rk" leaves an invalid "rk";
        // no split works
        assert_eq!(segment("khrk"), None);
        assert_eq!(segment("phrng").as_deref(), Some("พรง"));
    }

    #[test]
    fn test_single_letter_remainder_fails() {
        assert_eq!(segment("khk"), None);
        assert_eq!(segment("k"), None);
    }

    #[test]
    fn test_empty_is_base_case() {
        assert_eq!(segment("").as_deref(), Some(""));
    }

    #[test]
    fn test_unconvertible() {
        assert_eq!(segment("zzz"), None);
        assert_eq!(segment("kk"), None);
    }

    #[test]
    fn test_long_input_terminates() {
        let token = "khkhkhkhkhkhkhkhkhkhkhkhkhkhkz";
        assert_eq!(token.len(), 30);
        assert_eq!(segment(token), None);

        let token = "zq".repeat(15);
        assert_eq!(segment(&token), None);
    }

    #[test]
    fn test_non_ascii_does_not_panic() {
        assert_eq!(segment("ก"), None);
        assert_eq!(segment("khก"), None);
    }
}
