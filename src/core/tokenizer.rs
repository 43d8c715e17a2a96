//! Romanized syllable tokenizer
//!
//! Decomposes one lower-cased romanized syllable into tone, onset, vowel and coda keys.
//! Onsets are matched as the longest prefix, vowels as the longest key found anywhere in
//! the core, codas as the longest suffix of what follows the vowel.

use crate::core::tables::{tone_glyph, CODA_KEYS, ONSET_KEYS, VOWEL_KEYS};

/// Decomposition of one romanized syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable<'a> {
    /// Tone mark glyph ("" for mid tone or no tone digit)
    pub tone: &'static str,
    /// Onset key (None = no onset matched)
    pub onset_key: Option<&'static str>,
    /// Vowel key (None = vowel-less syllable, onset only)
    pub vowel_key: Option<&'static str>,
    /// Coda key (None = open syllable)
    pub coda_key: Option<&'static str>,
    /// Core text before the vowel
    pub before: &'a str,
    /// Core text after the vowel
    pub after: &'a str,
}

/// Strip a trailing tone digit `1`-`5`
/// Returns: (core, tone glyph)
pub fn split_tone(s: &str) -> (&str, &'static str) {
    if let Some(last) = s.chars().last() {
        if let Some(tone) = tone_glyph(last) {
            return (&s[..s.len() - last.len_utf8()], tone);
        }
    }
    (s, "")
}

/// Longest onset key that prefixes `s`
/// Returns: (onset key, rest of `s`)
pub fn match_onset(s: &str) -> Option<(&'static str, &str)> {
    ONSET_KEYS
        .iter()
        .find(|k| s.starts_with(*k))
        .map(|k| (*k, &s[k.len()..]))
}

/// First vowel key, longest first, occurring anywhere in `s`
/// Returns: (vowel key, text before it, text after it)
pub fn match_vowel(s: &str) -> Option<(&'static str, &str, &str)> {
    VOWEL_KEYS.iter().find_map(|k| {
        s.find(*k)
            .map(|idx| (*k, &s[..idx], &s[idx + k.len()..]))
    })
}

/// Longest coda key that ends `s`
/// Returns: (coda key, text before it)
pub fn match_coda(s: &str) -> Option<(&'static str, &str)> {
    CODA_KEYS
        .iter()
        .find(|k| s.ends_with(*k))
        .map(|k| (*k, &s[..s.len() - k.len()]))
}

/// Decompose a lower-cased syllable
///
/// Returns `None` for a malformed syllable: without a vowel, the core must be empty
/// (a bare tone digit) or exactly one onset key.
pub fn tokenize(syllable: &str) -> Option<Syllable<'_>> {
    let (core, tone) = split_tone(syllable);

    match match_vowel(core) {
        Some((vowel_key, before, after)) => Some(Syllable {
            tone,
            onset_key: match_onset(before).map(|(k, _)| k),
            vowel_key: Some(vowel_key),
            coda_key: match_coda(after).map(|(k, _)| k),
            before,
            after,
        }),
        // bare tone digit: nothing left after the (absent) onset
        None if core.is_empty() => Some(Syllable {
            tone,
            onset_key: None,
            vowel_key: None,
            coda_key: None,
            before: "",
            after: "",
        }),
        None => {
            // vowel-less: the core must be a single onset key
            let (onset_key, rest) = match_onset(core)?;
            if !rest.is_empty() {
                return None;
            }
            Some(Syllable {
                tone,
                onset_key: Some(onset_key),
                vowel_key: None,
                coda_key: None,
                before: core,
                after: "",
            })
        }
    }
}
