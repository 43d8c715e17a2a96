//! Homophonic onset/coda substitutions
//!
//! Rewrites a successful base conversion with the other Thai letters that spell the same
//! onset or final sound (ส/ซ/ศ/ษ, น/ร/ล/ญ/ณ/ฬ, ...).

use crate::core::tables::{alt_coda_forms, alt_onset_forms, coda_glyph, onset_glyphs};
use crate::core::tokenizer::{match_coda, match_onset, match_vowel, split_tone};
use crate::dictionary::DictionaryEntry;

/// Weight of an onset substitution candidate
pub const ALT_ONSET_WEIGHT: u32 = 40;
/// Weight of a coda substitution candidate
pub const ALT_CODA_WEIGHT: u32 = 35;

/// Candidates replacing the first occurrence of the default onset glyph(s) in `base`
///
/// - `roman`: lower-cased buffer
/// - `base`: its successful conversion
pub fn onset_alternates(roman: &str, base: &str) -> Vec<DictionaryEntry> {
    let (core, _) = split_tone(roman);
    let before = match match_vowel(core) {
        Some((_, before, _)) => before,
        None => core,
    };

    let Some((onset_key, _)) = match_onset(before) else {
        return Vec::new();
    };
    let (Some(forms), Some(default)) = (alt_onset_forms(onset_key), onset_glyphs(onset_key)) else {
        return Vec::new();
    };

    forms
        .iter()
        .filter(|alt| **alt != default)
        .map(|alt| DictionaryEntry::new(roman, base.replacen(default, alt, 1), ALT_ONSET_WEIGHT))
        .collect()
}

/// Candidates replacing the default final glyph at the end of `base`
///
/// Empty when the syllable has no vowel, the coda has no alternates, or `base` does not
/// end with the default final glyph.
pub fn coda_alternates(roman: &str, base: &str) -> Vec<DictionaryEntry> {
    let (core, _) = split_tone(roman);
    let Some((_, _, after)) = match_vowel(core) else {
        return Vec::new();
    };
    let Some((coda_key, _)) = match_coda(after) else {
        return Vec::new();
    };
    let (Some(forms), Some(default)) = (alt_coda_forms(coda_key), coda_glyph(coda_key)) else {
        return Vec::new();
    };
    let Some(stem) = base.strip_suffix(default) else {
        return Vec::new();
    };

    forms
        .iter()
        .filter(|alt| **alt != default)
        .map(|alt| DictionaryEntry::new(roman, format!("{}{}", stem, alt), ALT_CODA_WEIGHT))
        .collect()
}
