//! Thai syllable assembly
//!
//! Glyph order: pre-vowel + onset + stacked vowel + tone + post-vowel + coda.
//! Stacked vowels and tone marks follow the whole onset, so for a two-consonant
//! cluster they ride the second consonant.

use crate::core::tables::{coda_glyph, onset_glyphs, vowel_glyphs, PLACEHOLDER_ONSET};
use crate::core::tokenizer::tokenize;

/// Mai han-akat: short "a" before a final consonant
const MAI_HAN_AKAT: &str = "ั";
/// Sara i: inner vowel of เ-ิ before a nasal final
const SARA_I: &str = "ิ";
/// Sara e: leading vowel of เ-ิ
const SARA_E: &str = "เ";

/// Finals that switch er/oee to the เ-ิ spelling (ม น ง)
const NASAL_FINALS: [&str; 3] = ["ม", "น", "ง"];

/// Assemble one syllable from its glyph parts
///
/// - `onset`: onset glyph(s), "" falls back to ก
/// - `vowel_key`: vowel table key
/// - `tone`: tone mark ("" = none)
/// - `coda`: final consonant glyph ("" = open syllable)
pub fn assemble(onset: &str, vowel_key: &str, tone: &str, coda: &str) -> String {
    let onset = if onset.is_empty() { PLACEHOLDER_ONSET } else { onset };

    if !coda.is_empty() {
        match vowel_key {
            // short o before a final is not written: คน
            "o" => return [onset, tone, coda].concat(),
            // short a before a final: กัน
            "a" => return [onset, MAI_HAN_AKAT, tone, coda].concat(),
            // er/oee before ม น ง: เดิน, เงิน
            "er" | "oee" if NASAL_FINALS.contains(&coda) => {
                return [SARA_E, onset, SARA_I, tone, coda].concat();
            }
            _ => {}
        }
    }

    let vowel = vowel_glyphs(vowel_key).unwrap_or_default();
    [vowel.pre, onset, vowel.stack, tone, vowel.post, coda].concat()
}

/// Convert one romanized syllable to Thai
///
/// Returns `None` when the input is not a single well-formed syllable.
pub fn convert_syllable(roman: &str) -> Option<String> {
    let roman = roman.to_lowercase();
    let syllable = tokenize(&roman)?;
    let onset = syllable.onset_key.and_then(onset_glyphs).unwrap_or("");

    let thai = match syllable.vowel_key {
        Some(vowel_key) => {
            let coda = syllable.coda_key.and_then(coda_glyph).unwrap_or("");
            assemble(onset, vowel_key, syllable.tone, coda)
        }
        None => [onset, syllable.tone].concat(),
    };

    if thai.is_empty() {
        None
    } else {
        Some(thai)
    }
}
