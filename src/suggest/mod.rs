//! Spelling suggestions
//!
//! Merges candidates for a romanized buffer from five sources, in priority order:
//!
//! 1. the buffer's own conversion (weight 999)
//! 2. dictionary entries whose roman form starts with the tone-stripped buffer
//! 3. dictionary entries at positional distance 1 from it
//! 4. homophonic onset substitutions of the conversion (weight 40)
//! 5. homophonic coda substitutions of the conversion (weight 35)
//!
//! Candidates are deduplicated by (roman, thai), stably sorted by descending weight and
//! truncated, so earlier sources win ties.
//!
//! ```
//! use thaikey::suggest;
//!
//! let top = suggest("aroy", 8);
//! assert_eq!(top[0].thai, "อร่อย");
//! assert!(suggest("", 8).is_empty());
//! ```

mod alternates;
mod distance;

pub use alternates::{coda_alternates, onset_alternates, ALT_CODA_WEIGHT, ALT_ONSET_WEIGHT};
pub use distance::positional_distance;

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::core::converter::{default_converter, Converter, FAILURE_SENTINEL};
use crate::core::tokenizer::split_tone;
use crate::dictionary::DictionaryEntry;

/// Default number of suggestions
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Weight of the buffer's own conversion
pub const BASE_CONVERSION_WEIGHT: u32 = 999;

/// Order-preserving, (roman, thai)-deduplicated candidate list
#[derive(Default)]
struct Candidates {
    seen: HashSet<(String, String)>,
    entries: Vec<DictionaryEntry>,
}

impl Candidates {
    /// Add entries not seen yet; returns how many were new
    fn add<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        let before = self.entries.len();
        for entry in entries {
            if self.seen.insert((entry.roman.clone(), entry.thai.clone())) {
                self.entries.push(entry);
            }
        }
        self.entries.len() - before
    }

    fn into_ranked(mut self, limit: usize) -> Vec<DictionaryEntry> {
        self.entries.sort_by_key(|e| Reverse(e.weight));
        self.entries.truncate(limit);
        self.entries
    }
}

/// Suggestions for `buffer` from `converter`'s dictionary and rules
pub fn suggest_with(converter: &Converter, buffer: &str, limit: usize) -> Vec<DictionaryEntry> {
    let roman = buffer.to_lowercase();
    if roman.is_empty() {
        return Vec::new();
    }
    let (core, _) = split_tone(&roman);
    let dictionary = converter.dictionary();

    let base = converter.convert_token(&roman);
    let base = (base != FAILURE_SENTINEL).then_some(base);

    let mut candidates = Candidates::default();

    if let Some(base) = &base {
        candidates.add([DictionaryEntry::new(
            roman.as_str(),
            base.as_str(),
            BASE_CONVERSION_WEIGHT,
        )]);
    }

    let prefix = candidates.add(dictionary.iter().filter(|e| e.roman.starts_with(core)).cloned());

    let fuzzy = candidates.add(
        dictionary
            .iter()
            .filter(|e| positional_distance(core, &e.roman) == Some(1))
            .cloned(),
    );

    let (onset, coda) = match &base {
        Some(base) => (
            candidates.add(onset_alternates(&roman, base)),
            candidates.add(coda_alternates(&roman, base)),
        ),
        None => (0, 0),
    };

    log::debug!(
        "suggest '{}': base={:?} prefix={} fuzzy={} onset={} coda={}",
        roman,
        base,
        prefix,
        fuzzy,
        onset,
        coda
    );

    candidates.into_ranked(limit)
}

/// Suggestions for `buffer` using the built-in dictionary
pub fn suggest(buffer: &str, limit: usize) -> Vec<DictionaryEntry> {
    suggest_with(default_converter(), buffer, limit)
}
