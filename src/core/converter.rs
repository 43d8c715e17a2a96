//! Romanized Thai -> Thai script converter
//!
//! Resolution order per token: exact dictionary entry, single syllable, multi-syllable
//! segmentation, then the `"?"` sentinel.

use lazy_static::lazy_static;

use crate::core::assembler::convert_syllable;
use crate::core::segmenter::segment;
use crate::dictionary::{Dictionary, DictionaryEntry};
use crate::suggest::suggest_with;

/// Output for a token that cannot be converted
pub const FAILURE_SENTINEL: &str = "?";

lazy_static! {
    static ref DEFAULT_CONVERTER: Converter = Converter::new();
}

/// Converter over an immutable dictionary
#[derive(Debug, Clone)]
pub struct Converter {
    dictionary: Dictionary,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Converter using the built-in dictionary
    pub fn new() -> Self {
        Self::with_dictionary(Dictionary::builtin())
    }

    /// Converter using the given dictionary
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Convert one whitespace-free token; never fails, returns `"?"` when unconvertible
    pub fn convert_token(&self, token: &str) -> String {
        let token = token.to_lowercase();

        if let Some(thai) = self.dictionary.lookup(&token) {
            log::debug!("'{}': dictionary", token);
            return thai.to_string();
        }

        if let Some(thai) = convert_syllable(&token) {
            log::debug!("'{}': syllable", token);
            return thai;
        }

        if let Some(thai) = segment(&token).filter(|t| !t.is_empty()) {
            log::debug!("'{}': segmented", token);
            return thai;
        }

        log::debug!("'{}': unconvertible", token);
        FAILURE_SENTINEL.to_string()
    }

    /// Convert each whitespace-separated token independently and join with single spaces
    pub fn convert_phrase(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|token| self.convert_token(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Ranked alternative spellings for `buffer`, at most `limit`
    pub fn suggest(&self, buffer: &str, limit: usize) -> Vec<DictionaryEntry> {
        suggest_with(self, buffer, limit)
    }
}

/// Shared converter over the built-in dictionary
pub fn default_converter() -> &'static Converter {
    &DEFAULT_CONVERTER
}

/// Convert one token with the built-in dictionary
pub fn convert_token(token: &str) -> String {
    DEFAULT_CONVERTER.convert_token(token)
}

/// Convert a phrase with the built-in dictionary
///
/// # Examples
/// ```
/// use thaikey::convert_phrase;
///
/// assert_eq!(convert_phrase("sawatdii khrap"), "สวัสดี ครับ");
/// assert_eq!(convert_phrase("kin  zzz"), "กิน ?");
/// ```
pub fn convert_phrase(text: &str) -> String {
    DEFAULT_CONVERTER.convert_phrase(text)
}
