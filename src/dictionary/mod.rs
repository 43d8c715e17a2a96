//! Romanization dictionary
//!
//! Fixed (roman, Thai, weight) entries consulted before rule-based conversion, for
//! spellings the syllable rules cannot derive: silent glottal-stop prefixes, unwritten
//! short vowels in pseudo-clusters, ใ spellings, and compounds. Additional entries can be
//! loaded from a JSON file and are appended after the built-in ones.
//!
//! ```
//! use thaikey::dictionary::Dictionary;
//!
//! let dict = Dictionary::builtin();
//! assert_eq!(dict.lookup("Sawatdii"), Some("สวัสดี"));
//! assert_eq!(dict.lookup("zzz"), None);
//! ```

mod builtin;
mod store;

pub use builtin::BUILTIN_ENTRIES;
pub use store::{Dictionary, DictionaryEntry, DictionaryError};
