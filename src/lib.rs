pub mod config;
pub mod core;
pub mod dictionary;
pub mod suggest;

pub use crate::core::assembler::convert_syllable;
pub use crate::core::converter::{convert_phrase, convert_token, Converter, FAILURE_SENTINEL};
pub use crate::dictionary::{Dictionary, DictionaryEntry, DictionaryError};
pub use crate::suggest::{suggest, DEFAULT_SUGGESTION_LIMIT};
