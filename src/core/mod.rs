//! Romanized Thai conversion engine
//!
//! `tables` -> `tokenizer` -> `assembler` for one syllable, `segmenter` for tokens made
//! of several syllables, `converter` for the dictionary-first pipeline.

pub mod assembler;
pub mod converter;
pub mod segmenter;
pub mod tables;
pub mod tokenizer;
