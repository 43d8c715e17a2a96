//! Dictionary storage, exact lookup and JSON loading

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::builtin::BUILTIN_ENTRIES;

/// Dictionary load/parse error
#[derive(Debug)]
pub enum DictionaryError {
    /// File read failure
    IoError(std::io::Error),
    /// JSON parse failure
    ParseError(String),
    /// Entry failed validation
    FormatError(String),
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::IoError(e) => write!(f, "dictionary read error: {}", e),
            DictionaryError::ParseError(s) => write!(f, "dictionary JSON error: {}", s),
            DictionaryError::FormatError(s) => write!(f, "dictionary format error: {}", s),
        }
    }
}

impl std::error::Error for DictionaryError {}

impl From<std::io::Error> for DictionaryError {
    fn from(e: std::io::Error) -> Self {
        DictionaryError::IoError(e)
    }
}

fn default_weight() -> u32 {
    1
}

/// One romanization with its Thai spelling
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DictionaryEntry {
    /// Romanized form (lower-cased in a `Dictionary`)
    pub roman: String,
    /// Thai spelling
    pub thai: String,
    /// Relative frequency, higher ranks first
    #[serde(default = "default_weight")]
    pub weight: u32,
}

impl DictionaryEntry {
    pub fn new(roman: impl Into<String>, thai: impl Into<String>, weight: u32) -> Self {
        Self {
            roman: roman.into(),
            thai: thai.into(),
            weight,
        }
    }

    fn validate(&self) -> Result<(), DictionaryError> {
        if self.roman.trim().is_empty() {
            return Err(DictionaryError::FormatError(format!(
                "empty roman form for '{}'",
                self.thai
            )));
        }
        if self.thai.trim().is_empty() {
            return Err(DictionaryError::FormatError(format!(
                "empty Thai form for '{}'",
                self.roman
            )));
        }
        if self.weight == 0 {
            return Err(DictionaryError::FormatError(format!(
                "weight must be at least 1 for '{}'",
                self.roman
            )));
        }
        Ok(())
    }
}

/// Ordered dictionary with an exact-match index
///
/// Entries keep insertion order for stable ranking. The index maps each lower-cased
/// roman form to the last entry inserted with it.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
    index: HashMap<String, usize>,
}

impl Dictionary {
    /// Empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary with the built-in entries
    pub fn builtin() -> Self {
        BUILTIN_ENTRIES
            .iter()
            .map(|&(roman, thai, weight)| DictionaryEntry::new(roman, thai, weight))
            .collect()
    }

    /// Append an entry; its roman form is lower-cased
    pub fn push(&mut self, mut entry: DictionaryEntry) {
        entry.roman = entry.roman.to_lowercase();
        self.index.insert(entry.roman.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Exact, case-insensitive lookup of a roman form
    pub fn lookup(&self, roman: &str) -> Option<&str> {
        self.index
            .get(&roman.to_lowercase())
            .map(|&i| self.entries[i].thai.as_str())
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DictionaryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read entries from a JSON file
    ///
    /// # File format
    /// ```json
    /// [
    ///   { "roman": "maew", "thai": "แมว", "weight": 300 },
    ///   { "roman": "rot", "thai": "รถ" }
    /// ]
    /// ```
    /// A missing `weight` defaults to 1.
    pub fn load_entries(path: impl AsRef<Path>) -> Result<Vec<DictionaryEntry>, DictionaryError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let entries: Vec<DictionaryEntry> = serde_json::from_reader(reader)
            .map_err(|e| DictionaryError::ParseError(e.to_string()))?;

        Self::validated(entries)
    }

    /// Read entries from a JSON string
    pub fn entries_from_json(json_str: &str) -> Result<Vec<DictionaryEntry>, DictionaryError> {
        let entries: Vec<DictionaryEntry> = serde_json::from_str(json_str)
            .map_err(|e| DictionaryError::ParseError(e.to_string()))?;

        Self::validated(entries)
    }

    /// Append the entries of a JSON file after the current ones
    /// Returns: number of entries added
    pub fn extend_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, DictionaryError> {
        let path = path.as_ref();
        let entries = Self::load_entries(path)?;
        let count = entries.len();
        self.extend(entries);
        log::info!("loaded {} dictionary entries from {}", count, path.display());
        Ok(count)
    }

    fn validated(entries: Vec<DictionaryEntry>) -> Result<Vec<DictionaryEntry>, DictionaryError> {
        for entry in &entries {
            entry.validate()?;
        }
        Ok(entries)
    }
}

impl Extend<DictionaryEntry> for Dictionary {
    fn extend<I: IntoIterator<Item = DictionaryEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.push(entry);
        }
    }
}

impl FromIterator<DictionaryEntry> for Dictionary {
    fn from_iter<I: IntoIterator<Item = DictionaryEntry>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}
