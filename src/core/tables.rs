//! Romanization glyph tables
//!
//! Static onset / vowel / tone / coda tables and the homophonic alternate tables used by
//! the suggestion engine. Keys that are matched longest-first are sorted once, here.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Where a vowel's glyphs sit relative to the onset consonant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VowelGlyphs {
    /// Written before the onset (เ แ โ ไ)
    pub pre: &'static str,
    /// Stacked above or below the last onset consonant
    pub stack: &'static str,
    /// Written after the onset (and after any tone mark)
    pub post: &'static str,
}

const fn vowel(pre: &'static str, stack: &'static str, post: &'static str) -> VowelGlyphs {
    VowelGlyphs { pre, stack, post }
}

/// Placeholder consonant used when a vowel-bearing syllable has no onset (ก)
pub const PLACEHOLDER_ONSET: &str = "ก";

/// Onset consonants and clusters, in declaration order
const ONSETS: &[(&str, &str)] = &[
    // single consonants
    ("kh", "ข"), ("k", "ก"), ("ph", "ผ"), ("p", "ป"),
    ("th", "ถ"), ("t", "ต"), ("ch", "ช"), ("c", "จ"),
    ("j", "จ"), ("b", "บ"), ("d", "ด"), ("f", "ฟ"),
    ("s", "ส"), ("h", "ห"), ("m", "ม"), ("n", "น"),
    ("ng", "ง"), ("r", "ร"), ("l", "ล"), ("w", "ว"),
    ("y", "ย"), ("?", "อ"),
    // true clusters
    ("pr", "ปร"), ("phr", "พร"), ("kr", "กร"), ("khr", "คร"), ("tr", "ตร"),
    ("pl", "ปล"), ("phl", "พล"), ("kl", "กล"), ("khl", "คล"), ("kw", "กว"), ("khw", "ขว"),
    // leading ห
    ("hng", "หง"), ("hn", "หน"), ("hm", "หม"), ("hy", "หย"), ("hr", "หร"), ("hl", "หล"), ("hw", "หว"),
];

const VOWELS: &[(&str, VowelGlyphs)] = &[
    ("a", vowel("", "", "ะ")),
    ("aa", vowel("", "", "า")),
    ("i", vowel("", "ิ", "")),
    ("ii", vowel("", "ี", "")),
    ("u", vowel("", "ุ", "")),
    ("uu", vowel("", "ู", "")),
    ("e", vowel("เ", "็", "")),
    ("ee", vowel("เ", "", "")),
    ("o", vowel("โ", "", "ะ")),
    ("oo", vowel("โ", "", "")),
    ("ae", vowel("แ", "", "ะ")),
    ("aee", vowel("แ", "", "")),
    ("ea", vowel("แ", "", "ะ")),
    ("eaa", vowel("แ", "", "")),
    ("oe", vowel("เ", "", "อะ")),
    ("oee", vowel("เ", "", "อ")),
    ("err", vowel("เ", "", "อะ")),
    ("er", vowel("เ", "", "อ")),
    ("or", vowel("เ", "", "าะ")),
    ("orr", vowel("", "", "อ")),
    ("ia", vowel("เ", "ี", "ย")),
    ("ua", vowel("", "ั", "ว")),
    ("ai", vowel("ไ", "", "")),
    ("ay", vowel("ไ", "", "")),
    ("aw", vowel("เ", "", "า")),
    ("uea", vowel("เ", "ื", "อ")),
    ("am", vowel("", "", "ำ")),
];

/// Tone digit -> tone mark (1 = mid tone, unmarked)
const TONES: &[(char, &str)] = &[('1', ""), ('2', "่"), ('3', "้"), ('4', "๊"), ('5', "๋")];

const CODAS: &[(&str, &str)] = &[
    ("ng", "ง"), ("k", "ก"), ("t", "ด"), ("p", "บ"),
    ("m", "ม"), ("n", "น"), ("w", "ว"), ("y", "ย"),
];

/// Homophonic onset spellings; the first glyph is usually the table default
const ALT_ONSETS: &[(&str, &[&str])] = &[
    ("th", &["ถ", "ท", "ธ", "ฒ", "ฐ"]),
    ("ph", &["ผ", "พ", "ภ"]),
    ("ch", &["ช", "ฉ", "ฌ"]),
    ("s", &["ส", "ซ", "ศ", "ษ"]),
    ("h", &["ห", "ฮ"]),
    ("y", &["ย", "ญ"]),
    ("f", &["ฟ", "ฝ"]),
    ("k", &["ก", "ไก"]),
    ("kh", &["ข", "ค", "ฆ"]),
    ("d", &["ด", "ฎ"]),
    ("t", &["ต", "ฏ"]),
    ("n", &["น", "ณ"]),
    ("l", &["ล", "ฬ"]),
];

/// Homophonic final-consonant spellings
const ALT_CODAS: &[(&str, &[&str])] = &[
    ("n", &["น", "ร", "ล", "ญ", "ณ", "ฬ", "รย์"]),
    (
        "t",
        &[
            "ด", "ต", "ท", "ธ", "ศ", "ษ", "ส", "จ", "ช", "ซ", "ฎ", "ฏ", "ฐ", "ฑ", "ฒ", "ติ", "ตุ",
            "ตว์",
        ],
    ),
    ("p", &["บ", "ป", "พ", "ฟ", "ภ", "พธ์"]),
    ("k", &["ก", "ข", "ค", "ฆ", "คร์"]),
];

/// Keys sorted by length, longest first. The sort is stable so equal-length keys keep
/// declaration order, which decides the vowel search when several keys occur in a core.
fn longest_first<V>(table: &[(&'static str, V)]) -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = table.iter().map(|(k, _)| *k).collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()));
    keys
}

lazy_static! {
    static ref ONSET_MAP: HashMap<&'static str, &'static str> = ONSETS.iter().copied().collect();
    static ref VOWEL_MAP: HashMap<&'static str, VowelGlyphs> = VOWELS.iter().copied().collect();
    static ref CODA_MAP: HashMap<&'static str, &'static str> = CODAS.iter().copied().collect();
    static ref ALT_ONSET_MAP: HashMap<&'static str, &'static [&'static str]> =
        ALT_ONSETS.iter().copied().collect();
    static ref ALT_CODA_MAP: HashMap<&'static str, &'static [&'static str]> =
        ALT_CODAS.iter().copied().collect();

    /// Onset keys, longest first
    pub static ref ONSET_KEYS: Vec<&'static str> = longest_first(ONSETS);
    /// Vowel keys, longest first
    pub static ref VOWEL_KEYS: Vec<&'static str> = longest_first(VOWELS);
    /// Coda keys, longest first
    pub static ref CODA_KEYS: Vec<&'static str> = longest_first(CODAS);
}

/// Thai glyph(s) for an onset key
pub fn onset_glyphs(key: &str) -> Option<&'static str> {
    ONSET_MAP.get(key).copied()
}

/// Glyph placement for a vowel key
pub fn vowel_glyphs(key: &str) -> Option<VowelGlyphs> {
    VOWEL_MAP.get(key).copied()
}

/// Tone mark for a tone digit; `None` if `c` is not `'1'..='5'`
pub fn tone_glyph(c: char) -> Option<&'static str> {
    TONES.iter().find(|(d, _)| *d == c).map(|(_, g)| *g)
}

/// Final consonant glyph for a coda key
pub fn coda_glyph(key: &str) -> Option<&'static str> {
    CODA_MAP.get(key).copied()
}

/// Homophonic alternates for an onset key
pub fn alt_onset_forms(key: &str) -> Option<&'static [&'static str]> {
    ALT_ONSET_MAP.get(key).copied()
}

/// Homophonic alternates for a coda key
pub fn alt_coda_forms(key: &str) -> Option<&'static [&'static str]> {
    ALT_CODA_MAP.get(key).copied()
}

/// Every onset key with its glyphs, in declaration order
pub fn onset_entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    ONSETS.iter().copied()
}

/// Every vowel key with its glyph placement, in declaration order
pub fn vowel_entries() -> impl Iterator<Item = (&'static str, VowelGlyphs)> {
    VOWELS.iter().copied()
}
