//! Integration tests - conversion and suggestion through the public API

use thaikey::core::tables::{onset_entries, vowel_entries};
use thaikey::{
    convert_phrase, convert_syllable, convert_token, suggest, Converter, Dictionary,
    DictionaryEntry, DEFAULT_SUGGESTION_LIMIT,
};

#[test]
fn test_phrase_examples() {
    assert_eq!(convert_phrase("sawatdii"), "สวัสดี");
    assert_eq!(convert_phrase("sawatdii khrap"), "สวัสดี ครับ");
    assert_eq!(convert_phrase("khon3 dern1 zzz"), "คน เดิน ?");
}

#[test]
fn test_token_examples() {
    assert_eq!(convert_token("khon3"), "คน");
    assert_eq!(convert_token("dern1"), "เดิน");
    assert_eq!(convert_token("zzz"), "?");
}

#[test]
fn test_every_onset_with_mid_tone() {
    for (key, glyphs) in onset_entries() {
        let token = format!("{}1", key);
        assert_eq!(convert_token(&token), glyphs, "onset {}", key);
    }
}

#[test]
fn test_every_vowel_on_placeholder_onset() {
    for (key, vowel) in vowel_entries() {
        let expected = [vowel.pre, "ก", vowel.stack, vowel.post].concat();
        let roman = format!("k{}", key);
        assert_eq!(convert_syllable(&roman), Some(expected), "vowel {}", key);
    }
}

#[test]
fn test_dictionary_round_trip() {
    let dict = Dictionary::builtin();
    for entry in dict.iter() {
        // a repeated roman form resolves to its last entry
        let expected = dict.lookup(&entry.roman).unwrap();
        assert_eq!(convert_token(&entry.roman), expected, "roman {}", entry.roman);
    }
    assert_eq!(convert_token("aroy"), "อร่อย");
    assert_eq!(convert_token("?aacaan"), "อาจารย์");
}

#[test]
fn test_longest_cluster_key_wins() {
    assert_eq!(convert_syllable("khr1").as_deref(), Some("คร"));
    assert_eq!(convert_syllable("khruu").as_deref(), Some("ครู"));
    assert_eq!(convert_syllable("phlaa").as_deref(), Some("พลา"));
}

#[test]
fn test_structural_overrides() {
    let kon = convert_syllable("kon1").unwrap();
    assert_eq!(kon, "กน");
    assert_ne!(kon, "โกะน");
    assert_eq!(convert_syllable("dern1").as_deref(), Some("เดิน"));
    assert_eq!(convert_syllable("dern1").as_deref(), Dictionary::builtin().lookup("dern"));
    assert_eq!(convert_syllable("rak").as_deref(), Some("รัก"));
}

/// Concatenated conversion of syllables that each convert on their own
fn joined(syllables: &[&str]) -> String {
    syllables
        .iter()
        .map(|s| convert_syllable(s).unwrap_or_else(|| panic!("syllable {}", s)))
        .collect()
}

#[test]
fn test_segmenter_terminates_on_long_input() {
    let cases = [
        ("khkhkhkhkhkhkhkhkhkhkhkhkhkhkh", joined(&["kh"; 15])),
        ("zqzqzqzqzqzqzqzqzqzqzqzqzqzqzq", "?".to_string()),
        ("k1k2k3k4k5khkhkhkhkhkhkhkhkhkz", "?".to_string()),
        ("ngngngngngngngngngngngngngngng", joined(&["ng"; 15])),
    ];
    for (input, expected) in &cases {
        assert_eq!(input.len(), 30);
        assert_eq!(&convert_token(input), expected, "input {}", input);
    }
    assert_eq!(convert_token("ngngngngngngngngngngngngngngng"), "ง".repeat(15));
}

#[test]
fn test_segmented_token_is_concatenation_of_syllables() {
    assert_eq!(
        convert_token("k1k2k3k4k5khkh"),
        joined(&["k1", "k2", "k3", "k4", "k5", "kh", "kh"])
    );
    assert_eq!(convert_token("k1k2k3k4k5khkh"), "กก่ก้ก๊ก๋ขข");
}

#[test]
fn test_bare_tone_digit_token() {
    assert_eq!(convert_token("2"), "่");
    assert_eq!(convert_phrase("kin 4"), "กิน ๊");
    let result = suggest("2", DEFAULT_SUGGESTION_LIMIT);
    assert!(result.iter().any(|e| e.roman == "2" && e.thai == "่" && e.weight == 999));
}

#[test]
fn test_suggest_ranking() {
    let result = suggest("aroy", DEFAULT_SUGGESTION_LIMIT);
    assert!(result.iter().take(3).any(|e| e.thai == "อร่อย"));
    assert_eq!(result[0].weight, 999);

    let result = suggest("kin", DEFAULT_SUGGESTION_LIMIT);
    assert_eq!(result[0].thai, "กิน");
    assert_eq!(result.len(), DEFAULT_SUGGESTION_LIMIT);
    assert!(result.windows(2).all(|w| w[0].weight >= w[1].weight));
}

#[test]
fn test_suggest_empty() {
    assert!(suggest("", DEFAULT_SUGGESTION_LIMIT).is_empty());
    assert!(suggest("zzz", DEFAULT_SUGGESTION_LIMIT).is_empty());
}

#[test]
fn test_extended_dictionary_converter() {
    let mut dict = Dictionary::builtin();
    dict.extend([DictionaryEntry::new("maew", "แมว", 300)]);
    let converter = Converter::with_dictionary(dict);

    assert_eq!(converter.convert_phrase("maew khon3"), "แมว คน");
    let result = converter.suggest("mae", DEFAULT_SUGGESTION_LIMIT);
    assert!(result.iter().any(|e| e.roman == "maew" && e.thai == "แมว"));
}

#[test]
fn test_concurrent_conversion() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| convert_phrase("sawatdii khrap")))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "สวัสดี ครับ");
    }
}
