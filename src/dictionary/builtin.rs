//! Built-in romanization dictionary
//!
//! Irregular and compound spellings the syllable rules cannot derive, with frequency
//! weights used for suggestion ranking. Order matters: it is the tie-break order and,
//! for repeated roman forms, the last entry wins exact lookups.

/// (roman, thai, weight)
pub const BUILTIN_ENTRIES: &[(&str, &str, u32)] = &[
    // common words
    ("khon3", "คน", 100),
    ("khoon3", "คุณ", 90),
    ("khao3", "เขา", 80),
    ("baan3", "บ้าน", 95),
    ("di1", "ดี", 85),
    ("phuean3", "เพื่อน", 90),
    ("er", "เออ", 120),
    ("err", "เออะ", 110),
    ("dern", "เดิน", 200),
    // irregular and compound words
    ("khanom", "ขนม", 500),
    ("?aacaan", "อาจารย์", 500),
    ("aacaan", "อาจารย์", 500),
    ("ajarn", "อาจารย์", 500),
    ("?aahaan", "อาหาร", 500),
    ("aahaan", "อาหาร", 500),
    ("?arory", "อร่อย", 500),
    ("arory", "อร่อย", 500),
    ("aroy", "อร่อย", 450),
    ("aroi", "อร่อย", 450),
    ("phuying", "ผู้หญิง", 500),
    ("sawatdii", "สวัสดี", 1000),
    ("sabay", "สบาย", 400),
    ("sanuk", "สนุก", 400),
    ("sanam", "สนาม", 300),
    ("arak", "อรักษ์", 300),
    ("talaat", "ตลาด", 300),
    ("thalay", "ทะเล", 300),
    ("welaa", "เวลา", 300),
    ("naka", "นะคะ", 300),
    ("khrap", "ครับ", 300),
    // pseudo-clusters (unwritten short a between consonants)
    ("sabaay", "สบาย", 400),
    ("sadaeng", "แสดง", 350),
    ("sathaanii", "สถานี", 350),
    ("satrii", "สตรี", 300),
    ("thanon", "ถนน", 450),
    ("samut", "สมุด", 350),
    ("samoe", "เสมอ", 350),
    ("sanaam", "สนาม", 350),
    ("chalaat", "ฉลาด", 350),
    ("phanaek", "แผนก", 300),
    ("chalaam", "ฉลาม", 300),
    ("khaya", "ขยะ", 300),
    ("sara", "สระ", 300),
    ("sataem", "สแตมป์", 250),
    ("khamooy", "ขโมย", 350),
    ("samaakhom", "สมาคม", 300),
    ("samaachik", "สมาชิก", 300),
    ("samaathi", "สมาธิ", 300),
    // ใ words (the ai table spells ไ)
    ("cay", "ใจ", 200),
    ("khray", "ใคร", 200),
    ("may", "ใหม่", 200),
    ("hay", "ให้", 200),
    ("chay", "ใช่", 200),
    // bare vowels
    ("a", "อะ", 150),
    ("a", "อา", 140),
    ("ai", "ไอ", 130),
    ("ay", "ไอ", 130),
];
