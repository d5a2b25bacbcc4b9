// Unicode blocks of the supported scripts
pub const DEVANAGARI_START: char = '\u{0900}';
pub const DEVANAGARI_END: char = '\u{097F}';
pub const SINHALA_START: char = '\u{0D80}';
pub const SINHALA_END: char = '\u{0DFF}';
pub const THAI_START: char = '\u{0E00}';
pub const THAI_END: char = '\u{0E7F}';
pub const MYANMAR_START: char = '\u{1000}';
pub const MYANMAR_END: char = '\u{109F}';
pub const KHMER_START: char = '\u{1780}';
pub const KHMER_END: char = '\u{17FF}';

/// Number of vowel slots shared by every table: a ā i ī u ū, ṛ ṝ ḷ ḹ, e ai o au.
pub const VOWEL_COUNT: usize = 14;
/// Number of consonant slots shared by every table, ka .. ha including ḻa, śa and ṣa.
pub const CONSONANT_COUNT: usize = 34;

/// Roughly "ASCII Roman": digits, upper and lower case letters and the few
/// punctuation marks between them.
pub fn is_roman_char(c: char) -> bool {
    ('\u{0030}'..='\u{007A}').contains(&c)
}

pub fn is_devanagari_char(c: char) -> bool {
    (DEVANAGARI_START..=DEVANAGARI_END).contains(&c)
}

pub fn is_sinhala_char(c: char) -> bool {
    (SINHALA_START..=SINHALA_END).contains(&c)
}

pub fn is_thai_char(c: char) -> bool {
    (THAI_START..=THAI_END).contains(&c)
}

pub fn is_myanmar_char(c: char) -> bool {
    (MYANMAR_START..=MYANMAR_END).contains(&c)
}

pub fn is_khmer_char(c: char) -> bool {
    (KHMER_START..=KHMER_END).contains(&c)
}

// Devanagari rendering artifacts without phonemic value
pub const DEVA_NUKTA: char = '\u{093C}';
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';

#[inline]
pub fn is_rendering_artifact(c: char) -> bool {
    c == DEVA_NUKTA || c == ZERO_WIDTH_JOINER
}

// ============================================================================
// Canonical ("Unique") Roman
// ============================================================================

/// Canonical Roman vowels, slot-aligned with the script tables.
/// `ē` stands for ai and `ō` for au until a display style expands them.
pub const ROMAN_VOWELS: [char; VOWEL_COUNT] = [
    'a', 'ā', 'i', 'ī', 'u', 'ū', 'ṛ', 'ṝ', 'ḷ', 'ḹ', 'e', 'ē', 'o', 'ō',
];

/// Canonical Roman consonants. The retroflex lateral is `ḻ`, never `ḷ`.
pub const ROMAN_CONSONANTS: [&str; CONSONANT_COUNT] = [
    "k", "kh", "g", "gh", "ṅ",
    "c", "ch", "j", "jh", "ñ",
    "ṭ", "ṭh", "ḍ", "ḍh", "ṇ",
    "t", "th", "d", "dh", "n",
    "p", "ph", "b", "bh", "m",
    "y", "r", "l", "ḻ", "v", "ś", "ṣ", "s", "h",
];

/// First letter of each consonant slot; aspirated slots hold `x` and are only
/// reached through their unaspirated neighbour plus a following `h`.
pub const ROMAN_CONSONANT_LEADS: [char; CONSONANT_COUNT] = [
    'k', 'x', 'g', 'x', 'ṅ',
    'c', 'x', 'j', 'x', 'ñ',
    'ṭ', 'x', 'ḍ', 'x', 'ṇ',
    't', 'x', 'd', 'x', 'n',
    'p', 'x', 'b', 'x', 'm',
    'y', 'r', 'l', 'ḻ', 'v', 'ś', 'ṣ', 's', 'h',
];

/// Placeholder in [`ROMAN_CONSONANT_LEADS`]; also passed through untouched.
pub const ROMAN_RESERVED: char = 'x';

/// Consonants that form an aspirate with a following `h`.
pub const ROMAN_ASPIRABLE: &str = "bcdgjkptḍṭ";

pub const ROMAN_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub const ROMAN_NIGGAHITA: char = 'ṃ';
pub const ROMAN_VISARGA: char = 'ḥ';
pub const ROMAN_AVAGRAHA: char = '\u{0315}';
pub const ROMAN_DANDA: char = '|';
pub const ROMAN_DOUBLE_DANDA: char = '\u{2016}';
pub const ROMAN_ABBREVIATION: char = '\u{00B7}';

pub fn roman_vowel_index(c: char) -> Option<usize> {
    ROMAN_VOWELS.iter().position(|&v| v == c)
}

/// Slot of an unaspirated consonant letter.
pub fn roman_consonant_index(c: char) -> Option<usize> {
    if c == ROMAN_RESERVED {
        return None;
    }
    ROMAN_CONSONANT_LEADS.iter().position(|&l| l == c)
}

#[inline]
pub fn is_roman_consonant(c: char) -> bool {
    roman_consonant_index(c).is_some()
}

// ============================================================================
// Script-specific marks used by the post-processing passes
// ============================================================================

pub const THAI_SARA_E: char = '\u{0E40}';
pub const THAI_SARA_O: char = '\u{0E42}';
pub const THAI_SARA_AI: char = '\u{0E44}';
pub const THAI_SARA_UE: char = '\u{0E36}';
pub const THAI_SARA_I: char = '\u{0E34}';
pub const THAI_NIKKHAHIT: char = '\u{0E4D}';
pub const THAI_YO_YING: char = '\u{0E0D}';
pub const THAI_THO_THAN: char = '\u{0E10}';
// Legacy font glyph variants of yo ying and tho than without their lower part
pub const THAI_ALT_YO_YING: char = '\u{F70F}';
pub const THAI_ALT_THO_THAN: char = '\u{F700}';

pub const KHMER_COENG: char = '\u{17D2}';
pub const KHMER_KILLER: char = '\u{17D1}';

/// Khmer independent ṛ ṝ ḷ ḹ, which a coeng may legitimately precede.
pub fn is_khmer_vocalic_liquid(c: char) -> bool {
    ('\u{17AB}'..='\u{17AE}').contains(&c)
}

pub const MYANMAR_VIRAMA: char = '\u{1039}';
pub const MYANMAR_ASAT: char = '\u{103A}';
pub const MYANMAR_TALL_AA: char = '\u{102B}';
pub const MYANMAR_SHORT_AA: char = '\u{102C}';
pub const MYANMAR_VOWEL_E: char = '\u{1031}';
pub const MYANMAR_NGA: char = '\u{1004}';
pub const MYANMAR_NYA: char = '\u{1009}';
pub const MYANMAR_GREAT_NYA: char = '\u{100A}';
pub const MYANMAR_SA: char = '\u{101E}';
pub const MYANMAR_GREAT_SA: char = '\u{103F}';

/// Consonant → medial sign pairs (ya, ra, va, ha).
pub const MYANMAR_MEDIALS: [(char, char); 4] = [
    ('\u{101A}', '\u{103B}'),
    ('\u{101B}', '\u{103C}'),
    ('\u{101D}', '\u{103D}'),
    ('\u{101F}', '\u{103E}'),
];
