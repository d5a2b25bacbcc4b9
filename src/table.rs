//! Per-script character tables.
//!
//! Every Indic script is described by the same slot layout: 14 vowels
//! (independent and dependent forms), 34 consonants, 10 digits and 7 signs.
//! Slot `n` in one table corresponds to slot `n` in every other, which is
//! what makes conversion through the Devanagari pivot a lookup.

use std::sync::OnceLock;

use fxhash::FxHashMap;

use crate::constants::{CONSONANT_COUNT, VOWEL_COUNT};
use crate::script::Script;

/// Non-letter marks that every script table carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Anusvara / niggahita
    Nasal,
    /// Visarga
    Aspiration,
    /// Avagraha
    Elision,
    /// Virama, coeng in Khmer
    Virama,
    Danda,
    DoubleDanda,
    Abbreviation,
}

impl Sign {
    pub const ALL: [Sign; 7] = [
        Sign::Nasal,
        Sign::Aspiration,
        Sign::Elision,
        Sign::Virama,
        Sign::Danda,
        Sign::DoubleDanda,
        Sign::Abbreviation,
    ];
}

struct TableData {
    independent: [&'static str; VOWEL_COUNT],
    // Slot 0 mirrors the independent `a`; the inherent vowel has no sign
    dependent: [&'static str; VOWEL_COUNT],
    consonants: [char; CONSONANT_COUNT],
    digits: [char; 10],
    // Indexed in `Sign::ALL` order
    signs: [char; 7],
}

static DEVANAGARI_DATA: TableData = TableData {
    independent: [
        "\u{0905}", "\u{0906}", "\u{0907}", "\u{0908}", "\u{0909}", "\u{090A}", "\u{090B}",
        "\u{0960}", "\u{090C}", "\u{0961}", "\u{090F}", "\u{0910}", "\u{0913}", "\u{0914}",
    ],
    dependent: [
        "\u{0905}", "\u{093E}", "\u{093F}", "\u{0940}", "\u{0941}", "\u{0942}", "\u{0943}",
        "\u{0944}", "\u{0962}", "\u{0963}", "\u{0947}", "\u{0948}", "\u{094B}", "\u{094C}",
    ],
    consonants: [
        '\u{0915}', '\u{0916}', '\u{0917}', '\u{0918}', '\u{0919}',
        '\u{091A}', '\u{091B}', '\u{091C}', '\u{091D}', '\u{091E}',
        '\u{091F}', '\u{0920}', '\u{0921}', '\u{0922}', '\u{0923}',
        '\u{0924}', '\u{0925}', '\u{0926}', '\u{0927}', '\u{0928}',
        '\u{092A}', '\u{092B}', '\u{092C}', '\u{092D}', '\u{092E}',
        '\u{092F}', '\u{0930}', '\u{0932}', '\u{0933}', '\u{0935}',
        '\u{0936}', '\u{0937}', '\u{0938}', '\u{0939}',
    ],
    digits: [
        '\u{0966}', '\u{0967}', '\u{0968}', '\u{0969}', '\u{096A}',
        '\u{096B}', '\u{096C}', '\u{096D}', '\u{096E}', '\u{096F}',
    ],
    signs: ['\u{0902}', '\u{0903}', '\u{093D}', '\u{094D}', '\u{0964}', '\u{0965}', '\u{0970}'],
};

static THAI_DATA: TableData = TableData {
    independent: [
        "\u{0E2D}", "\u{0E2D}\u{0E32}", "\u{0E2D}\u{0E34}", "\u{0E2D}\u{0E35}",
        "\u{0E2D}\u{0E38}", "\u{0E2D}\u{0E39}", "\u{0E24}", "\u{0E24}\u{0E45}",
        "\u{0E26}", "\u{0E26}\u{0E45}", "\u{0E2D}\u{0E40}", "\u{0E2D}\u{0E44}",
        "\u{0E2D}\u{0E42}", "\u{0E2D}\u{0E40}\u{0E32}",
    ],
    dependent: [
        "\u{0E2D}", "\u{0E32}", "\u{0E34}", "\u{0E35}", "\u{0E38}", "\u{0E39}", "\u{0E24}",
        "\u{0E24}\u{0E45}", "\u{0E26}", "\u{0E26}\u{0E45}", "\u{0E40}", "\u{0E44}", "\u{0E42}",
        "\u{0E40}\u{0E32}",
    ],
    consonants: [
        '\u{0E01}', '\u{0E02}', '\u{0E04}', '\u{0E06}', '\u{0E07}',
        '\u{0E08}', '\u{0E09}', '\u{0E0A}', '\u{0E0C}', '\u{0E0D}',
        '\u{0E0F}', '\u{0E10}', '\u{0E11}', '\u{0E12}', '\u{0E13}',
        '\u{0E15}', '\u{0E16}', '\u{0E17}', '\u{0E18}', '\u{0E19}',
        '\u{0E1B}', '\u{0E1C}', '\u{0E1E}', '\u{0E20}', '\u{0E21}',
        '\u{0E22}', '\u{0E23}', '\u{0E25}', '\u{0E2C}', '\u{0E27}',
        '\u{0E28}', '\u{0E29}', '\u{0E2A}', '\u{0E2B}',
    ],
    digits: [
        '\u{0E50}', '\u{0E51}', '\u{0E52}', '\u{0E53}', '\u{0E54}',
        '\u{0E55}', '\u{0E56}', '\u{0E57}', '\u{0E58}', '\u{0E59}',
    ],
    signs: ['\u{0E4D}', '\u{0E30}', '\u{2019}', '\u{0E3A}', '\u{0E2F}', '\u{0E5A}', '.'],
};

static KHMER_DATA: TableData = TableData {
    independent: [
        "\u{17A2}", "\u{17A2}\u{17B6}", "\u{17A5}", "\u{17A6}", "\u{17A7}", "\u{17A9}",
        "\u{17AB}", "\u{17AC}", "\u{17AD}", "\u{17AE}", "\u{17AF}", "\u{17B0}", "\u{17B1}",
        "\u{17B3}",
    ],
    dependent: [
        "\u{17A2}", "\u{17B6}", "\u{17B7}", "\u{17B8}", "\u{17BB}", "\u{17BC}",
        "\u{17D2}\u{17AB}", "\u{17D2}\u{17AC}", "\u{17D2}\u{17AD}", "\u{17D2}\u{17AE}",
        "\u{17C1}", "\u{17C3}", "\u{17C4}", "\u{17C5}",
    ],
    consonants: [
        '\u{1780}', '\u{1781}', '\u{1782}', '\u{1783}', '\u{1784}',
        '\u{1785}', '\u{1786}', '\u{1787}', '\u{1788}', '\u{1789}',
        '\u{178A}', '\u{178B}', '\u{178C}', '\u{178D}', '\u{178E}',
        '\u{178F}', '\u{1790}', '\u{1791}', '\u{1792}', '\u{1793}',
        '\u{1794}', '\u{1795}', '\u{1796}', '\u{1797}', '\u{1798}',
        '\u{1799}', '\u{179A}', '\u{179B}', '\u{17A1}', '\u{179C}',
        '\u{179D}', '\u{179E}', '\u{179F}', '\u{17A0}',
    ],
    digits: [
        '\u{17E0}', '\u{17E1}', '\u{17E2}', '\u{17E3}', '\u{17E4}',
        '\u{17E5}', '\u{17E6}', '\u{17E7}', '\u{17E8}', '\u{17E9}',
    ],
    signs: ['\u{17C6}', '\u{17C7}', '\u{2019}', '\u{17D2}', '\u{17D4}', '\u{17D5}', '.'],
};

static MYANMAR_DATA: TableData = TableData {
    independent: [
        "\u{1021}", "\u{1021}\u{102C}", "\u{1023}", "\u{1024}", "\u{1025}", "\u{1026}",
        "\u{1052}", "\u{1053}", "\u{1054}", "\u{1055}", "\u{1027}", "\u{1021}\u{1032}",
        "\u{1029}", "\u{102A}",
    ],
    dependent: [
        "\u{1021}", "\u{102C}", "\u{102D}", "\u{102E}", "\u{102F}", "\u{1030}", "\u{1056}",
        "\u{1057}", "\u{1058}", "\u{1059}", "\u{1031}", "\u{1032}", "\u{1031}\u{102C}",
        "\u{1031}\u{102C}\u{103A}",
    ],
    consonants: [
        '\u{1000}', '\u{1001}', '\u{1002}', '\u{1003}', '\u{1004}',
        '\u{1005}', '\u{1006}', '\u{1007}', '\u{1008}', '\u{1009}',
        '\u{100B}', '\u{100C}', '\u{100D}', '\u{100E}', '\u{100F}',
        '\u{1010}', '\u{1011}', '\u{1012}', '\u{1013}', '\u{1014}',
        '\u{1015}', '\u{1016}', '\u{1017}', '\u{1018}', '\u{1019}',
        '\u{101A}', '\u{101B}', '\u{101C}', '\u{1020}', '\u{101D}',
        '\u{1050}', '\u{1051}', '\u{101E}', '\u{101F}',
    ],
    digits: [
        '\u{1040}', '\u{1041}', '\u{1042}', '\u{1043}', '\u{1044}',
        '\u{1045}', '\u{1046}', '\u{1047}', '\u{1048}', '\u{1049}',
    ],
    signs: ['\u{1036}', '\u{1038}', '\u{2019}', '\u{1039}', '\u{104A}', '\u{104B}', '.'],
};

static SINHALA_DATA: TableData = TableData {
    independent: [
        "\u{0D85}", "\u{0D86}", "\u{0D89}", "\u{0D8A}", "\u{0D8B}", "\u{0D8C}", "\u{0D8D}",
        "\u{0D8E}", "\u{0D8F}", "\u{0D90}", "\u{0D91}", "\u{0D93}", "\u{0D94}", "\u{0D96}",
    ],
    dependent: [
        "\u{0D85}", "\u{0DCF}", "\u{0DD2}", "\u{0DD3}", "\u{0DD4}", "\u{0DD6}", "\u{0DD8}",
        "\u{0DF2}", "\u{0DDF}", "\u{0DF3}", "\u{0DD9}", "\u{0DDB}", "\u{0DDC}", "\u{0DDE}",
    ],
    consonants: [
        '\u{0D9A}', '\u{0D9B}', '\u{0D9C}', '\u{0D9D}', '\u{0D9E}',
        '\u{0DA0}', '\u{0DA1}', '\u{0DA2}', '\u{0DA3}', '\u{0DA4}',
        '\u{0DA7}', '\u{0DA8}', '\u{0DA9}', '\u{0DAA}', '\u{0DAB}',
        '\u{0DAD}', '\u{0DAE}', '\u{0DAF}', '\u{0DB0}', '\u{0DB1}',
        '\u{0DB4}', '\u{0DB5}', '\u{0DB6}', '\u{0DB7}', '\u{0DB8}',
        '\u{0DBA}', '\u{0DBB}', '\u{0DBD}', '\u{0DC5}', '\u{0DC0}',
        '\u{0DC1}', '\u{0DC2}', '\u{0DC3}', '\u{0DC4}',
    ],
    // Sinhala text uses European digits
    digits: ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
    signs: ['\u{0D82}', '\u{0D83}', '\u{2019}', '\u{0DCA}', '.', '.', '.'],
};

/// Which vowel form a matched sequence stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VowelForm {
    Independent,
    Dependent,
    /// The same sequence spells both forms (Thai `ฤ`); context decides.
    Either,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelMatch {
    pub slot: usize,
    pub form: VowelForm,
    /// Number of chars consumed.
    pub len: usize,
}

#[derive(Debug)]
struct VowelPattern {
    chars: Vec<char>,
    slot: usize,
    form: VowelForm,
}

/// Typed view of one script's letters with reverse lookups built once.
#[derive(Debug)]
pub struct CharacterTable {
    script: Script,
    data: &'static TableData,
    // Longest first, so the first hit is the longest match
    vowel_patterns: Vec<VowelPattern>,
    independent_lookup: FxHashMap<char, usize>,
    dependent_lookup: FxHashMap<char, usize>,
    consonant_lookup: FxHashMap<char, usize>,
    digit_lookup: FxHashMap<char, usize>,
    sign_lookup: FxHashMap<char, Sign>,
}

impl std::fmt::Debug for TableData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableData").finish_non_exhaustive()
    }
}

impl CharacterTable {
    /// Table for an Indic script; `None` for Roman and Unknown.
    pub fn for_script(script: Script) -> Option<&'static CharacterTable> {
        static THAI: OnceLock<CharacterTable> = OnceLock::new();
        static KHMER: OnceLock<CharacterTable> = OnceLock::new();
        static MYANMAR: OnceLock<CharacterTable> = OnceLock::new();
        static SINHALA: OnceLock<CharacterTable> = OnceLock::new();

        let (cell, data) = match script {
            Script::Devanagari => return Some(Self::devanagari()),
            Script::Thai => (&THAI, &THAI_DATA),
            Script::Khmer => (&KHMER, &KHMER_DATA),
            Script::Myanmar => (&MYANMAR, &MYANMAR_DATA),
            Script::Sinhala => (&SINHALA, &SINHALA_DATA),
            Script::Roman | Script::Unknown => return None,
        };
        Some(cell.get_or_init(|| Self::build(script, data)))
    }

    /// The pivot table.
    pub fn devanagari() -> &'static CharacterTable {
        static DEVANAGARI: OnceLock<CharacterTable> = OnceLock::new();
        DEVANAGARI.get_or_init(|| Self::build(Script::Devanagari, &DEVANAGARI_DATA))
    }

    fn build(script: Script, data: &'static TableData) -> Self {
        let mut vowel_patterns: Vec<VowelPattern> = Vec::with_capacity(VOWEL_COUNT * 2);
        let mut independent_lookup = FxHashMap::default();
        let mut dependent_lookup = FxHashMap::default();

        for (slot, s) in data.independent.iter().enumerate() {
            vowel_patterns.push(VowelPattern {
                chars: s.chars().collect(),
                slot,
                form: VowelForm::Independent,
            });
            if let Some(c) = single_char(s) {
                independent_lookup.entry(c).or_insert(slot);
            }
        }

        for (slot, s) in data.dependent.iter().enumerate().skip(1) {
            let chars: Vec<char> = s.chars().collect();
            if let Some(existing) = vowel_patterns
                .iter_mut()
                .find(|p| p.slot == slot && p.chars == chars)
            {
                existing.form = VowelForm::Either;
            } else {
                vowel_patterns.push(VowelPattern {
                    chars,
                    slot,
                    form: VowelForm::Dependent,
                });
            }
            if let Some(c) = single_char(s) {
                dependent_lookup.entry(c).or_insert(slot);
            }
        }

        // Stable: equal lengths keep slot order
        vowel_patterns.sort_by(|a, b| b.chars.len().cmp(&a.chars.len()));

        let consonant_lookup = data
            .consonants
            .iter()
            .enumerate()
            .map(|(slot, &c)| (c, slot))
            .collect();
        let digit_lookup = data
            .digits
            .iter()
            .enumerate()
            .map(|(value, &c)| (c, value))
            .collect();

        // Only signs from the script's own block are recognised on input;
        // borrowed punctuation ('.', ’) stays literal.
        let mut sign_lookup = FxHashMap::default();
        for (sign, &c) in Sign::ALL.iter().zip(data.signs.iter()) {
            if script.owns(c) {
                sign_lookup.entry(c).or_insert(*sign);
            }
        }

        CharacterTable {
            script,
            data,
            vowel_patterns,
            independent_lookup,
            dependent_lookup,
            consonant_lookup,
            digit_lookup,
            sign_lookup,
        }
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn independent(&self, slot: usize) -> &'static str {
        self.data.independent[slot]
    }

    pub fn dependent(&self, slot: usize) -> &'static str {
        self.data.dependent[slot]
    }

    pub fn consonant(&self, slot: usize) -> char {
        self.data.consonants[slot]
    }

    pub fn digit(&self, value: usize) -> char {
        self.data.digits[value]
    }

    pub fn sign(&self, sign: Sign) -> char {
        self.data.signs[sign as usize]
    }

    /// Slot of a single-char independent vowel.
    pub fn independent_slot(&self, c: char) -> Option<usize> {
        self.independent_lookup.get(&c).copied()
    }

    /// Slot of a single-char dependent vowel sign. Never slot 0.
    pub fn dependent_slot(&self, c: char) -> Option<usize> {
        self.dependent_lookup.get(&c).copied()
    }

    pub fn consonant_slot(&self, c: char) -> Option<usize> {
        self.consonant_lookup.get(&c).copied()
    }

    #[inline]
    pub fn is_consonant(&self, c: char) -> bool {
        self.consonant_lookup.contains_key(&c)
    }

    pub fn digit_value(&self, c: char) -> Option<usize> {
        self.digit_lookup.get(&c).copied()
    }

    /// Sign spelled by `c`, if `c` belongs to this script's block.
    pub fn sign_of(&self, c: char) -> Option<Sign> {
        self.sign_lookup.get(&c).copied()
    }

    /// Longest vowel spelling starting at `pos`.
    pub fn match_vowel(&self, chars: &[char], pos: usize) -> Option<VowelMatch> {
        let rest = chars.get(pos..)?;
        self.vowel_patterns
            .iter()
            .find(|p| rest.starts_with(&p.chars))
            .map(|p| VowelMatch {
                slot: p.slot,
                form: p.form,
                len: p.chars.len(),
            })
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(script: Script) -> &'static CharacterTable {
        CharacterTable::for_script(script).unwrap()
    }

    #[test]
    fn roman_and_unknown_have_no_table() {
        assert!(CharacterTable::for_script(Script::Roman).is_none());
        assert!(CharacterTable::for_script(Script::Unknown).is_none());
    }

    #[test]
    fn tables_are_memoized() {
        let a = table(Script::Khmer) as *const CharacterTable;
        let b = table(Script::Khmer) as *const CharacterTable;
        assert_eq!(a, b);
        assert!(std::ptr::eq(
            table(Script::Devanagari),
            CharacterTable::devanagari()
        ));
    }

    #[test]
    fn slots_line_up_across_scripts() {
        // Slot 28 is the retroflex lateral ḻa
        assert_eq!(table(Script::Devanagari).consonant(28), '\u{0933}');
        assert_eq!(table(Script::Khmer).consonant(28), '\u{17A1}');
        assert_eq!(table(Script::Thai).consonant(28), '\u{0E2C}');
        assert_eq!(table(Script::Sinhala).consonant(28), '\u{0DC5}');
        assert_eq!(table(Script::Myanmar).consonant(28), '\u{1020}');
    }

    #[test]
    fn every_script_has_distinct_consonants() {
        for script in Script::ALL.into_iter().skip(1) {
            let t = table(script);
            for slot in 0..CONSONANT_COUNT {
                assert_eq!(t.consonant_slot(t.consonant(slot)), Some(slot), "{script} slot {slot}");
            }
        }
    }

    #[test]
    fn dependent_lookup_skips_inherent_vowel() {
        let deva = CharacterTable::devanagari();
        assert_eq!(deva.independent_slot('\u{0905}'), Some(0));
        assert_eq!(deva.dependent_slot('\u{0905}'), None);
        assert_eq!(deva.dependent_slot('\u{093E}'), Some(1));
    }

    #[test]
    fn borrowed_punctuation_is_not_a_sign() {
        let thai = table(Script::Thai);
        assert_eq!(thai.sign_of('\u{0E3A}'), Some(Sign::Virama));
        assert_eq!(thai.sign_of('.'), None);
        assert_eq!(thai.sign_of('\u{2019}'), None);
        assert_eq!(table(Script::Sinhala).sign_of('.'), None);
    }

    #[test]
    fn vowel_match_prefers_longest() {
        let myanmar = table(Script::Myanmar);
        let text: Vec<char> = "\u{1031}\u{102C}\u{103A}".chars().collect();
        let m = myanmar.match_vowel(&text, 0).unwrap();
        assert_eq!((m.slot, m.len, m.form), (13, 3, VowelForm::Dependent));

        let text: Vec<char> = "\u{1031}\u{102C}".chars().collect();
        assert_eq!(myanmar.match_vowel(&text, 0).unwrap().slot, 12);

        let text: Vec<char> = "\u{1021}\u{102C}".chars().collect();
        let m = myanmar.match_vowel(&text, 0).unwrap();
        assert_eq!((m.slot, m.form), (1, VowelForm::Independent));
    }

    #[test]
    fn shared_spelling_is_ambiguous() {
        let thai = table(Script::Thai);
        let text: Vec<char> = "\u{0E24}".chars().collect();
        let m = thai.match_vowel(&text, 0).unwrap();
        assert_eq!((m.slot, m.form), (6, VowelForm::Either));
    }

    #[test]
    fn sinhala_digits_are_ascii() {
        assert_eq!(table(Script::Sinhala).digit_value('7'), Some(7));
        assert_eq!(table(Script::Thai).digit(3), '\u{0E53}');
    }
}
