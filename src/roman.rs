//! Conversion between Roman display styles and canonical ("Unique") Roman.
//!
//! Canonical Roman spells every letter with exactly one character sequence:
//! `ḻ` for the retroflex lateral, `ē`/`ō` for the diphthongs ai/au, `ṃ` for
//! niggahita. Display styles are ordered literal rewrites of that form.

use crate::script::RomanStyle;

/// One literal substitution. Rules run in list order, each over the whole text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rewrite {
    pub from: &'static str,
    pub to: &'static str,
}

const fn rw(from: &'static str, to: &'static str) -> Rewrite {
    Rewrite { from, to }
}

// Diphthong spellings: a separated a'i / a'u keeps two vowels apart once
// the canonical ē / ō become ai / au.
const SPLIT_DIPHTHONGS: [Rewrite; 4] = [
    rw("ai", "a'i"),
    rw("au", "a'u"),
    rw("ē", "ai"),
    rw("ō", "au"),
];

const PLAIN_PUNCTUATION: [Rewrite; 3] = [rw("|", "."), rw("\u{2016}", "."), rw("\u{00B7}", ".")];

pub const ISO_RULES: &[Rewrite] = &[
    SPLIT_DIPHTHONGS[0],
    SPLIT_DIPHTHONGS[1],
    SPLIT_DIPHTHONGS[2],
    SPLIT_DIPHTHONGS[3],
    rw("e", "ē"),
    rw("o", "ō"),
    rw("ṃ", "ṁ"),
    rw("ṛ", "r\u{0325}"),
    rw("ḷ", "l\u{0325}"),
    rw("ṝ", "r\u{0325}\u{0304}"),
    rw("ḹ", "l\u{0325}\u{0304}"),
    rw("ḻ", "ḷ"),
    PLAIN_PUNCTUATION[0],
    PLAIN_PUNCTUATION[1],
    PLAIN_PUNCTUATION[2],
];

pub const IAST_RULES: &[Rewrite] = &[
    SPLIT_DIPHTHONGS[0],
    SPLIT_DIPHTHONGS[1],
    SPLIT_DIPHTHONGS[2],
    SPLIT_DIPHTHONGS[3],
    PLAIN_PUNCTUATION[0],
    PLAIN_PUNCTUATION[1],
    PLAIN_PUNCTUATION[2],
];

// Lossy: ḻ and ḷ merge
pub const PALI_COMMON_RULES: &[Rewrite] = &[
    rw("ḻ", "ḷ"),
    SPLIT_DIPHTHONGS[0],
    SPLIT_DIPHTHONGS[1],
    SPLIT_DIPHTHONGS[2],
    SPLIT_DIPHTHONGS[3],
    rw("\u{0315}", "\u{2019}"),
    PLAIN_PUNCTUATION[0],
    PLAIN_PUNCTUATION[1],
    PLAIN_PUNCTUATION[2],
];

// Lossy: vocalic ḷ becomes ŀ so the lateral can take ḷ
pub const LEAST_CONTAMINATION_RULES: &[Rewrite] = &[rw("ḷ", "ŀ"), rw("ḻ", "ḷ")];

// Pali has no diphthongs: ē/ō are long e/o and ai/au two vowels each
const PALI_MODE: &[Rewrite] = &[rw("ḷ", "ḻ"), rw("ē", "e"), rw("ō", "o")];

const SANSKRIT_MODE: &[Rewrite] = &[rw("ē", "e"), rw("ō", "o"), rw("ai", "ē"), rw("au", "ō")];

// Runs after the mode rules, so a separated a'i never reads as the diphthong
const CANONICAL_RULES: &[Rewrite] = &[
    rw("ŀ", "ḷ"),
    rw("a'i", "ai"),
    rw("a'u", "au"),
    rw("ṁ", "ṃ"),
    // Two-mark sequences before their one-mark prefixes
    rw("r\u{0325}\u{0304}", "ṝ"),
    rw("l\u{0325}\u{0304}", "ḹ"),
    rw("r\u{0325}", "ṛ"),
    rw("l\u{0325}", "ḷ"),
];

pub fn rules_for(style: RomanStyle) -> &'static [Rewrite] {
    match style {
        RomanStyle::Iso => ISO_RULES,
        RomanStyle::Iast => IAST_RULES,
        RomanStyle::PaliCommon => PALI_COMMON_RULES,
        RomanStyle::LeastContamination => LEAST_CONTAMINATION_RULES,
        RomanStyle::Unique => &[],
    }
}

pub fn apply_rules(text: &str, rules: &[Rewrite]) -> String {
    rules.iter().fold(text.to_string(), |acc, rule| {
        if acc.contains(rule.from) {
            acc.replace(rule.from, rule.to)
        } else {
            acc
        }
    })
}

/// Bring Roman text in any supported style to canonical form.
///
/// In both modes `ē`/`ō` are long e/o and `a'i`/`a'u` are two vowels.
/// In Pali mode a bare `ḷ` is the retroflex lateral and becomes `ḻ`; in
/// Sanskrit mode the digraphs ai/au are the diphthongs.
pub fn to_canonical(text: &str, sanskrit: bool) -> String {
    let mode = if sanskrit { SANSKRIT_MODE } else { PALI_MODE };
    let text = apply_rules(text, mode);
    apply_rules(&text, CANONICAL_RULES)
}

/// Render canonical Roman in a display style.
pub fn to_style(text: &str, style: RomanStyle) -> String {
    apply_rules(text, rules_for(style))
}
