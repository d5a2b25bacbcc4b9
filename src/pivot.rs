//! Character-level conversion to and from the Devanagari pivot.
//!
//! Every function here is total: characters outside the tables pass
//! through unchanged. `numerals` controls whether digits are mapped or
//! left in their source form.

use crate::constants::*;
use crate::table::{CharacterTable, Sign, VowelForm};

fn roman_sign(sign: Sign) -> Option<char> {
    match sign {
        Sign::Nasal => Some(ROMAN_NIGGAHITA),
        Sign::Aspiration => Some(ROMAN_VISARGA),
        Sign::Elision => Some(ROMAN_AVAGRAHA),
        Sign::Danda => Some(ROMAN_DANDA),
        Sign::DoubleDanda => Some(ROMAN_DOUBLE_DANDA),
        Sign::Abbreviation => Some(ROMAN_ABBREVIATION),
        Sign::Virama => None,
    }
}

fn sign_for_roman(c: char) -> Option<Sign> {
    match c {
        ROMAN_NIGGAHITA => Some(Sign::Nasal),
        ROMAN_VISARGA => Some(Sign::Aspiration),
        ROMAN_AVAGRAHA => Some(Sign::Elision),
        ROMAN_DANDA => Some(Sign::Danda),
        ROMAN_DOUBLE_DANDA => Some(Sign::DoubleDanda),
        ROMAN_ABBREVIATION => Some(Sign::Abbreviation),
        _ => None,
    }
}

/// Devanagari → canonical Roman.
///
/// A consonant carries an inherent `a` unless a virama or a dependent vowel
/// sign follows it.
pub fn devanagari_to_roman(text: &str, numerals: bool) -> String {
    let deva = CharacterTable::devanagari();
    let virama = deva.sign(Sign::Virama);
    let input: Vec<char> = text.chars().filter(|&c| !is_rendering_artifact(c)).collect();
    let mut output = String::with_capacity(text.len());

    let mut i = 0;
    while i < input.len() {
        let c = input[i];
        let mut consonant = false;

        if let Some(value) = deva.digit_value(c) {
            output.push(if numerals { ROMAN_DIGITS[value] } else { c });
        } else if let Some(slot) = deva.independent_slot(c).or_else(|| deva.dependent_slot(c)) {
            output.push(ROMAN_VOWELS[slot]);
        } else if let Some(slot) = deva.consonant_slot(c) {
            output.push_str(ROMAN_CONSONANTS[slot]);
            consonant = true;
        } else {
            // A virama not consumed by a consonant stays as it is
            output.push(deva.sign_of(c).and_then(roman_sign).unwrap_or(c));
        }

        match input.get(i + 1) {
            Some(&next) if consonant && next == virama => i += 1,
            Some(&next) if consonant && deva.dependent_slot(next).is_none() => output.push('a'),
            None if consonant => output.push('a'),
            _ => {}
        }
        i += 1;
    }

    output
}

/// Canonical Roman → Devanagari.
///
/// Input is lowercased first. A consonant not followed by a vowel gets a
/// virama, including at the end of the text.
pub fn roman_to_devanagari(text: &str, numerals: bool) -> String {
    let deva = CharacterTable::devanagari();
    let input: Vec<char> = text.to_lowercase().chars().collect();
    let mut output = String::with_capacity(text.len() * 3);

    let mut i = 0;
    while i < input.len() {
        let c = input[i];

        if let Some(slot) = roman_vowel_index(c) {
            let after_consonant = i > 0 && is_roman_consonant(input[i - 1]);
            if !after_consonant {
                output.push_str(deva.independent(slot));
            } else if slot > 0 {
                output.push_str(deva.dependent(slot));
            }
            i += 1;
            continue;
        }

        if let Some(slot) = roman_consonant_index(c) {
            let aspirated = ROMAN_ASPIRABLE.contains(c) && input.get(i + 1) == Some(&'h');
            let (slot, width) = if aspirated { (slot + 1, 2) } else { (slot, 1) };
            output.push(deva.consonant(slot));
            let vowel_follows = input
                .get(i + width)
                .map_or(false, |&next| roman_vowel_index(next).is_some());
            if !vowel_follows {
                output.push(deva.sign(Sign::Virama));
            }
            i += width;
            continue;
        }

        if let Some(value) = c.to_digit(10).filter(|_| numerals) {
            output.push(deva.digit(value as usize));
        } else if let Some(sign) = sign_for_roman(c) {
            output.push(deva.sign(sign));
        } else {
            output.push(c);
        }
        i += 1;
    }

    output
}

/// Devanagari → an Indic target, slot for slot. Script-specific fix-ups
/// happen afterwards in the post-processing passes.
pub fn devanagari_to_native(text: &str, target: &CharacterTable, numerals: bool) -> String {
    let deva = CharacterTable::devanagari();
    let mut output = String::with_capacity(text.len() * 2);

    for c in text.chars().filter(|&c| !is_rendering_artifact(c)) {
        if let Some(value) = deva.digit_value(c) {
            output.push(if numerals { target.digit(value) } else { c });
        } else if let Some(sign) = deva.sign_of(c) {
            output.push(target.sign(sign));
        } else if let Some(slot) = deva.independent_slot(c) {
            output.push_str(target.independent(slot));
        } else if let Some(slot) = deva.dependent_slot(c) {
            output.push_str(target.dependent(slot));
        } else if let Some(slot) = deva.consonant_slot(c) {
            output.push(target.consonant(slot));
        } else {
            output.push(c);
        }
    }

    output
}

/// An Indic source → Devanagari, matching the longest vowel spelling first.
///
/// The source must already be in logical order (see the reverse
/// post-processing passes). A sequence that spells both an independent and
/// a dependent vowel is read as dependent right after a consonant.
pub fn native_to_devanagari(text: &str, source: &CharacterTable, numerals: bool) -> String {
    let deva = CharacterTable::devanagari();
    let input: Vec<char> = text.chars().collect();
    let mut output = String::with_capacity(text.len() * 2);

    let mut i = 0;
    while i < input.len() {
        let c = input[i];

        if let Some(value) = source.digit_value(c) {
            output.push(if numerals { deva.digit(value) } else { c });
            i += 1;
            continue;
        }

        if let Some(m) = source.match_vowel(&input, i) {
            let dependent = match m.form {
                VowelForm::Independent => false,
                VowelForm::Dependent => true,
                VowelForm::Either => i > 0 && source.is_consonant(input[i - 1]),
            };
            output.push_str(if dependent {
                deva.dependent(m.slot)
            } else {
                deva.independent(m.slot)
            });
            i += m.len;
            continue;
        }

        if let Some(sign) = source.sign_of(c) {
            output.push(deva.sign(sign));
        } else if let Some(slot) = source.consonant_slot(c) {
            output.push(deva.consonant(slot));
        } else {
            output.push(c);
        }
        i += 1;
    }

    output
}
