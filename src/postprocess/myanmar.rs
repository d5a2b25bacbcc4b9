//! Myanmar orthography: asat for silent finals, tall AA after round
//! letters, kinzi, the great nya and great sa ligatures and medial signs.

use std::sync::OnceLock;

use fxhash::FxHashMap;

use super::{is_consonant_of, Pass};
use crate::constants::*;
use crate::script::Script;

pub const FORWARD: &[Pass] = &[
    Pass { name: "myanmar-virama-to-asat", run: virama_to_asat },
    Pass { name: "myanmar-tall-aa", run: tall_aa },
    Pass { name: "myanmar-short-aa-exceptions", run: short_aa_exceptions },
    Pass { name: "myanmar-kinzi", run: kinzi },
    Pass { name: "myanmar-great-nya", run: great_nya },
    Pass { name: "myanmar-great-sa", run: great_sa },
    Pass { name: "myanmar-medials", run: medials },
];

// Order matters: kinzi must be undone before asat turns back into virama
pub const REVERSE: &[Pass] = &[
    Pass { name: "myanmar-unkinzi", run: unkinzi },
    Pass { name: "myanmar-split-great-nya", run: split_great_nya },
    Pass { name: "myanmar-split-great-sa", run: split_great_sa },
    Pass { name: "myanmar-unstack-medials", run: unstack_medials },
    Pass { name: "myanmar-tall-aa-to-short", run: tall_aa_to_short },
    Pass { name: "myanmar-asat-to-virama", run: asat_to_virama },
];

// Stems (with and without a preceding e sign) after which AA is written tall.
// Longer stacks first.
const TALL_AA_STEMS: &[&str] = &[
    "\u{1004}\u{1039}\u{1001}",
    "\u{1004}\u{1039}\u{1001}\u{1031}",
    "\u{1004}\u{1039}\u{1002}",
    "\u{1004}\u{1039}\u{1002}\u{1031}",
    "\u{1004}\u{1039}\u{1004}",
    "\u{1004}\u{1039}\u{1004}\u{1031}",
    "\u{1012}\u{1039}\u{1012}",
    "\u{1012}\u{1039}\u{1012}\u{1031}",
    "\u{1012}\u{1039}\u{1013}",
    "\u{1012}\u{1039}\u{1013}\u{1031}",
    "\u{1012}\u{1039}\u{1019}",
    "\u{1012}\u{1039}\u{1019}\u{1031}",
    "\u{1012}\u{1039}\u{101D}",
    "\u{1012}\u{1039}\u{101D}\u{1031}",
    "\u{1001}",
    "\u{1001}\u{1031}",
    "\u{1002}",
    "\u{1002}\u{1031}",
    "\u{1004}",
    "\u{1004}\u{1031}",
    "\u{1012}",
    "\u{1012}\u{1031}",
    "\u{1015}",
    "\u{1015}\u{1031}",
    "\u{101D}",
    "\u{101D}\u{1031}",
];

// Stacks whose lower letter is round but which keep the short AA
const SHORT_AA_STEMS: &[&str] = &[
    "\u{1000}\u{1039}\u{1001}",
    "\u{1002}\u{1039}\u{1002}",
    "\u{1015}\u{1039}\u{1015}",
    "\u{1019}\u{1039}\u{1015}",
    "\u{1039}\u{101D}",
];

struct AaRewrites {
    to_tall: Vec<(String, String)>,
    to_short: Vec<(String, String)>,
}

fn aa_rewrites() -> &'static AaRewrites {
    static REWRITES: OnceLock<AaRewrites> = OnceLock::new();
    REWRITES.get_or_init(|| {
        let pair = |stem: &&str, from: char, to: char| (format!("{stem}{from}"), format!("{stem}{to}"));
        AaRewrites {
            to_tall: TALL_AA_STEMS
                .iter()
                .map(|s| pair(s, MYANMAR_SHORT_AA, MYANMAR_TALL_AA))
                .collect(),
            to_short: SHORT_AA_STEMS
                .iter()
                .map(|s| pair(s, MYANMAR_TALL_AA, MYANMAR_SHORT_AA))
                .collect(),
        }
    })
}

fn medial_maps() -> &'static (FxHashMap<char, char>, FxHashMap<char, char>) {
    static MAPS: OnceLock<(FxHashMap<char, char>, FxHashMap<char, char>)> = OnceLock::new();
    MAPS.get_or_init(|| {
        let stacked = MYANMAR_MEDIALS.iter().copied().collect();
        let unstacked = MYANMAR_MEDIALS.iter().map(|&(c, m)| (m, c)).collect();
        (stacked, unstacked)
    })
}

fn replace_all(text: &str, rewrites: &[(String, String)]) -> String {
    rewrites.iter().fold(text.to_string(), |acc, (from, to)| {
        if acc.contains(from.as_str()) {
            acc.replace(from.as_str(), to)
        } else {
            acc
        }
    })
}

/// A virama that stacks nothing is the visible asat.
fn virama_to_asat(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| match chars.get(i + 1) {
            _ if c != MYANMAR_VIRAMA => c,
            Some(&next) if is_consonant_of(Script::Myanmar, next) => c,
            _ => MYANMAR_ASAT,
        })
        .collect()
}

fn tall_aa(text: &str) -> String {
    replace_all(text, &aa_rewrites().to_tall)
}

fn short_aa_exceptions(text: &str) -> String {
    replace_all(text, &aa_rewrites().to_short)
}

/// Stacked nga takes the kinzi asat, unless the lower letter is about to
/// become a medial sign.
fn kinzi(text: &str) -> String {
    let (stacked, _) = medial_maps();
    let chars: Vec<char> = text.chars().collect();
    let mut output = String::with_capacity(text.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        output.push(c);
        let over_medial = chars.get(i + 2).map_or(false, |lower| stacked.contains_key(lower));
        if c == MYANMAR_NGA && chars.get(i + 1) == Some(&MYANMAR_VIRAMA) && !over_medial {
            output.push(MYANMAR_ASAT);
        }
    }
    output
}

fn great_nya(text: &str) -> String {
    text.replace(
        &format!("{MYANMAR_NYA}{MYANMAR_VIRAMA}{MYANMAR_NYA}"),
        &MYANMAR_GREAT_NYA.to_string(),
    )
}

fn great_sa(text: &str) -> String {
    text.replace(
        &format!("{MYANMAR_SA}{MYANMAR_VIRAMA}{MYANMAR_SA}"),
        &MYANMAR_GREAT_SA.to_string(),
    )
}

/// Stacked ya, ra, va and ha are written as medial signs.
fn medials(text: &str) -> String {
    let (stacked, _) = medial_maps();
    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == MYANMAR_VIRAMA {
            if let Some(&medial) = chars.peek().and_then(|next| stacked.get(next)) {
                output.push(medial);
                chars.next();
                continue;
            }
        }
        output.push(c);
    }
    output
}

fn unkinzi(text: &str) -> String {
    text.replace(
        &format!("{MYANMAR_NGA}{MYANMAR_ASAT}{MYANMAR_VIRAMA}"),
        &format!("{MYANMAR_NGA}{MYANMAR_VIRAMA}"),
    )
}

fn split_great_nya(text: &str) -> String {
    text.replace(
        MYANMAR_GREAT_NYA,
        &format!("{MYANMAR_NYA}{MYANMAR_VIRAMA}{MYANMAR_NYA}"),
    )
}

fn split_great_sa(text: &str) -> String {
    text.replace(
        MYANMAR_GREAT_SA,
        &format!("{MYANMAR_SA}{MYANMAR_VIRAMA}{MYANMAR_SA}"),
    )
}

fn unstack_medials(text: &str) -> String {
    let (_, unstacked) = medial_maps();
    let mut output = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match unstacked.get(&c) {
            Some(&consonant) => {
                output.push(MYANMAR_VIRAMA);
                output.push(consonant);
            }
            None => output.push(c),
        }
    }
    output
}

fn tall_aa_to_short(text: &str) -> String {
    text.replace(MYANMAR_TALL_AA, &MYANMAR_SHORT_AA.to_string())
}

/// Asat back to virama, except the asat that is part of the au sign.
fn asat_to_virama(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let closes_au = i >= 2 && chars[i - 2] == MYANMAR_VOWEL_E && chars[i - 1] == MYANMAR_SHORT_AA;
            if c == MYANMAR_ASAT && !closes_au {
                MYANMAR_VIRAMA
            } else {
                c
            }
        })
        .collect()
}
