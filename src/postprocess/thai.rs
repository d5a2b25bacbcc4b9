//! Thai writes e, o and ai before the consonant they follow in speech.

use std::sync::OnceLock;

use regex::Regex;

use super::Pass;
use crate::constants::*;

pub const FORWARD: &[Pass] = &[
    Pass { name: "thai-place-sara-e", run: place_sara_e },
    Pass { name: "thai-place-sara-o", run: place_sara_o },
    Pass { name: "thai-place-sara-ai", run: place_sara_ai },
];

pub const REVERSE: &[Pass] = &[
    Pass { name: "thai-restore-sara-e", run: restore_sara_e },
    Pass { name: "thai-restore-sara-o", run: restore_sara_o },
    Pass { name: "thai-restore-sara-ai", run: restore_sara_ai },
    Pass { name: "thai-split-sara-ue", run: split_sara_ue },
    Pass { name: "thai-legacy-glyphs", run: replace_legacy_glyphs },
];

const LEADING_VOWELS: [char; 3] = [THAI_SARA_E, THAI_SARA_O, THAI_SARA_AI];

struct Reorder {
    // Any char followed by the vowel
    trailing: Regex,
    // The vowel followed by any char
    leading: Regex,
}

fn reorders() -> &'static [Reorder; 3] {
    static REORDERS: OnceLock<[Reorder; 3]> = OnceLock::new();
    REORDERS.get_or_init(|| {
        LEADING_VOWELS.map(|vowel| Reorder {
            trailing: Regex::new(&format!("(.)({vowel})")).expect("Thai reorder pattern must be valid"),
            leading: Regex::new(&format!("({vowel})(.)")).expect("Thai reorder pattern must be valid"),
        })
    })
}

fn swap(pattern: &Regex, text: &str) -> String {
    pattern.replace_all(text, "${2}${1}").into_owned()
}

fn place_sara_e(text: &str) -> String {
    swap(&reorders()[0].trailing, text)
}

fn place_sara_o(text: &str) -> String {
    swap(&reorders()[1].trailing, text)
}

fn place_sara_ai(text: &str) -> String {
    swap(&reorders()[2].trailing, text)
}

fn restore_sara_e(text: &str) -> String {
    swap(&reorders()[0].leading, text)
}

fn restore_sara_o(text: &str) -> String {
    swap(&reorders()[1].leading, text)
}

fn restore_sara_ai(text: &str) -> String {
    swap(&reorders()[2].leading, text)
}

/// Sara ue is read as sara i plus nikkhahit (iṃ).
fn split_sara_ue(text: &str) -> String {
    if !text.contains(THAI_SARA_UE) {
        return text.to_string();
    }
    text.replace(THAI_SARA_UE, &format!("{THAI_SARA_I}{THAI_NIKKHAHIT}"))
}

fn replace_legacy_glyphs(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            THAI_ALT_YO_YING => THAI_YO_YING,
            THAI_ALT_THO_THAN => THAI_THO_THAN,
            _ => c,
        })
        .collect()
}
