//! Khmer stacks consonants with coeng; a silent final consonant takes the
//! killer sign instead.

use super::{is_consonant_of, Pass};
use crate::constants::*;
use crate::script::Script;

pub const FORWARD: &[Pass] = &[Pass { name: "khmer-coeng-to-killer", run: coeng_to_killer }];

pub const REVERSE: &[Pass] = &[Pass { name: "khmer-killer-to-coeng", run: killer_to_coeng }];

/// Coeng survives only before a consonant or a vocalic liquid.
fn coeng_to_killer(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if c != KHMER_COENG {
                return c;
            }
            match chars.get(i + 1) {
                Some(&next) if is_consonant_of(Script::Khmer, next) || is_khmer_vocalic_liquid(next) => c,
                _ => KHMER_KILLER,
            }
        })
        .collect()
}

fn killer_to_coeng(text: &str) -> String {
    text.chars()
        .map(|c| if c == KHMER_KILLER { KHMER_COENG } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacked_coeng_is_kept() {
        // ពុទ្ធ
        let text = "\u{1796}\u{17BB}\u{1791}\u{17D2}\u{1792}";
        assert_eq!(coeng_to_killer(text), text);
    }

    #[test]
    fn final_coeng_becomes_killer() {
        assert_eq!(
            coeng_to_killer("\u{179C}\u{17B6}\u{1780}\u{17D2}"),
            "\u{179C}\u{17B6}\u{1780}\u{17D1}"
        );
        assert_eq!(coeng_to_killer("\u{1780}\u{17D2} "), "\u{1780}\u{17D1} ");
    }

    #[test]
    fn coeng_before_vocalic_liquid_is_kept() {
        let text = "\u{1780}\u{17D2}\u{17AB}";
        assert_eq!(coeng_to_killer(text), text);
    }

    #[test]
    fn killer_reads_back_as_coeng() {
        assert_eq!(killer_to_coeng("\u{1780}\u{17D1}"), "\u{1780}\u{17D2}");
    }
}
