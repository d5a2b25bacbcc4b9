//! Script-specific fix-ups around the slot-for-slot pivot conversion.
//!
//! Forward passes run after Devanagari → script and turn the mechanical
//! output into conventional spelling. Reverse passes run before script →
//! Devanagari and undo them, so the table lookup sees logical order.

use tracing::trace;

use crate::script::Script;
use crate::table::CharacterTable;

pub mod khmer;
pub mod myanmar;
pub mod thai;

/// A named rewrite over the whole text.
#[derive(Clone, Copy)]
pub struct Pass {
    pub name: &'static str,
    pub run: fn(&str) -> String,
}

impl std::fmt::Debug for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Pass").field(&self.name).finish()
    }
}

/// Passes applied after converting Devanagari into `script`.
pub fn forward_passes(script: Script) -> &'static [Pass] {
    match script {
        Script::Thai => thai::FORWARD,
        Script::Khmer => khmer::FORWARD,
        Script::Myanmar => myanmar::FORWARD,
        _ => &[],
    }
}

/// Passes applied before converting `script` into Devanagari.
pub fn reverse_passes(script: Script) -> &'static [Pass] {
    match script {
        Script::Thai => thai::REVERSE,
        Script::Khmer => khmer::REVERSE,
        Script::Myanmar => myanmar::REVERSE,
        _ => &[],
    }
}

pub fn run_passes(passes: &[Pass], text: &str) -> String {
    let mut text = text.to_string();
    for pass in passes {
        text = (pass.run)(&text);
        trace!(pass = pass.name, len = text.len(), "post-processing pass applied");
    }
    text
}

/// Forward passes for `script`.
pub fn finalize(text: &str, script: Script) -> String {
    run_passes(forward_passes(script), text)
}

/// Reverse passes for `script`.
pub fn normalize(text: &str, script: Script) -> String {
    run_passes(reverse_passes(script), text)
}

fn is_consonant_of(script: Script, c: char) -> bool {
    CharacterTable::for_script(script).map_or(false, |table| table.is_consonant(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_without_passes_are_untouched() {
        assert!(forward_passes(Script::Sinhala).is_empty());
        assert!(reverse_passes(Script::Devanagari).is_empty());
        assert_eq!(finalize("\u{0DB6}\u{0DD4}", Script::Sinhala), "\u{0DB6}\u{0DD4}");
    }

    #[test]
    fn pass_names_are_unique_per_list() {
        for script in Script::ALL {
            for passes in [forward_passes(script), reverse_passes(script)] {
                let mut names: Vec<_> = passes.iter().map(|p| p.name).collect();
                names.sort_unstable();
                names.dedup();
                assert_eq!(names.len(), passes.len(), "{script}");
            }
        }
    }
}
