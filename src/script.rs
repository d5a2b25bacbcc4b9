use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::TranslitError;

/// Writing systems the engine converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Roman,
    Devanagari,
    Thai,
    Khmer,
    Myanmar,
    Sinhala,
    Unknown,
}

impl Script {
    /// Every convertible script, in display order.
    pub const ALL: [Script; 6] = [
        Script::Roman,
        Script::Devanagari,
        Script::Thai,
        Script::Khmer,
        Script::Myanmar,
        Script::Sinhala,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Script::Roman => "Roman",
            Script::Devanagari => "Devanagari",
            Script::Thai => "Thai",
            Script::Khmer => "Khmer",
            Script::Myanmar => "Myanmar",
            Script::Sinhala => "Sinhala",
            Script::Unknown => "Unknown",
        }
    }

    /// Four-letter code used in stylesheet names (`tipitaka-latn.xsl`).
    pub fn code(self) -> &'static str {
        match self {
            Script::Roman => "latn",
            Script::Devanagari => "deva",
            Script::Thai => "thai",
            Script::Khmer => "khmr",
            Script::Myanmar => "mymr",
            Script::Sinhala => "sinh",
            Script::Unknown => "",
        }
    }

    /// Whether `c` lies in this script's Unicode block.
    pub(crate) fn owns(self, c: char) -> bool {
        match self {
            Script::Roman => is_roman_char(c),
            Script::Devanagari => is_devanagari_char(c),
            Script::Thai => is_thai_char(c),
            Script::Khmer => is_khmer_char(c),
            Script::Myanmar => is_myanmar_char(c),
            Script::Sinhala => is_sinhala_char(c),
            Script::Unknown => false,
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Script {
    type Err = TranslitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "roman" | "latn" => Ok(Script::Roman),
            "devanagari" | "deva" => Ok(Script::Devanagari),
            "thai" => Ok(Script::Thai),
            "khmer" | "khmr" => Ok(Script::Khmer),
            "myanmar" | "mymr" => Ok(Script::Myanmar),
            "sinhala" | "sinh" => Ok(Script::Sinhala),
            _ => Err(TranslitError::UnknownScript(s.to_string())),
        }
    }
}

/// Display conventions for Roman output.
///
/// `PaliCommon` and `LeastContamination` are lossy. Both write the lateral
/// `ḻ` as `ḷ`; Pali Common also keeps vocalic `ḷ`, so the two merge, and
/// Least Contamination text only reads back correctly in Pali mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RomanStyle {
    Iso,
    Iast,
    #[default]
    #[serde(alias = "common")]
    PaliCommon,
    #[serde(alias = "least")]
    LeastContamination,
    Unique,
}

impl RomanStyle {
    pub const ALL: [RomanStyle; 5] = [
        RomanStyle::Iso,
        RomanStyle::Iast,
        RomanStyle::PaliCommon,
        RomanStyle::LeastContamination,
        RomanStyle::Unique,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RomanStyle::Iso => "ISO 15919",
            RomanStyle::Iast => "IAST",
            RomanStyle::PaliCommon => "Pāli common",
            RomanStyle::LeastContamination => "Least contamination",
            RomanStyle::Unique => "Unique",
        }
    }
}

impl fmt::Display for RomanStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RomanStyle {
    type Err = TranslitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "iso" | "iso15919" => Ok(RomanStyle::Iso),
            "iast" => Ok(RomanStyle::Iast),
            "palicommon" | "common" | "pali" => Ok(RomanStyle::PaliCommon),
            "leastcontamination" | "least" => Ok(RomanStyle::LeastContamination),
            "unique" => Ok(RomanStyle::Unique),
            _ => Err(TranslitError::UnknownStyle(s.to_string())),
        }
    }
}

/// Number of leading characters inspected by [`detect_script`].
pub const DETECTION_SAMPLE: usize = 100;

/// Guess the script of `text` from its first [`DETECTION_SAMPLE`] characters.
///
/// A script wins when more than half of the sampled characters fall in its
/// block. Blank input counts as Roman; no majority gives `Unknown`.
pub fn detect_script(text: &str) -> Script {
    let sample: Vec<char> = text.trim().chars().take(DETECTION_SAMPLE).collect();
    if sample.is_empty() {
        return Script::Roman;
    }

    let threshold = sample.len() / 2;
    Script::ALL
        .into_iter()
        .find(|script| sample.iter().filter(|&&c| script.owns(c)).count() > threshold)
        .unwrap_or(Script::Unknown)
}
