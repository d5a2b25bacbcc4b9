//! Conversion engines and the routes between scripts.
//!
//! An [`Engine`] is one direct conversion with a stable short code. A
//! [`Pipeline`] is the ordered list of [`Stage`]s that a request or engine
//! chain resolves to. Devanagari is the hub: any other pair goes through it.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use fxhash::FxHashMap;
use tracing::debug;

use crate::error::TranslitError;
use crate::pivot;
use crate::postprocess;
use crate::request::ConversionRequest;
use crate::roman;
use crate::script::{RomanStyle, Script};
use crate::table::CharacterTable;

/// One step of a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Any Roman style → canonical Roman.
    Canonicalize { sanskrit: bool },
    RomanToDevanagari,
    DevanagariToRoman,
    /// Canonical Roman → display style.
    Restyle(RomanStyle),
    DevanagariToNative(Script),
    /// Forward post-processing passes.
    Finalize(Script),
    /// Reverse post-processing passes.
    Normalize(Script),
    NativeToDevanagari(Script),
}

impl Stage {
    pub fn apply(&self, text: &str, numerals: bool) -> String {
        match *self {
            Stage::Canonicalize { sanskrit } => roman::to_canonical(text, sanskrit),
            Stage::RomanToDevanagari => pivot::roman_to_devanagari(text, numerals),
            Stage::DevanagariToRoman => pivot::devanagari_to_roman(text, numerals),
            Stage::Restyle(style) => roman::to_style(text, style),
            Stage::DevanagariToNative(script) => match CharacterTable::for_script(script) {
                Some(table) => pivot::devanagari_to_native(text, table, numerals),
                None => text.to_string(),
            },
            Stage::Finalize(script) => postprocess::finalize(text, script),
            Stage::Normalize(script) => postprocess::normalize(text, script),
            Stage::NativeToDevanagari(script) => match CharacterTable::for_script(script) {
                Some(table) => pivot::native_to_devanagari(text, table, numerals),
                None => text.to_string(),
            },
        }
    }
}

mod stages {
    use super::Stage::{self, *};
    use crate::script::{RomanStyle, Script};

    pub const DEVA_ROMAN_ISO: &[Stage] = &[DevanagariToRoman, Restyle(RomanStyle::Iso)];
    pub const DEVA_ROMAN_IAST: &[Stage] = &[DevanagariToRoman, Restyle(RomanStyle::Iast)];
    pub const DEVA_ROMAN_COMMON: &[Stage] = &[DevanagariToRoman, Restyle(RomanStyle::PaliCommon)];
    pub const DEVA_ROMAN_LEAST: &[Stage] = &[DevanagariToRoman, Restyle(RomanStyle::LeastContamination)];
    pub const DEVA_ROMAN_UNIQUE: &[Stage] = &[DevanagariToRoman];
    pub const DEVA_THAI: &[Stage] = &[DevanagariToNative(Script::Thai), Finalize(Script::Thai)];
    pub const DEVA_KHMER: &[Stage] = &[DevanagariToNative(Script::Khmer), Finalize(Script::Khmer)];
    pub const DEVA_SINHALA: &[Stage] = &[DevanagariToNative(Script::Sinhala)];
    pub const DEVA_MYANMAR: &[Stage] = &[DevanagariToNative(Script::Myanmar), Finalize(Script::Myanmar)];
    pub const ROMAN_SKT_DEVA: &[Stage] = &[Canonicalize { sanskrit: true }, RomanToDevanagari];
    pub const ROMAN_DEVA: &[Stage] = &[Canonicalize { sanskrit: false }, RomanToDevanagari];
    pub const THAI_DEVA: &[Stage] = &[Normalize(Script::Thai), NativeToDevanagari(Script::Thai)];
    pub const KHMER_DEVA: &[Stage] = &[Normalize(Script::Khmer), NativeToDevanagari(Script::Khmer)];
    pub const SINHALA_DEVA: &[Stage] = &[NativeToDevanagari(Script::Sinhala)];
    pub const MYANMAR_DEVA: &[Stage] = &[Normalize(Script::Myanmar), NativeToDevanagari(Script::Myanmar)];
}

/// Direct conversions, each with a stable short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engine {
    DevaRomanIso,
    DevaRomanIast,
    DevaRomanCommon,
    DevaRomanLeast,
    DevaRomanUnique,
    DevaThai,
    DevaKhmer,
    DevaSinhala,
    DevaMyanmar,
    RomanSktDeva,
    RomanDeva,
    ThaiDeva,
    KhmerDeva,
    SinhalaDeva,
    MyanmarDeva,
}

impl Engine {
    pub const ALL: [Engine; 15] = [
        Engine::DevaRomanIso,
        Engine::DevaRomanIast,
        Engine::DevaRomanCommon,
        Engine::DevaRomanLeast,
        Engine::DevaRomanUnique,
        Engine::DevaThai,
        Engine::DevaKhmer,
        Engine::DevaSinhala,
        Engine::DevaMyanmar,
        Engine::RomanSktDeva,
        Engine::RomanDeva,
        Engine::ThaiDeva,
        Engine::KhmerDeva,
        Engine::SinhalaDeva,
        Engine::MyanmarDeva,
    ];

    /// Stable two-letter code: source initial, then target initial.
    pub fn code(self) -> &'static str {
        match self {
            Engine::DevaRomanIso => "di",
            Engine::DevaRomanIast => "da",
            Engine::DevaRomanCommon => "dr",
            Engine::DevaRomanLeast => "dl",
            Engine::DevaRomanUnique => "du",
            Engine::DevaThai => "dt",
            Engine::DevaKhmer => "dk",
            Engine::DevaSinhala => "ds",
            Engine::DevaMyanmar => "dm",
            Engine::RomanSktDeva => "cd",
            Engine::RomanDeva => "rd",
            Engine::ThaiDeva => "td",
            Engine::KhmerDeva => "kd",
            Engine::SinhalaDeva => "sd",
            Engine::MyanmarDeva => "md",
        }
    }

    pub fn from_code(code: &str) -> Option<Engine> {
        static BY_CODE: OnceLock<FxHashMap<&'static str, Engine>> = OnceLock::new();
        BY_CODE
            .get_or_init(|| Engine::ALL.iter().map(|&e| (e.code(), e)).collect())
            .get(code)
            .copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Engine::DevaRomanIso => "D-R: ISO 15919",
            Engine::DevaRomanIast => "D-R: IAST",
            Engine::DevaRomanCommon => "D-R: Pāli Common",
            Engine::DevaRomanLeast => "D-R: Least Contamination",
            Engine::DevaRomanUnique => "D-R: Unique",
            Engine::DevaThai => "D-T: Thai",
            Engine::DevaKhmer => "D-K: Khmer",
            Engine::DevaSinhala => "D-S: Sinhala",
            Engine::DevaMyanmar => "D-M: Myanmar",
            Engine::RomanSktDeva => "R-D: Sanskrit",
            Engine::RomanDeva => "R-D: Pāli",
            Engine::ThaiDeva => "T-D: Thai",
            Engine::KhmerDeva => "K-D: Khmer",
            Engine::SinhalaDeva => "S-D: Sinhala",
            Engine::MyanmarDeva => "M-D: Myanmar",
        }
    }

    pub fn source(self) -> Script {
        match self {
            Engine::RomanSktDeva | Engine::RomanDeva => Script::Roman,
            Engine::ThaiDeva => Script::Thai,
            Engine::KhmerDeva => Script::Khmer,
            Engine::SinhalaDeva => Script::Sinhala,
            Engine::MyanmarDeva => Script::Myanmar,
            _ => Script::Devanagari,
        }
    }

    pub fn target(self) -> Script {
        match self {
            Engine::DevaRomanIso
            | Engine::DevaRomanIast
            | Engine::DevaRomanCommon
            | Engine::DevaRomanLeast
            | Engine::DevaRomanUnique => Script::Roman,
            Engine::DevaThai => Script::Thai,
            Engine::DevaKhmer => Script::Khmer,
            Engine::DevaSinhala => Script::Sinhala,
            Engine::DevaMyanmar => Script::Myanmar,
            _ => Script::Devanagari,
        }
    }

    pub fn stages(self) -> &'static [Stage] {
        match self {
            Engine::DevaRomanIso => stages::DEVA_ROMAN_ISO,
            Engine::DevaRomanIast => stages::DEVA_ROMAN_IAST,
            Engine::DevaRomanCommon => stages::DEVA_ROMAN_COMMON,
            Engine::DevaRomanLeast => stages::DEVA_ROMAN_LEAST,
            Engine::DevaRomanUnique => stages::DEVA_ROMAN_UNIQUE,
            Engine::DevaThai => stages::DEVA_THAI,
            Engine::DevaKhmer => stages::DEVA_KHMER,
            Engine::DevaSinhala => stages::DEVA_SINHALA,
            Engine::DevaMyanmar => stages::DEVA_MYANMAR,
            Engine::RomanSktDeva => stages::ROMAN_SKT_DEVA,
            Engine::RomanDeva => stages::ROMAN_DEVA,
            Engine::ThaiDeva => stages::THAI_DEVA,
            Engine::KhmerDeva => stages::KHMER_DEVA,
            Engine::SinhalaDeva => stages::SINHALA_DEVA,
            Engine::MyanmarDeva => stages::MYANMAR_DEVA,
        }
    }

    /// Devanagari → Roman engine for a display style.
    pub fn for_roman_style(style: RomanStyle) -> Engine {
        match style {
            RomanStyle::Iso => Engine::DevaRomanIso,
            RomanStyle::Iast => Engine::DevaRomanIast,
            RomanStyle::PaliCommon => Engine::DevaRomanCommon,
            RomanStyle::LeastContamination => Engine::DevaRomanLeast,
            RomanStyle::Unique => Engine::DevaRomanUnique,
        }
    }

    /// Engine converting `script` into Devanagari.
    pub fn to_devanagari(script: Script, sanskrit: bool) -> Option<Engine> {
        match script {
            Script::Roman if sanskrit => Some(Engine::RomanSktDeva),
            Script::Roman => Some(Engine::RomanDeva),
            Script::Thai => Some(Engine::ThaiDeva),
            Script::Khmer => Some(Engine::KhmerDeva),
            Script::Sinhala => Some(Engine::SinhalaDeva),
            Script::Myanmar => Some(Engine::MyanmarDeva),
            Script::Devanagari | Script::Unknown => None,
        }
    }

    /// Engine converting Devanagari into `script`.
    pub fn from_devanagari(script: Script, style: RomanStyle) -> Option<Engine> {
        match script {
            Script::Roman => Some(Engine::for_roman_style(style)),
            Script::Thai => Some(Engine::DevaThai),
            Script::Khmer => Some(Engine::DevaKhmer),
            Script::Sinhala => Some(Engine::DevaSinhala),
            Script::Myanmar => Some(Engine::DevaMyanmar),
            Script::Devanagari | Script::Unknown => None,
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = TranslitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Engine::from_code(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| TranslitError::UnknownEngine(s.to_string()))
    }
}

/// An ordered list of stages. Empty means the text passes through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn from_engines(engines: &[Engine]) -> Self {
        Pipeline {
            stages: engines.iter().flat_map(|e| e.stages().iter().copied()).collect(),
        }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn run(&self, text: &str, numerals: bool) -> String {
        let mut text = text.to_string();
        for stage in &self.stages {
            text = stage.apply(&text, numerals);
        }
        text
    }

    fn extend(&mut self, other: Pipeline) {
        self.stages.extend(other.stages);
    }
}

/// Resolve a request into the stages that carry it out.
///
/// Identical scripts pass through, except Roman → Roman which restyles.
/// Unknown scripts on either side give an empty pipeline.
pub fn route(request: &ConversionRequest) -> Pipeline {
    let pipeline = match request.via {
        Some(via) if via != request.source && via != request.target => {
            let mut first = ConversionRequest {
                target: via,
                via: None,
                ..*request
            };
            // The intermediate Roman text must stay canonical
            first.roman_style = RomanStyle::Unique;
            let second = ConversionRequest {
                source: via,
                via: None,
                ..*request
            };
            let mut second_leg = direct_route(&second);
            if via == Script::Roman {
                // Already canonical; canonicalizing again would reread it
                second_leg
                    .stages
                    .retain(|stage| !matches!(stage, Stage::Canonicalize { .. }));
            }
            let mut pipeline = direct_route(&first);
            pipeline.extend(second_leg);
            pipeline
        }
        _ => direct_route(request),
    };

    debug!(
        source = %request.source,
        target = %request.target,
        stages = pipeline.stages.len(),
        "resolved conversion route"
    );
    pipeline
}

fn direct_route(request: &ConversionRequest) -> Pipeline {
    let (source, target) = (request.source, request.target);
    if source == Script::Unknown || target == Script::Unknown {
        return Pipeline::default();
    }

    if source == target {
        if source != Script::Roman {
            return Pipeline::default();
        }
        return Pipeline {
            stages: vec![
                Stage::Canonicalize { sanskrit: request.sanskrit },
                Stage::Restyle(request.roman_style),
            ],
        };
    }

    let engines: Vec<Engine> = [
        Engine::to_devanagari(source, request.sanskrit),
        Engine::from_devanagari(target, request.roman_style),
    ]
    .into_iter()
    .flatten()
    .collect();
    Pipeline::from_engines(&engines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for engine in Engine::ALL {
            assert_eq!(Engine::from_code(engine.code()), Some(engine));
        }
        assert_eq!(Engine::from_code("zz"), None);
        assert_eq!("RD".parse::<Engine>().unwrap(), Engine::RomanDeva);
        assert!("roman".parse::<Engine>().is_err());
    }

    #[test]
    fn engine_endpoints_agree_with_stages() {
        for engine in Engine::ALL {
            assert_ne!(engine.source(), engine.target(), "{engine}");
            assert!(
                engine.source() == Script::Devanagari || engine.target() == Script::Devanagari,
                "{engine}"
            );
            assert!(!engine.stages().is_empty());
        }
    }

    #[test]
    fn native_to_native_goes_through_devanagari() {
        let pipeline = route(&ConversionRequest::new(Script::Thai, Script::Khmer));
        assert_eq!(
            pipeline,
            Pipeline::from_engines(&[Engine::ThaiDeva, Engine::DevaKhmer])
        );
    }

    #[test]
    fn devanagari_endpoints_need_one_engine() {
        let to_deva = route(&ConversionRequest::new(Script::Sinhala, Script::Devanagari));
        assert_eq!(to_deva, Pipeline::from_engines(&[Engine::SinhalaDeva]));
        let from_deva = route(
            &ConversionRequest::new(Script::Devanagari, Script::Roman).with_style(RomanStyle::Iso),
        );
        assert_eq!(from_deva, Pipeline::from_engines(&[Engine::DevaRomanIso]));
    }

    #[test]
    fn sanskrit_roman_input() {
        let pipeline = route(&ConversionRequest::new(Script::Roman, Script::Thai).with_sanskrit(true));
        assert_eq!(
            pipeline,
            Pipeline::from_engines(&[Engine::RomanSktDeva, Engine::DevaThai])
        );
    }

    #[test]
    fn same_script_passes_through() {
        assert!(route(&ConversionRequest::new(Script::Khmer, Script::Khmer)).is_empty());
        assert!(route(&ConversionRequest::new(Script::Unknown, Script::Thai)).is_empty());
        assert!(route(&ConversionRequest::new(Script::Thai, Script::Unknown)).is_empty());
    }

    #[test]
    fn roman_to_roman_restyles() {
        let pipeline = route(
            &ConversionRequest::new(Script::Roman, Script::Roman).with_style(RomanStyle::Iso),
        );
        assert_eq!(
            pipeline.stages(),
            &[
                Stage::Canonicalize { sanskrit: false },
                Stage::Restyle(RomanStyle::Iso)
            ]
        );
    }

    #[test]
    fn explicit_via_script() {
        let pipeline = route(
            &ConversionRequest::new(Script::Khmer, Script::Roman)
                .with_style(RomanStyle::Iast)
                .via(Script::Thai),
        );
        assert_eq!(
            pipeline,
            Pipeline::from_engines(&[
                Engine::KhmerDeva,
                Engine::DevaThai,
                Engine::ThaiDeva,
                Engine::DevaRomanIast,
            ])
        );

        // A via equal to an endpoint changes nothing
        let direct = ConversionRequest::new(Script::Thai, Script::Khmer);
        assert_eq!(route(&direct.via(Script::Khmer)), route(&direct));
    }

    #[test]
    fn via_roman_reads_canonical_text_as_is() {
        let pipeline = route(
            &ConversionRequest::new(Script::Devanagari, Script::Khmer)
                .with_sanskrit(true)
                .via(Script::Roman),
        );
        assert_eq!(
            pipeline.stages(),
            &[
                Stage::DevanagariToRoman,
                Stage::RomanToDevanagari,
                Stage::DevanagariToNative(Script::Khmer),
                Stage::Finalize(Script::Khmer),
            ]
        );
    }
}
