use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TranslitError};
use crate::script::{RomanStyle, Script};

/// Everything a script-to-script conversion depends on.
///
/// Passed explicitly with every call; there is no process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionRequest {
    pub source: Script,
    pub target: Script,
    /// Style of Roman output; ignored for other targets.
    pub roman_style: RomanStyle,
    pub include_numerals: bool,
    /// Read Roman input with Sanskrit conventions.
    pub sanskrit: bool,
    /// Route through this script instead of converting directly, e.g.
    /// Roman → Devanagari → Khmer with `via: Devanagari`.
    pub via: Option<Script>,
}

impl Default for ConversionRequest {
    fn default() -> Self {
        ConversionRequest {
            source: Script::Roman,
            target: Script::Devanagari,
            roman_style: RomanStyle::default(),
            include_numerals: true,
            sanskrit: false,
            via: None,
        }
    }
}

impl ConversionRequest {
    pub fn new(source: Script, target: Script) -> Self {
        ConversionRequest {
            source,
            target,
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: RomanStyle) -> Self {
        self.roman_style = style;
        self
    }

    pub fn with_numerals(mut self, include_numerals: bool) -> Self {
        self.include_numerals = include_numerals;
        self
    }

    pub fn with_sanskrit(mut self, sanskrit: bool) -> Self {
        self.sanskrit = sanskrit;
        self
    }

    pub fn via(mut self, script: Script) -> Self {
        self.via = Some(script);
        self
    }

    /// Load a request from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TranslitError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| TranslitError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let request = ConversionRequest::default();
        assert_eq!(request.roman_style, RomanStyle::PaliCommon);
        assert!(request.include_numerals);
        assert!(!request.sanskrit);
        assert_eq!(request.via, None);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let request: ConversionRequest =
            serde_json::from_str(r#"{"source": "thai", "target": "roman", "roman_style": "iso"}"#).unwrap();
        assert_eq!(request.source, Script::Thai);
        assert_eq!(request.target, Script::Roman);
        assert_eq!(request.roman_style, RomanStyle::Iso);
        assert!(request.include_numerals);
    }

    #[test]
    fn style_aliases() {
        let request: ConversionRequest = serde_json::from_str(r#"{"roman_style": "least"}"#).unwrap();
        assert_eq!(request.roman_style, RomanStyle::LeastContamination);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ConversionRequest::from_json_file("/nonexistent/request.json").unwrap_err();
        assert!(matches!(err, TranslitError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let path = std::env::temp_dir().join(format!("pali-translit-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let err = ConversionRequest::from_json_file(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, TranslitError::Config { .. }));
    }
}
