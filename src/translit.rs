//! Public conversion entry points.
//!
//! "Quick" variants skip markup protection. The guarded variants never touch
//! anything inside `<...>`. The BJT and SC variants convert only the string
//! values of their JSON-like record formats.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::request::ConversionRequest;
use crate::router::{route, Engine, Pipeline};
use crate::script::Script;
use crate::tag_guard::TagGuard;

/// Convert with one engine, leaving markup untouched.
pub fn transliterate(text: &str, engine: Engine, include_numerals: bool) -> String {
    convert_guarded(text, &Pipeline::from_engines(&[engine]), include_numerals)
}

/// Convert with two chained engines, leaving markup untouched.
pub fn transliterate_via(text: &str, first: Engine, second: Engine, include_numerals: bool) -> String {
    convert_guarded(text, &Pipeline::from_engines(&[first, second]), include_numerals)
}

/// Convert with one engine over the whole text, markup included.
pub fn translit_quick(text: &str, engine: Engine, include_numerals: bool) -> String {
    Pipeline::from_engines(&[engine]).run(text, include_numerals)
}

pub fn translit_quick_via(text: &str, first: Engine, second: Engine, include_numerals: bool) -> String {
    Pipeline::from_engines(&[first, second]).run(text, include_numerals)
}

/// Convert the `"text"` values of a BJT record, protecting tags and `\n`.
pub fn translit_bjt(text: &str, engine: Engine, include_numerals: bool) -> String {
    convert_bjt(text, &Pipeline::from_engines(&[engine]), include_numerals)
}

/// Convert the values of an SC `"key": "value"` record, protecting tags.
pub fn translit_sc(text: &str, engine: Engine, include_numerals: bool) -> String {
    convert_sc(text, &Pipeline::from_engines(&[engine]), include_numerals)
}

/// Convert between any two scripts as described by `request`.
pub fn translit_pali_script(text: &str, request: &ConversionRequest) -> String {
    Transliterator::new(*request).convert(text)
}

pub fn translit_quick_pali_script(text: &str, request: &ConversionRequest) -> String {
    Transliterator::new(*request).convert_quick(text)
}

/// Point an XML document's stylesheet reference at the target script's
/// stylesheet (`tipitaka-latn.xsl` → `tipitaka-thai.xsl`). Only the first
/// reference is changed.
pub fn fix_xsl_name(text: &str, from: Script, to: Script) -> String {
    if from == Script::Unknown || to == Script::Unknown {
        return text.to_string();
    }
    let old = format!("tipitaka-{}.xsl", from.code());
    let new = format!("tipitaka-{}.xsl", to.code());
    text.replacen(&old, &new, 1)
}

/// A request with its route resolved once, for converting many texts.
#[derive(Debug, Clone)]
pub struct Transliterator {
    request: ConversionRequest,
    pipeline: Pipeline,
}

impl Transliterator {
    pub fn new(request: ConversionRequest) -> Self {
        let pipeline = route(&request);
        Transliterator { request, pipeline }
    }

    pub fn request(&self) -> &ConversionRequest {
        &self.request
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Whether conversion would return every text unchanged.
    pub fn is_passthrough(&self) -> bool {
        self.pipeline.is_empty()
    }

    /// Convert, leaving markup untouched.
    pub fn convert(&self, text: &str) -> String {
        convert_guarded(text, &self.pipeline, self.request.include_numerals)
    }

    /// Convert the whole text, markup included.
    pub fn convert_quick(&self, text: &str) -> String {
        self.pipeline.run(text, self.request.include_numerals)
    }

    pub fn convert_bjt(&self, text: &str) -> String {
        convert_bjt(text, &self.pipeline, self.request.include_numerals)
    }

    pub fn convert_sc(&self, text: &str) -> String {
        convert_sc(text, &self.pipeline, self.request.include_numerals)
    }
}

// A value is a run of non-quote chars or whole tags, which may contain quotes
fn bjt_value_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#""text": "((?:<[^>\n]*>|[^"\n])*?)""#).expect("BJT value pattern must be valid")
    })
}

fn sc_value_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#""([^"\n]*?)": "((?:<[^>\n]*>|[^"\n])*?)""#).expect("SC value pattern must be valid")
    })
}

fn convert_guarded(text: &str, pipeline: &Pipeline, numerals: bool) -> String {
    if pipeline.is_empty() {
        return text.to_string();
    }
    TagGuard::Markup.apply(text, |run| pipeline.run(run, numerals))
}

fn convert_bjt(text: &str, pipeline: &Pipeline, numerals: bool) -> String {
    if pipeline.is_empty() {
        return text.to_string();
    }
    let mut values = 0usize;
    let output = bjt_value_pattern()
        .replace_all(text, |caps: &Captures| {
            values += 1;
            let value = TagGuard::MarkupAndEscapedNewlines.apply(&caps[1], |run| pipeline.run(run, numerals));
            format!("\"text\": \"{value}\"")
        })
        .into_owned();
    debug!(values, "converted BJT text values");
    output
}

fn convert_sc(text: &str, pipeline: &Pipeline, numerals: bool) -> String {
    if pipeline.is_empty() {
        return text.to_string();
    }
    let mut values = 0usize;
    let output = sc_value_pattern()
        .replace_all(text, |caps: &Captures| {
            values += 1;
            let value = TagGuard::Markup.apply(&caps[2], |run| pipeline.run(run, numerals));
            format!("\"{}\": \"{value}\"", &caps[1])
        })
        .into_owned();
    debug!(values, "converted SC values");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::RomanStyle;

    #[test]
    fn markup_is_never_converted() {
        assert_eq!(
            transliterate("<b>dhamma</b>", Engine::RomanDeva, true),
            "<b>\u{0927}\u{092E}\u{094D}\u{092E}</b>"
        );
    }

    #[test]
    fn quick_converts_markup_too() {
        let out = translit_quick("<b>", Engine::RomanDeva, true);
        assert_ne!(out, "<b>");
        assert!(out.contains('\u{092C}'));
    }

    #[test]
    fn bjt_converts_only_text_values() {
        let record = r#"{"level": 1, "text": "buddha", "type": "gatha"}"#;
        assert_eq!(
            translit_bjt(record, Engine::RomanDeva, true),
            "{\"level\": 1, \"text\": \"\u{092C}\u{0941}\u{0926}\u{094D}\u{0927}\", \"type\": \"gatha\"}"
        );
    }

    #[test]
    fn bjt_protects_tags_and_escaped_newlines() {
        let record = r#""text": "ka\nkha <b class="x">ga</b>""#;
        assert_eq!(
            translit_bjt(record, Engine::RomanDeva, true),
            "\"text\": \"\u{0915}\\n\u{0916} <b class=\"x\">\u{0917}</b>\""
        );
    }

    #[test]
    fn sc_converts_values_not_keys() {
        let record = r#"{"dn1:1.1": "evaṃ"}"#;
        assert_eq!(
            translit_sc(record, Engine::RomanDeva, true),
            "{\"dn1:1.1\": \"\u{090F}\u{0935}\u{0902}\"}"
        );
    }

    #[test]
    fn xsl_reference_follows_target() {
        let xml = r#"<?xml-stylesheet type="text/xsl" href="tipitaka-latn.xsl"?>"#;
        assert_eq!(
            fix_xsl_name(xml, Script::Roman, Script::Thai),
            r#"<?xml-stylesheet type="text/xsl" href="tipitaka-thai.xsl"?>"#
        );
        assert_eq!(fix_xsl_name(xml, Script::Devanagari, Script::Thai), xml);
    }

    #[test]
    fn transliterator_reuses_route() {
        let t = Transliterator::new(
            ConversionRequest::new(Script::Devanagari, Script::Roman).with_style(RomanStyle::Iso),
        );
        assert!(!t.is_passthrough());
        assert_eq!(t.convert("\u{0926}\u{0947}\u{0935}\u{094B}"), "dēvō");
        assert_eq!(t.convert("\u{0915}\u{0948}"), "kai");
    }

    #[test]
    fn passthrough_returns_input() {
        let t = Transliterator::new(ConversionRequest::new(Script::Thai, Script::Thai));
        assert!(t.is_passthrough());
        assert_eq!(t.convert("<x>abc</x>"), "<x>abc</x>");
        assert_eq!(t.convert_bjt("\"text\": \"a\""), "\"text\": \"a\"");
    }
}
