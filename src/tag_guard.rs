//! Keeps markup out of conversion.
//!
//! Instead of rewriting protected spans into private-use sentinels and back,
//! the text is split into an ordered list of opaque spans (tags, escaped
//! newlines) and convertible runs. Only the runs are handed to the
//! converter, so no character of a tag can ever be transliterated.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// One piece of a split text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span<'a> {
    /// Copied to the output untouched.
    Opaque(&'a str),
    /// Subject to conversion.
    Text(Cow<'a, str>),
}

/// Which spans a guard protects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagGuard {
    /// `<...>` tags on a single line.
    Markup,
    /// Tags plus the two-character escape `\n` found in JSON string values.
    MarkupAndEscapedNewlines,
}

fn markup_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<.*?>").expect("markup pattern must be valid"))
}

fn markup_and_newline_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<.*?>|\\n").expect("markup pattern must be valid"))
}

impl TagGuard {
    fn pattern(self) -> &'static Regex {
        match self {
            TagGuard::Markup => markup_pattern(),
            TagGuard::MarkupAndEscapedNewlines => markup_and_newline_pattern(),
        }
    }

    /// Split `text` into protected and convertible spans.
    pub fn protect(self, text: &str) -> Protected<'_> {
        let mut spans = Vec::new();
        let mut last = 0;
        for m in self.pattern().find_iter(text) {
            if m.start() > last {
                spans.push(Span::Text(Cow::Borrowed(&text[last..m.start()])));
            }
            spans.push(Span::Opaque(m.as_str()));
            last = m.end();
        }
        if last < text.len() {
            spans.push(Span::Text(Cow::Borrowed(&text[last..])));
        }
        Protected { spans }
    }

    /// Convert everything outside protected spans with `convert`.
    pub fn apply<F>(self, text: &str, convert: F) -> String
    where
        F: FnMut(&str) -> String,
    {
        self.protect(text).map_text(convert).restore()
    }
}

/// A text split by [`TagGuard::protect`]; the opaque spans form the registry
/// that [`Protected::restore`] puts back in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protected<'a> {
    spans: Vec<Span<'a>>,
}

impl<'a> Protected<'a> {
    pub fn spans(&self) -> &[Span<'a>] {
        &self.spans
    }

    /// Number of protected spans.
    pub fn opaque_count(&self) -> usize {
        self.spans
            .iter()
            .filter(|s| matches!(s, Span::Opaque(_)))
            .count()
    }

    /// Replace every convertible run with `convert(run)`.
    pub fn map_text<F>(self, mut convert: F) -> Protected<'a>
    where
        F: FnMut(&str) -> String,
    {
        let spans = self
            .spans
            .into_iter()
            .map(|span| match span {
                Span::Text(run) => Span::Text(Cow::Owned(convert(&run))),
                opaque => opaque,
            })
            .collect();
        Protected { spans }
    }

    /// Join the spans back into one string.
    pub fn restore(&self) -> String {
        let mut output = String::new();
        for span in &self.spans {
            match span {
                Span::Opaque(s) => output.push_str(s),
                Span::Text(s) => output.push_str(s),
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_around_tags() {
        let protected = TagGuard::Markup.protect("<b>dhamma</b> x");
        assert_eq!(
            protected.spans(),
            &[
                Span::Opaque("<b>"),
                Span::Text(Cow::Borrowed("dhamma")),
                Span::Opaque("</b>"),
                Span::Text(Cow::Borrowed(" x")),
            ]
        );
        assert_eq!(protected.opaque_count(), 2);
    }

    #[test]
    fn restore_without_conversion_is_identity() {
        let text = "a <i class=\"x\">b</i> c\\n d";
        assert_eq!(TagGuard::MarkupAndEscapedNewlines.protect(text).restore(), text);
        assert_eq!(TagGuard::Markup.protect(text).restore(), text);
    }

    #[test]
    fn only_text_runs_are_converted() {
        let out = TagGuard::Markup.apply("<p>abc</p>", |s| s.to_uppercase());
        assert_eq!(out, "<p>ABC</p>");
    }

    #[test]
    fn escaped_newline_is_protected() {
        let out = TagGuard::MarkupAndEscapedNewlines.apply("ab\\ncd", |s| s.to_uppercase());
        assert_eq!(out, "AB\\nCD");
        // Plain markup guard converts the escape like any text
        let out = TagGuard::Markup.apply("ab\\ncd", |s| s.to_uppercase());
        assert_eq!(out, "AB\\NCD");
    }

    #[test]
    fn unclosed_tag_is_text() {
        let out = TagGuard::Markup.apply("a < b", |s| s.to_uppercase());
        assert_eq!(out, "A < B");
    }

    #[test]
    fn empty_text() {
        assert!(TagGuard::Markup.protect("").spans().is_empty());
        assert_eq!(TagGuard::Markup.apply("", |s| s.to_uppercase()), "");
    }
}
