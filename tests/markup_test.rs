//! Markup protection and record-format conversion.

use pali_translit::{
    fix_xsl_name, translit_bjt, translit_pali_script, translit_quick, translit_sc, transliterate,
    ConversionRequest, Engine, Script, TagGuard, Transliterator,
};

#[test]
fn test_tags_are_byte_identical_after_conversion() {
    let request = ConversionRequest::new(Script::Roman, Script::Myanmar);
    let text = r#"<p rend="bodytext" n="1"><hi rend="bold">evaṃ</hi> me sutaṃ</p>"#;
    let out = translit_pali_script(text, &request);

    let tags_in = TagGuard::Markup.protect(text);
    let tags_out = TagGuard::Markup.protect(&out);
    assert_eq!(tags_in.opaque_count(), 4);
    assert_eq!(tags_out.opaque_count(), 4);
    for tag in ["<p rend=\"bodytext\" n=\"1\">", "<hi rend=\"bold\">", "</hi>", "</p>"] {
        assert!(out.contains(tag), "{tag} missing from {out}");
    }
    assert!(!out.contains("evaṃ"));
}

#[test]
fn test_tag_guard_example() {
    assert_eq!(
        transliterate("<b>dhamma</b> saccaṃ", Engine::RomanDeva, true),
        "<b>\u{0927}\u{092E}\u{094D}\u{092E}</b> \u{0938}\u{091A}\u{094D}\u{091A}\u{0902}"
    );
}

#[test]
fn test_quick_mode_touches_markup() {
    let guarded = transliterate("<b>ka</b>", Engine::RomanDeva, true);
    let quick = translit_quick("<b>ka</b>", Engine::RomanDeva, true);
    assert_eq!(guarded, "<b>\u{0915}</b>");
    assert_ne!(quick, guarded);
}

#[test]
fn test_private_use_characters_in_input_survive() {
    // Private-use code points have no special meaning to the guard
    let text = "\u{E000}<b>ka</b>\u{E001}";
    assert_eq!(
        transliterate(text, Engine::RomanDeva, true),
        "\u{E000}<b>\u{0915}</b>\u{E001}"
    );
}

#[test]
fn test_bjt_record_lines() {
    let record = concat!(
        r#"{"type": "heading", "text": "buddha", "level": 2},"#,
        "\n",
        r#"{"type": "paragraph", "text": "dhamma\nsaccaṃ"}"#
    );
    let out = translit_bjt(record, Engine::RomanDeva, true);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines[0],
        "{\"type\": \"heading\", \"text\": \"\u{092C}\u{0941}\u{0926}\u{094D}\u{0927}\", \"level\": 2},"
    );
    assert_eq!(
        lines[1],
        "{\"type\": \"paragraph\", \"text\": \"\u{0927}\u{092E}\u{094D}\u{092E}\\n\u{0938}\u{091A}\u{094D}\u{091A}\u{0902}\"}"
    );
}

#[test]
fn test_bjt_leaves_other_fields_alone() {
    let record = r#"{"type": "buddha"}"#;
    assert_eq!(translit_bjt(record, Engine::RomanDeva, true), record);
}

#[test]
fn test_sc_record() {
    let record = r#"{"mn1:1.1": "evaṃ me sutaṃ", "mn1:1.2": "<j>bhikkhū</j>"}"#;
    let out = translit_sc(record, Engine::RomanDeva, true);
    assert!(out.starts_with("{\"mn1:1.1\": \""));
    assert!(out.contains("\"mn1:1.2\": \"<j>\u{092D}\u{093F}\u{0915}\u{094D}\u{0916}\u{0942}</j>\""));
    assert!(!out.contains("sutaṃ"));
}

#[test]
fn test_transliterator_record_modes() {
    let t = Transliterator::new(ConversionRequest::new(Script::Roman, Script::Sinhala));
    let bjt = t.convert_bjt(r#"{"text": "ka"}"#);
    assert_eq!(bjt, "{\"text\": \"\u{0D9A}\"}");
    let sc = t.convert_sc(r#"{"id": "ka"}"#);
    assert_eq!(sc, "{\"id\": \"\u{0D9A}\"}");
}

#[test]
fn test_xsl_name_for_each_target() {
    let xml = r#"<?xml-stylesheet type="text/xsl" href="tipitaka-deva.xsl"?><p>x</p>"#;
    for (script, code) in [
        (Script::Roman, "latn"),
        (Script::Thai, "thai"),
        (Script::Khmer, "khmr"),
        (Script::Myanmar, "mymr"),
        (Script::Sinhala, "sinh"),
    ] {
        let fixed = fix_xsl_name(xml, Script::Devanagari, script);
        assert!(fixed.contains(&format!("tipitaka-{code}.xsl")), "{fixed}");
        assert!(fixed.ends_with("<p>x</p>"));
    }
}
