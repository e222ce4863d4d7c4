//! Tests for loading glyph atlases.

use std::path::Path;

use lumen_graphic::{FontError, GlyphAtlas};

#[test]
fn test_garbage_font_data_is_a_parse_error() {
    let err = GlyphAtlas::from_bytes(b"definitely not a font", 16.0).unwrap_err();
    assert!(matches!(err, FontError::Parse(_)));
}

#[test]
fn test_missing_font_file_is_an_io_error() {
    let path = Path::new("/nonexistent/lumen/font.ttf");
    let err = GlyphAtlas::load(path, 16.0).unwrap_err();

    match &err {
        FontError::Io { path: failed, .. } => assert_eq!(failed, path),
        FontError::Parse(reason) => panic!("expected an I/O error, got parse error {reason}"),
    }
    assert!(err.to_string().contains("/nonexistent/lumen/font.ttf"));
}

#[test]
fn test_default_charset_is_printable_ascii() {
    let charset = GlyphAtlas::DEFAULT_CHARSET;
    assert_eq!(charset.chars().count(), 95);
    assert!(charset.chars().all(|ch| ch.is_ascii() && !ch.is_control()));
    assert!(charset.starts_with(' '));
    assert!(charset.ends_with('~'));
}
