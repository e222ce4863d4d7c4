//! Font discovery for scene labels.

use std::path::Path;

use anyhow::{Context, Result};
use lumen_common::warning::warn_once;
use lumen_graphic::GlyphAtlas;

/// Common system font paths to search when no font is given.
const FONT_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/SFNS.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Build a glyph atlas from `explicit`, or from the first usable system font.
///
/// An explicit font that fails to load is an error. When searching, a
/// missing font only produces a warning and `None`; the scene is then
/// rendered without labels.
///
/// # Errors
///
/// Returns an error if `explicit` is given and cannot be read or parsed.
pub fn load_atlas(explicit: Option<&Path>, size: f32) -> Result<Option<GlyphAtlas>> {
    if let Some(path) = explicit {
        let atlas = GlyphAtlas::load(path, size)
            .with_context(|| format!("failed to load font '{}'", path.display()))?;
        return Ok(Some(atlas));
    }

    for path in FONT_SEARCH_PATHS {
        if let Ok(atlas) = GlyphAtlas::load(Path::new(path), size) {
            eprintln!("Loaded font: {path}");
            return Ok(Some(atlas));
        }
    }

    warn_once(
        "font",
        &format!(
            "no system font found in {} search paths, labels will not be rendered",
            FONT_SEARCH_PATHS.len()
        ),
    );
    Ok(None)
}
