//! Glyph geometry and the font capability consumed by the painter.
//!
//! A font here is already rasterized: one mask surface holding every glyph,
//! plus per-character geometry pointing into it. Parsing font files is the
//! business of whoever implements [`Font`] (see [`crate::GlyphAtlas`]).

use crate::geometry::{Point, Rect};
use crate::surface::Surface;

/// A character's region in a font mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Glyph {
    /// Offset subtracted from the draw position to find the top-left corner
    /// of the glyph. For baseline-anchored fonts this points from the mask's
    /// top-left corner to the pen position on the baseline.
    pub origin: Point,
    /// The glyph's region within the font's mask surface.
    pub bound: Rect,
    /// Horizontal pen advance after drawing this glyph.
    pub advance: i32,
}

/// A source of prerendered glyph masks.
///
/// The mask's red channel is glyph coverage: 0 is background, 255 is ink.
pub trait Font {
    /// The surface holding every glyph mask.
    type Mask: Surface + ?Sized;

    /// The mask surface that [`Glyph::bound`] indexes into.
    fn mask(&self) -> &Self::Mask;

    /// Geometry for `ch`, if the font has it.
    fn glyph(&self, ch: char) -> Option<&Glyph>;

    /// Vertical distance between consecutive baselines.
    fn line_height(&self) -> i32;

    /// Advance width of the widest line of `text`.
    ///
    /// Control characters and characters without a glyph contribute nothing.
    fn text_width(&self, text: &str) -> i32 {
        text.split('\n')
            .map(|line| {
                line.chars()
                    .filter(|ch| !ch.is_control())
                    .filter_map(|ch| self.glyph(ch))
                    .map(|glyph| glyph.advance)
                    .sum::<i32>()
            })
            .max()
            .unwrap_or(0)
    }
}
