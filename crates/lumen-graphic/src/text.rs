//! Text runs on top of [`Painter::draw_glyph`].

use lumen_common::warning::warn_once;

use crate::color::Color;
use crate::font::Font;
use crate::geometry::Point;
use crate::painter::Painter;
use crate::surface::Surface;

impl<S: Surface + ?Sized> Painter<'_, S> {
    /// Draw `text` with the pen starting at `origin`.
    ///
    /// The pen advances by each glyph's advance. `'\n'` moves it back to
    /// `origin.x`, one line height down; other control characters are
    /// skipped, as are characters the font has no glyph for.
    pub fn draw_text<F: Font + ?Sized>(
        &mut self,
        font: &F,
        text: &str,
        origin: Point,
        color: Color,
    ) {
        let mut pen = origin;

        for ch in text.chars() {
            if ch == '\n' {
                pen = Point::new(origin.x, pen.y + font.line_height());
                continue;
            }
            if ch.is_control() {
                continue;
            }

            let Some(glyph) = font.glyph(ch) else {
                warn_once("font", &format!("no glyph for {ch:?}, skipping"));
                continue;
            };

            self.draw_glyph(font, glyph, pen, color);
            pen.x += glyph.advance;
        }
    }
}
