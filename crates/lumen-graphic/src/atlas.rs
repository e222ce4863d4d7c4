//! Glyph atlas rasterized with fontdue.
//!
//! Each character of a charset is rasterized once at a fixed pixel size and
//! packed left to right into a single mask [`Bitmap`], so drawing text is
//! nothing more than mask blits out of one surface.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use fontdue::FontSettings;
use thiserror::Error;

use crate::color::Color;
use crate::font::{Font, Glyph};
use crate::geometry::{Point, Rect};
use crate::surface::{Bitmap, Surface};

/// Blank columns between neighbouring glyphs in the mask.
const GUTTER: i32 = 1;

/// Errors from loading a font into an atlas.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file could not be read.
    #[error("failed to read font file '{}': {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// fontdue rejected the font data.
    #[error("failed to parse font: {0}")]
    Parse(&'static str),
}

/// A [`Font`] whose glyphs were rasterized into one mask bitmap.
///
/// Mask pixels are `(c, c, c, 255)` for coverage `c`. Glyph origins are
/// baseline-relative: drawing a glyph at `p` puts its pen position on the
/// baseline at `p`.
#[derive(Debug, Clone)]
pub struct GlyphAtlas {
    mask: Bitmap,
    glyphs: HashMap<char, Glyph>,
    size: f32,
    line_height: i32,
}

impl GlyphAtlas {
    /// Printable ASCII.
    pub const DEFAULT_CHARSET: &'static str = " !\"#$%&'()*+,-./0123456789:;<=>?@\
        ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

    /// Read a TrueType/OpenType file and rasterize [`Self::DEFAULT_CHARSET`]
    /// at `size` pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path, size: f32) -> Result<Self, FontError> {
        let data = fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&data, size)
    }

    /// Parse font data and rasterize [`Self::DEFAULT_CHARSET`] at `size`
    /// pixels.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if fontdue cannot parse `data`.
    pub fn from_bytes(data: &[u8], size: f32) -> Result<Self, FontError> {
        let font = fontdue::Font::from_bytes(data, FontSettings::default())
            .map_err(FontError::Parse)?;
        Ok(Self::from_font(&font, size, Self::DEFAULT_CHARSET))
    }

    /// Rasterize every distinct character of `charset` from `font` at
    /// `size` pixels.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss
    )]
    pub fn from_font(font: &fontdue::Font, size: f32, charset: &str) -> Self {
        let mut rasterized: Vec<(char, fontdue::Metrics, Vec<u8>)> = Vec::new();
        for ch in charset.chars() {
            if rasterized.iter().all(|(seen, _, _)| *seen != ch) {
                let (metrics, coverage) = font.rasterize(ch, size);
                rasterized.push((ch, metrics, coverage));
            }
        }

        let width: i32 = rasterized
            .iter()
            .map(|(_, metrics, _)| metrics.width as i32 + GUTTER)
            .sum();
        let height = rasterized
            .iter()
            .map(|(_, metrics, _)| metrics.height as i32)
            .max()
            .unwrap_or(0);

        let mut mask = Bitmap::filled(
            u32::try_from(width.max(1)).unwrap_or(1),
            u32::try_from(height.max(1)).unwrap_or(1),
            Color::BLACK,
        );
        let mut glyphs = HashMap::with_capacity(rasterized.len());
        let mut pen_x = 0;

        for (ch, metrics, coverage) in rasterized {
            let glyph_width = metrics.width as i32;
            let glyph_height = metrics.height as i32;

            if metrics.width > 0 {
                for (index, &c) in coverage.iter().enumerate() {
                    let x = (index % metrics.width) as i32;
                    let y = (index / metrics.width) as i32;
                    mask.overwrite(Point::new(pen_x + x, y), Color::rgb(c, c, c));
                }
            }

            // fontdue's ymin is the bitmap's bottom edge relative to the
            // baseline, positive upwards.
            let glyph = Glyph {
                origin: Point::new(-metrics.xmin, metrics.ymin + glyph_height),
                bound: Rect::new(pen_x, 0, glyph_width, glyph_height),
                advance: metrics.advance_width.round() as i32,
            };
            let _ = glyphs.insert(ch, glyph);
            pen_x += glyph_width + GUTTER;
        }

        let line_height = font
            .horizontal_line_metrics(size)
            .map_or(size * 1.2, |metrics| metrics.new_line_size)
            .ceil() as i32;

        Self {
            mask,
            glyphs,
            size,
            line_height,
        }
    }

    /// Pixel size the glyphs were rasterized at.
    #[must_use]
    pub const fn size(&self) -> f32 {
        self.size
    }

    /// Number of glyphs in the atlas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the atlas holds no glyphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Font for GlyphAtlas {
    type Mask = Bitmap;

    fn mask(&self) -> &Bitmap {
        &self.mask
    }

    fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    fn line_height(&self) -> i32 {
        self.line_height
    }
}
