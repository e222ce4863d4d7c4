//! Pixel surfaces.
//!
//! The painter only talks to the [`Surface`] trait. [`Bitmap`] is the
//! in-memory implementation, stored as an [`image::RgbaImage`] so it can be
//! loaded from and saved to image files directly.

use std::path::Path;

use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::color::Color;
use crate::geometry::{Point, Rect};

/// An addressable 2D pixel buffer that drawing operations mutate.
pub trait Surface {
    /// The rectangle of addressable pixels.
    fn bound(&self) -> Rect;

    /// The stored color at `point`.
    fn read(&self, point: Point) -> Color;

    /// Replace the stored color at `point`.
    fn overwrite(&mut self, point: Point, color: Color);

    /// Composite `color` over the stored color at `point`.
    fn blend(&mut self, point: Point, color: Color) {
        let below = self.read(point);
        self.overwrite(point, color.blend_over(below));
    }

    /// Sample the `source` region at normalized coordinates `u, v ∈ [0, 1)`.
    fn sample(&self, source: Rect, u: f32, v: f32) -> Color;
}

/// How a [`Bitmap`] answers [`Surface::sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filtering {
    /// The pixel under the sample position.
    #[default]
    Nearest,
    /// Bilinear interpolation of the pixel and its right/bottom neighbours.
    Linear,
}

/// Errors from creating, loading or saving a [`Bitmap`].
#[derive(Debug, Error)]
pub enum BitmapError {
    /// The raw pixel buffer does not match the requested dimensions.
    #[error(
        "pixel buffer holds {actual} bytes, expected {expected} for a {width}x{height} RGBA bitmap"
    )]
    SizeMismatch {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
        /// `width * height * 4`.
        expected: usize,
        /// Length of the buffer that was supplied.
        actual: usize,
    },
    /// Decoding or encoding failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// An RGBA pixel buffer.
#[derive(Debug, Clone)]
pub struct Bitmap {
    pixels: RgbaImage,
    filtering: Filtering,
}

impl Bitmap {
    /// A fully transparent bitmap.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    /// A bitmap with every pixel set to `color`.
    #[must_use]
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self::from_image(RgbaImage::from_pixel(width, height, color.into()))
    }

    /// Wrap raw row-major RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BitmapError::SizeMismatch`] if `data` is not exactly
    /// `width * height * 4` bytes long.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BitmapError> {
        let expected = width as usize * height as usize * 4;
        let actual = data.len();
        if actual != expected {
            return Err(BitmapError::SizeMismatch {
                width,
                height,
                expected,
                actual,
            });
        }

        RgbaImage::from_raw(width, height, data)
            .map(Self::from_image)
            .ok_or(BitmapError::SizeMismatch {
                width,
                height,
                expected,
                actual,
            })
    }

    /// Wrap an existing image buffer.
    #[must_use]
    pub const fn from_image(pixels: RgbaImage) -> Self {
        Self {
            pixels,
            filtering: Filtering::Nearest,
        }
    }

    /// Decode an image file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BitmapError> {
        Ok(Self::from_image(image::open(path)?.to_rgba8()))
    }

    /// Encode the bitmap to an image file; the format follows the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be encoded or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BitmapError> {
        self.pixels.save(path)?;
        Ok(())
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Current sampling mode.
    #[must_use]
    pub const fn filtering(&self) -> Filtering {
        self.filtering
    }

    /// Change how scaled blits sample this bitmap.
    pub const fn set_filtering(&mut self, filtering: Filtering) {
        self.filtering = filtering;
    }

    /// The underlying image buffer.
    #[must_use]
    pub const fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Unwrap into the underlying image buffer.
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    fn index(&self, point: Point) -> Option<(u32, u32)> {
        let x = u32::try_from(point.x).ok()?;
        let y = u32::try_from(point.y).ok()?;
        (x < self.width() && y < self.height()).then_some((x, y))
    }

    /// Read with coordinates clamped into the bitmap.
    fn read_clamped(&self, point: Point) -> Color {
        let bound = self.bound();
        if bound.is_empty() {
            return Color::TRANSPARENT;
        }
        self.read(Point::new(
            point.x.clamp(0, bound.width - 1),
            point.y.clamp(0, bound.height - 1),
        ))
    }
}

impl Surface for Bitmap {
    fn bound(&self) -> Rect {
        Rect::from_size(
            i32::try_from(self.width()).unwrap_or(i32::MAX),
            i32::try_from(self.height()).unwrap_or(i32::MAX),
        )
    }

    fn read(&self, point: Point) -> Color {
        self.index(point)
            .map_or(Color::TRANSPARENT, |(x, y)| (*self.pixels.get_pixel(x, y)).into())
    }

    fn overwrite(&mut self, point: Point, color: Color) {
        if let Some((x, y)) = self.index(point) {
            self.pixels.put_pixel(x, y, color.into());
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn sample(&self, source: Rect, u: f32, v: f32) -> Color {
        let sx = source.width as f32 * u;
        let sy = source.height as f32 * v;
        let base = source.position() + Point::new(sx as i32, sy as i32);

        match self.filtering {
            Filtering::Nearest => self.read_clamped(base),
            Filtering::Linear => {
                let fx = sx.fract();
                let fy = sy.fract();
                let top = self
                    .read_clamped(base)
                    .lerp(self.read_clamped(base + Point::new(1, 0)), fx);
                let bottom = self
                    .read_clamped(base + Point::new(0, 1))
                    .lerp(self.read_clamped(base + Point::new(1, 1)), fx);
                top.lerp(bottom, fy)
            }
        }
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Self([color.r, color.g, color.b, color.a])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(Rgba([r, g, b, a]): Rgba<u8>) -> Self {
        Self::new(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_bitmap_reads_back() {
        let bitmap = Bitmap::filled(3, 2, Color::rgb(9, 8, 7));
        assert_eq!(bitmap.bound(), Rect::from_size(3, 2));
        assert_eq!(bitmap.read(Point::new(2, 1)), Color::rgb(9, 8, 7));
    }

    #[test]
    fn test_out_of_bounds_access_is_ignored() {
        let mut bitmap = Bitmap::new(2, 2);
        bitmap.overwrite(Point::new(-1, 0), Color::WHITE);
        bitmap.overwrite(Point::new(2, 0), Color::WHITE);
        bitmap.blend(Point::new(0, 5), Color::WHITE);
        assert_eq!(bitmap.read(Point::new(-1, 0)), Color::TRANSPARENT);
        assert!(bitmap.as_image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(Bitmap::from_rgba(2, 2, vec![0; 16]).is_ok());
        let err = Bitmap::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            BitmapError::SizeMismatch {
                expected: 16,
                actual: 15,
                ..
            }
        ));
    }

    #[test]
    fn test_nearest_sample_truncates() {
        let mut bitmap = Bitmap::new(4, 1);
        for x in 0..4 {
            let shade = u8::try_from(x * 60).unwrap();
            bitmap.overwrite(Point::new(x, 0), Color::rgb(shade, 0, 0));
        }
        let source = Rect::from_size(4, 1);
        assert_eq!(bitmap.sample(source, 0.0, 0.0).r, 0);
        assert_eq!(bitmap.sample(source, 0.49, 0.0).r, 60);
        assert_eq!(bitmap.sample(source, 0.99, 0.0).r, 180);
    }

    #[test]
    fn test_linear_sample_interpolates_and_clamps() {
        let mut bitmap = Bitmap::new(2, 1);
        bitmap.overwrite(Point::new(0, 0), Color::rgb(0, 0, 0));
        bitmap.overwrite(Point::new(1, 0), Color::rgb(200, 0, 0));
        bitmap.set_filtering(Filtering::Linear);

        let source = Rect::from_size(2, 1);
        assert_eq!(bitmap.sample(source, 0.25, 0.0).r, 100);
        // Right neighbour of the last column clamps to itself.
        assert_eq!(bitmap.sample(source, 0.75, 0.0).r, 200);
    }

    #[test]
    fn test_color_image_conversion() {
        let color = Color::new(1, 2, 3, 4);
        let pixel: Rgba<u8> = color.into();
        assert_eq!(pixel, Rgba([1, 2, 3, 4]));
        assert_eq!(Color::from(pixel), color);
    }
}
