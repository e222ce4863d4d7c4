//! RGBA colors and alpha compositing.

/// An sRGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
    /// Alpha channel (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Color {
    /// Opaque black (#000000).
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white (#ffffff).
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Create a color from all four channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// The same color with its alpha channel replaced.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Composite `self` over `dst` ("source over", straight alpha).
    ///
    /// An opaque source replaces `dst` exactly and a fully transparent
    /// source leaves it untouched.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn blend_over(self, dst: Self) -> Self {
        match self.a {
            255 => return self,
            0 => return dst,
            _ => {}
        }

        let src_a = f32::from(self.a) / 255.0;
        let dst_a = f32::from(dst.a) / 255.0 * (1.0 - src_a);
        let out_a = src_a + dst_a;

        let channel = |s: u8, d: u8| -> u8 {
            (f32::from(s).mul_add(src_a, f32::from(d) * dst_a) / out_a)
                .round()
                .clamp(0.0, 255.0) as u8
        };

        Self {
            r: channel(self.r, dst.r),
            g: channel(self.g, dst.g),
            b: channel(self.b, dst.b),
            a: (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Linear interpolation towards `other`; `t` is clamped to `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            (f32::from(b) - f32::from(a))
                .mul_add(t, f32::from(a))
                .round()
                .clamp(0.0, 255.0) as u8
        };

        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: channel(self.a, other.a),
        }
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    ///
    /// Short forms replicate each digit, so `#f80` is `#ff8800`.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }

        let digits = match hex.len() {
            3 | 4 => 1,
            6 | 8 => 2,
            _ => return None,
        };
        let channel = |index: usize| -> Option<u8> {
            let part = hex.get(index * digits..(index + 1) * digits)?;
            let value = u8::from_str_radix(part, 16).ok()?;
            Some(if digits == 1 { value * 17 } else { value })
        };

        let alpha = if hex.len() / digits == 4 {
            channel(3)?
        } else {
            255
        };
        Some(Self::new(channel(0)?, channel(1)?, channel(2)?, alpha))
    }
}
