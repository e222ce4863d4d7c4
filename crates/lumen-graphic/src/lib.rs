//! Software 2D rasterization for the Lumen rasterizer.
//!
//! # Scope
//!
//! This crate implements:
//! - **Geometry** - integer points and rectangles with clipping
//! - **Color** - RGBA values and straight alpha "source over" blending
//! - **Surfaces** - the [`Surface`] capability and an `image`-backed [`Bitmap`]
//! - **Painter** - a clip-aware drawing context bound to one surface
//!   - Nested clip rectangles through scoped [`ClipGuard`]s
//!   - Pixel plots, rectangle clear/fill/outline, lines
//!   - Exact and resampled bitmap blits, mask (tinted) blits
//!   - Glyph and text-run drawing from any [`Font`]
//! - **Glyph atlas** - [`GlyphAtlas`], a `fontdue`-rasterized mask font
//!
//! # Architecture
//!
//! ```text
//! Font ─┐
//!       ├─→ Painter ──(clip stack)──→ &mut Surface
//! Bitmap┘
//! ```
//!
//! The painter owns no pixels. Every output pixel is tested against the
//! current clip rectangle before it reaches the surface, so clipping holds
//! for all drawing operations.
//!
//! # Not Yet Implemented
//!
//! - Path fill and stroke
//! - Antialiased lines

/// `fontdue`-backed glyph atlas.
pub mod atlas;
/// Bounded stack of saved clip rectangles.
pub mod clip;
/// RGBA color values and blending.
pub mod color;
/// Glyph geometry and the font capability consumed by the painter.
pub mod font;
/// Integer points and rectangles.
pub mod geometry;
/// The clip-aware drawing context.
pub mod painter;
/// Pixel surfaces and the `image`-backed bitmap.
pub mod surface;

mod text;

pub use atlas::{FontError, GlyphAtlas};
pub use clip::{CLIP_STACK_CAPACITY, ClipStack};
pub use color::Color;
pub use font::{Font, Glyph};
pub use geometry::{Point, Rect};
pub use painter::{ClipGuard, Painter};
pub use surface::{Bitmap, BitmapError, Filtering, Surface};
