//! Painter - a clip-aware drawing context over one surface.
//!
//! # Architecture
//!
//! ```text
//! caller ──push_clip──→ ClipGuard ──(Deref)──→ Painter ──plot──→ &mut Surface
//!                          │ drop
//!                          └──→ pop_clip
//! ```
//!
//! The painter holds no pixels. It borrows its target surface mutably for
//! its whole lifetime and keeps the current clip rectangle plus a stack of
//! the clips it replaced. Every pixel any operation produces is tested
//! against the current clip before it reaches the surface; pixels outside
//! the clip are dropped silently.
//!
//! Clip rectangles are scoped: [`Painter::push_clip`] returns a
//! [`ClipGuard`] that restores the previous clip when dropped, so a render
//! traversal cannot leave the clip unbalanced on early return or unwind.

use std::ops::{Deref, DerefMut};

use crate::clip::ClipStack;
use crate::color::Color;
use crate::font::{Font, Glyph};
use crate::geometry::{Point, Rect};
use crate::surface::Surface;

/// Drawing context bound to one target surface.
pub struct Painter<'s, S: Surface + ?Sized> {
    /// Target of every drawing operation.
    surface: &'s mut S,
    /// Region outside of which drawing is discarded. Always inside the
    /// surface bound.
    clip: Rect,
    /// Clips replaced by the currently open [`ClipGuard`]s.
    stack: ClipStack,
}

impl<'s, S: Surface + ?Sized> Painter<'s, S> {
    /// Bind a painter to `surface`. The initial clip is the whole surface.
    #[must_use]
    pub fn new(surface: &'s mut S) -> Self {
        let clip = surface.bound();
        Self {
            surface,
            clip,
            stack: ClipStack::new(),
        }
    }

    /// The current clip rectangle.
    #[must_use]
    pub const fn clip(&self) -> Rect {
        self.clip
    }

    /// Number of clip rectangles currently pushed.
    #[must_use]
    pub const fn clip_depth(&self) -> usize {
        self.stack.len()
    }

    /// The target surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &*self.surface
    }

    /// Narrow the clip to its intersection with `rect` until the returned
    /// guard is dropped.
    ///
    /// Clips only ever shrink across nested pushes.
    ///
    /// # Panics
    ///
    /// Panics if [`crate::CLIP_STACK_CAPACITY`] clips are already pushed.
    pub fn push_clip(&mut self, rect: Rect) -> ClipGuard<'_, 's, S> {
        self.stack.push(self.clip);
        self.clip = self.clip.clip(rect);
        ClipGuard { painter: self }
    }

    fn pop_clip(&mut self) {
        self.clip = self.stack.pop();
    }

    /// Blend `color` at `point` if it lies inside the clip.
    pub fn plot(&mut self, point: Point, color: Color) {
        if self.clip.contains(point) {
            self.surface.blend(point, color);
        }
    }

    /// Overwrite every pixel of the clip with `color`.
    pub fn clear(&mut self, color: Color) {
        let bound = self.surface.bound();
        self.clear_rect(bound, color);
    }

    /// Overwrite (no blending) every pixel of `rect` inside the clip.
    pub fn clear_rect(&mut self, rect: Rect, color: Color) {
        let clipped = self.clip.clip(rect);
        if clipped.is_empty() {
            return;
        }

        for point in clipped.points() {
            self.surface.overwrite(point, color);
        }
    }

    /// Blend `color` over every pixel of `rect` inside the clip.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        for point in self.clip.clip(rect).points() {
            self.surface.blend(point, color);
        }
    }

    /// Draw a one pixel wide line from `a` to `b`.
    ///
    /// Axis-aligned lines cover the half-open span between the endpoints and
    /// never plot the far (larger) endpoint. Any other line is rasterized
    /// with Bresenham's algorithm and plots both endpoints. A line from a
    /// point to itself plots that single point.
    pub fn draw_line(&mut self, a: Point, b: Point, color: Color) {
        if a == b {
            self.plot(a, color);
        } else if a.x == b.x {
            for y in a.y.min(b.y)..a.y.max(b.y) {
                self.plot(Point::new(a.x, y), color);
            }
        } else if a.y == b.y {
            for x in a.x.min(b.x)..a.x.max(b.x) {
                self.plot(Point::new(x, a.y), color);
            }
        } else {
            self.draw_line_bresenham(a, b, color);
        }
    }

    fn draw_line_bresenham(&mut self, from: Point, to: Point, color: Color) {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = (if dx > dy { dx } else { -dy }) / 2;
        let mut current = from;

        loop {
            self.plot(current, color);
            if current == to {
                break;
            }

            let e2 = err;
            if e2 > -dx {
                err -= dy;
                current.x += sx;
            }
            if e2 < dy {
                err += dx;
                current.y += sy;
            }
        }
    }

    /// Outline `rect` with four lines.
    ///
    /// Edges run between the corners pulled in by one pixel on the far
    /// sides and go through [`Painter::draw_line`], so the top-left corner
    /// is plotted twice and the bottom-right corner pixel stays unplotted.
    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        let top_left = rect.position();
        let top_right = top_left + Point::new(rect.width - 1, 0);
        let bottom_left = top_left + Point::new(0, rect.height - 1);
        let bottom_right = top_left + Point::new(rect.width - 1, rect.height - 1);

        self.draw_line(top_left, top_right, color);
        self.draw_line(top_left, bottom_left, color);
        self.draw_line(top_right, bottom_right, color);
        self.draw_line(bottom_left, bottom_right, color);
    }

    /// Copy the `source_rect` region of `source` into `dest`, blending.
    ///
    /// Equal sizes copy pixel for pixel; otherwise the region is resampled
    /// through [`Surface::sample`].
    pub fn blit<B: Surface + ?Sized>(&mut self, source: &B, source_rect: Rect, dest: Rect) {
        if source_rect.size() == dest.size() {
            self.blit_exact(source, source_rect, dest);
        } else {
            self.blit_sampled(source, source_rect, dest, |sample| sample);
        }
    }

    fn blit_exact<B: Surface + ?Sized>(&mut self, source: &B, source_rect: Rect, dest: Rect) {
        for offset in Rect::from_size(dest.width, dest.height).points() {
            let sample = source.read(source_rect.position() + offset);
            self.plot(dest.position() + offset, sample);
        }
    }

    /// Draw `source_rect` of a mask into `dest`, inked with `tint`.
    ///
    /// The sampled red channel becomes the alpha of `tint`; the mask's
    /// other channels are ignored.
    pub fn blit_colored<B: Surface + ?Sized>(
        &mut self,
        source: &B,
        source_rect: Rect,
        dest: Rect,
        tint: Color,
    ) {
        self.blit_sampled(source, source_rect, dest, |sample| tint.with_alpha(sample.r));
    }

    /// Walk `dest`, sample the matching normalized position of `source_rect`
    /// and plot `shade(sample)`.
    #[allow(clippy::cast_precision_loss)]
    fn blit_sampled<B: Surface + ?Sized>(
        &mut self,
        source: &B,
        source_rect: Rect,
        dest: Rect,
        shade: impl Fn(Color) -> Color,
    ) {
        if dest.is_empty() {
            return;
        }

        let width = dest.width as f32;
        let height = dest.height as f32;
        for offset in Rect::from_size(dest.width, dest.height).points() {
            let u = offset.x as f32 / width;
            let v = offset.y as f32 / height;
            let sample = source.sample(source_rect, u, v);
            self.plot(dest.position() + offset, shade(sample));
        }
    }

    /// Draw `glyph` from `font` with its origin at `position`.
    pub fn draw_glyph<F: Font + ?Sized>(
        &mut self,
        font: &F,
        glyph: &Glyph,
        position: Point,
        color: Color,
    ) {
        let dest = Rect::from_parts(position - glyph.origin, glyph.bound.size());
        self.blit_colored(font.mask(), glyph.bound, dest, color);
    }
}

/// Scope of one pushed clip rectangle.
///
/// Derefs to the [`Painter`], so drawing and nested pushes go through the
/// guard. Dropping it restores the clip that was active before the push.
#[must_use = "dropping the guard immediately restores the previous clip"]
pub struct ClipGuard<'p, 's, S: Surface + ?Sized> {
    painter: &'p mut Painter<'s, S>,
}

impl<'s, S: Surface + ?Sized> Deref for ClipGuard<'_, 's, S> {
    type Target = Painter<'s, S>;

    fn deref(&self) -> &Self::Target {
        &*self.painter
    }
}

impl<S: Surface + ?Sized> DerefMut for ClipGuard<'_, '_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.painter
    }
}

impl<S: Surface + ?Sized> Drop for ClipGuard<'_, '_, S> {
    fn drop(&mut self) {
        self.painter.pop_clip();
    }
}
