//! Bounded storage for saved clip rectangles.
//!
//! The stack only stores rectangles; narrowing the active clip on push and
//! restoring it on pop is the painter's job (see [`crate::Painter::push_clip`]).

use crate::geometry::Rect;

/// Maximum nesting depth of clip rectangles.
pub const CLIP_STACK_CAPACITY: usize = 32;

/// A fixed-capacity LIFO of previously active clip rectangles.
#[derive(Debug, Clone)]
pub struct ClipStack {
    saved: [Rect; CLIP_STACK_CAPACITY],
    /// Index of the next free slot.
    top: usize,
}

impl ClipStack {
    /// An empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            saved: [Rect::new(0, 0, 0, 0); CLIP_STACK_CAPACITY],
            top: 0,
        }
    }

    /// Number of saved rectangles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.top
    }

    /// Whether nothing is saved.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Whether another push would overflow.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.top == CLIP_STACK_CAPACITY
    }

    /// Save `rect`.
    ///
    /// # Panics
    ///
    /// Panics if [`CLIP_STACK_CAPACITY`] rectangles are already saved. An
    /// overflow means push/pop scoping is unbalanced and every later clip
    /// would be wrong.
    pub fn push(&mut self, rect: Rect) {
        assert!(
            !self.is_full(),
            "clip stack overflow: more than {CLIP_STACK_CAPACITY} nested clip rectangles"
        );

        self.saved[self.top] = rect;
        self.top += 1;
    }

    /// Remove and return the most recently saved rectangle.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty (a pop without a matching push).
    pub fn pop(&mut self) -> Rect {
        assert!(
            !self.is_empty(),
            "clip stack underflow: pop without a matching push"
        );

        self.top -= 1;
        self.saved[self.top]
    }
}

impl Default for ClipStack {
    fn default() -> Self {
        Self::new()
    }
}
