#![forbid(unsafe_code)]

//! Pixel geometry primitives.
//!
//! All values are `f64` pixels: centring an overlay on its anchor halves
//! widths, so positions are routinely fractional.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle as reported by a measurement.
///
/// A rect is only usable for placement once it is *measured*: both
/// dimensions strictly positive and every field finite. Anything else is
/// treated as a pending measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A size-only rectangle anchored at the origin.
    ///
    /// Overlay rects only contribute their dimensions to placement.
    #[inline]
    #[must_use]
    pub const fn with_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// True when the rect has real, positive dimensions.
    #[inline]
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// A concrete overlay position in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// The rect an overlay of `size` occupies when placed here.
    #[inline]
    #[must_use]
    pub fn to_rect(self, size: Rect) -> Rect {
        Rect::new(self.left, self.top, size.width, size.height)
    }
}

/// The visible window onto the document.
///
/// The visible region is `[scroll_x, scroll_x + width] × [scroll_y, scroll_y + height]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Viewport of the given size with no scroll offset.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width,
            height,
        }
    }

    /// Set the scroll offset.
    #[inline]
    #[must_use]
    pub const fn scrolled(mut self, scroll_x: f64, scroll_y: f64) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }

    /// Far horizontal edge of the visible region.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.scroll_x + self.width
    }

    /// Far vertical edge of the visible region.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.scroll_y + self.height
    }

    /// True when `rect` lies entirely inside the visible region.
    #[must_use]
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.left >= self.scroll_x
            && rect.top >= self.scroll_y
            && rect.right() <= self.right()
            && rect.bottom() <= self.bottom()
    }
}
