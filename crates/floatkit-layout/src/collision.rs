#![forbid(unsafe_code)]

//! Viewport edge collision flags.

use bitflags::bitflags;
use floatkit_core::{Rect, Side, Viewport};

bitflags! {
    /// Viewport edges a candidate overlay rect crosses.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Collisions: u8 {
        const TOP = 1 << 0;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 3;
    }
}

impl Collisions {
    /// Every edge `rect` crosses when shown in `viewport`.
    #[must_use]
    pub fn detect(rect: &Rect, viewport: &Viewport) -> Self {
        let mut hits = Self::empty();
        hits.set(Self::TOP, rect.top < viewport.scroll_y);
        hits.set(Self::RIGHT, rect.right() > viewport.right());
        hits.set(Self::BOTTOM, rect.bottom() > viewport.bottom());
        hits.set(Self::LEFT, rect.left < viewport.scroll_x);
        hits
    }

    /// The flag for a single side.
    #[inline]
    #[must_use]
    pub const fn for_side(side: Side) -> Self {
        match side {
            Side::Top => Self::TOP,
            Side::Right => Self::RIGHT,
            Side::Bottom => Self::BOTTOM,
            Side::Left => Self::LEFT,
        }
    }

    /// True if the edge facing `side` is crossed.
    #[inline]
    #[must_use]
    pub fn hits(self, side: Side) -> bool {
        self.contains(Self::for_side(side))
    }
}
