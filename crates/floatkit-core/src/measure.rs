#![forbid(unsafe_code)]

//! Rect measurement seam.
//!
//! Reading on-screen layout is a side effect owned by the host view layer.
//! [`RectProvider`] isolates it so placement math stays pure and testable
//! without a rendering surface.
//!
//! Providers must be re-queried whenever overlay visibility toggles or the
//! window resizes or scrolls; nothing here caches.

use crate::geometry::Rect;

/// Result of measuring an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Measurement {
    /// The element is laid out with a positive size.
    Measured(Rect),
    /// Not mounted yet, or laid out with zero size.
    #[default]
    Pending,
}

impl Measurement {
    /// Classify a raw rect, demoting zero-sized or non-finite ones to `Pending`.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        if rect.is_measured() {
            Self::Measured(rect)
        } else {
            Self::Pending
        }
    }

    #[inline]
    #[must_use]
    pub fn rect(self) -> Option<Rect> {
        match self {
            Self::Measured(rect) => Some(rect),
            Self::Pending => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<Option<Rect>> for Measurement {
    fn from(rect: Option<Rect>) -> Self {
        rect.map_or(Self::Pending, Self::from_rect)
    }
}

/// Source of element bounding rectangles.
///
/// `H` is whatever handle the host uses to name an element (a node id, a
/// ref, a widget key).
pub trait RectProvider<H: ?Sized> {
    /// Current bounding rect of `handle`.
    fn measure(&self, handle: &H) -> Measurement;
}

impl<H: ?Sized, F> RectProvider<H> for F
where
    F: Fn(&H) -> Measurement,
{
    fn measure(&self, handle: &H) -> Measurement {
        self(handle)
    }
}
