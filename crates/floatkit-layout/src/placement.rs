#![forbid(unsafe_code)]

//! Collision-aware overlay placement.
//!
//! # Invariants
//!
//! 1. Pure: the result depends only on the request, the viewport and the
//!    configured offset.
//! 2. Pending measurements (zero or non-finite size) are never used for
//!    geometry; they yield [`Suppression::PendingMeasurement`].
//! 3. A side is attempted at most once per resolution, so resolution ends
//!    after at most four attempts.
//! 4. The explicit fallback, when present, is the first side tried after the
//!    preferred one collides, and is honoured only once.
//! 5. An accepted position never extends past the far viewport edges and,
//!    when the overlay fits the viewport, never starts before the near ones.
//!
//! # Decision rule
//!
//! Only the edge facing the attempted side is checked: a `Top` candidate is
//! rejected for crossing the top of the viewport, never for crossing its
//! left. Spill on the other axis is handled by clamping the accepted
//! candidate instead.

use floatkit_core::{Position, Rect, Side, Viewport};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::collision::Collisions;

/// Gap in pixels between the anchor edge and the overlay.
pub const DEFAULT_OFFSET: f64 = 8.0;

/// Inputs for a single placement resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionRequest {
    /// Anchor bounds relative to the viewport origin.
    pub anchor: Rect,
    /// Overlay bounds; only the size is used.
    pub overlay: Rect,
    /// Side tried first. Reaching it again ends the rotation.
    pub preferred: Side,
    /// Side tried right after the preferred one collides.
    #[serde(default)]
    pub explicit_fallback: Option<Side>,
}

impl PositionRequest {
    /// Request with no explicit fallback.
    #[must_use]
    pub const fn new(anchor: Rect, overlay: Rect, preferred: Side) -> Self {
        Self {
            anchor,
            overlay,
            preferred,
            explicit_fallback: None,
        }
    }

    /// Set the explicit fallback side.
    #[must_use]
    pub const fn fallback(mut self, side: Option<Side>) -> Self {
        self.explicit_fallback = side;
        self
    }
}

/// Why an overlay must not be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suppression {
    /// Anchor or overlay has not been laid out with a positive size yet.
    /// Transient; retry on the next measurement.
    PendingMeasurement,
    /// Every reachable side collides with the viewport.
    NoCollisionFreeSide,
}

/// Outcome of placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PositionResult {
    Placed(Position),
    Suppressed(Suppression),
}

impl PositionResult {
    #[inline]
    #[must_use]
    pub fn position(self) -> Option<Position> {
        match self {
            Self::Placed(pos) => Some(pos),
            Self::Suppressed(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_suppressed(self) -> bool {
        matches!(self, Self::Suppressed(_))
    }
}

/// Sides tried during one resolution, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Attempts {
    sides: [Side; 4],
    len: usize,
}

impl Attempts {
    fn push(&mut self, side: Side) {
        debug_assert!(self.len < self.sides.len(), "side rotation exceeded four attempts");
        if let Some(slot) = self.sides.get_mut(self.len) {
            *slot = side;
            self.len += 1;
        }
    }

    fn as_slice(&self) -> &[Side] {
        &self.sides[..self.len]
    }
}

/// A placement result together with the path taken to reach it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub result: PositionResult,
    /// Side the overlay ended up on, if placed.
    pub side: Option<Side>,
    attempts: Attempts,
}

impl Resolution {
    /// Sides attempted, in order. Empty when measurements were pending.
    #[must_use]
    pub fn attempts(&self) -> &[Side] {
        self.attempts.as_slice()
    }
}

/// Placement solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Gap between anchor and overlay (default: 8).
    pub offset: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
        }
    }
}

impl PlacementConfig {
    /// Set the anchor/overlay gap.
    #[must_use]
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Unclamped position of the overlay on `side`.
    ///
    /// Vertical sides centre the overlay horizontally on the anchor;
    /// horizontal sides centre it vertically.
    #[must_use]
    pub fn candidate(&self, request: &PositionRequest, side: Side, viewport: &Viewport) -> Position {
        let a = request.anchor;
        let o = request.overlay;
        let origin_x = a.left + viewport.scroll_x;
        let origin_y = a.top + viewport.scroll_y;

        match side {
            Side::Top => Position::new(
                origin_y - o.height - self.offset,
                origin_x + (a.width - o.width) / 2.0,
            ),
            Side::Bottom => Position::new(
                origin_y + a.height + self.offset,
                origin_x + (a.width - o.width) / 2.0,
            ),
            Side::Right => Position::new(
                origin_y + (a.height - o.height) / 2.0,
                origin_x + a.width + self.offset,
            ),
            Side::Left => Position::new(
                origin_y + (a.height - o.height) / 2.0,
                origin_x - o.width - self.offset,
            ),
        }
    }

    /// Resolve a request, recording every side attempted.
    #[must_use]
    pub fn resolve(&self, request: &PositionRequest, viewport: Viewport) -> Resolution {
        let mut attempts = Attempts::default();

        if !request.anchor.is_measured() || !request.overlay.is_measured() {
            #[cfg(feature = "tracing")]
            debug!(
                anchor_measured = request.anchor.is_measured(),
                overlay_measured = request.overlay.is_measured(),
                "placement suppressed: pending measurement"
            );
            return Resolution {
                result: PositionResult::Suppressed(Suppression::PendingMeasurement),
                side: None,
                attempts,
            };
        }

        let original = request.preferred;
        let mut side = original;
        let mut fallback = request.explicit_fallback;

        loop {
            attempts.push(side);
            let candidate = self.candidate(request, side, &viewport);
            let collisions = Collisions::detect(&candidate.to_rect(request.overlay), &viewport);

            #[cfg(feature = "tracing")]
            trace!(
                side = side.as_str(),
                top = candidate.top,
                left = candidate.left,
                collisions = collisions.bits(),
                "placement attempt"
            );

            if !collisions.hits(side) {
                return Resolution {
                    result: PositionResult::Placed(clamp(candidate, &request.overlay, &viewport)),
                    side: Some(side),
                    attempts,
                };
            }

            let next = fallback.take().unwrap_or_else(|| side.next());
            if next == original {
                #[cfg(feature = "tracing")]
                debug!(
                    preferred = original.as_str(),
                    attempts = attempts.len,
                    "placement suppressed: no collision-free side"
                );
                return Resolution {
                    result: PositionResult::Suppressed(Suppression::NoCollisionFreeSide),
                    side: None,
                    attempts,
                };
            }
            side = next;
        }
    }

    /// Resolve a request to a position or a suppression.
    #[inline]
    #[must_use]
    pub fn compute(&self, request: &PositionRequest, viewport: Viewport) -> PositionResult {
        self.resolve(request, viewport).result
    }
}

/// Place an overlay with the default offset.
#[inline]
#[must_use]
pub fn compute_position(request: &PositionRequest, viewport: Viewport) -> PositionResult {
    PlacementConfig::default().compute(request, viewport)
}

/// Keep an accepted candidate on screen.
///
/// Far edges keep a one pixel margin. The near edge wins when the overlay is
/// larger than the viewport.
fn clamp(pos: Position, overlay: &Rect, viewport: &Viewport) -> Position {
    let top = pos
        .top
        .min(viewport.bottom() - overlay.height - 1.0)
        .max(viewport.scroll_y);
    let left = pos
        .left
        .min(viewport.right() - overlay.width - 1.0)
        .max(viewport.scroll_x);
    Position::new(top, left)
}
