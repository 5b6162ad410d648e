#![forbid(unsafe_code)]

//! Overlay placement for floatkit.
//!
//! Given an anchor rect, an overlay size, a preferred [`Side`] and the
//! viewport, [`compute_position`] finds where the overlay goes, rotating
//! through fallback sides when the preferred one would clip, or reports
//! that the overlay must stay hidden.
//!
//! # Example
//!
//! ```
//! use floatkit_core::{Position, Rect, Side, Viewport};
//! use floatkit_layout::{PositionRequest, PositionResult, compute_position};
//!
//! let request = PositionRequest::new(
//!     Rect::new(100.0, 100.0, 50.0, 20.0),
//!     Rect::with_size(80.0, 30.0),
//!     Side::Top,
//! );
//! let result = compute_position(&request, Viewport::new(1000.0, 800.0));
//! assert_eq!(result, PositionResult::Placed(Position::new(62.0, 85.0)));
//! ```

pub mod collision;
pub mod placement;

pub use collision::Collisions;
pub use floatkit_core::Side;
pub use placement::{
    DEFAULT_OFFSET, PlacementConfig, PositionRequest, PositionResult, Resolution, Suppression,
    compute_position,
};
