#![forbid(unsafe_code)]

//! Core: geometry, sides, viewport bounds, and the rect measurement seam.
//!
//! # Role in floatkit
//! `floatkit-core` holds the value types every other crate speaks in. It has
//! no notion of drawing; it only describes where things are.
//!
//! # Primary responsibilities
//! - **Rect / Position / Viewport**: document pixel geometry.
//! - **Side**: the compass edge an overlay attaches to, with cyclic fallback order.
//! - **RectProvider**: the side-effecting "measure this element" seam, kept
//!   out of the pure placement math.
//!
//! # How it fits in the system
//! The placement solver (`floatkit-layout`) maps core types to a position, and
//! the tooltip controller (`floatkit-widgets`) pulls measurements through
//! [`measure::RectProvider`] before handing them to the solver.

pub mod geometry;
pub mod logging;
pub mod measure;
pub mod side;

pub use geometry::{Position, Rect, Viewport};
pub use measure::{Measurement, RectProvider};
pub use side::{ParseSideError, Side};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
