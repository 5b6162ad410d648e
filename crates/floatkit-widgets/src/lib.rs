#![forbid(unsafe_code)]

//! Widgets: the tooltip popup and its visibility lifecycle.
//!
//! # Role in floatkit
//! `floatkit-widgets` is where host input meets the placement solver. A host
//! feeds [`TooltipProps`] and visibility changes in, a renderer feeds
//! transition-finished events in, and each call to [`TooltipPopup::frame`]
//! yields an [`OverlayFrame`] saying whether to mount, where to paint and
//! how opaque to be.

pub mod config;
pub mod tooltip;
pub mod visibility;

pub use config::{TooltipConfig, TooltipConfigError, TooltipConfigParse};
pub use tooltip::{
    Opacity, OverlayFrame, TOOLTIP_ROLE, TooltipPopup, TooltipProps, TransitionSpec,
};
pub use visibility::{OverlayVisibility, VisibilityMachine};
