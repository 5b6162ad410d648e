#![forbid(unsafe_code)]

//! Tooltip popup controller.
//!
//! Ties together host props, the [`VisibilityMachine`], a [`RectProvider`]
//! and the placement solver, and hands the renderer an [`OverlayFrame`]
//! describing what to do this frame.
//!
//! # Invariants
//!
//! 1. The popup stays mounted for every phase except `Hidden`, so it can be
//!    measured before it is ever painted.
//! 2. A position is only reported when both rects are measured and some side
//!    is collision-free; otherwise the popup is mounted but not painted.
//! 3. The popup only turns opaque once it is desired and has a measured size.
//!
//! # Example
//!
//! ```
//! use floatkit_core::{Measurement, Rect, Side, Viewport};
//! use floatkit_widgets::{TooltipPopup, TooltipProps};
//!
//! let props = TooltipProps::new("Save changes").position(Side::Top);
//! const SAVE_BUTTON: u32 = 1;
//! const SAVE_TOOLTIP: u32 = 2;
//!
//! let mut popup = TooltipPopup::new(props, SAVE_BUTTON, SAVE_TOOLTIP);
//! popup.set_visible(true);
//!
//! let provider = |id: &u32| match *id {
//!     SAVE_BUTTON => Measurement::Measured(Rect::new(100.0, 100.0, 50.0, 20.0)),
//!     _ => Measurement::Measured(Rect::with_size(80.0, 30.0)),
//! };
//! let frame = popup.frame(&provider, Viewport::new(1000.0, 800.0));
//! assert!(frame.is_painted());
//! ```

use std::fmt;

use floatkit_core::{Measurement, Position, Rect, RectProvider, Side, Viewport};
use floatkit_layout::{PlacementConfig, PositionRequest, PositionResult, Suppression};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::trace;

use crate::config::TooltipConfig;
use crate::visibility::{OverlayVisibility, VisibilityMachine};

/// Accessibility role the renderer should give the popup element.
pub const TOOLTIP_ROLE: &str = "tooltip";

/// Props a host passes to a tooltip.
///
/// Deserializes from camelCase keys. Side names are checked strictly: an
/// unknown `position` is a hard error rather than a silent default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipProps {
    /// Popup content. Opaque to placement.
    pub label: String,
    #[serde(default)]
    pub position: Side,
    #[serde(default)]
    pub fallback_position: Option<Side>,
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub delay_ms: u64,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default = "default_timing_fn")]
    pub timing_fn: String,
}

fn default_duration_ms() -> u64 {
    TooltipConfig::default().duration_ms
}

fn default_timing_fn() -> String {
    TooltipConfig::default().timing_fn
}

impl TooltipProps {
    /// Props with default config values and the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self::from_config(label, &TooltipConfig::default())
    }

    /// Props seeded from a config.
    #[must_use]
    pub fn from_config(label: impl Into<String>, config: &TooltipConfig) -> Self {
        Self {
            label: label.into(),
            position: config.position,
            fallback_position: config.fallback_position,
            visible: false,
            delay_ms: config.delay_ms,
            duration_ms: config.duration_ms,
            timing_fn: config.timing_fn.clone(),
        }
    }

    #[must_use]
    pub fn position(mut self, side: Side) -> Self {
        self.position = side;
        self
    }

    #[must_use]
    pub fn fallback_position(mut self, side: Option<Side>) -> Self {
        self.fallback_position = side;
        self
    }

    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn delay_ms(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = ms;
        self
    }

    #[must_use]
    pub fn timing_fn(mut self, timing_fn: impl Into<String>) -> Self {
        self.timing_fn = timing_fn.into();
        self
    }

    /// The opacity transition these props describe.
    #[must_use]
    pub fn transition(&self) -> TransitionSpec {
        TransitionSpec {
            delay_ms: self.delay_ms,
            duration_ms: self.duration_ms,
            timing_fn: self.timing_fn.clone(),
        }
    }
}

/// Opacity fade parameters, passed through untouched to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionSpec {
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub timing_fn: String,
}

impl fmt::Display for TransitionSpec {
    /// CSS `transition` shorthand, e.g. `opacity 200ms ease 0ms`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "opacity {}ms {} {}ms",
            self.duration_ms, self.timing_fn, self.delay_ms
        )
    }
}

/// Target opacity of the popup element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opacity {
    Transparent,
    Opaque,
}

/// Everything the renderer needs for one frame of a tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    pub visibility: OverlayVisibility,
    pub placement: PositionResult,
    /// Side the popup landed on, if placed.
    pub side: Option<Side>,
    pub opacity: Opacity,
    pub transition: TransitionSpec,
}

impl OverlayFrame {
    /// Popup must be present in the layout tree.
    #[inline]
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.visibility.is_mounted()
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.placement.position()
    }

    /// Popup is mounted and has somewhere to go.
    #[inline]
    #[must_use]
    pub fn is_painted(&self) -> bool {
        self.is_mounted() && self.position().is_some()
    }
}

/// A tooltip bound to an anchor element and its own popup element.
///
/// `H` names elements for the [`RectProvider`]; the popup handle refers to
/// the overlay element the renderer mounts.
#[derive(Debug, Clone)]
pub struct TooltipPopup<H> {
    props: TooltipProps,
    anchor: H,
    popup: H,
    machine: VisibilityMachine,
    placement: PlacementConfig,
}

impl<H> TooltipPopup<H> {
    /// Create a popup. Starts `Appearing` if `props.visible` is set.
    #[must_use]
    pub fn new(props: TooltipProps, anchor: H, popup: H) -> Self {
        let machine = VisibilityMachine::with_visible(props.visible);
        Self {
            props,
            anchor,
            popup,
            machine,
            placement: PlacementConfig::default(),
        }
    }

    /// Set placement solver settings.
    #[must_use]
    pub fn placement(mut self, placement: PlacementConfig) -> Self {
        self.placement = placement;
        self
    }

    #[inline]
    #[must_use]
    pub fn props(&self) -> &TooltipProps {
        &self.props
    }

    #[inline]
    #[must_use]
    pub fn visibility(&self) -> OverlayVisibility {
        self.machine.current()
    }

    /// Replace the props, forwarding a change of `visible` to the machine.
    pub fn set_props(&mut self, props: TooltipProps) {
        let visible = props.visible;
        self.props = props;
        self.set_visible(visible);
    }

    /// Host changed the desired visibility.
    pub fn set_visible(&mut self, visible: bool) -> OverlayVisibility {
        self.props.visible = visible;
        self.machine.set_desired_visible(visible)
    }

    /// Renderer finished the current opacity transition.
    pub fn on_transition_end(&mut self) -> OverlayVisibility {
        self.machine.on_transition_finished()
    }

    /// Measure, place and describe the popup for this frame.
    ///
    /// Call again whenever visibility toggles, the viewport scrolls or
    /// resizes, or a measurement settles; nothing is cached between calls.
    #[must_use]
    pub fn frame<P>(&self, provider: &P, viewport: Viewport) -> OverlayFrame
    where
        P: RectProvider<H> + ?Sized,
    {
        let visibility = self.machine.current();
        if !visibility.is_mounted() {
            return OverlayFrame {
                visibility,
                placement: PositionResult::Suppressed(Suppression::PendingMeasurement),
                side: None,
                opacity: Opacity::Transparent,
                transition: self.props.transition(),
            };
        }

        let anchor = provider.measure(&self.anchor);
        let popup = provider.measure(&self.popup);
        let request = PositionRequest::new(
            measured_or_empty(anchor),
            measured_or_empty(popup),
            self.props.position,
        )
        .fallback(self.props.fallback_position);
        let resolution = self.placement.resolve(&request, viewport);

        let opacity = if self.machine.desired() && !popup.is_pending() {
            Opacity::Opaque
        } else {
            Opacity::Transparent
        };

        #[cfg(feature = "tracing")]
        trace!(
            visibility = visibility.as_str(),
            placed = !resolution.result.is_suppressed(),
            attempts = resolution.attempts().len(),
            "tooltip frame"
        );

        OverlayFrame {
            visibility,
            placement: resolution.result,
            side: resolution.side,
            opacity,
            transition: self.props.transition(),
        }
    }
}

fn measured_or_empty(measurement: Measurement) -> Rect {
    measurement.rect().unwrap_or_default()
}
