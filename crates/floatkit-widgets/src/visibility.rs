#![forbid(unsafe_code)]

//! Overlay visibility lifecycle.
//!
//! An overlay is not simply "shown" or "hidden": it has to be mounted before
//! it can be measured and placed, and it must stay mounted while it fades
//! out. [`OverlayVisibility`] models the four phases and its transition
//! functions are pure; [`VisibilityMachine`] pairs a state with the latest
//! desired-visible input for hosts that want a mutable handle.
//!
//! # Transitions
//!
//! | state          | desired → true | desired → false | transition finished        |
//! |----------------|----------------|-----------------|----------------------------|
//! | `Hidden`       | `Appearing`    | -               | -                          |
//! | `Appearing`    | -              | `Disappearing`  | `Shown` (if desired)       |
//! | `Shown`        | -              | `Disappearing`  | -                          |
//! | `Disappearing` | `Appearing`    | -               | `Hidden` (if not desired)  |
//!
//! A flip mid-transition takes effect at once. Transition-finished events are
//! read against the current desired flag, so a late fade-out completion that
//! arrives after the overlay was re-requested can never hide it.

#[cfg(feature = "tracing")]
use tracing::debug;

/// Phase of an overlay's mount/fade lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverlayVisibility {
    /// Not mounted.
    #[default]
    Hidden,
    /// Mounted and fading in. Placement may be recomputed every frame while
    /// measurements settle.
    Appearing,
    /// Mounted and fully visible.
    Shown,
    /// Still mounted, fading out.
    Disappearing,
}

impl OverlayVisibility {
    /// Next state after the host changes the desired visibility.
    #[must_use]
    pub const fn on_desired_visible_changed(self, desired: bool) -> Self {
        match (self, desired) {
            (Self::Hidden | Self::Disappearing, true) => Self::Appearing,
            (Self::Appearing | Self::Shown, false) => Self::Disappearing,
            (state, _) => state,
        }
    }

    /// Next state after the renderer reports a finished transition.
    #[must_use]
    pub const fn on_transition_finished(self, desired: bool) -> Self {
        match (self, desired) {
            (Self::Appearing, true) => Self::Shown,
            (Self::Disappearing, false) => Self::Hidden,
            (state, _) => state,
        }
    }

    /// True while the overlay must stay in the layout tree.
    #[inline]
    #[must_use]
    pub const fn is_mounted(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    #[inline]
    #[must_use]
    pub const fn is_transitioning(self) -> bool {
        matches!(self, Self::Appearing | Self::Disappearing)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Appearing => "appearing",
            Self::Shown => "shown",
            Self::Disappearing => "disappearing",
        }
    }
}

/// Mutable visibility tracker driven by the host and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityMachine {
    state: OverlayVisibility,
    desired: bool,
}

impl VisibilityMachine {
    /// A hidden overlay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: OverlayVisibility::Hidden,
            desired: false,
        }
    }

    /// Machine for an overlay whose first desired value is `visible`.
    #[must_use]
    pub const fn with_visible(visible: bool) -> Self {
        Self {
            state: OverlayVisibility::Hidden.on_desired_visible_changed(visible),
            desired: visible,
        }
    }

    /// Record a new desired-visible value from the host.
    pub fn set_desired_visible(&mut self, visible: bool) -> OverlayVisibility {
        self.desired = visible;
        self.advance(self.state.on_desired_visible_changed(visible), "desired_visible")
    }

    /// Record a transition-finished event from the renderer.
    pub fn on_transition_finished(&mut self) -> OverlayVisibility {
        self.advance(
            self.state.on_transition_finished(self.desired),
            "transition_finished",
        )
    }

    #[inline]
    #[must_use]
    pub const fn current(&self) -> OverlayVisibility {
        self.state
    }

    /// Latest desired-visible value.
    #[inline]
    #[must_use]
    pub const fn desired(&self) -> bool {
        self.desired
    }

    #[inline]
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.state.is_mounted()
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn advance(&mut self, next: OverlayVisibility, cause: &'static str) -> OverlayVisibility {
        if next != self.state {
            #[cfg(feature = "tracing")]
            debug!(
                from = self.state.as_str(),
                to = next.as_str(),
                cause,
                desired = self.desired,
                "overlay visibility transition"
            );
            self.state = next;
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OverlayVisibility::*;

    // ── Pure transitions ──────────────────────────────────────────────

    #[test]
    fn show_sequence() {
        assert_eq!(Hidden.on_desired_visible_changed(true), Appearing);
        assert_eq!(Appearing.on_transition_finished(true), Shown);
    }

    #[test]
    fn hide_sequence() {
        assert_eq!(Shown.on_desired_visible_changed(false), Disappearing);
        assert_eq!(Appearing.on_desired_visible_changed(false), Disappearing);
        assert_eq!(Disappearing.on_transition_finished(false), Hidden);
    }

    #[test]
    fn reshow_during_fade_out() {
        assert_eq!(Disappearing.on_desired_visible_changed(true), Appearing);
    }

    #[test]
    fn redundant_inputs_are_no_ops() {
        assert_eq!(Hidden.on_desired_visible_changed(false), Hidden);
        assert_eq!(Disappearing.on_desired_visible_changed(false), Disappearing);
        assert_eq!(Appearing.on_desired_visible_changed(true), Appearing);
        assert_eq!(Shown.on_desired_visible_changed(true), Shown);
        assert_eq!(Hidden.on_transition_finished(false), Hidden);
        assert_eq!(Shown.on_transition_finished(true), Shown);
    }

    #[test]
    fn finish_never_contradicts_desired() {
        assert_eq!(Disappearing.on_transition_finished(true), Disappearing);
        assert_eq!(Appearing.on_transition_finished(false), Appearing);
    }

    #[test]
    fn only_hidden_is_unmounted() {
        assert!(!Hidden.is_mounted());
        for s in [Appearing, Shown, Disappearing] {
            assert!(s.is_mounted(), "{s:?} should be mounted");
        }
        assert!(Appearing.is_transitioning() && Disappearing.is_transitioning());
        assert!(!Hidden.is_transitioning() && !Shown.is_transitioning());
    }

    // ── Machine ───────────────────────────────────────────────────────

    #[test]
    fn flip_flop_before_any_finish_skips_shown_and_hidden() {
        let mut m = VisibilityMachine::new();
        let mut seen = vec![m.current()];
        seen.push(m.set_desired_visible(true));
        seen.push(m.set_desired_visible(false));
        seen.push(m.set_desired_visible(true));
        assert_eq!(seen, vec![Hidden, Appearing, Disappearing, Appearing]);
    }

    #[test]
    fn stale_fade_out_completion_does_not_hide() {
        let mut m = VisibilityMachine::with_visible(true);
        m.on_transition_finished();
        m.set_desired_visible(false);
        m.set_desired_visible(true);
        // Completion of the aborted fade-out arrives late.
        assert_eq!(m.on_transition_finished(), Shown);
        assert!(m.is_mounted());
    }

    #[test]
    fn full_cycle() {
        let mut m = VisibilityMachine::new();
        assert_eq!(m.set_desired_visible(true), Appearing);
        assert_eq!(m.on_transition_finished(), Shown);
        assert_eq!(m.set_desired_visible(false), Disappearing);
        assert!(m.is_mounted());
        assert_eq!(m.on_transition_finished(), Hidden);
        assert!(!m.is_mounted());
        assert!(!m.desired());
    }

    #[test]
    fn initially_visible_starts_appearing() {
        assert_eq!(VisibilityMachine::with_visible(true).current(), Appearing);
        assert_eq!(VisibilityMachine::with_visible(false).current(), Hidden);
    }
}
