//! End-to-end tooltip lifecycle against a scripted layout.
//!
//! The fake layout only reports a size for the popup once the renderer has
//! mounted it, mirroring a real view layer where an unmounted element has no
//! box. Each test drives the popup the way a host event loop would.

use std::cell::Cell;
use std::collections::HashMap;

use floatkit_core::{Measurement, Position, Rect, RectProvider, Side, Viewport};
use floatkit_layout::{PositionResult, Suppression};
use floatkit_widgets::{
    Opacity, OverlayVisibility, TOOLTIP_ROLE, TooltipPopup, TooltipProps, VisibilityMachine,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Node {
    Anchor,
    Popup,
}

/// Layout that knows element boxes and whether the popup is in the tree.
struct FakeLayout {
    boxes: HashMap<Node, Rect>,
    popup_mounted: Cell<bool>,
}

impl FakeLayout {
    fn new(anchor: Rect, popup_size: Rect) -> Self {
        let mut boxes = HashMap::new();
        boxes.insert(Node::Anchor, anchor);
        boxes.insert(Node::Popup, popup_size);
        Self {
            boxes,
            popup_mounted: Cell::new(false),
        }
    }
}

impl RectProvider<Node> for FakeLayout {
    fn measure(&self, handle: &Node) -> Measurement {
        if *handle == Node::Popup && !self.popup_mounted.get() {
            return Measurement::Pending;
        }
        self.boxes
            .get(handle)
            .copied()
            .map_or(Measurement::Pending, Measurement::from_rect)
    }
}

/// Minimal renderer: mounts/unmounts the popup according to the frame.
fn render(
    popup: &TooltipPopup<Node>,
    layout: &FakeLayout,
    viewport: Viewport,
) -> (bool, Option<Position>, Opacity) {
    let frame = popup.frame(layout, viewport);
    layout.popup_mounted.set(frame.is_mounted());
    (frame.is_mounted(), frame.position(), frame.opacity)
}

fn popup(props: TooltipProps) -> TooltipPopup<Node> {
    TooltipPopup::new(props, Node::Anchor, Node::Popup)
}

#[test]
fn first_frame_mounts_second_frame_places() {
    let layout = FakeLayout::new(Rect::new(100.0, 100.0, 50.0, 20.0), Rect::with_size(80.0, 30.0));
    let viewport = Viewport::new(1000.0, 800.0);
    let mut tip = popup(TooltipProps::new("Copy"));

    assert_eq!(render(&tip, &layout, viewport), (false, None, Opacity::Transparent));

    tip.set_visible(true);
    // Mounted but not yet measurable: invisible and unplaced.
    assert_eq!(render(&tip, &layout, viewport), (true, None, Opacity::Transparent));
    // Layout settled: placed above the anchor and fading in.
    assert_eq!(
        render(&tip, &layout, viewport),
        (true, Some(Position::new(62.0, 85.0)), Opacity::Opaque)
    );

    tip.on_transition_end();
    assert_eq!(tip.visibility(), OverlayVisibility::Shown);
}

#[test]
fn scroll_and_resize_requery_placement() {
    let layout = FakeLayout::new(Rect::new(100.0, 40.0, 50.0, 20.0), Rect::with_size(80.0, 30.0));
    let tip = popup(TooltipProps::new("Copy").visible(true));
    layout.popup_mounted.set(true);

    let at_rest = tip.frame(&layout, Viewport::new(1000.0, 800.0));
    assert_eq!(at_rest.side, Some(Side::Top));

    // Anchor rect is viewport-relative; scrolling the document moves the
    // candidate with it, so the top side still fits.
    let scrolled = tip.frame(&layout, Viewport::new(1000.0, 800.0).scrolled(0.0, 400.0));
    assert_eq!(scrolled.position().map(|p| p.top), Some(402.0));

    // Narrow viewport: top fits but is clamped on the cross axis.
    let narrow = tip.frame(&layout, Viewport::new(120.0, 800.0));
    assert_eq!(narrow.side, Some(Side::Top));
    assert_eq!(narrow.position().map(|p| p.left), Some(39.0));
}

#[test]
fn no_room_anywhere_stays_mounted_but_unpainted() {
    let layout = FakeLayout::new(Rect::new(40.0, 40.0, 20.0, 20.0), Rect::with_size(300.0, 300.0));
    let tip = popup(TooltipProps::new("Huge").visible(true));
    layout.popup_mounted.set(true);

    let frame = tip.frame(&layout, Viewport::new(100.0, 100.0));
    assert!(frame.is_mounted());
    assert!(!frame.is_painted());
    assert_eq!(
        frame.placement,
        PositionResult::Suppressed(Suppression::NoCollisionFreeSide)
    );
}

#[test]
fn fade_out_then_unmount() {
    let layout = FakeLayout::new(Rect::new(100.0, 100.0, 50.0, 20.0), Rect::with_size(80.0, 30.0));
    let viewport = Viewport::new(1000.0, 800.0);
    let mut tip = popup(TooltipProps::new("Copy").visible(true));
    render(&tip, &layout, viewport);
    render(&tip, &layout, viewport);
    tip.on_transition_end();

    tip.set_visible(false);
    let (mounted, position, opacity) = render(&tip, &layout, viewport);
    assert!(mounted);
    assert!(position.is_some());
    assert_eq!(opacity, Opacity::Transparent);

    tip.on_transition_end();
    assert_eq!(render(&tip, &layout, viewport), (false, None, Opacity::Transparent));
    assert!(!layout.popup_mounted.get());
}

#[test]
fn reshow_mid_fade_out_never_unmounts() {
    let layout = FakeLayout::new(Rect::new(100.0, 100.0, 50.0, 20.0), Rect::with_size(80.0, 30.0));
    let viewport = Viewport::new(1000.0, 800.0);
    let mut tip = popup(TooltipProps::new("Copy"));

    let mut phases = vec![tip.visibility()];
    phases.push(tip.set_visible(true));
    render(&tip, &layout, viewport);
    phases.push(tip.set_visible(false));
    render(&tip, &layout, viewport);
    phases.push(tip.set_visible(true));
    assert!(render(&tip, &layout, viewport).0);

    assert_eq!(
        phases,
        vec![
            OverlayVisibility::Hidden,
            OverlayVisibility::Appearing,
            OverlayVisibility::Disappearing,
            OverlayVisibility::Appearing,
        ]
    );
}

#[test]
fn role_is_tooltip() {
    assert_eq!(TOOLTIP_ROLE, "tooltip");
}

// ═════════════════════════════════════════════════════════════════════════
// Visibility machine invariants over arbitrary event sequences
// ═════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy)]
enum Event {
    Desired(bool),
    Finished,
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        any::<bool>().prop_map(Event::Desired),
        Just(Event::Finished),
    ]
}

proptest! {
    #[test]
    fn machine_state_tracks_desired(events in proptest::collection::vec(event_strategy(), 0..64)) {
        let mut machine = VisibilityMachine::new();
        // A transition-finished event seen since the desired value last changed.
        let mut finished_since_change = false;

        for event in events {
            match event {
                Event::Desired(v) => {
                    if v != machine.desired() {
                        finished_since_change = false;
                    }
                    machine.set_desired_visible(v);
                }
                Event::Finished => {
                    machine.on_transition_finished();
                    finished_since_change = true;
                }
            }

            let state = machine.current();
            if machine.desired() {
                prop_assert!(
                    matches!(state, OverlayVisibility::Appearing | OverlayVisibility::Shown),
                    "desired but {:?}", state
                );
            } else {
                prop_assert!(
                    matches!(state, OverlayVisibility::Hidden | OverlayVisibility::Disappearing),
                    "not desired but {:?}", state
                );
                if finished_since_change {
                    prop_assert_eq!(state, OverlayVisibility::Hidden);
                }
            }
            if state == OverlayVisibility::Shown {
                prop_assert!(finished_since_change, "shown without a finished transition");
            }
        }
    }
}
