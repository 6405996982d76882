//! Property-based tests for the interaction state
//!
//! Uses proptest to verify the invariants the page relies on: bounded,
//! monotonic tilt; exact return to rest; coarse pointers never tilting; and
//! the toggle state machines never flickering.

use proptest::prelude::*;
use portfolio_core::motion::{
    settle, tilt_angles, Animated, Magnetic, MagneticConfig, PointerCapability, SurfaceRect,
    TiltConfig, TiltPose, TiltSurface,
};
use portfolio_core::{ProjectFocus, ScrollChrome, Theme, PROJECTS};

const FRAME: f64 = 1.0 / 60.0;

// ============================================================================
// Strategy Generators
// ============================================================================

/// A card-sized rectangle somewhere on screen
fn rect_strategy() -> impl Strategy<Value = SurfaceRect> {
    (-500.0..2000.0f64, -500.0..4000.0f64, 1.0..1200.0f64, 1.0..900.0f64)
        .prop_map(|(left, top, width, height)| SurfaceRect::new(left, top, width, height))
}

/// Pointer events a user can produce over a card
#[derive(Debug, Clone)]
enum PointerOp {
    Enter,
    Move(f64, f64),
    Leave,
    Press,
    Release,
    Frame,
}

fn pointer_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<PointerOp>> {
    prop::collection::vec(
        prop_oneof![
            1 => Just(PointerOp::Enter),
            4 => (-3000.0..3000.0f64, -3000.0..5000.0f64).prop_map(|(x, y)| PointerOp::Move(x, y)),
            1 => Just(PointerOp::Leave),
            1 => Just(PointerOp::Press),
            1 => Just(PointerOp::Release),
            3 => Just(PointerOp::Frame),
        ],
        0..max_ops,
    )
}

fn apply(surface: &mut TiltSurface, rect: SurfaceRect, op: &PointerOp) {
    match *op {
        PointerOp::Enter => surface.pointer_enter(),
        PointerOp::Move(x, y) => {
            surface.pointer_move(rect, x, y);
        }
        PointerOp::Leave => surface.pointer_leave(),
        PointerOp::Press => surface.press(),
        PointerOp::Release => surface.release(),
        PointerOp::Frame => {
            surface.advance(FRAME);
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Target angles never exceed the configured maximum
    #[test]
    fn tilt_is_bounded(
        rect in rect_strategy(),
        x in -5000.0..5000.0f64,
        y in -5000.0..5000.0f64,
        max in 0.0..45.0f64,
    ) {
        let (fx, fy) = rect.normalize(x, y).unwrap();
        let (rx, ry) = tilt_angles(max, fx, fy);
        prop_assert!(rx.abs() <= max + 1e-9);
        prop_assert!(ry.abs() <= max + 1e-9);
    }

    /// Moving right never decreases rotateY; moving down never increases rotateX
    #[test]
    fn tilt_is_monotonic(a in -0.5..0.5f64, b in -0.5..0.5f64, max in 0.0..45.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (_, ry_lo) = tilt_angles(max, lo, 0.0);
        let (_, ry_hi) = tilt_angles(max, hi, 0.0);
        prop_assert!(ry_lo <= ry_hi);
        let (rx_lo, _) = tilt_angles(max, 0.0, lo);
        let (rx_hi, _) = tilt_angles(max, 0.0, hi);
        prop_assert!(rx_lo >= rx_hi);
    }

    /// The exact center of any surface is neutral
    #[test]
    fn center_is_zero(rect in rect_strategy()) {
        let (cx, cy) = rect.center();
        let (fx, fy) = rect.normalize(cx, cy).unwrap();
        let (rx, ry) = tilt_angles(10.0, fx, fy);
        prop_assert!(rx.abs() < 1e-9);
        prop_assert!(ry.abs() < 1e-9);
    }

    /// Whatever happened before, leaving and settling lands exactly on neutral
    #[test]
    fn leave_always_returns_to_neutral(rect in rect_strategy(), ops in pointer_ops_strategy(40)) {
        let mut surface = TiltSurface::new(TiltConfig::project_card(), PointerCapability::Fine);
        for op in &ops {
            apply(&mut surface, rect, op);
        }
        surface.pointer_leave();
        settle(&mut surface, FRAME, 100_000);
        prop_assert_eq!(surface.pose(), TiltPose::NEUTRAL);
    }

    /// The animated pose never leaves the bound either
    #[test]
    fn animated_tilt_is_bounded(rect in rect_strategy(), ops in pointer_ops_strategy(60)) {
        let config = TiltConfig::skill_card();
        let mut surface = TiltSurface::new(config, PointerCapability::Fine);
        for op in &ops {
            apply(&mut surface, rect, op);
            let pose = surface.pose();
            prop_assert!(pose.rotate_x_deg.abs() <= config.max_degrees + 1e-9);
            prop_assert!(pose.rotate_y_deg.abs() <= config.max_degrees + 1e-9);
            prop_assert!((0.0..=100.0).contains(&pose.highlight_x_pct));
            prop_assert!((0.0..=100.0).contains(&pose.highlight_y_pct));
        }
    }

    /// Coarse pointers never produce tilt or highlight movement
    #[test]
    fn coarse_pointer_never_tilts(rect in rect_strategy(), ops in pointer_ops_strategy(60)) {
        let mut surface = TiltSurface::new(TiltConfig::skill_card(), PointerCapability::Coarse);
        for op in &ops {
            apply(&mut surface, rect, op);
            prop_assert!(surface.pose().is_neutral());
            prop_assert!(surface.target_pose().is_neutral());
        }
    }

    /// Magnetic offset returns to exactly zero after leave
    #[test]
    fn magnetic_leave_returns_to_zero(
        rect in rect_strategy(),
        moves in prop::collection::vec((-3000.0..3000.0f64, -3000.0..3000.0f64), 1..20),
        frames in 0..30usize,
    ) {
        let mut magnetic = Magnetic::new(MagneticConfig::default());
        magnetic.pointer_enter();
        for (x, y) in moves {
            magnetic.pointer_move(rect, x, y);
            for _ in 0..frames {
                magnetic.advance(FRAME);
            }
        }
        magnetic.press();
        magnetic.pointer_leave();
        settle(&mut magnetic, FRAME, 100_000);
        prop_assert_eq!(magnetic.offset(), (0.0, 0.0));
        prop_assert_eq!(magnetic.scale(), 1.0);
    }

    /// The scrolled flag only reports real transitions
    #[test]
    fn scroll_chrome_reports_only_transitions(offsets in prop::collection::vec(0.0..200.0f64, 0..100)) {
        let mut chrome = ScrollChrome::new(50.0);
        let mut previous = false;
        for offset in offsets {
            let expected = offset > 50.0;
            match chrome.observe(offset) {
                Some(now) => {
                    prop_assert_ne!(now, previous);
                    prop_assert_eq!(now, expected);
                    previous = now;
                }
                None => {
                    prop_assert_eq!(expected, previous);
                }
            }
            prop_assert_eq!(chrome.is_scrolled(), expected);
        }
    }

    /// Toggling an even number of times restores the theme; the document
    /// class always agrees with the state
    #[test]
    fn theme_toggles(count in 0..50usize) {
        let mut theme = Theme::default();
        for _ in 0..count {
            let now = theme.toggle();
            prop_assert_eq!(now.document_has_light_class(), now == Theme::Light);
        }
        prop_assert_eq!(theme == Theme::Dark, count % 2 == 0);
    }

    /// Focus always holds the last selection, or nothing after a dismiss
    #[test]
    fn focus_holds_at_most_one(ops in prop::collection::vec(prop::option::of(0..PROJECTS.len()), 0..50)) {
        let mut focus = ProjectFocus::new();
        let mut expected = None;
        for op in ops {
            match op {
                Some(index) => {
                    focus.select(&PROJECTS[index]);
                    expected = Some(index);
                }
                None => {
                    focus.dismiss();
                    expected = None;
                }
            }
            prop_assert_eq!(focus.focused(), expected.map(|i| &PROJECTS[i]));
            let focused_count = PROJECTS.iter().filter(|p| focus.is_focused(p)).count();
            prop_assert!(focused_count <= 1);
        }
    }
}

// ============================================================================
// Example-based checks of the threshold edges
// ============================================================================

#[test]
fn crossing_49_to_51_fires_once() {
    let mut chrome = ScrollChrome::default();
    let transitions: Vec<bool> = [49.0, 51.0, 51.0, 52.0, 49.0, 49.0, 48.0]
        .into_iter()
        .filter_map(|offset| chrome.observe(offset))
        .collect();
    assert_eq!(transitions, [true, false]);
}
