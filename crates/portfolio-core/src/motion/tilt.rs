//! Pointer-reactive tilt and spotlight surface
//!
//! The pointer position over a card is normalized to a signed fraction in
//! `[-0.5, 0.5]` per axis, smoothed through a spring, and mapped to two
//! rotation angles and the center of a radial highlight.

use serde::{Deserialize, Serialize};

use super::spring::{Animated, Spring, SpringConfig};
use crate::error::{PortfolioError, Result};

/// Whether the host pointer can hover continuously
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum PointerCapability {
    /// Mouse or trackpad
    #[default]
    Fine,
    /// Touch; there is no hover signal
    Coarse,
}

impl PointerCapability {
    pub fn from_coarse_flag(coarse: bool) -> Self {
        if coarse {
            PointerCapability::Coarse
        } else {
            PointerCapability::Fine
        }
    }

    pub fn is_coarse(&self) -> bool {
        matches!(self, PointerCapability::Coarse)
    }
}

/// Bounding box of an element in client coordinates
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Pointer position as a fraction of the box, centered on zero and
    /// clamped to `[-0.5, 0.5]`. `None` for a zero-area box.
    pub fn normalize(&self, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
        if !self.has_area() {
            return None;
        }
        let fx = (client_x - self.left) / self.width - 0.5;
        let fy = (client_y - self.top) / self.height - 0.5;
        Some((fx.clamp(-0.5, 0.5), fy.clamp(-0.5, 0.5)))
    }
}

/// Orders bounds queries issued on pointer moves.
///
/// Each move takes a ticket before asking the host for the element's
/// bounds. Answers can arrive out of order; only a ticket newer than the
/// last one applied is accepted, so an older pointer position never
/// replaces a newer target.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MoveSequence {
    issued: u64,
    applied: u64,
}

impl MoveSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Returns true if `ticket` is the newest answer seen so far.
    pub fn accept(&mut self, ticket: u64) -> bool {
        if ticket <= self.applied || ticket > self.issued {
            return false;
        }
        self.applied = ticket;
        true
    }
}

/// Tunables for one kind of tilt surface
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TiltConfig {
    /// Rotation at the very edge of the surface, in degrees
    pub max_degrees: f64,
    /// Radius of the radial highlight in pixels
    pub spotlight_radius_px: u32,
    /// Alpha of the accent color at the highlight center
    pub spotlight_alpha: f64,
    /// Scale applied while the surface is pressed
    pub press_scale: f64,
    pub spring: SpringConfig,
}

impl TiltConfig {
    pub fn skill_card() -> Self {
        Self {
            max_degrees: 10.0,
            spotlight_radius_px: 400,
            spotlight_alpha: 0.15,
            ..Self::default()
        }
    }

    pub fn project_card() -> Self {
        Self {
            max_degrees: 8.0,
            spotlight_radius_px: 600,
            spotlight_alpha: 0.1,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.max_degrees.is_finite() && self.max_degrees >= 0.0 && self.max_degrees < 90.0) {
            return Err(PortfolioError::InvalidConfig(format!(
                "tilt max_degrees must be in [0, 90), got {}",
                self.max_degrees
            )));
        }
        if !(0.0..=1.0).contains(&self.spotlight_alpha) {
            return Err(PortfolioError::InvalidConfig(format!(
                "spotlight alpha must be in [0, 1], got {}",
                self.spotlight_alpha
            )));
        }
        if !(self.press_scale > 0.0 && self.press_scale <= 1.0) {
            return Err(PortfolioError::InvalidConfig(format!(
                "press scale must be in (0, 1], got {}",
                self.press_scale
            )));
        }
        self.spring.validate()
    }
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_degrees: 10.0,
            spotlight_radius_px: 400,
            spotlight_alpha: 0.15,
            press_scale: 0.98,
            spring: SpringConfig::critically_damped(100.0, 1.0),
        }
    }
}

/// Map a normalized offset to `(rotate_x, rotate_y)` in degrees.
///
/// Moving right turns the surface around its Y axis toward the viewer;
/// moving down tips it around the X axis away from the viewer.
pub fn tilt_angles(max_degrees: f64, fx: f64, fy: f64) -> (f64, f64) {
    let fx = fx.clamp(-0.5, 0.5);
    let fy = fy.clamp(-0.5, 0.5);
    // `0.0 - x` keeps the neutral pose at +0.0 instead of -0.0
    (0.0 - fy * 2.0 * max_degrees, fx * 2.0 * max_degrees)
}

/// Map a normalized offset to a percentage across the surface.
pub fn highlight_percent(f: f64) -> f64 {
    ((f.clamp(-0.5, 0.5) + 0.5) * 100.0).clamp(0.0, 100.0)
}

/// A rendered tilt state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltPose {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub highlight_x_pct: f64,
    pub highlight_y_pct: f64,
    pub scale: f64,
}

impl TiltPose {
    pub const NEUTRAL: TiltPose = TiltPose {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        highlight_x_pct: 50.0,
        highlight_y_pct: 50.0,
        scale: 1.0,
    };

    pub fn is_neutral(&self) -> bool {
        self.rotate_x_deg == 0.0
            && self.rotate_y_deg == 0.0
            && self.highlight_x_pct == 50.0
            && self.highlight_y_pct == 50.0
    }

    pub fn css_transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({:.3}deg) rotateY({:.3}deg) scale({:.3})",
            self.rotate_x_deg, self.rotate_y_deg, self.scale
        )
    }

    /// Radial gradient centered on the highlight. `rgb` is `"r, g, b"`.
    pub fn spotlight_gradient(&self, radius_px: u32, rgb: &str, alpha: f64) -> String {
        format!(
            "radial-gradient({radius_px}px circle at {:.2}% {:.2}%, rgba({rgb}, {alpha}), transparent 80%)",
            self.highlight_x_pct, self.highlight_y_pct
        )
    }
}

/// Per-card tilt state
#[derive(Clone, Debug, PartialEq)]
pub struct TiltSurface {
    config: TiltConfig,
    capability: PointerCapability,
    hovered: bool,
    x: Spring,
    y: Spring,
    scale: Spring,
}

impl TiltSurface {
    pub fn new(config: TiltConfig, capability: PointerCapability) -> Self {
        Self {
            config,
            capability,
            hovered: false,
            x: Spring::new(config.spring, 0.0),
            y: Spring::new(config.spring, 0.0),
            scale: Spring::new(SpringConfig::new(400.0, 30.0, 1.0), 1.0),
        }
    }

    pub fn capability(&self) -> PointerCapability {
        self.capability
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Switching to a coarse pointer drops straight back to neutral.
    pub fn set_capability(&mut self, capability: PointerCapability) {
        self.capability = capability;
        if capability.is_coarse() {
            self.hovered = false;
            self.x.snap_to(0.0);
            self.y.snap_to(0.0);
        }
    }

    pub fn pointer_enter(&mut self) {
        if !self.capability.is_coarse() {
            self.hovered = true;
        }
    }

    /// Aim the springs at the pointer. Returns false when the move was ignored
    /// (coarse pointer, not hovered, or a degenerate box).
    pub fn pointer_move(&mut self, rect: SurfaceRect, client_x: f64, client_y: f64) -> bool {
        if self.capability.is_coarse() || !self.hovered {
            return false;
        }
        let Some((fx, fy)) = rect.normalize(client_x, client_y) else {
            return false;
        };
        self.x.set_target(fx);
        self.y.set_target(fy);
        true
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        self.x.set_target(0.0);
        self.y.set_target(0.0);
        self.scale.set_target(1.0);
    }

    pub fn press(&mut self) {
        self.scale.set_target(self.config.press_scale);
    }

    pub fn release(&mut self) {
        self.scale.set_target(1.0);
    }

    /// Current, spring-smoothed pose.
    pub fn pose(&self) -> TiltPose {
        self.pose_at(self.x.value(), self.y.value())
    }

    /// Pose the springs are heading toward.
    pub fn target_pose(&self) -> TiltPose {
        self.pose_at(self.x.target(), self.y.target())
    }

    fn pose_at(&self, fx: f64, fy: f64) -> TiltPose {
        let (rotate_x_deg, rotate_y_deg) = tilt_angles(self.config.max_degrees, fx, fy);
        TiltPose {
            rotate_x_deg,
            rotate_y_deg,
            highlight_x_pct: highlight_percent(fx),
            highlight_y_pct: highlight_percent(fy),
            scale: self.scale.value(),
        }
    }
}

impl Animated for TiltSurface {
    fn advance(&mut self, dt: f64) -> bool {
        let x = self.x.step(dt);
        let y = self.y.step(dt);
        let s = self.scale.step(dt);
        x && y && s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::spring::settle;

    const FRAME: f64 = 1.0 / 60.0;

    fn card() -> SurfaceRect {
        SurfaceRect::new(100.0, 200.0, 400.0, 300.0)
    }

    #[test]
    fn center_is_neutral() {
        let (x, y) = card().normalize(300.0, 350.0).unwrap();
        assert_eq!((x, y), (0.0, 0.0));
        assert_eq!(tilt_angles(10.0, x, y), (0.0, 0.0));
    }

    #[test]
    fn corners_hit_the_bound() {
        let rect = card();
        let (fx, fy) = rect.normalize(100.0, 200.0).unwrap();
        assert_eq!((fx, fy), (-0.5, -0.5));
        assert_eq!(tilt_angles(10.0, fx, fy), (10.0, -10.0));

        let (fx, fy) = rect.normalize(500.0, 500.0).unwrap();
        assert_eq!(tilt_angles(8.0, fx, fy), (-8.0, 8.0));
    }

    #[test]
    fn outside_points_are_clamped() {
        let (fx, fy) = card().normalize(-1000.0, 9000.0).unwrap();
        assert_eq!((fx, fy), (-0.5, 0.5));
    }

    #[test]
    fn zero_area_rect_is_ignored() {
        assert!(SurfaceRect::new(0.0, 0.0, 0.0, 10.0).normalize(0.0, 0.0).is_none());
    }

    #[test]
    fn highlight_tracks_pointer() {
        assert_eq!(highlight_percent(-0.5), 0.0);
        assert_eq!(highlight_percent(0.0), 50.0);
        assert_eq!(highlight_percent(0.25), 75.0);
        assert_eq!(highlight_percent(0.5), 100.0);
    }

    #[test]
    fn move_then_leave_returns_to_neutral() {
        let mut surface = TiltSurface::new(TiltConfig::skill_card(), PointerCapability::Fine);
        surface.pointer_enter();
        assert!(surface.pointer_move(card(), 480.0, 210.0));
        settle(&mut surface, FRAME, 10_000);
        let pose = surface.pose();
        assert!(pose.rotate_y_deg > 0.0);
        assert!(pose.rotate_x_deg > 0.0);

        surface.pointer_leave();
        settle(&mut surface, FRAME, 10_000);
        assert!(surface.pose().is_neutral());
        assert_eq!(surface.pose(), TiltPose::NEUTRAL);
    }

    #[test]
    fn move_after_leave_is_ignored() {
        let mut surface = TiltSurface::new(TiltConfig::project_card(), PointerCapability::Fine);
        surface.pointer_enter();
        surface.pointer_leave();
        assert!(!surface.pointer_move(card(), 500.0, 500.0));
        assert!(surface.target_pose().is_neutral());
    }

    #[test]
    fn coarse_pointer_never_tilts() {
        let mut surface = TiltSurface::new(TiltConfig::skill_card(), PointerCapability::Coarse);
        surface.pointer_enter();
        assert!(!surface.pointer_move(card(), 500.0, 500.0));
        settle(&mut surface, FRAME, 100);
        assert!(surface.pose().is_neutral());
    }

    #[test]
    fn switching_to_coarse_snaps_to_neutral() {
        let mut surface = TiltSurface::new(TiltConfig::skill_card(), PointerCapability::Fine);
        surface.pointer_enter();
        surface.pointer_move(card(), 500.0, 500.0);
        surface.advance(FRAME);
        assert!(!surface.pose().is_neutral());

        surface.set_capability(PointerCapability::Coarse);
        assert!(surface.pose().is_neutral());
        assert!(!surface.is_hovered());
    }

    #[test]
    fn press_scales_down_and_release_restores() {
        let mut surface = TiltSurface::new(TiltConfig::project_card(), PointerCapability::Fine);
        surface.press();
        settle(&mut surface, FRAME, 10_000);
        assert_eq!(surface.pose().scale, 0.98);
        surface.release();
        settle(&mut surface, FRAME, 10_000);
        assert_eq!(surface.pose().scale, 1.0);
    }

    #[test]
    fn css_output() {
        let pose = TiltPose::NEUTRAL;
        assert_eq!(
            pose.css_transform(),
            "perspective(1000px) rotateX(0.000deg) rotateY(0.000deg) scale(1.000)"
        );
        assert_eq!(
            pose.spotlight_gradient(400, "255, 176, 0", 0.15),
            "radial-gradient(400px circle at 50.00% 50.00%, rgba(255, 176, 0, 0.15), transparent 80%)"
        );
    }

    #[test]
    fn presets_validate() {
        assert!(TiltConfig::skill_card().validate().is_ok());
        assert!(TiltConfig::project_card().validate().is_ok());
        let bad = TiltConfig {
            max_degrees: 120.0,
            ..TiltConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn stale_bounds_answers_are_dropped() {
        let mut seq = MoveSequence::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(seq.accept(second));
        assert!(!seq.accept(first));

        let third = seq.issue();
        assert!(seq.accept(third));
        assert!(!seq.accept(third));
    }

    #[test]
    fn in_order_answers_all_apply() {
        let mut seq = MoveSequence::new();
        let tickets: Vec<u64> = (0..4).map(|_| seq.issue()).collect();
        assert!(tickets.into_iter().all(|t| seq.accept(t)));
        assert!(!seq.accept(99));
    }

    #[test]
    fn late_old_move_does_not_override_newer_target() {
        let rect = SurfaceRect::new(0.0, 0.0, 200.0, 100.0);
        let mut seq = MoveSequence::new();
        let mut card = TiltSurface::new(TiltConfig::skill_card(), PointerCapability::Fine);
        card.pointer_enter();

        let old = seq.issue();
        let new = seq.issue();
        // The newer query resolves first: pointer at the right edge
        if seq.accept(new) {
            card.pointer_move(rect, 200.0, 50.0);
        }
        // The older query resolves last: pointer at the left edge
        if seq.accept(old) {
            card.pointer_move(rect, 0.0, 50.0);
        }
        settle(&mut card, 1.0 / 60.0, 10_000);
        assert_eq!(card.pose().rotate_y_deg, 10.0);
    }
}
