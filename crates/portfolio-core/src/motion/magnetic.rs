//! Magnetic attraction wrapper
//!
//! While hovered, the wrapped element drifts toward the pointer by a fixed
//! fraction of the pointer's offset from its center.

use serde::{Deserialize, Serialize};

use super::spring::{Animated, Spring, SpringConfig};
use super::tilt::SurfaceRect;
use crate::error::{PortfolioError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MagneticConfig {
    /// Fraction of the pointer offset the element follows
    pub pull: f64,
    /// Scale during a press
    pub press_scale: f64,
    pub spring: SpringConfig,
}

impl MagneticConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.pull.is_finite() && (0.0..=1.0).contains(&self.pull)) {
            return Err(PortfolioError::InvalidConfig(format!(
                "magnetic pull must be in [0, 1], got {}",
                self.pull
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

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            pull: 0.1,
            press_scale: 0.95,
            spring: SpringConfig {
                rest_delta: 0.01,
                rest_speed: 0.05,
                ..SpringConfig::new(150.0, 15.0, 0.1)
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Magnetic {
    config: MagneticConfig,
    hovered: bool,
    x: Spring,
    y: Spring,
    scale: Spring,
}

impl Magnetic {
    pub fn new(config: MagneticConfig) -> Self {
        Self {
            config,
            hovered: false,
            x: Spring::new(config.spring, 0.0),
            y: Spring::new(config.spring, 0.0),
            scale: Spring::new(config.spring, 1.0),
        }
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    /// Aim at the pointer's scaled offset from the element center. Ignored
    /// outside a hover so late moves cannot undo a leave.
    pub fn pointer_move(&mut self, rect: SurfaceRect, client_x: f64, client_y: f64) -> bool {
        if !self.hovered || !rect.has_area() {
            return false;
        }
        let (cx, cy) = rect.center();
        self.x.set_target((client_x - cx) * self.config.pull);
        self.y.set_target((client_y - cy) * self.config.pull);
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

    pub fn offset(&self) -> (f64, f64) {
        (self.x.value(), self.y.value())
    }

    pub fn target_offset(&self) -> (f64, f64) {
        (self.x.target(), self.y.target())
    }

    pub fn scale(&self) -> f64 {
        self.scale.value()
    }

    pub fn css_transform(&self) -> String {
        let (x, y) = self.offset();
        format!("translate3d({x:.2}px, {y:.2}px, 0) scale({:.3})", self.scale())
    }
}

impl Animated for Magnetic {
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

    fn button() -> SurfaceRect {
        SurfaceRect::new(0.0, 0.0, 200.0, 80.0)
    }

    #[test]
    fn follows_a_tenth_of_the_offset() {
        let mut magnetic = Magnetic::new(MagneticConfig::default());
        magnetic.pointer_enter();
        assert!(magnetic.pointer_move(button(), 200.0, 80.0));
        assert_eq!(magnetic.target_offset(), (10.0, 4.0));
        settle(&mut magnetic, FRAME, 10_000);
        assert_eq!(magnetic.offset(), (10.0, 4.0));
    }

    #[test]
    fn leave_returns_to_exact_zero() {
        let mut magnetic = Magnetic::new(MagneticConfig::default());
        magnetic.pointer_enter();
        magnetic.pointer_move(button(), 5.0, 75.0);
        magnetic.advance(FRAME);
        magnetic.advance(FRAME);
        magnetic.pointer_leave();
        settle(&mut magnetic, FRAME, 10_000);
        assert_eq!(magnetic.offset(), (0.0, 0.0));
    }

    #[test]
    fn press_pulse() {
        let mut magnetic = Magnetic::new(MagneticConfig::default());
        magnetic.press();
        settle(&mut magnetic, FRAME, 10_000);
        assert_eq!(magnetic.scale(), 0.95);
        magnetic.release();
        settle(&mut magnetic, FRAME, 10_000);
        assert_eq!(magnetic.scale(), 1.0);
    }

    #[test]
    fn css_at_rest() {
        let magnetic = Magnetic::new(MagneticConfig::default());
        assert_eq!(magnetic.css_transform(), "translate3d(0.00px, 0.00px, 0) scale(1.000)");
    }

    #[test]
    fn degenerate_rect_is_ignored() {
        let mut magnetic = Magnetic::new(MagneticConfig::default());
        magnetic.pointer_enter();
        assert!(!magnetic.pointer_move(SurfaceRect::default(), 10.0, 10.0));
        assert_eq!(magnetic.target_offset(), (0.0, 0.0));
    }

    #[test]
    fn move_after_leave_is_ignored() {
        let mut magnetic = Magnetic::new(MagneticConfig::default());
        magnetic.pointer_enter();
        magnetic.pointer_leave();
        assert!(!magnetic.pointer_move(button(), 200.0, 80.0));
        assert_eq!(magnetic.target_offset(), (0.0, 0.0));
    }
}
