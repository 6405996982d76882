//! Damped spring integrator
//!
//! Every pointer-driven effect on the page (tilt, magnetism, the cursor ring)
//! is a target value smoothed through one of these springs. The spring is
//! advanced once per animation tick and snaps exactly onto its target when it
//! comes to rest, so "back to zero" really means zero.

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, Result};

/// Largest integration step; longer frames are split into substeps.
const MAX_SUBSTEP_SECS: f64 = 1.0 / 240.0;

/// Physical parameters of a spring
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from target under which the spring may settle
    pub rest_delta: f64,
    /// Speed under which the spring may settle
    pub rest_speed: f64,
}

impl SpringConfig {
    /// A spring with damping chosen so it never overshoots its target.
    pub fn critically_damped(stiffness: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping: 2.0 * (stiffness * mass).sqrt(),
            mass,
            ..Self::default()
        }
    }

    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            ..Self::default()
        }
    }

    /// Damping ratio; 1.0 is critical, above is overdamped.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("stiffness", self.stiffness),
            ("mass", self.mass),
            ("rest_delta", self.rest_delta),
            ("rest_speed", self.rest_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(PortfolioError::InvalidConfig(format!(
                    "spring {name} must be positive, got {value}"
                )));
            }
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(PortfolioError::InvalidConfig(format!(
                "spring damping must be non-negative, got {}",
                self.damping
            )));
        }
        Ok(())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_delta: 0.001,
            rest_speed: 0.01,
        }
    }
}

/// A single animated scalar chasing a target
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// A spring at rest on `value`.
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump straight to `value` with no motion.
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` seconds. Returns true once the spring is at rest.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_at_rest() {
            return true;
        }
        if dt > 0.0 && dt.is_finite() {
            let substeps = (dt / MAX_SUBSTEP_SECS).ceil().max(1.0) as u32;
            let h = dt / f64::from(substeps);
            let SpringConfig {
                stiffness,
                damping,
                mass,
                ..
            } = self.config;
            for _ in 0..substeps {
                let force = -stiffness * (self.value - self.target) - damping * self.velocity;
                self.velocity += force / mass * h;
                self.value += self.velocity * h;
            }
        }
        if (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.snap_to(self.target);
        }
        self.is_at_rest()
    }
}

/// Something advanced frame by frame until it settles.
pub trait Animated {
    /// Advance all springs by `dt` seconds. Returns true when everything is at rest.
    fn advance(&mut self, dt: f64) -> bool;
}

impl Animated for Spring {
    fn advance(&mut self, dt: f64) -> bool {
        self.step(dt)
    }
}

/// Run `animated` at a fixed frame rate until it settles or `max_frames` pass.
/// Returns the number of frames taken.
pub fn settle<A: Animated + ?Sized>(animated: &mut A, dt: f64, max_frames: usize) -> usize {
    for frame in 1..=max_frames {
        if animated.advance(dt) {
            return frame;
        }
    }
    max_frames
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn spring_reaches_target_exactly() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        let frames = settle(&mut spring, FRAME, 10_000);
        assert!(frames < 10_000);
        assert_eq!(spring.value(), 1.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn critically_damped_never_overshoots() {
        let mut spring = Spring::new(SpringConfig::critically_damped(100.0, 1.0), 0.0);
        spring.set_target(10.0);
        for _ in 0..600 {
            spring.step(FRAME);
            assert!(spring.value() <= 10.0 + 1e-9, "overshot: {}", spring.value());
        }
    }

    #[test]
    fn critically_damped_ratio_is_one() {
        let config = SpringConfig::critically_damped(250.0, 0.5);
        assert!((config.damping_ratio() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn spring_at_rest_ignores_step() {
        let mut spring = Spring::new(SpringConfig::default(), 3.0);
        assert!(spring.step(FRAME));
        assert_eq!(spring.value(), 3.0);
    }

    #[test]
    fn zero_dt_does_not_move() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(5.0);
        assert!(!spring.step(0.0));
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn long_frame_stays_stable() {
        let mut spring = Spring::new(SpringConfig::new(150.0, 15.0, 0.1), 0.0);
        spring.set_target(20.0);
        spring.step(0.5);
        assert!(spring.value().is_finite());
        assert!(spring.value().abs() < 100.0);
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(SpringConfig::default().validate().is_ok());
        assert!(SpringConfig::new(0.0, 10.0, 1.0).validate().is_err());
        assert!(SpringConfig::new(100.0, -1.0, 1.0).validate().is_err());
        assert!(SpringConfig::new(100.0, 10.0, f64::NAN).validate().is_err());
    }
}
