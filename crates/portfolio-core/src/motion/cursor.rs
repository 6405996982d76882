//! Custom cursor ring that trails the pointer

use serde::{Deserialize, Serialize};

use super::spring::{Animated, Spring, SpringConfig};
use crate::error::{PortfolioError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CursorConfig {
    /// Half of the ring's size; the ring is centered on the pointer
    pub half_size_px: f64,
    /// Scale while over something clickable
    pub hover_scale: f64,
    pub spring: SpringConfig,
}

impl CursorConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.half_size_px.is_finite() && self.half_size_px > 0.0) {
            return Err(PortfolioError::InvalidConfig(format!(
                "cursor half size must be positive, got {}",
                self.half_size_px
            )));
        }
        if !(self.hover_scale.is_finite() && self.hover_scale > 0.0) {
            return Err(PortfolioError::InvalidConfig(format!(
                "cursor hover scale must be positive, got {}",
                self.hover_scale
            )));
        }
        self.spring.validate()
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            half_size_px: 16.0,
            hover_scale: 1.5,
            spring: SpringConfig {
                rest_delta: 0.05,
                rest_speed: 0.5,
                ..SpringConfig::new(250.0, 20.0, 0.5)
            },
        }
    }
}

/// Pointer sample posted by the host on every move
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    /// The element under the pointer shows a pointer cursor
    #[serde(default)]
    pub clickable: bool,
}

impl PointerSample {
    /// Decode a sample posted by the host.
    pub fn from_payload(value: serde_json::Value) -> Result<Self> {
        let sample: PointerSample = serde_json::from_value(value)?;
        if !(sample.x.is_finite() && sample.y.is_finite()) {
            return Err(PortfolioError::Bridge(format!(
                "non-finite pointer sample: {sample:?}"
            )));
        }
        Ok(sample)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CursorFollower {
    config: CursorConfig,
    x: Spring,
    y: Spring,
    scale: Spring,
    over_clickable: bool,
}

impl CursorFollower {
    pub fn new(config: CursorConfig) -> Self {
        Self {
            config,
            x: Spring::new(config.spring, 0.0),
            y: Spring::new(config.spring, 0.0),
            scale: Spring::new(config.spring, 1.0),
            over_clickable: false,
        }
    }

    pub fn track(&mut self, sample: PointerSample) {
        self.x.set_target(sample.x - self.config.half_size_px);
        self.y.set_target(sample.y - self.config.half_size_px);
        self.over_clickable = sample.clickable;
        self.scale.set_target(if sample.clickable {
            self.config.hover_scale
        } else {
            1.0
        });
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x.value(), self.y.value())
    }

    pub fn is_over_clickable(&self) -> bool {
        self.over_clickable
    }

    pub fn css_transform(&self) -> String {
        let (x, y) = self.position();
        format!("translate3d({x:.1}px, {y:.1}px, 0) scale({:.3})", self.scale.value())
    }
}

impl Animated for CursorFollower {
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

    #[test]
    fn clickable_defaults_to_false() {
        let sample = PointerSample::from_payload(serde_json::json!({ "x": 10.0, "y": 20.0 })).unwrap();
        assert_eq!(
            sample,
            PointerSample {
                x: 10.0,
                y: 20.0,
                clickable: false
            }
        );
    }

    #[test]
    fn malformed_payload_is_rejected() {
        let wrong_type = PointerSample::from_payload(serde_json::json!({ "x": "left", "y": 2.0 }));
        assert!(matches!(wrong_type, Err(PortfolioError::Payload(_))));

        let missing_x = PointerSample::from_payload(serde_json::json!({ "y": 2.0 }));
        assert!(matches!(missing_x, Err(PortfolioError::Payload(_))));
    }

    #[test]
    fn ring_is_centered_on_pointer() {
        let mut cursor = CursorFollower::new(CursorConfig::default());
        cursor.track(PointerSample {
            x: 116.0,
            y: 66.0,
            clickable: false,
        });
        settle(&mut cursor, 1.0 / 60.0, 10_000);
        assert_eq!(cursor.position(), (100.0, 50.0));
    }

    #[test]
    fn grows_over_clickable() {
        let mut cursor = CursorFollower::new(CursorConfig::default());
        cursor.track(PointerSample {
            x: 0.0,
            y: 0.0,
            clickable: true,
        });
        assert!(cursor.is_over_clickable());
        settle(&mut cursor, 1.0 / 60.0, 10_000);
        assert!(cursor.css_transform().ends_with("scale(1.500)"));
    }
}
