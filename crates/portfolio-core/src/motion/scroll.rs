//! Scroll-linked values
//!
//! Maps the page scroll offset (or its normalized progress) onto parallax
//! transforms through clamped linear ranges.

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, Result};

/// Scroll position posted by the host on every scroll event
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollSample {
    /// `window.scrollY`
    pub offset: f64,
    /// Document height minus viewport height
    pub max_offset: f64,
}

impl ScrollSample {
    pub fn new(offset: f64, max_offset: f64) -> Self {
        Self { offset, max_offset }
    }

    /// Decode a sample posted by the host.
    pub fn from_payload(value: serde_json::Value) -> Result<Self> {
        let sample: ScrollSample = serde_json::from_value(value)?;
        if !(sample.offset.is_finite() && sample.max_offset.is_finite()) {
            return Err(PortfolioError::Bridge(format!(
                "non-finite scroll sample: {sample:?}"
            )));
        }
        Ok(sample)
    }

    /// Normalized progress in `[0, 1]`; zero when the page cannot scroll.
    pub fn progress(&self) -> f64 {
        if !(self.max_offset > 0.0) || !self.offset.is_finite() {
            return 0.0;
        }
        (self.offset / self.max_offset).clamp(0.0, 1.0)
    }
}

/// A clamped linear mapping from one range onto another
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeMap {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl RangeMap {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (in0, in1) = self.input;
        let (out0, out1) = self.output;
        if in1 == in0 {
            return if value < in0 { out0 } else { out1 };
        }
        let t = ((value - in0) / (in1 - in0)).clamp(0.0, 1.0);
        out0 * (1.0 - t) + out1 * t
    }
}

/// Scroll mappings for the hero and the about portrait
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParallaxConfig {
    /// Offset (px) to hero translateY (px)
    pub hero_shift: RangeMap,
    /// Offset (px) to hero opacity
    pub hero_fade: RangeMap,
    /// Progress to portrait scale
    pub portrait_scale: RangeMap,
    /// Progress to portrait rotation (deg)
    pub portrait_rotate: RangeMap,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            hero_shift: RangeMap::new((0.0, 500.0), (0.0, 150.0)),
            hero_fade: RangeMap::new((0.0, 300.0), (1.0, 0.0)),
            portrait_scale: RangeMap::new((0.0, 0.3), (0.8, 1.0)),
            portrait_rotate: RangeMap::new((0.0, 0.3), (5.0, 0.0)),
        }
    }
}

impl ParallaxConfig {
    pub fn hero(&self, sample: ScrollSample) -> HeroParallax {
        HeroParallax {
            translate_y_px: self.hero_shift.apply(sample.offset),
            opacity: self.hero_fade.apply(sample.offset),
        }
    }

    pub fn portrait(&self, sample: ScrollSample) -> PortraitParallax {
        let progress = sample.progress();
        PortraitParallax {
            scale: self.portrait_scale.apply(progress),
            rotate_deg: self.portrait_rotate.apply(progress),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroParallax {
    pub translate_y_px: f64,
    pub opacity: f64,
}

impl HeroParallax {
    pub fn css(&self) -> String {
        format!(
            "transform: translate3d(0, {:.1}px, 0); opacity: {:.3};",
            self.translate_y_px, self.opacity
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortraitParallax {
    pub scale: f64,
    pub rotate_deg: f64,
}

impl PortraitParallax {
    pub fn css(&self) -> String {
        format!(
            "transform: scale({:.3}) rotate({:.2}deg);",
            self.scale, self.rotate_deg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_host_payload() {
        let sample =
            ScrollSample::from_payload(serde_json::json!({ "offset": 120.0, "max_offset": 2400.0 }))
                .unwrap();
        assert_eq!(sample, ScrollSample::new(120.0, 2400.0));
        assert!(matches!(
            ScrollSample::from_payload(serde_json::json!({ "offset": "top" })),
            Err(PortfolioError::Payload(_))
        ));
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(ScrollSample::new(250.0, 1000.0).progress(), 0.25);
        assert_eq!(ScrollSample::new(-40.0, 1000.0).progress(), 0.0);
        assert_eq!(ScrollSample::new(2000.0, 1000.0).progress(), 1.0);
    }

    #[test]
    fn progress_without_scrollable_page() {
        assert_eq!(ScrollSample::new(10.0, 0.0).progress(), 0.0);
    }

    #[test]
    fn range_map_clamps_both_ends() {
        let map = RangeMap::new((0.0, 300.0), (1.0, 0.0));
        assert_eq!(map.apply(-10.0), 1.0);
        assert_eq!(map.apply(150.0), 0.5);
        assert_eq!(map.apply(900.0), 0.0);
    }

    #[test]
    fn degenerate_range_steps() {
        let map = RangeMap::new((5.0, 5.0), (0.0, 1.0));
        assert_eq!(map.apply(4.0), 0.0);
        assert_eq!(map.apply(5.0), 1.0);
    }

    #[test]
    fn hero_parallax() {
        let config = ParallaxConfig::default();
        let top = config.hero(ScrollSample::new(0.0, 4000.0));
        assert_eq!((top.translate_y_px, top.opacity), (0.0, 1.0));

        let scrolled = config.hero(ScrollSample::new(500.0, 4000.0));
        assert_eq!(scrolled.translate_y_px, 150.0);
        assert_eq!(scrolled.opacity, 0.0);
    }

    #[test]
    fn portrait_settles_after_thirty_percent() {
        let config = ParallaxConfig::default();
        let start = config.portrait(ScrollSample::new(0.0, 1000.0));
        assert_eq!((start.scale, start.rotate_deg), (0.8, 5.0));
        let end = config.portrait(ScrollSample::new(600.0, 1000.0));
        assert_eq!((end.scale, end.rotate_deg), (1.0, 0.0));
        assert_eq!(end.css(), "transform: scale(1.000) rotate(0.00deg);");
    }
}
