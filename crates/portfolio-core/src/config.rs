//! Tunable constants for every effect on the page
//!
//! Defaults reproduce the published site. The launcher validates the whole
//! configuration once before the window opens.

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, Result};
use crate::motion::{CursorConfig, MagneticConfig, ParallaxConfig, RevealTiming, TiltConfig};
use crate::nav::SCROLL_THRESHOLD_PX;
use crate::telemetry::TelemetryConfig;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Offset past which the nav bar turns solid
    pub scroll_threshold_px: f64,
    pub skill_tilt: TiltConfig,
    pub project_tilt: TiltConfig,
    pub magnetic: MagneticConfig,
    pub cursor: CursorConfig,
    pub reveal: RevealTiming,
    pub parallax: ParallaxConfig,
    pub telemetry: TelemetryConfig,
    /// Fixed animation tick, in frames per second
    pub frame_rate: u32,
}

impl PortfolioConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.scroll_threshold_px.is_finite() && self.scroll_threshold_px >= 0.0) {
            return Err(PortfolioError::InvalidConfig(format!(
                "scroll threshold must be non-negative, got {}",
                self.scroll_threshold_px
            )));
        }
        if !(1..=240).contains(&self.frame_rate) {
            return Err(PortfolioError::InvalidConfig(format!(
                "frame rate must be in 1..=240, got {}",
                self.frame_rate
            )));
        }
        self.skill_tilt.validate()?;
        self.project_tilt.validate()?;
        self.magnetic.validate()?;
        self.cursor.validate()?;
        self.reveal.validate()?;
        self.telemetry.validate()
    }

    /// Length of one animation tick in seconds
    pub fn frame_secs(&self) -> f64 {
        1.0 / f64::from(self.frame_rate.max(1))
    }
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
            skill_tilt: TiltConfig::skill_card(),
            project_tilt: TiltConfig::project_card(),
            magnetic: MagneticConfig::default(),
            cursor: CursorConfig::default(),
            reveal: RevealTiming::default(),
            parallax: ParallaxConfig::default(),
            telemetry: TelemetryConfig::default(),
            frame_rate: 60,
        }
    }
}
