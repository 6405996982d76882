//! Simulated "live coordinates" readout
//!
//! Purely cosmetic: two decimals jittered inside narrow bounds on a fixed
//! period. There is no real location or monitoring behind it.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, Result};

/// Decimal places kept on each coordinate
const PRECISION: f64 = 10_000.0;

/// A displayed latitude/longitude pair
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn latitude_label(&self) -> String {
        format!("LAT: {:.4}° N", self.latitude)
    }

    pub fn longitude_label(&self) -> String {
        format!("LNG: {:.4}° E", self.longitude)
    }
}

/// Window the simulated values stay inside
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinateBounds {
    pub latitude_min: f64,
    pub longitude_min: f64,
    /// Width of both windows
    pub span: f64,
}

impl CoordinateBounds {
    /// Inclusive on both ends because values are rounded to four places.
    pub fn contains(&self, coords: &Coordinates) -> bool {
        let within = |v: f64, min: f64| v >= min && v <= min + self.span;
        within(coords.latitude, self.latitude_min) && within(coords.longitude, self.longitude_min)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinates {
        let round = |v: f64| (v * PRECISION).round() / PRECISION;
        Coordinates {
            latitude: round(self.latitude_min + rng.random::<f64>() * self.span),
            longitude: round(self.longitude_min + rng.random::<f64>() * self.span),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub period: Duration,
    pub bounds: CoordinateBounds,
    pub initial: Coordinates,
}

impl TelemetryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.period.is_zero() {
            return Err(PortfolioError::InvalidConfig(
                "telemetry period must be non-zero".into(),
            ));
        }
        if !(self.bounds.span.is_finite() && self.bounds.span > 0.0) {
            return Err(PortfolioError::InvalidConfig(format!(
                "telemetry span must be positive, got {}",
                self.bounds.span
            )));
        }
        if !self.bounds.contains(&self.initial) {
            return Err(PortfolioError::InvalidConfig(
                "initial coordinates fall outside the telemetry bounds".into(),
            ));
        }
        Ok(())
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_secs(2),
            bounds: CoordinateBounds {
                latitude_min: 12.9,
                longitude_min: 77.5,
                span: 0.1,
            },
            initial: Coordinates {
                latitude: 12.9716,
                longitude: 77.5946,
            },
        }
    }
}

/// Regenerate coordinates every `config.period`, forever.
///
/// The future holds no resources besides its timer; dropping or aborting the
/// task that runs it is the teardown.
pub async fn run_feed<F>(config: TelemetryConfig, mut on_update: F)
where
    F: FnMut(Coordinates),
{
    loop {
        tokio::time::sleep(config.period).await;
        let coords = config.bounds.sample(&mut rand::rng());
        tracing::trace!(lat = coords.latitude, lng = coords.longitude, "telemetry tick");
        on_update(coords);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_stay_in_bounds() {
        let config = TelemetryConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let coords = config.bounds.sample(&mut rng);
            assert!(config.bounds.contains(&coords), "{coords:?}");
        }
    }

    #[test]
    fn samples_have_four_decimals() {
        let mut rng = StdRng::seed_from_u64(42);
        let coords = TelemetryConfig::default().bounds.sample(&mut rng);
        let scaled = coords.latitude * PRECISION;
        assert!((scaled - scaled.round()).abs() < 1e-6);
    }

    #[test]
    fn labels() {
        let coords = TelemetryConfig::default().initial;
        assert_eq!(coords.latitude_label(), "LAT: 12.9716° N");
        assert_eq!(coords.longitude_label(), "LNG: 77.5946° E");
    }

    #[test]
    fn default_config_is_valid() {
        assert!(TelemetryConfig::default().validate().is_ok());
        let zero = TelemetryConfig {
            period: Duration::ZERO,
            ..TelemetryConfig::default()
        };
        assert!(zero.validate().is_err());
    }
}
