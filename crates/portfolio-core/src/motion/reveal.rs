//! Staggered text reveal and the one-shot viewport trigger behind it

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, Result};

/// Slow-out curve used by every entrance animation
pub const CINEMATIC_EASING: &str = "cubic-bezier(0.16, 1, 0.3, 1)";

/// How text is cut into animated units
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealUnitKind {
    /// Every character, whitespace included
    Character,
    /// Whitespace-delimited words
    Word,
}

/// Timing shared by all reveals
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealTiming {
    pub duration_secs: f64,
    pub char_stagger_secs: f64,
    pub word_stagger_secs: f64,
}

impl RevealTiming {
    pub fn stagger(&self, kind: RevealUnitKind) -> f64 {
        match kind {
            RevealUnitKind::Character => self.char_stagger_secs,
            RevealUnitKind::Word => self.word_stagger_secs,
        }
    }

    /// CSS `transition` value for one unit.
    pub fn transition(&self, delay_secs: f64) -> String {
        format!(
            "transform {d}s {e} {delay:.2}s, opacity {d}s {e} {delay:.2}s, filter {d}s {e} {delay:.2}s",
            d = self.duration_secs,
            e = CINEMATIC_EASING,
            delay = delay_secs,
        )
    }

    pub fn validate(&self) -> Result<()> {
        let values = [
            ("duration", self.duration_secs),
            ("char stagger", self.char_stagger_secs),
            ("word stagger", self.word_stagger_secs),
        ];
        for (name, value) in values {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PortfolioError::InvalidConfig(format!(
                    "reveal {name} must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            duration_secs: 1.2,
            char_stagger_secs: 0.03,
            word_stagger_secs: 0.05,
        }
    }
}

/// One animated piece of text
#[derive(Clone, Debug, PartialEq)]
pub struct RevealUnit {
    pub index: usize,
    pub text: String,
    pub delay_secs: f64,
}

/// Cut `text` into units, each delayed by `base_delay + index * stagger`.
pub fn reveal_units(
    text: &str,
    kind: RevealUnitKind,
    base_delay_secs: f64,
    timing: &RevealTiming,
) -> Vec<RevealUnit> {
    let stagger = timing.stagger(kind);
    let pieces: Vec<String> = match kind {
        RevealUnitKind::Character => text.chars().map(String::from).collect(),
        RevealUnitKind::Word => text.split_whitespace().map(String::from).collect(),
    };
    pieces
        .into_iter()
        .enumerate()
        .map(|(index, text)| RevealUnit {
            index,
            text,
            delay_secs: base_delay_secs + index as f64 * stagger,
        })
        .collect()
}

/// Fires the first time its element is seen, then never again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportTrigger {
    fired: bool,
}

impl ViewportTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a visibility observation. Returns true only for the observation
    /// that fires the trigger; afterwards the observer can be released.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.fired || !visible {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
