//! Engine settings supplied by the caller: which aircraft and base strategy to
//! use, and the safety margin.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use told_models::Aircraft;

/// Source of raw performance figures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Tabular,
    #[default]
    Regression,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("safety margin must be a finite factor of at least 1.0, got {0}")]
    SafetyMargin(f64),
    #[error("invalid settings document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validated settings. Deserializing goes through the same checks as
/// [`Settings::new`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SettingsFile", into = "SettingsFile")]
pub struct Settings {
    aircraft: Aircraft,
    strategy: Strategy,
    safety_margin: f64,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    aircraft: Aircraft,
    #[serde(default)]
    strategy: Strategy,
    #[serde(default = "no_margin")]
    safety_margin: f64,
}

fn no_margin() -> f64 {
    1.0
}

impl TryFrom<SettingsFile> for Settings {
    type Error = SettingsError;

    fn try_from(file: SettingsFile) -> Result<Self, Self::Error> {
        Ok(Self::new(file.strategy, file.safety_margin)?.with_aircraft(file.aircraft))
    }
}

impl From<Settings> for SettingsFile {
    fn from(s: Settings) -> Self {
        Self { aircraft: s.aircraft, strategy: s.strategy, safety_margin: s.safety_margin }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self { aircraft: Aircraft::default(), strategy: Strategy::default(), safety_margin: no_margin() }
    }
}

impl Settings {
    pub fn new(strategy: Strategy, safety_margin: f64) -> Result<Self, SettingsError> {
        if !safety_margin.is_finite() || safety_margin < 1.0 {
            return Err(SettingsError::SafetyMargin(safety_margin));
        }
        Ok(Self { aircraft: Aircraft::default(), strategy, safety_margin })
    }

    #[must_use]
    pub fn with_aircraft(self, aircraft: Aircraft) -> Self {
        Self { aircraft, ..self }
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let file: SettingsFile = serde_json::from_str(json)?;
        file.try_into()
    }

    pub fn aircraft(&self) -> Aircraft {
        self.aircraft
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Multiplier (≥ 1.0) applied to every distance and Vref.
    pub fn safety_margin(&self) -> f64 {
        self.safety_margin
    }
}
