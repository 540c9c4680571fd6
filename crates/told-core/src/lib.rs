//! Core performance-engine utilities
//!
//! Includes:
//! - Units & conversions (inHg/hPa, climb gradients)
//! - Standard atmosphere (ISA temperature, pressure & density altitude)
//! - Wind resolution along a runway heading
//! - Immutable input snapshots (runway, weather, configuration)
//! - The tagged [`Outcome`] every performance query returns

pub mod atmosphere;
pub mod inputs;
pub mod outcome;
pub mod units;
pub mod wind;

pub use inputs::{
    Aloft, Configuration, Contamination, ContaminationKind, FlapSetting, ParseFlapSettingError, Runway,
    Surface, Temperature, Weather,
};
pub use outcome::{Envelope, Offscale, Outcome};
pub use wind::{Wind, WindComponents};
