//! Immutable input snapshots handed to the engine for one calculation.
//!
//! These are plain values: the airport store, weather service and settings
//! layer build a fresh snapshot whenever something the pilot sees changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::atmosphere::{isa_temperature_c, pressure_altitude_ft, STANDARD_ALTIMETER_IN_HG};
use crate::units::{hpa_to_in_hg, in_hg_to_hpa};
use crate::wind::Wind;

/// -------------------------
/// Runway
/// -------------------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    #[default]
    Paved,
    Turf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContaminationKind {
    Water,
    SlushWetSnow,
    DrySnow,
    CompactSnow,
}

/// Runway contamination as reported by NOTAM. Depth [in] only matters for
/// water and slush/wet snow.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contamination {
    pub kind: ContaminationKind,
    #[serde(default)]
    pub depth_in: f64,
}

impl Contamination {
    /// Depth-graded contaminants with no depth are a dry runway.
    pub fn is_effective(&self) -> bool {
        match self.kind {
            ContaminationKind::Water | ContaminationKind::SlushWetSnow => self.depth_in > 0.0,
            ContaminationKind::DrySnow | ContaminationKind::CompactSnow => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Runway {
    pub designator: String,
    /// True heading [°]
    pub heading_deg: f64,
    /// Signed fraction, positive uphill in the direction of operation.
    #[serde(default)]
    pub slope: f64,
    /// Field elevation [ft]
    pub elevation_ft: f64,
    #[serde(default)]
    pub surface: Surface,
    /// Takeoff run available [ft]
    pub takeoff_run_ft: f64,
    /// Landing distance available [ft]
    pub landing_distance_ft: f64,
    #[serde(default)]
    pub contamination: Option<Contamination>,
}

impl Runway {
    /// Slope expressed in percent (0.01 → 1 %).
    pub fn slope_percent(&self) -> f64 {
        self.slope * 100.0
    }
}

/// -------------------------
/// Weather
/// -------------------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperature {
    /// Observed outside air temperature [°C]
    Celsius(f64),
    /// Use the standard atmosphere at field elevation.
    #[default]
    Standard,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    /// `None` is calm.
    #[serde(default)]
    pub wind: Option<Wind>,
    #[serde(default)]
    pub temperature: Temperature,
    pub altimeter_in_hg: f64,
}

impl Default for Weather {
    fn default() -> Self {
        Self::standard()
    }
}

impl Weather {
    /// Calm, ISA temperature, standard altimeter.
    pub fn standard() -> Self {
        Self { wind: None, temperature: Temperature::Standard, altimeter_in_hg: STANDARD_ALTIMETER_IN_HG }
    }

    /// Build from a QNH in hPa.
    pub fn with_qnh_hpa(wind: Option<Wind>, temperature: Temperature, qnh_hpa: f64) -> Self {
        Self { wind, temperature, altimeter_in_hg: hpa_to_in_hg(qnh_hpa) }
    }

    /// Outside air temperature [°C] at a field of the given elevation.
    pub fn temperature_c(&self, elevation_ft: f64) -> f64 {
        match self.temperature {
            Temperature::Celsius(t) => t,
            Temperature::Standard => isa_temperature_c(elevation_ft),
        }
    }

    /// Pressure altitude [ft] at a field of the given elevation.
    pub fn pressure_altitude_ft(&self, elevation_ft: f64) -> f64 {
        pressure_altitude_ft(elevation_ft, self.altimeter_in_hg)
    }

    /// The altimeter setting as QNH [hPa].
    pub fn qnh_hpa(&self) -> f64 {
        in_hg_to_hpa(self.altimeter_in_hg)
    }
}

/// A cruise altitude to climb to, and the temperature there.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aloft {
    pub pressure_altitude_ft: f64,
    #[serde(default)]
    pub temperature: Temperature,
}

impl Aloft {
    /// Outside air temperature [°C] at altitude, ISA when not given.
    pub fn temperature_c(&self) -> f64 {
        match self.temperature {
            Temperature::Celsius(t) => t,
            Temperature::Standard => isa_temperature_c(self.pressure_altitude_ft),
        }
    }
}

/// -------------------------
/// Configuration
/// -------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlapSetting {
    Up,
    Flaps50,
    Flaps100,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown flap setting {0:?} (expected UP, 50 or 100)")]
pub struct ParseFlapSettingError(pub String);

impl FromStr for FlapSetting {
    type Err = ParseFlapSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('%').to_ascii_uppercase().as_str() {
            "UP" | "0" => Ok(Self::Up),
            "50" => Ok(Self::Flaps50),
            "100" => Ok(Self::Flaps100),
            _ => Err(ParseFlapSettingError(s.to_owned())),
        }
    }
}

impl fmt::Display for FlapSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => f.write_str("UP"),
            Self::Flaps50 => f.write_str("50%"),
            Self::Flaps100 => f.write_str("100%"),
        }
    }
}

/// Flap setting plus whether ice accretion is present (ice protection on).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    pub flaps: FlapSetting,
    #[serde(default)]
    pub ice: bool,
}

impl Configuration {
    pub fn new(flaps: FlapSetting, ice: bool) -> Self {
        Self { flaps, ice }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn standard_temperature_follows_elevation() {
        let wx = Weather::standard();
        assert_relative_eq!(wx.temperature_c(0.0), 15.0);
        assert_relative_eq!(wx.temperature_c(5000.0), 5.1, max_relative = 1e-12);

        let hot = Weather { temperature: Temperature::Celsius(35.0), ..wx };
        assert_relative_eq!(hot.temperature_c(5000.0), 35.0);
    }

    #[test]
    fn qnh_in_hpa_is_converted() {
        let wx = Weather::with_qnh_hpa(None, Temperature::Standard, 1013.2076);
        assert_relative_eq!(wx.altimeter_in_hg, 29.92, max_relative = 1e-6);
        assert_relative_eq!(wx.qnh_hpa(), 1013.2076, max_relative = 1e-12);
    }

    #[test]
    fn aloft_defaults_to_isa() {
        let cruise: Aloft = serde_json::from_str(r#"{"pressure_altitude_ft": 10000.0}"#).unwrap();
        assert_relative_eq!(cruise.temperature_c(), 15.0 - 19.8, max_relative = 1e-12);

        let cold: Aloft =
            serde_json::from_str(r#"{"pressure_altitude_ft": 10000.0, "temperature": {"celsius": -20.0}}"#).unwrap();
        assert_relative_eq!(cold.temperature_c(), -20.0);
    }

    #[test]
    fn flap_settings_parse() {
        assert_eq!("up".parse::<FlapSetting>(), Ok(FlapSetting::Up));
        assert_eq!("50%".parse::<FlapSetting>(), Ok(FlapSetting::Flaps50));
        assert_eq!(" 100 ".parse::<FlapSetting>(), Ok(FlapSetting::Flaps100));
        assert!("25".parse::<FlapSetting>().is_err());
        assert_eq!(FlapSetting::Flaps50.to_string().parse::<FlapSetting>(), Ok(FlapSetting::Flaps50));
    }

    #[test]
    fn zero_depth_water_is_dry() {
        let wet = Contamination { kind: ContaminationKind::Water, depth_in: 0.0 };
        assert!(!wet.is_effective());
        let snow = Contamination { kind: ContaminationKind::CompactSnow, depth_in: 0.0 };
        assert!(snow.is_effective());
    }

    #[test]
    fn runway_snapshot_from_json() {
        let rwy: Runway = serde_json::from_str(
            r#"{
                "designator": "30",
                "heading_deg": 302.0,
                "elevation_ft": 5355.0,
                "surface": "turf",
                "takeoff_run_ft": 7200.0,
                "landing_distance_ft": 7200.0,
                "contamination": { "kind": "slush_wet_snow", "depth_in": 0.25 }
            }"#,
        )
        .unwrap();
        assert_eq!(rwy.surface, Surface::Turf);
        assert_relative_eq!(rwy.slope, 0.0);
        assert_eq!(rwy.contamination.map(|c| c.kind), Some(ContaminationKind::SlushWetSnow));
    }
}
