//! Standard atmosphere helpers.
//!
//! The performance tables are indexed by pressure altitude and outside air
//! temperature, so every calculation starts by reducing field elevation and
//! the altimeter setting to a pressure altitude.

/// Standard altimeter setting [inHg]
pub const STANDARD_ALTIMETER_IN_HG: f64 = 29.92;
/// ISA sea-level temperature [°C]
pub const ISA_SEA_LEVEL_C: f64 = 15.0;
/// ISA temperature lapse [°C per ft]
pub const ISA_LAPSE_C_PER_FT: f64 = 1.98 / 1000.0;
/// Pressure altitude change per inHg of altimeter setting [ft]
pub const FT_PER_IN_HG: f64 = 1000.0;
/// Density altitude change per °C of ISA deviation [ft]
pub const FT_PER_ISA_DEVIATION_C: f64 = 118.8;

/// ISA temperature [°C] at the given altitude [ft].
pub fn isa_temperature_c(altitude_ft: f64) -> f64 {
    ISA_SEA_LEVEL_C - altitude_ft * ISA_LAPSE_C_PER_FT
}

/// Pressure altitude [ft] from field elevation [ft] and altimeter setting [inHg].
pub fn pressure_altitude_ft(elevation_ft: f64, altimeter_in_hg: f64) -> f64 {
    elevation_ft + (STANDARD_ALTIMETER_IN_HG - altimeter_in_hg) * FT_PER_IN_HG
}

/// Density altitude [ft] from pressure altitude [ft] and outside air temperature [°C].
pub fn density_altitude_ft(pressure_altitude_ft: f64, temperature_c: f64) -> f64 {
    let deviation = temperature_c - isa_temperature_c(pressure_altitude_ft);
    pressure_altitude_ft + FT_PER_ISA_DEVIATION_C * deviation
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn isa_matches_lapse_table() {
        assert_relative_eq!(isa_temperature_c(0.0), 15.0);
        assert_relative_eq!(isa_temperature_c(5000.0), 5.1, max_relative = 1e-12);
        assert_relative_eq!(isa_temperature_c(10_000.0), -4.8, max_relative = 1e-12);
    }

    #[test]
    fn low_altimeter_raises_pressure_altitude() {
        assert_relative_eq!(pressure_altitude_ft(1000.0, 29.92), 1000.0);
        assert_relative_eq!(pressure_altitude_ft(1000.0, 29.42), 1500.0, max_relative = 1e-9);
        assert_relative_eq!(pressure_altitude_ft(1000.0, 30.42), 500.0, max_relative = 1e-9);
    }

    #[test]
    fn hot_day_raises_density_altitude() {
        assert_relative_eq!(density_altitude_ft(0.0, 15.0), 0.0);
        assert_relative_eq!(density_altitude_ft(0.0, 35.0), 2376.0, max_relative = 1e-12);
        assert!(density_altitude_ft(4000.0, -10.0) < 4000.0);
    }
}
