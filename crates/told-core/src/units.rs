//! Unit conversions used at the engine's boundary.
//!
//! Performance data is indexed in aviation units (feet, inches of mercury,
//! knots); pressure is also reported as hPa for QNH users.

use uom::si::f64::{Length, Pressure};
use uom::si::length::{foot, nautical_mile};
use uom::si::pressure::{hectopascal, inch_of_mercury};

pub fn in_hg_to_hpa(p: f64) -> f64 { Pressure::new::<inch_of_mercury>(p).get::<hectopascal>() }
pub fn hpa_to_in_hg(p: f64) -> f64 { Pressure::new::<hectopascal>(p).get::<inch_of_mercury>() }

/// Convert a climb gradient in ft/nmi to percent (rise over run).
pub fn ft_per_nm_to_percent(gradient: f64) -> f64 {
    let run_ft = Length::new::<nautical_mile>(1.0).get::<foot>();
    gradient / run_ft * 100.0
}
