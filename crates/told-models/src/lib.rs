//! told-models
//!
//! Raw (uncorrected) performance data for each supported [`Aircraft`],
//! exposed through two interchangeable strategies:
//!
//!   - [`TabularData`]: dimensional table lookups, offscale detected
//!     structurally when the query leaves the grid;
//!   - [`RegressionData`]: quadratic fits in (weight, pressure altitude, OAT),
//!     offscale classified against explicit per-fit bounds.
//!
//! Both implement [`PerformanceData`]; callers pick one per calculation.
//!
//! Units: weight lb, pressure altitude ft, temperature °C, distances ft,
//! speeds KIAS, climb gradient ft/nmi, climb rate ft/min. Time, fuel and
//! distance to climb are min, US gal and nmi from sea level.

pub mod coefficients;
pub mod contamination;
pub mod regression;
pub mod table;
pub mod tabular;

pub use contamination::ContaminationTables;
pub use regression::{fit_quadratic, Bounds, Fit, FitError, Quadratic, RegressionData};
pub use table::{scale_factor, DataTable, TableError};
pub use tabular::TabularData;

use serde::{Deserialize, Serialize};
use told_core::Outcome;

/// Aircraft model whose data set backs a calculation.
///
/// The G2+ has its own takeoff, takeoff climb and landing data. Vref, enroute
/// climb and time/fuel/distance to climb are common to both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aircraft {
    #[default]
    G1,
    G2Plus,
}

/// The inputs every base estimate is indexed by.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub weight_lb: f64,
    pub pressure_altitude_ft: f64,
    pub temperature_c: f64,
}

impl DataPoint {
    /// `[weight, pressure altitude, temperature]`, the table dimension order.
    pub fn as_array(&self) -> [f64; 3] {
        [self.weight_lb, self.pressure_altitude_ft, self.temperature_c]
    }
}

/// Landing configurations that have their own data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LandingData {
    Flaps50,
    Flaps50Ice,
    Flaps100,
}

/// Vref configurations that have their own data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VrefData {
    Up,
    UpIce,
    Flaps50,
    Flaps50Ice,
    Flaps100,
}

/// Enroute climb data sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnrouteClimbData {
    Normal,
    /// Ice accumulated on the airframe.
    Ice,
}

/// A source of raw performance figures. Takeoff data is for flaps 50.
///
/// Enroute climb is indexed by the altitude and temperature aloft; time, fuel
/// and distance to climb are accumulated from sea level to the given altitude.
pub trait PerformanceData: Send + Sync {
    fn takeoff_ground_roll(&self, point: &DataPoint) -> Outcome;
    fn takeoff_total_distance(&self, point: &DataPoint) -> Outcome;
    /// ft/nmi
    fn takeoff_climb_gradient(&self, point: &DataPoint) -> Outcome;
    /// ft/min
    fn takeoff_climb_rate(&self, point: &DataPoint) -> Outcome;
    fn landing_ground_roll(&self, data: LandingData, point: &DataPoint) -> Outcome;
    fn landing_total_distance(&self, data: LandingData, point: &DataPoint) -> Outcome;
    fn vref(&self, data: VrefData, point: &DataPoint) -> Outcome;
    /// ft/nmi
    fn enroute_climb_gradient(&self, data: EnrouteClimbData, point: &DataPoint) -> Outcome;
    /// ft/min
    fn enroute_climb_rate(&self, data: EnrouteClimbData, point: &DataPoint) -> Outcome;
    /// KIAS
    fn enroute_climb_speed(&self, data: EnrouteClimbData, point: &DataPoint) -> Outcome;
    /// min
    fn time_to_climb(&self, point: &DataPoint) -> Outcome;
    /// US gal
    fn fuel_to_climb(&self, point: &DataPoint) -> Outcome;
    /// nmi
    fn distance_to_climb(&self, point: &DataPoint) -> Outcome;
}

/* -------------------------------- tests -------------------------------- */
