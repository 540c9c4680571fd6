//! Closed-form regression fits.
//!
//! Each metric/configuration is a degree-2 polynomial with intercept in
//! (weight, pressure altitude, temperature), least-squares fit to the same
//! flight-test data as the tables. A polynomial always yields a number, even
//! far outside the data, so every fit carries explicit inclusive bounds that
//! classify the inputs instead.

use nalgebra::{DMatrix, DVector, SVector, Vector3};
use thiserror::Error;
use told_core::{Envelope, Outcome};

use crate::coefficients;
use crate::table::DataTable;
use crate::{Aircraft, DataPoint, EnrouteClimbData, LandingData, PerformanceData, VrefData};

/// Polynomial terms, in order: `w, a, t, w², w·a, w·t, a², a·t, t²`.
pub const FEATURES: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quadratic {
    pub intercept: f64,
    pub coefficients: [f64; FEATURES],
}

impl Quadratic {
    pub const fn new(intercept: f64, coefficients: [f64; FEATURES]) -> Self {
        Self { intercept, coefficients }
    }

    pub fn features(x: &Vector3<f64>) -> SVector<f64, FEATURES> {
        let (w, a, t) = (x[0], x[1], x[2]);
        SVector::from([w, a, t, w * w, w * a, w * t, a * a, a * t, t * t])
    }

    pub fn evaluate(&self, point: &DataPoint) -> f64 {
        let x = Vector3::from(point.as_array());
        self.intercept + SVector::from(self.coefficients).dot(&Self::features(&x))
    }
}

/// Inclusive `(min, max)` per input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub weight_lb: (f64, f64),
    pub pressure_altitude_ft: (f64, f64),
    pub temperature_c: (f64, f64),
}

pub const UNBOUNDED: (f64, f64) = (f64::NEG_INFINITY, f64::INFINITY);

impl Bounds {
    /// Any input above its bound makes the point above-envelope, even when
    /// another input is below its own. A non-finite input is above.
    pub fn classify(&self, point: &DataPoint) -> Envelope {
        [
            (point.weight_lb, self.weight_lb),
            (point.pressure_altitude_ft, self.pressure_altitude_ft),
            (point.temperature_c, self.temperature_c),
        ]
        .into_iter()
        .fold(Envelope::Within, |envelope, (x, (min, max))| {
            let this = if !x.is_finite() || x > max {
                Envelope::Above
            } else if x < min {
                Envelope::Below
            } else {
                Envelope::Within
            };
            envelope.worst(this)
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    pub polynomial: Quadratic,
    pub bounds: Bounds,
}

impl Fit {
    pub const fn new(polynomial: Quadratic, bounds: Bounds) -> Self {
        Self { polynomial, bounds }
    }

    /// Evaluate and classify. Out-of-bounds inputs still get the extrapolated value.
    pub fn estimate(&self, point: &DataPoint) -> Outcome {
        Outcome::classified(self.polynomial.evaluate(point), self.bounds.classify(point))
    }
}

/* ------------------------------- fitting ------------------------------- */

#[derive(Debug, Error)]
pub enum FitError {
    #[error("cannot fit a {0}-dimensional table (at most 3 inputs)")]
    Dimensions(usize),
    #[error("{rows} rows cannot determine {needed} coefficients")]
    TooFewRows { rows: usize, needed: usize },
    #[error("least-squares solve failed: {0}")]
    Solve(&'static str),
}

/// Least-squares fit of a [`Quadratic`] to a table's rows.
///
/// Tables with fewer than three inputs leave the missing inputs' terms at
/// zero. Columns are scaled to unit magnitude before the SVD solve; raw
/// weights and altitudes squared differ by many orders of magnitude.
pub fn fit_quadratic(table: &DataTable) -> Result<Quadratic, FitError> {
    let dims = table.dimensions();
    let used = match dims {
        1 => 2,
        2 => 5,
        3 => FEATURES,
        n => return Err(FitError::Dimensions(n)),
    };
    let rows = table.rows();
    if rows.len() < used + 1 {
        return Err(FitError::TooFewRows { rows: rows.len(), needed: used + 1 });
    }

    let mut design = DMatrix::<f64>::zeros(rows.len(), FEATURES + 1);
    let mut targets = DVector::<f64>::zeros(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let mut x = Vector3::zeros();
        for (d, v) in row[..dims].iter().enumerate() {
            x[d] = *v;
        }
        design[(i, 0)] = 1.0;
        for (j, f) in Quadratic::features(&x).iter().enumerate() {
            design[(i, j + 1)] = *f;
        }
        targets[i] = row[dims];
    }

    let mut scales = [1.0; FEATURES + 1];
    for (j, scale) in scales.iter_mut().enumerate() {
        let m = design.column(j).amax();
        if m > 0.0 {
            *scale = m;
            for v in design.column_mut(j).iter_mut() {
                *v /= m;
            }
        }
    }

    let solution = design.svd(true, true).solve(&targets, 1e-9).map_err(FitError::Solve)?;

    let mut coefficients = [0.0; FEATURES];
    for (j, c) in coefficients.iter_mut().enumerate() {
        *c = solution[j + 1] / scales[j + 1];
    }
    Ok(Quadratic::new(solution[0] / scales[0], coefficients))
}

/* --------------------------- reference data set --------------------------- */

const TAKEOFF: Bounds = Bounds {
    weight_lb: (5000.0, 6000.0),
    pressure_altitude_ft: (0.0, 10_000.0),
    temperature_c: (-20.0, 50.0),
};
const CLIMB: Bounds = Bounds { weight_lb: (4500.0, 6000.0), ..TAKEOFF };
const LANDING: Bounds = Bounds {
    weight_lb: (4500.0, 5550.0),
    pressure_altitude_ft: (0.0, 10_000.0),
    temperature_c: (0.0, 50.0),
};
const LANDING_ICE: Bounds = Bounds { temperature_c: (-20.0, 10.0), ..LANDING };
const VREF: Bounds = Bounds {
    weight_lb: (4000.0, 6000.0),
    pressure_altitude_ft: UNBOUNDED,
    temperature_c: UNBOUNDED,
};
const ENROUTE: Bounds = Bounds {
    weight_lb: (4500.0, 6000.0),
    pressure_altitude_ft: (0.0, 20_000.0),
    temperature_c: (-40.0, 40.0),
};
const ENROUTE_ICE: Bounds = Bounds { temperature_c: (-40.0, 10.0), ..ENROUTE };
const TO_CLIMB: Bounds = Bounds { pressure_altitude_ft: (0.0, 28_000.0), ..ENROUTE };

/// Takeoff fits, flaps 50.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TakeoffFits {
    pub ground_roll: Fit,
    pub total_distance: Fit,
    pub climb_gradient: Fit,
    pub climb_rate: Fit,
}

/// Ground roll and total distance fits for one landing configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandingFits {
    pub ground_roll: Fit,
    pub total_distance: Fit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VrefFits {
    pub up: Fit,
    pub up_ice: Fit,
    pub flaps_50: Fit,
    pub flaps_50_ice: Fit,
    pub flaps_100: Fit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnrouteClimbFits {
    pub gradient: Fit,
    pub rate: Fit,
    pub speed: Fit,
}

/// Time, fuel and distance from sea level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToClimbFits {
    pub time: Fit,
    pub fuel: Fit,
    pub distance: Fit,
}

/// The full set of regression fits backing the regression strategy for one
/// aircraft.
#[derive(Clone, Debug, PartialEq)]
pub struct RegressionData {
    pub takeoff: TakeoffFits,
    pub landing_flaps_100: LandingFits,
    pub landing_flaps_50: LandingFits,
    pub landing_flaps_50_ice: LandingFits,
    pub vref: VrefFits,
    pub enroute_climb: EnrouteClimbFits,
    pub enroute_climb_ice: EnrouteClimbFits,
    pub to_climb: ToClimbFits,
}

const VREF_FITS: VrefFits = VrefFits {
    up: Fit::new(coefficients::VREF_UP, VREF),
    up_ice: Fit::new(coefficients::VREF_UP_ICE, VREF),
    flaps_50: Fit::new(coefficients::VREF_50, VREF),
    flaps_50_ice: Fit::new(coefficients::VREF_50_ICE, VREF),
    flaps_100: Fit::new(coefficients::VREF_100, VREF),
};
const ENROUTE_CLIMB_FITS: EnrouteClimbFits = EnrouteClimbFits {
    gradient: Fit::new(coefficients::ENROUTE_CLIMB_GRADIENT, ENROUTE),
    rate: Fit::new(coefficients::ENROUTE_CLIMB_RATE, ENROUTE),
    speed: Fit::new(coefficients::ENROUTE_CLIMB_SPEED, ENROUTE),
};
const ENROUTE_CLIMB_ICE_FITS: EnrouteClimbFits = EnrouteClimbFits {
    gradient: Fit::new(coefficients::ICE_ENROUTE_CLIMB_GRADIENT, ENROUTE_ICE),
    rate: Fit::new(coefficients::ICE_ENROUTE_CLIMB_RATE, ENROUTE_ICE),
    speed: Fit::new(coefficients::ICE_ENROUTE_CLIMB_SPEED, ENROUTE_ICE),
};
const TO_CLIMB_FITS: ToClimbFits = ToClimbFits {
    time: Fit::new(coefficients::TIME_TO_CLIMB, TO_CLIMB),
    fuel: Fit::new(coefficients::FUEL_TO_CLIMB, TO_CLIMB),
    distance: Fit::new(coefficients::DISTANCE_TO_CLIMB, TO_CLIMB),
};

/// Per-aircraft fits; both data sets share bounds and the common fits.
macro_rules! aircraft_fits {
    ($m:ident) => {
        RegressionData {
            takeoff: TakeoffFits {
                ground_roll: Fit::new(coefficients::$m::TAKEOFF_GROUND_ROLL, TAKEOFF),
                total_distance: Fit::new(coefficients::$m::TAKEOFF_TOTAL_DISTANCE, TAKEOFF),
                climb_gradient: Fit::new(coefficients::$m::TAKEOFF_CLIMB_GRADIENT, CLIMB),
                climb_rate: Fit::new(coefficients::$m::TAKEOFF_CLIMB_RATE, CLIMB),
            },
            landing_flaps_100: LandingFits {
                ground_roll: Fit::new(coefficients::$m::LANDING_100_GROUND_ROLL, LANDING),
                total_distance: Fit::new(coefficients::$m::LANDING_100_TOTAL_DISTANCE, LANDING),
            },
            landing_flaps_50: LandingFits {
                ground_roll: Fit::new(coefficients::$m::LANDING_50_GROUND_ROLL, LANDING),
                total_distance: Fit::new(coefficients::$m::LANDING_50_TOTAL_DISTANCE, LANDING),
            },
            landing_flaps_50_ice: LandingFits {
                ground_roll: Fit::new(coefficients::$m::LANDING_50_ICE_GROUND_ROLL, LANDING_ICE),
                total_distance: Fit::new(coefficients::$m::LANDING_50_ICE_TOTAL_DISTANCE, LANDING_ICE),
            },
            vref: VREF_FITS,
            enroute_climb: ENROUTE_CLIMB_FITS,
            enroute_climb_ice: ENROUTE_CLIMB_ICE_FITS,
            to_climb: TO_CLIMB_FITS,
        }
    };
}

static G1: RegressionData = aircraft_fits!(g1);
static G2_PLUS: RegressionData = aircraft_fits!(g2_plus);

impl RegressionData {
    /// Fits for an aircraft, derived from its shipped tables.
    pub fn reference(aircraft: Aircraft) -> &'static Self {
        match aircraft {
            Aircraft::G1 => &G1,
            Aircraft::G2Plus => &G2_PLUS,
        }
    }

    pub fn landing(&self, data: LandingData) -> &LandingFits {
        match data {
            LandingData::Flaps100 => &self.landing_flaps_100,
            LandingData::Flaps50 => &self.landing_flaps_50,
            LandingData::Flaps50Ice => &self.landing_flaps_50_ice,
        }
    }

    pub fn vref_fit(&self, data: VrefData) -> &Fit {
        match data {
            VrefData::Up => &self.vref.up,
            VrefData::UpIce => &self.vref.up_ice,
            VrefData::Flaps50 => &self.vref.flaps_50,
            VrefData::Flaps50Ice => &self.vref.flaps_50_ice,
            VrefData::Flaps100 => &self.vref.flaps_100,
        }
    }

    pub fn enroute(&self, data: EnrouteClimbData) -> &EnrouteClimbFits {
        match data {
            EnrouteClimbData::Normal => &self.enroute_climb,
            EnrouteClimbData::Ice => &self.enroute_climb_ice,
        }
    }
}

impl PerformanceData for RegressionData {
    fn takeoff_ground_roll(&self, point: &DataPoint) -> Outcome {
        self.takeoff.ground_roll.estimate(point)
    }

    fn takeoff_total_distance(&self, point: &DataPoint) -> Outcome {
        self.takeoff.total_distance.estimate(point)
    }

    fn takeoff_climb_gradient(&self, point: &DataPoint) -> Outcome {
        self.takeoff.climb_gradient.estimate(point)
    }

    fn takeoff_climb_rate(&self, point: &DataPoint) -> Outcome {
        self.takeoff.climb_rate.estimate(point)
    }

    fn landing_ground_roll(&self, data: LandingData, point: &DataPoint) -> Outcome {
        self.landing(data).ground_roll.estimate(point)
    }

    fn landing_total_distance(&self, data: LandingData, point: &DataPoint) -> Outcome {
        self.landing(data).total_distance.estimate(point)
    }

    fn vref(&self, data: VrefData, point: &DataPoint) -> Outcome {
        self.vref_fit(data).estimate(point)
    }

    fn enroute_climb_gradient(&self, data: EnrouteClimbData, point: &DataPoint) -> Outcome {
        self.enroute(data).gradient.estimate(point)
    }

    fn enroute_climb_rate(&self, data: EnrouteClimbData, point: &DataPoint) -> Outcome {
        self.enroute(data).rate.estimate(point)
    }

    fn enroute_climb_speed(&self, data: EnrouteClimbData, point: &DataPoint) -> Outcome {
        self.enroute(data).speed.estimate(point)
    }

    fn time_to_climb(&self, point: &DataPoint) -> Outcome {
        self.to_climb.time.estimate(point)
    }

    fn fuel_to_climb(&self, point: &DataPoint) -> Outcome {
        self.to_climb.fuel.estimate(point)
    }

    fn distance_to_climb(&self, point: &DataPoint) -> Outcome {
        self.to_climb.distance.estimate(point)
    }
}
