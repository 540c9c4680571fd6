//! Offscale classification and the go-around climb check.

use told_core::{Configuration, Envelope, FlapSetting, Outcome, WindComponents};
use tracing::debug;

use crate::corrections::Metric;

/// Strongest tailwind the correction data covers [kt].
pub const MAX_TAILWIND_KT: f64 = 10.0;
/// Steepest slope the correction data covers [%].
pub const MAX_SLOPE_PERCENT: f64 = 2.0;

/// Envelope implied by the corrections themselves: tailwind or slope beyond
/// the correction data is above-envelope for the distance figures.
pub fn correction_envelope(metric: Metric, wind: &WindComponents, slope_percent: f64) -> Envelope {
    if metric.is_distance() && (wind.tailwind_kt > MAX_TAILWIND_KT || slope_percent.abs() > MAX_SLOPE_PERCENT) {
        Envelope::Above
    } else {
        Envelope::Within
    }
}

/// Merge an extra classification into a result. The more severe side wins;
/// nothing is ever moved back inside the envelope.
pub fn classify(metric: Metric, outcome: Outcome, extra: Envelope) -> Outcome {
    let merged = match outcome {
        Outcome::Value(v) => Outcome::classified(v, extra),
        Outcome::Offscale { value, side } => Outcome::Offscale {
            value,
            side: Envelope::from(side).worst(extra).offscale().unwrap_or(side),
        },
        other => other,
    };
    if let Outcome::Offscale { value, side } = merged {
        debug!(?metric, ?value, ?side, "offscale result");
    }
    merged
}

/// One row of the go-around decision table: the required gradient is not met
/// above `weight_lb`, at or above `pressure_altitude_ft` and above
/// `temperature_c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoAroundLimit {
    pub weight_lb: f64,
    pub pressure_altitude_ft: f64,
    pub temperature_c: f64,
}

impl GoAroundLimit {
    const fn new(weight_lb: f64, pressure_altitude_ft: f64, temperature_c: f64) -> Self {
        Self { weight_lb, pressure_altitude_ft, temperature_c }
    }

    fn exceeded(&self, weight_lb: f64, pressure_altitude_ft: f64, temperature_c: f64) -> bool {
        weight_lb > self.weight_lb
            && pressure_altitude_ft >= self.pressure_altitude_ft
            && temperature_c > self.temperature_c
    }
}

const FLAPS_100: &[GoAroundLimit] = &[
    GoAroundLimit::new(5000.0, 8000.0, 25.0),
    GoAroundLimit::new(5000.0, 6000.0, 35.0),
    GoAroundLimit::new(5300.0, 4000.0, 35.0),
    GoAroundLimit::new(5300.0, 2000.0, 45.0),
];
const FLAPS_50: &[GoAroundLimit] = &[
    GoAroundLimit::new(5300.0, 8000.0, 35.0),
    GoAroundLimit::new(5300.0, 6000.0, 45.0),
];
const FLAPS_UP: &[GoAroundLimit] = &[];
const FLAPS_50_ICE: &[GoAroundLimit] = &[
    GoAroundLimit::new(4800.0, 6000.0, 0.0),
    GoAroundLimit::new(5200.0, 2000.0, 5.0),
];

/// Decision-table rows for a configuration; `None` when it has no go-around data.
pub fn go_around_limits(configuration: Configuration) -> Option<&'static [GoAroundLimit]> {
    match (configuration.flaps, configuration.ice) {
        (FlapSetting::Flaps100, false) => Some(FLAPS_100),
        (FlapSetting::Flaps100, true) => None,
        (FlapSetting::Flaps50, false) => Some(FLAPS_50),
        (FlapSetting::Flaps50, true) => Some(FLAPS_50_ICE),
        (FlapSetting::Up, _) => Some(FLAPS_UP),
    }
}

/// Whether the go-around climb gradient is met. True unless a limit matches.
pub fn meets_go_around_climb_gradient(
    limits: &[GoAroundLimit],
    weight_lb: f64,
    pressure_altitude_ft: f64,
    temperature_c: f64,
) -> bool {
    !limits.iter().any(|l| l.exceeded(weight_lb, pressure_altitude_ft, temperature_c))
}
