//! Correction pipeline: wind, slope, surface, contamination and safety margin
//! applied to a raw base value.
//!
//! Every step multiplies the payload of a value or offscale result and passes
//! not-authorized/unavailable through. Steps run in a fixed order, each as its
//! own multiplication, so results are reproducible step by step.

use told_core::{Contamination, Outcome, Surface, WindComponents};
use told_models::ContaminationTables;

/// The figures the engine computes. Climb figures are never corrected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    TakeoffGroundRoll,
    TakeoffTotalDistance,
    TakeoffClimbGradient,
    TakeoffClimbRate,
    LandingGroundRoll,
    LandingTotalDistance,
    Vref,
    EnrouteClimbGradient,
    EnrouteClimbRate,
    EnrouteClimbSpeed,
    TimeToClimb,
    FuelToClimb,
    DistanceToClimb,
}

impl Metric {
    pub fn is_distance(self) -> bool {
        matches!(
            self,
            Self::TakeoffGroundRoll | Self::TakeoffTotalDistance | Self::LandingGroundRoll | Self::LandingTotalDistance
        )
    }

    /// Whether the safety margin applies.
    pub fn takes_margin(self) -> bool {
        self.is_distance() || self == Self::Vref
    }
}

/// Fractional change per knot of wind component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindRates {
    pub headwind_per_kt: f64,
    pub tailwind_per_kt: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CorrectionFactors {
    pub takeoff_ground_roll_wind: WindRates,
    pub takeoff_total_distance_wind: WindRates,
    pub landing_ground_roll_wind: WindRates,
    pub landing_total_distance_wind: WindRates,
    /// Per 1 % of slope.
    pub takeoff_uphill_per_percent: f64,
    pub takeoff_downhill_per_percent: f64,
    pub landing_downhill_per_percent: f64,
    pub turf_takeoff_total_distance: f64,
    pub turf_landing_total_distance: f64,
    /// Landing ground roll with flaps up, as a multiple of the flaps 50 figure.
    pub flaps_up_landing_ground_roll: f64,
}

static REFERENCE: CorrectionFactors = CorrectionFactors {
    takeoff_ground_roll_wind: WindRates { headwind_per_kt: 0.007, tailwind_per_kt: 0.04 },
    takeoff_total_distance_wind: WindRates { headwind_per_kt: 0.006, tailwind_per_kt: 0.035 },
    landing_ground_roll_wind: WindRates { headwind_per_kt: 0.008, tailwind_per_kt: 0.046 },
    landing_total_distance_wind: WindRates { headwind_per_kt: 0.007, tailwind_per_kt: 0.041 },
    takeoff_uphill_per_percent: 0.10,
    takeoff_downhill_per_percent: 0.05,
    landing_downhill_per_percent: 0.08,
    turf_takeoff_total_distance: 0.20,
    turf_landing_total_distance: 0.15,
    flaps_up_landing_ground_roll: 1.35,
};

impl CorrectionFactors {
    pub fn reference() -> &'static Self {
        &REFERENCE
    }

    fn wind_rates(&self, metric: Metric) -> Option<WindRates> {
        match metric {
            Metric::TakeoffGroundRoll => Some(self.takeoff_ground_roll_wind),
            Metric::TakeoffTotalDistance => Some(self.takeoff_total_distance_wind),
            Metric::LandingGroundRoll => Some(self.landing_ground_roll_wind),
            Metric::LandingTotalDistance => Some(self.landing_total_distance_wind),
            Metric::TakeoffClimbGradient
            | Metric::TakeoffClimbRate
            | Metric::Vref
            | Metric::EnrouteClimbGradient
            | Metric::EnrouteClimbRate
            | Metric::EnrouteClimbSpeed
            | Metric::TimeToClimb
            | Metric::FuelToClimb
            | Metric::DistanceToClimb => None,
        }
    }

    /// Headwind shortens, tailwind lengthens.
    pub fn wind(&self, metric: Metric, value: f64, wind: &WindComponents) -> f64 {
        match self.wind_rates(metric) {
            Some(rates) if wind.tailwind_kt > 0.0 => value * (1.0 + rates.tailwind_per_kt * wind.tailwind_kt),
            Some(rates) => value * (1.0 - rates.headwind_per_kt * wind.headwind_kt),
            None => value,
        }
    }

    /// Slope in percent, positive uphill. Ground roll only.
    pub fn slope(&self, metric: Metric, value: f64, slope_percent: f64) -> f64 {
        match metric {
            Metric::TakeoffGroundRoll if slope_percent > 0.0 => {
                value * (1.0 + self.takeoff_uphill_per_percent * slope_percent)
            }
            Metric::TakeoffGroundRoll => value * (1.0 + self.takeoff_downhill_per_percent * slope_percent),
            // No credit for landing uphill.
            Metric::LandingGroundRoll if slope_percent < 0.0 => {
                value * (1.0 - self.landing_downhill_per_percent * slope_percent)
            }
            _ => value,
        }
    }

    /// Turf lengthens total distance only.
    pub fn surface(&self, metric: Metric, value: f64, surface: Surface) -> f64 {
        match (surface, metric) {
            (Surface::Turf, Metric::TakeoffTotalDistance) => value * (1.0 + self.turf_takeoff_total_distance),
            (Surface::Turf, Metric::LandingTotalDistance) => value * (1.0 + self.turf_landing_total_distance),
            _ => value,
        }
    }
}

/// Runway and weather state the corrections depend on, fixed for one
/// calculation.
#[derive(Clone, Copy, Debug)]
pub struct Pipeline<'a> {
    pub factors: &'a CorrectionFactors,
    pub contamination_tables: &'a ContaminationTables,
    pub wind: WindComponents,
    pub slope_percent: f64,
    pub surface: Surface,
    pub contamination: Option<Contamination>,
    pub safety_margin: f64,
}

impl Pipeline<'_> {
    /// Correct a base result for `metric`.
    ///
    /// `configuration_factor` scales a base value borrowed from another
    /// configuration's data and runs first.
    pub fn correct(&self, metric: Metric, base: Outcome, configuration_factor: Option<f64>) -> Outcome {
        let f = self.factors;
        let corrected = base
            .map(|v| configuration_factor.map_or(v, |k| v * k))
            .map(|v| f.wind(metric, v, &self.wind))
            .map(|v| f.slope(metric, v, self.slope_percent))
            .map(|v| f.surface(metric, v, self.surface));

        let corrected = match (metric, &self.contamination) {
            (Metric::LandingGroundRoll, Some(c)) => {
                corrected.and_then(|v| self.contamination_tables.ground_roll(c, v))
            }
            _ => corrected,
        };

        if metric.takes_margin() {
            corrected.map(|v| v * self.safety_margin)
        } else {
            corrected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use told_core::{ContaminationKind, Offscale};

    fn calm() -> WindComponents {
        WindComponents::default()
    }

    fn pipeline(wind: WindComponents, slope_percent: f64, surface: Surface, safety_margin: f64) -> Pipeline<'static> {
        Pipeline {
            factors: CorrectionFactors::reference(),
            contamination_tables: ContaminationTables::reference(),
            wind,
            slope_percent,
            surface,
            contamination: None,
            safety_margin,
        }
    }

    fn value(outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Value(v) => v,
            other => panic!("expected a value, got {other:?}"),
        }
    }

    #[test]
    fn ten_knots_on_takeoff_roll() {
        let f = CorrectionFactors::reference();
        let head = WindComponents { headwind_kt: 10.0, ..calm() };
        let tail = WindComponents { tailwind_kt: 10.0, ..calm() };
        assert_relative_eq!(f.wind(Metric::TakeoffGroundRoll, 1000.0, &head), 930.0, max_relative = 1e-12);
        assert_relative_eq!(f.wind(Metric::TakeoffGroundRoll, 1000.0, &tail), 1400.0, max_relative = 1e-12);
        assert_relative_eq!(f.wind(Metric::LandingTotalDistance, 1000.0, &tail), 1410.0, max_relative = 1e-12);
    }

    #[test]
    fn wind_leaves_speeds_and_climb_alone() {
        let f = CorrectionFactors::reference();
        let tail = WindComponents { tailwind_kt: 10.0, ..calm() };
        assert_eq!(f.wind(Metric::Vref, 90.0, &tail), 90.0);
        assert_eq!(f.wind(Metric::TakeoffClimbRate, 900.0, &tail), 900.0);
    }

    #[test]
    fn slope_by_direction() {
        let f = CorrectionFactors::reference();
        assert_relative_eq!(f.slope(Metric::TakeoffGroundRoll, 1000.0, 1.0), 1100.0, max_relative = 1e-12);
        assert_relative_eq!(f.slope(Metric::TakeoffGroundRoll, 1000.0, -1.0), 950.0, max_relative = 1e-12);
        assert_relative_eq!(f.slope(Metric::LandingGroundRoll, 1000.0, -2.0), 1160.0, max_relative = 1e-12);
        assert_eq!(f.slope(Metric::LandingGroundRoll, 1000.0, 2.0), 1000.0);
        assert_eq!(f.slope(Metric::TakeoffTotalDistance, 1000.0, 2.0), 1000.0);
    }

    #[test]
    fn turf_hits_total_distance_only() {
        let f = CorrectionFactors::reference();
        assert_relative_eq!(f.surface(Metric::TakeoffTotalDistance, 1000.0, Surface::Turf), 1200.0);
        assert_relative_eq!(f.surface(Metric::LandingTotalDistance, 1000.0, Surface::Turf), 1150.0);
        assert_eq!(f.surface(Metric::TakeoffGroundRoll, 1000.0, Surface::Turf), 1000.0);
        assert_eq!(f.surface(Metric::LandingTotalDistance, 1000.0, Surface::Paved), 1000.0);
    }

    #[test]
    fn margin_runs_last() {
        let head = WindComponents { headwind_kt: 5.0, ..calm() };
        let p = pipeline(head, 1.0, Surface::Paved, 1.1);
        let mut expected = 1000.0 * (1.0 - 0.007 * 5.0);
        expected *= 1.0 + 0.10 * 1.0;
        expected *= 1.1;
        assert_eq!(value(p.correct(Metric::TakeoffGroundRoll, Outcome::Value(1000.0), None)), expected);
    }

    #[test]
    fn margin_skips_climb_figures() {
        let tail = WindComponents { tailwind_kt: 5.0, ..calm() };
        let p = pipeline(tail, 1.5, Surface::Turf, 1.25);
        assert_eq!(value(p.correct(Metric::TakeoffClimbGradient, Outcome::Value(600.0), None)), 600.0);
        for metric in [Metric::EnrouteClimbSpeed, Metric::TimeToClimb, Metric::DistanceToClimb] {
            assert!(!metric.takes_margin());
            assert_eq!(value(p.correct(metric, Outcome::Value(42.0), None)), 42.0);
        }
        assert_relative_eq!(value(p.correct(Metric::Vref, Outcome::Value(80.0), None)), 100.0);
    }

    #[test]
    fn configuration_factor_runs_first() {
        let tail = WindComponents { tailwind_kt: 2.0, ..calm() };
        let p = pipeline(tail, 0.0, Surface::Paved, 1.0);
        let got = value(p.correct(Metric::LandingGroundRoll, Outcome::Value(1000.0), Some(1.35)));
        assert_eq!(got, 1000.0 * 1.35 * (1.0 + 0.046 * 2.0));
    }

    #[test]
    fn tags_pass_through() {
        let p = pipeline(calm(), 0.0, Surface::Turf, 1.1);
        assert_eq!(p.correct(Metric::LandingTotalDistance, Outcome::NotAuthorized, None), Outcome::NotAuthorized);
        assert_eq!(p.correct(Metric::TakeoffGroundRoll, Outcome::Unavailable, None), Outcome::Unavailable);

        let low = Outcome::Offscale { value: Some(1000.0), side: Offscale::Below };
        assert_eq!(
            p.correct(Metric::TakeoffTotalDistance, low, None),
            Outcome::Offscale { value: Some(1000.0 * 1.2 * 1.1), side: Offscale::Below }
        );
    }

    #[test]
    fn contamination_before_margin() {
        let mut p = pipeline(calm(), 0.0, Surface::Paved, 2.0);
        p.contamination = Some(Contamination { kind: ContaminationKind::CompactSnow, depth_in: 0.0 });
        // Compact snow is 1.35× the dry roll, then doubled.
        let got = value(p.correct(Metric::LandingGroundRoll, Outcome::Value(1250.0), None));
        assert_relative_eq!(got, 1250.0 * 1.35 * 2.0, max_relative = 1e-12);

        // Takeoff roll is unaffected.
        assert_eq!(value(p.correct(Metric::TakeoffGroundRoll, Outcome::Value(1250.0), None)), 2500.0);
    }

    #[test]
    fn contamination_keeps_a_short_roll() {
        let mut p = pipeline(calm(), 0.0, Surface::Paved, 1.0);
        p.contamination = Some(Contamination { kind: ContaminationKind::Water, depth_in: 0.2 });
        // Shorter than any charted dry roll: still scaled, flagged below.
        assert_eq!(
            p.correct(Metric::LandingGroundRoll, Outcome::Value(800.0), None),
            Outcome::Offscale { value: Some(800.0 * 1.3), side: Offscale::Below }
        );
    }
}
