//! The performance model: one immutable snapshot of runway, weather, weight
//! and configuration, answering every metric as a tagged [`Outcome`].

use serde::{Deserialize, Serialize};
use told_core::atmosphere::density_altitude_ft;
use told_core::{Aloft, Configuration, FlapSetting, Outcome, Runway, Weather, WindComponents};
use told_models::{
    ContaminationTables, DataPoint, EnrouteClimbData, LandingData, PerformanceData, RegressionData, TabularData,
    VrefData,
};
use tracing::debug;

use crate::corrections::{CorrectionFactors, Metric, Pipeline};
use crate::offscale::{classify, correction_envelope, go_around_limits, meets_go_around_climb_gradient};
use crate::settings::{Settings, Strategy};

/// Everything the pilot has entered for one calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    /// `None` until a runway is selected.
    #[serde(default)]
    pub runway: Option<Runway>,
    #[serde(default)]
    pub weather: Weather,
    pub weight_lb: f64,
    #[serde(default)]
    pub configuration: Option<Configuration>,
}

/// Where a landing figure comes from: a data set, optionally scaled.
type LandingSource = (LandingData, Option<f64>);

pub struct PerformanceModel<'a> {
    conditions: Conditions,
    settings: Settings,
    data: &'a dyn PerformanceData,
    factors: &'a CorrectionFactors,
    contamination: &'a ContaminationTables,
}

impl PerformanceModel<'static> {
    /// Model backed by the reference data for the configured aircraft and
    /// strategy.
    pub fn new(conditions: Conditions, settings: Settings) -> Self {
        let aircraft = settings.aircraft();
        let data: &'static dyn PerformanceData = match settings.strategy() {
            Strategy::Tabular => TabularData::reference(aircraft),
            Strategy::Regression => RegressionData::reference(aircraft),
        };
        Self::with_data(conditions, settings, data)
    }
}

impl<'a> PerformanceModel<'a> {
    /// Model backed by a caller-supplied data source.
    pub fn with_data(conditions: Conditions, settings: Settings, data: &'a dyn PerformanceData) -> Self {
        debug!(
            aircraft = ?settings.aircraft(),
            strategy = ?settings.strategy(),
            safety_margin = settings.safety_margin(),
            runway = conditions.runway.as_ref().map(|r| r.designator.as_str()),
            weight_lb = conditions.weight_lb,
            configuration = ?conditions.configuration,
            "performance model built"
        );
        Self {
            conditions,
            settings,
            data,
            factors: CorrectionFactors::reference(),
            contamination: ContaminationTables::reference(),
        }
    }

    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /* ------------------------------ takeoff ------------------------------ */

    pub fn takeoff_ground_roll(&self) -> Outcome {
        self.takeoff(Metric::TakeoffGroundRoll, |d, p| d.takeoff_ground_roll(p))
    }

    pub fn takeoff_total_distance(&self) -> Outcome {
        self.takeoff(Metric::TakeoffTotalDistance, |d, p| d.takeoff_total_distance(p))
    }

    /// Climb gradient [ft/nmi].
    pub fn takeoff_climb_gradient(&self) -> Outcome {
        self.takeoff(Metric::TakeoffClimbGradient, |d, p| d.takeoff_climb_gradient(p))
    }

    /// Climb rate [ft/min].
    pub fn takeoff_climb_rate(&self) -> Outcome {
        self.takeoff(Metric::TakeoffClimbRate, |d, p| d.takeoff_climb_rate(p))
    }

    /* ------------------------------ landing ------------------------------ */

    pub fn landing_ground_roll(&self) -> Outcome {
        self.landing(Metric::LandingGroundRoll, |d, source, p| d.landing_ground_roll(source, p))
    }

    pub fn landing_total_distance(&self) -> Outcome {
        self.landing(Metric::LandingTotalDistance, |d, source, p| d.landing_total_distance(source, p))
    }

    /// Reference speed [KIAS] for the landing configuration.
    pub fn vref(&self) -> Outcome {
        let Some(point) = self.point() else {
            return Outcome::Unavailable;
        };
        let Some(configuration) = self.conditions.configuration else {
            return Outcome::Unavailable;
        };
        let source = match (configuration.flaps, configuration.ice) {
            (FlapSetting::Up, false) => VrefData::Up,
            (FlapSetting::Up, true) => VrefData::UpIce,
            (FlapSetting::Flaps50, false) => VrefData::Flaps50,
            (FlapSetting::Flaps50, true) => VrefData::Flaps50Ice,
            (FlapSetting::Flaps100, false) => VrefData::Flaps100,
            (FlapSetting::Flaps100, true) => return Outcome::NotAuthorized,
        };
        self.finish(Metric::Vref, self.data.vref(source, &point), None)
    }

    /// Whether the go-around climb gradient is achievable in the landing
    /// configuration.
    pub fn meets_go_around_climb_gradient(&self) -> Outcome<bool> {
        let Some(point) = self.point() else {
            return Outcome::Unavailable;
        };
        let Some(configuration) = self.conditions.configuration else {
            return Outcome::Unavailable;
        };
        match go_around_limits(configuration) {
            Some(limits) => Outcome::Value(meets_go_around_climb_gradient(
                limits,
                point.weight_lb,
                point.pressure_altitude_ft,
                point.temperature_c,
            )),
            None => Outcome::NotAuthorized,
        }
    }

    /// Runway left over after the takeoff ground roll [ft]; negative when the
    /// roll does not fit.
    pub fn takeoff_run_remaining(&self) -> Outcome {
        let Some(runway) = self.conditions.runway.as_ref() else {
            return Outcome::Unavailable;
        };
        self.takeoff_ground_roll().map(|roll| runway.takeoff_run_ft - roll)
    }

    /// Landing distance available less the landing total distance [ft].
    pub fn landing_distance_remaining(&self) -> Outcome {
        let Some(runway) = self.conditions.runway.as_ref() else {
            return Outcome::Unavailable;
        };
        self.landing_total_distance().map(|distance| runway.landing_distance_ft - distance)
    }

    /* ------------------------------- enroute ----------------------------- */

    /// Enroute climb gradient at altitude [ft/nmi]. Uses the ice data when
    /// the configuration reports ice.
    pub fn enroute_climb_gradient(&self, aloft: &Aloft) -> Outcome {
        self.enroute(Metric::EnrouteClimbGradient, aloft, |d, source, p| d.enroute_climb_gradient(source, p))
    }

    /// Enroute climb rate at altitude [ft/min].
    pub fn enroute_climb_rate(&self, aloft: &Aloft) -> Outcome {
        self.enroute(Metric::EnrouteClimbRate, aloft, |d, source, p| d.enroute_climb_rate(source, p))
    }

    /// Enroute climb speed at altitude [KIAS].
    pub fn enroute_climb_speed(&self, aloft: &Aloft) -> Outcome {
        self.enroute(Metric::EnrouteClimbSpeed, aloft, |d, source, p| d.enroute_climb_speed(source, p))
    }

    /// Minutes from the field to `aloft`.
    pub fn time_to_climb(&self, aloft: &Aloft) -> Outcome {
        self.to_climb(Metric::TimeToClimb, aloft, |d, p| d.time_to_climb(p))
    }

    /// Fuel [US gal] from the field to `aloft`.
    pub fn fuel_to_climb(&self, aloft: &Aloft) -> Outcome {
        self.to_climb(Metric::FuelToClimb, aloft, |d, p| d.fuel_to_climb(p))
    }

    /// Ground distance [nmi] from the field to `aloft`.
    pub fn distance_to_climb(&self, aloft: &Aloft) -> Outcome {
        self.to_climb(Metric::DistanceToClimb, aloft, |d, p| d.distance_to_climb(p))
    }

    /* -------------------------- derived display -------------------------- */

    pub fn pressure_altitude(&self) -> Option<f64> {
        self.point().map(|p| p.pressure_altitude_ft)
    }

    pub fn density_altitude(&self) -> Option<f64> {
        self.point().map(|p| density_altitude_ft(p.pressure_altitude_ft, p.temperature_c))
    }

    /// Wind resolved along the runway; calm gives all zeros.
    pub fn wind_components(&self) -> Option<WindComponents> {
        let runway = self.conditions.runway.as_ref()?;
        Some(
            self.conditions
                .weather
                .wind
                .map(|w| w.components(runway.heading_deg))
                .unwrap_or_default(),
        )
    }

    /* ------------------------------ internals ---------------------------- */

    fn point(&self) -> Option<DataPoint> {
        let runway = self.conditions.runway.as_ref()?;
        let weather = &self.conditions.weather;
        Some(DataPoint {
            weight_lb: self.conditions.weight_lb,
            pressure_altitude_ft: weather.pressure_altitude_ft(runway.elevation_ft),
            temperature_c: weather.temperature_c(runway.elevation_ft),
        })
    }

    fn aloft_point(&self, aloft: &Aloft) -> DataPoint {
        DataPoint {
            weight_lb: self.conditions.weight_lb,
            pressure_altitude_ft: aloft.pressure_altitude_ft,
            temperature_c: aloft.temperature_c(),
        }
    }

    fn enroute(
        &self,
        metric: Metric,
        aloft: &Aloft,
        base: impl Fn(&dyn PerformanceData, EnrouteClimbData, &DataPoint) -> Outcome,
    ) -> Outcome {
        let source = match self.conditions.configuration {
            Some(c) if c.ice => EnrouteClimbData::Ice,
            _ => EnrouteClimbData::Normal,
        };
        self.finish(metric, base(self.data, source, &self.aloft_point(aloft)), None)
    }

    /// The climb charts run from sea level, so the field's share is taken off.
    fn to_climb(
        &self,
        metric: Metric,
        aloft: &Aloft,
        base: impl Fn(&dyn PerformanceData, &DataPoint) -> Outcome,
    ) -> Outcome {
        let Some(field) = self.point() else {
            return Outcome::Unavailable;
        };
        let from = base(self.data, &field);
        let to = base(self.data, &self.aloft_point(aloft));
        let climb = to.and_then(|to| from.map(|from| (to - from).max(0.0)));
        self.finish(metric, climb, None)
    }

    /// Takeoff data exists for flaps 50 only; ice does not change it.
    fn takeoff_authorized(&self) -> bool {
        self.conditions
            .configuration
            .map_or(true, |c| c.flaps == FlapSetting::Flaps50)
    }

    fn takeoff(&self, metric: Metric, base: impl Fn(&dyn PerformanceData, &DataPoint) -> Outcome) -> Outcome {
        let Some(point) = self.point() else {
            return Outcome::Unavailable;
        };
        if !self.takeoff_authorized() {
            return Outcome::NotAuthorized;
        }
        self.finish(metric, base(self.data, &point), None)
    }

    fn landing_source(&self, metric: Metric, configuration: Configuration) -> Option<LandingSource> {
        let ice = configuration.ice;
        match configuration.flaps {
            FlapSetting::Flaps100 if ice => None,
            FlapSetting::Flaps100 => Some((LandingData::Flaps100, None)),
            FlapSetting::Flaps50 if ice => Some((LandingData::Flaps50Ice, None)),
            FlapSetting::Flaps50 => Some((LandingData::Flaps50, None)),
            FlapSetting::Up if metric == Metric::LandingGroundRoll => {
                let borrowed = if ice { LandingData::Flaps50Ice } else { LandingData::Flaps50 };
                Some((borrowed, Some(self.factors.flaps_up_landing_ground_roll)))
            }
            FlapSetting::Up => None,
        }
    }

    fn landing(
        &self,
        metric: Metric,
        base: impl Fn(&dyn PerformanceData, LandingData, &DataPoint) -> Outcome,
    ) -> Outcome {
        let Some(point) = self.point() else {
            return Outcome::Unavailable;
        };
        let Some(configuration) = self.conditions.configuration else {
            return Outcome::Unavailable;
        };
        let Some((source, factor)) = self.landing_source(metric, configuration) else {
            return Outcome::NotAuthorized;
        };
        self.finish(metric, base(self.data, source, &point), factor)
    }

    /// Run the correction pipeline and the classifier on a base result.
    fn finish(&self, metric: Metric, base: Outcome, configuration_factor: Option<f64>) -> Outcome {
        let Some(runway) = self.conditions.runway.as_ref() else {
            return Outcome::Unavailable;
        };
        let wind = self.wind_components().unwrap_or_default();
        let pipeline = Pipeline {
            factors: self.factors,
            contamination_tables: self.contamination,
            wind,
            slope_percent: runway.slope_percent(),
            surface: runway.surface,
            contamination: runway.contamination,
            safety_margin: self.settings.safety_margin(),
        };
        let corrected = pipeline.correct(metric, base, configuration_factor);
        classify(metric, corrected, correction_envelope(metric, &wind, pipeline.slope_percent))
    }
}
