// crates/told-ffi-wasm/src/lib.rs
//
// WASM + JSON bindings: one request in, one report with every metric out.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

// --- our crates ---
use told_core::units::ft_per_nm_to_percent;
use told_core::{Aloft, Offscale, Outcome};
use told_performance::{Conditions, PerformanceModel, Settings};

// Better panic messages in browser console
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

/* --------------------------- Shared DTOs (JS) --------------------------- */

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsRequest {
    pub conditions: Conditions,
    #[serde(default)]
    pub settings: Settings,
    /// Cruise altitude for the enroute figures; they are unavailable without one.
    #[serde(default)]
    pub climb: Option<Aloft>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsStatus {
    Value,
    /// Informational
    OffscaleBelow,
    /// Cautionary
    OffscaleAbove,
    NotAuthorized,
    Unavailable,
}

/// One metric as the presentation layer renders it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JsMetric<T = f64> {
    pub status: JsStatus,
    pub value: Option<T>,
}

impl<T> From<Outcome<T>> for JsMetric<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Value(v) => Self { status: JsStatus::Value, value: Some(v) },
            Outcome::Offscale { value, side: Offscale::Below } => Self { status: JsStatus::OffscaleBelow, value },
            Outcome::Offscale { value, side: Offscale::Above } => Self { status: JsStatus::OffscaleAbove, value },
            Outcome::NotAuthorized => Self { status: JsStatus::NotAuthorized, value: None },
            Outcome::Unavailable => Self { status: JsStatus::Unavailable, value: None },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsReport {
    pub takeoff_ground_roll_ft: JsMetric,
    pub takeoff_total_distance_ft: JsMetric,
    pub takeoff_climb_gradient_ft_per_nm: JsMetric,
    pub takeoff_climb_gradient_percent: JsMetric,
    pub takeoff_climb_rate_fpm: JsMetric,
    pub landing_ground_roll_ft: JsMetric,
    pub landing_total_distance_ft: JsMetric,
    pub vref_kias: JsMetric,
    pub meets_go_around_climb_gradient: JsMetric<bool>,
    pub takeoff_run_remaining_ft: JsMetric,
    pub landing_distance_remaining_ft: JsMetric,
    pub enroute_climb_gradient_ft_per_nm: JsMetric,
    pub enroute_climb_rate_fpm: JsMetric,
    pub enroute_climb_speed_kias: JsMetric,
    pub time_to_climb_min: JsMetric,
    pub fuel_to_climb_gal: JsMetric,
    pub distance_to_climb_nm: JsMetric,
    pub altimeter_hpa: f64,
    pub pressure_altitude_ft: Option<f64>,
    pub density_altitude_ft: Option<f64>,
    pub headwind_kt: Option<f64>,
    pub tailwind_kt: Option<f64>,
    pub crosswind_kt: Option<f64>,
}

/* ------------------------------ Calculation ----------------------------- */

/// Evaluate every metric for one request.
pub fn calculate(request: JsRequest) -> JsReport {
    let model = PerformanceModel::new(request.conditions, request.settings);
    let gradient = model.takeoff_climb_gradient();
    let wind = model.wind_components();
    let aloft = |query: fn(&PerformanceModel<'static>, &Aloft) -> Outcome| -> JsMetric {
        request.climb.as_ref().map_or(Outcome::Unavailable, |a| query(&model, a)).into()
    };

    JsReport {
        takeoff_ground_roll_ft: model.takeoff_ground_roll().into(),
        takeoff_total_distance_ft: model.takeoff_total_distance().into(),
        takeoff_climb_gradient_ft_per_nm: gradient.into(),
        takeoff_climb_gradient_percent: gradient.map(ft_per_nm_to_percent).into(),
        takeoff_climb_rate_fpm: model.takeoff_climb_rate().into(),
        landing_ground_roll_ft: model.landing_ground_roll().into(),
        landing_total_distance_ft: model.landing_total_distance().into(),
        vref_kias: model.vref().into(),
        meets_go_around_climb_gradient: model.meets_go_around_climb_gradient().into(),
        takeoff_run_remaining_ft: model.takeoff_run_remaining().into(),
        landing_distance_remaining_ft: model.landing_distance_remaining().into(),
        enroute_climb_gradient_ft_per_nm: aloft(PerformanceModel::enroute_climb_gradient),
        enroute_climb_rate_fpm: aloft(PerformanceModel::enroute_climb_rate),
        enroute_climb_speed_kias: aloft(PerformanceModel::enroute_climb_speed),
        time_to_climb_min: aloft(PerformanceModel::time_to_climb),
        fuel_to_climb_gal: aloft(PerformanceModel::fuel_to_climb),
        distance_to_climb_nm: aloft(PerformanceModel::distance_to_climb),
        altimeter_hpa: model.conditions().weather.qnh_hpa(),
        pressure_altitude_ft: model.pressure_altitude(),
        density_altitude_ft: model.density_altitude(),
        headwind_kt: wind.map(|w| w.headwind_kt),
        tailwind_kt: wind.map(|w| w.tailwind_kt),
        crosswind_kt: wind.map(|w| w.crosswind_kt),
    }
}

/// JSON in, JSON out, for native hosts.
pub fn calculate_json(request: &str) -> anyhow::Result<String> {
    let request: JsRequest = serde_json::from_str(request).context("invalid performance request")?;
    let report = calculate(request);
    serde_json::to_string(&report).context("failed to serialize performance report")
}

#[wasm_bindgen]
pub fn calculate_js(input: JsValue) -> Result<JsValue, JsValue> {
    let request: JsRequest = swb::from_value(input)?;
    swb::to_value(&calculate(request)).map_err(|e| e.into())
}

/* -------------------------------- tests --------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::{json, Value};

    fn request(settings: Value) -> String {
        json!({
            "conditions": {
                "runway": {
                    "designator": "36",
                    "heading_deg": 360.0,
                    "elevation_ft": 1200.0,
                    "takeoff_run_ft": 5500.0,
                    "landing_distance_ft": 5500.0
                },
                "weather": {
                    "wind": { "direction_deg": 20.0, "speed_kt": 10.0 },
                    "temperature": { "celsius": 18.0 },
                    "altimeter_in_hg": 30.12
                },
                "weight_lb": 5400.0,
                "configuration": { "flaps": "flaps50" }
            },
            "settings": settings
        })
        .to_string()
    }

    fn report(json: &str) -> Value {
        serde_json::from_str(&calculate_json(json).unwrap()).unwrap()
    }

    #[test]
    fn every_metric_is_reported() {
        let r = report(&request(json!({ "strategy": "regression" })));
        for key in [
            "takeoff_ground_roll_ft",
            "takeoff_total_distance_ft",
            "takeoff_climb_gradient_ft_per_nm",
            "takeoff_climb_rate_fpm",
            "landing_ground_roll_ft",
            "landing_total_distance_ft",
            "vref_kias",
        ] {
            assert_eq!(r[key]["status"], "value", "{key}: {}", r[key]);
            assert!(r[key]["value"].as_f64().is_some_and(|v| v > 0.0));
        }
        assert_eq!(r["meets_go_around_climb_gradient"], json!({ "status": "value", "value": true }));
        let remaining = r["takeoff_run_remaining_ft"]["value"].as_f64().unwrap();
        let roll = r["takeoff_ground_roll_ft"]["value"].as_f64().unwrap();
        assert_relative_eq!(remaining, 5500.0 - roll, max_relative = 1e-12);
        assert_relative_eq!(r["altimeter_hpa"].as_f64().unwrap(), 1020.0, max_relative = 1e-3);
        assert_relative_eq!(r["pressure_altitude_ft"].as_f64().unwrap(), 1000.0, max_relative = 1e-9);
        assert_relative_eq!(
            r["headwind_kt"].as_f64().unwrap(),
            10.0 * 20f64.to_radians().cos(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn gradient_is_also_reported_in_percent() {
        let r = report(&request(json!({})));
        let per_nm = r["takeoff_climb_gradient_ft_per_nm"]["value"].as_f64().unwrap();
        let percent = r["takeoff_climb_gradient_percent"]["value"].as_f64().unwrap();
        assert_relative_eq!(percent, per_nm / 6076.12 * 100.0, max_relative = 1e-4);
    }

    #[test]
    fn offscale_and_unavailable_statuses() {
        let mut heavy: Value = serde_json::from_str(&request(json!({ "strategy": "tabular" }))).unwrap();
        heavy["conditions"]["weight_lb"] = json!(6800.0);
        let r = report(&heavy.to_string());
        assert_eq!(r["takeoff_ground_roll_ft"], json!({ "status": "offscale_above", "value": null }));

        let mut no_runway = heavy;
        no_runway["conditions"]["runway"] = Value::Null;
        let r = report(&no_runway.to_string());
        assert_eq!(r["vref_kias"], json!({ "status": "unavailable", "value": null }));
        assert_eq!(r["pressure_altitude_ft"], Value::Null);
    }

    #[test]
    fn climb_figures_need_a_cruise_altitude() {
        let r = report(&request(json!({})));
        for key in ["enroute_climb_rate_fpm", "time_to_climb_min", "distance_to_climb_nm"] {
            assert_eq!(r[key], json!({ "status": "unavailable", "value": null }), "{key}");
        }

        let mut cruise: Value = serde_json::from_str(&request(json!({ "aircraft": "g2_plus" }))).unwrap();
        cruise["climb"] = json!({ "pressure_altitude_ft": 12000.0 });
        let r = report(&cruise.to_string());
        for key in [
            "enroute_climb_gradient_ft_per_nm",
            "enroute_climb_rate_fpm",
            "enroute_climb_speed_kias",
            "time_to_climb_min",
            "fuel_to_climb_gal",
            "distance_to_climb_nm",
        ] {
            assert_eq!(r[key]["status"], "value", "{key}: {}", r[key]);
            assert!(r[key]["value"].as_f64().is_some_and(|v| v > 0.0), "{key}");
        }
    }

    #[test]
    fn bad_requests_carry_context() {
        let err = calculate_json("{").unwrap_err();
        assert!(err.to_string().contains("invalid performance request"));

        let err = calculate_json(&request(json!({ "safety_margin": 0.5 }))).unwrap_err();
        assert!(format!("{err:#}").contains("safety margin"));
    }

    #[test]
    fn not_authorized_status() {
        let metric: JsMetric = Outcome::NotAuthorized.into();
        assert_eq!(metric, JsMetric { status: JsStatus::NotAuthorized, value: None });
        assert_eq!(
            serde_json::to_value(metric).unwrap(),
            json!({ "status": "not_authorized", "value": null })
        );
    }
}
