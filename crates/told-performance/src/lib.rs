//! told-performance
//!
//! Takeoff and landing performance for one set of conditions.
//! - Raw figures come from a [`told_models::PerformanceData`] source picked by
//!   the aircraft ([`told_models::Aircraft`]) and [`Strategy`] (tables or
//!   regression fits).
//! - Enroute climb and time/fuel/distance to climb are answered for a cruise
//!   [`told_core::Aloft`]; they take no corrections.
//! - Corrections run in a fixed order: configuration factor, wind, slope,
//!   surface, contamination, safety margin.
//! - Offscale classification merges the data's own envelope with the limits
//!   of the correction data, and never moves a result back inside.
//!
//! Every query returns a [`told_core::Outcome`]; a model without a runway
//! answers `Unavailable` to all of them.
//!
//! ```
//! use told_core::{Configuration, FlapSetting, Outcome, Runway, Surface, Weather};
//! use told_performance::{Conditions, PerformanceModel, Settings};
//!
//! let runway = Runway {
//!     designator: "09".into(),
//!     heading_deg: 90.0,
//!     slope: 0.0,
//!     elevation_ft: 500.0,
//!     surface: Surface::Paved,
//!     takeoff_run_ft: 4000.0,
//!     landing_distance_ft: 4000.0,
//!     contamination: None,
//! };
//! let conditions = Conditions {
//!     runway: Some(runway),
//!     weather: Weather::standard(),
//!     weight_lb: 5400.0,
//!     configuration: Some(Configuration::new(FlapSetting::Flaps50, false)),
//! };
//! let model = PerformanceModel::new(conditions, Settings::default());
//! assert!(matches!(model.takeoff_ground_roll(), Outcome::Value(_)));
//! ```

pub mod corrections;
pub mod model;
pub mod offscale;
pub mod settings;

pub use corrections::{CorrectionFactors, Metric, Pipeline, WindRates};
pub use model::{Conditions, PerformanceModel};
pub use offscale::{classify, correction_envelope, GoAroundLimit};
pub use settings::{Settings, SettingsError, Strategy};
