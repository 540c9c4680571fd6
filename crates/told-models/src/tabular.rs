//! Table-backed performance data.
//!
//! The reference tables are compiled into the crate and parsed once per
//! aircraft on first use. They are part of the build, so a malformed file is a
//! defect and aborts loudly rather than surfacing as a per-query error.

use std::sync::OnceLock;

use told_core::Outcome;
use tracing::debug;

use crate::table::DataTable;
use crate::{Aircraft, DataPoint, EnrouteClimbData, LandingData, PerformanceData, VrefData};

/// Takeoff tables, flaps 50.
#[derive(Clone, Debug, PartialEq)]
pub struct TakeoffTables {
    pub ground_roll: DataTable,
    pub total_distance: DataTable,
    pub climb_gradient: DataTable,
    pub climb_rate: DataTable,
}

/// Ground roll and total distance tables for one landing configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct LandingTables {
    pub ground_roll: DataTable,
    pub total_distance: DataTable,
}

/// Vref by weight.
#[derive(Clone, Debug, PartialEq)]
pub struct VrefTables {
    pub up: DataTable,
    pub up_ice: DataTable,
    pub flaps_50: DataTable,
    pub flaps_50_ice: DataTable,
    pub flaps_100: DataTable,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnrouteClimbTables {
    pub gradient: DataTable,
    pub rate: DataTable,
    pub speed: DataTable,
}

/// Time, fuel and distance from sea level.
#[derive(Clone, Debug, PartialEq)]
pub struct ToClimbTables {
    pub time: DataTable,
    pub fuel: DataTable,
    pub distance: DataTable,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TabularData {
    pub takeoff: TakeoffTables,
    pub landing_flaps_100: LandingTables,
    pub landing_flaps_50: LandingTables,
    pub landing_flaps_50_ice: LandingTables,
    pub vref: VrefTables,
    pub enroute_climb: EnrouteClimbTables,
    pub enroute_climb_ice: EnrouteClimbTables,
    pub to_climb: ToClimbTables,
}

/// Parse a table shipped with the crate.
///
/// # Panics
///
/// If the embedded file is malformed.
pub(crate) fn embedded(name: &str, json: &str) -> DataTable {
    match DataTable::from_json(json) {
        Ok(table) => table,
        Err(e) => panic!("malformed performance table {name}: {e}"),
    }
}

macro_rules! table {
    ($($part:literal),+) => {
        embedded(
            concat!($($part),+),
            include_str!(concat!("../data/", $($part,)+ ".json")),
        )
    };
}

/// One aircraft's tables: takeoff and landing from its own directory, the rest shared.
macro_rules! aircraft_tables {
    ($dir:literal) => {
        TabularData {
            takeoff: TakeoffTables {
                ground_roll: table!($dir, "/takeoff/ground_roll"),
                total_distance: table!($dir, "/takeoff/total_distance"),
                climb_gradient: table!($dir, "/takeoff/climb_gradient"),
                climb_rate: table!($dir, "/takeoff/climb_rate"),
            },
            landing_flaps_100: LandingTables {
                ground_roll: table!($dir, "/landing/flaps_100/ground_roll"),
                total_distance: table!($dir, "/landing/flaps_100/total_distance"),
            },
            landing_flaps_50: LandingTables {
                ground_roll: table!($dir, "/landing/flaps_50/ground_roll"),
                total_distance: table!($dir, "/landing/flaps_50/total_distance"),
            },
            landing_flaps_50_ice: LandingTables {
                ground_roll: table!($dir, "/landing/flaps_50_ice/ground_roll"),
                total_distance: table!($dir, "/landing/flaps_50_ice/total_distance"),
            },
            vref: VrefTables {
                up: table!("vref/up"),
                up_ice: table!("vref/up_ice"),
                flaps_50: table!("vref/flaps_50"),
                flaps_50_ice: table!("vref/flaps_50_ice"),
                flaps_100: table!("vref/flaps_100"),
            },
            enroute_climb: EnrouteClimbTables {
                gradient: table!("enroute_climb/normal/gradient"),
                rate: table!("enroute_climb/normal/rate"),
                speed: table!("enroute_climb/normal/speed"),
            },
            enroute_climb_ice: EnrouteClimbTables {
                gradient: table!("enroute_climb/ice/gradient"),
                rate: table!("enroute_climb/ice/rate"),
                speed: table!("enroute_climb/ice/speed"),
            },
            to_climb: ToClimbTables {
                time: table!("time_fuel_distance/time"),
                fuel: table!("time_fuel_distance/fuel"),
                distance: table!("time_fuel_distance/distance"),
            },
        }
    };
}

impl TabularData {
    /// Tables for an aircraft.
    pub fn reference(aircraft: Aircraft) -> &'static Self {
        static G1: OnceLock<TabularData> = OnceLock::new();
        static G2_PLUS: OnceLock<TabularData> = OnceLock::new();

        fn loaded(aircraft: Aircraft, data: TabularData) -> TabularData {
            debug!(?aircraft, "loaded performance tables");
            data
        }

        match aircraft {
            Aircraft::G1 => G1.get_or_init(|| loaded(aircraft, aircraft_tables!("g1"))),
            Aircraft::G2Plus => G2_PLUS.get_or_init(|| loaded(aircraft, aircraft_tables!("g2_plus"))),
        }
    }

    pub fn landing(&self, data: LandingData) -> &LandingTables {
        match data {
            LandingData::Flaps100 => &self.landing_flaps_100,
            LandingData::Flaps50 => &self.landing_flaps_50,
            LandingData::Flaps50Ice => &self.landing_flaps_50_ice,
        }
    }

    pub fn vref_table(&self, data: VrefData) -> &DataTable {
        match data {
            VrefData::Up => &self.vref.up,
            VrefData::UpIce => &self.vref.up_ice,
            VrefData::Flaps50 => &self.vref.flaps_50,
            VrefData::Flaps50Ice => &self.vref.flaps_50_ice,
            VrefData::Flaps100 => &self.vref.flaps_100,
        }
    }

    pub fn enroute(&self, data: EnrouteClimbData) -> &EnrouteClimbTables {
        match data {
            EnrouteClimbData::Normal => &self.enroute_climb,
            EnrouteClimbData::Ice => &self.enroute_climb_ice,
        }
    }
}

impl PerformanceData for TabularData {
    fn takeoff_ground_roll(&self, point: &DataPoint) -> Outcome {
        self.takeoff.ground_roll.lookup(&point.as_array())
    }

    fn takeoff_total_distance(&self, point: &DataPoint) -> Outcome {
        self.takeoff.total_distance.lookup(&point.as_array())
    }

    fn takeoff_climb_gradient(&self, point: &DataPoint) -> Outcome {
        self.takeoff.climb_gradient.lookup(&point.as_array())
    }

    fn takeoff_climb_rate(&self, point: &DataPoint) -> Outcome {
        self.takeoff.climb_rate.lookup(&point.as_array())
    }

    fn landing_ground_roll(&self, data: LandingData, point: &DataPoint) -> Outcome {
        self.landing(data).ground_roll.lookup(&point.as_array())
    }

    fn landing_total_distance(&self, data: LandingData, point: &DataPoint) -> Outcome {
        self.landing(data).total_distance.lookup(&point.as_array())
    }

    /// Vref varies with weight only.
    fn vref(&self, data: VrefData, point: &DataPoint) -> Outcome {
        self.vref_table(data).lookup(&[point.weight_lb])
    }

    fn enroute_climb_gradient(&self, data: EnrouteClimbData, point: &DataPoint) -> Outcome {
        self.enroute(data).gradient.lookup(&point.as_array())
    }

    fn enroute_climb_rate(&self, data: EnrouteClimbData, point: &DataPoint) -> Outcome {
        self.enroute(data).rate.lookup(&point.as_array())
    }

    fn enroute_climb_speed(&self, data: EnrouteClimbData, point: &DataPoint) -> Outcome {
        self.enroute(data).speed.lookup(&point.as_array())
    }

    fn time_to_climb(&self, point: &DataPoint) -> Outcome {
        self.to_climb.time.lookup(&point.as_array())
    }

    fn fuel_to_climb(&self, point: &DataPoint) -> Outcome {
        self.to_climb.fuel.lookup(&point.as_array())
    }

    fn distance_to_climb(&self, point: &DataPoint) -> Outcome {
        self.to_climb.distance.lookup(&point.as_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use told_core::Offscale;

    #[test]
    fn every_embedded_table_parses() {
        for aircraft in [Aircraft::G1, Aircraft::G2Plus] {
            let t = TabularData::reference(aircraft);
            assert_eq!(t.takeoff.ground_roll.dimensions(), 3);
            assert_eq!(t.landing_flaps_50_ice.total_distance.dimensions(), 3);
            assert_eq!(t.vref.flaps_100.dimensions(), 1);
            assert_eq!(t.enroute_climb_ice.speed.dimensions(), 3);
            assert_eq!(
                t.takeoff.climb_rate.dimension_names().collect::<Vec<_>>(),
                ["weight", "pressure_altitude", "temperature"]
            );
            assert_eq!(
                t.to_climb.fuel.dimension_names().collect::<Vec<_>>(),
                ["weight", "pressure_altitude", "temperature"]
            );
        }
    }

    #[test]
    fn aircraft_get_their_own_tables() {
        let g1 = TabularData::reference(Aircraft::G1);
        let g2 = TabularData::reference(Aircraft::G2Plus);
        assert_ne!(g1.takeoff, g2.takeoff);
        assert_ne!(g1.landing_flaps_100, g2.landing_flaps_100);
        assert_eq!(g1.vref, g2.vref);
        assert_eq!(g1.to_climb, g2.to_climb);
        assert!(std::ptr::eq(g1, TabularData::reference(Aircraft::G1)));
    }

    #[test]
    fn vref_uses_the_ratio_scale() {
        let t = TabularData::reference(Aircraft::G1);
        let p = DataPoint { weight_lb: 4750.0, pressure_altitude_ft: 3000.0, temperature_c: 20.0 };
        // Anchors 4500 (87) and 5000 (91), f = 1 + 250/4500.
        let f = 1.0 + 250.0 / 4500.0;
        let expected = (87.0 * f + 91.0 * f) / 2.0;
        match t.vref(VrefData::Flaps50, &p) {
            Outcome::Value(v) => assert_relative_eq!(v, expected, max_relative = 1e-12),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn grid_edges_are_offscale() {
        let t = TabularData::reference(Aircraft::G1);
        let light = DataPoint { weight_lb: 4000.0, pressure_altitude_ft: 0.0, temperature_c: 15.0 };
        assert_eq!(t.vref(VrefData::Up, &light), Outcome::Offscale { value: None, side: Offscale::Below });

        let heavy = DataPoint { weight_lb: 6200.0, ..light };
        assert_eq!(
            t.takeoff_ground_roll(&heavy),
            Outcome::Offscale { value: None, side: Offscale::Above }
        );

        let high = DataPoint { weight_lb: 5000.0, pressure_altitude_ft: 24_000.0, temperature_c: -30.0 };
        assert_eq!(
            t.enroute_climb_gradient(EnrouteClimbData::Normal, &high),
            Outcome::Offscale { value: None, side: Offscale::Above }
        );
        assert!(matches!(t.time_to_climb(&high), Outcome::Value(v) if v > 0.0));
    }
}
