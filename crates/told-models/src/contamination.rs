//! Contaminated-runway ground roll.
//!
//! The published charts map a dry ground roll to a contaminated one; water and
//! slush/wet snow are additionally graded by depth [in]. The engine uses them
//! as a ratio (contaminated ÷ dry), interpolated linearly between chart points.
//! Short of the first chart point the first ratio holds and the result is
//! below-envelope; past the last one the final segment is extended and the
//! result is above-envelope. A dry figure always comes back scaled, never
//! dropped.

use std::sync::OnceLock;

use told_core::{Contamination, ContaminationKind, Envelope, Outcome};

use crate::table::DataTable;
use crate::tabular::embedded;

/// Contaminated ÷ dry ground roll by dry ground roll and, for the
/// depth-graded contaminants, depth.
#[derive(Clone, Debug, PartialEq)]
pub struct RollRatio {
    /// `(dry ground roll, [(depth, ratio)])`, both ascending. Charts without a
    /// depth carry a single knot at depth zero.
    curves: Vec<(f64, Vec<(f64, f64)>)>,
}

impl RollRatio {
    /// Rows are `[dry, depth, contaminated]` or `[dry, contaminated]`, grouped
    /// by dry ground roll.
    pub fn from_table(table: &DataTable) -> Self {
        let mut curves: Vec<(f64, Vec<(f64, f64)>)> = Vec::new();
        for row in table.rows() {
            let (dry, depth, contaminated) = match row.as_slice() {
                &[dry, depth, contaminated] => (dry, depth, contaminated),
                &[dry, contaminated] => (dry, 0.0, contaminated),
                _ => continue,
            };
            let knot = (depth, contaminated / dry);
            match curves.last_mut() {
                Some((last, knots)) if *last == dry => knots.push(knot),
                _ => curves.push((dry, vec![knot])),
            }
        }
        Self { curves }
    }

    /// Ratio at a dry ground roll [ft] and depth [in].
    pub fn ratio(&self, dry_ground_roll_ft: f64, depth_in: f64) -> Outcome {
        let mut depth_envelope = Envelope::Within;
        let by_dry: Vec<(f64, f64)> = self
            .curves
            .iter()
            .map(|(dry, knots)| {
                let (ratio, envelope) = interpolate(knots, depth_in);
                depth_envelope = depth_envelope.worst(envelope);
                (*dry, ratio)
            })
            .collect();
        let (ratio, dry_envelope) = interpolate(&by_dry, dry_ground_roll_ft);
        Outcome::classified(ratio, dry_envelope.worst(depth_envelope))
    }
}

/// Linear interpolation over `(x, y)` knots ascending in `x`: the first value
/// holds below them, the last segment extends above them.
fn interpolate(knots: &[(f64, f64)], x: f64) -> (f64, Envelope) {
    let (Some(&(first_x, first_y)), Some(&(last_x, _))) = (knots.first(), knots.last()) else {
        // No chart at all: leave the roll alone but flag it.
        return (1.0, Envelope::Above);
    };
    if x < first_x {
        return (first_y, Envelope::Below);
    }
    let segment = knots.windows(2).find(|w| x <= w[1].0).or_else(|| knots.windows(2).last());
    let y = match segment {
        Some(&[(_, _), (xb, yb)]) if x == xb => yb,
        Some(&[(xa, ya), (xb, yb)]) => ya + (yb - ya) * (x - xa) / (xb - xa),
        _ => first_y,
    };
    let envelope = if x > last_x || x.is_nan() { Envelope::Above } else { Envelope::Within };
    (y, envelope)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContaminationTables {
    /// (dry ground roll, depth)
    pub water: RollRatio,
    /// (dry ground roll, depth)
    pub slush_wet_snow: RollRatio,
    /// (dry ground roll)
    pub dry_snow: RollRatio,
    /// (dry ground roll)
    pub compact_snow: RollRatio,
}

macro_rules! chart {
    ($name:literal) => {
        RollRatio::from_table(&embedded(
            concat!("contamination/", $name),
            include_str!(concat!("../data/contamination/", $name, ".json")),
        ))
    };
}

impl ContaminationTables {
    pub fn reference() -> &'static Self {
        static REFERENCE: OnceLock<ContaminationTables> = OnceLock::new();
        REFERENCE.get_or_init(|| Self {
            water: chart!("water"),
            slush_wet_snow: chart!("slush_wet_snow"),
            dry_snow: chart!("dry_snow"),
            compact_snow: chart!("compact_snow"),
        })
    }

    /// Contaminated ÷ dry ratio for a dry ground roll [ft]. A depth-graded
    /// contaminant with no depth is a dry runway (ratio 1).
    pub fn ratio(&self, contamination: &Contamination, dry_ground_roll_ft: f64) -> Outcome {
        if !contamination.is_effective() {
            return Outcome::Value(1.0);
        }
        match contamination.kind {
            ContaminationKind::Water => self.water.ratio(dry_ground_roll_ft, contamination.depth_in),
            ContaminationKind::SlushWetSnow => self.slush_wet_snow.ratio(dry_ground_roll_ft, contamination.depth_in),
            ContaminationKind::DrySnow => self.dry_snow.ratio(dry_ground_roll_ft, 0.0),
            ContaminationKind::CompactSnow => self.compact_snow.ratio(dry_ground_roll_ft, 0.0),
        }
    }

    /// Ground roll on the contaminated runway given the dry value [ft].
    pub fn ground_roll(&self, contamination: &Contamination, dry_ground_roll_ft: f64) -> Outcome {
        self.ratio(contamination, dry_ground_roll_ft).map(|k| dry_ground_roll_ft * k)
    }
}
