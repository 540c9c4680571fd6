//! Dimensional lookup table.
//!
//! A table holds rows of `(d1, …, dN, output)`. Lookups walk the dimensions
//! in order: at each level the rows bracketing the query value are kept, the
//! output column is scaled by the ratio of the query to the low anchor, and
//! the consumed column is dropped. After the last dimension the remaining
//! outputs are averaged.
//!
//! The ratio-to-low-anchor scale (`1 + (v − low) / low`) is *not* a linear
//! interpolation between the bracketing rows. Existing table data was tuned
//! against it, so it is reproduced exactly.

use serde::Deserialize;
use thiserror::Error;
use told_core::{Offscale, Outcome};
use tracing::trace;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("a table needs at least one input dimension")]
    NoDimensions,
    #[error("row {index} has {found} values, expected {expected}")]
    RowWidth { index: usize, found: usize, expected: usize },
    #[error("row {index} contains a non-finite value")]
    NonFinite { index: usize },
    #[error("malformed table file: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk shape of a table file.
#[derive(Deserialize)]
struct TableFile {
    dimensions: Vec<String>,
    rows: Vec<Vec<f64>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataTable {
    dimensions: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DataTable {
    /// Build a table from rows. Every row must hold one value per dimension
    /// plus the output.
    ///
    /// # Panics
    ///
    /// On a malformed row. A bad table would silently corrupt every later
    /// calculation, so construction fails hard; use [`DataTable::try_from_rows`]
    /// for data that did not ship with the crate.
    pub fn new(dimensions: &[&str], rows: Vec<Vec<f64>>) -> Self {
        let names = dimensions.iter().map(|d| (*d).to_owned()).collect();
        match Self::try_from_rows(names, rows) {
            Ok(table) => table,
            Err(e) => panic!("malformed performance table: {e}"),
        }
    }

    pub fn try_from_rows(dimensions: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, TableError> {
        if dimensions.is_empty() {
            return Err(TableError::NoDimensions);
        }
        let expected = dimensions.len() + 1;
        for (index, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(TableError::RowWidth { index, found: row.len(), expected });
            }
            if row.iter().any(|v| !v.is_finite()) {
                return Err(TableError::NonFinite { index });
            }
        }
        Ok(Self { dimensions, rows })
    }

    /// Parse a `{"dimensions": [...], "rows": [[...], ...]}` document.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let file: TableFile = serde_json::from_str(json)?;
        Self::try_from_rows(file.dimensions, file.rows)
    }

    /// Number of input dimensions (row width minus the output column).
    pub fn dimensions(&self) -> usize {
        self.dimensions.len()
    }

    pub fn dimension_names(&self) -> impl Iterator<Item = &str> {
        self.dimensions.iter().map(String::as_str)
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Look up the output at `point` (one value per dimension).
    ///
    /// # Panics
    ///
    /// If `point` does not have one value per dimension.
    pub fn lookup(&self, point: &[f64]) -> Outcome {
        assert_eq!(
            point.len(),
            self.dimensions(),
            "lookup point has {} values for a {}-dimensional table",
            point.len(),
            self.dimensions()
        );

        let mut rows: Vec<Vec<f64>> = self.rows.clone();
        for (dim, &value) in point.iter().enumerate() {
            let (low, start, end) = match bracket(&rows, value) {
                Ok(b) => b,
                Err(side) => {
                    trace!(dimension = %self.dimensions[dim], value, ?side, "lookup left the table");
                    return Outcome::Offscale { value: None, side };
                }
            };

            let factor = scale_factor(value, low).unwrap_or_else(|| {
                trace!(dimension = %self.dimensions[dim], value, "zero low anchor, output left unscaled");
                1.0
            });

            rows = rows[start..=end]
                .iter()
                .map(|row| {
                    let mut reduced = row[1..].to_vec();
                    if let Some(output) = reduced.last_mut() {
                        *output *= factor;
                    }
                    reduced
                })
                .collect();
        }

        let sum: f64 = rows.iter().map(|row| row[0]).sum();
        Outcome::Value(sum / rows.len() as f64)
    }
}

/// Ratio-to-low-anchor scale `1 + (v − low) / low`.
///
/// Exactly `1` when `value == low`. Undefined for a zero anchor, which
/// returns `None` rather than dividing by zero.
pub fn scale_factor(value: f64, low: f64) -> Option<f64> {
    if low == 0.0 {
        return None;
    }
    Some(1.0 + (value - low) / low)
}

/// Find the low/high anchors for `value` in the first column and the row
/// span between them: from the first row holding the low anchor to the last
/// row holding the high anchor, by position.
fn bracket(rows: &[Vec<f64>], value: f64) -> Result<(f64, usize, usize), Offscale> {
    let mut low: Option<f64> = None;
    let mut high: Option<f64> = None;
    for row in rows {
        let x = row[0];
        if x < value {
            low = Some(low.map_or(x, |l| l.max(x)));
        } else if x > value {
            high = Some(high.map_or(x, |h| h.min(x)));
        }
    }
    let low = low.ok_or(Offscale::Below)?;
    let high = high.ok_or(Offscale::Above)?;

    let first = rows.iter().position(|row| row[0] == low).ok_or(Offscale::Below)?;
    let last = rows.iter().rposition(|row| row[0] == high).ok_or(Offscale::Above)?;
    Ok((low, first.min(last), first.max(last)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn one_d() -> DataTable {
        DataTable::new(&["x"], vec![vec![10.0, 100.0], vec![20.0, 200.0], vec![30.0, 300.0]])
    }

    fn value(outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Value(v) => v,
            other => panic!("expected a value, got {other:?}"),
        }
    }

    #[test]
    fn below_and_above_every_row() {
        let t = one_d();
        assert_eq!(t.lookup(&[5.0]), Outcome::Offscale { value: None, side: Offscale::Below });
        assert_eq!(t.lookup(&[35.0]), Outcome::Offscale { value: None, side: Offscale::Above });
    }

    #[test]
    fn table_edges_are_offscale() {
        // Anchors must be strictly below and strictly above the query.
        let t = one_d();
        assert_eq!(t.lookup(&[10.0]), Outcome::Offscale { value: None, side: Offscale::Below });
        assert_eq!(t.lookup(&[30.0]), Outcome::Offscale { value: None, side: Offscale::Above });
    }

    #[test]
    fn between_rows_averages_scaled_outputs() {
        // f = 1 + 5/10 = 1.5 over rows 10 and 20: (150 + 300) / 2, not the 150 a lerp gives.
        assert_relative_eq!(value(one_d().lookup(&[15.0])), 225.0);
    }

    #[test]
    fn query_on_a_row_keeps_both_neighbours() {
        // low 10, high 30, f = 2: (200 + 400 + 600) / 3
        assert_relative_eq!(value(one_d().lookup(&[20.0])), 400.0);
    }

    #[test]
    fn repeated_anchor_values_are_all_retained() {
        let t = DataTable::new(
            &["x"],
            vec![vec![10.0, 100.0], vec![20.0, 200.0], vec![20.0, 220.0], vec![30.0, 300.0]],
        );
        assert_relative_eq!(value(t.lookup(&[15.0])), (150.0 + 300.0 + 330.0) / 3.0);
    }

    #[test]
    fn span_is_by_row_position() {
        let shuffled = DataTable::new(&["x"], vec![vec![30.0, 300.0], vec![10.0, 100.0], vec![20.0, 200.0]]);
        assert_relative_eq!(value(shuffled.lookup(&[15.0])), 225.0);

        // The 30 row sits between the anchors by position, so it is averaged in.
        let interleaved = DataTable::new(&["x"], vec![vec![10.0, 100.0], vec![30.0, 300.0], vec![20.0, 200.0]]);
        assert_relative_eq!(value(interleaved.lookup(&[15.0])), 300.0);

        let descending = DataTable::new(&["x"], vec![vec![30.0, 300.0], vec![20.0, 200.0], vec![10.0, 100.0]]);
        assert_relative_eq!(value(descending.lookup(&[15.0])), 225.0);
    }

    #[test]
    fn scale_factor_edges() {
        assert_eq!(scale_factor(5.0, 5.0), Some(1.0));
        assert_eq!(scale_factor(-20.0, -20.0), Some(1.0));
        assert_eq!(scale_factor(5.0, 0.0), None);
        assert_relative_eq!(scale_factor(15.0, 10.0).unwrap(), 1.5);
    }

    #[test]
    fn zero_anchor_leaves_outputs_unscaled() {
        let t = DataTable::new(&["depth"], vec![vec![0.0, 50.0], vec![10.0, 150.0]]);
        assert_relative_eq!(value(t.lookup(&[5.0])), 100.0);
    }

    #[test]
    fn two_dimensions_scale_at_each_level() {
        let t = DataTable::new(
            &["weight", "altitude"],
            vec![
                vec![100.0, 1000.0, 10.0],
                vec![100.0, 2000.0, 20.0],
                vec![200.0, 1000.0, 30.0],
                vec![200.0, 2000.0, 40.0],
            ],
        );
        // 1.5 at both levels: (22.5 + 45 + 67.5 + 90) / 4
        assert_relative_eq!(value(t.lookup(&[150.0, 1500.0])), 56.25);
        assert_eq!(t.lookup(&[150.0, 2500.0]), Outcome::Offscale { value: None, side: Offscale::Above });
        assert_eq!(t.lookup(&[150.0, 500.0]), Outcome::Offscale { value: None, side: Offscale::Below });
        assert_eq!(t.lookup(&[250.0, 1500.0]), Outcome::Offscale { value: None, side: Offscale::Above });
    }

    #[test]
    fn rejects_bad_rows() {
        let err = DataTable::try_from_rows(vec!["x".into()], vec![vec![1.0, 2.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, TableError::RowWidth { index: 1, found: 1, expected: 2 }));

        let err = DataTable::try_from_rows(vec!["x".into()], vec![vec![f64::NAN, 2.0]]).unwrap_err();
        assert!(matches!(err, TableError::NonFinite { index: 0 }));

        assert!(matches!(DataTable::try_from_rows(vec![], vec![]), Err(TableError::NoDimensions)));
    }

    #[test]
    #[should_panic(expected = "malformed performance table")]
    fn new_fails_fast_on_bad_rows() {
        let _ = DataTable::new(&["x", "y"], vec![vec![1.0, 2.0]]);
    }

    #[test]
    fn loads_json() {
        let t = DataTable::from_json(r#"{"dimensions": ["weight"], "rows": [[4000, 80], [5000, 90]]}"#).unwrap();
        assert_eq!(t.dimensions(), 1);
        assert_eq!(t.dimension_names().collect::<Vec<_>>(), ["weight"]);
        assert_eq!(t.rows().len(), 2);

        assert!(matches!(DataTable::from_json(r#"{"rows": []}"#), Err(TableError::Json(_))));
        assert!(matches!(
            DataTable::from_json(r#"{"dimensions": ["weight"], "rows": [[4000]]}"#),
            Err(TableError::RowWidth { .. })
        ));
    }

    proptest! {
        #[test]
        fn lookups_are_deterministic(x in 0.0..40.0_f64) {
            let t = one_d();
            let a = t.lookup(&[x]);
            let b = t.lookup(&[x]);
            prop_assert_eq!(a.into_value().map(f64::to_bits), b.into_value().map(f64::to_bits));
            prop_assert_eq!(a.envelope(), b.envelope());
        }

        #[test]
        fn interior_queries_always_produce_a_value(x in 10.001..29.999_f64) {
            prop_assert!(matches!(one_d().lookup(&[x]), Outcome::Value(v) if v.is_finite()));
        }
    }
}
