// File: crates/chart-core/src/series.rs
// Summary: Named point series and the flattening step that tags each point with its series.
// Notes:
// - `SeriesCollection::new` enforces one name per point sequence.
// - `from_parts_unchecked` keeps the permissive path for callers that want the
//   rendering engine to deal with whatever they pass. Flattening still zips by
//   position there, so a point is never tagged with another sequence's name.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::types::Point;

/// A point annotated with the name of the series it came from.
/// This is the only row shape the renderer receives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlatRecord {
    pub x: f64,
    pub y: f64,
    pub series: String,
}

/// Ordered point sequences paired by position with series names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesCollection {
    values: Vec<Vec<Point>>,
    series: Vec<String>,
}

impl SeriesCollection {
    /// Build a collection, rejecting a names/values length mismatch.
    pub fn new(values: Vec<Vec<Point>>, series: Vec<String>) -> Result<Self> {
        if values.len() != series.len() {
            return Err(ChartError::SeriesLengthMismatch {
                series: series.len(),
                values: values.len(),
            });
        }
        Ok(Self { values, series })
    }

    /// Build a collection without checking lengths.
    pub fn from_parts_unchecked(values: Vec<Vec<Point>>, series: Vec<String>) -> Self {
        Self { values, series }
    }

    /// Empty collection; add series with [`SeriesCollection::push`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append one named series.
    pub fn push(&mut self, name: impl Into<String>, points: impl IntoIterator<Item = Point>) {
        self.series.push(name.into());
        self.values.push(points.into_iter().collect());
    }

    /// Builder form of [`SeriesCollection::push`].
    pub fn with_series(mut self, name: impl Into<String>, points: impl IntoIterator<Item = Point>) -> Self {
        self.push(name, points);
        self
    }

    pub fn names(&self) -> &[String] {
        &self.series
    }

    /// Number of series names. Unnamed point sequences are not counted.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of points across all sequences.
    pub fn point_count(&self) -> usize {
        self.values.iter().map(Vec::len).sum()
    }

    /// Tag every point of `values[i]` with `series[i]` and concatenate,
    /// preserving series order and then point order.
    pub fn flatten(&self) -> Vec<FlatRecord> {
        if self.values.len() > self.series.len() {
            let dropped: usize = self.values[self.series.len()..].iter().map(Vec::len).sum();
            tracing::warn!(
                names = self.series.len(),
                sequences = self.values.len(),
                dropped,
                "point sequences without a series name are not flattened"
            );
        }

        let mut out = Vec::with_capacity(self.point_count());
        for (points, name) in self.values.iter().zip(&self.series) {
            out.extend(points.iter().map(|p| FlatRecord {
                x: p.x,
                y: p.y,
                series: name.clone(),
            }));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_mismatch() {
        let err = SeriesCollection::new(vec![vec![]], vec![]).unwrap_err();
        assert!(matches!(err, ChartError::SeriesLengthMismatch { series: 0, values: 1 }));
    }

    #[test]
    fn unchecked_flatten_drops_unnamed_sequences() {
        let c = SeriesCollection::from_parts_unchecked(
            vec![vec![Point::new(0.0, 1.0)], vec![Point::new(2.0, 3.0)]],
            vec!["a".to_string()],
        );
        let flat = c.flatten();
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].series, "a");
    }

    #[test]
    fn extra_names_produce_no_records() {
        let c = SeriesCollection::from_parts_unchecked(vec![], vec!["ghost".to_string()]);
        assert!(c.flatten().is_empty());
        assert_eq!(c.len(), 1);
        assert!(!c.is_empty());
    }

    #[test]
    fn len_and_is_empty_count_names() {
        let c = SeriesCollection::from_parts_unchecked(vec![vec![Point::new(0.0, 0.0)]], vec![]);
        assert_eq!(c.len(), 0);
        assert!(c.is_empty());
        assert_eq!(c.point_count(), 1);
    }
}
