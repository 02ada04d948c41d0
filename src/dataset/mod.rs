pub mod builtin;

use serde::{Serialize, Deserialize};

/// A small embedded labeled dataset: each row is the feature values followed
/// by a 0/1 target in the last column. Supplied fully formed — the library
/// never parses or validates external data beyond the width assertion here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Short display name ("OR", "AND", "iris").
    pub name: String,
    /// One label per feature column (targets have no label).
    pub feature_labels: Vec<String>,
    /// Rows in presentation order; the trainer replays them in this order.
    pub rows: Vec<Vec<f64>>,
}

impl Dataset {
    /// Builds a dataset, asserting every row has `feature_labels.len() + 1`
    /// columns. A malformed row is a caller bug, caught here rather than
    /// surfacing later as a silent NaN.
    pub fn new(
        name: impl Into<String>,
        feature_labels: Vec<String>,
        rows: Vec<Vec<f64>>,
    ) -> Dataset {
        let name = name.into();
        let width = feature_labels.len() + 1;
        assert!(!rows.is_empty(), "dataset {name:?} must have at least one row");
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                width,
                "dataset {name:?} row {i} has {} columns, expected {width}",
                row.len()
            );
        }
        Dataset { name, feature_labels, rows }
    }

    /// Number of feature columns (row width minus the target column).
    pub fn feature_count(&self) -> usize {
        self.feature_labels.len()
    }

    /// The 0/1 target of a row (its last column).
    pub fn target(&self, row: &[f64]) -> f64 {
        row[row.len() - 1]
    }

    /// `(min, max)` over feature column `index` — the input range for
    /// real-valued demos and the plot's axis domain.
    pub fn feature_range(&self, index: usize) -> (f64, f64) {
        assert!(index < self.feature_count(), "feature index out of range");
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for row in &self.rows {
            min = min.min(row[index]);
            max = max.max(row[index]);
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_range_scans_the_column() {
        let ds = builtin::iris();
        let (min, max) = ds.feature_range(1);
        assert!(min < 2.0, "setosa petals are short");
        assert!(max > 3.5, "versicolor petals are long");
    }

    #[test]
    #[should_panic(expected = "columns")]
    fn ragged_row_panics() {
        Dataset::new(
            "bad",
            vec!["a".into(), "b".into()],
            vec![vec![0.0, 1.0, 0.0], vec![0.0, 1.0]],
        );
    }

    #[test]
    fn target_is_last_column() {
        let ds = builtin::or_gate();
        assert_eq!(ds.target(&ds.rows[0]), 0.0);
        assert_eq!(ds.target(&ds.rows[3]), 1.0);
    }
}
