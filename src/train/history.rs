use serde::{Serialize, Deserialize};

use crate::network::network::Network;

/// One dataset row applied during an epoch: the narrative record the
/// training table displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingStep {
    /// The raw row, features followed by the target column.
    pub row: Vec<f64>,
    /// Target class, 0 or 1 (the row's last column).
    pub target: f64,
    /// `heaviside(weighted_sum)` under the epoch-start weights.
    pub predicted: f64,
    /// `target - predicted`, one of -1, 0, 1.
    pub error: f64,
    /// `learning_rate * error * input_value` per weight index. Accumulated
    /// across the epoch and applied once at epoch end, never mid-epoch.
    pub weight_deltas: Vec<f64>,
}

/// One completed epoch: every row-level step plus the network snapshot that
/// results from applying the epoch's accumulated deltas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 0-based epoch index.
    pub iteration_index: usize,
    pub steps: Vec<TrainingStep>,
    /// End-of-epoch snapshot: the epoch-start network with the summed
    /// deltas added to its weights.
    pub network: Network,
}

impl HistoryEntry {
    /// Sum of `|error|` over this epoch's steps — the convergence measure.
    pub fn total_absolute_error(&self) -> f64 {
        self.steps.iter().map(|s| s.error.abs()).sum()
    }
}

/// The fully materialized training run. Append-only while being built,
/// recomputed fresh from `(network, dataset, config)` on every request —
/// callers scrub through `entries` but never mutate them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingHistory {
    pub entries: Vec<HistoryEntry>,
    /// True when the run stopped on the error threshold rather than the
    /// iteration cap.
    pub converged: bool,
}

impl TrainingHistory {
    /// The last snapshot, if any epoch ran.
    pub fn final_network(&self) -> Option<&Network> {
        self.entries.last().map(|e| &e.network)
    }
}
