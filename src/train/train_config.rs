use serde::{Serialize, Deserialize};

/// Configuration for a `train_history` run.
///
/// # Fields
/// - `learning_rate`   — scales every per-row weight delta
/// - `max_iterations`  — hard epoch cap; the history never grows past this
/// - `error_threshold` — training stops once an epoch's total absolute
///                       error drops below this value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub max_iterations: usize,
    pub error_threshold: f64,
}

impl TrainConfig {
    /// The demo defaults: at most 10 epochs, stop when an epoch makes no
    /// classification errors (total absolute error < 1).
    pub fn new(learning_rate: f64) -> Self {
        TrainConfig {
            learning_rate,
            max_iterations: 10,
            error_threshold: 1.0,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(0.1)
    }
}
