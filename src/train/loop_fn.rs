use crate::activation::heaviside::heaviside;
use crate::dataset::Dataset;
use crate::network::network::Network;
use crate::train::history::{HistoryEntry, TrainingHistory, TrainingStep};
use crate::train::train_config::TrainConfig;

/// Replays the perceptron learning rule over `dataset` and returns the fully
/// materialized epoch-by-epoch history.
///
/// Semantics (deliberately epoch-batched, matching the narrative the
/// training table tells):
/// - every prediction inside an epoch uses the weights frozen at the start
///   of that epoch — a row's delta never influences the next row's
///   prediction within the same epoch;
/// - per-row deltas `learning_rate * error * input_value` accumulate into a
///   single per-epoch vector and are applied to the weights once, at epoch
///   end, producing that epoch's snapshot;
/// - the run stops after the first epoch whose total absolute error falls
///   below `config.error_threshold`, or after `config.max_iterations`
///   epochs, whichever comes first.
///
/// Pure function of its arguments: the caller's network is cloned, never
/// mutated, and identical inputs produce an identical history.
///
/// # Panics
/// Panics if the dataset's feature count does not match the network's
/// editable-input count — a malformed pairing is a caller bug.
pub fn train_history(network: &Network, dataset: &Dataset, config: &TrainConfig) -> TrainingHistory {
    let feature_slots = network.editable_inputs();
    assert_eq!(
        dataset.feature_count(),
        feature_slots.len(),
        "dataset {:?} has {} features but the network has {} editable inputs",
        dataset.name,
        dataset.feature_count(),
        feature_slots.len()
    );

    let mut current = network.clone();
    let mut entries = Vec::new();
    let mut converged = false;

    for iteration_index in 0..config.max_iterations {
        let mut acc = vec![0.0; current.weights.len()];
        let mut total_abs_error = 0.0;
        let mut steps = Vec::with_capacity(dataset.rows.len());

        // Probe network for this epoch: weights stay frozen at the
        // epoch-start snapshot while the inputs cycle through the rows.
        let mut probe = current.clone();

        for row in &dataset.rows {
            for (&slot, &feature) in feature_slots.iter().zip(row.iter()) {
                probe.inputs[slot].value = feature;
            }
            let target = dataset.target(row);
            let predicted = heaviside(probe.weighted_sum());
            let error = target - predicted;
            total_abs_error += error.abs();

            let weight_deltas: Vec<f64> = probe
                .inputs
                .iter()
                .map(|input| config.learning_rate * error * input.value)
                .collect();
            for (a, d) in acc.iter_mut().zip(&weight_deltas) {
                *a += *d;
            }

            steps.push(TrainingStep {
                row: row.clone(),
                target,
                predicted,
                error,
                weight_deltas,
            });
        }

        let mut snapshot = current.clone();
        for (w, a) in snapshot.weights.iter_mut().zip(&acc) {
            w.value += *a;
        }

        entries.push(HistoryEntry {
            iteration_index,
            steps,
            network: snapshot.clone(),
        });
        current = snapshot;

        if total_abs_error < config.error_threshold {
            converged = true;
            break;
        }
    }

    TrainingHistory { entries, converged }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::builtin;
    use crate::network::presets;

    /// OR-gate network with all weights zeroed — the classic classroom
    /// starting point.
    fn zeroed_or_network() -> Network {
        let mut net = presets::or_gate();
        for w in &mut net.weights {
            w.value = 0.0;
        }
        net
    }

    #[test]
    fn or_epoch_one_applies_the_summed_deltas() {
        let history = train_history(
            &zeroed_or_network(),
            &builtin::or_gate(),
            &TrainConfig::new(0.1),
        );
        let first = &history.entries[0];

        // With zero weights every sum is 0 and step(0) = 1, so only the
        // (0,0) -> 0 row misclassifies: error -1, deltas 0.1 * -1 * [0,0,1].
        assert_eq!(first.steps[0].predicted, 1.0);
        assert_eq!(first.steps[0].error, -1.0);
        for step in &first.steps[1..] {
            assert_eq!(step.error, 0.0);
        }
        let weights: Vec<f64> = first.network.weights.iter().map(|w| w.value).collect();
        assert_eq!(weights, vec![0.0, 0.0, -0.1]);
    }

    #[test]
    fn or_run_converges_at_iteration_five() {
        let history = train_history(
            &zeroed_or_network(),
            &builtin::or_gate(),
            &TrainConfig::new(0.1),
        );
        assert!(history.converged);
        assert_eq!(history.entries.len(), 6);
        let last = history.entries.last().unwrap();
        assert_eq!(last.iteration_index, 5);
        assert_eq!(last.total_absolute_error(), 0.0);

        let final_weights: Vec<f64> = history
            .final_network()
            .unwrap()
            .weights
            .iter()
            .map(|w| w.value)
            .collect();
        assert!((final_weights[0] - 0.2).abs() < 1e-9);
        assert!((final_weights[1] - 0.2).abs() < 1e-9);
        assert!((final_weights[2] + 0.1).abs() < 1e-9);
    }

    #[test]
    fn predictions_use_the_epoch_start_snapshot() {
        let history = train_history(
            &zeroed_or_network(),
            &builtin::or_gate(),
            &TrainConfig::new(0.1),
        );
        // Epoch 1 starts from weights [0, 0, -0.1]: every sum is negative,
        // so every row predicts 0. An online (per-row) update would flip
        // later predictions to 1 mid-epoch; batch accumulation must not.
        let second = &history.entries[1];
        assert!(second.steps.iter().all(|s| s.predicted == 0.0));
        assert_eq!(second.total_absolute_error(), 3.0);
    }

    #[test]
    fn caller_network_is_untouched() {
        let net = zeroed_or_network();
        let before = net.clone();
        let _ = train_history(&net, &builtin::or_gate(), &TrainConfig::new(0.1));
        assert_eq!(net, before);
    }

    #[test]
    fn iris_converges_within_the_cap() {
        let mut net = presets::iris();
        for w in &mut net.weights {
            w.value = 0.0;
        }
        let history = train_history(&net, &builtin::iris(), &TrainConfig::new(0.1));
        assert!(history.converged);
        assert!(history.entries.len() <= 10);
    }

    #[test]
    fn cap_bounds_a_non_separable_run() {
        // XOR is not linearly separable; the run must stop at the cap.
        let xor = Dataset::new(
            "XOR",
            vec!["a".into(), "b".into()],
            vec![
                vec![0.0, 0.0, 0.0],
                vec![0.0, 1.0, 1.0],
                vec![1.0, 0.0, 1.0],
                vec![1.0, 1.0, 0.0],
            ],
        );
        let history = train_history(&zeroed_or_network(), &xor, &TrainConfig::new(0.1));
        assert!(!history.converged);
        assert_eq!(history.entries.len(), 10);
    }

    #[test]
    #[should_panic(expected = "editable inputs")]
    fn feature_count_mismatch_panics() {
        let net = presets::not_gate(); // one editable input
        let _ = train_history(&net, &builtin::or_gate(), &TrainConfig::new(0.1));
    }
}
