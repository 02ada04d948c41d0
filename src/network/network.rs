use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::network::node::{Node, OutputSlot};

/// A single-layer perceptron: parallel lists of inputs and weights feeding
/// one output through a step activation.
///
/// Invariants (asserted at construction):
/// - `inputs.len() == weights.len()`
/// - the last input/weight pair is the bias by convention: a non-editable
///   input fixed at 1 paired with a trainable bias weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub inputs: Vec<Node>,
    pub weights: Vec<Node>,
    pub outputs: Vec<OutputSlot>,
}

impl Network {
    pub fn new(inputs: Vec<Node>, weights: Vec<Node>, outputs: Vec<OutputSlot>) -> Network {
        assert_eq!(
            inputs.len(),
            weights.len(),
            "inputs and weights must pair up one-to-one"
        );
        Network { inputs, weights, outputs }
    }

    /// The weighted sum `Σ inputs[i] * weights[i]`, summed in index order so
    /// floating-point results are reproducible across calls.
    pub fn weighted_sum(&self) -> f64 {
        let mut sum = 0.0;
        for i in 0..self.inputs.len() {
            sum += self.inputs[i].value * self.weights[i].value;
        }
        sum
    }

    /// Indices of the editable (non-bias) inputs, in diagram order. These are
    /// the free axes for the decision-region plot and the feature slots the
    /// trainer overwrites with dataset rows.
    pub fn editable_inputs(&self) -> Vec<usize> {
        self.inputs
            .iter()
            .enumerate()
            .filter(|(_, n)| n.editable)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of free (editable) inputs.
    pub fn free_input_count(&self) -> usize {
        self.inputs.iter().filter(|n| n.editable).count()
    }

    /// Overwrites every weight with a uniform draw from that weight's own
    /// range. The studio's "scramble" action uses this to reset a solved
    /// demo before training.
    pub fn randomize_weights<R: Rng>(&mut self, rng: &mut R) {
        for w in &mut self.weights {
            let value = rng.gen::<f64>() * (w.max_value - w.min_value) + w.min_value;
            w.set_value(value);
        }
    }

    /// Serializes the network to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by
    /// `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::presets;

    #[test]
    fn weighted_sum_matches_hand_computation() {
        let net = Network::new(
            vec![Node::editable(2.0, 0.0, 10.0), Node::fixed(1.0)],
            vec![Node::editable(3.0, -100.0, 100.0), Node::editable(-1.0, -100.0, 100.0)],
            vec![OutputSlot { editable: false }],
        );
        assert_eq!(net.weighted_sum(), 5.0);
    }

    #[test]
    fn weighted_sum_scales_linearly_in_the_weights() {
        let mut net = presets::and_gate();
        net.inputs[0].set_value(1.0);
        net.inputs[1].set_value(0.5);
        let base = net.weighted_sum();
        for w in &mut net.weights {
            w.value *= 3.0;
        }
        assert!((net.weighted_sum() - 3.0 * base).abs() < 1e-12);
    }

    #[test]
    fn weighted_sum_invariant_under_paired_permutation() {
        let mut net = presets::and_gate();
        net.inputs[0].set_value(1.0);
        net.inputs[1].set_value(0.25);
        let before = net.weighted_sum();
        net.inputs.swap(0, 1);
        net.weights.swap(0, 1);
        assert_eq!(net.weighted_sum(), before);
    }

    #[test]
    #[should_panic(expected = "one-to-one")]
    fn mismatched_lengths_panic() {
        Network::new(
            vec![Node::fixed(1.0)],
            vec![],
            vec![OutputSlot { editable: false }],
        );
    }

    #[test]
    fn randomize_respects_ranges() {
        let mut net = presets::iris();
        let mut rng = rand::thread_rng();
        net.randomize_weights(&mut rng);
        for w in &net.weights {
            assert!(w.value >= w.min_value && w.value <= w.max_value);
        }
    }
}
