//! The demo networks the playground ships with. Each preset returns a fresh
//! `Network` with the conventional bias pair last: an input locked to 1
//! paired with a trainable bias weight.

use crate::dataset::builtin;
use crate::format::subscript;
use crate::network::network::Network;
use crate::network::node::{Node, OutputSlot};

/// Weight drag range for the logic-gate demos.
const GATE_WEIGHT_RANGE: (f64, f64) = (-100.0, 100.0);
/// Weight slider range for the real-valued iris demo.
const IRIS_WEIGHT_RANGE: (f64, f64) = (-2.0, 2.0);

fn gate_input(index: usize) -> Node {
    Node::editable(0.0, 0.0, 1.0).with_label(format!("x{}", subscript(index)))
}

fn gate_weight(value: f64, index: usize) -> Node {
    Node::editable(value, GATE_WEIGHT_RANGE.0, GATE_WEIGHT_RANGE.1)
        .with_label(format!("w{}", subscript(index)))
}

fn bias_input() -> Node {
    Node::fixed(1.0).with_label("b")
}

/// AND gate, pre-solved: fires only at (1, 1).
pub fn and_gate() -> Network {
    Network::new(
        vec![gate_input(1), gate_input(2), bias_input()],
        vec![gate_weight(1.0, 1), gate_weight(1.0, 2), gate_weight(-1.5, 3)],
        vec![OutputSlot { editable: false }],
    )
}

/// OR gate, pre-solved: fires everywhere except (0, 0).
pub fn or_gate() -> Network {
    Network::new(
        vec![gate_input(1), gate_input(2), bias_input()],
        vec![gate_weight(2.0, 1), gate_weight(2.0, 2), gate_weight(-1.0, 3)],
        vec![OutputSlot { editable: false }],
    )
}

/// NOT gate: one free input, pre-solved to invert it.
pub fn not_gate() -> Network {
    Network::new(
        vec![gate_input(1), bias_input()],
        vec![gate_weight(-1.0, 1), gate_weight(0.5, 2)],
        vec![OutputSlot { editable: false }],
    )
}

/// Iris demo: two real-valued features with per-column ranges taken from the
/// embedded dataset, weights starting at zero so training has work to do.
pub fn iris() -> Network {
    let ds = builtin::iris();
    let inputs: Vec<Node> = (0..ds.feature_count())
        .map(|i| {
            let (min, max) = ds.feature_range(i);
            Node::editable(min, min, max).with_label(ds.feature_labels[i].clone())
        })
        .chain(std::iter::once(bias_input()))
        .collect();
    let weights = (1..=ds.feature_count() + 1)
        .map(|i| {
            Node::editable(0.0, IRIS_WEIGHT_RANGE.0, IRIS_WEIGHT_RANGE.1)
                .with_label(format!("w{}", subscript(i)))
        })
        .collect();
    Network::new(inputs, weights, vec![OutputSlot { editable: false }])
}

/// A known-good weight vector for the iris demo ("reveal" action): classify
/// on petal length with a threshold around 2.5 cm, scaled to fit the
/// `[-2, 2]` slider range.
pub fn iris_solution() -> Vec<f64> {
    vec![0.0, 0.8, -2.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::heaviside::heaviside;

    #[test]
    fn not_gate_truth_table() {
        let mut net = not_gate();
        net.inputs[0].set_value(0.0);
        assert_eq!(net.weighted_sum(), 0.5);
        assert_eq!(heaviside(net.weighted_sum()), 1.0);

        net.inputs[0].set_value(1.0);
        assert_eq!(net.weighted_sum(), -0.5);
        assert_eq!(heaviside(net.weighted_sum()), 0.0);
    }

    #[test]
    fn and_gate_corners() {
        let mut net = and_gate();
        net.inputs[0].set_value(1.0);
        net.inputs[1].set_value(1.0);
        assert_eq!(net.weighted_sum(), 0.5);
        assert_eq!(heaviside(net.weighted_sum()), 1.0);

        net.inputs[0].set_value(0.0);
        net.inputs[1].set_value(0.0);
        assert_eq!(net.weighted_sum(), -1.5);
        assert_eq!(heaviside(net.weighted_sum()), 0.0);
    }

    #[test]
    fn or_gate_fires_on_any_set_input() {
        let mut net = or_gate();
        net.inputs[0].set_value(0.0);
        net.inputs[1].set_value(1.0);
        assert_eq!(heaviside(net.weighted_sum()), 1.0);
        net.inputs[1].set_value(0.0);
        assert_eq!(heaviside(net.weighted_sum()), 0.0);
    }

    #[test]
    fn presets_keep_the_bias_pair_last() {
        for net in [and_gate(), or_gate(), not_gate(), iris()] {
            let bias = net.inputs.last().unwrap();
            assert!(!bias.editable);
            assert_eq!(bias.value, 1.0);
            assert!(net.weights.last().unwrap().editable);
        }
    }

    #[test]
    fn iris_solution_separates_the_dataset() {
        let ds = crate::dataset::builtin::iris();
        let mut net = iris();
        for (w, v) in net.weights.iter_mut().zip(iris_solution()) {
            w.set_value(v);
        }
        for row in &ds.rows {
            net.inputs[0].set_value(row[0]);
            net.inputs[1].set_value(row[1]);
            assert_eq!(heaviside(net.weighted_sum()), ds.target(row));
        }
    }
}
