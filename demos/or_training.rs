use perceptron_lab::dataset::builtin;
use perceptron_lab::format::pad;
use perceptron_lab::network::presets;
use perceptron_lab::{heaviside, train_history, TrainConfig};

fn main() {
    // Start the OR demo from all-zero weights so there is something to learn.
    let mut network = presets::or_gate();
    for w in &mut network.weights {
        w.value = 0.0;
    }

    let dataset = builtin::or_gate();
    let history = train_history(&network, &dataset, &TrainConfig::new(0.1));

    for entry in &history.entries {
        println!("Epoch {} (total |error| = {}):", entry.iteration_index, entry.total_absolute_error());
        for step in &entry.steps {
            println!(
                "  row {:?} -> predicted {}, target {}, error {:+}, deltas {:?}",
                step.row, step.predicted, step.target, step.error, step.weight_deltas,
            );
        }
        let weights: Vec<String> = entry.network.weights.iter().map(|w| pad(w.value)).collect();
        println!("  weights after epoch: [{}]", weights.join(", "));
    }

    println!(
        "\n{} in {} epoch(s).",
        if history.converged { "Converged" } else { "Did not converge" },
        history.entries.len(),
    );

    // Sanity check: replay the truth table through the final snapshot.
    let mut learned = history.final_network().expect("at least one epoch ran").clone();
    for row in &dataset.rows {
        learned.inputs[0].set_value(row[0]);
        learned.inputs[1].set_value(row[1]);
        println!(
            "{} OR {} -> {}",
            row[0],
            row[1],
            heaviside(learned.weighted_sum()),
        );
    }
}
