use perceptron_lab::dataset::builtin;
use perceptron_lab::network::presets;
use perceptron_lab::plot::region::{sample_region, RESOLUTION};
use perceptron_lab::{train_history, TrainConfig};

fn main() {
    // Train the iris demo from zero weights, then print its decision region
    // as an ASCII grid: '#' = versicolor side, '.' = setosa side.
    let network = presets::iris();
    let dataset = builtin::iris();
    let history = train_history(&network, &dataset, &TrainConfig::new(0.01));

    println!(
        "Trained for {} epoch(s), converged: {}",
        history.entries.len(),
        history.converged,
    );

    let learned = history.final_network().expect("at least one epoch ran");
    let points = sample_region(learned, 0, 1);

    // Row-major sample order: axis A (sepal length) outer, axis B inner.
    // Print with petal length increasing upward.
    let side = RESOLUTION + 1;
    for j in (0..side).rev() {
        let mut line = String::new();
        for i in 0..side {
            let p = &points[i * side + j];
            line.push(if p.label == 1.0 { '#' } else { '.' });
        }
        println!("{line}");
    }
    println!("x: sepal length {:.1}..{:.1} cm", points[0].x, points[points.len() - 1].x);
    let (py_min, py_max) = dataset.feature_range(1);
    println!("y: petal length {py_min:.1}..{py_max:.1} cm");
}
