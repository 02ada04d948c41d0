//! Built-in demo datasets. These are the only data the playground ever
//! trains on; nothing is loaded from disk or the network.

use crate::dataset::Dataset;
use crate::format::subscript;

fn gate_labels() -> Vec<String> {
    vec![format!("x{}", subscript(1)), format!("x{}", subscript(2))]
}

/// Truth table for OR: 4 rows of `[x1, x2, target]`.
pub fn or_gate() -> Dataset {
    Dataset::new(
        "OR",
        gate_labels(),
        vec![
            vec![0.0, 0.0, 0.0],
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 1.0],
        ],
    )
}

/// Truth table for AND: 4 rows of `[x1, x2, target]`.
pub fn and_gate() -> Dataset {
    Dataset::new(
        "AND",
        gate_labels(),
        vec![
            vec![0.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 0.0],
            vec![1.0, 1.0, 1.0],
        ],
    )
}

/// A 12-row slice of Fisher's iris data: sepal length and petal length in
/// centimeters, setosa = 0 vs versicolor = 1. Linearly separable, so the
/// perceptron rule converges well inside the 10-epoch cap.
pub fn iris() -> Dataset {
    Dataset::new(
        "iris",
        vec!["sepal length".into(), "petal length".into()],
        vec![
            vec![5.1, 1.4, 0.0],
            vec![4.9, 1.4, 0.0],
            vec![4.7, 1.3, 0.0],
            vec![5.0, 1.6, 0.0],
            vec![5.4, 1.7, 0.0],
            vec![4.6, 1.0, 0.0],
            vec![7.0, 4.7, 1.0],
            vec![6.4, 4.5, 1.0],
            vec![6.9, 4.9, 1.0],
            vec![5.5, 4.0, 1.0],
            vec![6.5, 4.6, 1.0],
            vec![5.7, 4.5, 1.0],
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gates_are_four_row_truth_tables() {
        for ds in [or_gate(), and_gate()] {
            assert_eq!(ds.rows.len(), 4);
            assert_eq!(ds.feature_count(), 2);
        }
    }

    #[test]
    fn iris_classes_split_on_petal_length() {
        let ds = iris();
        for row in &ds.rows {
            let long_petal = row[1] > 2.5;
            assert_eq!(long_petal, ds.target(row) == 1.0);
        }
    }
}
