use serde::{Serialize, Deserialize};

/// One editable (or fixed) value in the network diagram — used for both
/// inputs and weights, which share the same shape.
///
/// Fields:
/// - `value`     — current numeric value
/// - `editable`  — whether the UI may change it (drag or direct edit);
///                 the bias input is the conventional non-editable node
/// - `label`     — optional display label (e.g. "x₁", "petal length")
/// - `min_value` / `max_value` — inclusive range every edit is clamped into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub value: f64,
    pub editable: bool,
    #[serde(default)]
    pub label: Option<String>,
    pub min_value: f64,
    pub max_value: f64,
}

impl Node {
    /// An editable node with an initial value and range.
    pub fn editable(value: f64, min_value: f64, max_value: f64) -> Node {
        Node { value, editable: true, label: None, min_value, max_value }
    }

    /// A non-editable node (fixed bias input, locked solution weight).
    pub fn fixed(value: f64) -> Node {
        Node { value, editable: false, label: None, min_value: value, max_value: value }
    }

    /// Attaches a display label; builder-style.
    pub fn with_label(mut self, label: impl Into<String>) -> Node {
        self.label = Some(label.into());
        self
    }

    /// Sets the value, clamped into `[min_value, max_value]`.
    /// Out-of-range edits are clamped, never rejected.
    pub fn set_value(&mut self, value: f64) {
        self.value = value.clamp(self.min_value, self.max_value);
    }

    /// Midpoint of the node's range — the held position for the unused plot
    /// axis when the network has a single free input.
    pub fn midpoint(&self) -> f64 {
        (self.min_value + self.max_value) / 2.0
    }
}

/// An output circle in the diagram. Carries no value: the output is always
/// derived from the weighted sum and the step activation at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSlot {
    pub editable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_clamps_both_ends() {
        let mut n = Node::editable(0.0, -2.0, 2.0);
        n.set_value(5.0);
        assert_eq!(n.value, 2.0);
        n.set_value(-100.0);
        assert_eq!(n.value, -2.0);
        n.set_value(0.25);
        assert_eq!(n.value, 0.25);
    }

    #[test]
    fn fixed_node_range_pins_its_value() {
        let mut n = Node::fixed(1.0);
        n.set_value(0.0);
        assert_eq!(n.value, 1.0);
    }

    #[test]
    fn midpoint_of_unit_range() {
        assert_eq!(Node::editable(0.3, 0.0, 1.0).midpoint(), 0.5);
    }
}
