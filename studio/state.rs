use std::sync::{Arc, Mutex};

use perceptron_lab::dataset::builtin;
use perceptron_lab::network::presets;
use perceptron_lab::{Dataset, DragTracker, Network, TrainingHistory};

// ---------------------------------------------------------------------------
// Demo selection
// ---------------------------------------------------------------------------

/// Which preset the playground is currently showing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Demo {
    And,
    Or,
    Not,
    Iris,
}

impl Demo {
    pub const ALL: [Demo; 4] = [Demo::And, Demo::Or, Demo::Not, Demo::Iris];

    pub fn parse(s: &str) -> Option<Demo> {
        match s {
            "and" => Some(Demo::And),
            "or" => Some(Demo::Or),
            "not" => Some(Demo::Not),
            "iris" => Some(Demo::Iris),
            _ => None,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Demo::And => "and",
            Demo::Or => "or",
            Demo::Not => "not",
            Demo::Iris => "iris",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::And => "AND gate",
            Demo::Or => "OR gate",
            Demo::Not => "NOT gate",
            Demo::Iris => "Iris flowers",
        }
    }

    /// Fresh preset network for this demo.
    pub fn network(self) -> Network {
        match self {
            Demo::And => presets::and_gate(),
            Demo::Or => presets::or_gate(),
            Demo::Not => presets::not_gate(),
            Demo::Iris => presets::iris(),
        }
    }

    /// The labeled rows this demo trains on. NOT has a 1-feature table.
    pub fn dataset(self) -> Dataset {
        match self {
            Demo::And => builtin::and_gate(),
            Demo::Or => builtin::or_gate(),
            Demo::Not => Dataset::new(
                "NOT",
                vec!["x".into()],
                vec![vec![0.0, 1.0], vec![1.0, 0.0]],
            ),
            Demo::Iris => builtin::iris(),
        }
    }

    /// The known-good weights for the "reveal" action.
    pub fn solution_weights(self) -> Vec<f64> {
        match self {
            Demo::And => vec![1.0, 1.0, -1.5],
            Demo::Or => vec![2.0, 2.0, -1.0],
            Demo::Not => vec![-1.0, 0.5],
            Demo::Iris => presets::iris_solution(),
        }
    }
}

// ---------------------------------------------------------------------------
// Node addressing
// ---------------------------------------------------------------------------

/// Which diagram node a form submission targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef {
    Input(usize),
    Weight(usize),
}

impl NodeRef {
    /// Parses the `kind` / `index` form fields.
    pub fn parse(kind: &str, index: usize) -> Option<NodeRef> {
        match kind {
            "input" => Some(NodeRef::Input(index)),
            "weight" => Some(NodeRef::Weight(index)),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Flash messages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        FlashMessage { kind: FlashKind::Success, text: text.into() }
    }
    pub fn error(text: impl Into<String>) -> Self {
        FlashMessage { kind: FlashKind::Error, text: text.into() }
    }
}

// ---------------------------------------------------------------------------
// Main state struct
// ---------------------------------------------------------------------------

pub struct StudioState {
    /// Active preset.
    pub demo: Demo,
    /// The live network: the single owner of current input/weight values.
    pub network: Network,
    /// Learning rate for the next training run.
    pub learning_rate: f64,
    /// Fully materialized history of the most recent run, if any.
    pub history: Option<TrainingHistory>,
    /// Which history snapshot the user is viewing, if scrubbing.
    pub scrub_index: Option<usize>,
    /// One drag tracker per input node, index-aligned with `network.inputs`.
    pub input_trackers: Vec<DragTracker>,
    /// One drag tracker per weight node, index-aligned with `network.weights`.
    pub weight_trackers: Vec<DragTracker>,
    /// One-shot flash message for the next page render.
    pub flash: Option<FlashMessage>,
}

impl StudioState {
    pub fn new() -> Self {
        let demo = Demo::And;
        let network = demo.network();
        let (input_trackers, weight_trackers) = build_trackers(&network);
        StudioState {
            demo,
            network,
            learning_rate: 0.1,
            history: None,
            scrub_index: None,
            input_trackers,
            weight_trackers,
            flash: None,
        }
    }

    /// Switches demo: replaces the network wholesale, drops any computed
    /// history, and rebuilds the per-node trackers.
    pub fn select_demo(&mut self, demo: Demo) {
        self.demo = demo;
        self.replace_network(demo.network());
        self.history = None;
        self.scrub_index = None;
    }

    /// Wholesale network replacement (preset reset, reveal, history scrub).
    /// Any drag in progress is abandoned with the old trackers.
    pub fn replace_network(&mut self, network: Network) {
        let (input_trackers, weight_trackers) = build_trackers(&network);
        self.network = network;
        self.input_trackers = input_trackers;
        self.weight_trackers = weight_trackers;
    }

    pub fn tracker_mut(&mut self, node: NodeRef) -> Option<&mut DragTracker> {
        match node {
            NodeRef::Input(i) => self.input_trackers.get_mut(i),
            NodeRef::Weight(i) => self.weight_trackers.get_mut(i),
        }
    }

    /// Takes and returns the current flash message, clearing it.
    pub fn take_flash(&mut self) -> Option<FlashMessage> {
        self.flash.take()
    }
}

/// One tracker per node, parameterized by the node's render radius and range.
/// Each node owning its own tracker is what keeps concurrent drags on
/// different nodes independent.
fn build_trackers(network: &Network) -> (Vec<DragTracker>, Vec<DragTracker>) {
    let r = crate::render::node_radius(network.inputs.len());
    let inputs = network
        .inputs
        .iter()
        .map(|n| DragTracker::new(r, n.min_value, n.max_value, n.editable))
        .collect();
    let weights = network
        .weights
        .iter()
        .map(|n| DragTracker::new(r, n.min_value, n.max_value, n.editable))
        .collect();
    (inputs, weights)
}

/// Shared state type — an `Arc<Mutex<StudioState>>` passed to every handler.
pub type SharedState = Arc<Mutex<StudioState>>;
