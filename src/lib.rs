pub mod geometry;
pub mod network;
pub mod activation;
pub mod plot;
pub mod train;
pub mod gesture;
pub mod dataset;
pub mod format;

// Convenience re-exports
pub use geometry::bezier::{bezier_point, lerp, Point};
pub use network::node::{Node, OutputSlot};
pub use network::network::Network;
pub use activation::heaviside::heaviside;
pub use plot::region::{sample_region, RegionPoint, RESOLUTION};
pub use train::train_config::TrainConfig;
pub use train::history::{HistoryEntry, TrainingHistory, TrainingStep};
pub use train::loop_fn::train_history;
pub use gesture::drag::DragTracker;
pub use dataset::Dataset;
