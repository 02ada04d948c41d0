pub mod history;
pub mod loop_fn;
pub mod train_config;

pub use history::{HistoryEntry, TrainingHistory, TrainingStep};
pub use loop_fn::train_history;
pub use train_config::TrainConfig;
