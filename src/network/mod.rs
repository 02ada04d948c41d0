pub mod network;
pub mod node;
pub mod presets;

pub use network::Network;
pub use node::{Node, OutputSlot};
