pub mod region;

pub use region::{sample_region, step_curve, RegionPoint, RESOLUTION};
