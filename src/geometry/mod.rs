pub mod bezier;

pub use bezier::{bezier_point, lerp, Point};
