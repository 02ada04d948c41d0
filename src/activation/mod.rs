pub mod heaviside;

pub use heaviside::heaviside;
