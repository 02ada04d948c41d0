pub mod drag;
pub mod perceptron;
pub mod region;
pub mod train;
