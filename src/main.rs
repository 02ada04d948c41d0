// This binary crate is intentionally minimal.
// All perceptron logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example or_training
fn main() {
    println!("perceptron-lab: a single-layer perceptron playground in Rust.");
    println!("Run `cargo run --example or_training` to watch the learning rule converge,");
    println!("or `cargo run --bin studio` for the interactive browser playground.");
}
