/// perceptron-lab studio
///
/// A browser playground for a single-layer perceptron: drag inputs and
/// weights, watch the weighted sum and step output react, and replay the
/// perceptron learning rule epoch by epoch.
/// Served by a synchronous tiny_http server; no JavaScript frameworks.
///
/// Run with:
///   cargo run --bin studio --release
/// Then open http://127.0.0.1:7878
///
/// Pages:
///   1. Playground — the network diagram, drag-editable nodes, and the
///      decision-region plot
///   2. Train      — run the learning rule, inspect every epoch's steps,
///      scrub snapshots, reveal or scramble weights

mod handlers;
mod render;
mod routes;
mod state;
mod util;

use std::sync::{Arc, Mutex};
use tiny_http::Server;

use state::StudioState;

fn main() {
    let addr = "127.0.0.1:7878";
    let server = Server::http(addr).expect("Failed to bind HTTP server");

    let shared_state = Arc::new(Mutex::new(StudioState::new()));

    println!("╔══════════════════════════════════════════════╗");
    println!("║          perceptron-lab studio               ║");
    println!("╠══════════════════════════════════════════════╣");
    println!("║  Open in your browser:                       ║");
    println!("║  http://{}                 ║", addr);
    println!("╠══════════════════════════════════════════════╣");
    println!("║  Pages: Playground > Train                   ║");
    println!("╚══════════════════════════════════════════════╝");

    // One thread per request: drag/move posts arrive at pointer-event rate
    // and must not queue behind a slow page render.
    for request in server.incoming_requests() {
        let state_clone = shared_state.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, state_clone);
        });
    }
}
