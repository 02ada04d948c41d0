//! GET /region.json — the decision-region samples for the live network,
//! recomputed per request from the current state.

use std::io::Cursor;
use tiny_http::Response;

use perceptron_lab::plot::region::sample_region;

use crate::routes::json_response;
use crate::state::SharedState;

pub fn handle_get(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let st = state.lock().unwrap();
    let points = sample_region(&st.network, 0, 1);
    drop(st);

    let body = serde_json::to_string(&points).unwrap_or_else(|_| "[]".to_owned());
    json_response(body)
}
