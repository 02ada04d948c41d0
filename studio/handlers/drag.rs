//! Drag-gesture endpoints. The page's pointer handlers relay raw device
//! coordinates here; the per-node `DragTracker` owns the gesture state, so a
//! move is only ever routed to the node whose tracker is mid-drag.

use std::io::Cursor;
use tiny_http::{Request, Response};

use crate::routes::{json_response, not_found};
use crate::state::{NodeRef, SharedState};
use crate::util::form::{form_f64, form_usize, read_form};

fn parse_target(form: &std::collections::HashMap<String, String>) -> Option<NodeRef> {
    form.get("kind")
        .zip(form_usize(form, "index"))
        .and_then(|(kind, index)| NodeRef::parse(kind, index))
}

fn parse_point(form: &std::collections::HashMap<String, String>) -> Option<[f64; 2]> {
    Some([form_f64(form, "x")?, form_f64(form, "y")?])
}

/// POST /drag/start — capture the node's current value and the pointer
/// origin. Non-editable nodes have a tracker that simply stays idle.
pub fn handle_start(request: &mut Request, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let form = read_form(request);
    let (target, point) = match (parse_target(&form), parse_point(&form)) {
        (Some(t), Some(p)) => (t, p),
        _ => return not_found(),
    };

    let mut st = state.lock().unwrap();
    let value = match target {
        NodeRef::Input(i) => st.network.inputs.get(i).map(|n| n.value),
        NodeRef::Weight(i) => st.network.weights.get(i).map(|n| n.value),
    };
    let (Some(value), Some(tracker)) = (value, st.tracker_mut(target)) else {
        return not_found();
    };
    tracker.begin(value, point);
    let dragging = tracker.is_dragging();
    json_response(format!("{{\"dragging\":{dragging}}}"))
}

/// POST /drag/move — one pointer position; responds with the node's new
/// value so the page can update without a reload. Emitted per move event,
/// unthrottled.
pub fn handle_move(request: &mut Request, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let form = read_form(request);
    let (target, point) = match (parse_target(&form), parse_point(&form)) {
        (Some(t), Some(p)) => (t, p),
        _ => return not_found(),
    };

    let mut st = state.lock().unwrap();
    let new_value = st.tracker_mut(target).and_then(|t| t.move_to(point));
    match new_value {
        Some(value) => {
            match target {
                NodeRef::Input(i) => st.network.inputs[i].set_value(value),
                NodeRef::Weight(i) => st.network.weights[i].set_value(value),
            }
            let sum = st.network.weighted_sum();
            json_response(format!(
                "{{\"value\":{value},\"sum\":{sum},\"output\":{}}}",
                perceptron_lab::heaviside(sum)
            ))
        }
        // Idle tracker (no gesture, or non-editable node): no state change.
        None => json_response("{\"value\":null}".to_owned()),
    }
}

/// POST /drag/end — detach: the tracker returns to idle. No value side
/// effects beyond what the moves already applied.
pub fn handle_end(request: &mut Request, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let form = read_form(request);
    let Some(target) = parse_target(&form) else {
        return not_found();
    };

    let mut st = state.lock().unwrap();
    if let Some(tracker) = st.tracker_mut(target) {
        tracker.end();
    }
    json_response("{\"dragging\":false}".to_owned())
}
