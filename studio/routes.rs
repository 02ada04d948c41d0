use std::io::Cursor;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::handlers;
use crate::state::SharedState;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub fn html_response(body: String) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![Header::from_bytes(b"Content-Type", b"text/html; charset=utf-8").unwrap()],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn json_response(body: String) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![Header::from_bytes(b"Content-Type", b"application/json").unwrap()],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn json_download_response(body: String, filename: &str) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    let disposition = format!("attachment; filename=\"{}\"", filename);
    Response::new(
        StatusCode(200),
        vec![
            Header::from_bytes(b"Content-Type", b"application/json").unwrap(),
            Header::from_bytes(b"Content-Disposition", disposition.as_bytes()).unwrap(),
        ],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn redirect(location: &str) -> Response<Cursor<Vec<u8>>> {
    Response::new(
        StatusCode(303),
        vec![
            Header::from_bytes(b"Location", location.as_bytes()).unwrap(),
            Header::from_bytes(b"Content-Length", b"0").unwrap(),
        ],
        Cursor::new(Vec::new()),
        Some(0),
        None,
    )
}

pub fn not_found() -> Response<Cursor<Vec<u8>>> {
    let body = b"404 Not Found".to_vec();
    let len = body.len();
    Response::new(
        StatusCode(404),
        vec![Header::from_bytes(b"Content-Type", b"text/plain").unwrap()],
        Cursor::new(body),
        Some(len),
        None,
    )
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Dispatches incoming requests to the appropriate handler. Handlers receive
/// a `&mut Request` where they need the body; the dispatcher retains
/// ownership and responds at the end.
pub fn dispatch(mut request: Request, state: SharedState) {
    let method = request.method().clone();
    let url = request.url().to_owned();
    let path = url.split('?').next().unwrap_or(&url).to_owned();

    let response = match (method, path.as_str()) {
        // ── Root redirect ────────────────────────────────────────────────
        (Method::Get, "/") => redirect("/playground"),

        // ── Playground ───────────────────────────────────────────────────
        (Method::Get, "/playground") => handlers::perceptron::handle_get(state),
        (Method::Post, "/demo") => handlers::perceptron::handle_select(&mut request, state),
        (Method::Post, "/node/set") => handlers::perceptron::handle_set_node(&mut request, state),

        // ── Drag gestures ────────────────────────────────────────────────
        (Method::Post, "/drag/start") => handlers::drag::handle_start(&mut request, state),
        (Method::Post, "/drag/move") => handlers::drag::handle_move(&mut request, state),
        (Method::Post, "/drag/end") => handlers::drag::handle_end(&mut request, state),

        // ── Plot data ────────────────────────────────────────────────────
        (Method::Get, "/region.json") => handlers::region::handle_get(state),

        // ── Training ─────────────────────────────────────────────────────
        (Method::Get, "/train") => handlers::train::handle_get(state),
        (Method::Post, "/train/run") => handlers::train::handle_run(&mut request, state),
        (Method::Post, "/train/scrub") => handlers::train::handle_scrub(&mut request, state),
        (Method::Post, "/train/reveal") => handlers::train::handle_reveal(state),
        (Method::Post, "/train/scramble") => handlers::train::handle_scramble(state),
        (Method::Get, "/train/export") => handlers::train::handle_export(state),

        // ── 404 ──────────────────────────────────────────────────────────
        _ => not_found(),
    };

    let _ = request.respond(response);
}
