use std::io::Cursor;
use tiny_http::{Request, Response};

use perceptron_lab::format::pad;
use perceptron_lab::train::{train_history, TrainConfig, TrainingHistory};

use crate::handlers::perceptron::render_flash_html;
use crate::render::{html_escape, render_page, Page};
use crate::routes::{html_response, json_download_response, redirect};
use crate::state::{FlashMessage, SharedState};
use crate::util::form::{form_f64, form_usize, read_form};

// ---------------------------------------------------------------------------
// GET /train
// ---------------------------------------------------------------------------

pub fn handle_get(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut st = state.lock().unwrap();
    let flash = st.take_flash();
    let demo = st.demo;
    let learning_rate = st.learning_rate;
    let history = st.history.clone();
    let scrub_index = st.scrub_index;
    drop(st);

    let flash_html = render_flash_html(flash.as_ref());
    let history_html = match &history {
        Some(h) => history_table_html(h, scrub_index),
        None => "<p class=\"muted\">No run yet — pick a learning rate and press Train.</p>".to_owned(),
    };

    let page = render_page(Page::Train, &flash_html, |mut html| {
        html = html.replace("{{DEMO_TITLE}}", demo.title());
        html = html.replace("{{LEARNING_RATE}}", &learning_rate.to_string());
        html = html.replace("{{HISTORY_TABLE}}", &history_html);
        html = html.replace(
            "{{EXPORT_LINK}}",
            if history.is_some() {
                "<a href=\"/train/export\">Export history as JSON</a>"
            } else {
                ""
            },
        );
        html
    });
    html_response(page)
}

// ---------------------------------------------------------------------------
// POST /train/run
// ---------------------------------------------------------------------------

/// Recomputes the full training history from the live network and the
/// demo's dataset. The history is a pure function of that pair plus the
/// learning rate, so re-running with the same state reproduces it exactly.
pub fn handle_run(request: &mut Request, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let form = read_form(request);
    let learning_rate = form_f64(&form, "learning_rate").filter(|lr| lr.is_finite() && *lr > 0.0);

    let mut st = state.lock().unwrap();
    match learning_rate {
        Some(lr) => {
            st.learning_rate = lr;
            let history = train_history(&st.network, &st.demo.dataset(), &TrainConfig::new(lr));
            let epochs = history.entries.len();
            st.flash = Some(FlashMessage::success(if history.converged {
                format!("Converged after {epochs} epoch(s).")
            } else {
                format!("Stopped at the {epochs}-epoch cap without converging.")
            }));
            st.history = Some(history);
            st.scrub_index = None;
        }
        None => {
            st.flash = Some(FlashMessage::error("Learning rate must be a positive number."));
        }
    }
    redirect("/train")
}

// ---------------------------------------------------------------------------
// POST /train/scrub
// ---------------------------------------------------------------------------

/// Replaces the live network wholesale with the selected epoch's snapshot,
/// so the playground diagram and region plot replay that moment of training.
pub fn handle_scrub(request: &mut Request, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let form = read_form(request);
    let index = form_usize(&form, "index");

    let mut st = state.lock().unwrap();
    let snapshot = index.and_then(|i| {
        st.history
            .as_ref()
            .and_then(|h| h.entries.get(i))
            .map(|e| e.network.clone())
    });
    match (index, snapshot) {
        (Some(i), Some(network)) => {
            st.replace_network(network);
            st.scrub_index = Some(i);
            st.flash = Some(FlashMessage::success(format!("Showing the epoch {i} snapshot.")));
        }
        _ => {
            st.flash = Some(FlashMessage::error("No such epoch in the current run."));
        }
    }
    redirect("/train")
}

// ---------------------------------------------------------------------------
// POST /train/reveal — load the known-good weights for the demo
// ---------------------------------------------------------------------------

pub fn handle_reveal(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut st = state.lock().unwrap();
    let solution = st.demo.solution_weights();
    for (w, v) in st.network.weights.iter_mut().zip(solution) {
        w.set_value(v);
    }
    st.scrub_index = None;
    st.flash = Some(FlashMessage::success("Correct weights revealed."));
    redirect("/train")
}

// ---------------------------------------------------------------------------
// POST /train/scramble — random weights so training has work to do
// ---------------------------------------------------------------------------

pub fn handle_scramble(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut st = state.lock().unwrap();
    let mut rng = rand::thread_rng();
    st.network.randomize_weights(&mut rng);
    st.scrub_index = None;
    st.flash = Some(FlashMessage::success("Weights scrambled."));
    redirect("/train")
}

// ---------------------------------------------------------------------------
// GET /train/export
// ---------------------------------------------------------------------------

pub fn handle_export(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let st = state.lock().unwrap();
    let (demo, history) = (st.demo, st.history.clone());
    drop(st);

    match history {
        Some(h) => {
            let body = serde_json::to_string_pretty(&h).unwrap_or_else(|_| "{}".to_owned());
            json_download_response(body, &format!("{}-training-history.json", demo.slug()))
        }
        None => redirect("/train"),
    }
}

// ---------------------------------------------------------------------------
// History table rendering
// ---------------------------------------------------------------------------

fn history_table_html(history: &TrainingHistory, scrub_index: Option<usize>) -> String {
    let mut out = String::new();
    for entry in &history.entries {
        let k = entry.iteration_index;
        let viewing = scrub_index == Some(k);
        let weights: Vec<String> = entry.network.weights.iter().map(|w| pad(w.value)).collect();

        out.push_str(&format!(
            "<details class=\"epoch{}\" {}><summary>Epoch {k} — total |error| {} → weights [{}]\
             <form method=\"post\" action=\"/train/scrub\" class=\"inline\">\
             <input type=\"hidden\" name=\"index\" value=\"{k}\"/>\
             <button>{}</button></form></summary>",
            if viewing { " viewing" } else { "" },
            if viewing { "open" } else { "" },
            entry.total_absolute_error(),
            weights.join(", "),
            if viewing { "viewing" } else { "view snapshot" },
        ));

        out.push_str(
            "<table><tr><th>row</th><th>target</th><th>predicted</th><th>error</th><th>Δw</th></tr>",
        );
        for step in &entry.steps {
            let row: Vec<String> = step.row.iter().map(|v| pad(*v)).collect();
            let deltas: Vec<String> = step.weight_deltas.iter().map(|v| pad(*v)).collect();
            out.push_str(&format!(
                "<tr><td>[{}]</td><td>{}</td><td>{}</td><td>{}</td><td>[{}]</td></tr>",
                html_escape(&row.join(", ")),
                step.target,
                step.predicted,
                step.error,
                deltas.join(", "),
            ));
        }
        out.push_str("</table></details>");
    }
    out
}
