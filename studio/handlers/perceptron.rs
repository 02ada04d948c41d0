use std::io::Cursor;
use tiny_http::{Request, Response};

use perceptron_lab::format::pad;
use perceptron_lab::heaviside;

use crate::render::{self, render_page, Page};
use crate::routes::{html_response, redirect};
use crate::state::{Demo, FlashKind, FlashMessage, NodeRef, SharedState};
use crate::util::form::{form_f64, form_usize, read_form};

// ---------------------------------------------------------------------------
// GET /playground
// ---------------------------------------------------------------------------

pub fn handle_get(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut st = state.lock().unwrap();
    let flash = st.take_flash();
    let demo = st.demo;
    let network = st.network.clone();
    drop(st);

    let sum = network.weighted_sum();
    let flash_html = render_flash_html(flash.as_ref());

    let page = render_page(Page::Playground, &flash_html, |mut html| {
        html = html.replace("{{DEMO_TITLE}}", demo.title());
        html = html.replace("{{DEMO_TABS}}", &demo_tabs_html(demo));
        html = html.replace("{{NETWORK_SVG}}", &render::network_svg(&network));
        html = html.replace("{{REGION_SVG}}", &render::region_svg(&network));
        html = html.replace("{{WEIGHTED_SUM}}", &pad(sum));
        html = html.replace("{{STEP_OUTPUT}}", &pad(heaviside(sum)));
        html = html.replace("{{NODE_FORMS}}", &node_forms_html(&network));
        html
    });
    html_response(page)
}

// ---------------------------------------------------------------------------
// POST /demo
// ---------------------------------------------------------------------------

pub fn handle_select(request: &mut Request, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let form = read_form(request);
    let demo = form.get("demo").and_then(|s| Demo::parse(s));

    let mut st = state.lock().unwrap();
    match demo {
        Some(demo) => {
            st.select_demo(demo);
            st.flash = Some(FlashMessage::success(format!(
                "Switched to the {} demo.",
                demo.title()
            )));
        }
        None => {
            st.flash = Some(FlashMessage::error("Unknown demo."));
        }
    }
    redirect("/playground")
}

// ---------------------------------------------------------------------------
// POST /node/set — direct numeric edit (the non-drag editing path)
// ---------------------------------------------------------------------------

pub fn handle_set_node(request: &mut Request, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let form = read_form(request);
    let node = form
        .get("kind")
        .zip(form_usize(&form, "index"))
        .and_then(|(kind, index)| NodeRef::parse(kind, index));
    let value = form_f64(&form, "value");

    let mut st = state.lock().unwrap();
    match (node, value) {
        (Some(NodeRef::Input(i)), Some(v)) if i < st.network.inputs.len() => {
            if st.network.inputs[i].editable {
                // Out-of-range values clamp silently; that is the edit contract.
                st.network.inputs[i].set_value(v);
            } else {
                st.flash = Some(FlashMessage::error("That input is fixed."));
            }
        }
        (Some(NodeRef::Weight(i)), Some(v)) if i < st.network.weights.len() => {
            if st.network.weights[i].editable {
                st.network.weights[i].set_value(v);
            } else {
                st.flash = Some(FlashMessage::error("That weight is fixed."));
            }
        }
        _ => {
            st.flash = Some(FlashMessage::error("Malformed node edit."));
        }
    }
    redirect("/playground")
}

// ---------------------------------------------------------------------------
// Shared HTML fragments
// ---------------------------------------------------------------------------

pub fn render_flash_html(flash: Option<&FlashMessage>) -> String {
    match flash {
        Some(f) => {
            let class = match f.kind {
                FlashKind::Success => "flash flash-success",
                FlashKind::Error => "flash flash-error",
            };
            format!("<div class=\"{class}\">{}</div>", render::html_escape(&f.text))
        }
        None => String::new(),
    }
}

fn demo_tabs_html(active: Demo) -> String {
    Demo::ALL
        .iter()
        .map(|d| {
            let class = if *d == active { "demo-tab active" } else { "demo-tab" };
            format!(
                "<form method=\"post\" action=\"/demo\" class=\"inline\">\
                 <input type=\"hidden\" name=\"demo\" value=\"{}\"/>\
                 <button class=\"{class}\">{}</button></form>",
                d.slug(),
                d.title(),
            )
        })
        .collect()
}

/// One small numeric form per editable node, as a fallback editing path for
/// browsers where dragging is awkward.
fn node_forms_html(network: &perceptron_lab::Network) -> String {
    let mut out = String::new();
    let rows = network
        .inputs
        .iter()
        .enumerate()
        .map(|(i, n)| ("input", i, n))
        .chain(network.weights.iter().enumerate().map(|(i, n)| ("weight", i, n)));
    for (kind, index, node) in rows {
        if !node.editable {
            continue;
        }
        let label = node
            .label
            .clone()
            .unwrap_or_else(|| format!("{kind} {index}"));
        out.push_str(&format!(
            "<form method=\"post\" action=\"/node/set\" class=\"node-form\">\
             <label>{} <input type=\"number\" step=\"0.1\" name=\"value\" value=\"{}\" \
             min=\"{}\" max=\"{}\"/></label>\
             <input type=\"hidden\" name=\"kind\" value=\"{kind}\"/>\
             <input type=\"hidden\" name=\"index\" value=\"{index}\"/>\
             <button>set</button></form>",
            render::html_escape(&label),
            pad(node.value),
            node.min_value,
            node.max_value,
        ));
    }
    out
}
