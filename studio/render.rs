/// Page renderer and server-side SVG builders for the perceptron studio.
///
/// The studio uses a single HTML template (`studio/assets/studio.html`) with
/// placeholder tokens like `{{TOKEN}}`. The template is loaded at compile
/// time; `render_page` substitutes the global tokens, lets the caller fill
/// page-specific ones, and blanks anything left over so raw `{{TOKEN}}`
/// strings never reach the browser.
///
/// All diagram geometry lives here: the network SVG reproduces the 400×200
/// layout of the original visualization (inputs on the left, one output
/// node, cubic Bezier connection paths with the weight node sitting at
/// t = 0.4 and its label at t = 0.15).

use perceptron_lab::format::pad;
use perceptron_lab::plot::region::{sample_region, step_curve};
use perceptron_lab::{bezier_point, heaviside, Network, Point};

const TEMPLATE: &str = include_str!("assets/studio.html");

/// Which page is active — controls the nav highlight.
#[derive(Clone, Copy, PartialEq)]
pub enum Page {
    Playground,
    Train,
}

/// Renders the full studio page.
///
/// # Arguments
/// - `page`  — active nav entry
/// - `flash` — pre-rendered flash banner HTML (may be empty)
/// - `fill`  — closure that fills page-specific placeholders
pub fn render_page<F>(page: Page, flash: &str, fill: F) -> String
where
    F: FnOnce(String) -> String,
{
    let mut html = TEMPLATE.to_owned();

    html = html.replace("{{FLASH}}", flash);
    html = html.replace(
        "{{NAV_PLAYGROUND}}",
        if page == Page::Playground { "active" } else { "" },
    );
    html = html.replace("{{NAV_TRAIN}}", if page == Page::Train { "active" } else { "" });
    html = html.replace(
        "{{PLAYGROUND_DISPLAY}}",
        if page == Page::Playground { "block" } else { "none" },
    );
    html = html.replace("{{TRAIN_DISPLAY}}", if page == Page::Train { "block" } else { "none" });

    html = fill(html);

    blank_remaining(html)
}

/// Replaces any `{{UPPERCASE_TOKEN}}` that wasn't already substituted with
/// an empty string. A missed token should produce a clean page rather than
/// leaking template internals.
fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        if let Some(end) = html[start..].find("}}") {
            html.replace_range(start..start + end + 2, "");
        } else {
            break;
        }
    }
    html
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ---------------------------------------------------------------------------
// Diagram geometry
// ---------------------------------------------------------------------------

pub const DIAGRAM_WIDTH: f64 = 400.0;
pub const DIAGRAM_HEIGHT: f64 = 200.0;
/// Horizontal offset of the Bezier control points from each endpoint.
const CONTROL_OFFSET: f64 = 100.0;
/// Weight nodes sit at this fraction along each connection path.
const WEIGHT_T: f64 = 0.4;
/// Weight labels sit near the path's start.
const LABEL_T: f64 = 0.15;

/// Node radius for a column of `count` circles: a quarter of each circle's
/// vertical slot, capped at 20 SVG units.
pub fn node_radius(count: usize) -> f64 {
    (DIAGRAM_HEIGHT / (count + 1) as f64 / 2.0 * 0.5).min(20.0)
}

fn input_position(network: &Network, index: usize) -> Point {
    [
        50.0,
        DIAGRAM_HEIGHT / (network.inputs.len() + 1) as f64 * (index + 1) as f64,
    ]
}

fn output_position(network: &Network, index: usize) -> Point {
    [
        DIAGRAM_WIDTH - 190.0,
        DIAGRAM_HEIGHT / (network.outputs.len() + 1) as f64 * (index + 1) as f64,
    ]
}

/// The four control points of the connection path from input `index` to the
/// first output.
fn path_controls(network: &Network, index: usize) -> [Point; 4] {
    let from = input_position(network, index);
    let to = output_position(network, 0);
    [
        from,
        [from[0] + CONTROL_OFFSET, from[1]],
        [to[0] - CONTROL_OFFSET, to[1]],
        to,
    ]
}

fn node_circle(
    kind: &str,
    index: usize,
    center: Point,
    r: f64,
    value: f64,
    editable: bool,
    label: Option<&str>,
    class: &str,
) -> String {
    let font = r * 0.9;
    let cursor = if editable { "ew-resize" } else { "not-allowed" };
    let edit_attr = if editable { " data-editable=\"1\"" } else { "" };
    let mut svg = format!(
        "<g transform=\"translate({:.2},{:.2})\">\
         <circle class=\"node {class}\" data-kind=\"{kind}\" data-index=\"{index}\"{edit_attr} \
         r=\"{r:.2}\" style=\"cursor:{cursor}\"/>\
         <text y=\"{:.2}\" font-size=\"{font:.2}\" text-anchor=\"middle\" class=\"node-text {class}\">{}</text>",
        center[0],
        center[1],
        font * 0.4,
        pad(value),
    );
    if let Some(label) = label {
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{font:.2}\" text-anchor=\"end\" class=\"node-label\">{}</text>",
            -font * 2.0 + 5.0,
            font * 0.4,
            html_escape(label),
        ));
    }
    svg.push_str("</g>");
    svg
}

/// Builds the network diagram SVG body: connection paths, input nodes,
/// weight nodes placed along the paths, the weighted-sum node, the step
/// panel, and the final activated output.
pub fn network_svg(network: &Network) -> String {
    let r = node_radius(network.inputs.len());
    let sum = network.weighted_sum();
    let mut svg = format!(
        "<svg viewBox=\"0 0 {DIAGRAM_WIDTH} {DIAGRAM_HEIGHT}\" id=\"diagram\">\
         <rect width=\"{DIAGRAM_WIDTH}\" height=\"{DIAGRAM_HEIGHT}\" fill=\"rgba(0,0,0,0.02)\"/>"
    );

    for index in 0..network.inputs.len() {
        let [p0, p1, p2, p3] = path_controls(network, index);
        svg.push_str(&format!(
            "<path d=\"M {:.2} {:.2} C {:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}\" class=\"wire\" fill=\"transparent\"/>",
            p0[0], p0[1], p1[0], p1[1], p2[0], p2[1], p3[0], p3[1],
        ));
    }

    for (index, input) in network.inputs.iter().enumerate() {
        svg.push_str(&node_circle(
            "input",
            index,
            input_position(network, index),
            r,
            input.value,
            input.editable,
            input.label.as_deref(),
            "input-node",
        ));
    }

    for (index, weight) in network.weights.iter().enumerate() {
        let [p0, p1, p2, p3] = path_controls(network, index);
        let center = bezier_point(p0, p1, p2, p3, WEIGHT_T);
        let label_at = bezier_point(p0, p1, p2, p3, LABEL_T);
        if let Some(label) = &weight.label {
            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"7\" text-anchor=\"middle\" class=\"node-label\">{}</text>",
                label_at[0],
                label_at[1] - 4.0,
                html_escape(label),
            ));
        }
        svg.push_str(&node_circle(
            "weight",
            index,
            center,
            r,
            weight.value,
            weight.editable,
            None,
            "weight-node",
        ));
    }

    // Weighted-sum node.
    let out = output_position(network, 0);
    svg.push_str(&format!(
        "<g transform=\"translate({:.2},{:.2})\">\
         <circle r=\"{:.2}\" class=\"output-node\"/>\
         <text y=\"4.8\" font-size=\"12\" text-anchor=\"middle\" class=\"output-text\">{}</text></g>",
        out[0],
        out[1],
        node_radius(network.outputs.len()) * 0.8,
        pad(sum),
    ));

    // Step-activation panel and the activated output.
    svg.push_str(&format!(
        "<g transform=\"translate(250,63)\">{}</g>",
        activation_panel(sum, 75.0)
    ));
    svg.push_str(&format!(
        "<g transform=\"translate(360,{:.2})\">\
         <circle r=\"{:.2}\" class=\"output-node\"/>\
         <text y=\"6.0\" font-size=\"15\" text-anchor=\"middle\" class=\"output-text\">{}</text></g>",
        DIAGRAM_HEIGHT / 2.0,
        node_radius(network.outputs.len()) * 0.8,
        pad(heaviside(sum)),
    ));

    svg.push_str("</svg>");
    svg
}

/// Small inset plot of the step function with the current sum marked.
fn activation_panel(sum: f64, size: f64) -> String {
    let (min, max) = (-3.0, 3.0);
    let to_x = |x: f64| (x - min) / (max - min) * size;
    let to_y = |y: f64| size - y * (size - 10.0) - 5.0;

    let points: String = step_curve(min, max, 121)
        .iter()
        .map(|p| format!("{:.2},{:.2} ", to_x(p[0]), to_y(p[1])))
        .collect();

    let marker_x = to_x(sum.clamp(min, max));
    let marker_y = to_y(heaviside(sum));
    format!(
        "<rect width=\"{size}\" height=\"{size}\" class=\"panel\"/>\
         <polyline points=\"{points}\" class=\"step-line\" fill=\"none\"/>\
         <circle cx=\"{marker_x:.2}\" cy=\"{marker_y:.2}\" r=\"3\" class=\"step-marker\"/>",
    )
}

/// The decision-region plot: an 11×11 (or 11-point) grid sweep colored by
/// class, with crosshairs at the network's current input point. Recomputed
/// on every render from the live network — no cached plot state.
pub fn region_svg(network: &Network) -> String {
    let size = 160.0;
    let points = sample_region(network, 0, 1);

    let (ax_min, ax_max) = (network.inputs[0].min_value, network.inputs[0].max_value);
    let two_free = network.free_input_count() > 1;
    let (ay_min, ay_max) = if two_free {
        (network.inputs[1].min_value, network.inputs[1].max_value)
    } else {
        (0.0, 1.0)
    };

    let to_x = |x: f64| (x - ax_min) / (ax_max - ax_min) * size;
    let to_y = |y: f64| size - (y - ay_min) / (ay_max - ay_min) * size;

    let mut svg = format!(
        "<svg viewBox=\"-24 -6 {} {}\" id=\"region\">\
         <rect width=\"{size}\" height=\"{size}\" class=\"panel\"/>",
        size + 36.0,
        size + 24.0,
    );

    for p in &points {
        let class = if p.label == 1.0 { "class-one" } else { "class-zero" };
        svg.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"2\" class=\"{class}\"/>",
            to_x(p.x),
            to_y(p.y),
        ));
    }

    // Crosshairs at the current input point.
    let cx = network.inputs[0].value;
    let cy = if two_free { network.inputs[1].value } else { 0.5 };
    svg.push_str(&format!(
        "<line x1=\"{x:.2}\" y1=\"0\" x2=\"{x:.2}\" y2=\"{size}\" class=\"crosshair\"/>\
         <line x1=\"0\" y1=\"{y:.2}\" x2=\"{size}\" y2=\"{y:.2}\" class=\"crosshair\"/>\
         <circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"2.5\" fill=\"transparent\" class=\"crosshair\"/>",
        x = to_x(cx),
        y = to_y(cy),
    ));

    // Axis labels.
    if let Some(label) = &network.inputs[0].label {
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"8\" text-anchor=\"middle\" class=\"axis-label\">{}</text>",
            size / 2.0,
            size + 14.0,
            html_escape(label),
        ));
    }
    if two_free {
        if let Some(label) = &network.inputs[1].label {
            svg.push_str(&format!(
                "<text transform=\"translate(-14,{:.2}) rotate(-90)\" font-size=\"8\" text-anchor=\"middle\" class=\"axis-label\">{}</text>",
                size / 2.0,
                html_escape(label),
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}
