use serde::{Serialize, Deserialize};

use crate::activation::heaviside::heaviside;
use crate::geometry::bezier::Point;
use crate::network::network::Network;
use crate::network::node::Node;

/// Inclusive grid steps per axis; the plot samples `RESOLUTION + 1` values
/// along each free input. Small and fixed, so the full grid is a cheap
/// 121-point brute-force sweep per render.
pub const RESOLUTION: usize = 10;

/// One sampled cell of the decision-region plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionPoint {
    pub x: f64,
    pub y: f64,
    /// Step-activation class at this cell, 0.0 or 1.0.
    pub label: f64,
}

fn grid_value(node: &Node, step: usize) -> f64 {
    node.min_value + step as f64 / RESOLUTION as f64 * (node.max_value - node.min_value)
}

/// Sweeps the network's classification over a 2-D slice of input space.
///
/// `axis_a` and `axis_b` are input indices (conventionally 0 and 1); each
/// axis covers its node's own `[min_value, max_value]` domain. With two or
/// more free inputs the result is the full `(RESOLUTION+1)²` grid in
/// row-major order (outer loop over axis A, inner over axis B). With a
/// single free input only axis A is swept — 11 points with `y` pinned to the
/// domain midpoint 0.5 so the plot still has a line to draw.
///
/// Operates on a working copy; the caller's network is never mutated. Pure
/// function of the network and axis choice, so sample order is stable.
pub fn sample_region(network: &Network, axis_a: usize, axis_b: usize) -> Vec<RegionPoint> {
    let mut work = network.clone();
    let mut points = Vec::with_capacity((RESOLUTION + 1) * (RESOLUTION + 1));

    if network.free_input_count() <= 1 {
        for i in 0..=RESOLUTION {
            let x = grid_value(&work.inputs[axis_a], i);
            work.inputs[axis_a].value = x;
            let label = heaviside(work.weighted_sum());
            points.push(RegionPoint { x, y: 0.5, label });
        }
    } else {
        for i in 0..=RESOLUTION {
            let x = grid_value(&work.inputs[axis_a], i);
            for j in 0..=RESOLUTION {
                let y = grid_value(&work.inputs[axis_b], j);
                work.inputs[axis_a].value = x;
                work.inputs[axis_b].value = y;
                let label = heaviside(work.weighted_sum());
                points.push(RegionPoint { x, y, label });
            }
        }
    }

    points
}

/// Dense sampling of the step activation over `[min, max]` for the
/// activation-function panel. The jump at zero shows up as two samples with
/// the same x only if zero lands exactly on the grid; the panel draws the
/// samples as points, so no special casing is needed.
pub fn step_curve(min: f64, max: f64, samples: usize) -> Vec<Point> {
    assert!(samples >= 2, "need at least the two endpoints");
    (0..samples)
        .map(|i| {
            let x = min + i as f64 / (samples - 1) as f64 * (max - min);
            [x, heaviside(x)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::presets;

    #[test]
    fn two_free_inputs_give_121_points() {
        let net = presets::and_gate();
        assert_eq!(sample_region(&net, 0, 1).len(), 121);
    }

    #[test]
    fn one_free_input_gives_11_points() {
        let net = presets::not_gate();
        let points = sample_region(&net, 0, 1);
        assert_eq!(points.len(), 11);
        assert!(points.iter().all(|p| p.y == 0.5));
    }

    #[test]
    fn caller_network_is_untouched() {
        let net = presets::or_gate();
        let before = net.clone();
        let _ = sample_region(&net, 0, 1);
        assert_eq!(net, before);
    }

    #[test]
    fn order_is_row_major_over_axis_a() {
        let net = presets::and_gate();
        let points = sample_region(&net, 0, 1);
        // First 11 samples all sit at the axis-A minimum while axis B sweeps.
        for p in &points[..11] {
            assert_eq!(p.x, 0.0);
        }
        assert_eq!(points[0].y, 0.0);
        assert_eq!(points[10].y, 1.0);
        assert_eq!(points[11].x, 0.1);
    }

    #[test]
    fn and_region_classifies_the_corners() {
        let net = presets::and_gate();
        let points = sample_region(&net, 0, 1);
        let corner = |x: f64, y: f64| {
            points
                .iter()
                .find(|p| (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9)
                .unwrap()
                .label
        };
        assert_eq!(corner(1.0, 1.0), 1.0);
        assert_eq!(corner(0.0, 0.0), 0.0);
        assert_eq!(corner(1.0, 0.0), 0.0);
    }

    #[test]
    fn step_curve_jumps_at_zero() {
        let curve = step_curve(-1.0, 1.0, 5);
        assert_eq!(curve[0], [-1.0, 0.0]);
        assert_eq!(curve[2], [0.0, 1.0]);
        assert_eq!(curve[4], [1.0, 1.0]);
    }
}
