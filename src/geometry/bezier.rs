/// A 2-D point in SVG user units, `[x, y]`.
pub type Point = [f64; 2];

/// Linear interpolation between two points at parameter `t`.
pub fn lerp(start: Point, end: Point, t: f64) -> Point {
    [
        start[0] * (1.0 - t) + end[0] * t,
        start[1] * (1.0 - t) + end[1] * t,
    ]
}

/// Evaluates a cubic Bezier curve at parameter `t` using De Casteljau's
/// algorithm (three nested rounds of linear interpolation).
///
/// `t` is normally in `[0, 1]` but values outside that range extrapolate the
/// curve rather than panicking — callers place connection-path decorations
/// (weight nodes at `t = 0.4`, text labels at `t = 0.15`) and occasionally
/// overshoot during layout experiments.
pub fn bezier_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let q0 = lerp(p0, p1, t);
    let q1 = lerp(p1, p2, t);
    let q2 = lerp(p2, p3, t);

    let r0 = lerp(q0, q1, t);
    let r1 = lerp(q1, q2, t);

    lerp(r0, r1, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: Point = [0.0, 0.0];
    const P1: Point = [50.0, 100.0];
    const P2: Point = [150.0, 100.0];
    const P3: Point = [200.0, 0.0];

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(bezier_point(P0, P1, P2, P3, 0.0), P0);
        assert_eq!(bezier_point(P0, P1, P2, P3, 1.0), P3);
    }

    #[test]
    fn midpoint_of_symmetric_curve_is_centered() {
        let m = bezier_point(P0, P1, P2, P3, 0.5);
        assert!((m[0] - 100.0).abs() < 1e-12);
        assert!((m[1] - 75.0).abs() < 1e-12);
    }

    #[test]
    fn t_outside_unit_interval_extrapolates() {
        // Must not panic; past t=1 the curve leaves the hull through p3.
        let beyond = bezier_point(P0, P1, P2, P3, 1.5);
        assert!(beyond[0] > P3[0]);
    }

    #[test]
    fn lerp_halfway() {
        assert_eq!(lerp([0.0, 0.0], [10.0, -4.0], 0.5), [5.0, -2.0]);
    }
}
