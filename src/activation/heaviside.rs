/// The step activation: `1.0` for `x >= 0`, `0.0` otherwise.
///
/// This is the single canonical form used everywhere — the output node, the
/// decision-region sampler, and the trainer all share it, so exactly-zero
/// sums classify as 1 uniformly.
///
/// `NaN >= 0.0` is false under IEEE comparison, so a NaN input yields `0.0`;
/// callers never produce NaN through the clamped edit paths, but the function
/// stays total rather than asserting.
pub fn heaviside(x: f64) -> f64 {
    if x >= 0.0 {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_maps_to_zero() {
        assert_eq!(heaviside(-1e-12), 0.0);
        assert_eq!(heaviside(-100.0), 0.0);
        assert_eq!(heaviside(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn zero_and_positive_map_to_one() {
        assert_eq!(heaviside(0.0), 1.0);
        assert_eq!(heaviside(1e-12), 1.0);
        assert_eq!(heaviside(f64::INFINITY), 1.0);
    }

    #[test]
    fn nan_maps_to_zero() {
        assert_eq!(heaviside(f64::NAN), 0.0);
    }
}
