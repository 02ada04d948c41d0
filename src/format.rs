//! Small display helpers shared by the studio renderer and the demos.

/// Rounds to two decimal places (for numeric display comparisons).
pub fn round2(a: f64) -> f64 {
    (a * 100.0).round() / 100.0
}

/// Fixed two-decimal string, the node-circle display format.
pub fn pad(number: f64) -> String {
    format!("{number:.2}")
}

/// Renders a non-negative integer as Unicode subscript digits, for labels
/// like x₁ and w₂.
pub fn subscript(i: usize) -> String {
    i.to_string()
        .chars()
        .filter_map(|digit| {
            let d = digit.to_digit(10)?;
            char::from_u32(0x2080 + d)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_half_up() {
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(1.2345), 1.23);
    }

    #[test]
    fn pad_always_two_decimals() {
        assert_eq!(pad(1.0), "1.00");
        assert_eq!(pad(-0.125), "-0.12");
    }

    #[test]
    fn subscript_multi_digit() {
        assert_eq!(subscript(12), "₁₂");
        assert_eq!(subscript(0), "₀");
    }
}
