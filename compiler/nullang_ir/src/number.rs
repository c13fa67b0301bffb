//! Canonical text form of Nullang numbers.

/// Largest magnitude printed in integer form. Past 2^53 not every integer is
/// representable, so larger values fall back to float formatting.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Format a number the way the language displays it.
///
/// Integral values print without a fractional part (`7`, `-3`); everything
/// else uses Rust's shortest round-trip form (`0.5`, `inf`, `NaN`).
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "magnitude is bounded by MAX_EXACT_INTEGER"
        )]
        let int = n as i64;
        // Keeps `-0` printing as `0`.
        return int.to_string();
    }
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn integral_values_drop_fraction() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn fractions_and_specials() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(1e300), 1e300.to_string());
    }
}
