//! Number formatting for issues, corrections, and solution steps.

/// Format a value as an integer when it is one, otherwise with up to six
/// decimals and trailing zeros trimmed.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if is_integral(value) && value.abs() < 1e15 {
        let rounded = value.round() as i64;
        return rounded.to_string();
    }
    let fixed = format!("{value:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn is_integral(value: f64) -> bool {
    value.is_finite() && (value - value.round()).abs() < 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_render_without_decimals() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn fractions_trim_trailing_zeros() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(10.0 / 3.0), "3.333333");
    }
}
