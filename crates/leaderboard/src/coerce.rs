//! Lenient conversions for numbers and text that cross the API boundary as
//! strings. Anything that does not parse becomes zero (or the empty string)
//! instead of an error.

/// Parse an integer, accepting a float and truncating it. Unparseable text is `0`.
pub fn int(text: &str) -> i32 {
    let text = text.trim();

    text.parse::<i32>()
        .ok()
        .or_else(|| {
            text.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(|value| value.trunc().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
        })
        .unwrap_or(0)
}

/// Parse a finite float. Unparseable or non-finite text is `0.0`.
pub fn float(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Parse a row id. Ids are positive, so a coerced `0` (or anything below)
/// means there is no usable id.
pub fn id(text: &str) -> Option<i32> {
    Some(int(text)).filter(|id| *id > 0)
}

pub fn text(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// Clamp a stored count into an unsigned limit.
pub fn count(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use approx::assert_ulps_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("42", 42 ; "plain integer")]
    #[test_case(" 7 ", 7 ; "surrounding whitespace")]
    #[test_case("3.9", 3 ; "float is truncated")]
    #[test_case("-2", -2 ; "negative")]
    #[test_case("abc", 0 ; "garbage")]
    #[test_case("", 0 ; "empty")]
    #[test_case("NaN", 0 ; "not a number")]
    fn int_coercion(input: &str, expected: i32) {
        assert_eq!(int(input), expected);
    }

    #[test_case("12.5", 12.5 ; "decimal")]
    #[test_case("4", 4.0 ; "integer")]
    #[test_case("kg", 0.0 ; "garbage")]
    #[test_case("inf", 0.0 ; "infinity")]
    fn float_coercion(input: &str, expected: f64) {
        assert_ulps_eq!(float(input), expected);
    }

    #[test_case("15", Some(15) ; "valid id")]
    #[test_case("0", None ; "zero")]
    #[test_case("-3", None ; "negative")]
    #[test_case("x1", None ; "garbage")]
    fn id_coercion(input: &str, expected: Option<i32>) {
        assert_eq!(id(input), expected);
    }

    #[test]
    fn missing_text_is_empty() {
        assert_eq!(text(None), "");
        assert_eq!(text(Some("Marlin".to_string())), "Marlin");
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        assert_eq!(count(-1), 0);
        assert_eq!(count(3), 3);
    }
}
