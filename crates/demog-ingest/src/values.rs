//! Polars `AnyValue` conversion helpers.

use polars::prelude::AnyValue;

/// Converts an `AnyValue` to `f64`, returning `None` for non-numeric or null values.
///
/// Handles integer types, floating-point types, and string parsing.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Parses a string as `f64`, returning `None` for invalid, empty, or non-finite strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Formats a number without trailing zeros after the decimal point.
///
/// # Examples
///
/// ```
/// use demog_ingest::format_numeric;
///
/// assert_eq!(format_numeric(2012.0), "2012");
/// assert_eq!(format_numeric(0.5), "0.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_f64_numeric() {
        assert_eq!(any_to_f64(AnyValue::Int64(10)), Some(10.0));
        assert_eq!(any_to_f64(AnyValue::Float64(0.25)), Some(0.25));
        assert_eq!(any_to_f64(AnyValue::UInt32(7)), Some(7.0));
    }

    #[test]
    fn test_any_to_f64_string_and_null() {
        assert_eq!(any_to_f64(AnyValue::String(" 12 ")), Some(12.0));
        assert_eq!(any_to_f64(AnyValue::String("")), None);
        assert_eq!(any_to_f64(AnyValue::Null), None);
        assert_eq!(any_to_f64(AnyValue::Boolean(true)), None);
    }

    #[test]
    fn test_parse_f64_rejects_non_finite() {
        assert_eq!(parse_f64("NaN"), None);
        assert_eq!(parse_f64("inf"), None);
        assert_eq!(parse_f64("-infinity"), None);
        assert_eq!(parse_f64("2.5"), Some(2.5));
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(10.0), "10");
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(format_numeric(100.0), "100");
    }
}
