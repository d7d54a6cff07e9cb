//! Polars AnyValue utility functions.
//!
//! Cell values reach the pipeline as whatever type the loader inferred, so
//! every read goes through these conversions.

use polars::prelude::AnyValue;

/// Converts a Polars AnyValue to a String representation.
/// Returns empty string for Null, properly formats numeric types.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Converts AnyValue to String, returning None if the result is empty.
pub fn any_to_string_non_empty(value: AnyValue<'_>) -> Option<String> {
    let s = any_to_string(value);
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Converts an AnyValue to f64.
///
/// Returns `Ok(None)` for nulls and blank strings, `Err` with the rendered
/// value when a non-blank value is not numeric.
pub fn any_to_f64(value: AnyValue<'_>) -> Result<Option<f64>, String> {
    match value {
        AnyValue::Null => Ok(None),
        AnyValue::Int8(v) => Ok(Some(f64::from(v))),
        AnyValue::Int16(v) => Ok(Some(f64::from(v))),
        AnyValue::Int32(v) => Ok(Some(f64::from(v))),
        AnyValue::Int64(v) => Ok(Some(v as f64)),
        AnyValue::UInt8(v) => Ok(Some(f64::from(v))),
        AnyValue::UInt16(v) => Ok(Some(f64::from(v))),
        AnyValue::UInt32(v) => Ok(Some(f64::from(v))),
        AnyValue::UInt64(v) => Ok(Some(v as f64)),
        AnyValue::Float32(v) => Ok(Some(f64::from(v))),
        AnyValue::Float64(v) => Ok(Some(v)),
        AnyValue::String(s) => parse_numeric_text(s),
        AnyValue::StringOwned(s) => parse_numeric_text(&s),
        other => Err(other.to_string()),
    }
}

fn parse_numeric_text(value: &str) -> Result<Option<f64>, String> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_f64(value).map(Some).ok_or_else(|| value.to_string())
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}
