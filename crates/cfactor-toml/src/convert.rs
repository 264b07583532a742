//! Conversion between value tokens and typed [`Value`]s.
//!
//! Tokens are the trimmed right-hand side of a `key = value` line. Scalars may
//! be wrapped in one pair of double quotes; arrays are `[v1,v2,...]` with no
//! nesting. Formatting is the inverse: strings and timestamps come back quoted,
//! numbers and bools bare.

use crate::error::{ConfigError, Result};
use crate::time::{format_timestamp, is_zero_timestamp, parse_timestamp, TimeFormat, TimePattern};
use crate::types::{FieldType, ScalarType, Value};

/// Strip one pair of surrounding double quotes, if present.
pub fn strip_quotes(token: &str) -> &str {
    token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(token)
}

/// A token is an array literal when it is at least two characters long and
/// starts with `[` and ends with `]`.
pub fn is_array_literal(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('[') && token.ends_with(']')
}

/// Split an array literal into its raw element tokens.
///
/// Returns an empty list for `[]` and for anything that is not an array
/// literal at all.
pub fn parse_array_literal(token: &str) -> Vec<&str> {
    if !is_array_literal(token) {
        return Vec::new();
    }
    let inner = token[1..token.len() - 1].trim();
    if inner.is_empty() {
        return Vec::new();
    }
    inner.split(',').map(str::trim).collect()
}

pub fn parse_scalar(token: &str, ty: ScalarType, patterns: &[TimePattern]) -> Result<Value> {
    let raw = strip_quotes(token.trim());
    match ty {
        ScalarType::String => Ok(Value::String(raw.to_string())),
        ScalarType::Int => raw
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|e| ConfigError::format(raw, ty, e)),
        ScalarType::Float32 => raw
            .parse::<f32>()
            .map(Value::Float32)
            .map_err(|e| ConfigError::format(raw, ty, e)),
        ScalarType::Float64 => raw
            .parse::<f64>()
            .map(Value::Float64)
            .map_err(|e| ConfigError::format(raw, ty, e)),
        // case-sensitive: only `true` / `false`
        ScalarType::Bool => raw
            .parse::<bool>()
            .map(Value::Bool)
            .map_err(|e| ConfigError::format(raw, ty, e)),
        ScalarType::Timestamp => parse_timestamp(raw, patterns).map(Value::Timestamp),
    }
}

/// Parse a token against a field type. Array fields given a non-array token
/// become empty arrays.
pub fn parse_field(token: &str, ty: &FieldType, patterns: &[TimePattern]) -> Result<Value> {
    match ty {
        FieldType::Scalar(scalar) => parse_scalar(token, *scalar, patterns),
        FieldType::Array(element) => parse_array_literal(token)
            .into_iter()
            .map(|item| parse_scalar(item, *element, patterns))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        FieldType::Nested(_) => Err(ConfigError::TypeMismatch {
            field: token.to_string(),
            expected: *ty,
        }),
    }
}

pub fn format_scalar(value: &Value, ty: ScalarType, time_format: &TimeFormat) -> Result<String> {
    let token = match (value, ty) {
        (Value::String(s), ScalarType::String) => s.clone(),
        (Value::Int(i), ScalarType::Int) => i.to_string(),
        (Value::Float32(f), ScalarType::Float32) => f.to_string(),
        (Value::Float64(f), ScalarType::Float64) => f.to_string(),
        (Value::Bool(b), ScalarType::Bool) => b.to_string(),
        (Value::Timestamp(t), ScalarType::Timestamp) => format_timestamp(t, time_format)?,
        _ => {
            return Err(ConfigError::format(
                &format!("{value:?}"),
                ty,
                "value does not match the declared type",
            ))
        }
    };
    if ty.is_quoted() {
        Ok(format!("\"{token}\""))
    } else {
        Ok(token)
    }
}

pub fn format_array_literal(
    values: &[Value],
    element: ScalarType,
    time_format: &TimeFormat,
) -> Result<String> {
    let items = values
        .iter()
        .map(|value| format_scalar(value, element, time_format))
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("[{}]", items.join(",")))
}

/// Render a value for a non-nested field type.
pub fn format_field(value: &Value, ty: &FieldType, time_format: &TimeFormat) -> Result<String> {
    match (value, ty) {
        (Value::Array(items), FieldType::Array(element)) => {
            format_array_literal(items, *element, time_format)
        }
        (_, FieldType::Scalar(scalar)) => format_scalar(value, *scalar, time_format),
        _ => Err(ConfigError::TypeMismatch {
            field: format!("{value:?}"),
            expected: *ty,
        }),
    }
}

/// Whether the encoder should leave this value out.
///
/// Strings and arrays are empty when zero-length and timestamps when they
/// equal the epoch sentinel. Numbers and bools are never empty: zero and
/// `false` are real values.
pub fn is_empty_or_default(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Timestamp(t) => is_zero_timestamp(t),
        Value::Int(_) | Value::Float32(_) | Value::Float64(_) | Value::Bool(_) => false,
    }
}
