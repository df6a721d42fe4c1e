//! String conversions

use crate::datetime::DateTimeConverter;
use crate::json::JsonConverter;
use crate::value::Value;

/// Converts values to their canonical textual form
///
/// - booleans render `true` / `false`
/// - dates render RFC 3339 in UTC with a `Z` suffix
/// - durations render as whole milliseconds
/// - enums render their member name
/// - arrays render comma-joined element strings
/// - maps and objects render as JSON
#[derive(Debug, Clone, Copy)]
pub struct StringConverter;

impl StringConverter {
    /// Convert, or `None` for the absent value
    #[must_use]
    pub fn to_nullable_string(value: &Value) -> Option<String> {
        let text = match value {
            Value::Null => return None,
            Value::String(v) => v.clone(),
            Value::Boolean(v) => v.to_string(),
            Value::Integer(v) => v.to_string(),
            Value::Long(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::Double(v) => v.to_string(),
            Value::DateTime(v) => DateTimeConverter::to_iso_string(v),
            Value::Duration(v) => v.num_milliseconds().to_string(),
            Value::Enum(v) => v.name.clone(),
            Value::Array(items) => items
                .iter()
                .map(Self::to_string)
                .collect::<Vec<_>>()
                .join(","),
            Value::Map(_) | Value::Object(_) => return JsonConverter::to_json(value),
        };
        Some(text)
    }

    /// Convert, or an empty string for the absent value
    #[inline]
    #[must_use]
    pub fn to_string(value: &Value) -> String {
        Self::to_nullable_string(value).unwrap_or_default()
    }

    /// Convert, or `default` for the absent value
    #[inline]
    #[must_use]
    pub fn to_string_with_default(value: &Value, default: &str) -> String {
        Self::to_nullable_string(value).unwrap_or_else(|| default.to_string())
    }
}
