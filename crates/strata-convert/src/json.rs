//! JSON conversions
//!
//! Emits canonical JSON through `serde_json`. Dates are rendered
//! `YYYY-MM-DDTHH:MM:SS.sssZ` after normalizing to UTC.

use crate::map::RecursiveMapConverter;
use crate::value::{Value, ValueMap};
use serde_json::Value as JsonValue;

/// Converts between [`Value`] and JSON text
#[derive(Debug, Clone, Copy)]
pub struct JsonConverter;

impl JsonConverter {
    /// Render as JSON, or `None` for the absent value
    ///
    /// # Examples
    /// ```
    /// # use strata_convert::{JsonConverter, Value};
    /// let value = Value::from(vec![Value::from(1), Value::from("a")]);
    /// assert_eq!(JsonConverter::to_json(&value).as_deref(), Some(r#"[1,"a"]"#));
    /// assert_eq!(JsonConverter::to_json(&Value::Null), None);
    /// ```
    #[must_use]
    pub fn to_json(value: &Value) -> Option<String> {
        if value.is_null() {
            return None;
        }
        serde_json::to_string(value).ok()
    }

    /// Parse JSON text, or `None` when the text is not valid JSON
    #[must_use]
    pub fn from_json(json: &str) -> Option<Value> {
        match serde_json::from_str::<JsonValue>(json) {
            Ok(parsed) => Some(Value::from(parsed)),
            Err(err) => {
                tracing::trace!("rejected JSON input: {}", err);
                None
            }
        }
    }

    /// Parse JSON text into a recursively converted map
    #[must_use]
    pub fn to_nullable_map(json: &str) -> Option<ValueMap> {
        Self::from_json(json).and_then(|value| RecursiveMapConverter::to_nullable_map(&value))
    }

    /// Parse JSON text into a map, or an empty map
    #[inline]
    #[must_use]
    pub fn to_map(json: &str) -> ValueMap {
        Self::to_nullable_map(json).unwrap_or_default()
    }

    /// Parse JSON text into a map, or `default`
    #[inline]
    #[must_use]
    pub fn to_map_with_default(json: &str, default: ValueMap) -> ValueMap {
        Self::to_nullable_map(json).unwrap_or(default)
    }
}
