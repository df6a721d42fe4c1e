//! Map conversions
//!
//! Maps pass through, objects expose their visible properties and arrays
//! become maps keyed by decimal index.

use crate::value::{Value, ValueMap};

/// Converts values to string-keyed maps
#[derive(Debug, Clone, Copy)]
pub struct MapConverter;

impl MapConverter {
    /// Convert, or `None` when not convertible
    #[must_use]
    pub fn to_nullable_map(value: &Value) -> Option<ValueMap> {
        match value {
            Value::Map(map) => Some(map.clone()),
            Value::Object(obj) => Some(obj.properties()),
            Value::Array(items) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| (index.to_string(), item.clone()))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Convert, or an empty map when not convertible
    #[inline]
    #[must_use]
    pub fn to_map(value: &Value) -> ValueMap {
        Self::to_nullable_map(value).unwrap_or_default()
    }

    /// Convert, or `default` when not convertible
    #[inline]
    #[must_use]
    pub fn to_map_with_default(value: &Value, default: ValueMap) -> ValueMap {
        Self::to_nullable_map(value).unwrap_or(default)
    }
}

/// Converts values to maps, recursively converting every nested value
///
/// Nested objects become maps and nested arrays keep their shape with
/// converted elements. An object that refers back to one of its ancestors is
/// replaced by `Null`.
#[derive(Debug, Clone, Copy)]
pub struct RecursiveMapConverter;

impl RecursiveMapConverter {
    /// Convert, or `None` when not convertible
    #[must_use]
    pub fn to_nullable_map(value: &Value) -> Option<ValueMap> {
        let mut visited = Vec::new();
        match value {
            Value::Object(obj) => {
                visited.push(obj.id());
                Some(Self::convert_map(&obj.properties(), &mut visited))
            }
            other => MapConverter::to_nullable_map(other).map(|map| Self::convert_map(&map, &mut visited)),
        }
    }

    /// Convert, or an empty map when not convertible
    #[inline]
    #[must_use]
    pub fn to_map(value: &Value) -> ValueMap {
        Self::to_nullable_map(value).unwrap_or_default()
    }

    /// Convert, or `default` when not convertible
    #[inline]
    #[must_use]
    pub fn to_map_with_default(value: &Value, default: ValueMap) -> ValueMap {
        Self::to_nullable_map(value).unwrap_or(default)
    }

    fn convert_map(map: &ValueMap, visited: &mut Vec<usize>) -> ValueMap {
        map.iter()
            .map(|(key, value)| (key.clone(), Self::convert_value(value, visited)))
            .collect()
    }

    fn convert_value(value: &Value, visited: &mut Vec<usize>) -> Value {
        match value {
            Value::Map(map) => Value::Map(Self::convert_map(map, visited)),
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| Self::convert_value(item, visited))
                    .collect(),
            ),
            Value::Object(obj) => {
                let id = obj.id();
                if visited.contains(&id) {
                    return Value::Null;
                }
                visited.push(id);
                let converted = Value::Map(Self::convert_map(&obj.properties(), visited));
                visited.pop();
                converted
            }
            other => other.clone(),
        }
    }
}
