//! Uniform property reading over maps, arrays and objects
//!
//! Maps expose their keys (matched case-insensitively), arrays expose
//! decimal indices and objects expose their visible properties. Every other
//! value has no properties.

use crate::property_reflector::PropertyReflector;
use strata_convert::{Value, ValueMap};

/// Reads properties from any [`Value`]
#[derive(Debug, Clone, Copy)]
pub struct ObjectReader;

impl ObjectReader {
    /// The value itself, as a detached copy
    #[inline]
    #[must_use]
    pub fn get_value(obj: &Value) -> Value {
        obj.clone()
    }

    /// Check whether a property exists
    #[must_use]
    pub fn has_property(obj: &Value, name: &str) -> bool {
        match obj {
            Value::Map(map) => find_key(map, name).is_some(),
            Value::Array(items) => parse_index(name).is_some_and(|index| index < items.len()),
            Value::Object(object) => PropertyReflector::has_property(object, name),
            _ => false,
        }
    }

    /// Read a property, or `None` when it does not exist
    #[must_use]
    pub fn get_property(obj: &Value, name: &str) -> Option<Value> {
        match obj {
            Value::Map(map) => find_key(map, name).and_then(|key| map.get(key)).cloned(),
            Value::Array(items) => parse_index(name).and_then(|index| items.get(index)).cloned(),
            Value::Object(object) => PropertyReflector::get_property(object, name),
            _ => None,
        }
    }

    /// Names of all properties
    #[must_use]
    pub fn get_property_names(obj: &Value) -> Vec<String> {
        match obj {
            Value::Map(map) => map.keys().cloned().collect(),
            Value::Array(items) => (0..items.len()).map(|index| index.to_string()).collect(),
            Value::Object(object) => PropertyReflector::get_property_names(object),
            _ => Vec::new(),
        }
    }

    /// All properties with their values
    #[must_use]
    pub fn get_properties(obj: &Value) -> ValueMap {
        match obj {
            Value::Map(map) => map.clone(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item.clone()))
                .collect(),
            Value::Object(object) => PropertyReflector::get_properties(object),
            _ => ValueMap::new(),
        }
    }
}

/// First key equal to `name` ignoring case
pub(crate) fn find_key<'a>(map: &'a ValueMap, name: &str) -> Option<&'a str> {
    if map.contains_key(name) {
        return map.get_key_value(name).map(|(key, _)| key.as_str());
    }
    let wanted = name.to_lowercase();
    map.keys()
        .find(|key| key.to_lowercase() == wanted)
        .map(String::as_str)
}

fn parse_index(name: &str) -> Option<usize> {
    name.trim().parse::<usize>().ok()
}
