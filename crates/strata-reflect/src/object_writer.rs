//! Uniform property writing over maps, arrays and objects
//!
//! Writes never fail. Targets that cannot hold the property are left
//! untouched.

use crate::object_reader::find_key;
use crate::property_reflector::PropertyReflector;
use strata_convert::{Value, ValueMap};

/// Largest number of `Null` slots a single array write may pad with
pub const MAX_INDEX_GAP: usize = 10_000;

/// Writes properties into any [`Value`]
#[derive(Debug, Clone, Copy)]
pub struct ObjectWriter;

impl ObjectWriter {
    /// Write a property
    ///
    /// - Maps replace the first key matching ignoring case, or insert `name`.
    /// - Arrays replace index `n`; `n == len` appends and `n > len` pads
    ///   with `Null` first. Negative or non-numeric indices, and indices more
    ///   than [`MAX_INDEX_GAP`] past the end, are ignored.
    /// - Objects delegate to [`PropertyReflector::set_property`].
    pub fn set_property(obj: &mut Value, name: &str, value: Value) {
        match obj {
            Value::Map(map) => {
                let key = find_key(map, name).unwrap_or(name).to_string();
                map.insert(key, value);
            }
            Value::Array(items) => {
                let Some(index) = name.trim().parse::<i64>().ok().and_then(|n| usize::try_from(n).ok()) else {
                    tracing::trace!(index = name, "array write skipped");
                    return;
                };
                Self::set_element(items, index, value);
            }
            Value::Object(object) => PropertyReflector::set_property(object, name, value),
            other => {
                tracing::trace!(property = name, target = %other.type_code(), "write to scalar skipped");
            }
        }
    }

    /// Write one array element, padding with `Null` past the end
    ///
    /// Returns `false`, leaving `items` untouched, when `index` lies more
    /// than [`MAX_INDEX_GAP`] past the end or the padding cannot be
    /// allocated.
    pub fn set_element(items: &mut Vec<Value>, index: usize, value: Value) -> bool {
        if let Some(slot) = items.get_mut(index) {
            *slot = value;
            return true;
        }
        let gap = index - items.len();
        if gap > MAX_INDEX_GAP || items.try_reserve(gap + 1).is_err() {
            tracing::trace!(index, len = items.len(), "array write past the end skipped");
            return false;
        }
        items.resize(index, Value::Null);
        items.push(value);
        true
    }

    /// Write several properties in map order
    pub fn set_properties(obj: &mut Value, values: &ValueMap) {
        for (name, value) in values {
            Self::set_property(obj, name, value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn map_writes_reuse_existing_key_case() {
        let mut map = Value::Map(ValueMap::new());
        ObjectWriter::set_property(&mut map, "Name", Value::from("a"));
        ObjectWriter::set_property(&mut map, "NAME", Value::from("b"));

        let map = map.as_map().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Name"), Some(&Value::from("b")));
    }

    #[test]
    fn array_writes_grow_and_pad() {
        let mut array = Value::from(vec![1]);
        ObjectWriter::set_property(&mut array, "0", Value::from(5));
        ObjectWriter::set_property(&mut array, "1", Value::from(6));
        ObjectWriter::set_property(&mut array, "3", Value::from(8));
        assert_eq!(
            array,
            Value::Array(vec![Value::from(5), Value::from(6), Value::Null, Value::from(8)])
        );
    }

    #[test]
    fn invalid_array_indices_are_ignored() {
        let mut array = Value::from(vec![1, 2]);
        ObjectWriter::set_property(&mut array, "-1", Value::from(0));
        ObjectWriter::set_property(&mut array, "first", Value::from(0));
        assert_eq!(array, Value::from(vec![1, 2]));
    }

    #[test]
    fn huge_array_indices_are_skipped() {
        let mut array = Value::from(vec![1]);
        ObjectWriter::set_property(&mut array, "9223372036854775807", Value::from(2));
        ObjectWriter::set_property(&mut array, &(MAX_INDEX_GAP + 2).to_string(), Value::from(2));
        assert_eq!(array, Value::from(vec![1]));

        ObjectWriter::set_property(&mut array, &(MAX_INDEX_GAP + 1).to_string(), Value::from(2));
        let items = array.as_array().unwrap();
        assert_eq!(items.len(), MAX_INDEX_GAP + 2);
        assert_eq!(items.last(), Some(&Value::from(2)));
    }

    #[test]
    fn set_element_reports_skips() {
        let mut items = vec![Value::from(1)];
        assert!(ObjectWriter::set_element(&mut items, 0, Value::from(3)));
        assert!(!ObjectWriter::set_element(&mut items, usize::MAX, Value::from(4)));
        assert_eq!(items, vec![Value::from(3)]);
    }

    #[test]
    fn scalars_ignore_writes() {
        let mut scalar = Value::from("text");
        ObjectWriter::set_property(&mut scalar, "length", Value::from(1));
        assert_eq!(scalar, Value::from("text"));
    }
}
