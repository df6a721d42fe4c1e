//! Keyed dynamic value container

use crate::accessors::typed_accessors;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use strata_convert::{MapConverter, StringConverter, Value, ValueMap};

/// Insertion-ordered map of [`Value`]s with typed accessors by key
///
/// Keys are matched exactly; the last write to a key wins.
///
/// # Example
/// ```rust
/// use strata_data::AnyValueMap;
///
/// let map = AnyValueMap::from_tuples([("timeout", "1500"), ("enabled", "yes")]);
/// assert_eq!(map.get_as_long("timeout"), 1500);
/// assert!(map.get_as_boolean("enabled"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnyValueMap {
    values: ValueMap,
}

impl AnyValueMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert any value through map conversion
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self::from(MapConverter::to_map(value))
    }

    /// Build from key/value pairs
    #[must_use]
    pub fn from_tuples<K, V, I>(tuples: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        tuples
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect()
    }

    /// Build from a flat `[key1, value1, key2, value2, ...]` list
    ///
    /// A trailing key without a value is dropped.
    #[must_use]
    pub fn from_tuples_array(values: &[Value]) -> Self {
        values
            .chunks_exact(2)
            .map(|pair| (StringConverter::to_string(&pair[0]), pair[1].clone()))
            .collect()
    }

    /// Merge several maps; later maps win
    #[must_use]
    pub fn from_maps<'a>(maps: impl IntoIterator<Item = &'a ValueMap>) -> Self {
        let mut result = Self::new();
        for map in maps {
            result.append(map);
        }
        result
    }

    pub(crate) fn get_raw(&self, key: &str) -> Value {
        self.get(key)
    }

    /// Value under `key`, or `Null`
    #[must_use]
    pub fn get(&self, key: &str) -> Value {
        self.values.get(key).cloned().unwrap_or_default()
    }

    /// Keys in insertion order
    #[must_use]
    pub fn get_keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    /// Store a value
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Remove a key, keeping the order of the others
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.shift_remove(key)
    }

    /// Copy every entry of `map`
    pub fn append(&mut self, map: &ValueMap) {
        for (key, value) in map {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Check for a key
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// All entries as a [`Value::Map`]
    #[must_use]
    pub fn get_as_object(&self) -> Value {
        Value::Map(self.values.clone())
    }

    /// Replace all entries with the map form of `value`
    pub fn set_as_object(&mut self, value: &Value) {
        self.values = MapConverter::to_map(value);
    }

    typed_accessors!(key: &str);

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check for no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.values.iter()
    }

    /// Borrow the entries
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> &ValueMap {
        &self.values
    }

    pub(crate) fn as_map_mut(&mut self) -> &mut ValueMap {
        &mut self.values
    }
}

/// `key1=value1;key2=value2`, with bare keys for `Null` values
impl Display for AnyValueMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.values.iter().enumerate() {
            if index > 0 {
                f.write_str(";")?;
            }
            f.write_str(key)?;
            if let Some(text) = StringConverter::to_nullable_string(value) {
                write!(f, "={text}")?;
            }
        }
        Ok(())
    }
}

impl From<ValueMap> for AnyValueMap {
    fn from(values: ValueMap) -> Self {
        Self { values }
    }
}

impl From<AnyValueMap> for Value {
    fn from(map: AnyValueMap) -> Self {
        Value::Map(map.values)
    }
}

impl FromIterator<(String, Value)> for AnyValueMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AnyValueMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnyValueMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
