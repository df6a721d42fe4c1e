//! String-only keyed container

use crate::accessors::typed_accessors;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use strata_convert::{MapConverter, StringConverter, Value, ValueMap};

/// Insertion-ordered map whose values are stored as strings
///
/// Every setter converts its value to a string; `Null` is kept as `None`.
///
/// # Example
/// ```rust
/// use strata_data::StringValueMap;
///
/// let map = StringValueMap::from_string("host=localhost;port=8080;debug");
/// assert_eq!(map.get("host"), Some("localhost".to_string()));
/// assert_eq!(map.get_as_integer("port"), 8080);
/// assert!(map.contains_key("debug"));
/// assert_eq!(map.to_string(), "host=localhost;port=8080;debug");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringValueMap {
    values: IndexMap<String, Option<String>>,
}

impl StringValueMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key1=value1;key2=value2;key3`
    ///
    /// Keys and values are trimmed. A token without `=` stores a `None`
    /// value and empty tokens are skipped.
    #[must_use]
    pub fn from_string(text: &str) -> Self {
        let mut result = Self::new();
        for token in text.split(';').filter(|token| !token.trim().is_empty()) {
            match token.split_once('=') {
                Some((key, value)) => {
                    result.values.insert(key.trim().to_string(), Some(value.trim().to_string()));
                }
                None => {
                    result.values.insert(token.trim().to_string(), None);
                }
            }
        }
        result
    }

    /// Build from key/value pairs
    #[must_use]
    pub fn from_tuples<K, V, I>(tuples: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut result = Self::new();
        for (key, value) in tuples {
            result.put(key, value);
        }
        result
    }

    /// Build from a flat `[key1, value1, key2, value2, ...]` list
    #[must_use]
    pub fn from_tuples_array(values: &[Value]) -> Self {
        let mut result = Self::new();
        for pair in values.chunks_exact(2) {
            result.put(StringConverter::to_string(&pair[0]), pair[1].clone());
        }
        result
    }

    /// Convert any value through map conversion
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let mut result = Self::new();
        result.append(&MapConverter::to_map(value));
        result
    }

    /// Merge several maps; later maps win
    #[must_use]
    pub fn from_maps<'a>(maps: impl IntoIterator<Item = &'a StringValueMap>) -> Self {
        let mut result = Self::new();
        for map in maps {
            result.extend(map.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        result
    }

    pub(crate) fn get_raw(&self, key: &str) -> Value {
        Value::from(self.get(key))
    }

    /// String under `key`, or `None`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned().flatten()
    }

    /// Keys in insertion order
    #[must_use]
    pub fn get_keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    /// Store the string form of a value
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let value = StringConverter::to_nullable_string(&value.into());
        self.values.insert(key.into(), value);
    }

    /// Remove a key, keeping the order of the others
    pub fn remove(&mut self, key: &str) -> Option<Option<String>> {
        self.values.shift_remove(key)
    }

    /// Copy every entry of `map`, converting values to strings
    pub fn append(&mut self, map: &ValueMap) {
        for (key, value) in map {
            self.put(key.clone(), value.clone());
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

    /// All entries as a [`Value::Map`] of strings and nulls
    #[must_use]
    pub fn get_as_object(&self) -> Value {
        Value::Map(
            self.values
                .iter()
                .map(|(key, value)| (key.clone(), Value::from(value.clone())))
                .collect(),
        )
    }

    /// Replace all entries with the map form of `value`
    pub fn set_as_object(&mut self, value: &Value) {
        self.clear();
        self.append(&MapConverter::to_map(value));
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
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Option<String>> {
        self.values.iter()
    }
}

impl Display for StringValueMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.values.iter().enumerate() {
            if index > 0 {
                f.write_str(";")?;
            }
            f.write_str(key)?;
            if let Some(value) = value {
                write!(f, "={value}")?;
            }
        }
        Ok(())
    }
}

impl Extend<(String, Option<String>)> for StringValueMap {
    fn extend<I: IntoIterator<Item = (String, Option<String>)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl FromIterator<(String, Option<String>)> for StringValueMap {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for StringValueMap {
    type Item = (String, Option<String>);
    type IntoIter = indexmap::map::IntoIter<String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a StringValueMap {
    type Item = (&'a String, &'a Option<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_pairs_and_bare_keys() {
        let map = StringValueMap::from_string(" a = 1 ;; b ;c=x=y");
        assert_eq!(map.get_keys(), vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(map.get("a"), Some("1".to_string()));
        assert_eq!(map.get("b"), None);
        assert!(map.contains_key("b"));
        assert_eq!(map.get("c"), Some("x=y".to_string()));
    }

    #[test]
    fn setters_store_strings() {
        let mut map = StringValueMap::new();
        map.put("flag", true);
        map.put("count", 3);
        map.put("none", Value::Null);
        assert_eq!(map.get("flag"), Some("true".to_string()));
        assert_eq!(map.get_as_integer("count"), 3);
        assert_eq!(map.to_string(), "flag=true;count=3;none");
    }

    #[test]
    fn tuples_pair_up() {
        let map = StringValueMap::from_tuples([("a", Value::from(1)), ("b", Value::from(2.5))]);
        assert_eq!(map.to_string(), "a=1;b=2.5");

        let flat = StringValueMap::from_tuples_array(&[Value::from("k"), Value::from(false)]);
        assert_eq!(flat.get_as_nullable_boolean("k"), Some(false));
    }

    #[test]
    fn later_maps_win() {
        let first = StringValueMap::from_string("a=1;b=2");
        let second = StringValueMap::from_string("b=3;c");
        let merged = StringValueMap::from_maps([&first, &second]);
        assert_eq!(merged.to_string(), "a=1;b=3;c");
    }
}
