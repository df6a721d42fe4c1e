//! Call parameters with dot-path access

use crate::accessors::typed_accessors;
use crate::any_value_map::AnyValueMap;
use crate::config_params::ConfigParams;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::{Deref, DerefMut};
use strata_convert::{JsonConverter, MapConverter, RecursiveMapConverter, Value, ValueMap};
use strata_reflect::{ObjectWriter, RecursiveObjectReader, RecursiveObjectWriter};

/// [`AnyValueMap`] whose keys may be dot-paths into nested values
///
/// # Example
/// ```rust
/// use strata_convert::Value;
/// use strata_data::Parameters;
///
/// let mut params = Parameters::new();
/// params.put("filter.name", "abc");
/// assert_eq!(params.get("filter.name"), Value::from("abc"));
/// assert_eq!(params.get_as_parameters("filter").get_as_string("name"), "abc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(AnyValueMap);

impl Parameters {
    /// Create empty parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert any value, turning nested objects into maps
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self(AnyValueMap::from(RecursiveMapConverter::to_map(value)))
    }

    /// Parse a JSON object; anything else gives empty parameters
    #[must_use]
    pub fn from_json(json: &str) -> Self {
        Self(AnyValueMap::from(JsonConverter::to_map(json)))
    }

    /// Build from key/value pairs, expanding dot-path keys
    #[must_use]
    pub fn from_tuples<K, V, I>(tuples: I) -> Self
    where
        K: AsRef<str>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut result = Self::new();
        for (key, value) in tuples {
            result.put(key.as_ref(), value);
        }
        result
    }

    /// Expand configuration keys into nested parameters
    #[must_use]
    pub fn from_config(config: &ConfigParams) -> Self {
        let mut result = Self::new();
        for (key, value) in config.iter() {
            result.put(key, value.clone());
        }
        result
    }

    /// Merge several parameter sets; later ones win at the top level
    #[must_use]
    pub fn merge_params(params: &[Parameters]) -> Self {
        Self(AnyValueMap::from_maps(params.iter().map(|p| p.0.as_map())))
    }

    fn get_raw(&self, key: &str) -> Value {
        self.get(key)
    }

    /// Value at a key or dot-path, or `Null`
    #[must_use]
    pub fn get(&self, key: &str) -> Value {
        match key.split_once('.') {
            None => self.0.get(key),
            Some((first, rest)) => {
                RecursiveObjectReader::get_property(&self.lookup_segment(first), rest).unwrap_or_default()
            }
        }
    }

    /// Store a value at a key or dot-path, creating nested maps as needed
    pub fn put(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        if key.contains('.') {
            let mut root = Value::Map(std::mem::take(self.0.as_map_mut()));
            RecursiveObjectWriter::set_property(&mut root, key, value);
            if let Value::Map(map) = root {
                *self.0.as_map_mut() = map;
            }
        } else {
            self.0.put(key, value);
        }
    }

    /// Check for a key or dot-path
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        match key.split_once('.') {
            None => self.0.contains_key(key),
            Some((first, rest)) => {
                RecursiveObjectReader::has_property(&self.lookup_segment(first), rest)
            }
        }
    }

    fn lookup_segment(&self, name: &str) -> Value {
        let root = self.0.as_map();
        root.get(name)
            .or_else(|| {
                let wanted = name.to_lowercase();
                root.iter()
                    .find(|(key, _)| key.to_lowercase() == wanted)
                    .map(|(_, value)| value)
            })
            .cloned()
            .unwrap_or_default()
    }

    typed_accessors!(key: &str);

    /// Nested parameters at a key or dot-path, or `None` when not a map
    #[must_use]
    pub fn get_as_nullable_parameters(&self, key: &str) -> Option<Parameters> {
        MapConverter::to_nullable_map(&self.get(key)).map(|map| Self(AnyValueMap::from(map)))
    }

    /// Nested parameters, or empty ones
    #[must_use]
    pub fn get_as_parameters(&self, key: &str) -> Parameters {
        self.get_as_nullable_parameters(key).unwrap_or_default()
    }

    /// Nested parameters, or `default`
    #[must_use]
    pub fn get_as_parameters_with_default(&self, key: &str, default: Parameters) -> Parameters {
        self.get_as_nullable_parameters(key).unwrap_or(default)
    }

    /// Copy with `other` applied on top
    ///
    /// A recursive override merges nested maps leaf by leaf; otherwise
    /// top-level keys of `other` replace those of `self`.
    #[must_use]
    pub fn override_with(&self, other: &Parameters, recursive: bool) -> Self {
        Self::layered(&[self, other], recursive)
    }

    /// Copy with `defaults` filling the gaps
    #[must_use]
    pub fn set_defaults(&self, defaults: &Parameters, recursive: bool) -> Self {
        Self::layered(&[defaults, self], recursive)
    }

    fn layered(layers: &[&Parameters], recursive: bool) -> Self {
        let mut result = Value::Map(ValueMap::new());
        for layer in layers {
            if recursive {
                RecursiveObjectWriter::copy_properties(&mut result, &layer.get_as_object());
            } else {
                ObjectWriter::set_properties(&mut result, layer.0.as_map());
            }
        }
        match result {
            Value::Map(map) => Self(AnyValueMap::from(map)),
            _ => Self::new(),
        }
    }

    /// Copy every leaf into `target` at the same dot-path
    pub fn assign_to(&self, target: &mut Value) {
        if self.is_empty() {
            return;
        }
        RecursiveObjectWriter::copy_properties(target, &self.get_as_object());
    }

    /// New parameters with only the listed top-level keys
    #[must_use]
    pub fn pick(&self, keys: &[&str]) -> Self {
        let mut result = Self::new();
        for key in keys {
            if self.0.contains_key(key) {
                result.0.put(*key, self.0.get(key));
            }
        }
        result
    }

    /// New parameters without the listed top-level keys
    #[must_use]
    pub fn omit(&self, keys: &[&str]) -> Self {
        let mut result = self.clone();
        for key in keys {
            result.0.remove(key);
        }
        result
    }

    /// JSON text of the parameters
    #[must_use]
    pub fn to_json(&self) -> Option<String> {
        JsonConverter::to_json(&self.get_as_object())
    }
}

impl Deref for Parameters {
    type Target = AnyValueMap;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Parameters {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<AnyValueMap> for Parameters {
    fn from(map: AnyValueMap) -> Self {
        Self(map)
    }
}

impl From<Parameters> for Value {
    fn from(params: Parameters) -> Self {
        Value::from(params.0)
    }
}

impl Display for Parameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
