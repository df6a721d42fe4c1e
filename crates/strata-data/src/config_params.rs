//! Hierarchical configuration parameters
//!
//! Keys are dot-separated paths such as `connection.host`. The first segment
//! names a section. Keys starting with `#` or `!` are shadow keys: they never
//! act as a section prefix.

use crate::string_value_map::StringValueMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::{Deref, DerefMut};
use strata_convert::Value;
use strata_errors::{ApplicationError, ApplicationResult};
use strata_reflect::RecursiveObjectReader;

/// Components that accept configuration
pub trait Configurable {
    /// Apply configuration parameters
    ///
    /// # Errors
    ///
    /// `Misconfiguration` when the parameters are unusable.
    fn configure(&mut self, config: &ConfigParams) -> ApplicationResult<()>;
}

/// Configuration stored as flat dot-path keys with string values
///
/// # Example
/// ```rust
/// use strata_data::ConfigParams;
///
/// let config = ConfigParams::from_string("a.b=1;a.c=2;d=3");
/// assert_eq!(config.get_section_names(), vec!["a", "d"]);
/// assert_eq!(config.get_section("a").to_string(), "b=1;c=2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigParams(StringValueMap);

impl ConfigParams {
    /// Create empty parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key1=value1;key2=value2`
    #[must_use]
    pub fn from_string(text: &str) -> Self {
        Self(StringValueMap::from_string(text))
    }

    /// Build from key/value pairs
    #[must_use]
    pub fn from_tuples<K, V, I>(tuples: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self(StringValueMap::from_tuples(tuples))
    }

    /// Flatten a nested value into dot-path keys
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let mut result = Self::new();
        result.append(&RecursiveObjectReader::get_properties(value));
        result
    }

    /// Flatten a JSON document into dot-path keys
    ///
    /// # Errors
    ///
    /// `Misconfiguration` with code `BAD_JSON` when `json` does not parse.
    pub fn from_json(json: &str) -> ApplicationResult<Self> {
        let parsed: serde_json::Value = serde_json::from_str(json).map_err(|err| {
            ApplicationError::misconfiguration(None, "BAD_JSON", "Configuration is not valid JSON")
                .with_cause(err)
        })?;
        Ok(Self::from_value(&Value::from(parsed)))
    }

    /// Merge several configurations; later ones win
    #[must_use]
    pub fn merge_configs(configs: &[ConfigParams]) -> Self {
        Self(StringValueMap::from_maps(configs.iter().map(|config| &config.0)))
    }

    /// Unique first segments of all keys, in first-seen order
    #[must_use]
    pub fn get_section_names(&self) -> Vec<String> {
        let mut sections: Vec<String> = Vec::new();
        for key in self.0.get_keys() {
            let section = match key.find('.') {
                Some(pos) if pos > 0 => key[..pos].to_string(),
                _ => key,
            };
            if !sections.contains(&section) {
                sections.push(section);
            }
        }
        sections
    }

    /// Keys under `section`, with the `section.` prefix stripped
    #[must_use]
    pub fn get_section(&self, section: &str) -> Self {
        let prefix = format!("{section}.");
        self.0
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(&prefix)
                    .map(|rest| (rest.to_string(), value.clone()))
            })
            .collect::<StringValueMap>()
            .into()
    }

    /// Check whether any key lives under `section`
    #[must_use]
    pub fn contains_section(&self, section: &str) -> bool {
        let prefix = format!("{section}.");
        self.0.iter().any(|(key, _)| key.starts_with(&prefix))
    }

    /// Add `params` under `section`
    ///
    /// A shadow section name adds the keys without a prefix; a shadow key
    /// takes the section name itself.
    pub fn add_section(&mut self, section: &str, params: &ConfigParams) {
        let section = if is_shadow_name(section) { "" } else { section };
        for (key, value) in params.iter() {
            let key = if is_shadow_name(key) { "" } else { key.as_str() };
            let full_key = match (key.is_empty(), section.is_empty()) {
                (false, false) => format!("{section}.{key}"),
                (false, true) => key.to_string(),
                (true, _) => section.to_string(),
            };
            self.0.extend([(full_key, value.clone())]);
        }
    }

    /// Copy with `other` applied on top; `other` wins
    #[must_use]
    pub fn override_with(&self, other: &ConfigParams) -> Self {
        Self(StringValueMap::from_maps([&self.0, &other.0]))
    }

    /// Copy with `defaults` filling the gaps; `self` wins
    #[must_use]
    pub fn set_defaults(&self, defaults: &ConfigParams) -> Self {
        Self(StringValueMap::from_maps([&defaults.0, &self.0]))
    }
}

/// Empty names and names starting with `#` or `!`
fn is_shadow_name(name: &str) -> bool {
    name.is_empty() || name.starts_with('#') || name.starts_with('!')
}

impl Deref for ConfigParams {
    type Target = StringValueMap;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ConfigParams {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<StringValueMap> for ConfigParams {
    fn from(map: StringValueMap) -> Self {
        Self(map)
    }
}

impl Display for ConfigParams {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
