//! Named dependencies
//!
//! [`DependencyResolver`] maps dependency names to locators, usually read
//! from the `dependencies` section of a configuration, and resolves them
//! against a [`References`] registry.

use crate::descriptor::Descriptor;
use crate::locator::Locator;
use crate::references::{downcast, reference_error, Component, References};
use indexmap::IndexMap;
use std::any::Any;
use std::sync::Arc;
use strata_data::{ConfigParams, Configurable};
use strata_errors::{ApplicationError, ApplicationResult};

/// Resolves named dependencies through configured locators
///
/// Locator strings that parse as descriptors become [`Locator::Descriptor`];
/// anything else is kept as a plain value.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use strata_data::ConfigParams;
/// use strata_refer::{DependencyResolver, Descriptor, References};
///
/// let references = Arc::new(References::new());
/// let locator = Descriptor::from_string("app:persistence:memory:default:1.0").unwrap().unwrap();
/// references.put(locator, Arc::new("store".to_string()));
///
/// let config = ConfigParams::from_string("dependencies.persistence=app:persistence:*:*:1.0");
/// let mut resolver = DependencyResolver::new();
/// resolver.resolve(&config);
/// resolver.set_references(references);
///
/// let store = resolver.get_one_required_as::<String>("persistence").unwrap();
/// assert_eq!(store.as_str(), "store");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DependencyResolver {
    dependencies: IndexMap<String, Locator>,
    references: Option<Arc<References>>,
}

impl DependencyResolver {
    /// Create a resolver without dependencies
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from name/locator pairs
    #[must_use]
    pub fn from_tuples<N, L, I>(tuples: I) -> Self
    where
        N: Into<String>,
        L: Into<Locator>,
        I: IntoIterator<Item = (N, L)>,
    {
        let mut resolver = Self::new();
        for (name, locator) in tuples {
            resolver.put(name, locator);
        }
        resolver
    }

    /// Read locators from the `dependencies` section
    ///
    /// Entries without a value are ignored.
    pub fn resolve(&mut self, config: &ConfigParams) {
        let section = config.get_section("dependencies");
        for (name, locator) in section.iter() {
            let Some(locator) = locator.as_deref().filter(|l| !l.is_empty()) else {
                continue;
            };
            let resolved = match Descriptor::from_string(locator) {
                Ok(Some(descriptor)) => Locator::Descriptor(descriptor),
                Ok(None) | Err(_) => Locator::from(locator),
            };
            tracing::debug!(dependency = %name, locator = %resolved, "Resolved dependency");
            self.dependencies.insert(name.clone(), resolved);
        }
    }

    /// Use `references` for lookups
    pub fn set_references(&mut self, references: Arc<References>) {
        self.references = Some(references);
    }

    /// Add or replace a dependency
    pub fn put(&mut self, name: impl Into<String>, locator: impl Into<Locator>) {
        self.dependencies.insert(name.into(), locator.into());
    }

    /// Configured locator for `name`
    #[must_use]
    pub fn locator(&self, name: &str) -> Option<&Locator> {
        self.dependencies.get(name)
    }

    /// Names of all configured dependencies
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.dependencies.keys().map(String::as_str).collect()
    }

    fn references(&self) -> ApplicationResult<&References> {
        self.references
            .as_deref()
            .ok_or_else(|| ApplicationError::invalid_state(None, "NO_REFERENCES", "References shall be set"))
    }

    fn required_locator(&self, name: &str) -> ApplicationResult<&Locator> {
        self.dependencies
            .get(name)
            .ok_or_else(|| reference_error(None, &Locator::from(name)))
    }

    /// Every component for `name`; empty when no locator is configured
    ///
    /// # Errors
    ///
    /// `InvalidState` when references were not set.
    pub fn get_optional(&self, name: &str) -> ApplicationResult<Vec<Component>> {
        let references = self.references()?;
        Ok(self
            .dependencies
            .get(name)
            .map(|locator| references.get_optional(locator.clone()))
            .unwrap_or_default())
    }

    /// Every component for `name`
    ///
    /// # Errors
    ///
    /// `REF_ERROR` when no locator is configured or nothing matches it,
    /// `InvalidState` when references were not set.
    pub fn get_required(&self, name: &str) -> ApplicationResult<Vec<Component>> {
        let references = self.references()?;
        let locator = self.required_locator(name)?;
        references.get_required(locator.clone())
    }

    /// First component for `name`
    ///
    /// # Errors
    ///
    /// `InvalidState` when references were not set.
    pub fn get_one_optional(&self, name: &str) -> ApplicationResult<Option<Component>> {
        let references = self.references()?;
        Ok(self
            .dependencies
            .get(name)
            .and_then(|locator| references.get_one_optional(locator.clone())))
    }

    /// First component for `name`
    ///
    /// # Errors
    ///
    /// `REF_ERROR` when no locator is configured or nothing matches it,
    /// `InvalidState` when references were not set.
    pub fn get_one_required(&self, name: &str) -> ApplicationResult<Component> {
        let references = self.references()?;
        let locator = self.required_locator(name)?;
        references.get_one_required(locator.clone())
    }

    /// Typed variant of [`get_one_required`](Self::get_one_required)
    ///
    /// # Errors
    ///
    /// As [`get_one_required`](Self::get_one_required), plus
    /// `BAD_REFERENCE_TYPE` when the component has another type.
    pub fn get_one_required_as<T: Any + Send + Sync>(&self, name: &str) -> ApplicationResult<Arc<T>> {
        let component = self.get_one_required(name)?;
        downcast(component, self.required_locator(name)?)
    }
}

impl Configurable for DependencyResolver {
    fn configure(&mut self, config: &ConfigParams) -> ApplicationResult<()> {
        self.resolve(config);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_errors::ErrorCategory;

    fn registry() -> Arc<References> {
        let references = References::new();
        references.put(
            Descriptor::from_string("app:logger:console:default:1.0").unwrap().unwrap(),
            Arc::new("console".to_string()),
        );
        references.put("cache", Arc::new(42_i64));
        Arc::new(references)
    }

    #[test]
    fn resolves_descriptors_and_plain_names() {
        let mut resolver = DependencyResolver::new();
        resolver.resolve(&ConfigParams::from_string(
            "dependencies.logger=*:logger:*:*:1.0;dependencies.cache=cache;other=x",
        ));
        resolver.set_references(registry());

        assert_eq!(resolver.names(), vec!["logger", "cache"]);
        assert!(matches!(resolver.locator("logger"), Some(Locator::Descriptor(_))));
        assert_eq!(resolver.locator("cache"), Some(&Locator::from("cache")));
        assert_eq!(*resolver.get_one_required_as::<i64>("cache").unwrap(), 42);
        assert_eq!(resolver.get_required("logger").unwrap().len(), 1);
    }

    #[test]
    fn malformed_descriptor_stays_a_value() {
        let mut resolver = DependencyResolver::new();
        resolver
            .configure(&ConfigParams::from_string("dependencies.db=a:b"))
            .unwrap();
        assert_eq!(resolver.locator("db"), Some(&Locator::from("a:b")));
    }

    #[test]
    fn unknown_dependency_is_a_reference_error() {
        let mut resolver = DependencyResolver::new();
        resolver.set_references(registry());

        let err = resolver.get_one_required("logger").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.code(), "REF_ERROR");
        assert!(resolver.get_one_optional("logger").unwrap().is_none());
        assert!(resolver.get_optional("logger").unwrap().is_empty());
    }

    #[test]
    fn unmatched_locator_is_a_reference_error() {
        let mut resolver = DependencyResolver::from_tuples([("queue", "queue")]);
        resolver.set_references(registry());
        assert_eq!(resolver.get_one_required("queue").unwrap_err().code(), "REF_ERROR");
        assert!(resolver.get_required("queue").is_err());
    }

    #[test]
    fn references_must_be_set() {
        let resolver = DependencyResolver::from_tuples([("cache", "cache")]);
        let err = resolver.get_one_optional("cache").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::InvalidState);
    }
}
