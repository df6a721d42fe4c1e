//! Component registry
//!
//! [`References`] stores components under locators. Lookups scan from the
//! most recently registered entry backwards, so a later registration
//! shadows an earlier one for the `*_one_*` accessors.

use crate::locator::Locator;
use parking_lot::RwLock;
use std::any::Any;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;
use strata_errors::{ApplicationError, ApplicationResult};

/// Shared, type-erased component
pub type Component = Arc<dyn Any + Send + Sync>;

/// Error raised when a required reference cannot be found
#[must_use]
pub fn reference_error(correlation_id: Option<&str>, locator: &Locator) -> ApplicationError {
    ApplicationError::internal(correlation_id, "REF_ERROR", format!("Cannot locate reference: {locator}"))
        .with_details("locator", locator.to_string())
}

/// Downcast a component to its concrete type
///
/// # Errors
///
/// `Internal` with code `BAD_REFERENCE_TYPE` when the component is not a `T`.
pub fn downcast<T: Any + Send + Sync>(component: Component, locator: &Locator) -> ApplicationResult<Arc<T>> {
    component.downcast::<T>().map_err(|_| {
        ApplicationError::internal(
            None,
            "BAD_REFERENCE_TYPE",
            format!("Reference {locator} is not a {}", std::any::type_name::<T>()),
        )
        .with_details("locator", locator.to_string())
    })
}

struct Reference {
    locator: Locator,
    component: Component,
}

/// Thread-safe registry of components keyed by locators
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use strata_refer::{Descriptor, References};
///
/// let references = References::new();
/// let locator = Descriptor::from_string("app:counter:memory:default:1.0").unwrap().unwrap();
/// references.put(locator, Arc::new(5_u32));
///
/// let any_counter = Descriptor::from_string("*:counter:*:*:*").unwrap().unwrap();
/// let counter = references.get_one_required_as::<u32>(any_counter).unwrap();
/// assert_eq!(*counter, 5);
/// ```
#[derive(Default)]
pub struct References {
    references: RwLock<Vec<Reference>>,
}

impl References {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from locator/component pairs
    #[must_use]
    pub fn from_tuples<L, I>(tuples: I) -> Self
    where
        L: Into<Locator>,
        I: IntoIterator<Item = (L, Component)>,
    {
        let references = Self::new();
        for (locator, component) in tuples {
            references.put(locator, component);
        }
        references
    }

    /// Register a component
    pub fn put(&self, locator: impl Into<Locator>, component: Component) {
        self.references.write().push(Reference {
            locator: locator.into(),
            component,
        });
    }

    /// Remove the most recent component matching `locator`
    pub fn remove(&self, locator: impl Into<Locator>) -> Option<Component> {
        let locator = locator.into();
        let mut references = self.references.write();
        let index = references.iter().rposition(|r| locator.matches(&r.locator))?;
        Some(references.remove(index).component)
    }

    /// Remove every component matching `locator`, most recent first
    pub fn remove_all(&self, locator: impl Into<Locator>) -> Vec<Component> {
        let locator = locator.into();
        let mut references = self.references.write();
        let mut removed = Vec::new();
        let mut index = references.len();
        while index > 0 {
            index -= 1;
            if locator.matches(&references[index].locator) {
                removed.push(references.remove(index).component);
            }
        }
        removed
    }

    /// Locators in registration order
    #[must_use]
    pub fn get_all_locators(&self) -> Vec<Locator> {
        self.references.read().iter().map(|r| r.locator.clone()).collect()
    }

    /// Components in registration order
    #[must_use]
    pub fn get_all(&self) -> Vec<Component> {
        self.references.read().iter().map(|r| Arc::clone(&r.component)).collect()
    }

    /// Every component matching `locator`, most recent first
    #[must_use]
    pub fn get_optional(&self, locator: impl Into<Locator>) -> Vec<Component> {
        let locator = locator.into();
        self.find(&locator, false)
    }

    /// Every component matching `locator`, most recent first
    ///
    /// # Errors
    ///
    /// `Internal` with code `REF_ERROR` when nothing matches.
    pub fn get_required(&self, locator: impl Into<Locator>) -> ApplicationResult<Vec<Component>> {
        let locator = locator.into();
        let found = self.find(&locator, false);
        if found.is_empty() {
            return Err(reference_error(None, &locator));
        }
        Ok(found)
    }

    /// Most recent component matching `locator`
    #[must_use]
    pub fn get_one_optional(&self, locator: impl Into<Locator>) -> Option<Component> {
        let locator = locator.into();
        self.find(&locator, true).into_iter().next()
    }

    /// Most recent component matching `locator`
    ///
    /// # Errors
    ///
    /// `Internal` with code `REF_ERROR` when nothing matches.
    pub fn get_one_required(&self, locator: impl Into<Locator>) -> ApplicationResult<Component> {
        let locator = locator.into();
        self.find(&locator, true)
            .into_iter()
            .next()
            .ok_or_else(|| reference_error(None, &locator))
    }

    /// Typed variant of [`get_one_required`](Self::get_one_required)
    ///
    /// # Errors
    ///
    /// `REF_ERROR` when nothing matches, `BAD_REFERENCE_TYPE` when the
    /// component has another type.
    pub fn get_one_required_as<T: Any + Send + Sync>(&self, locator: impl Into<Locator>) -> ApplicationResult<Arc<T>> {
        let locator = locator.into();
        let component = self.get_one_required(locator.clone())?;
        downcast(component, &locator)
    }

    /// Number of registered components
    #[must_use]
    pub fn len(&self) -> usize {
        self.references.read().len()
    }

    /// Check whether nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.read().is_empty()
    }

    fn find(&self, locator: &Locator, first_only: bool) -> Vec<Component> {
        let references = self.references.read();
        let matching = references
            .iter()
            .rev()
            .filter(|r| locator.matches(&r.locator))
            .map(|r| Arc::clone(&r.component));
        if first_only {
            matching.take(1).collect()
        } else {
            matching.collect()
        }
    }
}

impl Debug for References {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("References")
            .field("locators", &self.get_all_locators())
            .finish()
    }
}
