//! Reflectable objects
//!
//! User structs take part in dynamic access by implementing [`Reflect`].
//! They are stored in a [`Value`] behind a shared [`ObjectRef`] handle, whose
//! pointer identity is what cycle detection keys on.

use crate::value::{Value, ValueMap};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::any::Any;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;
use strata_errors::ApplicationResult;

/// Property and method capability of a user object
///
/// Implementations report raw property names; callers apply visibility
/// (names starting with `_` are hidden) and case-insensitive matching.
///
/// # Example
/// ```rust
/// use strata_convert::{Reflect, Value};
///
/// #[derive(Debug, Clone)]
/// struct Point { x: i32, y: i32 }
///
/// impl Reflect for Point {
///     fn property_names(&self) -> Vec<String> {
///         vec!["x".to_string(), "y".to_string()]
///     }
///
///     fn get_property(&self, name: &str) -> Option<Value> {
///         match name {
///             "x" => Some(Value::from(self.x)),
///             "y" => Some(Value::from(self.y)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Reflect: ReflectClone + Debug + Send + Sync + 'static {
    /// Names of readable properties, in declaration order
    fn property_names(&self) -> Vec<String>;

    /// Read a property by its exact name
    fn get_property(&self, name: &str) -> Option<Value>;

    /// Write a property by its exact name
    ///
    /// Returns `false` when the property does not exist or rejects the value.
    fn set_property(&mut self, name: &str, value: Value) -> bool {
        let _ = (name, value);
        false
    }

    /// Names of invocable methods
    fn method_names(&self) -> Vec<String> {
        Vec::new()
    }

    /// Invoke a method by its exact name
    ///
    /// Returns `None` when the method does not exist.
    fn invoke_method(&mut self, name: &str, args: &[Value]) -> Option<ApplicationResult<Value>> {
        let _ = (name, args);
        None
    }

    /// Logical type name
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Object-safe cloning and downcasting, implemented for every `Reflect + Clone`
pub trait ReflectClone {
    /// Clone into a fresh box
    fn clone_object(&self) -> Box<dyn Reflect>;

    /// Upcast for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Reflect + Clone> ReflectClone for T {
    fn clone_object(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Shared handle to a reflectable object
///
/// Cloning the handle shares the object; equality is pointer identity.
#[derive(Clone)]
pub struct ObjectRef(Arc<RwLock<Box<dyn Reflect>>>);

impl ObjectRef {
    /// Wrap an object
    #[must_use]
    pub fn new<T: Reflect>(object: T) -> Self {
        Self(Arc::new(RwLock::new(Box::new(object))))
    }

    /// Wrap an already boxed object
    #[must_use]
    pub fn from_boxed(object: Box<dyn Reflect>) -> Self {
        Self(Arc::new(RwLock::new(object)))
    }

    /// Lock for reading
    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, Box<dyn Reflect>> {
        self.0.read()
    }

    /// Lock for writing
    #[inline]
    pub fn write(&self) -> RwLockWriteGuard<'_, Box<dyn Reflect>> {
        self.0.write()
    }

    /// Identity of the shared allocation
    #[inline]
    #[must_use]
    pub fn id(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }

    /// Check whether two handles share the same object
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Copy the object into a new, unshared handle
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self::from_boxed(self.read().clone_object())
    }

    /// Logical type name of the wrapped object
    #[must_use]
    pub fn type_name(&self) -> String {
        self.read().type_name().to_string()
    }

    /// Visible property names (not starting with `_`)
    #[must_use]
    pub fn property_names(&self) -> Vec<String> {
        self.read()
            .property_names()
            .into_iter()
            .filter(|name| is_visible(name))
            .collect()
    }

    /// Visible properties with their current values
    #[must_use]
    pub fn properties(&self) -> ValueMap {
        let guard = self.read();
        guard
            .property_names()
            .into_iter()
            .filter(|name| is_visible(name))
            .filter_map(|name| guard.get_property(&name).map(|value| (name, value)))
            .collect()
    }

    /// Run a closure against the concrete object type
    ///
    /// Returns `None` when the object is not a `T`.
    pub fn with_ref<T: 'static, R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let guard = self.read();
        guard.as_any().downcast_ref::<T>().map(f)
    }

    /// Run a closure against the concrete object type, mutably
    pub fn with_mut<T: 'static, R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut guard = self.write();
        guard.as_any_mut().downcast_mut::<T>().map(f)
    }
}

impl Debug for ObjectRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("type", &self.type_name())
            .field("id", &format_args!("{:#x}", self.id()))
            .finish()
    }
}

/// Property names starting with an underscore are private
#[inline]
#[must_use]
pub fn is_visible(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Counter {
        count: i64,
        _secret: String,
    }

    impl Reflect for Counter {
        fn property_names(&self) -> Vec<String> {
            vec!["count".to_string(), "_secret".to_string()]
        }

        fn get_property(&self, name: &str) -> Option<Value> {
            match name {
                "count" => Some(Value::from(self.count)),
                "_secret" => Some(Value::from(self._secret.as_str())),
                _ => None,
            }
        }

        fn set_property(&mut self, name: &str, value: Value) -> bool {
            match (name, value) {
                ("count", Value::Long(v)) => {
                    self.count = v;
                    true
                }
                _ => false,
            }
        }
    }

    fn counter() -> ObjectRef {
        ObjectRef::new(Counter {
            count: 1,
            _secret: "s".to_string(),
        })
    }

    #[test]
    fn hides_underscore_properties() {
        let obj = counter();
        assert_eq!(obj.property_names(), vec!["count".to_string()]);
        assert_eq!(obj.properties().len(), 1);
    }

    #[test]
    fn clones_share_identity_deep_clones_do_not() {
        let obj = counter();
        let shared = obj.clone();
        let copied = obj.deep_clone();

        assert!(obj.ptr_eq(&shared));
        assert_eq!(obj.id(), shared.id());
        assert!(!obj.ptr_eq(&copied));

        obj.write().set_property("count", Value::Long(5));
        assert_eq!(shared.read().get_property("count"), Some(Value::Long(5)));
        assert_eq!(copied.read().get_property("count"), Some(Value::Long(1)));
    }

    #[test]
    fn debug_prints_identity_not_contents() {
        let obj = counter();
        let rendered = format!("{obj:?}");
        assert!(rendered.starts_with("ObjectRef { type: "));
        assert!(rendered.contains(&format!("{:#x}", obj.id())));
        assert!(!rendered.contains("count"));
    }

    #[test]
    fn downcasts_to_concrete_type() {
        let obj = counter();
        assert_eq!(obj.with_ref(|c: &Counter| c.count), Some(1));
        assert_eq!(obj.with_ref(|s: &String| s.len()), None);
        obj.with_mut(|c: &mut Counter| c.count = 7);
        assert_eq!(obj.with_ref(|c: &Counter| c.count), Some(7));
    }
}
