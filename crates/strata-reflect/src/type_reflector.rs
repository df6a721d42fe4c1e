//! Type registry and dynamic construction
//!
//! Types are registered under a [`TypeDescriptor`] together with a
//! constructor that receives positional arguments. Lookups follow
//! descriptor equality, so a lookup without a library finds a type
//! registered with one.

use crate::type_descriptor::TypeDescriptor;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;
use strata_convert::{ObjectRef, Reflect, TypeConverter, Value};
use strata_errors::{ApplicationError, ApplicationResult};

/// Constructor of a registered type
pub type Constructor = Arc<dyn Fn(&[Value]) -> ApplicationResult<Value> + Send + Sync>;

static GLOBAL: Lazy<TypeReflector> = Lazy::new(TypeReflector::new);

/// A registered type
#[derive(Clone)]
pub struct TypeHandle {
    descriptor: TypeDescriptor,
    constructor: Constructor,
}

impl TypeHandle {
    /// Descriptor the type was registered under
    #[inline]
    #[must_use]
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// Construct an instance
    ///
    /// # Errors
    ///
    /// Whatever the constructor returns.
    pub fn create(&self, args: &[Value]) -> ApplicationResult<Value> {
        (self.constructor)(args)
    }
}

impl Debug for TypeHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeHandle")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Registry of constructible types
#[derive(Default)]
pub struct TypeReflector {
    types: RwLock<Vec<TypeHandle>>,
}

impl TypeReflector {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Register a constructor, replacing one registered under the same
    /// name and library
    pub fn register<F>(&self, descriptor: TypeDescriptor, constructor: F)
    where
        F: Fn(&[Value]) -> ApplicationResult<Value> + Send + Sync + 'static,
    {
        tracing::debug!(r#type = %descriptor, "registering type");
        let handle = TypeHandle {
            descriptor,
            constructor: Arc::new(constructor),
        };
        let mut types = self.types.write();
        types.retain(|existing| {
            existing.descriptor.name() != handle.descriptor.name()
                || existing.descriptor.library() != handle.descriptor.library()
        });
        types.push(handle);
    }

    /// Register a reflectable type built with `Default`
    ///
    /// Arguments passed on construction are ignored.
    pub fn register_default<T: Reflect + Default>(&self, descriptor: TypeDescriptor) {
        self.register(descriptor, |_| Ok(Value::Object(ObjectRef::new(T::default()))));
    }

    /// Look up a type by name and library
    #[must_use]
    pub fn get_type(&self, name: &str, library: Option<&str>) -> Option<TypeHandle> {
        self.get_type_by_descriptor(&TypeDescriptor::new(name, library))
    }

    /// Look up a type by descriptor
    #[must_use]
    pub fn get_type_by_descriptor(&self, descriptor: &TypeDescriptor) -> Option<TypeHandle> {
        self.types
            .read()
            .iter()
            .find(|handle| handle.descriptor == *descriptor)
            .cloned()
    }

    /// Construct an instance of a registered type
    ///
    /// # Errors
    ///
    /// `NotFound` with code `TYPE_NOT_FOUND` and details `type` and `library`
    /// when no such type is registered; otherwise whatever the constructor
    /// returns.
    pub fn create_instance(&self, name: &str, library: Option<&str>, args: &[Value]) -> ApplicationResult<Value> {
        self.create_instance_by_descriptor(&TypeDescriptor::new(name, library), args)
    }

    /// Construct an instance of the type named by a descriptor
    ///
    /// # Errors
    ///
    /// Same as [`create_instance`](Self::create_instance).
    pub fn create_instance_by_descriptor(
        &self,
        descriptor: &TypeDescriptor,
        args: &[Value],
    ) -> ApplicationResult<Value> {
        let Some(handle) = self.get_type_by_descriptor(descriptor) else {
            return Err(ApplicationError::not_found(
                None,
                "TYPE_NOT_FOUND",
                format!("Type {descriptor} was not found"),
            )
            .with_details("type", descriptor.name())
            .with_details("library", descriptor.library()));
        };
        tracing::debug!(r#type = %descriptor, args = args.len(), "creating instance");
        handle.create(args)
    }

    /// String, Enum, Boolean, numeric, DateTime or Duration
    #[inline]
    #[must_use]
    pub fn is_primitive(value: &Value) -> bool {
        TypeConverter::to_type_code(value).is_primitive()
    }
}

impl Debug for TypeReflector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeReflector")
            .field("types", &self.types.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect_fields;
    use strata_convert::StringConverter;
    use strata_errors::ErrorCategory;

    #[derive(Debug, Clone, Default)]
    struct Greeter {
        greeting: String,
    }

    reflect_fields!(Greeter { greeting });

    fn registry() -> TypeReflector {
        let registry = TypeReflector::new();
        registry.register(TypeDescriptor::new("Greeter", Some("demo")), |args| {
            let greeting = args.first().map(StringConverter::to_string).unwrap_or_default();
            Ok(Value::Object(ObjectRef::new(Greeter { greeting })))
        });
        registry
    }

    #[test]
    fn creates_with_positional_arguments() {
        let registry = registry();
        let value = registry
            .create_instance("Greeter", None, &[Value::from("hello")])
            .unwrap();
        let greeting = value
            .as_object()
            .and_then(|obj| obj.with_ref(|g: &Greeter| g.greeting.clone()));
        assert_eq!(greeting, Some("hello".to_string()));
    }

    #[test]
    fn missing_type_is_not_found_with_details() {
        let err = registry()
            .create_instance("Greeter", Some("other"), &[])
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.code(), "TYPE_NOT_FOUND");
        assert_eq!(err.detail("type"), Some(&serde_json::json!("Greeter")));
        assert_eq!(err.detail("library"), Some(&serde_json::json!("other")));
    }

    #[test]
    fn constructor_errors_propagate() {
        let registry = TypeReflector::new();
        registry.register(TypeDescriptor::new("Broken", None), |_| {
            Err(ApplicationError::internal(None, "CTOR_FAILED", "cannot build"))
        });
        let err = registry.create_instance("Broken", None, &[]).unwrap_err();
        assert_eq!(err.code(), "CTOR_FAILED");
    }

    #[test]
    fn registering_again_replaces() {
        let registry = registry();
        registry.register_default::<Greeter>(TypeDescriptor::new("Greeter", Some("demo")));
        let value = registry.create_instance("Greeter", Some("demo"), &[Value::from("x")]).unwrap();
        assert_eq!(
            value.as_object().and_then(|obj| obj.with_ref(|g: &Greeter| g.greeting.clone())),
            Some(String::new())
        );
        assert!(registry.get_type("Greeter", None).is_some());
    }

    #[test]
    fn classifies_primitives() {
        assert!(TypeReflector::is_primitive(&Value::from(1.5)));
        assert!(TypeReflector::is_primitive(&Value::from("s")));
        assert!(!TypeReflector::is_primitive(&Value::from(vec![1])));
        assert!(!TypeReflector::is_primitive(&Value::Null));
    }
}
