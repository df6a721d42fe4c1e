//! Declarative [`Reflect`](strata_convert::Reflect) implementations

/// Implement [`Reflect`](strata_convert::Reflect) for a struct from a list of
/// its fields
///
/// Each listed field becomes a property under its own name. Reads convert
/// through `Value::from`, writes through [`FromValue`](strata_convert::FromValue),
/// so every field type must implement `Clone`, `Into<Value>` and `FromValue`.
/// A write whose value cannot be converted is rejected.
///
/// Fields starting with `_` are listed but stay hidden from reflectors.
///
/// # Example
/// ```rust
/// use strata_convert::{ObjectRef, Value};
/// use strata_reflect::{reflect_fields, PropertyReflector};
///
/// #[derive(Debug, Clone, Default)]
/// struct Person {
///     id: String,
///     age: i32,
/// }
///
/// reflect_fields!(Person { id, age });
///
/// let person = ObjectRef::new(Person::default());
/// PropertyReflector::set_property(&person, "Age", Value::from("42"));
/// assert_eq!(PropertyReflector::get_property(&person, "age"), Some(Value::from(42)));
/// ```
#[macro_export]
macro_rules! reflect_fields {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::__private::Reflect for $ty {
            fn property_names(&self) -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![$(::std::string::String::from(::std::stringify!($field))),*]
            }

            fn get_property(&self, name: &str) -> ::std::option::Option<$crate::__private::Value> {
                match name {
                    $(::std::stringify!($field) => ::std::option::Option::Some(
                        $crate::__private::Value::from(::std::clone::Clone::clone(&self.$field)),
                    ),)*
                    _ => ::std::option::Option::None,
                }
            }

            fn set_property(&mut self, name: &str, value: $crate::__private::Value) -> bool {
                match name {
                    $(::std::stringify!($field) => {
                        match $crate::__private::FromValue::from_value(&value) {
                            ::std::option::Option::Some(converted) => {
                                self.$field = converted;
                                true
                            }
                            ::std::option::Option::None => false,
                        }
                    })*
                    _ => {
                        let _ = value;
                        false
                    }
                }
            }
        }
    };
}
