//! Single dynamic value slot

use crate::accessors::typed_accessors;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use strata_convert::{StringConverter, TypeCode, TypeConverter, Value};

/// A mutable slot holding one [`Value`] with typed accessors
///
/// Cloning copies the value deeply, including referenced objects.
///
/// # Example
/// ```rust
/// use strata_convert::Value;
/// use strata_data::AnyValue;
///
/// let value = AnyValue::new("123");
/// assert_eq!(value.get_as_integer(), 123);
/// assert!(value.equals(&Value::from(123)));
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnyValue {
    value: Value,
}

impl AnyValue {
    /// Create a slot holding `value`
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        Self { value: value.into() }
    }

    fn get_raw(&self) -> Value {
        self.value.clone()
    }

    /// Type code of the held value
    #[inline]
    #[must_use]
    pub fn get_type_code(&self) -> TypeCode {
        TypeConverter::to_type_code(&self.value)
    }

    /// The held value
    #[inline]
    #[must_use]
    pub fn get_as_object(&self) -> Value {
        self.value.clone()
    }

    /// Replace the held value
    pub fn set_as_object(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    /// Borrow the held value
    #[inline]
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    typed_accessors!();

    /// Compare with another value
    ///
    /// Equal when the values are identical or their string forms match.
    #[must_use]
    pub fn equals(&self, other: &Value) -> bool {
        if self.value == *other {
            return true;
        }
        if self.value.is_null() || other.is_null() {
            return false;
        }
        StringConverter::to_nullable_string(&self.value) == StringConverter::to_nullable_string(other)
    }

    /// Compare after converting both sides to `type_code`
    #[must_use]
    pub fn equals_as(&self, type_code: TypeCode, other: &Value) -> bool {
        if self.value == *other {
            return true;
        }
        match (
            TypeConverter::to_nullable_type(type_code, &self.value),
            TypeConverter::to_nullable_type(type_code, other),
        ) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }

    /// Hash of the string form, consistent with [`equals`](Self::equals)
    #[must_use]
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        StringConverter::to_nullable_string(&self.value).hash(&mut hasher);
        hasher.finish()
    }
}

impl Clone for AnyValue {
    fn clone(&self) -> Self {
        Self {
            value: self.value.deep_clone(),
        }
    }
}

impl PartialEq for AnyValue {
    fn eq(&self, other: &Self) -> bool {
        self.equals(&other.value)
    }
}

impl Display for AnyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&StringConverter::to_string(&self.value))
    }
}

impl From<Value> for AnyValue {
    fn from(value: Value) -> Self {
        Self { value }
    }
}

impl From<AnyValue> for Value {
    fn from(value: AnyValue) -> Self {
        value.value
    }
}
