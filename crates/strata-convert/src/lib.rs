//! Strata Convert
//!
//! Canonical type codes, the dynamic [`Value`] variant and total conversion
//! functions between primitive representations.
//!
//! # Overview
//!
//! - **TypeCode**: closed set of type tags
//! - **Value**: heterogeneous slot, one variant per type code plus `Null`
//! - **Reflect / ObjectRef**: property capability of user objects
//! - **Converters**: `to_nullable_X` / `to_X` / `to_X_with_default` per type
//! - **TypeMatcher**: permissive matching of expected vs. observed types
//!
//! Converters never fail: an unconvertible input yields `None`.
//!
//! # Example
//!
//! ```rust
//! use strata_convert::{BooleanConverter, IntegerConverter, Value};
//!
//! assert_eq!(BooleanConverter::to_nullable_boolean(&Value::from("yes")), Some(true));
//! assert_eq!(IntegerConverter::to_nullable_integer(&Value::from("123.456")), Some(123));
//! assert_eq!(IntegerConverter::to_nullable_integer(&Value::from("abc")), None);
//! ```

#![warn(missing_docs)]

pub mod type_code;
pub mod value;
pub mod object;
pub mod from_value;

pub mod array;
pub mod boolean;
pub mod datetime;
pub mod duration;
pub mod float;
pub mod integer;
pub mod json;
pub mod map;
pub mod string;
pub mod type_converter;
pub mod type_matcher;

// Re-exports
pub use array::ArrayConverter;
pub use boolean::BooleanConverter;
pub use datetime::DateTimeConverter;
pub use duration::DurationConverter;
pub use float::{DoubleConverter, FloatConverter};
pub use from_value::FromValue;
pub use integer::{IntegerConverter, LongConverter};
pub use json::JsonConverter;
pub use map::{MapConverter, RecursiveMapConverter};
pub use object::{ObjectRef, Reflect, ReflectClone};
pub use string::StringConverter;
pub use type_code::TypeCode;
pub use type_converter::TypeConverter;
pub use type_matcher::TypeMatcher;
pub use value::{EnumValue, Value, ValueMap};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for conversions
    pub use crate::{
        ArrayConverter, BooleanConverter, DateTimeConverter, DoubleConverter, DurationConverter,
        FloatConverter, FromValue, IntegerConverter, JsonConverter, LongConverter, MapConverter,
        ObjectRef, RecursiveMapConverter, Reflect, StringConverter, TypeCode, TypeConverter,
        TypeMatcher, Value, ValueMap,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
