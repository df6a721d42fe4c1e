//! Typed extraction from [`Value`]
//!
//! [`FromValue`] is the inverse of the `From<T> for Value` conversions and is
//! built on the converters, so it is as lenient as they are.

use crate::array::ArrayConverter;
use crate::boolean::BooleanConverter;
use crate::datetime::DateTimeConverter;
use crate::duration::DurationConverter;
use crate::float::{DoubleConverter, FloatConverter};
use crate::integer::{IntegerConverter, LongConverter};
use crate::map::MapConverter;
use crate::string::StringConverter;
use crate::value::{Value, ValueMap};
use chrono::{DateTime, TimeDelta, Utc};

/// Conversion from a dynamic value into a concrete type
pub trait FromValue: Sized {
    /// Convert, or `None` when the value is not convertible
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        BooleanConverter::to_nullable_boolean(value)
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> Option<Self> {
        IntegerConverter::to_nullable_integer(value)
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        LongConverter::to_nullable_long(value)
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        FloatConverter::to_nullable_float(value)
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        DoubleConverter::to_nullable_double(value)
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        StringConverter::to_nullable_string(value)
    }
}

impl FromValue for DateTime<Utc> {
    fn from_value(value: &Value) -> Option<Self> {
        DateTimeConverter::to_nullable_datetime(value)
    }
}

impl FromValue for TimeDelta {
    fn from_value(value: &Value) -> Option<Self> {
        DurationConverter::to_nullable_duration(value)
    }
}

impl FromValue for ValueMap {
    fn from_value(value: &Value) -> Option<Self> {
        MapConverter::to_nullable_map(value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            Some(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Option<Self> {
        ArrayConverter::to_nullable_array(value)?
            .iter()
            .map(T::from_value)
            .collect()
    }
}
