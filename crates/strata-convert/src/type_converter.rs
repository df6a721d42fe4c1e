//! Conversion by type code

use crate::array::ArrayConverter;
use crate::boolean::BooleanConverter;
use crate::datetime::DateTimeConverter;
use crate::duration::DurationConverter;
use crate::float::{DoubleConverter, FloatConverter};
use crate::integer::{IntegerConverter, LongConverter};
use crate::map::MapConverter;
use crate::string::StringConverter;
use crate::type_code::TypeCode;
use crate::value::{Value, ValueMap};
use chrono::TimeDelta;

/// Classifies values and converts them to a type selected at runtime
#[derive(Debug, Clone, Copy)]
pub struct TypeConverter;

impl TypeConverter {
    /// Type code of a value; `Unknown` for the absent value
    #[inline]
    #[must_use]
    pub fn to_type_code(value: &Value) -> TypeCode {
        value.type_code()
    }

    /// Convert to the type named by `type_code`, or `None`
    ///
    /// `Object` and `Unknown` accept any non-null value unchanged; `Enum`
    /// accepts only enum members.
    #[must_use]
    pub fn to_nullable_type(type_code: TypeCode, value: &Value) -> Option<Value> {
        if value.is_null() {
            return None;
        }
        match type_code {
            TypeCode::String => StringConverter::to_nullable_string(value).map(Value::String),
            TypeCode::Boolean => BooleanConverter::to_nullable_boolean(value).map(Value::Boolean),
            TypeCode::Integer => IntegerConverter::to_nullable_integer(value).map(Value::Integer),
            TypeCode::Long => LongConverter::to_nullable_long(value).map(Value::Long),
            TypeCode::Float => FloatConverter::to_nullable_float(value).map(Value::Float),
            TypeCode::Double => DoubleConverter::to_nullable_double(value).map(Value::Double),
            TypeCode::DateTime => DateTimeConverter::to_nullable_datetime(value).map(Value::DateTime),
            TypeCode::Duration => DurationConverter::to_nullable_duration(value).map(Value::Duration),
            TypeCode::Array => ArrayConverter::to_nullable_array(value).map(Value::Array),
            TypeCode::Map => MapConverter::to_nullable_map(value).map(Value::Map),
            TypeCode::Enum => matches!(value, Value::Enum(_)).then(|| value.clone()),
            TypeCode::Object | TypeCode::Unknown => Some(value.clone()),
        }
    }

    /// Convert, or the zero value of the type
    #[must_use]
    pub fn to_type(type_code: TypeCode, value: &Value) -> Value {
        Self::to_nullable_type(type_code, value).unwrap_or_else(|| Self::zero(type_code))
    }

    /// Convert, or `default`
    #[must_use]
    pub fn to_type_with_default(type_code: TypeCode, value: &Value, default: Value) -> Value {
        Self::to_nullable_type(type_code, value).unwrap_or(default)
    }

    /// Lowercase name of a type code
    #[inline]
    #[must_use]
    pub fn to_string(type_code: TypeCode) -> &'static str {
        type_code.as_str()
    }

    fn zero(type_code: TypeCode) -> Value {
        match type_code {
            TypeCode::String => Value::String(String::new()),
            TypeCode::Boolean => Value::Boolean(false),
            TypeCode::Integer => Value::Integer(0),
            TypeCode::Long => Value::Long(0),
            TypeCode::Float => Value::Float(0.0),
            TypeCode::Double => Value::Double(0.0),
            TypeCode::DateTime => Value::DateTime(chrono::Utc::now()),
            TypeCode::Duration => Value::Duration(TimeDelta::zero()),
            TypeCode::Array => Value::Array(Vec::new()),
            TypeCode::Map => Value::Map(ValueMap::new()),
            TypeCode::Enum | TypeCode::Object | TypeCode::Unknown => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes() {
        assert_eq!(TypeConverter::to_type_code(&Value::Null), TypeCode::Unknown);
        assert_eq!(TypeConverter::to_type_code(&Value::from("a")), TypeCode::String);
        assert_eq!(TypeConverter::to_type_code(&Value::from(vec![1])), TypeCode::Array);
    }

    #[test]
    fn converts_by_code() {
        assert_eq!(
            TypeConverter::to_nullable_type(TypeCode::Long, &Value::from("123")),
            Some(Value::Long(123))
        );
        assert_eq!(
            TypeConverter::to_nullable_type(TypeCode::String, &Value::from(123)),
            Some(Value::from("123"))
        );
        assert_eq!(TypeConverter::to_nullable_type(TypeCode::Integer, &Value::from("x")), None);
        assert_eq!(TypeConverter::to_nullable_type(TypeCode::Object, &Value::Null), None);
    }

    #[test]
    fn zero_and_default() {
        assert_eq!(TypeConverter::to_type(TypeCode::Integer, &Value::from("x")), Value::Integer(0));
        assert_eq!(TypeConverter::to_type(TypeCode::Array, &Value::Null), Value::Array(vec![]));
        assert_eq!(
            TypeConverter::to_type_with_default(TypeCode::Boolean, &Value::from("x"), Value::from(true)),
            Value::from(true)
        );
    }

    #[test]
    fn names() {
        assert_eq!(TypeConverter::to_string(TypeCode::DateTime), "datetime");
        assert_eq!(TypeConverter::to_string(TypeCode::Unknown), "unknown");
    }
}
