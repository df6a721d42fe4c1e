//! Dynamic value variant
//!
//! [`Value`] is the heterogeneous slot stored by every Strata container.
//! `Null` is the absent sentinel; every other variant maps to exactly one
//! [`TypeCode`].

use crate::datetime::DateTimeConverter;
use crate::map::RecursiveMapConverter;
use crate::object::ObjectRef;
use crate::string::StringConverter;
use crate::type_code::TypeCode;
use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value as JsonValue;
use std::fmt::{self, Display, Formatter};

/// Insertion-ordered string-keyed map of values
pub type ValueMap = IndexMap<String, Value>;

/// Member of a user enumeration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumValue {
    /// Member name
    pub name: String,
    /// Member ordinal
    pub ordinal: i64,
}

impl EnumValue {
    /// Create enum member
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, ordinal: i64) -> Self {
        Self {
            name: name.into(),
            ordinal,
        }
    }
}

/// Heterogeneous dynamic value
///
/// `Clone` is shallow for [`Value::Object`] (the handle is shared); use
/// [`Value::deep_clone`] to copy objects as well.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value
    #[default]
    Null,
    /// Boolean flag
    Boolean(bool),
    /// 32-bit integer
    Integer(i32),
    /// 64-bit integer
    Long(i64),
    /// 32-bit float
    Float(f32),
    /// 64-bit float
    Double(f64),
    /// Text
    String(String),
    /// UTC instant
    DateTime(DateTime<Utc>),
    /// Time span
    Duration(TimeDelta),
    /// Enumeration member
    Enum(EnumValue),
    /// Ordered sequence
    Array(Vec<Value>),
    /// String-keyed mapping
    Map(ValueMap),
    /// Shared reflectable object
    Object(ObjectRef),
}

impl Value {
    /// Check for the absent sentinel
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Type tag of this value
    #[must_use]
    pub fn type_code(&self) -> TypeCode {
        match self {
            Self::Null => TypeCode::Unknown,
            Self::Boolean(_) => TypeCode::Boolean,
            Self::Integer(_) => TypeCode::Integer,
            Self::Long(_) => TypeCode::Long,
            Self::Float(_) => TypeCode::Float,
            Self::Double(_) => TypeCode::Double,
            Self::String(_) => TypeCode::String,
            Self::DateTime(_) => TypeCode::DateTime,
            Self::Duration(_) => TypeCode::Duration,
            Self::Enum(_) => TypeCode::Enum,
            Self::Array(_) => TypeCode::Array,
            Self::Map(_) => TypeCode::Map,
            Self::Object(_) => TypeCode::Object,
        }
    }

    /// Borrow string contents
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow array elements
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Mutably borrow array elements
    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow map entries
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Mutably borrow map entries
    #[inline]
    pub fn as_map_mut(&mut self) -> Option<&mut ValueMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow object handle
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Copy the value including every object reachable from it
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        match self {
            Self::Array(items) => Self::Array(items.iter().map(Self::deep_clone).collect()),
            Self::Map(map) => Self::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.deep_clone()))
                    .collect(),
            ),
            Self::Object(obj) => Self::Object(obj.deep_clone()),
            other => other.clone(),
        }
    }

    /// Identity of the referenced container, if the value is an object
    #[inline]
    #[must_use]
    pub fn identity(&self) -> Option<usize> {
        self.as_object().map(ObjectRef::id)
    }

    /// Convert into a `serde_json` tree
    ///
    /// Dates become ISO-8601 strings with millisecond precision, durations
    /// become milliseconds and objects become maps of their properties. An
    /// object reached again through its own properties becomes `null`.
    #[must_use]
    pub fn to_json_value(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::Duration(a), Self::Duration(b)) => a == b,
            (Self::Enum(a), Self::Enum(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&StringConverter::to_string(self))
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Boolean(v) => serializer.serialize_bool(*v),
            Self::Integer(v) => serializer.serialize_i32(*v),
            Self::Long(v) => serializer.serialize_i64(*v),
            Self::Float(v) => serializer.serialize_f32(*v),
            Self::Double(v) => serializer.serialize_f64(*v),
            Self::String(v) => serializer.serialize_str(v),
            Self::DateTime(v) => serializer.serialize_str(&DateTimeConverter::to_json_string(v)),
            Self::Duration(v) => serializer.serialize_i64(v.num_milliseconds()),
            Self::Enum(v) => serializer.serialize_str(&v.name),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => serialize_map(map, serializer),
            Self::Object(_) => serialize_map(&RecursiveMapConverter::to_map(self), serializer),
        }
    }
}

fn serialize_map<S: Serializer>(map: &ValueMap, serializer: S) -> Result<S::Ok, S::Error> {
    let mut out = serializer.serialize_map(Some(map.len()))?;
    for (key, value) in map {
        out.serialize_entry(key, value)?;
    }
    out.end()
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(Value::from)
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Boolean(b),
            JsonValue::Number(n) => {
                if let Some(v) = n.as_i64() {
                    i32::try_from(v).map_or(Self::Long(v), Self::Integer)
                } else if let Some(v) = n.as_u64() {
                    i64::try_from(v).map_or(Self::Double(v as f64), Self::Long)
                } else {
                    n.as_f64().map_or(Self::Null, Self::Double)
                }
            }
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(map) => Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Long(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::String(v.clone())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::DateTime(v)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Self::DateTime(v.with_timezone(&Utc))
    }
}

impl From<TimeDelta> for Value {
    fn from(v: TimeDelta) -> Self {
        Self::Duration(v)
    }
}

impl From<EnumValue> for Value {
    fn from(v: EnumValue) -> Self {
        Self::Enum(v)
    }
}

impl From<ValueMap> for Value {
    fn from(v: ValueMap) -> Self {
        Self::Map(v)
    }
}

impl From<ObjectRef> for Value {
    fn from(v: ObjectRef) -> Self {
        Self::Object(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn every_variant_has_one_type_code() {
        assert_eq!(Value::Null.type_code(), TypeCode::Unknown);
        assert_eq!(Value::from(true).type_code(), TypeCode::Boolean);
        assert_eq!(Value::from(1).type_code(), TypeCode::Integer);
        assert_eq!(Value::from(1_i64).type_code(), TypeCode::Long);
        assert_eq!(Value::from(1.0_f32).type_code(), TypeCode::Float);
        assert_eq!(Value::from(1.0).type_code(), TypeCode::Double);
        assert_eq!(Value::from("a").type_code(), TypeCode::String);
        assert_eq!(Value::from(Utc::now()).type_code(), TypeCode::DateTime);
        assert_eq!(Value::from(TimeDelta::zero()).type_code(), TypeCode::Duration);
        assert_eq!(Value::from(EnumValue::new("Red", 0)).type_code(), TypeCode::Enum);
        assert_eq!(Value::from(vec![1, 2]).type_code(), TypeCode::Array);
        assert_eq!(Value::Map(ValueMap::new()).type_code(), TypeCode::Map);
    }

    #[test]
    fn json_numbers_pick_narrowest_integer() {
        assert_eq!(Value::from(json!(5)), Value::Integer(5));
        assert_eq!(Value::from(json!(5_000_000_000_i64)), Value::Long(5_000_000_000));
        assert_eq!(Value::from(json!(1.5)), Value::Double(1.5));
    }

    #[test]
    fn serializes_dates_with_millisecond_utc() {
        let date = FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2020, 5, 1, 13, 0, 0)
            .unwrap();
        let value = Value::from(date);
        assert_eq!(value.to_json_value(), json!("2020-05-01T10:00:00.000Z"));
    }

    #[test]
    fn serializes_nested_values() {
        let mut map = ValueMap::new();
        map.insert("a".to_string(), Value::from(vec![Value::from(1), Value::Null]));
        map.insert("b".to_string(), Value::from("x"));
        assert_eq!(Value::Map(map).to_json_value(), json!({"a": [1, null], "b": "x"}));
    }

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::from("a"));
    }

    #[test]
    fn equality_is_variant_strict() {
        assert_ne!(Value::Integer(1), Value::Long(1));
        assert_eq!(Value::from(vec![1, 2]), Value::from(vec![1, 2]));
    }
}
