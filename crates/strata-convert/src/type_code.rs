//! Canonical type tags
//!
//! [`TypeCode`] classifies every [`Value`](crate::Value) variant and every
//! type name accepted by schemas.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Closed enumeration of portable type tags
///
/// Discriminants are stable for the lifetime of the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum TypeCode {
    /// Absent or unclassifiable value
    #[default]
    Unknown = 0,
    /// Text
    String = 1,
    /// Boolean flag
    Boolean = 2,
    /// 32-bit signed integer
    Integer = 3,
    /// 64-bit signed integer
    Long = 4,
    /// 32-bit float
    Float = 5,
    /// 64-bit float
    Double = 6,
    /// Zone-aware instant
    DateTime = 7,
    /// Time span
    Duration = 8,
    /// User object exposing properties
    Object = 9,
    /// Named enumeration member
    Enum = 10,
    /// Ordered sequence
    Array = 11,
    /// String-keyed mapping
    Map = 12,
}

impl TypeCode {
    /// Lowercase name of the type
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::DateTime => "datetime",
            Self::Duration => "duration",
            Self::Object => "object",
            Self::Enum => "enum",
            Self::Array => "array",
            Self::Map => "map",
        }
    }

    /// Resolve a type name to its code
    ///
    /// Names are case-insensitive. Accepted aliases: `int`, `bool`, `date`,
    /// `timespan`, `dict`, `dictionary`, `list` and any `T[]` form (array).
    ///
    /// # Examples
    /// ```
    /// # use strata_convert::TypeCode;
    /// assert_eq!(TypeCode::from_name("Int"), Some(TypeCode::Integer));
    /// assert_eq!(TypeCode::from_name("string[]"), Some(TypeCode::Array));
    /// assert_eq!(TypeCode::from_name("widget"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        if name.ends_with("[]") {
            return Some(Self::Array);
        }
        let code = match name.as_str() {
            "object" => Self::Object,
            "int" | "integer" => Self::Integer,
            "long" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            "string" => Self::String,
            "bool" | "boolean" => Self::Boolean,
            "date" | "datetime" => Self::DateTime,
            "timespan" | "duration" => Self::Duration,
            "enum" => Self::Enum,
            "map" | "dict" | "dictionary" => Self::Map,
            "array" | "list" => Self::Array,
            _ => return None,
        };
        Some(code)
    }

    /// Integer, Long, Float or Double
    #[inline]
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Long | Self::Float | Self::Double)
    }

    /// Object, Array or Map
    #[inline]
    #[must_use]
    pub fn is_complex(self) -> bool {
        matches!(self, Self::Object | Self::Array | Self::Map)
    }

    /// String, Enum, Boolean, numeric, DateTime or Duration
    #[inline]
    #[must_use]
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::String | Self::Enum | Self::Boolean | Self::DateTime | Self::Duration
        ) || self.is_numeric()
    }
}

impl Display for TypeCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
