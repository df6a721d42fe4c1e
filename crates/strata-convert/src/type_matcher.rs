//! Type matching
//!
//! Decides whether an observed type satisfies an expected one. Matching is
//! permissive: numeric types widen into one another, and a date-time
//! expectation accepts strings that parse as dates.

use crate::datetime::DateTimeConverter;
use crate::type_code::TypeCode;
use crate::value::Value;

/// Matches expected type codes or type names against observed values
#[derive(Debug, Clone, Copy)]
pub struct TypeMatcher;

impl TypeMatcher {
    /// Match an expected code against an observed code
    ///
    /// An absent expectation matches everything.
    ///
    /// # Examples
    /// ```
    /// # use strata_convert::{TypeCode, TypeMatcher};
    /// assert!(TypeMatcher::match_type(TypeCode::Long, TypeCode::Integer, None));
    /// assert!(TypeMatcher::match_type(None::<TypeCode>, TypeCode::Map, None));
    /// assert!(!TypeMatcher::match_type(TypeCode::String, TypeCode::Integer, None));
    /// ```
    #[must_use]
    pub fn match_type(
        expected: impl Into<Option<TypeCode>>,
        actual: TypeCode,
        actual_value: Option<&Value>,
    ) -> bool {
        let Some(expected) = expected.into() else {
            return true;
        };
        if expected == actual {
            return true;
        }
        if expected.is_numeric() && actual.is_numeric() {
            return true;
        }
        if expected == TypeCode::DateTime && actual == TypeCode::String {
            return actual_value.is_some_and(|v| DateTimeConverter::to_nullable_datetime(v).is_some());
        }
        false
    }

    /// Match an expected type name against an observed code
    ///
    /// Names are case-insensitive; `object` matches everything and any
    /// `T[]` form matches arrays without checking elements. Unknown names
    /// never match.
    #[must_use]
    pub fn match_type_by_name(expected: &str, actual: TypeCode, actual_value: Option<&Value>) -> bool {
        let name = expected.trim().to_lowercase();
        if name == "object" {
            return true;
        }
        if name.ends_with("[]") {
            return actual == TypeCode::Array;
        }
        TypeCode::from_name(&name).is_some_and(|code| Self::match_type(code, actual, actual_value))
    }

    /// Match an expected code against a value
    #[inline]
    #[must_use]
    pub fn match_value_type(expected: impl Into<Option<TypeCode>>, value: &Value) -> bool {
        Self::match_type(expected, value.type_code(), Some(value))
    }

    /// Match an expected type name against a value
    #[inline]
    #[must_use]
    pub fn match_value_type_by_name(expected: &str, value: &Value) -> bool {
        Self::match_type_by_name(expected, value.type_code(), Some(value))
    }
}
