//! Boolean conversions

use crate::value::Value;

/// Converts values to `bool`
///
/// Strings are trimmed and compared case-insensitively against
/// `1, true, t, yes, y` and `0, false, f, no, n`. Numbers are `true` when
/// non-zero.
#[derive(Debug, Clone, Copy)]
pub struct BooleanConverter;

impl BooleanConverter {
    /// Convert, or `None` when not convertible
    ///
    /// # Examples
    /// ```
    /// # use strata_convert::{BooleanConverter, Value};
    /// assert_eq!(BooleanConverter::to_nullable_boolean(&Value::from("yes")), Some(true));
    /// assert_eq!(BooleanConverter::to_nullable_boolean(&Value::from("off")), None);
    /// assert_eq!(BooleanConverter::to_nullable_boolean(&Value::from(0)), Some(false));
    /// ```
    #[must_use]
    pub fn to_nullable_boolean(value: &Value) -> Option<bool> {
        match value {
            Value::Boolean(v) => Some(*v),
            Value::Integer(v) => Some(*v != 0),
            Value::Long(v) => Some(*v != 0),
            Value::Float(v) => Some(*v != 0.0),
            Value::Double(v) => Some(*v != 0.0),
            Value::Duration(v) => Some(!v.is_zero()),
            Value::String(s) => Self::parse(s),
            _ => None,
        }
    }

    /// Convert, or `false` when not convertible
    #[inline]
    #[must_use]
    pub fn to_boolean(value: &Value) -> bool {
        Self::to_boolean_with_default(value, false)
    }

    /// Convert, or `default` when not convertible
    #[inline]
    #[must_use]
    pub fn to_boolean_with_default(value: &Value, default: bool) -> bool {
        Self::to_nullable_boolean(value).unwrap_or(default)
    }

    fn parse(text: &str) -> Option<bool> {
        match text.trim().to_lowercase().as_str() {
            "1" | "true" | "t" | "yes" | "y" => Some(true),
            "0" | "false" | "f" | "no" | "n" => Some(false),
            _ => None,
        }
    }
}
