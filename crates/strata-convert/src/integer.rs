//! Integer and long conversions
//!
//! Floats are truncated toward zero, booleans become 1/0, dates become
//! milliseconds since the Unix epoch and strings are parsed as decimal reals.

use crate::value::Value;

/// Converts values to `i64`
#[derive(Debug, Clone, Copy)]
pub struct LongConverter;

impl LongConverter {
    /// Convert, or `None` when not convertible
    #[must_use]
    pub fn to_nullable_long(value: &Value) -> Option<i64> {
        match value {
            Value::Boolean(v) => Some(i64::from(*v)),
            Value::Integer(v) => Some(i64::from(*v)),
            Value::Long(v) => Some(*v),
            Value::Float(v) => Self::from_real(f64::from(*v)),
            Value::Double(v) => Self::from_real(*v),
            Value::DateTime(v) => Some(v.timestamp_millis()),
            Value::Duration(v) => Some(v.num_milliseconds()),
            Value::Enum(v) => Some(v.ordinal),
            Value::String(s) => {
                let text = s.trim();
                text.parse::<i64>()
                    .ok()
                    .or_else(|| text.parse::<f64>().ok().and_then(Self::from_real))
            }
            _ => None,
        }
    }

    /// Convert, or `0` when not convertible
    #[inline]
    #[must_use]
    pub fn to_long(value: &Value) -> i64 {
        Self::to_long_with_default(value, 0)
    }

    /// Convert, or `default` when not convertible
    #[inline]
    #[must_use]
    pub fn to_long_with_default(value: &Value, default: i64) -> i64 {
        Self::to_nullable_long(value).unwrap_or(default)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn from_real(v: f64) -> Option<i64> {
        if !v.is_finite() {
            return None;
        }
        let truncated = v.trunc();
        if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
            return None;
        }
        Some(truncated as i64)
    }
}

/// Converts values to `i32`
///
/// Values outside the `i32` range are not convertible.
#[derive(Debug, Clone, Copy)]
pub struct IntegerConverter;

impl IntegerConverter {
    /// Convert, or `None` when not convertible
    ///
    /// # Examples
    /// ```
    /// # use strata_convert::{IntegerConverter, Value};
    /// assert_eq!(IntegerConverter::to_nullable_integer(&Value::from("123.456")), Some(123));
    /// assert_eq!(IntegerConverter::to_nullable_integer(&Value::from(true)), Some(1));
    /// assert_eq!(IntegerConverter::to_nullable_integer(&Value::from("abc")), None);
    /// ```
    #[must_use]
    pub fn to_nullable_integer(value: &Value) -> Option<i32> {
        LongConverter::to_nullable_long(value).and_then(|v| i32::try_from(v).ok())
    }

    /// Convert, or `0` when not convertible
    #[inline]
    #[must_use]
    pub fn to_integer(value: &Value) -> i32 {
        Self::to_integer_with_default(value, 0)
    }

    /// Convert, or `default` when not convertible
    #[inline]
    #[must_use]
    pub fn to_integer_with_default(value: &Value, default: i32) -> i32 {
        Self::to_nullable_integer(value).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn integer_from_strings() {
        assert_eq!(IntegerConverter::to_nullable_integer(&Value::from("123")), Some(123));
        assert_eq!(IntegerConverter::to_nullable_integer(&Value::from("123.456")), Some(123));
        assert_eq!(IntegerConverter::to_nullable_integer(&Value::from(" -7.9 ")), Some(-7));
        assert_eq!(IntegerConverter::to_nullable_integer(&Value::from("abc")), None);
        assert_eq!(IntegerConverter::to_nullable_integer(&Value::from("NaN")), None);
    }

    #[test]
    fn integer_from_other_types() {
        assert_eq!(IntegerConverter::to_nullable_integer(&Value::from(true)), Some(1));
        assert_eq!(IntegerConverter::to_nullable_integer(&Value::from(false)), Some(0));
        assert_eq!(IntegerConverter::to_nullable_integer(&Value::from(-2.7)), Some(-2));
        assert_eq!(IntegerConverter::to_nullable_integer(&Value::Null), None);
    }

    #[test]
    fn integer_rejects_out_of_range() {
        assert_eq!(IntegerConverter::to_nullable_integer(&Value::from(5_000_000_000_i64)), None);
        assert_eq!(LongConverter::to_nullable_long(&Value::from(5_000_000_000_i64)), Some(5_000_000_000));
        assert_eq!(LongConverter::to_nullable_long(&Value::from(1e300)), None);
    }

    #[test]
    fn long_from_date_is_epoch_millis() {
        let date = Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(LongConverter::to_nullable_long(&Value::from(date)), Some(1_514_764_800_000));
    }

    #[test]
    fn defaults() {
        assert_eq!(IntegerConverter::to_integer(&Value::from("x")), 0);
        assert_eq!(IntegerConverter::to_integer_with_default(&Value::from("x"), 9), 9);
        assert_eq!(LongConverter::to_long_with_default(&Value::from("5"), 9), 5);
    }
}
