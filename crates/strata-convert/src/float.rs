//! Float and double conversions
//!
//! `Float` and `Double` behave identically apart from precision.

use crate::value::Value;

/// Converts values to `f64`
#[derive(Debug, Clone, Copy)]
pub struct DoubleConverter;

impl DoubleConverter {
    /// Convert, or `None` when not convertible
    ///
    /// # Examples
    /// ```
    /// # use strata_convert::{DoubleConverter, Value};
    /// assert_eq!(DoubleConverter::to_nullable_double(&Value::from("1.5")), Some(1.5));
    /// assert_eq!(DoubleConverter::to_nullable_double(&Value::from(true)), Some(1.0));
    /// assert_eq!(DoubleConverter::to_nullable_double(&Value::from("x")), None);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_nullable_double(value: &Value) -> Option<f64> {
        match value {
            Value::Boolean(v) => Some(if *v { 1.0 } else { 0.0 }),
            Value::Integer(v) => Some(f64::from(*v)),
            Value::Long(v) => Some(*v as f64),
            Value::Float(v) => Some(f64::from(*v)),
            Value::Double(v) => Some(*v),
            Value::DateTime(v) => Some(v.timestamp_millis() as f64),
            Value::Duration(v) => Some(v.num_milliseconds() as f64),
            Value::Enum(v) => Some(v.ordinal as f64),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Convert, or `0.0` when not convertible
    #[inline]
    #[must_use]
    pub fn to_double(value: &Value) -> f64 {
        Self::to_double_with_default(value, 0.0)
    }

    /// Convert, or `default` when not convertible
    #[inline]
    #[must_use]
    pub fn to_double_with_default(value: &Value, default: f64) -> f64 {
        Self::to_nullable_double(value).unwrap_or(default)
    }
}

/// Converts values to `f32`
#[derive(Debug, Clone, Copy)]
pub struct FloatConverter;

impl FloatConverter {
    /// Convert, or `None` when not convertible
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_nullable_float(value: &Value) -> Option<f32> {
        match value {
            Value::Float(v) => Some(*v),
            other => DoubleConverter::to_nullable_double(other).map(|v| v as f32),
        }
    }

    /// Convert, or `0.0` when not convertible
    #[inline]
    #[must_use]
    pub fn to_float(value: &Value) -> f32 {
        Self::to_float_with_default(value, 0.0)
    }

    /// Convert, or `default` when not convertible
    #[inline]
    #[must_use]
    pub fn to_float_with_default(value: &Value, default: f32) -> f32 {
        Self::to_nullable_float(value).unwrap_or(default)
    }
}
