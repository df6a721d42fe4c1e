//! Array conversions

use crate::value::Value;

/// Converts values to ordered sequences
///
/// Arrays pass through; any other non-null value becomes a single-element
/// sequence.
#[derive(Debug, Clone, Copy)]
pub struct ArrayConverter;

impl ArrayConverter {
    /// Convert, or `None` for the absent value
    #[must_use]
    pub fn to_nullable_array(value: &Value) -> Option<Vec<Value>> {
        match value {
            Value::Null => None,
            Value::Array(items) => Some(items.clone()),
            other => Some(vec![other.clone()]),
        }
    }

    /// Convert, or an empty sequence for the absent value
    #[inline]
    #[must_use]
    pub fn to_array(value: &Value) -> Vec<Value> {
        Self::to_nullable_array(value).unwrap_or_default()
    }

    /// Convert, or `default` for the absent value
    #[inline]
    #[must_use]
    pub fn to_array_with_default(value: &Value, default: Vec<Value>) -> Vec<Value> {
        Self::to_nullable_array(value).unwrap_or(default)
    }

    /// Convert, splitting delimited strings on `,`
    ///
    /// # Examples
    /// ```
    /// # use strata_convert::{ArrayConverter, Value};
    /// let items = ArrayConverter::list_to_array(&Value::from("a,b,c"));
    /// assert_eq!(items, vec![Value::from("a"), Value::from("b"), Value::from("c")]);
    /// ```
    #[must_use]
    pub fn list_to_array(value: &Value) -> Vec<Value> {
        match value {
            Value::String(text) => text.split(',').map(Value::from).collect(),
            other => Self::to_array(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrays_pass_through() {
        let value = Value::from(vec![1, 2, 3]);
        assert_eq!(ArrayConverter::to_nullable_array(&value), Some(vec![
            Value::from(1),
            Value::from(2),
            Value::from(3)
        ]));
    }

    #[test]
    fn scalars_are_wrapped() {
        assert_eq!(ArrayConverter::to_nullable_array(&Value::from(2)), Some(vec![Value::from(2)]));
        assert_eq!(ArrayConverter::to_nullable_array(&Value::Null), None);
        assert!(ArrayConverter::to_array(&Value::Null).is_empty());
    }

    #[test]
    fn list_to_array_splits_strings() {
        assert_eq!(ArrayConverter::list_to_array(&Value::from("1")), vec![Value::from("1")]);
        assert_eq!(ArrayConverter::list_to_array(&Value::from("a,,b")).len(), 3);
        assert!(ArrayConverter::list_to_array(&Value::Null).is_empty());
    }
}
