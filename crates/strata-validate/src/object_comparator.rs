//! Value comparison by operator name

use regex::Regex;
use strata_convert::{DoubleConverter, StringConverter, Value};

/// Compares values with operators such as `EQ`, `<` or `LIKE`
///
/// Operators are case-insensitive:
///
/// | Operator | Aliases |
/// |---|---|
/// | equal | `=`, `==`, `EQ` |
/// | not equal | `!=`, `<>`, `NE` |
/// | less | `<`, `LT` |
/// | less or equal | `<=`, `LE` |
/// | greater | `>`, `GT` |
/// | greater or equal | `>=`, `GE` |
/// | regex match | `LIKE` |
///
/// Unknown operators compare false.
#[derive(Debug, Clone, Copy)]
pub struct ObjectComparator;

impl ObjectComparator {
    /// Compare `left` with `right` using `operation`
    ///
    /// # Examples
    /// ```
    /// # use strata_convert::Value;
    /// # use strata_validate::ObjectComparator;
    /// assert!(ObjectComparator::compare(&Value::from(1), "eq", &Value::from(1.0)));
    /// assert!(ObjectComparator::compare(&Value::from("10"), ">", &Value::from(9)));
    /// assert!(ObjectComparator::compare(&Value::Null, "<=", &Value::Null));
    /// assert!(!ObjectComparator::compare(&Value::Null, "<", &Value::from(1)));
    /// ```
    #[must_use]
    pub fn compare(left: &Value, operation: &str, right: &Value) -> bool {
        match operation.trim().to_uppercase().as_str() {
            "=" | "==" | "EQ" => Self::are_equal(left, right),
            "!=" | "<>" | "NE" => Self::are_not_equal(left, right),
            "<" | "LT" => Self::is_less(left, right),
            "<=" | "LE" => Self::are_equal(left, right) || Self::is_less(left, right),
            ">" | "GT" => Self::is_greater(left, right),
            ">=" | "GE" => Self::are_equal(left, right) || Self::is_greater(left, right),
            "LIKE" => Self::matches(left, right),
            _ => false,
        }
    }

    /// Null-safe equality; numbers compare by value across widths
    #[must_use]
    pub fn are_equal(left: &Value, right: &Value) -> bool {
        match (left.is_null(), right.is_null()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }
        if left.type_code().is_numeric() && right.type_code().is_numeric() {
            return DoubleConverter::to_nullable_double(left) == DoubleConverter::to_nullable_double(right);
        }
        left == right
    }

    /// Negation of [`are_equal`](Self::are_equal)
    #[inline]
    #[must_use]
    pub fn are_not_equal(left: &Value, right: &Value) -> bool {
        !Self::are_equal(left, right)
    }

    /// Numeric `left < right`; false when either side is not numeric
    #[must_use]
    pub fn is_less(left: &Value, right: &Value) -> bool {
        match (DoubleConverter::to_nullable_double(left), DoubleConverter::to_nullable_double(right)) {
            (Some(left), Some(right)) => left < right,
            _ => false,
        }
    }

    /// Numeric `left > right`; false when either side is not numeric
    #[must_use]
    pub fn is_greater(left: &Value, right: &Value) -> bool {
        match (DoubleConverter::to_nullable_double(left), DoubleConverter::to_nullable_double(right)) {
            (Some(left), Some(right)) => left > right,
            _ => false,
        }
    }

    /// Match the string form of `value` against the regex `pattern`
    ///
    /// The match is anchored at the start of the string only. An invalid
    /// pattern never matches.
    #[must_use]
    pub fn matches(value: &Value, pattern: &Value) -> bool {
        match (value.is_null(), pattern.is_null()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }
        let text = StringConverter::to_string(value);
        let pattern = StringConverter::to_string(pattern);
        match Regex::new(&format!("^(?:{pattern})")) {
            Ok(regex) => regex.is_match(&text),
            Err(err) => {
                tracing::trace!(%pattern, %err, "invalid LIKE pattern");
                false
            }
        }
    }
}
