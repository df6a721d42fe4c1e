use super::Rule;
use crate::object_comparator::ObjectComparator;
use crate::schema::{display_name, Validate};
use crate::validation_result::{ValidationResult, ValidationResultType};
use strata_convert::{StringConverter, Value};

/// Compares the value with a constant
///
/// # Example
/// ```rust
/// use strata_convert::Value;
/// use strata_validate::{Schema, Validate, ValueComparisonRule};
///
/// let results = Schema::new()
///     .with_rule(ValueComparisonRule::new("EQ", 1))
///     .validate(&Value::from(2));
/// assert_eq!(results[0].message(), "value must EQ 1 but found 2");
/// assert_eq!(results[0].expected(), &Value::from("EQ 1"));
/// assert_eq!(results[0].actual(), &Value::from(2));
/// ```
#[derive(Debug, Clone)]
pub struct ValueComparisonRule {
    operation: String,
    value: Value,
}

impl ValueComparisonRule {
    /// Compare with `value` using `operation` (see [`ObjectComparator`])
    #[must_use]
    pub fn new(operation: &str, value: impl Into<Value>) -> Self {
        Self {
            operation: operation.to_string(),
            value: value.into(),
        }
    }
}

impl Rule for ValueComparisonRule {
    fn validate(&self, path: &str, _schema: &dyn Validate, value: &Value, results: &mut Vec<ValidationResult>) {
        if ObjectComparator::compare(value, &self.operation, &self.value) {
            return;
        }
        let expected = format!("{} {}", self.operation, StringConverter::to_string(&self.value));
        results.push(ValidationResult::new(
            path,
            ValidationResultType::Error,
            "BAD_VALUE",
            format!(
                "{} must {expected} but found {}",
                display_name(path),
                StringConverter::to_string(value)
            ),
            expected.as_str(),
            value.clone(),
        ));
    }
}
