use super::Rule;
use crate::object_comparator::ObjectComparator;
use crate::schema::{display_name, Validate};
use crate::validation_result::{ValidationResult, ValidationResultType};
use strata_convert::{StringConverter, Value};

/// Requires the value to equal one of a fixed set
///
/// `Null` entries in the set never match.
#[derive(Debug, Clone)]
pub struct IncludedRule {
    values: Vec<Value>,
}

impl IncludedRule {
    /// Allow only `values`
    #[must_use]
    pub fn new<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn contains(values: &[Value], value: &Value) -> bool {
        !value.is_null()
            && values
                .iter()
                .any(|item| !item.is_null() && ObjectComparator::are_equal(value, item))
    }
}

impl Rule for IncludedRule {
    fn validate(&self, path: &str, _schema: &dyn Validate, value: &Value, results: &mut Vec<ValidationResult>) {
        if Self::contains(&self.values, value) {
            return;
        }
        let expected = Value::Array(self.values.clone());
        results.push(ValidationResult::new(
            path,
            ValidationResultType::Error,
            "VALUE_NOT_INCLUDED",
            format!(
                "{} must be one of [{}]",
                display_name(path),
                StringConverter::to_string(&expected)
            ),
            expected,
            value.clone(),
        ));
    }
}
