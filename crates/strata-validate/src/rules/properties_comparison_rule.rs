use super::Rule;
use crate::object_comparator::ObjectComparator;
use crate::schema::{display_name, Validate};
use crate::validation_result::{ValidationResult, ValidationResultType};
use strata_convert::Value;
use strata_reflect::ObjectReader;

/// Compares two properties of the same value
#[derive(Debug, Clone)]
pub struct PropertiesComparisonRule {
    property1: String,
    operation: String,
    property2: String,
}

impl PropertiesComparisonRule {
    /// Require `property1 <operation> property2`
    #[must_use]
    pub fn new(property1: &str, operation: &str, property2: &str) -> Self {
        Self {
            property1: property1.to_string(),
            operation: operation.to_string(),
            property2: property2.to_string(),
        }
    }
}

impl Rule for PropertiesComparisonRule {
    fn validate(&self, path: &str, _schema: &dyn Validate, value: &Value, results: &mut Vec<ValidationResult>) {
        let left = ObjectReader::get_property(value, &self.property1).unwrap_or_default();
        let right = ObjectReader::get_property(value, &self.property2).unwrap_or_default();
        if ObjectComparator::compare(&left, &self.operation, &right) {
            return;
        }
        results.push(ValidationResult::new(
            path,
            ValidationResultType::Error,
            "PROPERTIES_NOT_MATCH",
            format!(
                "{} must have {} {} {}",
                display_name(path),
                self.property1,
                self.operation,
                self.property2
            ),
            right,
            left,
        ));
    }
}
