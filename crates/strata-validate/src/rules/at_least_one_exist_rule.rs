use super::{list_label, Rule};
use crate::schema::{display_name, Validate};
use crate::validation_result::{ValidationResult, ValidationResultType};
use strata_convert::Value;
use strata_reflect::ObjectReader;

/// Requires at least one of the named properties to be set
#[derive(Debug, Clone)]
pub struct AtLeastOneExistRule {
    properties: Vec<String>,
}

impl AtLeastOneExistRule {
    /// Check the named properties
    #[must_use]
    pub fn new<S: Into<String>>(properties: impl IntoIterator<Item = S>) -> Self {
        Self {
            properties: properties.into_iter().map(Into::into).collect(),
        }
    }
}

/// Names of the properties that hold a non-null value
pub(super) fn existing<'a>(value: &Value, properties: &'a [String]) -> Vec<&'a str> {
    properties
        .iter()
        .filter(|name| ObjectReader::get_property(value, name).is_some_and(|found| !found.is_null()))
        .map(String::as_str)
        .collect()
}

impl Rule for AtLeastOneExistRule {
    fn validate(&self, path: &str, _schema: &dyn Validate, value: &Value, results: &mut Vec<ValidationResult>) {
        if !existing(value, &self.properties).is_empty() {
            return;
        }
        results.push(ValidationResult::new(
            path,
            ValidationResultType::Error,
            "VALUE_NULL",
            format!(
                "{} must have at least one property from {}",
                display_name(path),
                list_label(&self.properties)
            ),
            self.properties.clone(),
            Value::Null,
        ));
    }
}
