use super::at_least_one_exist_rule::existing;
use super::{list_label, Rule};
use crate::schema::{display_name, Validate};
use crate::validation_result::{ValidationResult, ValidationResultType};
use strata_convert::Value;

/// Requires exactly one of the named properties to be set
#[derive(Debug, Clone)]
pub struct OnlyOneExistRule {
    properties: Vec<String>,
}

impl OnlyOneExistRule {
    /// Check the named properties
    #[must_use]
    pub fn new<S: Into<String>>(properties: impl IntoIterator<Item = S>) -> Self {
        Self {
            properties: properties.into_iter().map(Into::into).collect(),
        }
    }
}

impl Rule for OnlyOneExistRule {
    fn validate(&self, path: &str, _schema: &dyn Validate, value: &Value, results: &mut Vec<ValidationResult>) {
        let found = existing(value, &self.properties);
        let name = display_name(path);
        match found.len() {
            1 => {}
            0 => results.push(ValidationResult::new(
                path,
                ValidationResultType::Error,
                "VALUE_NULL",
                format!(
                    "{name} must have at least one property from {}",
                    list_label(&self.properties)
                ),
                self.properties.clone(),
                Value::Null,
            )),
            _ => results.push(ValidationResult::new(
                path,
                ValidationResultType::Error,
                "VALUE_ONLY_ONE",
                format!(
                    "{name} must have only one property from {}",
                    list_label(&self.properties)
                ),
                self.properties.clone(),
                found,
            )),
        }
    }
}
