use super::Rule;
use crate::schema::{display_name, Validate};
use crate::validation_result::{ValidationResult, ValidationResultType};
use std::sync::Arc;
use strata_convert::Value;

/// Passes when the wrapped rule fails
#[derive(Debug, Clone)]
pub struct NotRule {
    rule: Arc<dyn Rule>,
}

impl NotRule {
    /// Negate a rule
    #[must_use]
    pub fn new(rule: impl Rule + 'static) -> Self {
        Self { rule: Arc::new(rule) }
    }
}

impl Rule for NotRule {
    fn validate(&self, path: &str, schema: &dyn Validate, value: &Value, results: &mut Vec<ValidationResult>) {
        let mut local = Vec::new();
        self.rule.validate(path, schema, value, &mut local);
        if !local.is_empty() {
            return;
        }
        results.push(ValidationResult::new(
            path,
            ValidationResultType::Error,
            "NOT_FAILED",
            format!("Negative check for {} failed", display_name(path)),
            Value::Null,
            Value::Null,
        ));
    }
}
