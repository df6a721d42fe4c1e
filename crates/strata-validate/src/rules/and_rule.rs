use super::Rule;
use crate::schema::Validate;
use crate::validation_result::ValidationResult;
use std::sync::Arc;
use strata_convert::Value;

/// Runs every sub-rule and keeps all of their results
#[derive(Debug, Clone, Default)]
pub struct AndRule {
    rules: Vec<Arc<dyn Rule>>,
}

impl AndRule {
    /// Combine rules
    #[must_use]
    pub fn new(rules: Vec<Arc<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Add a sub-rule
    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }
}

impl Rule for AndRule {
    fn validate(&self, path: &str, schema: &dyn Validate, value: &Value, results: &mut Vec<ValidationResult>) {
        for rule in &self.rules {
            rule.validate(path, schema, value, results);
        }
    }
}
