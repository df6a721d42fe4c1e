use super::Rule;
use crate::schema::Validate;
use crate::validation_result::ValidationResult;
use std::sync::Arc;
use strata_convert::Value;

/// Passes when any sub-rule passes
///
/// Every sub-rule runs. When one of them produced no results, everything is
/// discarded; otherwise all collected results are kept.
#[derive(Debug, Clone, Default)]
pub struct OrRule {
    rules: Vec<Arc<dyn Rule>>,
}

impl OrRule {
    /// Combine alternatives
    #[must_use]
    pub fn new(rules: Vec<Arc<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Add an alternative
    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }
}

impl Rule for OrRule {
    fn validate(&self, path: &str, schema: &dyn Validate, value: &Value, results: &mut Vec<ValidationResult>) {
        if self.rules.is_empty() {
            return;
        }
        let mut local = Vec::new();
        let mut any_passed = false;
        for rule in &self.rules {
            let before = local.len();
            rule.validate(path, schema, value, &mut local);
            any_passed |= local.len() == before;
        }
        if !any_passed {
            results.append(&mut local);
        }
    }
}
