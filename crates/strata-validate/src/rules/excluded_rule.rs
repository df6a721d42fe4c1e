use super::included_rule::IncludedRule;
use super::Rule;
use crate::schema::{display_name, Validate};
use crate::validation_result::{ValidationResult, ValidationResultType};
use strata_convert::{StringConverter, Value};

/// Forbids the value from equaling any of a fixed set
#[derive(Debug, Clone)]
pub struct ExcludedRule {
    values: Vec<Value>,
}

impl ExcludedRule {
    /// Forbid `values`
    #[must_use]
    pub fn new<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl Rule for ExcludedRule {
    fn validate(&self, path: &str, _schema: &dyn Validate, value: &Value, results: &mut Vec<ValidationResult>) {
        if !IncludedRule::contains(&self.values, value) {
            return;
        }
        let expected = Value::Array(self.values.clone());
        results.push(ValidationResult::new(
            path,
            ValidationResultType::Error,
            "VALUE_INCLUDED",
            format!(
                "{} must not be one of [{}]",
                display_name(path),
                StringConverter::to_string(&expected)
            ),
            expected,
            value.clone(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use pretty_assertions::assert_eq;

    fn check(rule: &ExcludedRule, value: Value) -> Vec<ValidationResult> {
        let mut results = Vec::new();
        rule.validate("status", &Schema::new(), &value, &mut results);
        results
    }

    #[test]
    fn listed_value_is_rejected() {
        let rule = ExcludedRule::new(["deleted", "archived"]);
        let results = check(&rule, Value::from("archived"));

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code(), "VALUE_INCLUDED");
        assert_eq!(results[0].path(), "status");
        assert_eq!(results[0].result_type(), ValidationResultType::Error);
        assert_eq!(results[0].expected(), &Value::from(vec!["deleted", "archived"]));
        assert_eq!(results[0].actual(), &Value::from("archived"));
    }

    #[test]
    fn unlisted_and_null_values_pass() {
        let rule = ExcludedRule::new(["deleted", "archived"]);
        assert!(check(&rule, Value::from("active")).is_empty());
        assert!(check(&rule, Value::Null).is_empty());

        let with_null = ExcludedRule::new(vec![Value::Null, Value::from(1)]);
        assert!(check(&with_null, Value::Null).is_empty());
    }

    #[test]
    fn comparison_matches_included_rule() {
        let rule = ExcludedRule::new([1, 2]);
        assert_eq!(check(&rule, Value::from(2.0))[0].code(), "VALUE_INCLUDED");
        assert_eq!(check(&rule, Value::from(1i64)).len(), 1);
        assert!(check(&rule, Value::from("2")).is_empty());

        let names = ExcludedRule::new(["Admin"]);
        assert!(check(&names, Value::from("admin")).is_empty());
        assert_eq!(check(&names, Value::from("Admin")).len(), 1);

        let listed = [Value::from(1), Value::from(2), Value::from("Admin")];
        let mixed = ExcludedRule::new(listed.clone());
        for value in [Value::from("2"), Value::from(2), Value::from("admin"), Value::Null] {
            let expected = usize::from(IncludedRule::contains(&listed, &value));
            assert_eq!(check(&mixed, value).len(), expected);
        }
    }
}
