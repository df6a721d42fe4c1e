//! Base schema and the validation capability
//!
//! Every schema validates in three steps: a `Null` value is reported when
//! required and otherwise skipped; attached rules run in order; composite
//! schemas then descend into children. Results accumulate in one buffer in
//! depth-first, left-to-right order.

use crate::rules::Rule;
use crate::validation_exception::ValidationException;
use crate::validation_result::{ValidationResult, ValidationResultType};
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;
use strata_convert::{TypeCode, TypeConverter, TypeMatcher, Value};

/// Validation capability shared by all schemas
pub trait Validate: Debug + Send + Sync {
    /// Validate `value` found at `path`, appending to `results`
    fn perform_validation(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>);

    /// Validate a root value
    fn validate(&self, value: &Value) -> Vec<ValidationResult> {
        let mut results = Vec::new();
        self.perform_validation("", value, &mut results);
        results
    }

    /// Validate and wrap failures into an exception
    fn validate_and_return_exception(
        &self,
        correlation_id: Option<&str>,
        value: &Value,
        strict: bool,
    ) -> Option<ValidationException> {
        ValidationException::from_results(correlation_id, self.validate(value), strict)
    }

    /// Validate and fail with an exception
    ///
    /// # Errors
    ///
    /// A [`ValidationException`] holding every result when any is an error,
    /// or a warning while `strict`.
    fn validate_and_throw_exception(
        &self,
        correlation_id: Option<&str>,
        value: &Value,
        strict: bool,
    ) -> Result<(), ValidationException> {
        ValidationException::throw_exception_if_needed(correlation_id, self.validate(value), strict)
    }
}

/// Expected type of a property, element or map entry
#[derive(Clone, Default)]
pub enum ValueType {
    /// Anything is accepted
    #[default]
    Any,
    /// A type code, matched with numeric widening
    Code(TypeCode),
    /// A type name such as `"string"`, `"object"` or `"Person[]"`
    Name(String),
    /// A nested schema validated at the same path
    Schema(Arc<dyn Validate>),
}

impl ValueType {
    /// Wrap a nested schema
    #[must_use]
    pub fn schema(schema: impl Validate + 'static) -> Self {
        Self::Schema(Arc::new(schema))
    }

    /// Label used in messages
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Any => "any".to_string(),
            Self::Code(code) => TypeConverter::to_string(*code).to_string(),
            Self::Name(name) => name.clone(),
            Self::Schema(_) => "schema".to_string(),
        }
    }
}

impl Debug for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema(schema) => f.debug_tuple("Schema").field(schema).finish(),
            other => f.write_str(&other.label()),
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<TypeCode> for ValueType {
    fn from(code: TypeCode) -> Self {
        Self::Code(code)
    }
}

impl From<&str> for ValueType {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ValueType {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Arc<dyn Validate>> for ValueType {
    fn from(schema: Arc<dyn Validate>) -> Self {
        Self::Schema(schema)
    }
}

/// Path of a child: `child` at the root, `parent.child` below it
pub(crate) fn child_path(path: &str, child: &str) -> String {
    if path.is_empty() {
        child.to_string()
    } else {
        format!("{path}.{child}")
    }
}

/// Name used in messages: the path, or `value` at the root
pub(crate) fn display_name(path: &str) -> &str {
    if path.is_empty() {
        "value"
    } else {
        path
    }
}

/// Base schema: a required flag and a list of rules
///
/// # Example
/// ```rust
/// use strata_convert::Value;
/// use strata_validate::{Schema, Validate, ValueComparisonRule};
///
/// let schema = Schema::new().with_rule(ValueComparisonRule::new("EQ", 1));
/// let results = schema.validate(&Value::from(2));
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].code(), "BAD_VALUE");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Schema {
    required: bool,
    rules: Vec<Arc<dyn Rule>>,
}

impl Schema {
    /// Optional schema without rules
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schema with explicit settings
    #[must_use]
    pub fn with(required: bool, rules: Vec<Arc<dyn Rule>>) -> Self {
        Self { required, rules }
    }

    /// Check whether `Null` is reported
    #[inline]
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Attached rules in order
    #[inline]
    #[must_use]
    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    /// Report `Null`
    #[must_use]
    pub fn make_required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Accept `Null`
    #[must_use]
    pub fn make_optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Attach a rule
    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Attach several rules
    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Arc<dyn Rule>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Null check and rules, reporting rule results against `owner`
    pub fn validate_base(
        &self,
        owner: &dyn Validate,
        path: &str,
        value: &Value,
        results: &mut Vec<ValidationResult>,
    ) {
        if value.is_null() {
            if self.required {
                let name = display_name(path);
                results.push(ValidationResult::new(
                    path,
                    ValidationResultType::Error,
                    "VALUE_IS_NULL",
                    format!("{name} must not be null"),
                    "NOT NULL",
                    Value::Null,
                ));
            }
            return;
        }
        for rule in &self.rules {
            rule.validate(path, owner, value, results);
        }
    }

    /// Check `value` against an expected type
    ///
    /// Nested schemas validate at the same path. `Null` always passes the
    /// type check.
    pub fn validate_type(path: &str, expected: &ValueType, value: &Value, results: &mut Vec<ValidationResult>) {
        let matched = match expected {
            ValueType::Any => return,
            ValueType::Schema(schema) => {
                schema.perform_validation(path, value, results);
                return;
            }
            _ if value.is_null() => return,
            ValueType::Code(code) => TypeMatcher::match_value_type(*code, value),
            ValueType::Name(name) => TypeMatcher::match_value_type_by_name(name, value),
        };
        if matched {
            return;
        }
        let name = display_name(path);
        let actual = TypeConverter::to_type_code(value);
        results.push(ValidationResult::new(
            path,
            ValidationResultType::Error,
            "TYPE_MISMATCH",
            format!("{name} type must be {} but found {}", expected.label(), TypeConverter::to_string(actual)),
            expected.label(),
            TypeConverter::to_string(actual),
        ));
    }
}

impl Validate for Schema {
    fn perform_validation(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        self.validate_base(self, path, value, results);
    }
}

/// Builder methods that forward to an embedded `base: Schema`
macro_rules! schema_builders {
    () => {
        /// Check whether `Null` is reported
        #[inline]
        #[must_use]
        pub fn is_required(&self) -> bool {
            self.base.is_required()
        }

        /// Attached rules in order
        #[inline]
        #[must_use]
        pub fn rules(&self) -> &[::std::sync::Arc<dyn $crate::rules::Rule>] {
            self.base.rules()
        }

        /// Report `Null`
        #[must_use]
        pub fn make_required(mut self) -> Self {
            self.base = self.base.make_required();
            self
        }

        /// Accept `Null`
        #[must_use]
        pub fn make_optional(mut self) -> Self {
            self.base = self.base.make_optional();
            self
        }

        /// Attach a rule
        #[must_use]
        pub fn with_rule(mut self, rule: impl $crate::rules::Rule + 'static) -> Self {
            self.base = self.base.with_rule(rule);
            self
        }

        /// Attach several rules
        #[must_use]
        pub fn with_rules(
            mut self,
            rules: impl IntoIterator<Item = ::std::sync::Arc<dyn $crate::rules::Rule>>,
        ) -> Self {
            self.base = self.base.with_rules(rules);
            self
        }
    };
}

pub(crate) use schema_builders;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn optional_null_is_silent() {
        assert!(Schema::new().validate(&Value::Null).is_empty());
    }

    #[test]
    fn required_null_is_reported_once() {
        let results = Schema::new().make_required().validate(&Value::Null);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code(), "VALUE_IS_NULL");
        assert_eq!(results[0].message(), "value must not be null");
        assert_eq!(results[0].expected(), &Value::from("NOT NULL"));
    }

    #[test]
    fn type_check_reports_labels() {
        let mut results = Vec::new();
        Schema::validate_type("age", &ValueType::from(TypeCode::Integer), &Value::from("abc"), &mut results);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code(), "TYPE_MISMATCH");
        assert_eq!(results[0].message(), "age type must be integer but found string");

        results.clear();
        Schema::validate_type("age", &ValueType::from(TypeCode::Long), &Value::from(5), &mut results);
        Schema::validate_type("age", &ValueType::from("object"), &Value::from(5), &mut results);
        Schema::validate_type("age", &ValueType::from(TypeCode::String), &Value::Null, &mut results);
        Schema::validate_type("when", &ValueType::from(TypeCode::DateTime), &Value::from("2020-01-01"), &mut results);
        assert!(results.is_empty());
    }
}
