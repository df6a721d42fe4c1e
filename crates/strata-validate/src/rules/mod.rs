//! Validation rules
//!
//! A rule inspects a non-null value and appends zero or more results.
//! Rules never fail; composite rules decide which results of their
//! children to keep.

mod and_rule;
mod at_least_one_exist_rule;
mod excluded_rule;
mod included_rule;
mod not_rule;
mod only_one_exist_rule;
mod or_rule;
mod properties_comparison_rule;
mod value_comparison_rule;

pub use and_rule::AndRule;
pub use at_least_one_exist_rule::AtLeastOneExistRule;
pub use excluded_rule::ExcludedRule;
pub use included_rule::IncludedRule;
pub use not_rule::NotRule;
pub use only_one_exist_rule::OnlyOneExistRule;
pub use or_rule::OrRule;
pub use properties_comparison_rule::PropertiesComparisonRule;
pub use value_comparison_rule::ValueComparisonRule;

use crate::schema::Validate;
use crate::validation_result::ValidationResult;
use std::fmt::Debug;
use std::sync::Arc;
use strata_convert::Value;

/// A check attached to a schema
pub trait Rule: Debug + Send + Sync {
    /// Check `value` at `path`, appending findings to `results`
    ///
    /// `schema` is the schema the rule is attached to.
    fn validate(&self, path: &str, schema: &dyn Validate, value: &Value, results: &mut Vec<ValidationResult>);
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn validate(&self, path: &str, schema: &dyn Validate, value: &Value, results: &mut Vec<ValidationResult>) {
        (**self).validate(path, schema, value, results);
    }
}

/// Render names or values as `[a, b, c]` for messages
pub(crate) fn list_label<T: AsRef<str>>(items: &[T]) -> String {
    let joined = items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
    format!("[{joined}]")
}
