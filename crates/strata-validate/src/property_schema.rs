//! Schema of one named property

use crate::schema::{child_path, schema_builders, Schema, Validate, ValueType};
use crate::validation_result::ValidationResult;
use strata_convert::Value;

/// Validates the value of a named property inside an object
#[derive(Debug, Clone, Default)]
pub struct PropertySchema {
    base: Schema,
    name: String,
    value_type: ValueType,
}

impl PropertySchema {
    /// Optional property of the given type
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: impl Into<ValueType>) -> Self {
        Self {
            base: Schema::new(),
            name: name.into(),
            value_type: value_type.into(),
        }
    }

    /// Property name, matched case-insensitively
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expected type of the property value
    #[inline]
    #[must_use]
    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    schema_builders!();
}

impl Validate for PropertySchema {
    /// `path` is the path of the owning object
    fn perform_validation(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        let path = child_path(path, &self.name);
        self.base.validate_base(self, &path, value, results);
        Schema::validate_type(&path, &self.value_type, value, results);
    }
}
