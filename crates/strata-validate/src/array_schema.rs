//! Schema of arrays

use crate::schema::{child_path, display_name, schema_builders, Schema, Validate, ValueType};
use crate::validation_result::{ValidationResult, ValidationResultType};
use strata_convert::{TypeCode, TypeConverter, Value};

/// Validates that a value is an array and checks every element's type
///
/// Element paths use the decimal index.
#[derive(Debug, Clone, Default)]
pub struct ArraySchema {
    base: Schema,
    value_type: ValueType,
}

impl ArraySchema {
    /// Optional array of the given element type
    #[must_use]
    pub fn new(value_type: impl Into<ValueType>) -> Self {
        Self {
            base: Schema::new(),
            value_type: value_type.into(),
        }
    }

    /// Expected type of every element
    #[inline]
    #[must_use]
    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    schema_builders!();
}

impl Validate for ArraySchema {
    fn perform_validation(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        self.base.validate_base(self, path, value, results);
        if value.is_null() {
            return;
        }

        match value {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    let element_path = child_path(path, &index.to_string());
                    Schema::validate_type(&element_path, &self.value_type, item, results);
                }
            }
            other => {
                let name = display_name(path);
                results.push(ValidationResult::new(
                    path,
                    ValidationResultType::Error,
                    "VALUE_ISNOT_ARRAY",
                    format!("{name} type must be List or Array"),
                    TypeConverter::to_string(TypeCode::Array),
                    TypeConverter::to_string(TypeConverter::to_type_code(other)),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn checks_every_element() {
        let schema = ArraySchema::new(TypeCode::Integer);
        assert!(schema.validate(&Value::from(json!([]))).is_empty());
        assert!(schema.validate(&Value::from(json!([1, 2.5, null]))).is_empty());

        let results = schema.validate(&Value::from(json!([1, "a", true])));
        let paths: Vec<&str> = results.iter().map(ValidationResult::path).collect();
        assert_eq!(paths, vec!["1", "2"]);
    }

    #[test]
    fn untyped_arrays_accept_anything() {
        let schema = ArraySchema::default();
        assert!(schema.validate(&Value::from(json!([1, "a", {"b": null}]))).is_empty());
    }

    #[test]
    fn rejects_non_arrays() {
        let results = ArraySchema::new(TypeCode::String).validate(&Value::from("abc"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code(), "VALUE_ISNOT_ARRAY");
        assert_eq!(results[0].actual(), &Value::from("string"));
    }
}
