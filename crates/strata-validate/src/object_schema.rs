//! Schema of objects and maps with named properties

use crate::property_schema::PropertySchema;
use crate::schema::{child_path, display_name, schema_builders, Schema, Validate, ValueType};
use crate::validation_result::{ValidationResult, ValidationResultType};
use strata_convert::Value;
use strata_reflect::ObjectReader;

/// Validates declared properties and reports undeclared ones
///
/// Declared properties are matched case-insensitively against the
/// properties of the value, each consuming the first match. Properties left
/// over produce an `UNEXPECTED_PROPERTY` warning unless undefined properties
/// are allowed.
///
/// # Example
/// ```rust
/// use serde_json::json;
/// use strata_convert::{TypeCode, Value};
/// use strata_validate::{ObjectSchema, Validate};
///
/// let schema = ObjectSchema::new()
///     .with_required_property("id", TypeCode::String)
///     .with_optional_property("count", TypeCode::Integer);
///
/// assert!(schema.validate(&Value::from(json!({"ID": "1", "count": 2}))).is_empty());
/// assert_eq!(schema.validate(&Value::from(json!({}))).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    base: Schema,
    properties: Vec<PropertySchema>,
    allow_undefined: bool,
}

impl ObjectSchema {
    /// Optional schema with no declared properties
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declared properties in order
    #[inline]
    #[must_use]
    pub fn properties(&self) -> &[PropertySchema] {
        &self.properties
    }

    /// Check whether undeclared properties pass silently
    #[inline]
    #[must_use]
    pub fn is_undefined_allowed(&self) -> bool {
        self.allow_undefined
    }

    /// Allow or report undeclared properties
    #[must_use]
    pub fn allow_undefined(mut self, allow: bool) -> Self {
        self.allow_undefined = allow;
        self
    }

    /// Declare a property
    #[must_use]
    pub fn with_property(mut self, property: PropertySchema) -> Self {
        self.properties.push(property);
        self
    }

    /// Declare a required property
    #[must_use]
    pub fn with_required_property(self, name: &str, value_type: impl Into<ValueType>) -> Self {
        self.with_property(PropertySchema::new(name, value_type).make_required())
    }

    /// Declare an optional property
    #[must_use]
    pub fn with_optional_property(self, name: &str, value_type: impl Into<ValueType>) -> Self {
        self.with_property(PropertySchema::new(name, value_type))
    }

    schema_builders!();
}

impl Validate for ObjectSchema {
    fn perform_validation(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        self.base.validate_base(self, path, value, results);
        if value.is_null() {
            return;
        }

        let mut properties = ObjectReader::get_properties(value);
        for property in &self.properties {
            let wanted = property.name().to_lowercase();
            let found = properties
                .keys()
                .position(|key| key.to_lowercase() == wanted);
            match found.and_then(|index| properties.shift_remove_index(index)) {
                Some((_, property_value)) => property.perform_validation(path, &property_value, results),
                None => property.perform_validation(path, &Value::Null, results),
            }
        }

        if self.allow_undefined {
            return;
        }
        let name = display_name(path);
        for key in properties.keys() {
            results.push(ValidationResult::new(
                &child_path(path, key),
                ValidationResultType::Warning,
                "UNEXPECTED_PROPERTY",
                format!("{name} contains unexpected property {key}"),
                Value::Null,
                key.as_str(),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use strata_convert::TypeCode;

    fn person_schema() -> ObjectSchema {
        ObjectSchema::new()
            .with_required_property("id", TypeCode::String)
            .with_required_property("name", TypeCode::String)
    }

    #[test]
    fn reports_only_undeclared_properties() {
        let value = Value::from(json!({"id": "1", "name": "ABC", "extra": "x"}));
        let results = person_schema().validate(&value);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code(), "UNEXPECTED_PROPERTY");
        assert_eq!(results[0].path(), "extra");
        assert_eq!(results[0].result_type(), ValidationResultType::Warning);
        assert_eq!(results[0].actual(), &Value::from("extra"));
    }

    #[test]
    fn missing_required_properties_use_child_paths() {
        let results = person_schema().validate(&Value::from(json!({"Name": 5})));
        let summary: Vec<(&str, &str)> = results.iter().map(|r| (r.path(), r.code())).collect();
        assert_eq!(summary, vec![("id", "VALUE_IS_NULL"), ("name", "TYPE_MISMATCH")]);
    }

    #[test]
    fn undefined_properties_can_be_allowed() {
        let value = Value::from(json!({"id": "1", "name": "ABC", "extra": "x"}));
        assert!(person_schema().allow_undefined(true).validate(&value).is_empty());
    }

    #[test]
    fn nested_schemas_extend_the_path() {
        let schema = ObjectSchema::new().with_required_property(
            "address",
            ValueType::schema(ObjectSchema::new().with_required_property("city", TypeCode::String)),
        );
        let results = schema.validate(&Value::from(json!({"address": {"zip": 1}})));
        let paths: Vec<&str> = results.iter().map(ValidationResult::path).collect();
        assert_eq!(paths, vec!["address.city", "address.zip"]);
    }
}
