//! Schema of maps

use crate::schema::{child_path, display_name, schema_builders, Schema, Validate, ValueType};
use crate::validation_result::{ValidationResult, ValidationResultType};
use strata_convert::{TypeCode, TypeConverter, Value};

/// Validates that a value is a map and checks every key and value type
///
/// Both checks of an entry report at the entry's key path.
#[derive(Debug, Clone, Default)]
pub struct MapSchema {
    base: Schema,
    key_type: ValueType,
    value_type: ValueType,
}

impl MapSchema {
    /// Optional map with the given key and value types
    #[must_use]
    pub fn new(key_type: impl Into<ValueType>, value_type: impl Into<ValueType>) -> Self {
        Self {
            base: Schema::new(),
            key_type: key_type.into(),
            value_type: value_type.into(),
        }
    }

    /// Expected type of every key
    #[inline]
    #[must_use]
    pub fn key_type(&self) -> &ValueType {
        &self.key_type
    }

    /// Expected type of every value
    #[inline]
    #[must_use]
    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    schema_builders!();
}

impl Validate for MapSchema {
    fn perform_validation(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        self.base.validate_base(self, path, value, results);
        if value.is_null() {
            return;
        }

        match value {
            Value::Map(entries) => {
                for (key, entry) in entries {
                    let entry_path = child_path(path, key);
                    Schema::validate_type(&entry_path, &self.key_type, &Value::from(key), results);
                    Schema::validate_type(&entry_path, &self.value_type, entry, results);
                }
            }
            other => {
                let name = display_name(path);
                results.push(ValidationResult::new(
                    path,
                    ValidationResultType::Error,
                    "VALUE_ISNOT_MAP",
                    format!("{name} type must be Map"),
                    TypeConverter::to_string(TypeCode::Map),
                    TypeConverter::to_string(TypeConverter::to_type_code(other)),
                ));
            }
        }
    }
}
