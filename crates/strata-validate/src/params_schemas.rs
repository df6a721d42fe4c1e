//! Schemas for common request parameters

use crate::array_schema::ArraySchema;
use crate::map_schema::MapSchema;
use crate::object_schema::ObjectSchema;
use crate::schema::{Validate, ValueType};
use crate::validation_result::ValidationResult;
use strata_convert::{TypeCode, Value};

/// Paging parameters: optional `skip`, `take` and `total`
///
/// # Example
/// ```rust
/// use strata_convert::{Value, ValueMap};
/// use strata_validate::{PagingParamsSchema, Validate};
///
/// let mut paging = ValueMap::new();
/// paging.insert("skip".to_string(), Value::from(10));
/// paging.insert("take".to_string(), Value::from("abc"));
/// let results = PagingParamsSchema::new().validate(&Value::Map(paging));
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].path(), "take");
/// ```
#[derive(Debug, Clone)]
pub struct PagingParamsSchema {
    inner: ObjectSchema,
}

impl PagingParamsSchema {
    /// Create the schema
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: ObjectSchema::new()
                .with_optional_property("skip", TypeCode::Long)
                .with_optional_property("take", TypeCode::Long)
                .with_optional_property("total", TypeCode::Boolean),
        }
    }
}

impl Default for PagingParamsSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for PagingParamsSchema {
    fn perform_validation(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        self.inner.perform_validation(path, value, results);
    }
}

/// Filter parameters: a map of string keys to arbitrary values
#[derive(Debug, Clone)]
pub struct FilterParamsSchema {
    inner: MapSchema,
}

impl FilterParamsSchema {
    /// Create the schema
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: MapSchema::new(TypeCode::String, ValueType::Any),
        }
    }
}

impl Default for FilterParamsSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for FilterParamsSchema {
    fn perform_validation(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        self.inner.perform_validation(path, value, results);
    }
}

/// Projection parameters: an array of field names
#[derive(Debug, Clone)]
pub struct ProjectionParamsSchema {
    inner: ArraySchema,
}

impl ProjectionParamsSchema {
    /// Create the schema
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: ArraySchema::new(TypeCode::String),
        }
    }
}

impl Default for ProjectionParamsSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for ProjectionParamsSchema {
    fn perform_validation(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>) {
        self.inner.perform_validation(path, value, results);
    }
}
