//! Strata Validate
//!
//! Composable schemas that check dynamic values and report every problem
//! found, instead of stopping at the first one.
//!
//! # Overview
//!
//! - **Schema**: required flag plus attached [`Rule`]s
//! - **PropertySchema / ObjectSchema**: named properties, matched
//!   case-insensitively, with warnings for undeclared ones
//! - **ArraySchema / MapSchema**: element, key and value types
//! - **Rules**: logical combinators, comparisons, inclusion and presence
//!   checks
//! - **ValidationException**: failures bundled into an error that converts
//!   into [`strata_errors::ApplicationError`]
//!
//! Results carry a dot path (`items.1.name`), a code, a message and the
//! expected and actual values.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use strata_convert::{TypeCode, Value};
//! use strata_validate::{ObjectSchema, Validate, ValidationResultType};
//!
//! let schema = ObjectSchema::new()
//!     .with_required_property("id", TypeCode::String)
//!     .with_optional_property("count", TypeCode::Integer);
//!
//! let results = schema.validate(&Value::from(json!({"id": "1", "extra": true})));
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].path(), "extra");
//! assert_eq!(results[0].result_type(), ValidationResultType::Warning);
//!
//! // Warnings only fail in strict mode
//! let value = Value::from(json!({"id": "1", "extra": true}));
//! assert!(schema.validate_and_throw_exception(None, &value, false).is_ok());
//! assert!(schema.validate_and_throw_exception(None, &value, true).is_err());
//! ```

#![warn(missing_docs)]

pub mod array_schema;
pub mod map_schema;
pub mod object_comparator;
pub mod object_schema;
pub mod params_schemas;
pub mod property_schema;
pub mod rules;
pub mod schema;
pub mod validation_exception;
pub mod validation_result;

// Re-exports
pub use array_schema::ArraySchema;
pub use map_schema::MapSchema;
pub use object_comparator::ObjectComparator;
pub use object_schema::ObjectSchema;
pub use params_schemas::{FilterParamsSchema, PagingParamsSchema, ProjectionParamsSchema};
pub use property_schema::PropertySchema;
pub use rules::{
    AndRule, AtLeastOneExistRule, ExcludedRule, IncludedRule, NotRule, OnlyOneExistRule, OrRule,
    PropertiesComparisonRule, Rule, ValueComparisonRule,
};
pub use schema::{Schema, Validate, ValueType};
pub use validation_exception::{ValidationException, INVALID_DATA};
pub use validation_result::{ValidationResult, ValidationResultType};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for validation
    pub use crate::{
        ArraySchema, MapSchema, ObjectSchema, PropertySchema, Rule, Schema, Validate, ValidationException,
        ValidationResult, ValidationResultType, ValueType,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
