//! Validation results

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use strata_convert::Value;

/// Severity of a validation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationResultType {
    /// Informational note, never fails validation
    Information,
    /// Fails validation only in strict mode
    Warning,
    /// Always fails validation
    Error,
}

impl Display for ValidationResultType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Information => "Information",
            Self::Warning => "Warning",
            Self::Error => "Error",
        })
    }
}

/// One finding produced while validating a value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    path: String,
    #[serde(rename = "type")]
    result_type: ValidationResultType,
    code: String,
    message: String,
    #[serde(default)]
    expected: Value,
    #[serde(default)]
    actual: Value,
}

impl ValidationResult {
    /// Create a result
    #[must_use]
    pub fn new(
        path: &str,
        result_type: ValidationResultType,
        code: &str,
        message: impl Into<String>,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
    ) -> Self {
        Self {
            path: path.to_string(),
            result_type,
            code: code.to_string(),
            message: message.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Dot-path of the offending value; empty for the root
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Severity
    #[inline]
    #[must_use]
    pub fn result_type(&self) -> ValidationResultType {
        self.result_type
    }

    /// Stable error code
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable message
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// What the schema expected, when known
    #[inline]
    #[must_use]
    pub fn expected(&self) -> &Value {
        &self.expected
    }

    /// What was found, when known
    #[inline]
    #[must_use]
    pub fn actual(&self) -> &Value {
        &self.actual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let result = ValidationResult::new(
            "name",
            ValidationResultType::Error,
            "VALUE_IS_NULL",
            "name must not be null",
            "NOT NULL",
            Value::Null,
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "Error");
        assert_eq!(json["expected"], "NOT NULL");
        assert!(json["actual"].is_null());

        let back: ValidationResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }
}
