//! Serializable error description
//!
//! Transfers [`ApplicationError`] across process boundaries as plain JSON.

use crate::category::ErrorCategory;
use crate::error::ApplicationError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Wire form of an [`ApplicationError`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDescription {
    /// Category tag
    pub category: ErrorCategory,
    /// HTTP status
    pub status: u16,
    /// Stable error code
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Structured details
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub details: IndexMap<String, JsonValue>,
    /// Correlation identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    /// Cause description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl From<&ApplicationError> for ErrorDescription {
    fn from(err: &ApplicationError) -> Self {
        Self {
            category: err.category(),
            status: err.status(),
            code: err.code().to_string(),
            message: err.message().to_string(),
            details: err.details().clone(),
            correlation_id: err.correlation_id().map(str::to_string),
            cause: err.cause().map(str::to_string),
        }
    }
}

impl From<ErrorDescription> for ApplicationError {
    fn from(desc: ErrorDescription) -> Self {
        ApplicationError::from_parts(
            desc.category,
            desc.code,
            desc.message,
            desc.status,
            desc.correlation_id,
            desc.details,
            desc.cause,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn description_round_trips_through_json() {
        let err = ApplicationError::conflict(Some("c1"), "DUPLICATE", "Already exists")
            .with_details("id", 42)
            .with_cause("unique index");

        let desc = ErrorDescription::from(&err);
        let json = serde_json::to_string(&desc).unwrap();
        let parsed: ErrorDescription = serde_json::from_str(&json).unwrap();

        assert_eq!(ApplicationError::from(parsed), err);
    }

    #[test]
    fn description_omits_empty_fields() {
        let err = ApplicationError::unsupported(None, "NOPE", "Not supported");
        let json = serde_json::to_value(ErrorDescription::from(&err)).unwrap();

        assert!(json.get("details").is_none());
        assert!(json.get("correlation_id").is_none());
        assert_eq!(json["status"], 501);
    }
}
