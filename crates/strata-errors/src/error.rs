//! Application error type
//!
//! [`ApplicationError`] is the single error shape carried across Strata
//! crates. Errors are built with a category constructor and refined with
//! `with_*` builder methods.

use crate::category::ErrorCategory;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// Result alias for operations that fail with [`ApplicationError`]
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Categorized application error
///
/// # Examples
/// ```
/// # use strata_errors::{ApplicationError, ErrorCategory};
/// let err = ApplicationError::bad_request(Some("123"), "INVALID_DATA", "Validation failed");
/// assert_eq!(err.code(), "INVALID_DATA");
/// assert_eq!(err.correlation_id(), Some("123"));
/// assert_eq!(err.to_string(), "Validation failed");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApplicationError {
    category: ErrorCategory,
    code: String,
    message: String,
    status: u16,
    correlation_id: Option<String>,
    details: IndexMap<String, JsonValue>,
    cause: Option<String>,
}

impl ApplicationError {
    /// Create error with explicit category
    #[must_use]
    pub fn new(
        category: ErrorCategory,
        correlation_id: Option<&str>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let code = code.into();
        let message = message.into();
        Self {
            category,
            code: if code.is_empty() { "UNKNOWN".to_string() } else { code },
            message: if message.is_empty() {
                "Unknown error".to_string()
            } else {
                message
            },
            status: category.default_status(),
            correlation_id: correlation_id.map(str::to_string),
            details: IndexMap::new(),
            cause: None,
        }
    }

    /// Unexpected failure
    #[must_use]
    pub fn unknown(correlation_id: Option<&str>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Unknown, correlation_id, code, message)
    }

    /// Programming defect
    #[must_use]
    pub fn internal(correlation_id: Option<&str>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Internal, correlation_id, code, message)
    }

    /// Bad configuration input
    #[must_use]
    pub fn misconfiguration(
        correlation_id: Option<&str>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ErrorCategory::Misconfiguration, correlation_id, code, message)
    }

    /// Method called in the wrong lifecycle state
    #[must_use]
    pub fn invalid_state(
        correlation_id: Option<&str>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ErrorCategory::InvalidState, correlation_id, code, message)
    }

    /// Invalid caller input
    #[must_use]
    pub fn bad_request(correlation_id: Option<&str>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::BadRequest, correlation_id, code, message)
    }

    /// Caller is not allowed to perform the operation
    #[must_use]
    pub fn unauthorized(
        correlation_id: Option<&str>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ErrorCategory::Unauthorized, correlation_id, code, message)
    }

    /// Requested entity does not exist
    #[must_use]
    pub fn not_found(correlation_id: Option<&str>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::NotFound, correlation_id, code, message)
    }

    /// Concurrent modification or duplicate entity
    #[must_use]
    pub fn conflict(correlation_id: Option<&str>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Conflict, correlation_id, code, message)
    }

    /// Operation is not supported
    #[must_use]
    pub fn unsupported(correlation_id: Option<&str>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Unsupported, correlation_id, code, message)
    }

    /// Error category
    #[inline]
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.category
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

    /// HTTP-compatible status
    #[inline]
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Correlation identifier of the call chain
    #[inline]
    #[must_use]
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    /// Structured details
    #[inline]
    #[must_use]
    pub fn details(&self) -> &IndexMap<String, JsonValue> {
        &self.details
    }

    /// Single detail by key
    #[inline]
    #[must_use]
    pub fn detail(&self, key: &str) -> Option<&JsonValue> {
        self.details.get(key)
    }

    /// Description of the underlying cause
    #[inline]
    #[must_use]
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }

    /// Replace error code
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Replace HTTP status
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Add a structured detail
    #[must_use]
    pub fn with_details(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Set correlation identifier
    #[must_use]
    pub fn with_correlation_id(mut self, correlation_id: Option<&str>) -> Self {
        self.correlation_id = correlation_id.map(str::to_string);
        self
    }

    /// Attach a cause
    #[must_use]
    pub fn with_cause(mut self, cause: impl std::fmt::Display) -> Self {
        self.cause = Some(cause.to_string());
        self
    }

    /// Whether callers can reasonably retry the failed operation
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category,
            ErrorCategory::NoResponse | ErrorCategory::FailedInvocation | ErrorCategory::Conflict
        )
    }

    pub(crate) fn from_parts(
        category: ErrorCategory,
        code: String,
        message: String,
        status: u16,
        correlation_id: Option<String>,
        details: IndexMap<String, JsonValue>,
        cause: Option<String>,
    ) -> Self {
        Self {
            category,
            code,
            message,
            status,
            correlation_id,
            details,
            cause,
        }
    }
}
