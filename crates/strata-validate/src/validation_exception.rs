//! Consolidated validation failure

use crate::validation_result::{ValidationResult, ValidationResultType};
use strata_errors::ApplicationError;

/// Error code carried by every validation failure
pub const INVALID_DATA: &str = "INVALID_DATA";

/// Validation failure wrapping every result of one validation run
///
/// Converts into a `BadRequest` [`ApplicationError`] with code
/// [`INVALID_DATA`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationException {
    correlation_id: Option<String>,
    message: String,
    results: Vec<ValidationResult>,
}

impl ValidationException {
    /// Create an exception; without a message one is composed from `results`
    #[must_use]
    pub fn new(correlation_id: Option<&str>, message: Option<&str>, results: Vec<ValidationResult>) -> Self {
        let message = message.map_or_else(|| Self::compose_message(&results), str::to_string);
        Self {
            correlation_id: correlation_id.map(str::to_string),
            message,
            results,
        }
    }

    /// `Validation failed` followed by every non-informational message
    ///
    /// # Examples
    /// ```
    /// # use strata_validate::{ValidationException, ValidationResult, ValidationResultType};
    /// # use strata_convert::Value;
    /// let results = vec![
    ///     ValidationResult::new("a", ValidationResultType::Error, "X", "a is bad", Value::Null, Value::Null),
    ///     ValidationResult::new("b", ValidationResultType::Information, "Y", "b is fine", Value::Null, Value::Null),
    ///     ValidationResult::new("c", ValidationResultType::Warning, "Z", "c is odd", Value::Null, Value::Null),
    /// ];
    /// assert_eq!(
    ///     ValidationException::compose_message(&results),
    ///     "Validation failed: a is bad, c is odd"
    /// );
    /// ```
    #[must_use]
    pub fn compose_message(results: &[ValidationResult]) -> String {
        let mut message = String::from("Validation failed");
        let mut first = true;
        for result in results {
            if result.result_type() == ValidationResultType::Information {
                continue;
            }
            message.push_str(if first { ": " } else { ", " });
            message.push_str(result.message());
            first = false;
        }
        message
    }

    /// Exception for `results` if they contain an error, or a warning when
    /// `strict`
    #[must_use]
    pub fn from_results(correlation_id: Option<&str>, results: Vec<ValidationResult>, strict: bool) -> Option<Self> {
        let failed = results.iter().any(|result| match result.result_type() {
            ValidationResultType::Error => true,
            ValidationResultType::Warning => strict,
            ValidationResultType::Information => false,
        });
        failed.then(|| Self::new(correlation_id, None, results))
    }

    /// Fail when [`from_results`](Self::from_results) would produce an
    /// exception
    ///
    /// # Errors
    ///
    /// The consolidated exception.
    pub fn throw_exception_if_needed(
        correlation_id: Option<&str>,
        results: Vec<ValidationResult>,
        strict: bool,
    ) -> Result<(), Self> {
        match Self::from_results(correlation_id, results, strict) {
            Some(exception) => {
                tracing::debug!(
                    correlation_id = correlation_id.unwrap_or_default(),
                    results = exception.results.len(),
                    "{}",
                    exception.message
                );
                Err(exception)
            }
            None => Ok(()),
        }
    }

    /// Correlation id of the failed call
    #[inline]
    #[must_use]
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    /// Composed message
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Every result of the validation run
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }
}

impl From<ValidationException> for ApplicationError {
    fn from(exception: ValidationException) -> Self {
        let results = serde_json::to_value(&exception.results).unwrap_or_default();
        ApplicationError::bad_request(exception.correlation_id.as_deref(), INVALID_DATA, exception.message)
            .with_details("results", results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_convert::Value;
    use strata_errors::ErrorCategory;

    fn result(result_type: ValidationResultType, message: &str) -> ValidationResult {
        ValidationResult::new("", result_type, "CODE", message, Value::Null, Value::Null)
    }

    #[test]
    fn warnings_fail_only_when_strict() {
        let warnings = vec![result(ValidationResultType::Warning, "odd")];
        assert!(ValidationException::from_results(None, warnings.clone(), false).is_none());
        assert!(ValidationException::from_results(None, warnings, true).is_some());

        let info = vec![result(ValidationResultType::Information, "fyi")];
        assert!(ValidationException::throw_exception_if_needed(None, info, true).is_ok());
    }

    #[test]
    fn converts_to_bad_request() {
        let err = ValidationException::throw_exception_if_needed(
            Some("123"),
            vec![result(ValidationResultType::Error, "broken")],
            false,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: broken");

        let app: ApplicationError = err.into();
        assert_eq!(app.category(), ErrorCategory::BadRequest);
        assert_eq!(app.code(), INVALID_DATA);
        assert_eq!(app.status(), 400);
        assert_eq!(app.correlation_id(), Some("123"));
        assert!(app.detail("results").is_some_and(serde_json::Value::is_array));
    }

    #[test]
    fn explicit_message_wins() {
        let exception = ValidationException::new(None, Some("custom"), Vec::new());
        assert_eq!(exception.message(), "custom");
        assert!(exception.results().is_empty());
    }
}
