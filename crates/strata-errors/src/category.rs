//! Error categories
//!
//! Categories group errors by the way callers are expected to react to them.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Category tag of an [`ApplicationError`](crate::ApplicationError)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Unexpected failure with no better classification
    #[default]
    Unknown,
    /// Programming defect
    Internal,
    /// Bad configuration input
    Misconfiguration,
    /// Method called in the wrong lifecycle state
    InvalidState,
    /// Remote side did not answer
    NoResponse,
    /// Remote call was made but failed
    FailedInvocation,
    /// File could not be read or written
    FileError,
    /// Invalid caller input, validation errors included
    BadRequest,
    /// Caller is not allowed to perform the operation
    Unauthorized,
    /// Requested entity does not exist
    NotFound,
    /// Concurrent modification or duplicate entity
    Conflict,
    /// Operation is not supported
    Unsupported,
}

impl ErrorCategory {
    /// All categories in declaration order
    pub const ALL: [ErrorCategory; 12] = [
        Self::Unknown,
        Self::Internal,
        Self::Misconfiguration,
        Self::InvalidState,
        Self::NoResponse,
        Self::FailedInvocation,
        Self::FileError,
        Self::BadRequest,
        Self::Unauthorized,
        Self::NotFound,
        Self::Conflict,
        Self::Unsupported,
    ];

    /// Stable textual tag
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Internal => "Internal",
            Self::Misconfiguration => "Misconfiguration",
            Self::InvalidState => "InvalidState",
            Self::NoResponse => "NoResponse",
            Self::FailedInvocation => "FailedInvocation",
            Self::FileError => "FileError",
            Self::BadRequest => "BadRequest",
            Self::Unauthorized => "Unauthorized",
            Self::NotFound => "NotFound",
            Self::Conflict => "Conflict",
            Self::Unsupported => "Unsupported",
        }
    }

    /// HTTP status code associated with the category
    #[must_use]
    pub fn default_status(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::Unsupported => 501,
            _ => 500,
        }
    }
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown error category: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_status_codes() {
        assert_eq!(ErrorCategory::BadRequest.default_status(), 400);
        assert_eq!(ErrorCategory::NotFound.default_status(), 404);
        assert_eq!(ErrorCategory::Internal.default_status(), 500);
        assert_eq!(ErrorCategory::Unsupported.default_status(), 501);
    }

    #[test]
    fn category_parses_case_insensitive() {
        assert_eq!("badrequest".parse::<ErrorCategory>(), Ok(ErrorCategory::BadRequest));
        assert_eq!("NotFound".parse::<ErrorCategory>(), Ok(ErrorCategory::NotFound));
        assert!("Nope".parse::<ErrorCategory>().is_err());
    }

    #[test]
    fn category_display_round_trips() {
        for category in ErrorCategory::ALL {
            assert_eq!(category.to_string().parse::<ErrorCategory>(), Ok(category));
        }
    }
}
