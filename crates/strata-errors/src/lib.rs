//! Strata Errors
//!
//! Portable error taxonomy shared by every Strata crate.
//!
//! # Overview
//!
//! - **ErrorCategory**: closed set of category tags with default HTTP status
//! - **ApplicationError**: category + stable code + message + details
//! - **ErrorDescription**: serializable form for transport between processes
//!
//! # Example
//!
//! ```rust
//! use strata_errors::{ApplicationError, ErrorCategory};
//!
//! let err = ApplicationError::not_found(None, "TYPE_NOT_FOUND", "Type Foo was not found")
//!     .with_details("type", "Foo");
//!
//! assert_eq!(err.category(), ErrorCategory::NotFound);
//! assert_eq!(err.status(), 404);
//! ```

#![warn(missing_docs)]

pub mod category;
pub mod description;
pub mod error;

// Re-exports
pub use category::ErrorCategory;
pub use description::ErrorDescription;
pub use error::{ApplicationError, ApplicationResult};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
