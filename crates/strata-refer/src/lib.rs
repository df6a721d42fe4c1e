//! Strata Refer
//!
//! Locating components by descriptor and wiring named dependencies from
//! configuration.
//!
//! # Overview
//!
//! - **Descriptor**: `group:type:kind:name:version` with `*` wildcards
//! - **Locator**: a descriptor or a plain value
//! - **References**: thread-safe registry of type-erased components
//! - **DependencyResolver**: names mapped to locators from the
//!   `dependencies` configuration section
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use strata_data::{ConfigParams, Configurable};
//! use strata_refer::{DependencyResolver, References};
//!
//! let references = Arc::new(References::new());
//! references.put("primary-cache", Arc::new(128_usize));
//!
//! let mut resolver = DependencyResolver::new();
//! resolver.configure(&ConfigParams::from_string("dependencies.cache=primary-cache")).unwrap();
//! resolver.set_references(references);
//!
//! assert_eq!(*resolver.get_one_required_as::<usize>("cache").unwrap(), 128);
//! assert_eq!(resolver.get_one_required("queue").unwrap_err().code(), "REF_ERROR");
//! ```

#![warn(missing_docs)]

pub mod dependency_resolver;
pub mod descriptor;
pub mod locator;
pub mod references;

// Re-exports
pub use dependency_resolver::DependencyResolver;
pub use descriptor::Descriptor;
pub use locator::Locator;
pub use references::{reference_error, Component, References};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for reference resolution
    pub use crate::{Component, DependencyResolver, Descriptor, Locator, References};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
