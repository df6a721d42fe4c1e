//! Strata Data
//!
//! Dynamic value containers with typed accessors.
//!
//! # Overview
//!
//! - **AnyValue**: one value slot
//! - **AnyValueArray**: ordered values, read by index
//! - **AnyValueMap**: keyed values, read by exact key
//! - **StringValueMap**: keyed values stored as strings
//! - **ConfigParams**: dot-path configuration sections
//! - **Parameters**: keyed values with nested dot-path reads and writes
//!
//! Every container offers the `get_as_nullable_X` / `get_as_X` /
//! `get_as_X_with_default` family, built on the converters in
//! [`strata_convert`].
//!
//! # Example
//!
//! ```rust
//! use strata_data::{ConfigParams, Parameters};
//!
//! let config = ConfigParams::from_string("connection.host=localhost;connection.port=8080");
//! let connection = config.get_section("connection");
//! assert_eq!(connection.get_as_integer("port"), 8080);
//!
//! let params = Parameters::from_config(&config);
//! assert_eq!(params.get_as_string("connection.host"), "localhost");
//! ```

#![warn(missing_docs)]

mod accessors;

pub mod any_value;
pub mod any_value_array;
pub mod any_value_map;
pub mod config_params;
pub mod parameters;
pub mod string_value_map;

// Re-exports
pub use any_value::AnyValue;
pub use any_value_array::AnyValueArray;
pub use any_value_map::AnyValueMap;
pub use config_params::{ConfigParams, Configurable};
pub use parameters::Parameters;
pub use string_value_map::StringValueMap;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for containers
    pub use crate::{
        AnyValue, AnyValueArray, AnyValueMap, ConfigParams, Configurable, Parameters, StringValueMap,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
