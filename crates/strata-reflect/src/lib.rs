//! Strata Reflect
//!
//! Uniform reflection over user objects, maps and arrays, with dot-path
//! recursion and a registry of constructible types.
//!
//! # Overview
//!
//! - **PropertyReflector / MethodReflector**: case-insensitive access to
//!   [`Reflect`] objects, hiding names that start with `_`
//! - **ObjectReader / ObjectWriter**: the same over maps (keys), arrays
//!   (indices) and objects
//! - **RecursiveObjectReader / RecursiveObjectWriter**: dot-path access with
//!   cycle protection
//! - **TypeReflector / TypeDescriptor**: constructors registered by
//!   `Name[,Library]`
//! - **reflect_fields!**: derive-style [`Reflect`] implementations
//!
//! Reads never fail and writes that cannot be applied are skipped.
//!
//! # Example
//!
//! ```rust
//! use strata_convert::{Value, ValueMap};
//! use strata_reflect::{ObjectReader, RecursiveObjectWriter};
//!
//! let mut config = Value::Map(ValueMap::new());
//! RecursiveObjectWriter::set_property(&mut config, "db.port", Value::from(5432));
//!
//! let db = ObjectReader::get_property(&config, "DB").unwrap();
//! assert_eq!(ObjectReader::get_property(&db, "port"), Some(Value::from(5432)));
//! ```

#![warn(missing_docs)]

mod macros;

pub mod method_reflector;
pub mod object_reader;
pub mod object_writer;
pub mod property_reflector;
pub mod recursive_object_reader;
pub mod recursive_object_writer;
pub mod type_descriptor;
pub mod type_reflector;

// Re-exports
pub use method_reflector::MethodReflector;
pub use object_reader::ObjectReader;
pub use object_writer::{ObjectWriter, MAX_INDEX_GAP};
pub use property_reflector::PropertyReflector;
pub use recursive_object_reader::{RecursiveObjectReader, MAX_DESCENT};
pub use recursive_object_writer::RecursiveObjectWriter;
pub use strata_convert::{ObjectRef, Reflect};
pub use type_descriptor::TypeDescriptor;
pub use type_reflector::{Constructor, TypeHandle, TypeReflector};

/// Items referenced by [`reflect_fields!`] expansions
#[doc(hidden)]
pub mod __private {
    pub use strata_convert::{FromValue, Reflect, Value};
}

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for reflection
    pub use crate::{
        reflect_fields, MethodReflector, ObjectReader, ObjectWriter, PropertyReflector,
        RecursiveObjectReader, RecursiveObjectWriter, TypeDescriptor, TypeReflector,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
