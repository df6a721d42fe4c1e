//! Type descriptors
//!
//! A [`TypeDescriptor`] names a constructible type as `Name[,Library]`.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use strata_errors::{ApplicationError, ApplicationResult};

/// Name of a type and, optionally, the library that provides it
///
/// Two descriptors are equal when their names are equal and, if both carry
/// a library, their libraries are equal too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDescriptor {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    library: Option<String>,
}

impl TypeDescriptor {
    /// Create a descriptor
    #[must_use]
    pub fn new(name: impl Into<String>, library: Option<&str>) -> Self {
        Self {
            name: name.into(),
            library: library.filter(|lib| !lib.is_empty()).map(str::to_string),
        }
    }

    /// Type name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Library name, if any
    #[inline]
    #[must_use]
    pub fn library(&self) -> Option<&str> {
        self.library.as_deref()
    }

    /// Parse `Name[,Library]`
    ///
    /// An empty string gives `Ok(None)`.
    ///
    /// # Errors
    ///
    /// `Misconfiguration` with code `BAD_DESCRIPTOR` when the string has more
    /// than two comma-separated tokens.
    ///
    /// # Examples
    /// ```
    /// # use strata_reflect::TypeDescriptor;
    /// let descriptor = TypeDescriptor::from_string("Person, people").unwrap().unwrap();
    /// assert_eq!(descriptor.name(), "Person");
    /// assert_eq!(descriptor.library(), Some("people"));
    /// assert!(TypeDescriptor::from_string("a,b,c").is_err());
    /// ```
    pub fn from_string(value: &str) -> ApplicationResult<Option<Self>> {
        if value.trim().is_empty() {
            return Ok(None);
        }
        let tokens: Vec<&str> = value.split(',').map(str::trim).collect();
        match tokens.as_slice() {
            [name] => Ok(Some(Self::new(*name, None))),
            [name, library] => Ok(Some(Self::new(*name, Some(library)))),
            _ => Err(ApplicationError::misconfiguration(
                None,
                "BAD_DESCRIPTOR",
                format!("Type descriptor {value} is in wrong format"),
            )
            .with_details("descriptor", value)),
        }
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && match (&self.library, &other.library) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            }
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.library {
            Some(library) => write!(f, "{},{}", self.name, library),
            None => f.write_str(&self.name),
        }
    }
}

impl FromStr for TypeDescriptor {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)?.ok_or_else(|| {
            ApplicationError::misconfiguration(None, "BAD_DESCRIPTOR", "Type descriptor is empty")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_or_two_tokens() {
        assert_eq!(TypeDescriptor::from_string("").unwrap(), None);
        let only_name = TypeDescriptor::from_string("Person").unwrap().unwrap();
        assert_eq!(only_name.library(), None);

        let err = TypeDescriptor::from_string("a,b,c").unwrap_err();
        assert_eq!(err.code(), "BAD_DESCRIPTOR");
        assert_eq!(err.category(), strata_errors::ErrorCategory::Misconfiguration);
    }

    #[test]
    fn library_is_ignored_when_either_is_absent() {
        let bare = TypeDescriptor::new("Person", None);
        let lib_a = TypeDescriptor::new("Person", Some("a"));
        let lib_b = TypeDescriptor::new("Person", Some("b"));
        assert_eq!(bare, lib_a);
        assert_eq!(lib_b, bare);
        assert_ne!(lib_a, lib_b);
        assert_ne!(bare, TypeDescriptor::new("Animal", None));
    }

    #[test]
    fn display_reverses_parsing() {
        for text in ["Person", "Person,people"] {
            let descriptor: TypeDescriptor = text.parse().unwrap();
            assert_eq!(descriptor.to_string(), text);
        }
    }
}
