//! Component descriptors
//!
//! A [`Descriptor`] identifies a component by `group:type:kind:name:version`.
//! Any field may be a wildcard, written `*`.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use strata_errors::{ApplicationError, ApplicationResult};

/// Five-part component identifier with wildcard fields
///
/// `None` fields are wildcards. [`matches`](Self::matches) treats a
/// wildcard on either side as a match; derived equality compares fields
/// exactly.
///
/// # Example
/// ```rust
/// use strata_refer::Descriptor;
///
/// let logger = Descriptor::new(Some("app"), Some("logger"), Some("console"), Some("default"), Some("1.0"));
/// let any_logger = Descriptor::from_string("*:logger:*:*:*").unwrap().unwrap();
///
/// assert!(any_logger.matches(&logger));
/// assert!(!any_logger.exact_match(&logger));
/// assert_eq!(logger.to_string(), "app:logger:console:default:1.0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Descriptor {
    group: Option<String>,
    #[serde(rename = "type")]
    type_: Option<String>,
    kind: Option<String>,
    name: Option<String>,
    version: Option<String>,
}

fn field(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty() && *v != "*").map(str::to_string)
}

fn match_field(left: Option<&String>, right: Option<&String>) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => left == right,
        _ => true,
    }
}

fn exact_match_field(left: Option<&String>, right: Option<&String>) -> bool {
    left == right
}

impl Descriptor {
    /// Create a descriptor; `None`, empty and `*` fields are wildcards
    #[must_use]
    pub fn new(
        group: Option<&str>,
        type_: Option<&str>,
        kind: Option<&str>,
        name: Option<&str>,
        version: Option<&str>,
    ) -> Self {
        Self {
            group: field(group),
            type_: field(type_),
            kind: field(kind),
            name: field(name),
            version: field(version),
        }
    }

    /// Logical group
    #[inline]
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Logical type or interface
    #[inline]
    #[must_use]
    pub fn type_(&self) -> Option<&str> {
        self.type_.as_deref()
    }

    /// Implementation kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Instance name
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Implementation version
    #[inline]
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn fields(&self) -> [Option<&String>; 5] {
        [
            self.group.as_ref(),
            self.type_.as_ref(),
            self.kind.as_ref(),
            self.name.as_ref(),
            self.version.as_ref(),
        ]
    }

    /// Partial match: wildcards on either side match anything
    #[must_use]
    pub fn matches(&self, other: &Descriptor) -> bool {
        self.fields()
            .into_iter()
            .zip(other.fields())
            .all(|(left, right)| match_field(left, right))
    }

    /// Field-by-field match where a wildcard only matches a wildcard
    #[must_use]
    pub fn exact_match(&self, other: &Descriptor) -> bool {
        self.fields()
            .into_iter()
            .zip(other.fields())
            .all(|(left, right)| exact_match_field(left, right))
    }

    /// Check that no field is a wildcard
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(Option::is_some)
    }

    /// Parse `group:type:kind:name:version`
    ///
    /// An empty string gives `Ok(None)`.
    ///
    /// # Errors
    ///
    /// `Misconfiguration` with code `BAD_DESCRIPTOR` unless the string has
    /// exactly five colon-separated tokens.
    pub fn from_string(value: &str) -> ApplicationResult<Option<Self>> {
        if value.trim().is_empty() {
            return Ok(None);
        }
        let tokens: Vec<&str> = value.split(':').map(str::trim).collect();
        match tokens.as_slice() {
            [group, type_, kind, name, version] => Ok(Some(Self::new(
                Some(*group),
                Some(*type_),
                Some(*kind),
                Some(*name),
                Some(*version),
            ))),
            _ => Err(ApplicationError::misconfiguration(
                None,
                "BAD_DESCRIPTOR",
                format!("Descriptor {value} is in wrong format"),
            )
            .with_details("descriptor", value)),
        }
    }
}

impl Display for Descriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rendered: Vec<&str> = self
            .fields()
            .into_iter()
            .map(|field| field.map_or("*", String::as_str))
            .collect();
        f.write_str(&rendered.join(":"))
    }
}

impl FromStr for Descriptor {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)?
            .ok_or_else(|| ApplicationError::misconfiguration(None, "BAD_DESCRIPTOR", "Descriptor is empty"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Descriptor {
        Descriptor::new(Some("g"), Some("t"), Some("k"), Some("n"), Some("1.0"))
    }

    #[test]
    fn wildcards_match_partially() {
        let partial = Descriptor::new(Some("g"), None, Some("k"), None, None);
        assert!(partial.matches(&full()));
        assert!(full().matches(&partial));
        assert!(!partial.exact_match(&full()));
        assert!(full().exact_match(&full()));

        let other = Descriptor::new(Some("x"), None, None, None, None);
        assert!(!other.matches(&full()));
    }

    #[test]
    fn completeness() {
        assert!(full().is_complete());
        assert!(!Descriptor::default().is_complete());
    }

    #[test]
    fn parses_five_tokens() {
        let parsed = Descriptor::from_string("g:t:*:n:1.0").unwrap().unwrap();
        assert_eq!(parsed.kind(), None);
        assert_eq!(parsed.to_string(), "g:t:*:n:1.0");
        assert_eq!(Descriptor::from_string(" ").unwrap(), None);

        let err = Descriptor::from_string("g:t:k").unwrap_err();
        assert_eq!(err.code(), "BAD_DESCRIPTOR");
        assert_eq!(err.detail("descriptor"), Some(&serde_json::json!("g:t:k")));
    }

    #[test]
    fn from_str_rejects_empty() {
        assert!("".parse::<Descriptor>().is_err());
        assert_eq!("g:t:k:n:1.0".parse::<Descriptor>().unwrap(), full());
    }

    #[test]
    fn serializes_fields() {
        let json = serde_json::to_value(Descriptor::new(Some("g"), Some("t"), None, None, None)).unwrap();
        assert_eq!(json["type"], "t");
        assert!(json["kind"].is_null());
    }
}
