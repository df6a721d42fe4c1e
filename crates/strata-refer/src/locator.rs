//! Reference locators

use crate::descriptor::Descriptor;
use std::fmt::{self, Display, Formatter};
use strata_convert::{StringConverter, Value};

/// Key under which a component is registered or looked up
///
/// Descriptors match partially, honouring wildcards. Any other value
/// matches by equality.
#[derive(Debug, Clone, PartialEq)]
pub enum Locator {
    /// Five-part descriptor
    Descriptor(Descriptor),
    /// Plain value such as a name
    Value(Value),
}

impl Locator {
    /// Check whether this locator selects `other`
    #[must_use]
    pub fn matches(&self, other: &Locator) -> bool {
        match (self, other) {
            (Self::Descriptor(left), Self::Descriptor(right)) => left.matches(right),
            (Self::Value(left), Self::Value(right)) => left == right,
            _ => false,
        }
    }
}

impl Display for Locator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Descriptor(descriptor) => Display::fmt(descriptor, f),
            Self::Value(value) => f.write_str(&StringConverter::to_string(value)),
        }
    }
}

impl From<Descriptor> for Locator {
    fn from(descriptor: Descriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}

impl From<Value> for Locator {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Locator {
    fn from(value: &str) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<String> for Locator {
    fn from(value: String) -> Self {
        Self::Value(Value::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_never_cross_match() {
        let descriptor = Locator::from(Descriptor::new(Some("a"), None, None, None, None));
        let value = Locator::from("a");
        assert!(!descriptor.matches(&value));
        assert!(!value.matches(&descriptor));
        assert!(value.matches(&Locator::from("a".to_string())));
        assert_eq!(descriptor.to_string(), "a:*:*:*:*");
    }
}
