//! Property reflection over user objects
//!
//! Names are matched case-insensitively and names starting with `_` are
//! never exposed. Reads of missing properties yield `None`; writes that the
//! object rejects are skipped silently.

use strata_convert::object::is_visible;
use strata_convert::{ObjectRef, Value, ValueMap};

/// Case-insensitive property access on [`ObjectRef`]s
#[derive(Debug, Clone, Copy)]
pub struct PropertyReflector;

impl PropertyReflector {
    /// Exact name of the visible property matching `name`, ignoring case
    #[must_use]
    pub fn resolve_name(obj: &ObjectRef, name: &str) -> Option<String> {
        if !is_visible(name) {
            return None;
        }
        let wanted = name.to_lowercase();
        obj.property_names()
            .into_iter()
            .find(|candidate| candidate.to_lowercase() == wanted)
    }

    /// Check whether the object exposes a property
    #[inline]
    #[must_use]
    pub fn has_property(obj: &ObjectRef, name: &str) -> bool {
        Self::resolve_name(obj, name).is_some()
    }

    /// Read a property
    #[must_use]
    pub fn get_property(obj: &ObjectRef, name: &str) -> Option<Value> {
        let exact = Self::resolve_name(obj, name)?;
        obj.read().get_property(&exact)
    }

    /// Visible property names in declaration order
    #[inline]
    #[must_use]
    pub fn get_property_names(obj: &ObjectRef) -> Vec<String> {
        obj.property_names()
    }

    /// Visible properties with their values
    #[inline]
    #[must_use]
    pub fn get_properties(obj: &ObjectRef) -> ValueMap {
        obj.properties()
    }

    /// Write a property
    ///
    /// An unknown name is offered to the object as given, so objects that
    /// accept new properties can store it. Rejected writes are skipped.
    pub fn set_property(obj: &ObjectRef, name: &str, value: Value) {
        if !is_visible(name) {
            return;
        }
        // Resolve under a read lock before taking the write lock
        let exact = Self::resolve_name(obj, name).unwrap_or_else(|| name.to_string());
        if !obj.write().set_property(&exact, value) {
            tracing::trace!(property = %exact, "property write skipped");
        }
    }

    /// Write several properties in map order
    pub fn set_properties(obj: &ObjectRef, values: &ValueMap) {
        for (name, value) in values {
            Self::set_property(obj, name, value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect_fields;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, Default)]
    struct Account {
        login: String,
        balance: i64,
        _password: String,
    }

    reflect_fields!(Account { login, balance, _password });

    fn account() -> ObjectRef {
        ObjectRef::new(Account {
            login: "admin".to_string(),
            balance: 10,
            _password: "secret".to_string(),
        })
    }

    #[test]
    fn lookup_ignores_case() {
        let obj = account();
        assert!(PropertyReflector::has_property(&obj, "LOGIN"));
        assert_eq!(
            PropertyReflector::get_property(&obj, "Balance"),
            Some(Value::Long(10))
        );
        assert_eq!(PropertyReflector::get_property(&obj, "missing"), None);
    }

    #[test]
    fn private_properties_are_hidden() {
        let obj = account();
        assert_eq!(
            PropertyReflector::get_property_names(&obj),
            vec!["login".to_string(), "balance".to_string()]
        );
        assert!(!PropertyReflector::has_property(&obj, "_password"));
        assert_eq!(PropertyReflector::get_property(&obj, "_password"), None);

        PropertyReflector::set_property(&obj, "_password", Value::from("changed"));
        assert_eq!(
            obj.with_ref(|a: &Account| a._password.clone()),
            Some("secret".to_string())
        );
    }

    #[test]
    fn writes_convert_and_skip_silently() {
        let obj = account();
        PropertyReflector::set_property(&obj, "BALANCE", Value::from("25"));
        PropertyReflector::set_property(&obj, "balance", Value::from("not a number"));
        PropertyReflector::set_property(&obj, "unknown", Value::from(1));
        assert_eq!(obj.with_ref(|a: &Account| a.balance), Some(25));

        let mut values = ValueMap::new();
        values.insert("login".to_string(), Value::from("root"));
        PropertyReflector::set_properties(&obj, &values);
        assert_eq!(
            PropertyReflector::get_property(&obj, "login"),
            Some(Value::from("root"))
        );
    }
}
