//! Dot-path property reading
//!
//! `a.b.c` is read one segment at a time with [`ObjectReader`] semantics.
//! Flattening walks nested containers, skipping any object that is already
//! being visited and stopping once the descent stack holds
//! [`MAX_DESCENT`] containers.

use crate::object_reader::ObjectReader;
use strata_convert::{Value, ValueMap};

/// Maximum number of containers on the descent stack
pub const MAX_DESCENT: usize = 100;

/// Reads nested properties addressed by dot-paths
#[derive(Debug, Clone, Copy)]
pub struct RecursiveObjectReader;

impl RecursiveObjectReader {
    /// Check whether the property at `path` exists
    #[must_use]
    pub fn has_property(obj: &Value, path: &str) -> bool {
        if obj.is_null() || path.is_empty() {
            return false;
        }
        let names: Vec<&str> = path.split('.').collect();
        Self::perform_has_property(obj, &names)
    }

    fn perform_has_property(obj: &Value, names: &[&str]) -> bool {
        match names {
            [] => false,
            [last] => ObjectReader::has_property(obj, last),
            [first, rest @ ..] => ObjectReader::get_property(obj, first)
                .filter(|child| !child.is_null())
                .is_some_and(|child| Self::perform_has_property(&child, rest)),
        }
    }

    /// Read the property at `path`
    #[must_use]
    pub fn get_property(obj: &Value, path: &str) -> Option<Value> {
        if obj.is_null() || path.is_empty() {
            return None;
        }
        let names: Vec<&str> = path.split('.').collect();
        Self::perform_get_property(obj, &names)
    }

    fn perform_get_property(obj: &Value, names: &[&str]) -> Option<Value> {
        match names {
            [] => None,
            [last] => ObjectReader::get_property(obj, last),
            [first, rest @ ..] => ObjectReader::get_property(obj, first)
                .filter(|child| !child.is_null())
                .and_then(|child| Self::perform_get_property(&child, rest)),
        }
    }

    /// Dot-paths of every leaf
    #[must_use]
    pub fn get_property_names(obj: &Value) -> Vec<String> {
        Self::get_properties(obj).into_keys().collect()
    }

    /// Every leaf keyed by its dot-path
    ///
    /// # Examples
    /// ```
    /// # use strata_convert::{Value, ValueMap};
    /// # use strata_reflect::RecursiveObjectReader;
    /// let mut inner = ValueMap::new();
    /// inner.insert("b".to_string(), Value::from(1));
    /// let mut outer = ValueMap::new();
    /// outer.insert("a".to_string(), Value::Map(inner));
    /// outer.insert("c".to_string(), Value::from(vec![2, 3]));
    ///
    /// let names = RecursiveObjectReader::get_property_names(&Value::Map(outer));
    /// assert_eq!(names, vec!["a.b", "c.0", "c.1"]);
    /// ```
    #[must_use]
    pub fn get_properties(obj: &Value) -> ValueMap {
        let mut result = ValueMap::new();
        let mut stack = Vec::new();
        Self::collect(obj, None, &mut stack, &mut result);
        result
    }

    fn collect(obj: &Value, path: Option<&str>, stack: &mut Vec<Option<usize>>, result: &mut ValueMap) {
        let properties = ObjectReader::get_properties(obj);
        if properties.is_empty() || stack.len() >= MAX_DESCENT {
            if !properties.is_empty() {
                tracing::trace!(path = path.unwrap_or_default(), "descent limit reached");
            }
            if let Some(path) = path {
                result.insert(path.to_string(), obj.clone());
            }
            return;
        }

        stack.push(obj.identity());
        for (key, value) in properties {
            if value.identity().is_some_and(|id| stack.contains(&Some(id))) {
                tracing::trace!(property = %key, "cyclic reference skipped");
                continue;
            }
            let key = match path {
                Some(path) => format!("{path}.{key}"),
                None => key,
            };
            if value.type_code().is_complex() {
                Self::collect(&value, Some(&key), stack, result);
            } else {
                result.insert(key, value);
            }
        }
        stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strata_convert::{ObjectRef, Reflect};

    #[derive(Debug, Clone)]
    struct Link {
        name: String,
        next: Value,
    }

    impl Reflect for Link {
        fn property_names(&self) -> Vec<String> {
            vec!["name".to_string(), "next".to_string()]
        }

        fn get_property(&self, name: &str) -> Option<Value> {
            match name {
                "name" => Some(Value::from(self.name.as_str())),
                "next" => Some(self.next.clone()),
                _ => None,
            }
        }

        fn set_property(&mut self, name: &str, value: Value) -> bool {
            match name {
                "next" => {
                    self.next = value;
                    true
                }
                _ => false,
            }
        }
    }

    fn link(name: &str) -> ObjectRef {
        ObjectRef::new(Link {
            name: name.to_string(),
            next: Value::Null,
        })
    }

    fn nested() -> Value {
        let mut inner = ValueMap::new();
        inner.insert("Value".to_string(), Value::from(7));
        let mut outer = ValueMap::new();
        outer.insert("inner".to_string(), Value::Map(inner));
        outer.insert("list".to_string(), Value::from(vec!["x", "y"]));
        outer.insert("empty".to_string(), Value::Map(ValueMap::new()));
        Value::Map(outer)
    }

    #[test]
    fn reads_along_the_path() {
        let value = nested();
        assert!(RecursiveObjectReader::has_property(&value, "inner.value"));
        assert!(RecursiveObjectReader::has_property(&value, "list.1"));
        assert!(!RecursiveObjectReader::has_property(&value, "inner.missing"));
        assert!(!RecursiveObjectReader::has_property(&value, ""));
        assert_eq!(RecursiveObjectReader::get_property(&value, "INNER.value"), Some(Value::from(7)));
        assert_eq!(RecursiveObjectReader::get_property(&value, "list.0"), Some(Value::from("x")));
        assert_eq!(RecursiveObjectReader::get_property(&value, "list.0.deeper"), None);
    }

    #[test]
    fn flattens_leaves_and_empty_containers() {
        let names = RecursiveObjectReader::get_property_names(&nested());
        assert_eq!(names, vec!["inner.Value", "list.0", "list.1", "empty"]);
    }

    #[test]
    fn cycles_are_skipped() {
        let first = link("first");
        let second = link("second");
        first.write().set_property("next", Value::from(second.clone()));
        second.write().set_property("next", Value::from(first.clone()));

        let props = RecursiveObjectReader::get_properties(&Value::from(first.clone()));
        assert_eq!(
            props.keys().cloned().collect::<Vec<_>>(),
            vec!["name".to_string(), "next.name".to_string()]
        );
        assert_eq!(props.get("next.name"), Some(&Value::from("second")));

        // Break the cycle so the handles can be dropped
        first.write().set_property("next", Value::Null);
    }

    #[test]
    fn descent_stops_at_the_limit() {
        let mut value = Value::from(1);
        for _ in 0..=MAX_DESCENT {
            let mut map = ValueMap::new();
            map.insert("n".to_string(), value);
            value = Value::Map(map);
        }

        let props = RecursiveObjectReader::get_properties(&value);
        assert_eq!(props.len(), 1);
        let (path, leaf) = props.into_iter().next().unwrap();
        assert_eq!(path.split('.').count(), MAX_DESCENT);
        assert!(leaf.as_map().is_some());
    }
}
