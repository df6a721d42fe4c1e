//! Dot-path property writing
//!
//! Missing or null intermediate segments are created as empty maps.

use crate::object_reader::ObjectReader;
use crate::object_writer::ObjectWriter;
use crate::recursive_object_reader::RecursiveObjectReader;
use strata_convert::{Value, ValueMap};

/// Writes nested properties addressed by dot-paths
#[derive(Debug, Clone, Copy)]
pub struct RecursiveObjectWriter;

impl RecursiveObjectWriter {
    /// Write the property at `path`
    ///
    /// # Examples
    /// ```
    /// # use strata_convert::{Value, ValueMap};
    /// # use strata_reflect::{RecursiveObjectReader, RecursiveObjectWriter};
    /// let mut value = Value::Map(ValueMap::new());
    /// RecursiveObjectWriter::set_property(&mut value, "a.b.c", Value::from(1));
    /// assert_eq!(RecursiveObjectReader::get_property(&value, "a.b.c"), Some(Value::from(1)));
    /// ```
    pub fn set_property(obj: &mut Value, path: &str, value: Value) {
        if obj.is_null() || path.is_empty() {
            return;
        }
        let names: Vec<&str> = path.split('.').collect();
        Self::perform_set_property(obj, &names, value);
    }

    fn perform_set_property(obj: &mut Value, names: &[&str], value: Value) {
        match names {
            [] => {}
            [last] => ObjectWriter::set_property(obj, last, value),
            [first, rest @ ..] => {
                let mut child = ObjectReader::get_property(obj, first)
                    .filter(|child| !child.is_null())
                    .unwrap_or_else(|| Value::Map(ValueMap::new()));
                Self::perform_set_property(&mut child, rest, value);
                ObjectWriter::set_property(obj, first, child);
            }
        }
    }

    /// Write several dot-path properties in map order
    pub fn set_properties(obj: &mut Value, values: &ValueMap) {
        for (path, value) in values {
            Self::set_property(obj, path, value.clone());
        }
    }

    /// Copy every leaf of `src` into `dest` at the same dot-path
    pub fn copy_properties(dest: &mut Value, src: &Value) {
        if dest.is_null() || src.is_null() {
            return;
        }
        let values = RecursiveObjectReader::get_properties(src);
        Self::set_properties(dest, &values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect_fields;
    use pretty_assertions::assert_eq;
    use strata_convert::ObjectRef;

    #[derive(Debug, Clone, Default)]
    struct Settings {
        retries: i32,
        extra: Value,
    }

    reflect_fields!(Settings { retries, extra });

    #[test]
    fn creates_intermediate_maps() {
        let mut value = Value::Map(ValueMap::new());
        RecursiveObjectWriter::set_property(&mut value, "a.b", Value::from(1));
        RecursiveObjectWriter::set_property(&mut value, "a.c", Value::from(2));
        RecursiveObjectWriter::set_property(&mut value, "list", Value::from(vec![0]));
        RecursiveObjectWriter::set_property(&mut value, "list.1", Value::from(9));

        let expected = serde_json::json!({ "a": { "b": 1, "c": 2 }, "list": [0, 9] });
        assert_eq!(value.to_json_value(), expected);
    }

    #[test]
    fn writes_through_shared_objects() {
        let settings = ObjectRef::new(Settings::default());
        let mut root = Value::Map(ValueMap::new());
        ObjectWriter::set_property(&mut root, "settings", Value::from(settings.clone()));

        RecursiveObjectWriter::set_property(&mut root, "settings.retries", Value::from("3"));
        RecursiveObjectWriter::set_property(&mut root, "settings.extra.flag", Value::from(true));

        assert_eq!(settings.with_ref(|s: &Settings| s.retries), Some(3));
        assert_eq!(
            RecursiveObjectReader::get_property(&root, "settings.extra.flag"),
            Some(Value::from(true))
        );
    }

    #[test]
    fn scalar_segments_are_left_alone() {
        let mut value = Value::Map(ValueMap::new());
        RecursiveObjectWriter::set_property(&mut value, "a", Value::from(5));
        RecursiveObjectWriter::set_property(&mut value, "a.b", Value::from(6));
        assert_eq!(RecursiveObjectReader::get_property(&value, "a"), Some(Value::from(5)));
    }

    #[test]
    fn copies_leaves() {
        let mut src = Value::Map(ValueMap::new());
        RecursiveObjectWriter::set_property(&mut src, "x.y", Value::from(1));
        RecursiveObjectWriter::set_property(&mut src, "z", Value::from("z"));

        let mut dest = Value::Map(ValueMap::new());
        RecursiveObjectWriter::set_property(&mut dest, "x.w", Value::from(0));
        RecursiveObjectWriter::copy_properties(&mut dest, &src);

        assert_eq!(
            RecursiveObjectReader::get_property_names(&dest),
            vec!["x.w", "x.y", "z"]
        );
    }
}
