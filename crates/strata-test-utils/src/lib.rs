//! Testing utilities for Strata workspace
//!
//! Reflectable fixtures and tracing setup shared by the crate test suites.

#![allow(missing_docs)]

use once_cell::sync::OnceCell;
use strata_convert::{ObjectRef, Value};
use strata_reflect::reflect_fields;
use tracing_subscriber::EnvFilter;

static TRACING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per process, filtered by `RUST_LOG`
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dummy {
    pub key: String,
    pub content: String,
}

impl Dummy {
    pub fn new(key: &str, content: &str) -> Self {
        Self {
            key: key.to_string(),
            content: content.to_string(),
        }
    }
}

reflect_fields!(Dummy { key, content });

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub tags: Vec<String>,
    pub _password: String,
}

reflect_fields!(Person { id, name, age, tags, _password });

pub fn person(id: &str, name: &str, age: i32) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        age,
        tags: Vec::new(),
        _password: "secret".to_string(),
    }
}

/// Reflectable object with one property of every primitive kind
#[derive(Debug, Clone, Default)]
pub struct TestObject {
    pub int_field: i32,
    pub string_field: String,
    pub null_property: Option<String>,
    pub int_array_field: Vec<i32>,
    pub string_array_field: Vec<String>,
    pub map_field: Value,
    pub sub_object_field: Value,
    pub sub_array_field: Vec<Value>,
}

reflect_fields!(TestObject {
    int_field,
    string_field,
    null_property,
    int_array_field,
    string_array_field,
    map_field,
    sub_object_field,
    sub_array_field,
});

#[derive(Debug, Clone, Default)]
pub struct TestSubObject {
    pub id: String,
    pub float_field: f64,
    pub null_property: Option<String>,
}

reflect_fields!(TestSubObject { id, float_field, null_property });

impl TestSubObject {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            float_field: 432.0,
            null_property: None,
        }
    }
}

/// A fully populated [`TestObject`] wrapped as a value
pub fn test_object() -> Value {
    let mut map = strata_convert::ValueMap::new();
    map.insert("value1".to_string(), Value::from(123));
    map.insert("value2".to_string(), Value::from("ABC"));

    Value::from(ObjectRef::new(TestObject {
        int_field: 12345,
        string_field: "ABC".to_string(),
        null_property: None,
        int_array_field: vec![1, 2, 3],
        string_array_field: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        map_field: Value::Map(map),
        sub_object_field: Value::from(ObjectRef::new(TestSubObject::new("1"))),
        sub_array_field: vec![
            Value::from(ObjectRef::new(TestSubObject::new("2"))),
            Value::from(ObjectRef::new(TestSubObject::new("3"))),
        ],
    }))
}
