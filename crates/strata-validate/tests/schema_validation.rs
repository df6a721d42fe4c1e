//! Schema and rule behaviour over realistic values

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;
use std::sync::Arc;
use strata_convert::{TypeCode, Value};
use strata_errors::ErrorCategory;
use strata_test_utils::{init_tracing, test_object};
use strata_validate::prelude::*;
use strata_validate::{
    AndRule, AtLeastOneExistRule, ExcludedRule, IncludedRule, NotRule, OnlyOneExistRule, OrRule, PropertiesComparisonRule,
    ValueComparisonRule, INVALID_DATA,
};

fn sub_object_schema() -> ObjectSchema {
    ObjectSchema::new()
        .with_required_property("id", TypeCode::String)
        .with_required_property("float_field", TypeCode::Double)
        .with_optional_property("null_property", "object")
}

fn test_object_schema() -> ObjectSchema {
    ObjectSchema::new()
        .with_required_property("int_field", TypeCode::Integer)
        .with_required_property("string_field", TypeCode::String)
        .with_optional_property("null_property", "object")
        .with_required_property("int_array_field", "int[]")
        .with_required_property("string_array_field", ValueType::schema(ArraySchema::new(TypeCode::String)))
        .with_required_property(
            "map_field",
            ValueType::schema(MapSchema::new(TypeCode::String, ValueType::Any)),
        )
        .with_required_property("sub_object_field", ValueType::schema(sub_object_schema()))
        .with_required_property(
            "sub_array_field",
            ValueType::schema(ArraySchema::new(ValueType::schema(sub_object_schema()))),
        )
}

#[test]
fn full_object_passes() {
    init_tracing();
    assert_eq!(test_object_schema().validate(&test_object()), Vec::new());
}

#[test]
fn required_null_property_is_reported() {
    let schema = ObjectSchema::new()
        .allow_undefined(true)
        .with_required_property("null_property", "object");
    let results = schema.validate(&test_object());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].path(), "null_property");
    assert_eq!(results[0].code(), "VALUE_IS_NULL");
    assert_eq!(results[0].message(), "null_property must not be null");
}

#[test]
fn undeclared_properties_warn() {
    let schema = ObjectSchema::new()
        .with_required_property("int_field", TypeCode::Integer)
        .with_required_property("string_field", TypeCode::String);
    let results = schema.validate(&test_object());

    assert_eq!(results.len(), 6);
    assert!(results
        .iter()
        .all(|r| r.code() == "UNEXPECTED_PROPERTY" && r.result_type() == ValidationResultType::Warning));
}

#[test]
fn nested_failures_carry_full_paths() {
    let value = Value::from(json!({
        "items": [{"id": "1", "float_field": 1.5}, {"id": 2, "float_field": "x"}]
    }));
    let schema = ObjectSchema::new().with_required_property(
        "items",
        ValueType::schema(ArraySchema::new(ValueType::schema(sub_object_schema()))),
    );
    let results = schema.validate(&value);
    let paths: Vec<&str> = results.iter().map(|r| r.path()).collect();

    assert_eq!(paths, vec!["items.1.id", "items.1.float_field"]);
    assert_eq!(results[0].code(), "TYPE_MISMATCH");
}

#[test]
fn unexpected_property_at_root() {
    let schema = ObjectSchema::new().with_required_property("id", TypeCode::String);
    let results = schema.validate(&Value::from(json!({"id": "1", "extra": 5})));

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].code(), "UNEXPECTED_PROPERTY");
    assert_eq!(results[0].path(), "extra");
    assert_eq!(results[0].result_type(), ValidationResultType::Warning);
}

#[test]
fn value_comparison_failure() {
    let results = Schema::new()
        .with_rule(ValueComparisonRule::new("EQ", 1))
        .validate(&Value::from(2));

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].code(), "BAD_VALUE");
    assert_eq!(results[0].path(), "");
    assert_eq!(results[0].expected(), &Value::from("EQ 1"));
    assert_eq!(results[0].actual(), &Value::from(2));
}

#[test]
fn property_rules_see_the_whole_object() {
    let schema = Schema::new()
        .with_rule(PropertiesComparisonRule::new("int_field", "GT", "sub_object_field"))
        .with_rule(AtLeastOneExistRule::new(["missing", "string_field"]))
        .with_rule(OnlyOneExistRule::new(["int_field", "string_field"]));
    let results = schema.validate(&test_object());
    let codes: Vec<&str> = results.iter().map(|r| r.code()).collect();

    assert_eq!(codes, vec!["PROPERTIES_NOT_MATCH", "VALUE_ONLY_ONE"]);
}

#[test]
fn included_values_widen_numbers_only() {
    let schema = Schema::new().with_rule(IncludedRule::new([1, 2, 3]));
    assert!(schema.validate(&Value::from(2.0)).is_empty());
    assert!(schema.validate(&Value::from(3i64)).is_empty());
    assert_eq!(schema.validate(&Value::from(4))[0].code(), "VALUE_NOT_INCLUDED");
    assert_eq!(schema.validate(&Value::from("2"))[0].code(), "VALUE_NOT_INCLUDED");
}

#[test]
fn exception_converts_to_bad_request() {
    let schema = ObjectSchema::new().with_required_property("id", TypeCode::String);
    let error = schema
        .validate_and_throw_exception(Some("req-1"), &Value::from(json!({})), false)
        .unwrap_err();

    assert_eq!(error.results().len(), 1);
    assert_eq!(error.message(), "Validation failed: id must not be null");

    let app: strata_errors::ApplicationError = error.into();
    assert_eq!(app.category(), ErrorCategory::BadRequest);
    assert_eq!(app.code(), INVALID_DATA);
    assert_eq!(app.status(), 400);
    assert_eq!(app.correlation_id(), Some("req-1"));
}

#[test]
fn schemas_are_shareable_across_threads() {
    let schema = Arc::new(test_object_schema());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let schema = Arc::clone(&schema);
            std::thread::spawn(move || schema.validate(&test_object()).len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 0);
    }
}

fn comparisons(targets: &[i64]) -> Vec<Arc<dyn Rule>> {
    targets
        .iter()
        .map(|&k| Arc::new(ValueComparisonRule::new("EQ", k)) as Arc<dyn Rule>)
        .collect()
}

proptest! {
    #[test]
    fn prop_and_concatenates(value in 0i64..5, targets in prop::collection::vec(0i64..5, 0..6)) {
        let results = Schema::new()
            .with_rule(AndRule::new(comparisons(&targets)))
            .validate(&Value::from(value));
        let failing = targets.iter().filter(|&&k| k != value).count();
        prop_assert_eq!(results.len(), failing);
    }

    #[test]
    fn prop_or_is_empty_when_any_alternative_passes(value in 0i64..5, targets in prop::collection::vec(0i64..5, 0..6)) {
        let results = Schema::new()
            .with_rule(OrRule::new(comparisons(&targets)))
            .validate(&Value::from(value));
        if targets.is_empty() || targets.contains(&value) {
            prop_assert!(results.is_empty());
        } else {
            prop_assert_eq!(results.len(), targets.len());
        }
    }

    #[test]
    fn prop_not_inverts(value in 0i64..5, target in 0i64..5) {
        let results = Schema::new()
            .with_rule(NotRule::new(ValueComparisonRule::new("EQ", target)))
            .validate(&Value::from(value));
        prop_assert_eq!(results.len(), usize::from(value == target));
        if let Some(result) = results.first() {
            prop_assert_eq!(result.code(), "NOT_FAILED");
        }
    }

    #[test]
    fn prop_optional_schema_accepts_null(required in any::<bool>()) {
        let schema = if required { Schema::new().make_required() } else { Schema::new() };
        let results = schema.validate(&Value::Null);
        prop_assert_eq!(results.len(), usize::from(required));
    }
}

#[test]
fn excluded_values_are_reported_inside_objects() {
    let schema = ObjectSchema::new().with_property(
        PropertySchema::new("role", TypeCode::String).with_rule(ExcludedRule::new(["root", "system"])),
    );
    let results = schema.validate(&Value::from(json!({"role": "root"})));

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].code(), "VALUE_INCLUDED");
    assert_eq!(results[0].path(), "role");
    assert!(schema.validate(&Value::from(json!({"role": "guest"}))).is_empty());
}
