//! Container behaviour across types

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strata_convert::Value;
use strata_data::prelude::*;

#[test]
fn config_sections_and_names() {
    let config = ConfigParams::from_string("a.b=1;a.c=2;d=3");
    assert_eq!(config.get_section("a"), ConfigParams::from_tuples([("b", "1"), ("c", "2")]));
    assert_eq!(config.get_section_names(), vec!["a".to_string(), "d".to_string()]);
}

#[test]
fn config_round_trips_through_parameters() {
    let config = ConfigParams::from_string("pool.size=10;pool.timeout=1500;name=svc");
    let params = Parameters::from_config(&config);
    let back = ConfigParams::from_value(&params.get_as_object());
    assert_eq!(back, config);
}

#[test]
fn serde_forms() {
    let map = AnyValueMap::from_tuples([("a", Value::from(1)), ("b", Value::from("x"))]);
    assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"a":1,"b":"x"}"#);

    let config: ConfigParams = serde_json::from_str(r#"{"k":"v","n":null}"#).unwrap();
    assert_eq!(config.to_string(), "k=v;n");

    let array: AnyValueArray = serde_json::from_str("[1,true]").unwrap();
    assert!(array.get_as_boolean(1));
}

fn arb_path() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,3}", 1..4).prop_map(|segments| segments.join("."))
}

proptest! {
    #[test]
    fn prop_parameters_put_then_get(path in arb_path(), value in any::<i64>()) {
        let mut params = Parameters::new();
        params.put(&path, value);
        prop_assert_eq!(params.get(&path), Value::from(value));
        prop_assert!(params.contains_key(&path));
    }

    #[test]
    fn prop_parameters_put_over_existing_maps(
        first in arb_path(),
        second in arb_path(),
        value in "[a-z]{0,6}",
    ) {
        let mut params = Parameters::new();
        params.put(&format!("root.{first}.leaf"), 1);
        params.put(&format!("root.{second}"), value.as_str());
        prop_assert_eq!(params.get(&format!("root.{second}")), Value::from(value.as_str()));
    }

    #[test]
    fn prop_string_map_text_round_trip(
        entries in prop::collection::vec(("[a-z]{1,5}", prop::option::of("[a-z0-9]{0,5}")), 0..6)
    ) {
        let map: StringValueMap = entries.into_iter().collect();
        let parsed = StringValueMap::from_string(&map.to_string());
        // Empty values render as "k=" and parse back as empty strings
        prop_assert_eq!(parsed, map);
    }
}
