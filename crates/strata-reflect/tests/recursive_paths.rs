//! Dot-path write/read properties

use proptest::prelude::*;
use strata_convert::{Value, ValueMap};
use strata_reflect::{RecursiveObjectReader, RecursiveObjectWriter};

fn arb_path() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,3}", 1..5).prop_map(|segments| segments.join("."))
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i32>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn prop_written_value_is_read_back(path in arb_path(), value in arb_leaf()) {
        let mut root = Value::Map(ValueMap::new());
        RecursiveObjectWriter::set_property(&mut root, &path, value.clone());
        prop_assert!(RecursiveObjectReader::has_property(&root, &path));
        prop_assert_eq!(RecursiveObjectReader::get_property(&root, &path), Some(value));
    }

    #[test]
    fn prop_path_lookup_ignores_case(path in arb_path(), value in arb_leaf()) {
        let mut root = Value::Map(ValueMap::new());
        RecursiveObjectWriter::set_property(&mut root, &path, value.clone());
        let upper = path.to_uppercase();
        prop_assert_eq!(RecursiveObjectReader::get_property(&root, &upper), Some(value));
    }

    #[test]
    fn prop_flattened_leaves_rebuild_the_value(
        entries in prop::collection::vec((arb_path(), arb_leaf()), 1..6)
    ) {
        let mut original = Value::Map(ValueMap::new());
        for (path, value) in &entries {
            RecursiveObjectWriter::set_property(&mut original, path, value.clone());
        }

        let mut copy = Value::Map(ValueMap::new());
        RecursiveObjectWriter::copy_properties(&mut copy, &original);
        prop_assert_eq!(
            RecursiveObjectReader::get_properties(&copy),
            RecursiveObjectReader::get_properties(&original)
        );
    }
}
