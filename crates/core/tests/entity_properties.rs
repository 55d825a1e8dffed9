//! Property tests for Entity projection and merge
//!
//! - projecting to named columns keeps exactly the named, set attributes
//! - merge overwrites supplied attributes and keeps the rest
//! - values of different variants never compare equal

use std::collections::BTreeMap;

use crmsim_core::{ColumnSet, Entity, OptionSetValue, Uuid, Value};
use proptest::prelude::*;

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<bool>().prop_map(Value::Bool),
        "[a-z]{0,6}".prop_map(Value::String),
        any::<i32>().prop_map(|c| Value::OptionSet(OptionSetValue::new(c))),
        any::<u128>().prop_map(|n| Value::Guid(Uuid::from_u128(n))),
    ]
}

fn arb_attributes() -> impl Strategy<Value = BTreeMap<String, Value>> {
    prop::collection::btree_map("[a-f]{1,3}", arb_value(), 0..8)
}

fn record(attributes: BTreeMap<String, Value>) -> Entity {
    let mut entity = Entity::with_id("quote", Uuid::from_u128(7));
    entity.attributes = attributes;
    entity
}

proptest! {
    #[test]
    fn prop_projection_keeps_named_set_attributes(
        attributes in arb_attributes(),
        names in prop::collection::vec("[a-f]{1,3}", 0..6),
    ) {
        let entity = record(attributes.clone());
        let projected = entity.project(&ColumnSet::new(names.clone()));

        prop_assert_eq!(projected.id, entity.id);
        for (name, value) in &projected.attributes {
            prop_assert!(names.contains(name));
            prop_assert_eq!(attributes.get(name), Some(value));
        }
        for name in &names {
            prop_assert_eq!(projected.contains(name), attributes.contains_key(name));
        }
    }

    #[test]
    fn prop_merge_overwrites_and_keeps(
        original in arb_attributes(),
        patch in arb_attributes(),
    ) {
        let mut entity = record(original.clone());
        entity.merge(&record(patch.clone()));

        let mut expected = original;
        expected.extend(patch);
        prop_assert_eq!(entity.attributes, expected);
    }

    #[test]
    fn prop_different_variants_never_equal(a in arb_value(), b in arb_value()) {
        if a.type_name() != b.type_name() {
            prop_assert_ne!(a, b);
        }
    }
}
