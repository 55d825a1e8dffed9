//! Record contract through the service facade.

use std::collections::BTreeMap;

use crmsim::{ColumnSet, Entity, ErrorKind, Money, OptionSetValue, ServiceContext, Uuid, Value};
use proptest::prelude::*;

use crate::service;

#[test]
fn test_retrieve_all_returns_supplied_attributes() {
    let mut service = service();
    let entity = Entity::new("account")
        .with("name", "Fabrikam")
        .with("revenue", Money(1_250_000.0))
        .with("industrycode", OptionSetValue::new(7))
        .with("donotemail", true);
    let expected = entity.attributes.clone();

    let id = service.create(entity).unwrap();
    let stored = service.retrieve("account", id, &ColumnSet::All).unwrap();
    assert_eq!(stored.attributes, expected);
    assert_eq!(stored.id, id);
}

#[test]
fn test_named_columns_materialize_primary_id() {
    let mut service = service();
    let id = service
        .create(Entity::new("account").with("name", "Fabrikam"))
        .unwrap();

    let stored = service
        .retrieve("account", id, &ColumnSet::new(["accountid", "missing"]))
        .unwrap();
    assert_eq!(stored.get("accountid"), Some(&Value::Guid(id)));
    assert_eq!(stored.len(), 1);
}

#[test]
fn test_never_inserted_is_not_found() {
    let mut service = service();
    let id = Uuid::new_v4();
    assert_eq!(
        service.retrieve("lead", id, &ColumnSet::All).unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        service.update(&Entity::with_id("lead", id)).unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        service.delete("lead", id).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn test_duplicate_id_already_exists() {
    let mut service = service();
    let id = Uuid::new_v4();
    service.create(Entity::with_id("contact", id)).unwrap();
    let err = service.create(Entity::with_id("contact", id)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    // Same id under another logical name is a different record.
    service.create(Entity::with_id("account", id)).unwrap();
}

fn arb_attributes() -> impl Strategy<Value = BTreeMap<String, Value>> {
    prop::collection::btree_map(
        "[a-z]{1,6}_x",
        prop_oneof![
            any::<i64>().prop_map(Value::Int),
            "[a-z]{0,8}".prop_map(Value::String),
            any::<i32>().prop_map(|c| Value::OptionSet(OptionSetValue::new(c))),
        ],
        0..6,
    )
}

proptest! {
    #[test]
    fn prop_update_never_clears_absent_attributes(
        original in arb_attributes(),
        patch in arb_attributes(),
    ) {
        let mut service = service();
        let mut entity = Entity::new("lead");
        entity.attributes = original.clone();
        let id = service.create(entity).unwrap();

        let mut update = Entity::with_id("lead", id);
        update.attributes = patch.clone();
        service.update(&update).unwrap();

        let stored = service.retrieve("lead", id, &ColumnSet::All).unwrap();
        for (name, value) in &original {
            let expected = patch.get(name).unwrap_or(value);
            prop_assert_eq!(stored.get(name), Some(expected));
        }
        for (name, value) in &patch {
            prop_assert_eq!(stored.get(name), Some(value));
        }

        let again = service.retrieve("lead", id, &ColumnSet::All).unwrap();
        prop_assert_eq!(stored, again);
    }
}
