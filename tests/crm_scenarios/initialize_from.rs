//! Attribute-mapped initialization scenarios.

use crmsim::{
    Entity, EntityReference, ErrorKind, InitializeFromRequest, Service, TargetFieldType, Uuid,
    Value,
};

use crate::{seed, service};

/// Configure an entity map with its attribute maps.
fn map(service: &mut Service, source: &str, target: &str, attributes: &[(&str, &str)]) {
    let entity_map = seed(
        service,
        Entity::new("entitymap")
            .with("sourceentityname", source)
            .with("targetentityname", target),
    );
    for (from, to) in attributes {
        seed(
            service,
            Entity::new("attributemap")
                .with("entitymapid", entity_map.clone())
                .with("sourceattributename", *from)
                .with("targetattributename", *to),
        );
    }
}

#[test]
fn test_name_copied_to_fullname_only() {
    let mut service = service();
    map(&mut service, "account", "contact", &[("name", "fullname")]);
    let account = seed(
        &mut service,
        Entity::new("account")
            .with("name", "Acme")
            .with("telephone1", "555-0100"),
    );

    let response = service
        .execute_message(InitializeFromRequest::new(account, "contact"))
        .unwrap();

    let contact = response.entity;
    assert_eq!(contact.logical_name, "contact");
    assert!(contact.id.is_nil());
    assert_eq!(contact.get("fullname"), Some(&Value::from("Acme")));
    assert_eq!(contact.len(), 1);
}

#[test]
fn test_source_id_rewrapped_as_reference() {
    let mut service = service();
    map(&mut service, "account", "contact", &[("accountid", "originatingaccountid")]);
    let account = seed(&mut service, Entity::new("account").with("name", "Acme"));

    let contact = service
        .execute_message(InitializeFromRequest::new(account.clone(), "contact"))
        .unwrap()
        .entity;

    assert_eq!(
        contact.get("originatingaccountid"),
        Some(&Value::Reference(EntityReference::new("account", account.id)))
    );
    assert_ne!(contact.get("originatingaccountid"), Some(&Value::Guid(account.id)));
}

#[test]
fn test_several_maps_and_unset_source_attribute() {
    let mut service = service();
    map(
        &mut service,
        "lead",
        "opportunity",
        &[("subject", "name"), ("budgetamount", "budget"), ("leadid", "originatingleadid")],
    );
    let lead = seed(&mut service, Entity::new("lead").with("subject", "Fleet renewal"));

    let opportunity = service
        .execute_message(InitializeFromRequest::new(lead.clone(), "opportunity"))
        .unwrap()
        .entity;

    assert_eq!(opportunity.get("name"), Some(&Value::from("Fleet renewal")));
    assert!(!opportunity.contains("budget"));
    assert_eq!(
        opportunity.get_typed::<EntityReference>("originatingleadid").unwrap(),
        Some(lead)
    );
}

#[test]
fn test_target_field_type_other_than_all_not_implemented() {
    let mut service = service();
    let account = seed(&mut service, Entity::new("account").with("name", "Acme"));

    for field_type in [
        TargetFieldType::ValidForCreate,
        TargetFieldType::ValidForUpdate,
        TargetFieldType::ValidForRead,
    ] {
        let mut request = InitializeFromRequest::new(account.clone(), "contact");
        request.target_field_type = field_type;
        let err = service.execute_message(request).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
    }
}

#[test]
fn test_unknown_source_not_found() {
    let mut service = service();
    map(&mut service, "account", "contact", &[("name", "fullname")]);
    let err = service
        .execute_message(InitializeFromRequest::new(
            EntityReference::new("account", Uuid::new_v4()),
            "contact",
        ))
        .unwrap_err();
    assert!(err.is_not_found());
}
