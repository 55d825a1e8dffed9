//! Queries through `retrieve_multiple` and the fluent query view.

use crmsim::{
    ColumnSet, ConditionExpression, ConditionOperator, Entity, ErrorKind, JoinOperator,
    LinkEntity, OrderType, QueryExpression, RetrieveMultipleRequest, ServiceContext, Value,
};

use crate::{seed, service};

fn contacts_with_parent(join: JoinOperator) -> QueryExpression {
    QueryExpression::new("contact")
        .columns(ColumnSet::new(["lastname"]))
        .link(
            LinkEntity::new("contact", "account", "parentcustomerid", "accountid", join)
                .alias("parent")
                .columns(ColumnSet::new(["name"])),
        )
        .order_by("lastname", OrderType::Ascending)
}

#[test]
fn test_inner_and_outer_join_counts() {
    let mut service = service();
    let contoso = seed(&mut service, Entity::new("account").with("name", "Contoso"));
    seed(
        &mut service,
        Entity::new("contact")
            .with("lastname", "Adams")
            .with("parentcustomerid", contoso.clone()),
    );
    seed(
        &mut service,
        Entity::new("contact")
            .with("lastname", "Baker")
            .with("parentcustomerid", contoso),
    );
    seed(&mut service, Entity::new("contact").with("lastname", "Clark"));

    let inner = service
        .retrieve_multiple(&contacts_with_parent(JoinOperator::Inner))
        .unwrap();
    assert_eq!(inner.len(), 2);
    assert!(inner.iter().all(|row| row.contains("parent.name")));

    let outer = service
        .retrieve_multiple(&contacts_with_parent(JoinOperator::LeftOuter))
        .unwrap();
    assert_eq!(outer.len(), 3);
    assert_eq!(outer[2].get("lastname"), Some(&Value::from("Clark")));
    assert!(!outer[2].contains("parent.name"));

    let aliased = outer[0].get("parent.name").unwrap();
    let aliased = aliased.as_aliased().unwrap();
    assert_eq!(aliased.entity_logical_name, "account");
    assert_eq!(aliased.attribute_logical_name, "name");
    assert_eq!(aliased.value, Value::from("Contoso"));
}

#[test]
fn test_filter_on_linked_alias_and_reference_literal() {
    let mut service = service();
    let contoso = seed(&mut service, Entity::new("account").with("name", "Contoso"));
    let fabrikam = seed(&mut service, Entity::new("account").with("name", "Fabrikam"));
    for (name, parent) in [("Adams", &contoso), ("Baker", &fabrikam)] {
        seed(
            &mut service,
            Entity::new("contact")
                .with("lastname", name)
                .with("parentcustomerid", parent.clone()),
        );
    }

    let query = contacts_with_parent(JoinOperator::Inner)
        .where_condition(ConditionExpression::equal("name", "fabrikam").on("parent"));
    let rows = service.retrieve_multiple(&query).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("lastname"), Some(&Value::from("Baker")));

    // A lookup column compares to a bare id.
    let by_parent = service
        .create_query("contact")
        .where_equal("parentcustomerid", contoso.id)
        .to_vec()
        .unwrap();
    assert_eq!(by_parent.len(), 1);
}

#[test]
fn test_retrieve_multiple_message_and_operators() {
    let mut service = service();
    for (subject, score) in [("Fleet", 80), ("Fax machines", 20), ("Fleet renewal", 55)] {
        seed(
            &mut service,
            Entity::new("lead").with("subject", subject).with("leadscore", score as i64),
        );
    }

    let query = QueryExpression::new("lead")
        .where_condition(ConditionExpression::new(
            "subject",
            ConditionOperator::Like,
            vec![Value::from("fleet%")],
        ))
        .where_condition(ConditionExpression::new(
            "leadscore",
            ConditionOperator::GreaterThan,
            vec![Value::Int(60)],
        ));
    let rows = service
        .execute_message(RetrieveMultipleRequest { query })
        .unwrap()
        .entities;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("subject"), Some(&Value::from("Fleet")));

    let top = service
        .create_query("lead")
        .order_by("leadscore", OrderType::Descending)
        .top(2)
        .to_vec()
        .unwrap();
    let scores: Vec<i64> = top
        .iter()
        .filter_map(|e| e.get("leadscore").and_then(Value::as_int))
        .collect();
    assert_eq!(scores, [80, 55]);
}

#[test]
fn test_unknown_alias_is_rejected() {
    let mut service = service();
    seed(&mut service, Entity::new("contact"));
    let query = QueryExpression::new("contact")
        .where_condition(ConditionExpression::equal("name", "x").on("nowhere"));
    let err = service.retrieve_multiple(&query).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
