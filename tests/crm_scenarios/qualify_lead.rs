//! Lead qualification scenarios.

use crmsim::{
    ColumnSet, Entity, EntityReference, ErrorKind, OptionSetValue, QualifyLeadRequest, ServiceContext,
    Uuid,
};

use crate::{seed, service};

#[test]
fn test_account_and_opportunity_for_account_customer() {
    let mut service = service();
    let lead = seed(&mut service, Entity::new("lead").with("subject", "Interested in 10 units"));
    let customer = seed(&mut service, Entity::new("account").with("name", "Contoso"));

    let mut request = QualifyLeadRequest::new(lead.clone(), 3);
    request.create_account = true;
    request.create_contact = false;
    request.create_opportunity = true;
    request.opportunity_customer_id = Some(customer.clone());

    let response = service.execute_message(request).unwrap();

    assert_eq!(response.created_entities.len(), 2);
    assert_eq!(response.created_entities[0].logical_name, "account");
    assert_eq!(response.created_entities[1].logical_name, "opportunity");

    // The pre-existing customer account plus the new one.
    assert_eq!(service.store().count("account"), 2);
    assert_eq!(service.store().count("opportunity"), 1);
    assert_eq!(service.store().count("contact"), 0);

    for created in &response.created_entities {
        let record = service
            .retrieve(&created.logical_name, created.id, &ColumnSet::All)
            .unwrap();
        assert_eq!(
            record.get_typed::<EntityReference>("originatingleadid").unwrap(),
            Some(lead.clone())
        );
    }

    let opportunity = service
        .retrieve("opportunity", response.created_entities[1].id, &ColumnSet::new(["customerid"]))
        .unwrap();
    assert_eq!(
        opportunity.get_typed::<EntityReference>("customerid").unwrap(),
        Some(customer)
    );

    let lead_record = service
        .retrieve("lead", lead.id, &ColumnSet::All)
        .unwrap();
    assert_eq!(
        lead_record.get_typed::<OptionSetValue>("statuscode").unwrap(),
        Some(OptionSetValue::new(3))
    );
    assert!(lead_record.contains("subject"));
}

#[test]
fn test_zero_leads_faults_without_mutation() {
    let mut service = service();
    let existing = seed(&mut service, Entity::new("lead").with("subject", "Other lead"));
    let before = service.store().clone();

    let mut request = QualifyLeadRequest::new(EntityReference::new("lead", Uuid::new_v4()), 3);
    request.create_account = true;
    request.create_contact = true;
    request.create_opportunity = true;

    let err = service.execute_message(request).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BusinessRuleViolation);
    assert_eq!(
        err.to_string(),
        "Number of Leads by given LeadId should be 1. Instead it is 0."
    );

    assert_eq!(service.store().len(), before.len());
    let lead = service
        .retrieve("lead", existing.id, &ColumnSet::All)
        .unwrap();
    assert!(!lead.contains("statuscode"));
}

#[test]
fn test_invalid_customer_type_keeps_earlier_records() {
    let mut service = service();
    let lead = seed(&mut service, Entity::new("lead"));
    let not_a_customer = EntityReference::new("systemuser", Uuid::new_v4());

    let mut request = QualifyLeadRequest::new(lead.clone(), 3);
    request.create_account = true;
    request.create_contact = true;
    request.create_opportunity = true;
    request.opportunity_customer_id = Some(not_a_customer);

    let err = service.execute_message(request).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BusinessRuleViolation);
    assert!(err.to_string().contains("systemuser"));

    // No rollback: account and contact stay, nothing after the fault ran.
    assert_eq!(service.store().count("account"), 1);
    assert_eq!(service.store().count("contact"), 1);
    assert_eq!(service.store().count("opportunity"), 0);
    let lead_record = service
        .retrieve("lead", lead.id, &ColumnSet::All)
        .unwrap();
    assert!(!lead_record.contains("statuscode"));
}

#[test]
fn test_contact_customer_accepted() {
    let mut service = service();
    let lead = seed(&mut service, Entity::new("lead"));
    let contact = seed(&mut service, Entity::new("contact").with("lastname", "Smith"));

    let mut request = QualifyLeadRequest::new(lead, 3);
    request.create_opportunity = true;
    request.opportunity_customer_id = Some(contact);

    let response = service.execute_message(request).unwrap();
    assert_eq!(response.created_entities.len(), 1);
}

#[test]
fn test_missing_lead_id_faults() {
    let mut service = service();
    let err = service
        .execute(crmsim::OrganizationRequest::new("QualifyLead").with("Status", OptionSetValue::new(3)))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BusinessRuleViolation);
}
