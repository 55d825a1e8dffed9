//! Option set metadata scenarios.

use crmsim::{
    Error, ErrorKind, OptionSetMetadata, OrganizationRequest, RetrieveOptionSetRequest,
    ServiceContext,
};

use crate::service;

#[test]
fn test_retrieve_stored_option_set() {
    let mut service = service();
    let colors = OptionSetMetadata::new("new_color")
        .global()
        .with_option(100_000_000, "Red")
        .with_option(100_000_001, "Green");
    service.option_sets_mut().add(colors.clone());

    let response = service
        .execute_message(RetrieveOptionSetRequest::new("new_color"))
        .unwrap();
    assert_eq!(response.option_set_metadata, colors);
    assert_eq!(
        response.option_set_metadata.label_of(100_000_001),
        Some("Green")
    );
}

#[test]
fn test_retrieve_option_set_without_name_faults() {
    let mut service = service();
    let err = service
        .execute(OrganizationRequest::new("RetrieveOptionSet"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BusinessRuleViolation);
}

#[test]
fn test_retrieve_unknown_option_set_not_found() {
    let mut service = service();
    let err = service
        .execute_message(RetrieveOptionSetRequest::new("new_size"))
        .unwrap_err();
    assert!(matches!(err, Error::MetadataNotFound { ref name } if name == "new_size"));
}
