//! Services built from `crmsim.toml`.

use std::sync::Arc;

use crmsim::{
    Entity, ErrorKind, MessageExecutor, OrganizationRequest, OrganizationResponse,
    QueryExpression, RegistrationPolicy, Result, Service, ServiceConfig, ServiceContext,
    CONFIG_FILE_NAME,
};
use tempfile::TempDir;

struct Noop;

impl MessageExecutor for Noop {
    fn request_name(&self) -> &'static str {
        "Create"
    }

    fn execute(
        &self,
        _request: &OrganizationRequest,
        _ctx: &mut dyn ServiceContext,
    ) -> Result<OrganizationResponse> {
        Ok(OrganizationResponse::new("Create"))
    }
}

#[test]
fn test_missing_file_is_created_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    assert!(!path.exists());

    let service = Service::from_config_file(&path).unwrap();
    assert!(path.exists());
    assert_eq!(ServiceConfig::from_file(&path).unwrap(), ServiceConfig::default());
    assert_eq!(service.config(), &ServiceConfig::default());
    assert_eq!(service.registry().policy(), RegistrationPolicy::Reject);
    assert!(service.registry().contains("QualifyLead"));
}

#[test]
fn test_first_match_file_accepts_shadowed_executor() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "registration = \"first_match\"\nmax_query_results = 1\n").unwrap();

    let mut service = Service::from_config_file(&path).unwrap();
    service.register_executor(Arc::new(Noop)).unwrap();

    // The built-in Create still wins.
    service
        .initialize([Entity::new("account"), Entity::new("account")])
        .unwrap();
    let created = service
        .execute(OrganizationRequest::new("Create").with("Target", Entity::new("account")))
        .unwrap();
    assert!(created.results.contains("id"));

    let rows = service
        .retrieve_multiple(&QueryExpression::new("account"))
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(service.store().count("account"), 3);
}

#[test]
fn test_explicit_config_is_written_for_later_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    let config = ServiceConfig {
        registration: "first_match".to_string(),
        builtin_executors: false,
        max_query_results: Some(3),
    };

    let service = Service::with_config_file(&path, config.clone()).unwrap();
    assert!(service.registry().is_empty());

    let reopened = Service::from_config_file(&path).unwrap();
    assert_eq!(reopened.config(), &config);
    assert_eq!(reopened.registry().policy(), RegistrationPolicy::FirstMatch);

    let invalid = ServiceConfig {
        registration: "whatever".to_string(),
        ..ServiceConfig::default()
    };
    let err = Service::with_config_file(&path, invalid).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(ServiceConfig::from_file(&path).unwrap(), config);
}

#[test]
fn test_invalid_file_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "registration = \"whatever\"\n").unwrap();

    let err = Service::from_config_file(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}
