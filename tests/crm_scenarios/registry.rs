//! Executor resolution scenarios.

use std::sync::Arc;

use crmsim::{
    ErrorKind, ExecutorRegistry, MessageExecutor, OrganizationRequest, OrganizationResponse,
    RegistrationPolicy, Result, ServiceContext,
};

use crate::service;

/// Accepts requests carrying a `Channel` parameter equal to its own.
struct ChannelExecutor {
    channel: &'static str,
}

impl MessageExecutor for ChannelExecutor {
    fn request_name(&self) -> &'static str {
        self.channel
    }

    fn can_execute(&self, request: &OrganizationRequest) -> bool {
        request.request_name == "Route"
            && request.get::<String>("Channel").ok().flatten().as_deref() == Some(self.channel)
    }

    fn execute(
        &self,
        _request: &OrganizationRequest,
        _ctx: &mut dyn ServiceContext,
    ) -> Result<OrganizationResponse> {
        Ok(OrganizationResponse::new("Route").with("HandledBy", self.channel))
    }
}

const CHANNELS: [&str; 4] = ["email", "phone", "fax", "letter"];

fn route(channel: &str) -> OrganizationRequest {
    OrganizationRequest::new("Route").with("Channel", channel)
}

#[test]
fn test_only_acceptor_is_resolved_regardless_of_others() {
    // Every subset containing "fax", in every rotation, resolves to "fax".
    for mask in 0u8..16 {
        if mask & 0b0100 == 0 {
            continue;
        }
        let chosen: Vec<&'static str> = CHANNELS
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, c)| *c)
            .collect();

        for rotation in 0..chosen.len() {
            let mut registry = ExecutorRegistry::new(RegistrationPolicy::Reject);
            for channel in chosen.iter().cycle().skip(rotation).take(chosen.len()) {
                registry
                    .register(Arc::new(ChannelExecutor { channel: *channel }))
                    .unwrap();
            }
            let executor = registry.resolve(&route("fax")).unwrap();
            assert_eq!(executor.request_name(), "fax");
        }
    }
}

#[test]
fn test_custom_message_through_service() {
    let mut service = service();
    for channel in CHANNELS {
        service
            .register_executor(Arc::new(ChannelExecutor { channel }))
            .unwrap();
    }

    let response = service.execute(route("phone")).unwrap();
    assert_eq!(response.require::<String>("HandledBy").unwrap(), "phone");

    let err = service.execute(route("pigeon")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_first_match_policy_order_wins() {
    let mut registry = ExecutorRegistry::new(RegistrationPolicy::FirstMatch);
    registry
        .register(Arc::new(ChannelExecutor { channel: "email" }))
        .unwrap();
    registry
        .register(Arc::new(ChannelExecutor { channel: "email" }))
        .unwrap();
    assert_eq!(registry.len(), 2);
    assert!(registry.resolve(&route("email")).is_ok());
}
