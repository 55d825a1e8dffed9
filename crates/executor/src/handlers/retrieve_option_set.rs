//! RetrieveOptionSet executor.

use crate::executor::MessageExecutor;
use crate::messages::{RetrieveOptionSetRequest, RetrieveOptionSetResponse};
use crate::request::{Message, MessageResponse};
use crate::{Error, OrganizationRequest, OrganizationResponse, Result, ServiceContext};

/// Handles `RetrieveOptionSet` from the service's option set metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetrieveOptionSetExecutor;

impl MessageExecutor for RetrieveOptionSetExecutor {
    fn request_name(&self) -> &'static str {
        RetrieveOptionSetRequest::NAME
    }

    fn execute(
        &self,
        request: &OrganizationRequest,
        ctx: &mut dyn ServiceContext,
    ) -> Result<OrganizationResponse> {
        let request = RetrieveOptionSetRequest::from_request(request)?;
        let name = request
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| Error::business_rule("Name must be set in request."))?;

        let option_set_metadata = ctx.option_sets().get(&name)?.clone();
        Ok(RetrieveOptionSetResponse {
            option_set_metadata,
        }
        .into_response())
    }
}
