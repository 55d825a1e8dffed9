//! CloseQuote executor.

use crmsim_core::{Entity, EntityReference};

use crate::executor::MessageExecutor;
use crate::messages::{CloseQuoteRequest, CloseQuoteResponse};
use crate::request::{Message, MessageResponse};
use crate::{Error, OrganizationRequest, OrganizationResponse, Result, ServiceContext};

/// Handles `CloseQuote`: sets the quote's status code.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloseQuoteExecutor;

impl MessageExecutor for CloseQuoteExecutor {
    fn request_name(&self) -> &'static str {
        CloseQuoteRequest::NAME
    }

    fn execute(
        &self,
        request: &OrganizationRequest,
        ctx: &mut dyn ServiceContext,
    ) -> Result<OrganizationResponse> {
        let request = CloseQuoteRequest::from_request(request)?;
        let quote: EntityReference = request
            .quote_close
            .get_typed("quoteid")?
            .ok_or_else(|| Error::business_rule("QuoteClose must reference a quote through quoteid."))?;

        let update = Entity::with_id(quote.logical_name, quote.id).with("statuscode", request.status);
        ctx.update(&update)?;
        Ok(CloseQuoteResponse.into_response())
    }
}
