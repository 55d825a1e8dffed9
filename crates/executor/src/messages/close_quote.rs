//! CloseQuote message.

use crmsim_core::{Entity, OptionSetValue};

use crate::request::{expect_name, Message, MessageResponse};
use crate::{OrganizationRequest, OrganizationResponse, Result};

/// Close a quote with a status.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseQuoteRequest {
    /// `quoteclose` activity; its `quoteid` names the quote
    pub quote_close: Entity,
    /// Status code the quote ends up with
    pub status: OptionSetValue,
}

impl Message for CloseQuoteRequest {
    const NAME: &'static str = "CloseQuote";
    type Response = CloseQuoteResponse;

    fn into_request(self) -> OrganizationRequest {
        OrganizationRequest::new(Self::NAME)
            .with("QuoteClose", self.quote_close)
            .with("Status", self.status)
    }

    fn from_request(request: &OrganizationRequest) -> Result<Self> {
        expect_name(request, Self::NAME)?;
        Ok(Self {
            quote_close: request.require("QuoteClose")?,
            status: request.require("Status")?,
        })
    }
}

/// Empty close response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CloseQuoteResponse;

impl MessageResponse for CloseQuoteResponse {
    fn into_response(self) -> OrganizationResponse {
        OrganizationResponse::new(CloseQuoteRequest::NAME)
    }

    fn from_response(_response: &OrganizationResponse) -> Result<Self> {
        Ok(CloseQuoteResponse)
    }
}
