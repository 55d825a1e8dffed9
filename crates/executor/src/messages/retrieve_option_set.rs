//! RetrieveOptionSet message.

use crate::metadata::OptionSetMetadata;
use crate::request::{expect_name, Message, MessageResponse};
use crate::{OrganizationRequest, OrganizationResponse, Result};

/// Look up an option set definition by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RetrieveOptionSetRequest {
    /// Option set name; required by the executor
    pub name: Option<String>,
}

impl RetrieveOptionSetRequest {
    /// Request for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl Message for RetrieveOptionSetRequest {
    const NAME: &'static str = "RetrieveOptionSet";
    type Response = RetrieveOptionSetResponse;

    fn into_request(self) -> OrganizationRequest {
        let request = OrganizationRequest::new(Self::NAME);
        match self.name {
            Some(name) => request.with("Name", name),
            None => request,
        }
    }

    fn from_request(request: &OrganizationRequest) -> Result<Self> {
        expect_name(request, Self::NAME)?;
        Ok(Self {
            name: request.get("Name")?,
        })
    }
}

/// The option set definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrieveOptionSetResponse {
    /// Stored definition
    pub option_set_metadata: OptionSetMetadata,
}

impl MessageResponse for RetrieveOptionSetResponse {
    fn into_response(self) -> OrganizationResponse {
        OrganizationResponse::new(RetrieveOptionSetRequest::NAME)
            .with("OptionSetMetadata", self.option_set_metadata)
    }

    fn from_response(response: &OrganizationResponse) -> Result<Self> {
        Ok(Self {
            option_set_metadata: response.require("OptionSetMetadata")?,
        })
    }
}
