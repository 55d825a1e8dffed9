//! Organization requests and responses.
//!
//! Every message travels as an [`OrganizationRequest`]: a request name plus a
//! [`ParameterCollection`]. Executors answer with an [`OrganizationResponse`].
//! Typed messages implement [`Message`] and convert to and from the bag, so a
//! caller can use either form.

use serde::{Deserialize, Serialize};

use crate::parameters::{FromParameter, Parameter, ParameterCollection};
use crate::{Error, Result};

/// A named request with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationRequest {
    /// Message name, e.g. `QualifyLead`
    pub request_name: String,
    /// Input parameters
    #[serde(default)]
    pub parameters: ParameterCollection,
}

impl OrganizationRequest {
    /// Request with no parameters.
    pub fn new(request_name: impl Into<String>) -> Self {
        Self {
            request_name: request_name.into(),
            parameters: ParameterCollection::new(),
        }
    }

    /// Builder: set a parameter.
    pub fn with(mut self, name: impl Into<String>, parameter: impl Into<Parameter>) -> Self {
        self.parameters.insert(name, parameter);
        self
    }

    /// Typed parameter read; see [`ParameterCollection::get_optional`].
    pub fn get<T: FromParameter>(&self, name: &str) -> Result<Option<T>> {
        self.parameters.get_optional(name)
    }

    /// Typed parameter read of a required parameter.
    pub fn require<T: FromParameter>(&self, name: &str) -> Result<T> {
        self.parameters.get_required(name)
    }
}

/// A named response with its results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationResponse {
    /// Response name, the request name for every built-in message
    pub response_name: String,
    /// Output parameters
    #[serde(default)]
    pub results: ParameterCollection,
}

impl OrganizationResponse {
    /// Response with no results.
    pub fn new(response_name: impl Into<String>) -> Self {
        Self {
            response_name: response_name.into(),
            results: ParameterCollection::new(),
        }
    }

    /// Builder: set a result.
    pub fn with(mut self, name: impl Into<String>, parameter: impl Into<Parameter>) -> Self {
        self.results.insert(name, parameter);
        self
    }

    /// Typed result read.
    pub fn get<T: FromParameter>(&self, name: &str) -> Result<Option<T>> {
        self.results.get_optional(name)
    }

    /// Typed result read of a result that must be present.
    pub fn require<T: FromParameter>(&self, name: &str) -> Result<T> {
        self.results.get_required(name)
    }
}

// =============================================================================
// Typed messages
// =============================================================================

/// A typed request that converts to and from an [`OrganizationRequest`].
pub trait Message: Sized {
    /// Request name the message travels under.
    const NAME: &'static str;

    /// Typed response of this message.
    type Response: MessageResponse;

    /// Flatten into a parameter bag.
    fn into_request(self) -> OrganizationRequest;

    /// Read back from a parameter bag.
    fn from_request(request: &OrganizationRequest) -> Result<Self>;
}

/// A typed response that converts to and from an [`OrganizationResponse`].
pub trait MessageResponse: Sized {
    /// Flatten into a parameter bag.
    fn into_response(self) -> OrganizationResponse;

    /// Read back from a parameter bag.
    fn from_response(response: &OrganizationResponse) -> Result<Self>;
}

/// Fail unless `request` travels under `expected`.
pub(crate) fn expect_name(request: &OrganizationRequest, expected: &str) -> Result<()> {
    if request.request_name == expected {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "expected a {} request, got {}",
            expected, request.request_name
        )))
    }
}
