//! The message executor contract.
//!
//! An executor handles one kind of request. The registry asks each executor
//! in turn whether it can handle a request; the first that answers yes runs
//! it against the [`ServiceContext`] it is handed.

use crate::{OrganizationRequest, OrganizationResponse, Result, ServiceContext};

/// A pluggable request handler.
///
/// Executors are stateless. Everything they read or change goes through the
/// context, which is the service that dispatched the request, so an executor
/// can create records, run queries and execute nested messages.
///
/// # Example
///
/// ```ignore
/// struct WhoAmIExecutor;
///
/// impl MessageExecutor for WhoAmIExecutor {
///     fn request_name(&self) -> &'static str {
///         "WhoAmI"
///     }
///
///     fn execute(
///         &self,
///         _request: &OrganizationRequest,
///         _ctx: &mut dyn ServiceContext,
///     ) -> Result<OrganizationResponse> {
///         Ok(OrganizationResponse::new("WhoAmI").with("UserId", Uuid::nil()))
///     }
/// }
/// ```
pub trait MessageExecutor: Send + Sync {
    /// Request name this executor claims.
    fn request_name(&self) -> &'static str;

    /// Whether this executor handles `request`. Matches on the request name
    /// unless overridden.
    fn can_execute(&self, request: &OrganizationRequest) -> bool {
        request.request_name == self.request_name()
    }

    /// Run the request.
    fn execute(
        &self,
        request: &OrganizationRequest,
        ctx: &mut dyn ServiceContext,
    ) -> Result<OrganizationResponse>;
}
