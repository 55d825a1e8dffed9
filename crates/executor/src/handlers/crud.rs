//! CRUD executors.
//!
//! Thin wrappers that route the record messages through the same
//! primitives the service exposes directly.

use crate::executor::MessageExecutor;
use crate::messages::{
    CreateRequest, CreateResponse, DeleteRequest, DeleteResponse, RetrieveMultipleRequest,
    RetrieveMultipleResponse, RetrieveRequest, RetrieveResponse, UpdateRequest, UpdateResponse,
};
use crate::request::{Message, MessageResponse};
use crate::{OrganizationRequest, OrganizationResponse, Result, ServiceContext};

/// Handles `Create`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateExecutor;

impl MessageExecutor for CreateExecutor {
    fn request_name(&self) -> &'static str {
        CreateRequest::NAME
    }

    fn execute(
        &self,
        request: &OrganizationRequest,
        ctx: &mut dyn ServiceContext,
    ) -> Result<OrganizationResponse> {
        let request = CreateRequest::from_request(request)?;
        let id = ctx.create(request.target)?;
        Ok(CreateResponse { id }.into_response())
    }
}

/// Handles `Retrieve`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetrieveExecutor;

impl MessageExecutor for RetrieveExecutor {
    fn request_name(&self) -> &'static str {
        RetrieveRequest::NAME
    }

    fn execute(
        &self,
        request: &OrganizationRequest,
        ctx: &mut dyn ServiceContext,
    ) -> Result<OrganizationResponse> {
        let request = RetrieveRequest::from_request(request)?;
        let entity = ctx.retrieve(
            &request.target.logical_name,
            request.target.id,
            &request.column_set,
        )?;
        Ok(RetrieveResponse { entity }.into_response())
    }
}

/// Handles `Update`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateExecutor;

impl MessageExecutor for UpdateExecutor {
    fn request_name(&self) -> &'static str {
        UpdateRequest::NAME
    }

    fn execute(
        &self,
        request: &OrganizationRequest,
        ctx: &mut dyn ServiceContext,
    ) -> Result<OrganizationResponse> {
        let request = UpdateRequest::from_request(request)?;
        ctx.update(&request.target)?;
        Ok(UpdateResponse.into_response())
    }
}

/// Handles `Delete`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteExecutor;

impl MessageExecutor for DeleteExecutor {
    fn request_name(&self) -> &'static str {
        DeleteRequest::NAME
    }

    fn execute(
        &self,
        request: &OrganizationRequest,
        ctx: &mut dyn ServiceContext,
    ) -> Result<OrganizationResponse> {
        let request = DeleteRequest::from_request(request)?;
        ctx.delete(&request.target.logical_name, request.target.id)?;
        Ok(DeleteResponse.into_response())
    }
}

/// Handles `RetrieveMultiple`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetrieveMultipleExecutor;

impl MessageExecutor for RetrieveMultipleExecutor {
    fn request_name(&self) -> &'static str {
        RetrieveMultipleRequest::NAME
    }

    fn execute(
        &self,
        request: &OrganizationRequest,
        ctx: &mut dyn ServiceContext,
    ) -> Result<OrganizationResponse> {
        let request = RetrieveMultipleRequest::from_request(request)?;
        let entities = ctx.retrieve_multiple(&request.query)?;
        Ok(RetrieveMultipleResponse { entities }.into_response())
    }
}
