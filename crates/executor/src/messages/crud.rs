//! Record CRUD messages.

use crmsim_core::{ColumnSet, Entity, EntityReference, Uuid};
use crmsim_query::QueryExpression;

use crate::request::{expect_name, Message, MessageResponse};
use crate::{OrganizationRequest, OrganizationResponse, Result};

// =============================================================================
// Create
// =============================================================================

/// Create a record.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRequest {
    /// Record to create; a nil id is assigned on create
    pub target: Entity,
}

/// Id of the created record.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateResponse {
    /// Assigned id
    pub id: Uuid,
}

impl Message for CreateRequest {
    const NAME: &'static str = "Create";
    type Response = CreateResponse;

    fn into_request(self) -> OrganizationRequest {
        OrganizationRequest::new(Self::NAME).with("Target", self.target)
    }

    fn from_request(request: &OrganizationRequest) -> Result<Self> {
        expect_name(request, Self::NAME)?;
        Ok(Self {
            target: request.require("Target")?,
        })
    }
}

impl MessageResponse for CreateResponse {
    fn into_response(self) -> OrganizationResponse {
        OrganizationResponse::new(CreateRequest::NAME).with("id", self.id)
    }

    fn from_response(response: &OrganizationResponse) -> Result<Self> {
        Ok(Self {
            id: response.require("id")?,
        })
    }
}

// =============================================================================
// Retrieve
// =============================================================================

/// Read one record.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrieveRequest {
    /// Record to read
    pub target: EntityReference,
    /// Columns to return
    pub column_set: ColumnSet,
}

/// The record read.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrieveResponse {
    /// Projected record
    pub entity: Entity,
}

impl Message for RetrieveRequest {
    const NAME: &'static str = "Retrieve";
    type Response = RetrieveResponse;

    fn into_request(self) -> OrganizationRequest {
        OrganizationRequest::new(Self::NAME)
            .with("Target", self.target)
            .with("ColumnSet", self.column_set)
    }

    fn from_request(request: &OrganizationRequest) -> Result<Self> {
        expect_name(request, Self::NAME)?;
        Ok(Self {
            target: request.require("Target")?,
            column_set: request.get("ColumnSet")?.unwrap_or_default(),
        })
    }
}

impl MessageResponse for RetrieveResponse {
    fn into_response(self) -> OrganizationResponse {
        OrganizationResponse::new(RetrieveRequest::NAME).with("Entity", self.entity)
    }

    fn from_response(response: &OrganizationResponse) -> Result<Self> {
        Ok(Self {
            entity: response.require("Entity")?,
        })
    }
}

// =============================================================================
// Update
// =============================================================================

/// Merge attributes into an existing record.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRequest {
    /// Logical name, id and the attributes to set
    pub target: Entity,
}

/// Empty update response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateResponse;

impl Message for UpdateRequest {
    const NAME: &'static str = "Update";
    type Response = UpdateResponse;

    fn into_request(self) -> OrganizationRequest {
        OrganizationRequest::new(Self::NAME).with("Target", self.target)
    }

    fn from_request(request: &OrganizationRequest) -> Result<Self> {
        expect_name(request, Self::NAME)?;
        Ok(Self {
            target: request.require("Target")?,
        })
    }
}

impl MessageResponse for UpdateResponse {
    fn into_response(self) -> OrganizationResponse {
        OrganizationResponse::new(UpdateRequest::NAME)
    }

    fn from_response(_response: &OrganizationResponse) -> Result<Self> {
        Ok(UpdateResponse)
    }
}

// =============================================================================
// Delete
// =============================================================================

/// Remove a record.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteRequest {
    /// Record to remove
    pub target: EntityReference,
}

/// Empty delete response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteResponse;

impl Message for DeleteRequest {
    const NAME: &'static str = "Delete";
    type Response = DeleteResponse;

    fn into_request(self) -> OrganizationRequest {
        OrganizationRequest::new(Self::NAME).with("Target", self.target)
    }

    fn from_request(request: &OrganizationRequest) -> Result<Self> {
        expect_name(request, Self::NAME)?;
        Ok(Self {
            target: request.require("Target")?,
        })
    }
}

impl MessageResponse for DeleteResponse {
    fn into_response(self) -> OrganizationResponse {
        OrganizationResponse::new(DeleteRequest::NAME)
    }

    fn from_response(_response: &OrganizationResponse) -> Result<Self> {
        Ok(DeleteResponse)
    }
}

// =============================================================================
// RetrieveMultiple
// =============================================================================

/// Run a structured query.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrieveMultipleRequest {
    /// Query to run
    pub query: QueryExpression,
}

/// Query result rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrieveMultipleResponse {
    /// Rows, one per base record and linked match
    pub entities: Vec<Entity>,
}

impl Message for RetrieveMultipleRequest {
    const NAME: &'static str = "RetrieveMultiple";
    type Response = RetrieveMultipleResponse;

    fn into_request(self) -> OrganizationRequest {
        OrganizationRequest::new(Self::NAME).with("Query", self.query)
    }

    fn from_request(request: &OrganizationRequest) -> Result<Self> {
        expect_name(request, Self::NAME)?;
        Ok(Self {
            query: request.require("Query")?,
        })
    }
}

impl MessageResponse for RetrieveMultipleResponse {
    fn into_response(self) -> OrganizationResponse {
        OrganizationResponse::new(RetrieveMultipleRequest::NAME)
            .with("EntityCollection", self.entities)
    }

    fn from_response(response: &OrganizationResponse) -> Result<Self> {
        Ok(Self {
            entities: response.require("EntityCollection")?,
        })
    }
}
