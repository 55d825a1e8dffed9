//! InitializeFrom message.

use crmsim_core::{Entity, EntityReference};
use serde::{Deserialize, Serialize};

use crate::request::{expect_name, Message, MessageResponse};
use crate::{Error, OrganizationRequest, OrganizationResponse, Result};

/// Which target attributes the mapping is filtered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetFieldType {
    /// Every mapped attribute
    #[default]
    All,
    /// Attributes valid for create
    ValidForCreate,
    /// Attributes valid for update
    ValidForUpdate,
    /// Attributes valid for read
    ValidForRead,
}

impl TargetFieldType {
    /// Wire code.
    pub fn code(self) -> i64 {
        match self {
            TargetFieldType::All => 0,
            TargetFieldType::ValidForCreate => 1,
            TargetFieldType::ValidForUpdate => 2,
            TargetFieldType::ValidForRead => 3,
        }
    }

    /// Parse a wire code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(TargetFieldType::All),
            1 => Some(TargetFieldType::ValidForCreate),
            2 => Some(TargetFieldType::ValidForUpdate),
            3 => Some(TargetFieldType::ValidForRead),
            _ => None,
        }
    }
}

/// Build an unsaved record of `target_entity_name` from an existing record,
/// following the configured attribute maps.
#[derive(Debug, Clone, PartialEq)]
pub struct InitializeFromRequest {
    /// Source record
    pub entity_moniker: EntityReference,
    /// Logical name of the record to build
    pub target_entity_name: String,
    /// Attribute filter
    pub target_field_type: TargetFieldType,
}

impl InitializeFromRequest {
    /// Request mapping every attribute.
    pub fn new(entity_moniker: EntityReference, target_entity_name: impl Into<String>) -> Self {
        Self {
            entity_moniker,
            target_entity_name: target_entity_name.into(),
            target_field_type: TargetFieldType::All,
        }
    }
}

impl Message for InitializeFromRequest {
    const NAME: &'static str = "InitializeFrom";
    type Response = InitializeFromResponse;

    fn into_request(self) -> OrganizationRequest {
        OrganizationRequest::new(Self::NAME)
            .with("EntityMoniker", self.entity_moniker)
            .with("TargetEntityName", self.target_entity_name)
            .with("TargetFieldType", self.target_field_type.code())
    }

    fn from_request(request: &OrganizationRequest) -> Result<Self> {
        expect_name(request, Self::NAME)?;
        let target_field_type = match request.get::<i64>("TargetFieldType")? {
            None => TargetFieldType::All,
            Some(code) => TargetFieldType::from_code(code).ok_or_else(|| {
                Error::invalid_argument(format!("unknown TargetFieldType {}", code))
            })?,
        };
        Ok(Self {
            entity_moniker: request.require("EntityMoniker")?,
            target_entity_name: request.require("TargetEntityName")?,
            target_field_type,
        })
    }
}

/// The initialized, unsaved record.
#[derive(Debug, Clone, PartialEq)]
pub struct InitializeFromResponse {
    /// Record with a nil id
    pub entity: Entity,
}

impl MessageResponse for InitializeFromResponse {
    fn into_response(self) -> OrganizationResponse {
        OrganizationResponse::new(InitializeFromRequest::NAME).with("Entity", self.entity)
    }

    fn from_response(response: &OrganizationResponse) -> Result<Self> {
        Ok(Self {
            entity: response.require("Entity")?,
        })
    }
}
