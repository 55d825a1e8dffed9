//! QualifyLead message.

use crmsim_core::{EntityReference, OptionSetValue};

use crate::request::{expect_name, Message, MessageResponse};
use crate::{Error, OrganizationRequest, OrganizationResponse, Result};

/// Qualify a lead, optionally creating an account, a contact and an
/// opportunity that point back at it.
#[derive(Debug, Clone, PartialEq)]
pub struct QualifyLeadRequest {
    /// Lead to qualify
    pub lead_id: EntityReference,
    /// Create an account from the lead
    pub create_account: bool,
    /// Create a contact from the lead
    pub create_contact: bool,
    /// Create an opportunity from the lead
    pub create_opportunity: bool,
    /// Currency of the created opportunity
    pub opportunity_currency_id: Option<EntityReference>,
    /// Customer of the created opportunity; an account or a contact
    pub opportunity_customer_id: Option<EntityReference>,
    /// Status code the lead ends up with
    pub status: OptionSetValue,
}

impl QualifyLeadRequest {
    /// Request that only changes the lead status.
    pub fn new(lead_id: EntityReference, status: impl Into<OptionSetValue>) -> Self {
        Self {
            lead_id,
            create_account: false,
            create_contact: false,
            create_opportunity: false,
            opportunity_currency_id: None,
            opportunity_customer_id: None,
            status: status.into(),
        }
    }
}

impl Message for QualifyLeadRequest {
    const NAME: &'static str = "QualifyLead";
    type Response = QualifyLeadResponse;

    fn into_request(self) -> OrganizationRequest {
        let mut request = OrganizationRequest::new(Self::NAME)
            .with("LeadId", self.lead_id)
            .with("CreateAccount", self.create_account)
            .with("CreateContact", self.create_contact)
            .with("CreateOpportunity", self.create_opportunity)
            .with("Status", self.status);
        if let Some(currency) = self.opportunity_currency_id {
            request.parameters.insert("OpportunityCurrencyId", currency);
        }
        if let Some(customer) = self.opportunity_customer_id {
            request.parameters.insert("OpportunityCustomerId", customer);
        }
        request
    }

    fn from_request(request: &OrganizationRequest) -> Result<Self> {
        expect_name(request, Self::NAME)?;
        let lead_id = request
            .get("LeadId")?
            .ok_or_else(|| Error::business_rule("Lead Id must be set in request."))?;
        Ok(Self {
            lead_id,
            create_account: request.get("CreateAccount")?.unwrap_or(false),
            create_contact: request.get("CreateContact")?.unwrap_or(false),
            create_opportunity: request.get("CreateOpportunity")?.unwrap_or(false),
            opportunity_currency_id: request.get("OpportunityCurrencyId")?,
            opportunity_customer_id: request.get("OpportunityCustomerId")?,
            status: request.require("Status")?,
        })
    }
}

/// References to the records created, in account, contact, opportunity
/// order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QualifyLeadResponse {
    /// Created records
    pub created_entities: Vec<EntityReference>,
}

impl MessageResponse for QualifyLeadResponse {
    fn into_response(self) -> OrganizationResponse {
        OrganizationResponse::new(QualifyLeadRequest::NAME)
            .with("CreatedEntities", self.created_entities)
    }

    fn from_response(response: &OrganizationResponse) -> Result<Self> {
        Ok(Self {
            created_entities: response.get("CreatedEntities")?.unwrap_or_default(),
        })
    }
}
