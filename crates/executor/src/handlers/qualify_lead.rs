//! QualifyLead executor.
//!
//! Creates the requested account, contact and opportunity, each carrying an
//! `originatingleadid` back-reference, then sets the lead's status code.
//! Records created before a failure stay created.

use crmsim_core::{Entity, EntityReference};
use tracing::info;

use crate::executor::MessageExecutor;
use crate::messages::{QualifyLeadRequest, QualifyLeadResponse};
use crate::request::{Message, MessageResponse};
use crate::{Error, OrganizationRequest, OrganizationResponse, Result, ServiceContext};

/// Back-reference from a record created by qualification to its lead.
pub const ORIGINATING_LEAD: &str = "originatingleadid";

/// Handles `QualifyLead`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualifyLeadExecutor;

impl MessageExecutor for QualifyLeadExecutor {
    fn request_name(&self) -> &'static str {
        QualifyLeadRequest::NAME
    }

    fn execute(
        &self,
        request: &OrganizationRequest,
        ctx: &mut dyn ServiceContext,
    ) -> Result<OrganizationResponse> {
        let request = QualifyLeadRequest::from_request(request)?;

        let leads = ctx
            .create_query("lead")
            .where_equal("leadid", request.lead_id.id)
            .count()?;
        if leads != 1 {
            return Err(Error::business_rule(format!(
                "Number of Leads by given LeadId should be 1. Instead it is {}.",
                leads
            )));
        }

        let mut created = Vec::new();
        if request.create_account {
            let account = Entity::new("account").with(ORIGINATING_LEAD, request.lead_id.clone());
            created.push(create_reference(ctx, account)?);
        }
        if request.create_contact {
            let contact = Entity::new("contact").with(ORIGINATING_LEAD, request.lead_id.clone());
            created.push(create_reference(ctx, contact)?);
        }
        if request.create_opportunity {
            let mut opportunity = Entity::new("opportunity");
            if let Some(currency) = &request.opportunity_currency_id {
                opportunity.set("transactioncurrencyid", currency.clone());
            }
            if let Some(customer) = &request.opportunity_customer_id {
                if !customer.is_a("account") && !customer.is_a("contact") {
                    return Err(Error::business_rule(format!(
                        "Opportunity Customer Id should be connected with Account or Contact. \
                         Instead OpportunityCustomerId was given with Entity.LogicalName = {}",
                        customer.logical_name
                    )));
                }
                opportunity.set("customerid", customer.clone());
            }
            opportunity.set(ORIGINATING_LEAD, request.lead_id.clone());
            created.push(create_reference(ctx, opportunity)?);
        }

        let lead = Entity::with_id("lead", request.lead_id.id).with("statuscode", request.status);
        ctx.update(&lead)?;

        info!(target: "crmsim::qualify_lead", lead = %request.lead_id.id, created = created.len(), "lead qualified");
        Ok(QualifyLeadResponse {
            created_entities: created,
        }
        .into_response())
    }
}

fn create_reference(ctx: &mut dyn ServiceContext, entity: Entity) -> Result<EntityReference> {
    let logical_name = entity.logical_name.clone();
    let id = ctx.create(entity)?;
    Ok(EntityReference::new(logical_name, id))
}
