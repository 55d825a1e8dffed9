//! InitializeFrom executor.
//!
//! Attribute maps are plain records: an `entitymap` names a source and a
//! target entity, and each linked `attributemap` maps one source attribute
//! to one target attribute. The executor reads the maps with a query, reads
//! the source record and copies the mapped values into a new unsaved record.

use crmsim_core::{primary_id_attribute, ColumnSet, Entity, EntityReference, Value};
use crmsim_query::{JoinOperator, LinkEntity, QueryExpression};
use tracing::debug;

use crate::executor::MessageExecutor;
use crate::messages::{InitializeFromRequest, InitializeFromResponse, TargetFieldType};
use crate::request::{Message, MessageResponse};
use crate::{Error, OrganizationRequest, OrganizationResponse, Result, ServiceContext};

const ATTRIBUTE_MAP_ALIAS: &str = "attributemap";

/// Handles `InitializeFrom`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitializeFromExecutor;

impl MessageExecutor for InitializeFromExecutor {
    fn request_name(&self) -> &'static str {
        InitializeFromRequest::NAME
    }

    fn execute(
        &self,
        request: &OrganizationRequest,
        ctx: &mut dyn ServiceContext,
    ) -> Result<OrganizationResponse> {
        let request = InitializeFromRequest::from_request(request)?;
        if request.target_field_type != TargetFieldType::All {
            return Err(Error::not_implemented(
                InitializeFromRequest::NAME,
                "filtering attributes by a TargetFieldType other than All",
            ));
        }

        let source_ref = &request.entity_moniker;
        let mappings = attribute_mappings(ctx, &source_ref.logical_name, &request.target_entity_name)?;
        let columns = if mappings.is_empty() {
            ColumnSet::All
        } else {
            ColumnSet::new(mappings.iter().map(|(source, _)| source.clone()))
        };
        let source = ctx.retrieve(&source_ref.logical_name, source_ref.id, &columns)?;

        let source_id_attribute = primary_id_attribute(&source.logical_name);
        let mut target = Entity::new(request.target_entity_name.clone());
        for (name, value) in &source.attributes {
            // First map for an attribute wins.
            let Some((_, target_name)) = mappings.iter().find(|(s, _)| s == name) else {
                continue;
            };
            let value = if name.eq_ignore_ascii_case(&source_id_attribute) {
                match value.as_guid() {
                    Some(id) => Value::Reference(EntityReference::new(source.logical_name.clone(), id)),
                    None => value.clone(),
                }
            } else {
                value.clone()
            };
            target.set(target_name.clone(), value);
        }

        debug!(
            target: "crmsim::initialize_from",
            source = %source_ref,
            target_entity = %request.target_entity_name,
            mapped = target.len(),
            "record initialized"
        );
        Ok(InitializeFromResponse { entity: target }.into_response())
    }
}

/// `(source attribute, target attribute)` pairs configured for the entity
/// pair, in query order.
fn attribute_mappings(
    ctx: &dyn ServiceContext,
    source_entity: &str,
    target_entity: &str,
) -> Result<Vec<(String, String)>> {
    let query = QueryExpression::new("entitymap")
        .columns(ColumnSet::new(["sourceentityname", "targetentityname"]))
        .where_equal("sourceentityname", source_entity)
        .where_equal("targetentityname", target_entity)
        .link(
            LinkEntity::new(
                "entitymap",
                "attributemap",
                "entitymapid",
                "entitymapid",
                JoinOperator::Inner,
            )
            .alias(ATTRIBUTE_MAP_ALIAS)
            .columns(ColumnSet::new(["sourceattributename", "targetattributename"])),
        );

    ctx.retrieve_multiple(&query)?
        .iter()
        .map(|row| -> Result<(String, String)> {
            Ok((
                aliased_name(row, "sourceattributename")?,
                aliased_name(row, "targetattributename")?,
            ))
        })
        .collect()
}

fn aliased_name(row: &Entity, attribute: &str) -> Result<String> {
    let column = format!("{}.{}", ATTRIBUTE_MAP_ALIAS, attribute);
    row.get(&column)
        .and_then(|v| v.unaliased().as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            Error::business_rule(format!(
                "attribute map of entity map {} has no {}",
                row.id, attribute
            ))
        })
}
