//! The context executors run against.

use crmsim_core::{ColumnSet, Entity, Uuid};
use crmsim_query::{EntityQuery, QueryExpression};

use crate::metadata::{MetadataRepository, OptionSetMetadata};
use crate::{OrganizationRequest, OrganizationResponse, Result};

/// Service operations available to a running executor.
///
/// [`Service`](crate::Service) implements this and passes itself to every
/// executor it dispatches to. Mutations commit immediately: there is no
/// transaction, so a failure partway through a message leaves earlier
/// changes in place.
pub trait ServiceContext {
    /// Create a record and return its id.
    fn create(&mut self, entity: Entity) -> Result<Uuid>;

    /// Read a record projected to `columns`.
    fn retrieve(&self, logical_name: &str, id: Uuid, columns: &ColumnSet) -> Result<Entity>;

    /// Merge the supplied attributes into an existing record.
    fn update(&mut self, entity: &Entity) -> Result<()>;

    /// Remove a record.
    fn delete(&mut self, logical_name: &str, id: Uuid) -> Result<()>;

    /// Run a structured query. Results are capped by `max_query_results`.
    fn retrieve_multiple(&self, query: &QueryExpression) -> Result<Vec<Entity>>;

    /// Start a fluent query over `entity_name`.
    ///
    /// The view reads the store directly and is not capped by
    /// `max_query_results`, so counts taken through it are exact.
    fn create_query(&self, entity_name: &str) -> EntityQuery<'_>;

    /// Dispatch a nested request.
    fn execute(&mut self, request: OrganizationRequest) -> Result<OrganizationResponse>;

    /// Option set definitions.
    fn option_sets(&self) -> &MetadataRepository<OptionSetMetadata>;
}
