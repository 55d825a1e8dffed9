//! The organization service facade.
//!
//! [`Service`] owns the record store, the option set metadata and the
//! executor registry of one simulated session. CRUD and queries run directly
//! against the store; every other message is dispatched through the registry
//! to an executor that receives the service back as its [`ServiceContext`].

use std::path::Path;
use std::sync::Arc;

use crmsim_core::{ColumnSet, Entity, Uuid};
use crmsim_query::{EntityQuery, QueryExpression};
use crmsim_storage::RecordStore;
use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::executor::MessageExecutor;
use crate::metadata::{MetadataRepository, OptionSetMetadata};
use crate::registry::ExecutorRegistry;
use crate::request::{Message, MessageResponse};
use crate::{OrganizationRequest, OrganizationResponse, Result, ServiceContext};

/// In-memory organization service.
///
/// # Example
///
/// ```ignore
/// use crmsim_executor::{
///     Entity, EntityReference, Message, QualifyLeadRequest, Service, ServiceContext,
/// };
///
/// let mut service = Service::new();
/// let lead = service.create(Entity::new("lead").with("subject", "Test"))?;
///
/// let mut request = QualifyLeadRequest::new(EntityReference::new("lead", lead), 3);
/// request.create_account = true;
/// let response = service.execute_message(request)?;
/// assert_eq!(response.created_entities.len(), 1);
/// ```
#[derive(Debug)]
pub struct Service {
    store: RecordStore,
    option_sets: MetadataRepository<OptionSetMetadata>,
    registry: ExecutorRegistry,
    config: ServiceConfig,
}

impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}

impl Service {
    /// Service with the default configuration and the built-in executors.
    pub fn new() -> Self {
        Self::assemble(ServiceConfig::default(), ExecutorRegistry::with_builtins(Default::default()))
    }

    /// Service built from `config`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the registration policy is invalid.
    pub fn with_config(config: ServiceConfig) -> Result<Self> {
        let policy = config.registration_policy()?;
        let registry = if config.builtin_executors {
            ExecutorRegistry::with_builtins(policy)
        } else {
            ExecutorRegistry::new(policy)
        };
        Ok(Self::assemble(config, registry))
    }

    /// Service configured from a `crmsim.toml` file.
    ///
    /// A missing file is first created with the default settings, so later
    /// sessions can edit it.
    pub fn from_config_file(path: &Path) -> Result<Self> {
        ServiceConfig::write_default_if_missing(path)?;
        Self::with_config(ServiceConfig::from_file(path)?)
    }

    /// Service built from `config`, which is also written to `path` so a later
    /// [`Service::from_config_file`] picks up the same settings.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the registration policy is invalid,
    /// in which case nothing is written.
    pub fn with_config_file(path: &Path, config: ServiceConfig) -> Result<Self> {
        config.registration_policy()?;
        config.write_to_file(path)?;
        Self::with_config(config)
    }

    fn assemble(config: ServiceConfig, registry: ExecutorRegistry) -> Self {
        debug!(target: "crmsim::service", executors = registry.len(), "service created");
        Self {
            store: RecordStore::new(),
            option_sets: MetadataRepository::new(),
            registry,
            config,
        }
    }

    // =========================================================================
    // Setup
    // =========================================================================

    /// Seed the store. Records are created in order; the first failure stops
    /// seeding and records created before it stay.
    pub fn initialize<I>(&mut self, entities: I) -> Result<Vec<Uuid>>
    where
        I: IntoIterator<Item = Entity>,
    {
        Ok(self.store.initialize(entities)?)
    }

    /// Register an additional executor under the configured policy.
    pub fn register_executor(&mut self, executor: Arc<dyn MessageExecutor>) -> Result<()> {
        self.registry.register(executor)
    }

    /// Replace the executor for the same request name, or add it.
    pub fn replace_executor(
        &mut self,
        executor: Arc<dyn MessageExecutor>,
    ) -> Option<Arc<dyn MessageExecutor>> {
        self.registry.replace(executor)
    }

    /// Mutable option set metadata.
    pub fn option_sets_mut(&mut self) -> &mut MetadataRepository<OptionSetMetadata> {
        &mut self.option_sets
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Underlying record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Executor registry.
    pub fn registry(&self) -> &ExecutorRegistry {
        &self.registry
    }

    /// Active configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    // =========================================================================
    // Typed dispatch
    // =========================================================================

    /// Execute a typed message and read its typed response back.
    pub fn execute_message<M: Message>(&mut self, message: M) -> Result<M::Response> {
        let response = self.execute(message.into_request())?;
        M::Response::from_response(&response)
    }
}

impl ServiceContext for Service {
    fn create(&mut self, entity: Entity) -> Result<Uuid> {
        Ok(self.store.create(entity)?)
    }

    fn retrieve(&self, logical_name: &str, id: Uuid, columns: &ColumnSet) -> Result<Entity> {
        Ok(self.store.retrieve(logical_name, id, columns)?)
    }

    fn update(&mut self, entity: &Entity) -> Result<()> {
        Ok(self.store.update(entity)?)
    }

    fn delete(&mut self, logical_name: &str, id: Uuid) -> Result<()> {
        Ok(self.store.delete(logical_name, id)?)
    }

    fn retrieve_multiple(&self, query: &QueryExpression) -> Result<Vec<Entity>> {
        let mut rows = crmsim_query::execute(&self.store, query)?;
        if let Some(cap) = self.config.max_query_results {
            if rows.len() > cap {
                debug!(target: "crmsim::service", entity = %query.entity_name, rows = rows.len(), cap, "query results capped");
                rows.truncate(cap);
            }
        }
        Ok(rows)
    }

    fn create_query(&self, entity_name: &str) -> EntityQuery<'_> {
        EntityQuery::new(&self.store, entity_name)
    }

    fn execute(&mut self, request: OrganizationRequest) -> Result<OrganizationResponse> {
        let executor = self.registry.resolve(&request)?;
        debug!(target: "crmsim::service", request = %request.request_name, "executing message");
        let result = executor.execute(&request, self);
        if let Err(e) = &result {
            warn!(target: "crmsim::service", request = %request.request_name, error = %e, "message failed");
        }
        result
    }

    fn option_sets(&self) -> &MetadataRepository<OptionSetMetadata> {
        &self.option_sets
    }
}
