//! CRM Scenario Test Suite
//!
//! End-to-end scenarios run through the public `crmsim` API: records are
//! seeded into a fresh [`Service`], messages are executed, and the store is
//! inspected afterwards.
//!
//! ## Modules
//!
//! - `qualify_lead`: lead qualification, success and fault paths
//! - `initialize_from`: attribute-mapped record initialization
//! - `close_quote`, `retrieve_option_set`: status and metadata messages
//! - `registry`: executor resolution and registration policies
//! - `store`: CRUD contract through the facade
//! - `query`: joins and filters through `retrieve_multiple`
//! - `config`: services built from `crmsim.toml`
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test crm_scenarios
//!
//! # Run one module
//! cargo test --test crm_scenarios qualify_lead::
//!
//! # Run with log output
//! RUST_LOG=debug cargo test --test crm_scenarios -- --nocapture
//! ```

use crmsim::{Entity, EntityReference, Service, ServiceContext};

/// Install a test log subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}

/// Fresh service with logging enabled.
pub fn service() -> Service {
    init_tracing();
    Service::new()
}

/// Create a record and return a reference to it.
pub fn seed(service: &mut Service, entity: Entity) -> EntityReference {
    let logical_name = entity.logical_name.clone();
    let id = service.create(entity).unwrap();
    EntityReference::new(logical_name, id)
}

mod close_quote;
mod config;
mod initialize_from;
mod qualify_lead;
mod query;
mod registry;
mod retrieve_option_set;
mod store;
