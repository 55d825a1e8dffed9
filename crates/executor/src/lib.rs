//! # crmsim Executor
//!
//! The public API of crmsim, an in-memory simulator of a CRM organization
//! service.
//!
//! This is the only crate users need to import. It provides:
//! - [`Service`] - the organization service facade over an in-memory store
//! - [`OrganizationRequest`]/[`OrganizationResponse`] - the message bag form
//! - typed messages ([`QualifyLeadRequest`], [`InitializeFromRequest`], ...)
//! - [`MessageExecutor`] and [`ExecutorRegistry`] - pluggable message handlers
//!
//! ## Quick Start
//!
//! ```text
//! use crmsim_executor::{Entity, EntityReference, QualifyLeadRequest, Service, ServiceContext};
//!
//! let mut service = Service::new();
//! let lead = service.create(Entity::new("lead").with("subject", "Interested"))?;
//!
//! let mut request = QualifyLeadRequest::new(EntityReference::new("lead", lead), 3);
//! request.create_account = true;
//! let response = service.execute_message(request)?;
//! ```
//!
//! ## Built-in Messages
//!
//! | Message | Effect |
//! |---------|--------|
//! | **Create/Retrieve/Update/Delete** | Record CRUD |
//! | **RetrieveMultiple** | Structured query with joins |
//! | **QualifyLead** | Creates account/contact/opportunity from a lead, sets its status |
//! | **InitializeFrom** | Builds an unsaved record from attribute maps |
//! | **CloseQuote** | Sets a quote's status |
//! | **RetrieveOptionSet** | Returns option set metadata |
//!
//! Any other message is added by registering a [`MessageExecutor`].

#![warn(missing_docs)]

mod config;
mod context;
mod convert;
mod error;
mod executor;
mod metadata;
mod parameters;
mod registry;
mod request;
mod service;

// Message and handler modules
pub mod handlers;
pub mod messages;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use config::{ServiceConfig, CONFIG_FILE_NAME};
pub use context::ServiceContext;
pub use error::{Error, ErrorKind, Result};
pub use executor::MessageExecutor;
pub use metadata::{MetadataRepository, OptionMetadata, OptionSetMetadata};
pub use parameters::{FromParameter, Parameter, ParameterCollection};
pub use registry::{ExecutorRegistry, RegistrationPolicy};
pub use request::{Message, MessageResponse, OrganizationRequest, OrganizationResponse};
pub use service::Service;

pub use messages::{
    CloseQuoteRequest, CloseQuoteResponse, CreateRequest, CreateResponse, DeleteRequest,
    DeleteResponse, InitializeFromRequest, InitializeFromResponse, QualifyLeadRequest,
    QualifyLeadResponse, RetrieveMultipleRequest, RetrieveMultipleResponse, RetrieveOptionSetRequest,
    RetrieveOptionSetResponse, RetrieveRequest, RetrieveResponse, TargetFieldType, UpdateRequest,
    UpdateResponse,
};

// Data model and query types
pub use crmsim_core::{
    primary_id_attribute, AliasedValue, ColumnSet, Entity, EntityReference, Money,
    OptionSetValue, Uuid, Value,
};
pub use crmsim_query::{
    ConditionExpression, ConditionOperator, EntityQuery, JoinKeyMatch, JoinOperator, LinkEntity,
    OrderExpression, OrderType, QueryExpression,
};
