//! crmsim - in-memory simulator of a CRM organization service
//!
//! crmsim lets business logic written against a CRM organization service run
//! against a local, mutable record store. Requests are executed by pluggable
//! message executors and return realistic responses and faults without a
//! server.
//!
//! # Quick Start
//!
//! ```ignore
//! use crmsim::{Entity, EntityReference, InitializeFromRequest, Service, ServiceContext};
//!
//! let mut service = Service::new();
//! let account = service.create(Entity::new("account").with("name", "Contoso"))?;
//!
//! let response = service.execute_message(InitializeFromRequest::new(
//!     EntityReference::new("account", account),
//!     "contact",
//! ))?;
//! ```
//!
//! # Architecture
//!
//! Every message goes through the [`Service`], which resolves an executor
//! from its [`ExecutorRegistry`] and hands itself to the executor as the
//! [`ServiceContext`]. Storage and query internals are not exposed beyond
//! the types the executor API re-exports.

// Re-export the public API from crmsim-executor
pub use crmsim_executor::*;
