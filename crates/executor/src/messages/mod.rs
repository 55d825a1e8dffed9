//! Typed request/response pairs for the built-in messages.
//!
//! | Module | Messages |
//! |--------|----------|
//! | `crud` | Create, Retrieve, Update, Delete, RetrieveMultiple |
//! | `qualify_lead` | QualifyLead |
//! | `initialize_from` | InitializeFrom |
//! | `close_quote` | CloseQuote |
//! | `retrieve_option_set` | RetrieveOptionSet |
//!
//! Parameter names match the ones the CRM service uses on the wire.

pub mod close_quote;
pub mod crud;
pub mod initialize_from;
pub mod qualify_lead;
pub mod retrieve_option_set;

pub use close_quote::{CloseQuoteRequest, CloseQuoteResponse};
pub use crud::{
    CreateRequest, CreateResponse, DeleteRequest, DeleteResponse, RetrieveMultipleRequest,
    RetrieveMultipleResponse, RetrieveRequest, RetrieveResponse, UpdateRequest, UpdateResponse,
};
pub use initialize_from::{InitializeFromRequest, InitializeFromResponse, TargetFieldType};
pub use qualify_lead::{QualifyLeadRequest, QualifyLeadResponse};
pub use retrieve_option_set::{RetrieveOptionSetRequest, RetrieveOptionSetResponse};
