//! Built-in message executors, one module per message family.
//!
//! | Module | Messages |
//! |--------|----------|
//! | `crud` | Create, Retrieve, Update, Delete, RetrieveMultiple |
//! | `qualify_lead` | QualifyLead |
//! | `initialize_from` | InitializeFrom |
//! | `close_quote` | CloseQuote |
//! | `retrieve_option_set` | RetrieveOptionSet |

use std::sync::Arc;

use crate::executor::MessageExecutor;

pub mod close_quote;
pub mod crud;
pub mod initialize_from;
pub mod qualify_lead;
pub mod retrieve_option_set;

pub use close_quote::CloseQuoteExecutor;
pub use crud::{
    CreateExecutor, DeleteExecutor, RetrieveExecutor, RetrieveMultipleExecutor, UpdateExecutor,
};
pub use initialize_from::InitializeFromExecutor;
pub use qualify_lead::QualifyLeadExecutor;
pub use retrieve_option_set::RetrieveOptionSetExecutor;

/// The built-in executors, each claiming a distinct request name.
pub fn builtin_executors() -> Vec<Arc<dyn MessageExecutor>> {
    vec![
        Arc::new(CreateExecutor),
        Arc::new(RetrieveExecutor),
        Arc::new(UpdateExecutor),
        Arc::new(DeleteExecutor),
        Arc::new(RetrieveMultipleExecutor),
        Arc::new(QualifyLeadExecutor),
        Arc::new(InitializeFromExecutor),
        Arc::new(CloseQuoteExecutor),
        Arc::new(RetrieveOptionSetExecutor),
    ]
}
