//! Error conversion from the data-model layer.
//!
//! Store and attribute errors from [`crmsim_core`] are mapped onto the
//! executor's [`Error`] so executors can propagate them with `?`.

use crmsim_core::EntityReference;

use crate::Error;

/// Convert a core error to an executor error.
///
/// Record identity is rendered as `logical_name:id`, the same text an
/// [`EntityReference`] displays.
impl From<crmsim_core::Error> for Error {
    fn from(err: crmsim_core::Error) -> Self {
        match err {
            crmsim_core::Error::NotFound { logical_name, id } => Error::NotFound {
                entity: EntityReference::new(logical_name, id).to_string(),
            },
            crmsim_core::Error::AlreadyExists { logical_name, id } => Error::AlreadyExists {
                entity: EntityReference::new(logical_name, id).to_string(),
            },
            crmsim_core::Error::TypeMismatch {
                attribute,
                expected,
                actual,
            } => Error::TypeMismatch {
                attribute,
                expected,
                actual,
            },
            crmsim_core::Error::InvalidInput(reason) => Error::InvalidArgument { reason },
        }
    }
}
