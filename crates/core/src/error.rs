//! Error types for the record model and store
//!
//! This module defines the errors raised below the service layer.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for core and storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for records and the record store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No record with this logical name and id
    #[error("{logical_name} with id {id} does not exist")]
    NotFound {
        /// Logical name that was looked up
        logical_name: String,
        /// Id that was looked up
        id: Uuid,
    },

    /// A record with this logical name and id is already stored
    #[error("{logical_name} with id {id} already exists")]
    AlreadyExists {
        /// Logical name of the duplicate
        logical_name: String,
        /// Duplicate id
        id: Uuid,
    },

    /// Attribute holds a different value type than requested
    #[error("attribute '{attribute}' is {actual}, expected {expected}")]
    TypeMismatch {
        /// Attribute name
        attribute: String,
        /// Requested type
        expected: String,
        /// Stored type
        actual: String,
    },

    /// Malformed input (empty logical name, bad query, ...)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Build a NotFound error.
    pub fn not_found(logical_name: impl Into<String>, id: Uuid) -> Self {
        Error::NotFound {
            logical_name: logical_name.into(),
            id,
        }
    }

    /// Build an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    /// Whether this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
