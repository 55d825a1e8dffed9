//! Error types for message execution.
//!
//! All errors returned by the service facade and by message executors are
//! represented by the [`Error`] enum. These errors are:
//! - **Structured**: each variant has typed fields
//! - **Serializable**: a fault can be carried in a JSON response
//! - **Lossless**: conversion from [`crmsim_core::Error`] keeps every detail

use serde::{Deserialize, Serialize};

/// Message execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Not Found | `NotFound`, `MetadataNotFound` | Record or metadata missing |
/// | State | `AlreadyExists` | Record id already taken |
/// | Type | `TypeMismatch` | Attribute or parameter has another type |
/// | Validation | `InvalidArgument` | Malformed request or query |
/// | Configuration | `Configuration` | No executor, duplicate registration, bad config file |
/// | Business | `BusinessRule` | A message's precondition failed |
/// | Unsupported | `NotImplemented` | Known message option the simulator does not model |
/// | System | `Internal` | Anything else |
///
/// # Example
///
/// ```ignore
/// use crmsim_executor::{Error, Service, ServiceContext};
///
/// match service.execute(request) {
///     Ok(response) => { /* handle success */ }
///     Err(Error::BusinessRule { reason }) => {
///         println!("fault: {}", reason);
///     }
///     Err(e) => println!("error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Not Found ====================
    /// Record does not exist
    #[error("{entity} does not exist")]
    NotFound { entity: String },

    /// Metadata entry does not exist
    #[error("metadata '{name}' does not exist")]
    MetadataNotFound { name: String },

    // ==================== State Errors ====================
    /// Record with the same logical name and id already exists
    #[error("{entity} already exists")]
    AlreadyExists { entity: String },

    // ==================== Type Errors ====================
    /// Attribute or parameter holds a different type than requested
    #[error("'{attribute}' is {actual}, expected {expected}")]
    TypeMismatch {
        attribute: String,
        expected: String,
        actual: String,
    },

    // ==================== Validation Errors ====================
    /// Malformed request, record or query
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    // ==================== Configuration Errors ====================
    /// No executor for a request, rejected registration or bad config
    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    // ==================== Business Faults ====================
    /// A message precondition was violated
    #[error("{reason}")]
    BusinessRule { reason: String },

    /// The message option is recognised but not simulated
    #[error("{operation} is not implemented: {reason}")]
    NotImplemented { operation: String, reason: String },

    // ==================== System Errors ====================
    /// Internal error
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

/// Coarse error classification for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Record or metadata missing
    NotFound,
    /// Record id already taken
    AlreadyExists,
    /// Registry or configuration problem
    Configuration,
    /// Business fault raised by an executor
    BusinessRuleViolation,
    /// Unsupported message option
    NotImplemented,
    /// Typed read of the wrong type
    TypeMismatch,
    /// Malformed input
    InvalidArgument,
    /// Anything else
    Internal,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } | Error::MetadataNotFound { .. } => ErrorKind::NotFound,
            Error::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::Configuration { .. } => ErrorKind::Configuration,
            Error::BusinessRule { .. } => ErrorKind::BusinessRuleViolation,
            Error::NotImplemented { .. } => ErrorKind::NotImplemented,
            Error::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Business fault with a message.
    pub fn business_rule(reason: impl Into<String>) -> Self {
        Error::BusinessRule {
            reason: reason.into(),
        }
    }

    /// Configuration error with a message.
    pub fn configuration(reason: impl Into<String>) -> Self {
        Error::Configuration {
            reason: reason.into(),
        }
    }

    /// Invalid argument with a message.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Unsupported option of `operation`.
    pub fn not_implemented(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::NotImplemented {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Whether this is a not-found error of either flavour.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Result type for message execution.
pub type Result<T> = std::result::Result<T, Error>;
