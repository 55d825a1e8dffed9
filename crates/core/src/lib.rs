//! Core types for crmsim
//!
//! This crate defines the record model shared by every other crate:
//! - Entity: a typed record keyed by (logical name, id)
//! - Value: tagged attribute value
//! - EntityReference, OptionSetValue, Money, AliasedValue
//! - ColumnSet: attribute selector
//! - Error: record and store errors

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod column_set;
pub mod entity;
pub mod error;
pub mod reference;
pub mod value;

pub use column_set::ColumnSet;
pub use entity::{primary_id_attribute, Entity};
pub use error::{Error, Result};
pub use reference::{AliasedValue, EntityReference, Money, OptionSetValue};
pub use value::{FromValue, Value};

// Re-exported so downstream crates name the same id type.
pub use uuid::Uuid;
