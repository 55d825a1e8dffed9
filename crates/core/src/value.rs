//! Attribute value types for crmsim
//!
//! This module defines:
//! - Value: tagged enum for every attribute type a record can hold
//! - FromValue: typed extraction that fails instead of coercing
//!
//! ## Value Model
//!
//! - `Guid`, `String`, `Int`, `Float`, `Money`, `Bool`, `DateTime`
//! - `OptionSet`: coded enumeration, compared by code
//! - `Reference`: lookup to another record, compared by (logical name, id)
//! - `Aliased`: a value projected from a linked entity in a query
//!
//! ### Type Rules
//!
//! - There is no null variant. An unset attribute is absent from the record.
//! - No implicit coercions: `Int(1) != Float(1.0)`, `Guid(x) != Reference(_, x)`.
//!   The query engine applies CRM comparison rules explicitly; plain equality
//!   never does.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reference::{AliasedValue, EntityReference, Money, OptionSetValue};

/// Attribute value stored on a record.
///
/// Different variants are never equal, even when they carry the same
/// underlying number or identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Unique identifier
    Guid(Uuid),
    /// UTF-8 string
    String(String),
    /// Whole number
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Currency amount
    Money(Money),
    /// Two-option attribute
    Bool(bool),
    /// Date and time, always UTC
    DateTime(DateTime<Utc>),
    /// Option set code
    OptionSet(OptionSetValue),
    /// Lookup to another record
    Reference(EntityReference),
    /// Value coming from a linked entity
    Aliased(Box<AliasedValue>),
}

impl Value {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Guid(_) => "Guid",
            Value::String(_) => "String",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Money(_) => "Money",
            Value::Bool(_) => "Bool",
            Value::DateTime(_) => "DateTime",
            Value::OptionSet(_) => "OptionSet",
            Value::Reference(_) => "Reference",
            Value::Aliased(_) => "Aliased",
        }
    }

    /// Get as Uuid if this is a Guid value
    pub fn as_guid(&self) -> Option<Uuid> {
        match self {
            Value::Guid(id) => Some(*id),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the option code if this is an OptionSet value
    pub fn as_option_set(&self) -> Option<&OptionSetValue> {
        match self {
            Value::OptionSet(o) => Some(o),
            _ => None,
        }
    }

    /// Get as &EntityReference if this is a Reference value
    pub fn as_reference(&self) -> Option<&EntityReference> {
        match self {
            Value::Reference(r) => Some(r),
            _ => None,
        }
    }

    /// Get as &AliasedValue if this is an Aliased value
    pub fn as_aliased(&self) -> Option<&AliasedValue> {
        match self {
            Value::Aliased(a) => Some(a),
            _ => None,
        }
    }

    /// Strip any number of aliasing layers.
    pub fn unaliased(&self) -> &Value {
        match self {
            Value::Aliased(a) => a.value.unaliased(),
            other => other,
        }
    }

    /// Identifier carried by this value, for id-based joins.
    ///
    /// `Guid` yields itself, `Reference` yields the referenced id, aliased
    /// values are unwrapped first. Anything else has no identifier.
    pub fn referenced_id(&self) -> Option<Uuid> {
        match self.unaliased() {
            Value::Guid(id) => Some(*id),
            Value::Reference(r) => Some(r.id),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Guid(id) => write!(f, "{}", id),
            Value::String(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Money(m) => write!(f, "{}", m.0),
            Value::Bool(b) => write!(f, "{}", b),
            Value::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Value::OptionSet(o) => write!(f, "{}", o.value),
            Value::Reference(r) => write!(f, "{}", r),
            Value::Aliased(a) => write!(f, "{}", a.value),
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Uuid> for Value {
    fn from(id: Uuid) -> Self {
        Value::Guid(id)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt)
    }
}

impl From<Money> for Value {
    fn from(m: Money) -> Self {
        Value::Money(m)
    }
}

impl From<OptionSetValue> for Value {
    fn from(o: OptionSetValue) -> Self {
        Value::OptionSet(o)
    }
}

impl From<EntityReference> for Value {
    fn from(r: EntityReference) -> Self {
        Value::Reference(r)
    }
}

impl From<AliasedValue> for Value {
    fn from(a: AliasedValue) -> Self {
        Value::Aliased(Box::new(a))
    }
}

// ============================================================================
// Typed extraction
// ============================================================================

/// Types that can be read out of a [`Value`] without coercion.
///
/// `from_value` returns `None` when the variant does not match; callers turn
/// that into a `TypeMismatch` error naming [`FromValue::TYPE_NAME`].
pub trait FromValue: Sized {
    /// Variant name reported in type mismatch errors.
    const TYPE_NAME: &'static str;

    /// Extract the value if the variant matches.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_from_value {
    ($ty:ty, $name:literal, $pat:pat => $out:expr) => {
        impl FromValue for $ty {
            const TYPE_NAME: &'static str = $name;

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    $pat => Some($out),
                    _ => None,
                }
            }
        }
    };
}

impl_from_value!(Uuid, "Guid", Value::Guid(id) => *id);
impl_from_value!(String, "String", Value::String(s) => s.clone());
impl_from_value!(i64, "Int", Value::Int(i) => *i);
impl_from_value!(f64, "Float", Value::Float(f) => *f);
impl_from_value!(Money, "Money", Value::Money(m) => *m);
impl_from_value!(bool, "Bool", Value::Bool(b) => *b);
impl_from_value!(DateTime<Utc>, "DateTime", Value::DateTime(dt) => *dt);
impl_from_value!(OptionSetValue, "OptionSet", Value::OptionSet(o) => o.clone());
impl_from_value!(EntityReference, "Reference", Value::Reference(r) => r.clone());
impl_from_value!(AliasedValue, "Aliased", Value::Aliased(a) => (**a).clone());
