//! Lightweight value types that point at or describe other data:
//! record references, option set codes, money and aliased values.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value::Value;

/// Pointer to a record by (logical name, id).
///
/// Carries no attribute data. The optional `name` is display text only and
/// does not take part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityReference {
    /// Logical name of the referenced entity, e.g. `account`
    pub logical_name: String,
    /// Id of the referenced record
    pub id: Uuid,
    /// Primary name of the referenced record, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EntityReference {
    /// Create a reference without display name.
    pub fn new(logical_name: impl Into<String>, id: Uuid) -> Self {
        Self {
            logical_name: logical_name.into(),
            id,
            name: None,
        }
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether this reference points at the given entity type.
    pub fn is_a(&self, logical_name: &str) -> bool {
        self.logical_name == logical_name
    }
}

impl PartialEq for EntityReference {
    fn eq(&self, other: &Self) -> bool {
        self.logical_name == other.logical_name && self.id == other.id
    }
}

impl Eq for EntityReference {}

impl Hash for EntityReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.logical_name.hash(state);
        self.id.hash(state);
    }
}

impl fmt::Display for EntityReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.logical_name, self.id)
    }
}

/// Option set (picklist) value.
///
/// Equality is by code. The label is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionSetValue {
    /// Numeric option code
    pub value: i32,
    /// Display label, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl OptionSetValue {
    /// Create an option value from its code.
    pub fn new(value: i32) -> Self {
        Self { value, label: None }
    }

    /// Attach a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl PartialEq for OptionSetValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for OptionSetValue {}

impl Hash for OptionSetValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl From<i32> for OptionSetValue {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

/// Currency amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Money(pub f64);

/// Value projected from a linked entity.
///
/// Query results expose linked attributes as `<alias>.<attribute>` with this
/// wrapper so callers can tell which entity and attribute the value came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasedValue {
    /// Logical name of the linked entity
    pub entity_logical_name: String,
    /// Attribute name on the linked entity
    pub attribute_logical_name: String,
    /// The projected value
    pub value: Value,
}

impl AliasedValue {
    /// Wrap a linked value.
    pub fn new(
        entity_logical_name: impl Into<String>,
        attribute_logical_name: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            entity_logical_name: entity_logical_name.into(),
            attribute_logical_name: attribute_logical_name.into(),
            value,
        }
    }
}
