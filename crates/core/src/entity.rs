//! Records (entities) and their attribute bags.
//!
//! A record is identified by `(logical_name, id)` and holds a sparse, sorted
//! map of attribute values. The primary-id attribute `<logical_name>id` need
//! not be stored: [`Entity::attribute`] serves it from the record id so
//! filters and joins can address a record's own id by name.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::column_set::ColumnSet;
use crate::error::{Error, Result};
use crate::reference::EntityReference;
use crate::value::{FromValue, Value};

/// Name of the primary-id attribute for an entity type.
///
/// ```
/// assert_eq!(crmsim_core::primary_id_attribute("account"), "accountid");
/// ```
pub fn primary_id_attribute(logical_name: &str) -> String {
    format!("{}id", logical_name)
}

/// A typed record with a flexible attribute schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity type, e.g. `lead`
    pub logical_name: String,
    /// Record id; nil until the record is persisted or assigned one
    pub id: Uuid,
    /// Attribute values by name
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
}

impl Entity {
    /// New record with a nil id and no attributes.
    pub fn new(logical_name: impl Into<String>) -> Self {
        Self::with_id(logical_name, Uuid::nil())
    }

    /// New record with the given id.
    pub fn with_id(logical_name: impl Into<String>, id: Uuid) -> Self {
        Self {
            logical_name: logical_name.into(),
            id,
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Set an attribute, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Stored attribute value, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Attribute lookup that also serves the virtual primary-id attribute.
    pub fn attribute(&self, name: &str) -> Option<Cow<'_, Value>> {
        if let Some(value) = self.attributes.get(name) {
            return Some(Cow::Borrowed(value));
        }
        if !self.id.is_nil() && self.is_primary_id_attribute(name) {
            return Some(Cow::Owned(Value::Guid(self.id)));
        }
        None
    }

    /// Typed read. Absent attributes are `Ok(None)`; a stored value of another
    /// type is a `TypeMismatch`.
    pub fn get_typed<T: FromValue>(&self, name: &str) -> Result<Option<T>> {
        match self.attribute(name) {
            None => Ok(None),
            Some(value) => T::from_value(&value).map(Some).ok_or_else(|| Error::TypeMismatch {
                attribute: name.to_string(),
                expected: T::TYPE_NAME.to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }

    /// Whether the attribute is stored on this record.
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.attributes.remove(name)
    }

    /// Whether `name` is this entity type's primary-id attribute.
    pub fn is_primary_id_attribute(&self, name: &str) -> bool {
        name.len() == self.logical_name.len() + 2
            && name.starts_with(self.logical_name.as_str())
            && name.ends_with("id")
    }

    /// Reference to this record.
    pub fn to_reference(&self) -> EntityReference {
        EntityReference::new(self.logical_name.clone(), self.id)
    }

    /// Copy every attribute of `other` onto this record.
    ///
    /// Attributes not present in `other` are left untouched.
    pub fn merge(&mut self, other: &Entity) {
        for (name, value) in &other.attributes {
            self.attributes.insert(name.clone(), value.clone());
        }
    }

    /// Copy of this record restricted to `columns`.
    ///
    /// Names that are not set are omitted. The primary-id attribute is
    /// materialized when named explicitly.
    pub fn project(&self, columns: &ColumnSet) -> Entity {
        match columns {
            ColumnSet::All => self.clone(),
            ColumnSet::Columns(names) => {
                let mut projected = Entity::with_id(self.logical_name.clone(), self.id);
                for name in names {
                    if let Some(value) = self.attribute(name) {
                        projected
                            .attributes
                            .insert(name.clone(), value.into_owned());
                    }
                }
                projected
            }
        }
    }

    /// Number of stored attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether no attributes are stored.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
