//! Metadata repository.
//!
//! Definitions are stored by name and looked up by the executors that
//! serve metadata messages. Only option sets are modelled.

use std::collections::BTreeMap;

use crmsim_core::OptionSetValue;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One option of an option set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionMetadata {
    /// Integer code
    pub value: i32,
    /// Display label
    pub label: String,
}

/// Definition of an option set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSetMetadata {
    /// Unique option set name
    pub name: String,
    /// Display name, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Whether the option set is shared between entities
    #[serde(default)]
    pub is_global: bool,
    /// Options in definition order
    #[serde(default)]
    pub options: Vec<OptionMetadata>,
}

impl OptionSetMetadata {
    /// Empty local option set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            is_global: false,
            options: Vec::new(),
        }
    }

    /// Mark as global.
    pub fn global(mut self) -> Self {
        self.is_global = true;
        self
    }

    /// Append an option.
    pub fn with_option(mut self, value: i32, label: impl Into<String>) -> Self {
        self.options.push(OptionMetadata {
            value,
            label: label.into(),
        });
        self
    }

    /// Label of the option with `value`.
    pub fn label_of(&self, value: i32) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    /// Labelled option value for `value`, if defined.
    pub fn option_value(&self, value: i32) -> Option<OptionSetValue> {
        self.label_of(value)
            .map(|label| OptionSetValue::new(value).with_label(label))
    }
}

/// Keyed store of metadata definitions.
#[derive(Debug, Clone)]
pub struct MetadataRepository<T> {
    entries: BTreeMap<String, T>,
}

impl<T> Default for MetadataRepository<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> MetadataRepository<T> {
    /// Empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Definition by name; `MetadataNotFound` when absent.
    pub fn get(&self, name: &str) -> Result<&T> {
        self.entries.get(name).ok_or_else(|| Error::MetadataNotFound {
            name: name.to_string(),
        })
    }

    /// Store a definition, returning the one it replaced.
    pub fn set(&mut self, name: impl Into<String>, definition: T) -> Option<T> {
        self.entries.insert(name.into(), definition)
    }

    /// Whether a definition exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Remove a definition.
    pub fn remove(&mut self, name: &str) -> Option<T> {
        self.entries.remove(name)
    }

    /// Stored names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MetadataRepository<OptionSetMetadata> {
    /// Store an option set under its own name.
    pub fn add(&mut self, metadata: OptionSetMetadata) -> Option<OptionSetMetadata> {
        let name = metadata.name.clone();
        self.set(name, metadata)
    }
}
