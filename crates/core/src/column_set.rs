//! Attribute selectors for retrieve and query projection.

use serde::{Deserialize, Serialize};

/// Which attributes to return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColumnSet {
    /// Every stored attribute
    #[default]
    All,
    /// An explicit subset, by name
    Columns(Vec<String>),
}

impl ColumnSet {
    /// Select an explicit list of columns.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ColumnSet::Columns(columns.into_iter().map(Into::into).collect())
    }

    /// Whether every attribute is selected.
    pub fn is_all(&self) -> bool {
        matches!(self, ColumnSet::All)
    }

    /// Whether `name` is selected.
    pub fn includes(&self, name: &str) -> bool {
        match self {
            ColumnSet::All => true,
            ColumnSet::Columns(columns) => columns.iter().any(|c| c == name),
        }
    }
}
