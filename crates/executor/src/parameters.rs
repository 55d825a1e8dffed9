//! Parameter bags carried by requests and responses.
//!
//! A [`ParameterCollection`] maps parameter names to [`Parameter`]s. Typed
//! reads go through [`FromParameter`] and fail with `TypeMismatch` instead of
//! coercing, the same contract attribute reads follow.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use crmsim_core::{ColumnSet, Entity, EntityReference, Money, OptionSetValue, Uuid, Value};
use crmsim_query::QueryExpression;
use serde::{Deserialize, Serialize};

use crate::metadata::OptionSetMetadata;
use crate::{Error, Result};

/// A single request or response parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Parameter {
    /// Scalar, reference or option value
    Value(Value),
    /// One record
    Entity(Entity),
    /// A record collection
    Entities(Vec<Entity>),
    /// A list of record references
    References(Vec<EntityReference>),
    /// Column selection
    ColumnSet(ColumnSet),
    /// Structured query
    Query(QueryExpression),
    /// Option set definition
    OptionSet(OptionSetMetadata),
}

impl Parameter {
    /// Name of the parameter shape, used in type mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Parameter::Value(v) => v.type_name(),
            Parameter::Entity(_) => "Entity",
            Parameter::Entities(_) => "EntityCollection",
            Parameter::References(_) => "EntityReferenceCollection",
            Parameter::ColumnSet(_) => "ColumnSet",
            Parameter::Query(_) => "QueryExpression",
            Parameter::OptionSet(_) => "OptionSetMetadata",
        }
    }
}

macro_rules! value_into_parameter {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Parameter {
                fn from(value: $ty) -> Self {
                    Parameter::Value(value.into())
                }
            }
        )*
    };
}

value_into_parameter!(
    Value,
    &str,
    String,
    bool,
    i32,
    i64,
    f64,
    Uuid,
    Money,
    DateTime<Utc>,
    OptionSetValue,
    EntityReference,
);

impl From<Entity> for Parameter {
    fn from(entity: Entity) -> Self {
        Parameter::Entity(entity)
    }
}

impl From<Vec<Entity>> for Parameter {
    fn from(entities: Vec<Entity>) -> Self {
        Parameter::Entities(entities)
    }
}

impl From<Vec<EntityReference>> for Parameter {
    fn from(references: Vec<EntityReference>) -> Self {
        Parameter::References(references)
    }
}

impl From<ColumnSet> for Parameter {
    fn from(columns: ColumnSet) -> Self {
        Parameter::ColumnSet(columns)
    }
}

impl From<QueryExpression> for Parameter {
    fn from(query: QueryExpression) -> Self {
        Parameter::Query(query)
    }
}

impl From<OptionSetMetadata> for Parameter {
    fn from(metadata: OptionSetMetadata) -> Self {
        Parameter::OptionSet(metadata)
    }
}

// =============================================================================
// Typed extraction
// =============================================================================

/// Types that can be read out of a [`Parameter`] without coercion.
pub trait FromParameter: Sized {
    /// Shape name reported in type mismatch errors.
    const KIND: &'static str;

    /// Extract the parameter if its shape matches.
    fn from_parameter(parameter: &Parameter) -> Option<Self>;
}

macro_rules! value_parameter {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromParameter for $ty {
                const KIND: &'static str = <$ty as crmsim_core::FromValue>::TYPE_NAME;

                fn from_parameter(parameter: &Parameter) -> Option<Self> {
                    match parameter {
                        Parameter::Value(v) => <$ty as crmsim_core::FromValue>::from_value(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

value_parameter!(
    Uuid,
    String,
    i64,
    f64,
    bool,
    Money,
    DateTime<Utc>,
    OptionSetValue,
    EntityReference,
);

macro_rules! shaped_parameter {
    ($ty:ty, $kind:literal, $variant:ident) => {
        impl FromParameter for $ty {
            const KIND: &'static str = $kind;

            fn from_parameter(parameter: &Parameter) -> Option<Self> {
                match parameter {
                    Parameter::$variant(inner) => Some(inner.clone()),
                    _ => None,
                }
            }
        }
    };
}

shaped_parameter!(Value, "Value", Value);
shaped_parameter!(Entity, "Entity", Entity);
shaped_parameter!(Vec<Entity>, "EntityCollection", Entities);
shaped_parameter!(Vec<EntityReference>, "EntityReferenceCollection", References);
shaped_parameter!(ColumnSet, "ColumnSet", ColumnSet);
shaped_parameter!(QueryExpression, "QueryExpression", Query);
shaped_parameter!(OptionSetMetadata, "OptionSetMetadata", OptionSet);

// =============================================================================
// ParameterCollection
// =============================================================================

/// Named parameters of a request or response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterCollection {
    entries: BTreeMap<String, Parameter>,
}

impl ParameterCollection {
    /// Empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, returning the previous one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        parameter: impl Into<Parameter>,
    ) -> Option<Parameter> {
        self.entries.insert(name.into(), parameter.into())
    }

    /// Raw parameter by name.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.entries.get(name)
    }

    /// Typed read; `Ok(None)` when absent, `TypeMismatch` on another shape.
    pub fn get_optional<T: FromParameter>(&self, name: &str) -> Result<Option<T>> {
        match self.entries.get(name) {
            None => Ok(None),
            Some(parameter) => T::from_parameter(parameter)
                .map(Some)
                .ok_or_else(|| Error::TypeMismatch {
                    attribute: name.to_string(),
                    expected: T::KIND.to_string(),
                    actual: parameter.kind().to_string(),
                }),
        }
    }

    /// Typed read of a parameter that must be present.
    pub fn get_required<T: FromParameter>(&self, name: &str) -> Result<T> {
        self.get_optional(name)?
            .ok_or_else(|| Error::invalid_argument(format!("missing required parameter '{}'", name)))
    }

    /// Whether a parameter is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Remove a parameter.
    pub fn remove(&mut self, name: &str) -> Option<Parameter> {
        self.entries.remove(name)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Parameter)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, P: Into<Parameter>> FromIterator<(K, P)> for ParameterCollection {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let mut collection = Self::new();
        for (name, parameter) in iter {
            collection.insert(name, parameter);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_typed_read() {
        let mut bag = ParameterCollection::new();
        bag.insert("CreateAccount", true);
        bag.insert("Status", OptionSetValue::new(3));

        assert_eq!(bag.get_optional::<bool>("CreateAccount").unwrap(), Some(true));
        assert_eq!(bag.get_required::<OptionSetValue>("Status").unwrap().value, 3);
        assert_eq!(bag.get_optional::<bool>("CreateContact").unwrap(), None);
    }

    #[test]
    fn test_wrong_shape_is_type_mismatch() {
        let mut bag = ParameterCollection::new();
        bag.insert("Status", 3i64);

        let err = bag.get_required::<OptionSetValue>("Status").unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                attribute: "Status".into(),
                expected: "OptionSet".into(),
                actual: "Int".into(),
            }
        );

        bag.insert("Target", Entity::new("account"));
        let err = bag.get_required::<EntityReference>("Target").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_missing_required_is_invalid_argument() {
        let bag = ParameterCollection::new();
        let err = bag.get_required::<Entity>("Target").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_collection_from_iter_and_json() {
        let bag: ParameterCollection = [("Name", "new_color"), ("Other", "x")].into_iter().collect();
        assert_eq!(bag.len(), 2);

        let json = serde_json::to_string(&bag).unwrap();
        let restored: ParameterCollection = serde_json::from_str(&json).unwrap();
        assert_eq!(bag, restored);
    }
}
