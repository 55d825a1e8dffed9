//! RecordStore: in-memory table of records per entity type
//!
//! This module implements the record store using:
//! - `BTreeMap<String, Table>` keyed by logical name
//! - `BTreeMap<Uuid, Entity>` per table, so scans are deterministic
//!
//! # Design Notes
//!
//! - **Single owner**: the store is owned by one service session and mutated
//!   through `&mut self`. There is no locking.
//! - **Primary id attribute**: `<logical_name>id` must agree with the record
//!   id. A supplied value is kept as an attribute; when absent it is served on
//!   read by [`Entity::attribute`].
//! - **Merge on update**: attributes absent from an update are untouched.

use std::collections::BTreeMap;

use crmsim_core::{primary_id_attribute, ColumnSet, Entity, Error, Result, Value};
use tracing::debug;
use uuid::Uuid;

type Table = BTreeMap<Uuid, Entity>;

/// In-memory record store.
///
/// Records are keyed by `(logical_name, id)`; that pair is unique.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    tables: BTreeMap<String, Table>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Insert a new record and return its id.
    ///
    /// A nil id is taken from the primary-id attribute when it is set, and
    /// otherwise replaced by a fresh v4 id. Fails with `InvalidInput` when the
    /// id and the primary-id attribute disagree, and with `AlreadyExists` if a
    /// record with the same logical name and id is stored.
    pub fn create(&mut self, mut entity: Entity) -> Result<Uuid> {
        validate_logical_name(&entity.logical_name)?;

        match (entity.id.is_nil(), supplied_primary_id(&entity)?) {
            (true, Some(id)) => entity.id = id,
            (true, None) => entity.id = Uuid::new_v4(),
            (false, Some(id)) if id != entity.id => {
                return Err(primary_id_conflict(&entity, id));
            }
            (false, _) => {}
        }

        let table = self.tables.entry(entity.logical_name.clone()).or_default();
        if table.contains_key(&entity.id) {
            return Err(Error::AlreadyExists {
                logical_name: entity.logical_name,
                id: entity.id,
            });
        }

        let id = entity.id;
        debug!(logical_name = %entity.logical_name, %id, attributes = entity.len(), "record created");
        table.insert(id, entity);
        Ok(id)
    }

    /// Read a record restricted to `columns`.
    ///
    /// Requesting an attribute that is not set is not an error; it is simply
    /// missing from the result.
    pub fn retrieve(&self, logical_name: &str, id: Uuid, columns: &ColumnSet) -> Result<Entity> {
        self.get(logical_name, id)
            .map(|entity| entity.project(columns))
            .ok_or_else(|| Error::not_found(logical_name, id))
    }

    /// Borrow a stored record.
    pub fn get(&self, logical_name: &str, id: Uuid) -> Option<&Entity> {
        self.tables.get(logical_name).and_then(|t| t.get(&id))
    }

    /// Merge the supplied attributes into the stored record.
    ///
    /// A primary-id attribute in the update must name the record itself.
    pub fn update(&mut self, entity: &Entity) -> Result<()> {
        if let Some(id) = supplied_primary_id(entity)? {
            if id != entity.id {
                return Err(primary_id_conflict(entity, id));
            }
        }

        let stored = self
            .tables
            .get_mut(&entity.logical_name)
            .and_then(|t| t.get_mut(&entity.id))
            .ok_or_else(|| Error::not_found(entity.logical_name.clone(), entity.id))?;

        stored.merge(entity);
        debug!(logical_name = %entity.logical_name, id = %entity.id, attributes = entity.len(), "record updated");
        Ok(())
    }

    /// Remove a record.
    pub fn delete(&mut self, logical_name: &str, id: Uuid) -> Result<()> {
        let table = self
            .tables
            .get_mut(logical_name)
            .ok_or_else(|| Error::not_found(logical_name, id))?;
        table
            .remove(&id)
            .ok_or_else(|| Error::not_found(logical_name, id))?;
        if table.is_empty() {
            self.tables.remove(logical_name);
        }
        debug!(logical_name, %id, "record deleted");
        Ok(())
    }

    /// Seed the store with records, e.g. from test setup.
    ///
    /// Each record goes through [`RecordStore::create`]; the first failure
    /// stops the seeding and earlier records stay in place.
    pub fn initialize<I>(&mut self, entities: I) -> Result<Vec<Uuid>>
    where
        I: IntoIterator<Item = Entity>,
    {
        entities.into_iter().map(|e| self.create(e)).collect()
    }

    /// All records of one entity type, ordered by id.
    pub fn scan<'a>(&'a self, logical_name: &str) -> impl Iterator<Item = &'a Entity> + 'a {
        self.tables
            .get(logical_name)
            .into_iter()
            .flat_map(|t| t.values())
    }

    /// Whether a record exists.
    pub fn contains(&self, logical_name: &str, id: Uuid) -> bool {
        self.get(logical_name, id).is_some()
    }

    /// Number of records of one entity type.
    pub fn count(&self, logical_name: &str) -> usize {
        self.tables.get(logical_name).map_or(0, |t| t.len())
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.tables.values().map(|t| t.len()).sum()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Logical names that currently have records.
    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.tables.clear();
    }
}

fn validate_logical_name(logical_name: &str) -> Result<()> {
    if logical_name.trim().is_empty() {
        return Err(Error::invalid_input("logical name must not be empty"));
    }
    Ok(())
}

/// Id carried by the primary-id attribute, if the caller set one.
fn supplied_primary_id(entity: &Entity) -> Result<Option<Uuid>> {
    let attribute = primary_id_attribute(&entity.logical_name);
    match entity.get(&attribute) {
        None => Ok(None),
        Some(Value::Guid(id)) => Ok(Some(*id)),
        Some(other) => Err(Error::TypeMismatch {
            attribute,
            expected: "Guid".to_string(),
            actual: other.type_name().to_string(),
        }),
    }
}

fn primary_id_conflict(entity: &Entity, attribute_id: Uuid) -> Error {
    Error::invalid_input(format!(
        "{} id {} does not match {} {}",
        entity.logical_name,
        entity.id,
        primary_id_attribute(&entity.logical_name),
        attribute_id
    ))
}
