//! Fluent query view bound to a store.

use crmsim_core::{ColumnSet, Entity, Result, Value};
use crmsim_storage::RecordStore;

use crate::engine;
use crate::expression::{ConditionExpression, LinkEntity, OrderType, QueryExpression};

/// A query under construction, bound to the store it will run against.
///
/// Nothing is evaluated until [`EntityQuery::to_vec`], [`EntityQuery::count`]
/// or [`EntityQuery::first`] is called, so one view can be run repeatedly.
///
/// ```ignore
/// let open_leads = service
///     .create_query("lead")
///     .where_equal("statuscode", 1)
///     .count()?;
/// ```
#[derive(Debug, Clone)]
pub struct EntityQuery<'a> {
    store: &'a RecordStore,
    query: QueryExpression,
}

impl<'a> EntityQuery<'a> {
    /// Start a query over every record of `entity_name`.
    pub fn new(store: &'a RecordStore, entity_name: impl Into<String>) -> Self {
        Self::from_expression(store, QueryExpression::new(entity_name))
    }

    /// Bind an existing expression.
    pub fn from_expression(store: &'a RecordStore, query: QueryExpression) -> Self {
        Self { store, query }
    }

    /// Select base columns.
    pub fn columns(mut self, columns: ColumnSet) -> Self {
        self.query = self.query.columns(columns);
        self
    }

    /// Add an equality condition.
    pub fn where_equal(mut self, attribute_name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query = self.query.where_equal(attribute_name, value);
        self
    }

    /// Add a condition.
    pub fn where_condition(mut self, condition: ConditionExpression) -> Self {
        self.query = self.query.where_condition(condition);
        self
    }

    /// Add a link entity.
    pub fn link(mut self, link: LinkEntity) -> Self {
        self.query = self.query.link(link);
        self
    }

    /// Add an ordering clause.
    pub fn order_by(mut self, attribute_name: impl Into<String>, order_type: OrderType) -> Self {
        self.query = self.query.order_by(attribute_name, order_type);
        self
    }

    /// Limit the number of rows.
    pub fn top(mut self, count: usize) -> Self {
        self.query = self.query.top(count);
        self
    }

    /// The expression built so far.
    pub fn expression(&self) -> &QueryExpression {
        &self.query
    }

    /// Take the expression out of the view.
    pub fn into_expression(self) -> QueryExpression {
        self.query
    }

    /// Run the query.
    pub fn to_vec(&self) -> Result<Vec<Entity>> {
        engine::execute(self.store, &self.query)
    }

    /// Number of matching rows.
    pub fn count(&self) -> Result<usize> {
        Ok(self.to_vec()?.len())
    }

    /// First matching row, if any.
    pub fn first(&self) -> Result<Option<Entity>> {
        Ok(self.to_vec()?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_runs_repeatedly() {
        let mut store = RecordStore::new();
        store.create(Entity::new("lead").with("subject", "a")).unwrap();
        store.create(Entity::new("lead").with("subject", "b")).unwrap();

        let view = EntityQuery::new(&store, "lead").where_equal("subject", "b");
        assert_eq!(view.count().unwrap(), 1);
        assert_eq!(view.count().unwrap(), 1);
        assert_eq!(
            view.first().unwrap().and_then(|e| e.get("subject").cloned()),
            Some(Value::from("b"))
        );
    }

    #[test]
    fn test_view_empty_entity() {
        let store = RecordStore::new();
        let view = EntityQuery::new(&store, "lead");
        assert_eq!(view.to_vec().unwrap(), vec![]);
        assert!(view.first().unwrap().is_none());
    }
}
