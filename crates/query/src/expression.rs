//! Query specification types.
//!
//! A [`QueryExpression`] names a base entity, the columns to return, filter
//! conditions (combined with AND), linked entities to join and an optional
//! ordering and row limit. It is the already-parsed form of a FetchXml-style
//! query; nothing in this crate parses text.

use crmsim_core::{ColumnSet, Value};
use serde::{Deserialize, Serialize};

/// Comparison operator of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    /// `eq`
    Equal,
    /// `ne`
    NotEqual,
    /// `gt`
    GreaterThan,
    /// `ge`
    GreaterEqual,
    /// `lt`
    LessThan,
    /// `le`
    LessEqual,
    /// `like`, with `%` and `_` wildcards
    Like,
    /// `not-like`
    NotLike,
    /// `begins-with`
    BeginsWith,
    /// `ends-with`
    EndsWith,
    /// `in`
    In,
    /// `not-in`
    NotIn,
    /// `null`: attribute is not set
    Null,
    /// `not-null`: attribute is set
    NotNull,
}

impl ConditionOperator {
    /// Number of literal values the operator takes: `None` means one or more.
    pub(crate) fn arity(self) -> Option<usize> {
        match self {
            ConditionOperator::Null | ConditionOperator::NotNull => Some(0),
            ConditionOperator::In | ConditionOperator::NotIn => None,
            _ => Some(1),
        }
    }
}

/// A single filter condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionExpression {
    /// Alias of a linked entity the attribute belongs to; `None` for the
    /// entity the condition is attached to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    /// Attribute to test
    pub attribute_name: String,
    /// Operator
    pub operator: ConditionOperator,
    /// Literal operands
    #[serde(default)]
    pub values: Vec<Value>,
}

impl ConditionExpression {
    /// Condition with an explicit operand list.
    pub fn new(
        attribute_name: impl Into<String>,
        operator: ConditionOperator,
        values: Vec<Value>,
    ) -> Self {
        Self {
            entity_name: None,
            attribute_name: attribute_name.into(),
            operator,
            values,
        }
    }

    /// `attribute = value`
    pub fn equal(attribute_name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(attribute_name, ConditionOperator::Equal, vec![value.into()])
    }

    /// Condition with no operand (`Null`, `NotNull`).
    pub fn unary(attribute_name: impl Into<String>, operator: ConditionOperator) -> Self {
        Self::new(attribute_name, operator, Vec::new())
    }

    /// Evaluate the condition against a linked entity's aliased columns.
    pub fn on(mut self, alias: impl Into<String>) -> Self {
        self.entity_name = Some(alias.into());
        self
    }
}

/// Join kind of a link entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JoinOperator {
    /// Drop outer rows without a match
    #[default]
    Inner,
    /// Keep outer rows without a match, with linked attributes absent
    LeftOuter,
}

/// How join keys are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JoinKeyMatch {
    /// A reference matches a Guid (or another reference) carrying the same
    /// id. Lookup columns joined to primary ids use this.
    #[default]
    ReferenceId,
    /// Plain value equality; a reference never matches a bare Guid.
    Exact,
}

/// A joined entity.
///
/// The join condition is `outer.link_from_attribute_name =
/// linked.link_to_attribute_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkEntity {
    /// Entity the link hangs off
    pub link_from_entity_name: String,
    /// Attribute on the outer entity
    pub link_from_attribute_name: String,
    /// Linked entity
    pub link_to_entity_name: String,
    /// Attribute on the linked entity
    pub link_to_attribute_name: String,
    /// Inner or left outer
    #[serde(default)]
    pub join_operator: JoinOperator,
    /// Prefix for projected columns; defaults to the linked entity name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_alias: Option<String>,
    /// Linked columns to project; none by default
    #[serde(default = "no_columns")]
    pub columns: ColumnSet,
    /// Conditions on the linked entity
    #[serde(default)]
    pub link_criteria: Vec<ConditionExpression>,
    /// Nested links, joined from this linked entity
    #[serde(default)]
    pub link_entities: Vec<LinkEntity>,
    /// Key comparison mode
    #[serde(default)]
    pub key_match: JoinKeyMatch,
}

fn no_columns() -> ColumnSet {
    ColumnSet::Columns(Vec::new())
}

impl LinkEntity {
    /// Link `from_entity.from_attribute` to `to_entity.to_attribute`.
    pub fn new(
        link_from_entity_name: impl Into<String>,
        link_to_entity_name: impl Into<String>,
        link_from_attribute_name: impl Into<String>,
        link_to_attribute_name: impl Into<String>,
        join_operator: JoinOperator,
    ) -> Self {
        Self {
            link_from_entity_name: link_from_entity_name.into(),
            link_from_attribute_name: link_from_attribute_name.into(),
            link_to_entity_name: link_to_entity_name.into(),
            link_to_attribute_name: link_to_attribute_name.into(),
            join_operator,
            entity_alias: None,
            columns: no_columns(),
            link_criteria: Vec::new(),
            link_entities: Vec::new(),
            key_match: JoinKeyMatch::default(),
        }
    }

    /// Set the alias used to prefix projected columns.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.entity_alias = Some(alias.into());
        self
    }

    /// Select linked columns.
    pub fn columns(mut self, columns: ColumnSet) -> Self {
        self.columns = columns;
        self
    }

    /// Add a condition on the linked entity.
    pub fn where_condition(mut self, condition: ConditionExpression) -> Self {
        self.link_criteria.push(condition);
        self
    }

    /// Add a nested link.
    pub fn link(mut self, link: LinkEntity) -> Self {
        self.link_entities.push(link);
        self
    }

    /// Change the key comparison mode.
    pub fn key_match(mut self, key_match: JoinKeyMatch) -> Self {
        self.key_match = key_match;
        self
    }

    /// Effective alias.
    pub fn effective_alias(&self) -> &str {
        self.entity_alias
            .as_deref()
            .unwrap_or(&self.link_to_entity_name)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Smallest first; absent values first
    #[default]
    Ascending,
    /// Largest first; absent values last
    Descending,
}

/// Ordering clause. `attribute_name` may be `<alias>.<attribute>` to sort on
/// a linked column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderExpression {
    /// Attribute to sort on
    pub attribute_name: String,
    /// Direction
    #[serde(default)]
    pub order_type: OrderType,
}

impl OrderExpression {
    /// Create an ordering clause.
    pub fn new(attribute_name: impl Into<String>, order_type: OrderType) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            order_type,
        }
    }
}

/// A structured multi-entity read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryExpression {
    /// Base entity
    pub entity_name: String,
    /// Base columns to project
    #[serde(default)]
    pub column_set: ColumnSet,
    /// Base conditions, combined with AND
    #[serde(default)]
    pub criteria: Vec<ConditionExpression>,
    /// Joined entities
    #[serde(default)]
    pub link_entities: Vec<LinkEntity>,
    /// Ordering clauses, applied in order
    #[serde(default)]
    pub orders: Vec<OrderExpression>,
    /// Maximum number of rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_count: Option<usize>,
}

impl QueryExpression {
    /// Query returning every column of every record of `entity_name`.
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            column_set: ColumnSet::All,
            criteria: Vec::new(),
            link_entities: Vec::new(),
            orders: Vec::new(),
            top_count: None,
        }
    }

    /// Select base columns.
    pub fn columns(mut self, columns: ColumnSet) -> Self {
        self.column_set = columns;
        self
    }

    /// Add a condition.
    pub fn where_condition(mut self, condition: ConditionExpression) -> Self {
        self.criteria.push(condition);
        self
    }

    /// Add an equality condition.
    pub fn where_equal(self, attribute_name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.where_condition(ConditionExpression::equal(attribute_name, value))
    }

    /// Add a link entity.
    pub fn link(mut self, link: LinkEntity) -> Self {
        self.link_entities.push(link);
        self
    }

    /// Add an ordering clause.
    pub fn order_by(mut self, attribute_name: impl Into<String>, order_type: OrderType) -> Self {
        self.orders.push(OrderExpression::new(attribute_name, order_type));
        self
    }

    /// Limit the number of rows.
    pub fn top(mut self, count: usize) -> Self {
        self.top_count = Some(count);
        self
    }
}
