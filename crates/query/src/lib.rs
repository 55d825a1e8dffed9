//! Query engine for crmsim
//!
//! Evaluates [`QueryExpression`]s against a [`RecordStore`]:
//! - column projection (`ColumnSet`)
//! - conditions combined with AND (equality, range, like, in, null checks)
//! - inner and left outer link entities, nested, with aliased columns
//! - ordering and top count
//!
//! [`EntityQuery`] is a fluent view over the same engine bound to a store.
//!
//! [`RecordStore`]: crmsim_storage::RecordStore

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compare;
pub mod engine;
pub mod expression;
pub mod view;

pub use engine::execute;
pub use expression::{
    ConditionExpression, ConditionOperator, JoinKeyMatch, JoinOperator, LinkEntity,
    OrderExpression, OrderType, QueryExpression,
};
pub use view::EntityQuery;
