//! Storage layer for crmsim
//!
//! This crate implements the in-memory record store:
//! - RecordStore: one ordered table per entity type
//! - create / retrieve / update (merge) / delete with NotFound semantics
//! - deterministic scans for the query engine
//!
//! The store belongs to a single simulated session. Independent sessions own
//! independent stores; nothing is shared between them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

pub use store::RecordStore;
