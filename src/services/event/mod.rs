//! Event store.
//!
//! The store is the only mutator of the event collection. Every mutation
//! publishes a fresh immutable snapshot with a bumped revision, so the
//! schedule grid is always derived from a fully settled collection.

mod store;

pub use store::{EventSnapshot, EventStore, StoreError};
