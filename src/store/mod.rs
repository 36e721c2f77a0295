//! The store boundary: raw-record normalization and snapshot access.
//!
//! Everything dirty about stored data (stringly-typed amounts, unparsable
//! dates, legacy field shapes) is repaired here, once, before the reporting
//! layer ever sees an entity.

pub mod memory;
pub mod raw;

pub use memory::InMemoryStore;
pub use raw::{snapshot_from_json, RawBudgetLimit, RawCategory, RawSnapshot, RawTransaction};

use crate::domain::snapshot::Snapshot;

/// Read access to one consistent snapshot of the store's collections.
///
/// Report callers obtain a snapshot through this accessor and hand it to the
/// reporting services; the store is free to mutate afterwards without
/// affecting an in-flight report.
pub trait SnapshotSource {
    fn snapshot(&self) -> Snapshot;
}
