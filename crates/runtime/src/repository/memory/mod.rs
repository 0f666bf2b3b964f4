//! In-memory snapshot store for tests and local runs.

mod snapshot;

pub use snapshot::InMemorySnapshotStore;
