//! File-based snapshot store.

mod snapshot;

pub use snapshot::FileSnapshotStore;
