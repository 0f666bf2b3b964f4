//! Snapshot persistence.
//!
//! A character is persisted as a single JSON snapshot under a storage key.
//! [`FileSnapshotStore`] writes it to disk; [`InMemorySnapshotStore`] keeps it
//! in memory for tests and embedding without a filesystem.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSnapshotStore;
pub use memory::InMemorySnapshotStore;
pub use traits::SnapshotStore;
