//! In-memory SnapshotStore implementation for tests and local runs.

use std::sync::RwLock;

use crate::repository::{RepositoryError, Result, SnapshotStore};

/// Keeps the snapshot text behind a lock.
#[derive(Default)]
pub struct InMemorySnapshotStore {
    snapshot: RwLock<Option<String>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with `snapshot` already stored.
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            snapshot: RwLock::new(Some(snapshot.into())),
        }
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> Result<Option<String>> {
        let snapshot = self
            .snapshot
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(snapshot.clone())
    }

    fn save(&self, snapshot: &str) -> Result<()> {
        let mut current = self
            .snapshot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *current = Some(snapshot.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut current = self
            .snapshot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *current = None;
        Ok(())
    }
}
