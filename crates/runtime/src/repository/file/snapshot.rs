//! File-based SnapshotStore implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RuntimeConfig;
use crate::repository::{RepositoryError, Result, SnapshotStore};

/// Stores the snapshot as `<storage_key>.json` inside `base_dir`.
///
/// Writes go to a `.json.tmp` sibling first and are renamed into place, so a
/// crash mid-write leaves the previous snapshot intact.
pub struct FileSnapshotStore {
    base_dir: PathBuf,
    storage_key: String,
}

impl FileSnapshotStore {
    /// Create a store rooted at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>, storage_key: impl Into<String>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            base_dir,
            storage_key: storage_key.into(),
        })
    }

    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        Self::new(config.resolved_snapshot_dir(), config.storage_key.as_str())
    }

    pub fn path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.json", self.storage_key))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<String>> {
        let path = self.path();

        if !path.exists() {
            return Ok(None);
        }

        let snapshot = fs::read_to_string(&path).map_err(RepositoryError::Io)?;

        tracing::debug!("Loaded snapshot from {}", path.display());

        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &str) -> Result<()> {
        let path = self.path();
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, snapshot).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved snapshot to {}", path.display());

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let path = self.path();

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted snapshot {}", path.display());
        }

        Ok(())
    }
}
