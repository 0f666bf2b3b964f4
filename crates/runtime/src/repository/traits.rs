//! Store contract for saving and loading character snapshots.

use super::Result;

/// Persistence slot for one character snapshot.
///
/// Stores hold the JSON text as written; decoding (and falling back on bad
/// data) is the session's job, so a store never rejects what it reads.
pub trait SnapshotStore: Send + Sync {
    /// Raw snapshot text, `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored snapshot.
    fn save(&self, snapshot: &str) -> Result<()>;

    /// Remove the stored snapshot, if any.
    fn clear(&self) -> Result<()>;
}
