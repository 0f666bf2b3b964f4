//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from snapshot stores, the snapshot codec and configuration
//! loading so clients can bubble them up with consistent context.
use thiserror::Error;

pub use crate::repository::RepositoryError;
pub use eon_core::SnapshotError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Config(#[from] anyhow::Error),
}
