//! Error types raised by snapshot store implementations.

use thiserror::Error;

/// Errors surfaced by snapshot store implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("snapshot store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
