//! Runtime orchestration for Eon 5 character creation.
//!
//! This crate owns the current character state and its persistence. Consumers
//! embed a [`CharacterSession`] to dispatch actions, query validation and pool
//! usage, and keep the snapshot saved through a [`SnapshotStore`].
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the state owner
//! - [`api`] exposes the error types downstream clients interact with
//! - [`config`] loads [`RuntimeConfig`] from TOML
//! - [`repository`] provides the snapshot stores
pub mod api;
pub mod config;
pub mod repository;
pub mod session;

pub use api::{Result, RuntimeError};
pub use config::{ConfigLoader, DEFAULT_STORAGE_KEY, RuntimeConfig};
pub use repository::{FileSnapshotStore, InMemorySnapshotStore, RepositoryError, SnapshotStore};
pub use session::CharacterSession;
