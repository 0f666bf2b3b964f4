//! Character session: the single owner of the current state.
//!
//! The session restores the last snapshot from its store, funnels every edit
//! through [`eon_core::apply_with_outcome`] and writes the new snapshot back
//! when autosave is on. Queries read the current state without changing it.

use std::path::Path;
use std::sync::Arc;

use eon_core::{
    CharacterAction, CharacterState, ChargenError, PoolUsage, TransitionNotice, ValidationIssue,
    apply_with_outcome, create_initial_state,
};

use crate::api::Result;
use crate::config::{ConfigLoader, RuntimeConfig};
use crate::repository::{FileSnapshotStore, SnapshotStore};

pub struct CharacterSession {
    state: CharacterState,
    store: Arc<dyn SnapshotStore>,
    config: RuntimeConfig,
}

impl CharacterSession {
    /// Fresh session; nothing is read from `store`.
    pub fn new(store: Arc<dyn SnapshotStore>, config: RuntimeConfig) -> Self {
        tracing::info!("Starting character session from a fresh state");
        Self {
            state: create_initial_state(),
            store,
            config,
        }
    }

    /// Resume from the stored snapshot.
    ///
    /// A snapshot that cannot be decoded is discarded and the session starts
    /// fresh. Only a failing store is an error.
    pub fn restore(store: Arc<dyn SnapshotStore>, config: RuntimeConfig) -> Result<Self> {
        let Some(snapshot) = store.load()? else {
            return Ok(Self::new(store, config));
        };

        let state = match eon_core::parse_state_str(&snapshot) {
            Ok(state) => {
                tracing::info!("Starting character session from stored snapshot");
                state
            }
            Err(err) => {
                tracing::warn!(
                    "Stored snapshot could not be loaded ({}, {}), starting fresh: {}",
                    err.error_code(),
                    err.severity().as_str(),
                    err
                );
                create_initial_state()
            }
        };

        Ok(Self {
            state,
            store,
            config,
        })
    }

    /// Resume from the file store described by `config`.
    pub fn open(config: RuntimeConfig) -> Result<Self> {
        let store = Arc::new(FileSnapshotStore::from_config(&config)?);
        Self::restore(store, config)
    }

    /// Load the TOML configuration at `path`, then [`Self::open`].
    pub fn open_with_config_file(path: &Path) -> Result<Self> {
        let config = ConfigLoader::load(path)?;
        Self::open(config)
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Apply `action` and autosave.
    ///
    /// Returns the notice raised by the transition, if any. Autosave failures
    /// are logged and do not undo the edit.
    pub fn dispatch(&mut self, action: CharacterAction) -> Option<TransitionNotice> {
        tracing::debug!("Dispatching {}", action.name());

        let transition = apply_with_outcome(&self.state, &action);
        self.state = transition.state;

        if let Some(TransitionNotice::UnitsClamped {
            target,
            requested,
            applied,
        }) = &transition.notice
        {
            tracing::warn!(
                "No compatible pool left for {}: requested {}, applied {}",
                target,
                requested,
                applied
            );
        }

        if self.config.autosave
            && let Err(err) = self.save()
        {
            tracing::warn!("Autosave failed: {}", err);
        }

        transition.notice
    }

    pub fn save(&self) -> Result<()> {
        let snapshot = eon_core::to_json_string(&self.state)?;
        self.store.save(&snapshot)?;
        Ok(())
    }

    /// Replace the current state with a snapshot supplied by the caller.
    ///
    /// Unlike [`Self::restore`] a snapshot that does not decode is an error
    /// and the current state is kept.
    pub fn load_snapshot(&mut self, snapshot: &str) -> Result<()> {
        let loaded = eon_core::parse_state_str(snapshot)?;
        self.dispatch(CharacterAction::load_state(loaded));
        Ok(())
    }

    /// Drop the stored snapshot and start over.
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear()?;
        self.state = create_initial_state();
        tracing::info!("Character session reset");
        Ok(())
    }

    pub fn validate(&self) -> Vec<ValidationIssue> {
        eon_core::validate_with(&self.state, &self.config.rules)
    }

    pub fn pool_usage(&self) -> Vec<PoolUsage> {
        eon_core::pool_usage_breakdown(&self.state)
    }

    pub fn can_increase_skill_units(&self, skill: &str) -> bool {
        eon_core::can_increase_skill_units(&self.state, skill)
    }
}
