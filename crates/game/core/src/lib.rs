//! Eon 5 character-creation rules.
//!
//! `eon-core` holds the canonical rules (static tables, derivations, the
//! unit-allocation feasibility engine, validation) and exposes pure APIs that
//! the runtime and any UI can share. All state changes flow through
//! [`engine::apply`], which takes a [`CharacterState`] and a
//! [`CharacterAction`] and returns a new state.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
#[cfg(feature = "serde")]
pub mod snapshot;
pub mod state;
pub mod stats;
pub mod tables;
pub mod units;
pub mod validation;

pub use action::CharacterAction;
pub use config::ChargenConfig;
pub use engine::{Transition, TransitionNotice, apply, apply_with_outcome};
pub use error::{ChargenError, ErrorSeverity};
#[cfg(feature = "serde")]
pub use error::SnapshotError;
#[cfg(feature = "serde")]
pub use snapshot::{
    load_state, load_state_str, parse_state, parse_state_str, serialize, to_json_string,
};
pub use state::{
    AttributeState, Attributes, CharacterState, Desensitization, GroupUnitAllocation,
    LanguageEntry, LanguageKind, MysteryEntry, Skill, SpecificUnitAllocation,
    create_initial_state,
};
pub use tables::{
    Attribute, DesensitizationCategory, DistributionModel, DynamicSkillKind, SkillGroup,
    SkillStatus, SpendingCategory, UnitCategory,
};
pub use units::{
    PoolKind, PoolUsage, TargetId, can_increase_skill_units, is_feasible,
    max_spendable_for_target, pool_usage_breakdown,
};
pub use validation::{Severity, ValidationIssue, validate, validate_with};
