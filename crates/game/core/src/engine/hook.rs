//! Post-transition hooks that re-derive state after an action is applied.

use crate::action::CharacterAction;
use crate::state::CharacterState;

use super::wisdom::apply_wisdom_derived_rules;

/// A hook run on the new state after the primary change.
pub trait PostTransitionHook {
    fn should_trigger(&self, action: &CharacterAction) -> bool;

    fn apply(&self, state: &mut CharacterState);
}

/// Keeps the Visdom-forced knowledge selections in sync.
///
/// Loaded snapshots are taken as-is.
#[derive(Clone, Copy, Debug, Default)]
pub struct WisdomRulesHook;

impl PostTransitionHook for WisdomRulesHook {
    fn should_trigger(&self, action: &CharacterAction) -> bool {
        !matches!(action, CharacterAction::LoadState(_))
    }

    fn apply(&self, state: &mut CharacterState) {
        apply_wisdom_derived_rules(state);
    }
}

/// Hooks run by [`super::apply`], in order.
pub const DEFAULT_HOOKS: &[&dyn PostTransitionHook] = &[&WisdomRulesHook];
