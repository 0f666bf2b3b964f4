//! State transitions.
//!
//! [`apply`] is the only way a [`CharacterState`] changes: it copies the
//! state, applies the action through the [`StateReducer`] and then runs the
//! post-transition hooks (Visdom forcing) on the copy. The input state is
//! never modified.

mod hook;
pub mod mutations;
mod reducer;
mod transition;
mod wisdom;

pub use hook::{DEFAULT_HOOKS, PostTransitionHook, WisdomRulesHook};
pub use reducer::{
    AttributesReducer, ExtrasReducer, KnowledgeReducer, SheetReducer, SkillsReducer,
    StateReducer, UnitsReducer,
};
pub use wisdom::apply_wisdom_derived_rules;

use crate::action::CharacterAction;
use crate::state::CharacterState;
use crate::units::TargetId;

/// Side information about a transition, for UI hints.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionNotice {
    /// The pools could not fund the full (cap-clamped) request: "no
    /// compatible pool left".
    UnitsClamped {
        target: TargetId,
        requested: i32,
        applied: i32,
    },
}

/// New state plus any notice raised on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: CharacterState,
    pub notice: Option<TransitionNotice>,
}

/// `(state, action) → new state`.
pub fn apply(state: &CharacterState, action: &CharacterAction) -> CharacterState {
    apply_with_outcome(state, action).state
}

/// Like [`apply`], also reporting whether a unit request was clamped.
pub fn apply_with_outcome(state: &CharacterState, action: &CharacterAction) -> Transition {
    apply_with_hooks(state, action, DEFAULT_HOOKS)
}

pub fn apply_with_hooks(
    state: &CharacterState,
    action: &CharacterAction,
    hooks: &[&dyn PostTransitionHook],
) -> Transition {
    let mut next = state.clone();
    let notice = transition::execute_transition(action, state, &mut next);

    for hook in hooks {
        if hook.should_trigger(action) {
            hook.apply(&mut next);
        }
    }

    Transition {
        state: next,
        notice,
    }
}
