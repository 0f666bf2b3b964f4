//! Action dispatch onto the sub-reducers.

use crate::action::CharacterAction as A;
use crate::state::CharacterState;
use crate::units::{TargetId, max_spendable_for_target};

use super::TransitionNotice;
use super::reducer::StateReducer;

/// Applies the primary change of `action` to `next`, a copy of `current`.
///
/// Feasibility checks read `current` so the edited field is checked against
/// the allocation as it stood before the action.
pub(super) fn execute_transition(
    action: &A,
    current: &CharacterState,
    next: &mut CharacterState,
) -> Option<TransitionNotice> {
    let mut reducer = StateReducer::new(next);
    match action {
        A::SetDistributionModel(model) => reducer.attributes().set_model(*model),
        A::SetAttributeBase { attribute, value } => {
            reducer.attributes().set_base(*attribute, *value)
        }
        A::SetAttributeModifiers { attribute, value } => {
            reducer.attributes().set_modifiers(*attribute, *value)
        }
        A::AssignChunk {
            attribute,
            chunk_index,
        } => {
            reducer.attributes().assign_chunk(*attribute, *chunk_index);
        }
        A::UnassignChunk { chunk_index } => {
            reducer.attributes().unassign_chunk(*chunk_index);
        }
        A::SetAttributeChunk { attribute, value } => {
            reducer.attributes().set_points(*attribute, *value)
        }
        A::SetExtraAttributePoints(value) => reducer.sheet().set_extra_attribute_points(*value),
        A::SetGrundrustningMod(value) => reducer.sheet().set_grundrustning_mod(*value),
        A::SetGrundskadaMod(value) => reducer.sheet().set_grundskada_mod(*value),

        A::SetSkillUnits { skill, units } => {
            return set_skill_units(&mut reducer, current, skill, *units);
        }
        A::SetSkillStatus { skill, status } => reducer.skills().set_status(skill, *status),
        A::SetSkillBaseValue { skill, value } => {
            reducer.skills().set_base_value(skill, (*value).clamp(0, 1))
        }
        A::AddDynamicSkill(skill) => {
            reducer.skills().add_dynamic(skill.clone());
        }
        A::RemoveDynamicSkill { skill } => {
            reducer.skills().remove_dynamic(skill);
        }

        A::SetSpecificUnits(allocations) => reducer.units().set_specific(allocations),
        A::SetGroupUnits(allocations) => reducer.units().set_group(allocations),
        A::SetFreeUnits(units) => reducer.units().set_free(*units),

        A::ToggleIncompetentSkill { skill } => {
            reducer.knowledge().toggle_incompetent(skill);
        }
        A::ToggleBaseValueSkill { skill } => {
            reducer.knowledge().toggle_base_value(skill);
        }

        A::SetDesensitization { category, value } => {
            reducer.extras().set_desensitization(*category, *value)
        }
        A::AddLanguage(language) => reducer.extras().add_language(language.clone()),
        A::RemoveLanguage { index } => {
            reducer.extras().remove_language(*index);
        }
        A::AddMystery(mystery) => reducer.extras().add_mystery(mystery.clone()),
        A::RemoveMystery { index } => {
            reducer.extras().remove_mystery(*index);
        }

        A::SetStep(step) => reducer.sheet().set_step(*step),
        A::LoadState(state) => {
            let mut loaded = (**state).clone();
            loaded.reconcile_chunk_assignments();
            reducer.replace(loaded);
        }
    }
    None
}

/// Clamps to the status cap of the first matching row, then to what the
/// pools can fund.
fn set_skill_units(
    reducer: &mut StateReducer<'_>,
    current: &CharacterState,
    name: &str,
    units: i32,
) -> Option<TransitionNotice> {
    let skill = current.find_skill(name)?;
    let requested = units.min(skill.max_units()).max(0);
    let target = TargetId::skill(name);
    let applied = max_spendable_for_target(current, &target, requested);

    reducer.skills().set_spent_units(name, applied);
    (applied < requested).then_some(TransitionNotice::UnitsClamped {
        target,
        requested,
        applied,
    })
}
