//! One pure function per action: `(state, ...args) → new state`.
//!
//! Thin wrappers over [`super::apply`] for callers that prefer direct calls to
//! building a [`CharacterAction`].

use super::apply;
use crate::action::CharacterAction;
use crate::state::{
    CharacterState, GroupUnitAllocation, LanguageEntry, MysteryEntry, Skill,
    SpecificUnitAllocation,
};
use crate::tables::{Attribute, DesensitizationCategory, DistributionModel, SkillStatus};

pub fn set_distribution_model(
    state: &CharacterState,
    model: Option<DistributionModel>,
) -> CharacterState {
    apply(state, &CharacterAction::SetDistributionModel(model))
}

pub fn set_attribute_base(state: &CharacterState, attribute: Attribute, value: i32) -> CharacterState {
    apply(state, &CharacterAction::SetAttributeBase { attribute, value })
}

pub fn set_attribute_modifiers(
    state: &CharacterState,
    attribute: Attribute,
    value: i32,
) -> CharacterState {
    apply(state, &CharacterAction::SetAttributeModifiers { attribute, value })
}

pub fn assign_chunk(state: &CharacterState, attribute: Attribute, chunk_index: usize) -> CharacterState {
    apply(state, &CharacterAction::assign_chunk(attribute, chunk_index))
}

pub fn unassign_chunk(state: &CharacterState, chunk_index: usize) -> CharacterState {
    apply(state, &CharacterAction::UnassignChunk { chunk_index })
}

pub fn set_attribute_chunk(state: &CharacterState, attribute: Attribute, value: i32) -> CharacterState {
    apply(state, &CharacterAction::SetAttributeChunk { attribute, value })
}

pub fn set_extra_attribute_points(state: &CharacterState, value: i32) -> CharacterState {
    apply(state, &CharacterAction::SetExtraAttributePoints(value))
}

pub fn set_grundrustning_mod(state: &CharacterState, value: i32) -> CharacterState {
    apply(state, &CharacterAction::SetGrundrustningMod(value))
}

pub fn set_grundskada_mod(state: &CharacterState, value: i32) -> CharacterState {
    apply(state, &CharacterAction::SetGrundskadaMod(value))
}

pub fn set_skill_units(state: &CharacterState, skill: &str, units: i32) -> CharacterState {
    apply(state, &CharacterAction::set_skill_units(skill, units))
}

pub fn set_skill_status(
    state: &CharacterState,
    skill: &str,
    status: Option<SkillStatus>,
) -> CharacterState {
    apply(
        state,
        &CharacterAction::SetSkillStatus {
            skill: skill.to_string(),
            status,
        },
    )
}

pub fn set_skill_base_value(state: &CharacterState, skill: &str, value: i32) -> CharacterState {
    apply(
        state,
        &CharacterAction::SetSkillBaseValue {
            skill: skill.to_string(),
            value,
        },
    )
}

pub fn add_dynamic_skill(state: &CharacterState, skill: Skill) -> CharacterState {
    apply(state, &CharacterAction::AddDynamicSkill(skill))
}

pub fn remove_dynamic_skill(state: &CharacterState, skill: &str) -> CharacterState {
    apply(
        state,
        &CharacterAction::RemoveDynamicSkill {
            skill: skill.to_string(),
        },
    )
}

pub fn set_specific_units(
    state: &CharacterState,
    allocations: Vec<SpecificUnitAllocation>,
) -> CharacterState {
    apply(state, &CharacterAction::SetSpecificUnits(allocations))
}

pub fn set_group_units(state: &CharacterState, allocations: Vec<GroupUnitAllocation>) -> CharacterState {
    apply(state, &CharacterAction::SetGroupUnits(allocations))
}

pub fn set_free_units(state: &CharacterState, units: i32) -> CharacterState {
    apply(state, &CharacterAction::SetFreeUnits(units))
}

pub fn toggle_incompetent_skill(state: &CharacterState, skill: &str) -> CharacterState {
    apply(
        state,
        &CharacterAction::ToggleIncompetentSkill {
            skill: skill.to_string(),
        },
    )
}

pub fn toggle_base_value_skill(state: &CharacterState, skill: &str) -> CharacterState {
    apply(
        state,
        &CharacterAction::ToggleBaseValueSkill {
            skill: skill.to_string(),
        },
    )
}

pub fn set_desensitization(
    state: &CharacterState,
    category: DesensitizationCategory,
    value: i32,
) -> CharacterState {
    apply(state, &CharacterAction::SetDesensitization { category, value })
}

pub fn add_language(state: &CharacterState, language: LanguageEntry) -> CharacterState {
    apply(state, &CharacterAction::AddLanguage(language))
}

pub fn remove_language(state: &CharacterState, index: usize) -> CharacterState {
    apply(state, &CharacterAction::RemoveLanguage { index })
}

pub fn add_mystery(state: &CharacterState, mystery: MysteryEntry) -> CharacterState {
    apply(state, &CharacterAction::AddMystery(mystery))
}

pub fn remove_mystery(state: &CharacterState, index: usize) -> CharacterState {
    apply(state, &CharacterAction::RemoveMystery { index })
}

pub fn set_step(state: &CharacterState, step: i32) -> CharacterState {
    apply(state, &CharacterAction::SetStep(step))
}

pub fn load_state(state: &CharacterState, loaded: CharacterState) -> CharacterState {
    apply(state, &CharacterAction::load_state(loaded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::create_initial_state;
    use crate::tables::UnitCategory;

    #[test]
    fn wisdom_19_walkthrough() {
        let state = create_initial_state();
        let state = set_distribution_model(&state, Some(DistributionModel::Focused));
        let state = set_attribute_base(&state, Attribute::Visdom, 11);
        let state = assign_chunk(&state, Attribute::Visdom, 2);
        assert_eq!(state.incompetent_skills.len(), 0);
        assert_eq!(state.base_value_skills.len(), 13);

        let state = set_free_units(&state, 3);
        let state = set_group_units(
            &state,
            vec![
                GroupUnitAllocation::new(UnitCategory::Knowledge, 1),
                GroupUnitAllocation::new(UnitCategory::Mystic, 1),
            ],
        );
        let state = set_skill_units(&state, "Filosofi", 1);
        let state = set_skill_units(&state, "Ceremoni", 1);
        let state = add_dynamic_skill(
            &state,
            Skill::dynamic("Svärd", crate::tables::DynamicSkillKind::Expertise),
        );
        let state = set_skill_units(&state, "Svärd", 6);
        let state = add_language(
            &state,
            LanguageEntry::new("Jargiska", crate::state::LanguageKind::Spoken),
        );
        let state = set_skill_units(&state, "Charm", 1);
        let state = set_skill_units(&state, "Dansa", 3);

        let units: Vec<_> = ["Filosofi", "Ceremoni", "Svärd", "Charm", "Dansa"]
            .iter()
            .map(|name| state.find_skill(name).map_or(-1, |skill| skill.spent_units))
            .collect();
        assert_eq!(units, vec![1, 1, 6, 1, 2]);
        assert_eq!(
            state.find_skill("Filosofi").map(|skill| skill.value()),
            Some(2)
        );
    }
}
