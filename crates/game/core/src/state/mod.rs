//! Character state: the serializable snapshot of every player choice.
//!
//! The state is plain data. It is never mutated in place by callers; every
//! change goes through [`crate::engine::apply`], which returns a new state.
//! Derived values (final attributes, Wisdom pools, dice) are recomputed on
//! read by [`crate::stats`] and [`crate::units`].
mod attributes;
mod chunks;
mod extras;
mod skills;

use std::collections::BTreeMap;

pub use attributes::{AttributeState, Attributes};
pub use extras::{
    Desensitization, GroupUnitAllocation, LanguageEntry, LanguageKind, MysteryEntry,
    SpecificUnitAllocation,
};
pub use skills::{Skill, default_skills, max_skill_value};

use crate::tables::{Attribute, DistributionModel};

/// Complete character-creation snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CharacterState {
    pub attributes: Attributes,
    pub distribution_model: Option<DistributionModel>,
    /// Chunk index → holding attribute. Only populated under chunk models.
    pub chunk_assignments: BTreeMap<usize, Attribute>,
    /// Points gained from event tables, added to the free-points total.
    pub extra_attribute_points: i32,
    pub grundrustning_mod: i32,
    pub grundskada_mod: i32,

    /// Fixed skills, seeded at creation.
    pub skills: Vec<Skill>,
    /// Skills added at runtime.
    pub dynamic_skills: Vec<Skill>,

    pub specific_units: Vec<SpecificUnitAllocation>,
    pub group_units: Vec<GroupUnitAllocation>,
    pub free_units: i32,

    /// Knowledge skills the player marked Incompetent (Visdom selection).
    pub incompetent_skills: Vec<String>,
    /// Knowledge skills the player granted base value 1 (Visdom selection).
    pub base_value_skills: Vec<String>,

    pub desensitization: Desensitization,
    pub languages: Vec<LanguageEntry>,
    pub mysteries: Vec<MysteryEntry>,

    /// Wizard step shown by the UI.
    pub current_step: i32,
}

impl CharacterState {
    /// Fresh state: all attributes zeroed, default skill list, empty lists.
    pub fn new() -> Self {
        Self {
            attributes: Attributes::default(),
            distribution_model: None,
            chunk_assignments: BTreeMap::new(),
            extra_attribute_points: 0,
            grundrustning_mod: 0,
            grundskada_mod: 0,
            skills: default_skills(),
            dynamic_skills: Vec::new(),
            specific_units: Vec::new(),
            group_units: Vec::new(),
            free_units: 0,
            incompetent_skills: Vec::new(),
            base_value_skills: Vec::new(),
            desensitization: Desensitization::default(),
            languages: Vec::new(),
            mysteries: Vec::new(),
            current_step: 0,
        }
    }

    /// Fixed skills followed by dynamic skills.
    pub fn all_skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter().chain(self.dynamic_skills.iter())
    }

    pub fn all_skills_mut(&mut self) -> impl Iterator<Item = &mut Skill> {
        self.skills.iter_mut().chain(self.dynamic_skills.iter_mut())
    }

    /// First skill named `name`, fixed skills searched first.
    pub fn find_skill(&self, name: &str) -> Option<&Skill> {
        self.all_skills().find(|skill| skill.name == name)
    }

    pub fn has_skill(&self, name: &str) -> bool {
        self.find_skill(name).is_some()
    }

    /// Whether Visdom has received points from the distribution model.
    ///
    /// Wisdom-derived unit pools only exist once this holds.
    pub fn wisdom_assigned(&self) -> bool {
        self.attributes.visdom.is_assigned()
    }
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh default state.
pub fn create_initial_state() -> CharacterState {
    CharacterState::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::TOTAL_KNOWLEDGE_SKILLS;

    #[test]
    fn initial_state_seeds_fixed_skills() {
        let state = create_initial_state();

        assert_eq!(state.skills.len(), 47);
        assert!(state.dynamic_skills.is_empty());
        assert!(state.all_skills().all(|skill| skill.value() == 0));
        assert_eq!(
            state
                .skills
                .iter()
                .filter(|skill| skill.group == crate::tables::SkillGroup::Knowledge)
                .count(),
            TOTAL_KNOWLEDGE_SKILLS
        );
        assert!(!state.wisdom_assigned());
    }

    #[test]
    fn find_skill_prefers_fixed_rows() {
        let mut state = create_initial_state();
        state.dynamic_skills.push(
            Skill::dynamic("Dansa", crate::tables::DynamicSkillKind::Craft).with_spent_units(3),
        );

        let found = state.find_skill("Dansa").map(|skill| skill.spent_units);
        assert_eq!(found, Some(0));
    }
}
