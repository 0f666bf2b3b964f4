//! Character-creation actions.
//!
//! Every edit the UI can make is one [`CharacterAction`]. Actions are plain
//! data; [`crate::engine::apply`] turns `(state, action)` into the next state.
//! Inputs are never rejected: out-of-range values are clamped and unknown
//! names or indices make the action a no-op.

use crate::state::{
    CharacterState, GroupUnitAllocation, LanguageEntry, MysteryEntry, Skill,
    SpecificUnitAllocation,
};
use crate::tables::{Attribute, DesensitizationCategory, DistributionModel, SkillStatus};

#[derive(Clone, Debug, PartialEq, Eq, strum::AsRefStr, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        tag = "type",
        content = "payload",
        rename_all = "SCREAMING_SNAKE_CASE",
        rename_all_fields = "camelCase"
    )
)]
pub enum CharacterAction {
    /// Switches model and clears every chunk assignment.
    SetDistributionModel(Option<DistributionModel>),
    SetAttributeBase {
        attribute: Attribute,
        value: i32,
    },
    SetAttributeModifiers {
        attribute: Attribute,
        value: i32,
    },
    /// Gives `attribute` the chunk at `chunk_index`, displacing its holder.
    AssignChunk {
        attribute: Attribute,
        chunk_index: usize,
    },
    UnassignChunk {
        chunk_index: usize,
    },
    /// Free-points model: sets the points on one attribute (floored at 0).
    /// Ignored under the chunk models and without a model.
    SetAttributeChunk {
        attribute: Attribute,
        value: i32,
    },
    SetExtraAttributePoints(i32),
    SetGrundrustningMod(i32),
    SetGrundskadaMod(i32),

    /// Clamped to the status cap, then to what the pools can fund.
    SetSkillUnits {
        skill: String,
        units: i32,
    },
    SetSkillStatus {
        skill: String,
        status: Option<SkillStatus>,
    },
    SetSkillBaseValue {
        skill: String,
        value: i32,
    },
    AddDynamicSkill(Skill),
    RemoveDynamicSkill {
        skill: String,
    },

    SetSpecificUnits(Vec<SpecificUnitAllocation>),
    SetGroupUnits(Vec<GroupUnitAllocation>),
    SetFreeUnits(i32),

    /// Adds or removes a knowledge skill from the Incompetent selection.
    ToggleIncompetentSkill {
        skill: String,
    },
    /// Adds or removes a knowledge skill from the base-value selection.
    ToggleBaseValueSkill {
        skill: String,
    },

    SetDesensitization {
        category: DesensitizationCategory,
        value: i32,
    },
    AddLanguage(LanguageEntry),
    RemoveLanguage {
        index: usize,
    },
    AddMystery(MysteryEntry),
    RemoveMystery {
        index: usize,
    },

    SetStep(i32),
    /// Replaces the whole state. Wisdom forcing is not re-run.
    LoadState(Box<CharacterState>),
}

impl CharacterAction {
    /// Action name for logs, e.g. `"SET_SKILL_UNITS"`.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn set_skill_units(skill: impl Into<String>, units: i32) -> Self {
        CharacterAction::SetSkillUnits {
            skill: skill.into(),
            units,
        }
    }

    pub fn assign_chunk(attribute: Attribute, chunk_index: usize) -> Self {
        CharacterAction::AssignChunk {
            attribute,
            chunk_index,
        }
    }

    pub fn load_state(state: CharacterState) -> Self {
        CharacterAction::LoadState(Box::new(state))
    }
}
