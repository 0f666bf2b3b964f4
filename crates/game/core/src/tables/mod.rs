//! Static rule tables for Eon 5 character creation.
//!
//! Pure data: attribute and skill lists, dice conversion tables, the Visdom
//! table, Kroppsbyggnad-derived values and the unit compatibility matrix.
//! Lookups with extrapolation live in [`crate::stats`].

pub mod attributes;
pub mod derived;
pub mod skills;
pub mod units;
pub mod wisdom;

pub use attributes::{
    ATTRIBUTE_DICE_MAX, ATTRIBUTE_DICE_MIN, ATTRIBUTE_TO_DICE, Attribute, DistributionModel,
};
pub use derived::{
    GRUNDSKADA_BONUS_PATTERN, KROPPSBYGGNAD_MAX, KROPPSBYGGNAD_MIN, KROPPSBYGGNAD_TABLE,
    kroppsbyggnad_row,
};
pub use skills::{
    DynamicSkillKind, FIXED_SKILL_GROUPS, KNOWLEDGE_SKILLS, MAX_SKILL_VALUE, SKILL_VALUE_TO_DICE,
    SkillGroup, SkillStatus, TOTAL_KNOWLEDGE_SKILLS, is_fixed_skill, is_knowledge_skill,
};
pub use units::{
    DESENSITIZATION_THRESHOLDS, DesensitizationCategory, EXPERTISE_ONLY, SpendingCategory,
    UnitCategory,
};
pub use wisdom::{WISDOM_MAX, WISDOM_MIN, WISDOM_TABLE, WisdomEntry};
