//! Skill groups, the fixed skill list, skill statuses and the skill dice table.

use super::units::SpendingCategory;

/// Skill group a skill is listed under on the character sheet.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillGroup {
    #[strum(serialize = "Kunskapsfärdigheter")]
    #[cfg_attr(feature = "serde", serde(rename = "Kunskapsfärdigheter"))]
    Knowledge,
    #[strum(serialize = "Mystikfärdigheter")]
    #[cfg_attr(feature = "serde", serde(rename = "Mystikfärdigheter"))]
    Mystic,
    #[strum(serialize = "Rörelsefärdigheter")]
    #[cfg_attr(feature = "serde", serde(rename = "Rörelsefärdigheter"))]
    Movement,
    #[strum(serialize = "Sociala färdigheter")]
    #[cfg_attr(feature = "serde", serde(rename = "Sociala färdigheter"))]
    Social,
    #[strum(serialize = "Stridsfärdigheter")]
    #[cfg_attr(feature = "serde", serde(rename = "Stridsfärdigheter"))]
    Combat,
    #[strum(serialize = "Vildmarksfärdigheter")]
    #[cfg_attr(feature = "serde", serde(rename = "Vildmarksfärdigheter"))]
    Wilderness,
    /// Home of dynamic skills (expertises, crafts, traits, abilities).
    #[strum(serialize = "Övriga färdigheter")]
    #[cfg_attr(feature = "serde", serde(rename = "Övriga färdigheter"))]
    Other,
}

impl SkillGroup {
    /// Spending category of a plain (non-dynamic) skill in this group.
    pub const fn spending_category(self) -> SpendingCategory {
        match self {
            SkillGroup::Knowledge => SpendingCategory::KnowledgeSkills,
            SkillGroup::Mystic => SpendingCategory::MysticSkills,
            SkillGroup::Movement => SpendingCategory::MovementSkills,
            SkillGroup::Social => SpendingCategory::SocialSkills,
            SkillGroup::Combat => SpendingCategory::CombatSkills,
            SkillGroup::Wilderness => SpendingCategory::WildernessSkills,
            SkillGroup::Other => SpendingCategory::OtherSkills,
        }
    }

    /// Fixed skills seeded into a fresh character for this group.
    pub const fn fixed_skills(self) -> &'static [&'static str] {
        match self {
            SkillGroup::Knowledge => &KNOWLEDGE_SKILLS,
            SkillGroup::Mystic => &MYSTIC_SKILLS,
            SkillGroup::Movement => &MOVEMENT_SKILLS,
            SkillGroup::Social => &SOCIAL_SKILLS,
            SkillGroup::Combat => &COMBAT_SKILLS,
            SkillGroup::Wilderness => &WILDERNESS_SKILLS,
            SkillGroup::Other => &[],
        }
    }
}

/// Kind code of a skill added at runtime.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DynamicSkillKind {
    /// Expertis (E).
    #[strum(serialize = "Expertis")]
    #[cfg_attr(feature = "serde", serde(rename = "E"))]
    Expertise,
    /// Förmåga (F). No unit pool may fund abilities.
    #[strum(serialize = "Förmåga")]
    #[cfg_attr(feature = "serde", serde(rename = "F"))]
    Ability,
    /// Hantverk (H).
    #[strum(serialize = "Hantverk")]
    #[cfg_attr(feature = "serde", serde(rename = "H"))]
    Craft,
    /// Kännetecken (K).
    #[strum(serialize = "Kännetecken")]
    #[cfg_attr(feature = "serde", serde(rename = "K"))]
    Trait,
}

impl DynamicSkillKind {
    pub const fn code(self) -> char {
        match self {
            DynamicSkillKind::Expertise => 'E',
            DynamicSkillKind::Ability => 'F',
            DynamicSkillKind::Craft => 'H',
            DynamicSkillKind::Trait => 'K',
        }
    }

    pub const fn spending_category(self) -> SpendingCategory {
        match self {
            DynamicSkillKind::Expertise => SpendingCategory::Expertises,
            DynamicSkillKind::Ability => SpendingCategory::Abilities,
            DynamicSkillKind::Craft => SpendingCategory::Crafts,
            DynamicSkillKind::Trait => SpendingCategory::Traits,
        }
    }
}

/// Hard cap on `base_value + spent_units` for any skill.
pub const MAX_SKILL_VALUE: i32 = 8;

/// Special status marker on a skill.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillStatus {
    /// Talang: +1T6 when spending Fokus. No extra cap.
    #[strum(serialize = "Talang")]
    #[cfg_attr(feature = "serde", serde(rename = "T"))]
    Talent,
    /// Inkompetent: the skill can never exceed value 1 (= 2T6).
    #[strum(serialize = "Inkompetent")]
    #[cfg_attr(feature = "serde", serde(rename = "I"))]
    Incompetent,
    /// Blockerad: the skill cannot be raised at all.
    #[strum(serialize = "Blockerad")]
    #[cfg_attr(feature = "serde", serde(rename = "B"))]
    Blocked,
}

impl SkillStatus {
    /// Highest skill value this status allows.
    pub const fn max_value(self) -> i32 {
        match self {
            SkillStatus::Talent => MAX_SKILL_VALUE,
            SkillStatus::Incompetent => 1,
            SkillStatus::Blocked => 0,
        }
    }

    pub const fn effect(self) -> &'static str {
        match self {
            SkillStatus::Talent => "Ger +1T6 bonus vid Fokus-spendering",
            SkillStatus::Incompetent => "Kan ej höjas över värde 1 (= 2T6)",
            SkillStatus::Blocked => {
                "Kan ej höjas, Fokus får ej spenderas, -1 Välmående att använda (max 1/scen)"
            }
        }
    }
}

pub const KNOWLEDGE_SKILLS: [&str; 13] = [
    "Filosofi",
    "Geografi",
    "Gifter & droger",
    "Historia",
    "Kalkylera",
    "Krigföring",
    "Kulturkännedom",
    "Lagkunskap",
    "Läkekonst",
    "Ockultism",
    "Teologi",
    "Teoretisk magi",
    "Undervisa",
];

pub const TOTAL_KNOWLEDGE_SKILLS: usize = KNOWLEDGE_SKILLS.len();

pub const MYSTIC_SKILLS: [&str; 3] = ["Ceremoni", "Förnimma", "Förvränga"];

pub const MOVEMENT_SKILLS: [&str; 9] = [
    "Dansa",
    "Fingerfärdighet",
    "Gömma",
    "Hoppa",
    "Klättra",
    "Marsch",
    "Simma",
    "Smyga",
    "Undvika",
];

pub const SOCIAL_SKILLS: [&str; 12] = [
    "Argumentera",
    "Berättarkonst",
    "Charm",
    "Dupera",
    "Genomskåda",
    "Handel",
    "Hovliv",
    "Injaga fruktan",
    "Ledarskap",
    "Skumraskaffärer",
    "Spel & dobbel",
    "Sång & musik",
];

pub const COMBAT_SKILLS: [&str; 1] = ["Slagsmål"];

pub const WILDERNESS_SKILLS: [&str; 9] = [
    "Genomsöka",
    "Jakt & fiske",
    "Naturlära",
    "Orientering",
    "Rida",
    "Sjömannaskap",
    "Speja",
    "Spåra",
    "Vildmarksvana",
];

/// Groups with fixed skills, in sheet order.
pub const FIXED_SKILL_GROUPS: [SkillGroup; 6] = [
    SkillGroup::Knowledge,
    SkillGroup::Mystic,
    SkillGroup::Movement,
    SkillGroup::Social,
    SkillGroup::Combat,
    SkillGroup::Wilderness,
];

pub fn is_knowledge_skill(name: &str) -> bool {
    KNOWLEDGE_SKILLS.contains(&name)
}

/// Whether `name` is one of the skills every character starts with.
pub fn is_fixed_skill(name: &str) -> bool {
    FIXED_SKILL_GROUPS
        .iter()
        .any(|group| group.fixed_skills().contains(&name))
}

/// Skill value → dice, indexed by value 0..=8.
pub const SKILL_VALUE_TO_DICE: [&str; 9] = [
    "-", "2T6", "3T6", "3T6+2", "4T6", "4T6+1", "4T6+2", "4T6+3", "5T6",
];
