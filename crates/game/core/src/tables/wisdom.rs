//! Visdom (Wisdom) entitlements table.

use super::skills::TOTAL_KNOWLEDGE_SKILLS;

/// What a given Visdom value grants or imposes.
///
/// `incompetent_count` / `base_value_count` equal to [`TOTAL_KNOWLEDGE_SKILLS`]
/// means "Samtliga" (all knowledge skills); zero means "Inga".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WisdomEntry {
    /// Knowledge skills that must be marked Incompetent.
    pub incompetent_count: u32,
    /// Knowledge skills that start with base value 1.
    pub base_value_count: u32,
    /// Bonus knowledge units (funds the Kunskapsenheter spending list).
    pub extra_units: u32,
    /// Bonus units that may only be spent on expertises.
    pub expertise_bonus: u32,
    /// Experience cost of learning a new knowledge skill.
    pub new_knowledge_cost: u32,
}

impl WisdomEntry {
    pub const fn new(
        incompetent_count: u32,
        base_value_count: u32,
        extra_units: u32,
        expertise_bonus: u32,
        new_knowledge_cost: u32,
    ) -> Self {
        Self {
            incompetent_count,
            base_value_count,
            extra_units,
            expertise_bonus,
            new_knowledge_cost,
        }
    }

    /// Every knowledge skill is forced Incompetent.
    pub const fn all_incompetent(&self) -> bool {
        self.incompetent_count as usize == TOTAL_KNOWLEDGE_SKILLS
    }

    /// Every knowledge skill is forced to base value 1.
    pub const fn all_base_value(&self) -> bool {
        self.base_value_count as usize == TOTAL_KNOWLEDGE_SKILLS
    }
}

pub const WISDOM_MIN: i32 = 4;
pub const WISDOM_MAX: i32 = 24;

const ALL: u32 = TOTAL_KNOWLEDGE_SKILLS as u32;

const fn we(i: u32, b: u32, x: u32, e: u32, c: u32) -> WisdomEntry {
    WisdomEntry::new(i, b, x, e, c)
}

/// Rows for Visdom 4..=24.
pub const WISDOM_TABLE: [WisdomEntry; 21] = [
    we(ALL, 0, 0, 0, 10), // 4
    we(10, 0, 0, 0, 10),
    we(9, 0, 0, 0, 8),
    we(6, 0, 0, 0, 8),
    we(5, 0, 0, 0, 6), // 8
    we(3, 1, 0, 0, 6),
    we(2, 2, 0, 0, 5),
    we(0, 3, 0, 0, 5),
    we(0, 4, 0, 0, 4), // 12
    we(0, 6, 0, 0, 4),
    we(0, 8, 0, 0, 4),
    we(0, 9, 2, 0, 4),
    we(0, 10, 0, 2, 3), // 16
    we(0, 11, 0, 4, 3),
    we(0, ALL, 0, 4, 3),
    we(0, ALL, 1, 6, 3),
    we(0, ALL, 1, 8, 2), // 20
    we(0, ALL, 2, 10, 2),
    we(0, ALL, 3, 12, 2),
    we(0, ALL, 4, 14, 2),
    we(0, ALL, 5, 16, 2), // 24
];
