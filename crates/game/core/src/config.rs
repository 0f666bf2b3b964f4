/// Character-creation rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChargenConfig {
    /// Attribute points handed out before event-table extras.
    pub attribute_points: i32,
    /// Lowest final attribute value that passes validation.
    pub min_final_attribute_value: i32,
    /// Points a single attribute may take under the free-points model.
    pub max_free_points_per_attribute: i32,
}

impl ChargenConfig {
    // ===== fixed by the rulebook =====
    pub const MAX_SKILL_VALUE: i32 = crate::tables::MAX_SKILL_VALUE;
    pub const MAX_CHUNK_VALUE: i32 = 10;
    pub const TOTAL_KNOWLEDGE_SKILLS: usize = crate::tables::TOTAL_KNOWLEDGE_SKILLS;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ATTRIBUTE_POINTS: i32 = 40;
    pub const MIN_FINAL_ATTRIBUTE_VALUE: i32 = 4;

    pub fn new() -> Self {
        Self {
            attribute_points: Self::DEFAULT_ATTRIBUTE_POINTS,
            min_final_attribute_value: Self::MIN_FINAL_ATTRIBUTE_VALUE,
            max_free_points_per_attribute: Self::MAX_CHUNK_VALUE,
        }
    }

    pub fn with_attribute_points(attribute_points: i32) -> Self {
        Self {
            attribute_points,
            ..Self::new()
        }
    }
}

impl Default for ChargenConfig {
    fn default() -> Self {
        Self::new()
    }
}
