use crate::tables::{
    DynamicSkillKind, FIXED_SKILL_GROUPS, MAX_SKILL_VALUE, SkillGroup, SkillStatus,
    SpendingCategory,
};

/// A skill row: fixed skills are seeded at creation, dynamic ones (expertises,
/// crafts, traits, abilities, weapon/aspect skills) are added at runtime.
///
/// Skills are identified by `name`. A dynamic skill may share a fixed skill's
/// name; both rows then answer to that name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Skill {
    pub name: String,
    pub group: SkillGroup,
    /// 0 or 1; Visdom may grant 1 to knowledge skills.
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_value: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spent_units: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<SkillStatus>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub dynamic_type: Option<DynamicSkillKind>,
    /// Omstöpt Förnimma (display marker only).
    #[cfg_attr(
        feature = "serde",
        serde(rename = "isOmstöpt", default, skip_serializing_if = "std::ops::Not::not")
    )]
    pub is_omstopt: bool,
}

impl Skill {
    pub fn new(name: impl Into<String>, group: SkillGroup) -> Self {
        Self {
            name: name.into(),
            group,
            base_value: 0,
            spent_units: 0,
            status: None,
            dynamic_type: None,
            is_omstopt: false,
        }
    }

    /// A runtime-added skill in "Övriga färdigheter".
    pub fn dynamic(name: impl Into<String>, kind: DynamicSkillKind) -> Self {
        Self {
            dynamic_type: Some(kind),
            ..Self::new(name, SkillGroup::Other)
        }
    }

    pub fn with_spent_units(mut self, units: i32) -> Self {
        self.spent_units = units;
        self
    }

    pub fn with_status(mut self, status: SkillStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// `base_value + spent_units`.
    pub fn value(&self) -> i32 {
        self.base_value.saturating_add(self.spent_units)
    }

    /// Highest value allowed by the current status.
    pub fn cap(&self) -> i32 {
        max_skill_value(self.status)
    }

    /// Most units this skill can hold without breaking its status cap.
    pub fn max_units(&self) -> i32 {
        self.cap().saturating_sub(self.base_value).max(0)
    }

    /// Category used to match the skill against unit pools. Dynamic kinds take
    /// precedence over the group.
    pub fn spending_category(&self) -> SpendingCategory {
        match self.dynamic_type {
            Some(kind) => kind.spending_category(),
            None => self.group.spending_category(),
        }
    }
}

/// Cap for a skill with the given status; no status means [`MAX_SKILL_VALUE`].
pub fn max_skill_value(status: Option<SkillStatus>) -> i32 {
    status.map_or(MAX_SKILL_VALUE, SkillStatus::max_value)
}

/// Fixed skill list of a fresh character, grouped in sheet order.
pub fn default_skills() -> Vec<Skill> {
    FIXED_SKILL_GROUPS
        .iter()
        .flat_map(|&group| {
            group
                .fixed_skills()
                .iter()
                .map(move |&name| Skill::new(name, group))
        })
        .collect()
}
