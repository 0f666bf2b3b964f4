use std::fmt;

use crate::state::CharacterState;
use crate::tables::{DesensitizationCategory, SpendingCategory};

/// Identifies a spending target.
///
/// Skill targets are keyed by name, so a dynamic skill sharing a fixed
/// skill's name answers to the same id.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TargetId {
    Skill(String),
    Desensitization(DesensitizationCategory),
    Languages,
    Mysteries,
}

impl TargetId {
    pub fn skill(name: impl Into<String>) -> Self {
        TargetId::Skill(name.into())
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetId::Skill(name) => write!(f, "skill:{name}"),
            TargetId::Desensitization(category) => write!(f, "desens:{category}"),
            TargetId::Languages => f.write_str("languages"),
            TargetId::Mysteries => f.write_str("mysteries"),
        }
    }
}

/// A demand on the unit pools.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpendingTarget {
    pub id: TargetId,
    pub category: SpendingCategory,
    pub demand: u32,
}

impl SpendingTarget {
    pub fn new(id: TargetId, category: SpendingCategory, demand: u32) -> Self {
        Self {
            id,
            category,
            demand,
        }
    }
}

/// Replaces the demand of every target with `target` id.
#[derive(Clone, Copy, Debug)]
pub struct DemandOverride<'a> {
    pub target: &'a TargetId,
    pub amount: u32,
}

/// Collects every target with positive demand: skill rows in order (fixed
/// then dynamic), the three desensitization tracks, languages, mysteries.
pub fn build_targets(
    state: &CharacterState,
    demand_override: Option<DemandOverride<'_>>,
) -> Vec<SpendingTarget> {
    let mut targets = Vec::new();
    let mut push = |id: TargetId, category: SpendingCategory, stored: i32| {
        let demand = match demand_override {
            Some(o) if *o.target == id => o.amount,
            _ => stored.max(0) as u32,
        };
        if demand > 0 {
            targets.push(SpendingTarget::new(id, category, demand));
        }
    };

    for skill in state.all_skills() {
        push(
            TargetId::Skill(skill.name.clone()),
            skill.spending_category(),
            skill.spent_units,
        );
    }
    for category in DesensitizationCategory::ALL {
        push(
            TargetId::Desensitization(category),
            category.spending_category(),
            state.desensitization.get(category),
        );
    }
    push(
        TargetId::Languages,
        SpendingCategory::Languages,
        state.languages.len() as i32,
    );
    push(
        TargetId::Mysteries,
        SpendingCategory::Mysteries,
        state.mysteries.len() as i32,
    );

    targets
}
