use crate::state::CharacterState;
use crate::stats::wisdom_pool_entry;
use crate::tables::{EXPERTISE_ONLY, SpendingCategory, UnitCategory};

use super::target::{SpendingTarget, TargetId};

/// Where a pool's units come from.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[strum(serialize_all = "camelCase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PoolKind {
    Specific,
    Group,
    Free,
    WisdomKnowledge,
    WisdomExpertise,
}

/// Label of the free pool in usage reports.
pub const FREE_POOL_LABEL: &str = "Valfria";
pub const WISDOM_KNOWLEDGE_LABEL: &str = "Visdom bonus kunskapsenheter";
pub const WISDOM_EXPERTISE_LABEL: &str = "Visdom expertisbonus";

/// What a pool may fund.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PoolScope {
    /// Only skill rows with exactly this name.
    Skill(String),
    /// Any target whose spending category is listed.
    Categories(&'static [SpendingCategory]),
}

/// A unit supply with its eligibility rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpendingPool {
    pub kind: PoolKind,
    pub label: String,
    pub capacity: u32,
    pub scope: PoolScope,
}

impl SpendingPool {
    pub fn specific(skill: impl Into<String>, capacity: u32) -> Self {
        let skill = skill.into();
        Self {
            kind: PoolKind::Specific,
            label: skill.clone(),
            capacity,
            scope: PoolScope::Skill(skill),
        }
    }

    pub fn group(category: UnitCategory, capacity: u32) -> Self {
        Self {
            kind: PoolKind::Group,
            label: category.to_string(),
            capacity,
            scope: PoolScope::Categories(category.spending_list()),
        }
    }

    pub fn free(capacity: u32) -> Self {
        Self {
            kind: PoolKind::Free,
            label: FREE_POOL_LABEL.to_string(),
            capacity,
            scope: PoolScope::Categories(UnitCategory::Free.spending_list()),
        }
    }

    pub fn wisdom_knowledge(capacity: u32) -> Self {
        Self {
            kind: PoolKind::WisdomKnowledge,
            label: WISDOM_KNOWLEDGE_LABEL.to_string(),
            capacity,
            scope: PoolScope::Categories(UnitCategory::Knowledge.spending_list()),
        }
    }

    pub fn wisdom_expertise(capacity: u32) -> Self {
        Self {
            kind: PoolKind::WisdomExpertise,
            label: WISDOM_EXPERTISE_LABEL.to_string(),
            capacity,
            scope: PoolScope::Categories(&EXPERTISE_ONLY),
        }
    }

    pub fn can_fund(&self, target: &SpendingTarget) -> bool {
        match &self.scope {
            PoolScope::Skill(skill) => {
                matches!(&target.id, TargetId::Skill(name) if name == skill)
            }
            PoolScope::Categories(categories) => categories.contains(&target.category),
        }
    }
}

fn capacity(units: i32) -> u32 {
    units.max(0) as u32
}

/// Collects every pool with positive capacity: specific allocations, group
/// allocations, free units, then the two Wisdom pools when Visdom holds
/// points.
pub fn build_pools(state: &CharacterState) -> Vec<SpendingPool> {
    let mut pools = Vec::new();

    pools.extend(
        state
            .specific_units
            .iter()
            .filter(|alloc| alloc.units > 0)
            .map(|alloc| SpendingPool::specific(alloc.skill.as_str(), capacity(alloc.units))),
    );
    pools.extend(
        state
            .group_units
            .iter()
            .filter(|alloc| alloc.units > 0)
            .map(|alloc| SpendingPool::group(alloc.group, capacity(alloc.units))),
    );
    if state.free_units > 0 {
        pools.push(SpendingPool::free(capacity(state.free_units)));
    }

    if let Some(entry) = wisdom_pool_entry(state) {
        if entry.extra_units > 0 {
            pools.push(SpendingPool::wisdom_knowledge(entry.extra_units));
        }
        if entry.expertise_bonus > 0 {
            pools.push(SpendingPool::wisdom_expertise(entry.expertise_bonus));
        }
    }

    pools
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GroupUnitAllocation, SpecificUnitAllocation};

    #[test]
    fn empty_allocations_are_skipped() {
        let mut state = CharacterState::new();
        state.specific_units.push(SpecificUnitAllocation::new("Dansa", 0));
        state
            .group_units
            .push(GroupUnitAllocation::new(UnitCategory::Mystic, -2));
        assert!(build_pools(&state).is_empty());
    }

    #[test]
    fn wisdom_pools_follow_visdom() {
        let mut state = CharacterState::new();
        state.free_units = 2;
        state.attributes.visdom.base = 14;
        state.attributes.visdom.assigned_chunk = Some(6);

        let pools = build_pools(&state);
        let kinds: Vec<_> = pools.iter().map(|pool| (pool.kind, pool.capacity)).collect();
        assert_eq!(
            kinds,
            vec![
                (PoolKind::Free, 2),
                (PoolKind::WisdomKnowledge, 1),
                (PoolKind::WisdomExpertise, 8),
            ]
        );
        assert_eq!(pools[1].label, WISDOM_KNOWLEDGE_LABEL);
    }
}
