use crate::state::CharacterState;

use super::flow::FlowNetwork;
use super::pool::{PoolKind, SpendingPool, build_pools};
use super::target::{DemandOverride, SpendingTarget, TargetId, build_targets};

/// Units drawn from pools sharing one `(kind, label)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolUsage {
    pub kind: PoolKind,
    pub label: String,
    pub used: u32,
    pub total: u32,
}

impl PoolUsage {
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.used)
    }
}

/// Whether every target demand can be funded at once.
pub fn routes_all_demand(pools: &[SpendingPool], targets: &[SpendingTarget]) -> bool {
    let demand: u64 = targets.iter().map(|target| u64::from(target.demand)).sum();
    if demand == 0 {
        return true;
    }
    let supply: u64 = pools.iter().map(|pool| u64::from(pool.capacity)).sum();
    if demand > supply {
        return false;
    }
    FlowNetwork::build(pools, targets).max_flow() >= demand
}

/// Whether the current allocation can be routed through the pools.
pub fn is_feasible(state: &CharacterState) -> bool {
    routes_all_demand(&build_pools(state), &build_targets(state, None))
}

/// Feasibility with one target's demand replaced.
pub fn is_feasible_with(state: &CharacterState, demand_override: DemandOverride<'_>) -> bool {
    routes_all_demand(
        &build_pools(state),
        &build_targets(state, Some(demand_override)),
    )
}

/// Largest amount `≤ requested` that `target` can hold with everything else
/// unchanged. Returns 0 when not even that fits.
///
/// Feasibility only gets harder as one demand grows, so the answer is found
/// by binary search.
pub fn max_spendable_for_target(state: &CharacterState, target: &TargetId, requested: i32) -> i32 {
    let pools = build_pools(state);
    let fits = |amount: u32| {
        let targets = build_targets(state, Some(DemandOverride { target, amount }));
        routes_all_demand(&pools, &targets)
    };

    let requested = requested.max(0) as u32;
    if fits(requested) {
        return requested as i32;
    }
    if requested == 0 || !fits(0) {
        return 0;
    }

    // fits(lo) holds, fits(hi) does not.
    let (mut lo, mut hi) = (0, requested);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if fits(mid) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo as i32
}

/// Whether one more unit on skill `name` stays within its status cap and is
/// fundable.
pub fn can_increase_skill_units(state: &CharacterState, name: &str) -> bool {
    let Some(skill) = state.find_skill(name) else {
        return false;
    };
    if skill.spent_units >= skill.max_units() {
        return false;
    }
    let next = skill.spent_units + 1;
    max_spendable_for_target(state, &TargetId::skill(name), next) > skill.spent_units
}

/// Per-pool usage of the current allocation, merged by `(kind, label)` in
/// first-seen order.
pub fn pool_usage_breakdown(state: &CharacterState) -> Vec<PoolUsage> {
    let pools = build_pools(state);
    if pools.is_empty() {
        return Vec::new();
    }
    let targets = build_targets(state, None);
    let mut network = FlowNetwork::build(&pools, &targets);
    network.max_flow();

    let mut usage: Vec<PoolUsage> = Vec::new();
    for (index, pool) in pools.iter().enumerate() {
        let used = network.pool_used(index);
        match usage
            .iter_mut()
            .find(|entry| entry.kind == pool.kind && entry.label == pool.label)
        {
            Some(entry) => {
                entry.used = entry.used.saturating_add(used);
                entry.total = entry.total.saturating_add(pool.capacity);
            }
            None => usage.push(PoolUsage {
                kind: pool.kind,
                label: pool.label.clone(),
                used,
                total: pool.capacity,
            }),
        }
    }
    usage
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::state::{GroupUnitAllocation, LanguageEntry, LanguageKind, Skill, SpecificUnitAllocation};
    use crate::tables::{DesensitizationCategory, DynamicSkillKind, SpendingCategory, UnitCategory};

    fn skill_mut<'a>(state: &'a mut CharacterState, name: &str) -> &'a mut Skill {
        state
            .all_skills_mut()
            .find(|skill| skill.name == name)
            .expect("skill exists")
    }

    /// Visdom 19 under the balanced model, three free units, one knowledge
    /// and one mystic group unit.
    fn wisdom_19_state() -> CharacterState {
        let mut state = CharacterState::new();
        state.attributes.visdom.base = 19;
        state.attributes.visdom.assigned_chunk = Some(0);
        state.free_units = 3;
        state
            .group_units
            .push(GroupUnitAllocation::new(UnitCategory::Knowledge, 1));
        state
            .group_units
            .push(GroupUnitAllocation::new(UnitCategory::Mystic, 1));
        state
    }

    #[test]
    fn empty_state_is_feasible() {
        let state = CharacterState::new();
        assert!(is_feasible(&state));
        assert!(pool_usage_breakdown(&state).is_empty());
    }

    #[test]
    fn demand_without_pools_is_infeasible() {
        let mut state = CharacterState::new();
        state.desensitization.exposure = 1;
        assert!(!is_feasible(&state));
        assert_eq!(
            max_spendable_for_target(
                &state,
                &TargetId::Desensitization(DesensitizationCategory::Exposure),
                1
            ),
            0
        );
    }

    #[test]
    fn wisdom_scenario_routes_and_clamps() {
        let mut state = wisdom_19_state();
        skill_mut(&mut state, "Filosofi").spent_units = 1;
        state
            .dynamic_skills
            .push(Skill::dynamic("Svärd", DynamicSkillKind::Expertise).with_spent_units(6));
        state.languages.push(LanguageEntry::new("Jargiska", LanguageKind::Written));
        skill_mut(&mut state, "Ceremoni").spent_units = 1;

        assert!(is_feasible(&state));

        // Bonus and group pools cover everything so far; free units are untouched.
        assert_eq!(
            max_spendable_for_target(&state, &TargetId::skill("Dansa"), 3),
            3
        );
        skill_mut(&mut state, "Charm").spent_units = 1;
        assert_eq!(
            max_spendable_for_target(&state, &TargetId::skill("Dansa"), 3),
            2
        );
    }

    #[test]
    fn specific_and_wisdom_pools_share_the_load() {
        let mut state = wisdom_19_state();
        state
            .specific_units
            .push(SpecificUnitAllocation::new("Filosofi", 1));
        skill_mut(&mut state, "Filosofi").spent_units = 3;
        skill_mut(&mut state, "Ceremoni").spent_units = 2;
        skill_mut(&mut state, "Dansa").spent_units = 1;
        state.dynamic_skills.push(
            Skill::dynamic("Expertis: Alkemi", DynamicSkillKind::Expertise).with_spent_units(6),
        );

        assert!(is_feasible(&state));
        assert_eq!(
            max_spendable_for_target(&state, &TargetId::skill("Dansa"), 3),
            2
        );

        let outcome = crate::engine::apply_with_outcome(
            &state,
            &crate::action::CharacterAction::set_skill_units("Dansa", 3),
        );
        assert_eq!(
            outcome.state.find_skill("Dansa").map(|skill| skill.spent_units),
            Some(2)
        );
        assert!(outcome.notice.is_some());

        let usage = pool_usage_breakdown(&state);
        let used: u32 = usage.iter().map(|entry| entry.used).sum();
        let total: u32 = usage.iter().map(|entry| entry.total).sum();
        assert_eq!((used, total), (12, 13));
    }

    #[test]
    fn abilities_are_never_funded() {
        let mut state = CharacterState::new();
        state.free_units = 10;
        state
            .dynamic_skills
            .push(Skill::dynamic("Mörkersyn", DynamicSkillKind::Ability));

        assert_eq!(
            max_spendable_for_target(&state, &TargetId::skill("Mörkersyn"), 2),
            0
        );
        assert!(!can_increase_skill_units(&state, "Mörkersyn"));
    }

    #[test]
    fn specific_units_fund_only_their_skill() {
        let mut state = CharacterState::new();
        state
            .specific_units
            .push(SpecificUnitAllocation::new("Simma", 2));

        assert!(can_increase_skill_units(&state, "Simma"));
        assert!(!can_increase_skill_units(&state, "Hoppa"));
        assert!(!can_increase_skill_units(&state, "Okänd"));
    }

    #[test]
    fn status_cap_blocks_increase() {
        let mut state = CharacterState::new();
        state.free_units = 5;
        skill_mut(&mut state, "Geografi").status = Some(crate::tables::SkillStatus::Incompetent);
        skill_mut(&mut state, "Geografi").spent_units = 1;
        assert!(!can_increase_skill_units(&state, "Geografi"));
    }

    #[test]
    fn usage_merges_duplicate_labels() {
        let mut state = CharacterState::new();
        state
            .group_units
            .push(GroupUnitAllocation::new(UnitCategory::Social, 2));
        state
            .group_units
            .push(GroupUnitAllocation::new(UnitCategory::Social, 3));
        state.free_units = 1;
        skill_mut(&mut state, "Charm").spent_units = 4;

        let usage = pool_usage_breakdown(&state);
        let used: u32 = usage.iter().map(|entry| entry.used).sum();
        assert_eq!(usage.len(), 2);
        assert_eq!(usage[0].label, "Sociala enheter");
        assert_eq!(usage[0].total, 5);
        assert_eq!(usage[1].kind, PoolKind::Free);
        assert_eq!(used, 4);
    }

    #[test]
    fn saturated_pools_do_not_overflow() {
        let mut state = CharacterState::new();
        state.free_units = i32::MAX;
        state
            .group_units
            .push(GroupUnitAllocation::new(UnitCategory::Social, i32::MAX));
        state
            .group_units
            .push(GroupUnitAllocation::new(UnitCategory::Movement, i32::MAX));
        for name in ["Charm", "Dansa", "Hoppa"] {
            skill_mut(&mut state, name).spent_units = i32::MAX;
        }
        assert!(is_feasible(&state));

        skill_mut(&mut state, "Simma").spent_units = 1;
        assert!(!is_feasible(&state));
        assert_eq!(
            max_spendable_for_target(&state, &TargetId::skill("Simma"), 1),
            0
        );
    }

    const POOL_MENU: [UnitCategory; 7] = [
        UnitCategory::Knowledge,
        UnitCategory::Mystic,
        UnitCategory::Movement,
        UnitCategory::Social,
        UnitCategory::Combat,
        UnitCategory::Wilderness,
        UnitCategory::Free,
    ];

    const TARGET_MENU: [(&str, SpendingCategory); 6] = [
        ("a", SpendingCategory::KnowledgeSkills),
        ("b", SpendingCategory::Crafts),
        ("c", SpendingCategory::DesensitizationExposure),
        ("d", SpendingCategory::Expertises),
        ("e", SpendingCategory::MysticSkills),
        ("f", SpendingCategory::Abilities),
    ];

    fn distribute(
        caps: &mut [u32],
        pools: &[SpendingPool],
        targets: &[SpendingTarget],
        index: usize,
        remaining: u32,
        from_pool: usize,
    ) -> bool {
        if remaining == 0 {
            return exhaustive(caps, pools, targets, index + 1);
        }
        for p in from_pool..pools.len() {
            if caps[p] > 0 && pools[p].can_fund(&targets[index]) {
                caps[p] -= 1;
                let ok = distribute(caps, pools, targets, index, remaining - 1, p);
                caps[p] += 1;
                if ok {
                    return true;
                }
            }
        }
        false
    }

    fn exhaustive(
        caps: &mut [u32],
        pools: &[SpendingPool],
        targets: &[SpendingTarget],
        index: usize,
    ) -> bool {
        match targets.get(index) {
            None => true,
            Some(target) => distribute(caps, pools, targets, index, target.demand, 0),
        }
    }

    const SKILL_MENU: [&str; 4] = ["Filosofi", "Ceremoni", "Dansa", "Charm"];

    #[test]
    fn max_spendable_matches_exhaustive_search() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for case in 0..200 {
            let mut state = CharacterState::new();
            state.free_units = rng.gen_range(0..=3);
            for _ in 0..rng.gen_range(0..=2) {
                let group = POOL_MENU[rng.gen_range(0..POOL_MENU.len() - 1)];
                state
                    .group_units
                    .push(GroupUnitAllocation::new(group, rng.gen_range(1..=2)));
            }
            if rng.gen_bool(0.5) {
                let name = SKILL_MENU[rng.gen_range(0..SKILL_MENU.len())];
                state
                    .specific_units
                    .push(SpecificUnitAllocation::new(name, rng.gen_range(1..=2)));
            }
            for name in SKILL_MENU {
                skill_mut(&mut state, name).spent_units = rng.gen_range(0..=2);
            }

            let target = TargetId::skill(SKILL_MENU[rng.gen_range(0..SKILL_MENU.len())]);
            let requested: u32 = rng.gen_range(0..=5);
            let pools = build_pools(&state);
            let best = (0..=requested)
                .rev()
                .find(|&amount| {
                    let targets =
                        build_targets(&state, Some(DemandOverride { target: &target, amount }));
                    let mut caps: Vec<_> = pools.iter().map(|pool| pool.capacity).collect();
                    exhaustive(&mut caps, &pools, &targets, 0)
                })
                .unwrap_or(0);

            assert_eq!(
                max_spendable_for_target(&state, &target, requested as i32),
                best as i32,
                "case {case}: {target:?} requested {requested} in {state:?}"
            );
        }
    }

    #[test]
    fn max_flow_agrees_with_exhaustive_search() {
        let mut rng = StdRng::seed_from_u64(0x0e05);
        for case in 0..400 {
            let pools: Vec<_> = (0..rng.gen_range(0..=4))
                .map(|_| match rng.gen_range(0..4) {
                    0 => SpendingPool::specific(
                        TARGET_MENU[rng.gen_range(0..TARGET_MENU.len())].0,
                        rng.gen_range(1..=3),
                    ),
                    _ => SpendingPool::group(
                        POOL_MENU[rng.gen_range(0..POOL_MENU.len())],
                        rng.gen_range(1..=3),
                    ),
                })
                .collect();
            let targets: Vec<_> = (0..rng.gen_range(0..=4))
                .map(|_| {
                    let (name, category) = TARGET_MENU[rng.gen_range(0..TARGET_MENU.len())];
                    SpendingTarget::new(TargetId::skill(name), category, rng.gen_range(1..=3))
                })
                .collect();

            let mut caps: Vec<_> = pools.iter().map(|pool| pool.capacity).collect();
            assert_eq!(
                routes_all_demand(&pools, &targets),
                exhaustive(&mut caps, &pools, &targets, 0),
                "case {case}: {pools:?} / {targets:?}"
            );
        }
    }
}
