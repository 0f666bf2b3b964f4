//! Unit-allocation feasibility engine.
//!
//! Pools (specific, group, free and the two Wisdom bonus pools) fund targets
//! (skill units, desensitization, languages, mysteries). Pools overlap in what
//! they may fund, so feasibility is decided by max flow on
//! `source → pool → target → sink` rather than by filling pools greedily. The
//! network is rebuilt from the state on every query.

mod feasibility;
mod flow;
mod pool;
mod target;

pub use feasibility::{
    PoolUsage, can_increase_skill_units, is_feasible, is_feasible_with,
    max_spendable_for_target, pool_usage_breakdown, routes_all_demand,
};
pub use flow::FlowNetwork;
pub use pool::{
    FREE_POOL_LABEL, PoolKind, PoolScope, SpendingPool, WISDOM_EXPERTISE_LABEL,
    WISDOM_KNOWLEDGE_LABEL, build_pools,
};
pub use target::{DemandOverride, SpendingTarget, TargetId, build_targets};
