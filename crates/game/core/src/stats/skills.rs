//! Skill dice and unit totals.

use super::wisdom::wisdom_pool_entry;
use crate::state::CharacterState;
use crate::tables::{DESENSITIZATION_THRESHOLDS, MAX_SKILL_VALUE, SKILL_VALUE_TO_DICE};

/// Dice for a skill value; negative renders `"-"`, above 8 renders as 8.
pub fn skill_value_to_dice(value: i32) -> &'static str {
    if value < 0 {
        return SKILL_VALUE_TO_DICE[0];
    }
    SKILL_VALUE_TO_DICE[value.min(MAX_SKILL_VALUE) as usize]
}

/// Number of desensitization thresholds a track value has reached.
pub fn desensitization_threshold_reached(value: i32) -> usize {
    DESENSITIZATION_THRESHOLDS
        .iter()
        .filter(|&&threshold| value >= threshold)
        .count()
}

/// Units in all pools, Wisdom pools included once Visdom holds points.
///
/// Summed in `i64` so loaded snapshots with huge allocations cannot overflow.
pub fn total_units_available(state: &CharacterState) -> i64 {
    let allocated: i64 = i64::from(state.free_units)
        + state.specific_units.iter().map(|a| i64::from(a.units)).sum::<i64>()
        + state.group_units.iter().map(|a| i64::from(a.units)).sum::<i64>();
    let wisdom = wisdom_pool_entry(state)
        .map_or(0, |entry| i64::from(entry.extra_units) + i64::from(entry.expertise_bonus));
    allocated + wisdom
}

/// Units spent on skills, desensitization, languages and mysteries.
pub fn total_units_spent(state: &CharacterState) -> i64 {
    let skills: i64 = state
        .all_skills()
        .map(|skill| i64::from(skill.spent_units))
        .sum();
    let desensitization = i64::from(state.desensitization.exposure)
        + i64::from(state.desensitization.violence)
        + i64::from(state.desensitization.supernatural);
    skills + desensitization + state.languages.len() as i64 + state.mysteries.len() as i64
}
