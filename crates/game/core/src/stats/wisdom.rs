//! Visdom table lookup.

use super::attributes::final_attribute_value;
use crate::state::CharacterState;
use crate::tables::{TOTAL_KNOWLEDGE_SKILLS, WISDOM_MAX, WISDOM_MIN, WISDOM_TABLE, WisdomEntry};

/// Entitlements for a Visdom value.
///
/// Values below 4 use the value-4 row. Above 24 every knowledge skill gets
/// base value 1, and the unit bonuses keep growing by 1 and 2 per step.
pub fn wisdom_entry(value: i32) -> WisdomEntry {
    if value > WISDOM_MAX {
        let steps = (value - WISDOM_MAX) as u32;
        return WisdomEntry::new(0, TOTAL_KNOWLEDGE_SKILLS as u32, 5 + steps, 16 + steps * 2, 2);
    }
    let index = (value.max(WISDOM_MIN) - WISDOM_MIN) as usize;
    WISDOM_TABLE[index]
}

/// Entry for the state's current Visdom final value.
pub fn wisdom_entry_of(state: &CharacterState) -> WisdomEntry {
    wisdom_entry(final_attribute_value(&state.attributes.visdom))
}

/// Entry backing the Wisdom unit pools, present only once Visdom has been
/// given points.
pub fn wisdom_pool_entry(state: &CharacterState) -> Option<WisdomEntry> {
    state.wisdom_assigned().then(|| wisdom_entry_of(state))
}
