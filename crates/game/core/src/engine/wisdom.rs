use crate::state::CharacterState;
use crate::stats::wisdom_entry_of;
use crate::tables::TOTAL_KNOWLEDGE_SKILLS;

use super::reducer::StateReducer;

/// Re-syncs the knowledge-skill selections with the Visdom table.
///
/// When the current entry forces every knowledge skill Incompetent (or to
/// base value 1), the selection becomes the full list and the fixed skill rows
/// follow. When the entry stops forcing but the selection is still the full
/// list, the selection and the forced marks are released. Partial selections
/// are left to the player.
pub fn apply_wisdom_derived_rules(state: &mut CharacterState) {
    let entry = wisdom_entry_of(state);
    let mut reducer = StateReducer::new(state);
    let mut knowledge = reducer.knowledge();

    if entry.all_base_value() {
        knowledge.force_all_base_value();
    } else if knowledge.base_value_selected() == TOTAL_KNOWLEDGE_SKILLS {
        knowledge.release_all_base_value();
    }

    if entry.all_incompetent() {
        knowledge.force_all_incompetent();
    } else if knowledge.incompetent_selected() == TOTAL_KNOWLEDGE_SKILLS {
        knowledge.release_all_incompetent();
    }
}
