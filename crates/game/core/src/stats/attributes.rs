//! Final attribute values, attribute dice and the attribute point budget.

use super::dice::DiceComponents;
use crate::config::ChargenConfig;
use crate::state::{AttributeState, CharacterState};
use crate::tables::{ATTRIBUTE_DICE_MAX, ATTRIBUTE_DICE_MIN, ATTRIBUTE_TO_DICE, Attribute};

/// `base + modifiers`, the value before distribution points.
pub fn pre_spend(attribute: &AttributeState) -> i32 {
    attribute.base.saturating_add(attribute.modifiers)
}

/// `base + modifiers + assigned points`.
pub fn final_attribute_value(attribute: &AttributeState) -> i32 {
    pre_spend(attribute).saturating_add(attribute.assigned_chunk.unwrap_or(0))
}

/// Final value of `attribute` in `state`.
pub fn final_value_of(state: &CharacterState, attribute: Attribute) -> i32 {
    final_attribute_value(state.attributes.get(attribute))
}

/// Dice notation for an attribute value. Values below 4 render as `"<4"`.
pub fn attribute_to_dice(value: i32) -> String {
    if value < ATTRIBUTE_DICE_MIN {
        return "<4".to_string();
    }
    if value <= ATTRIBUTE_DICE_MAX {
        return ATTRIBUTE_TO_DICE[(value - ATTRIBUTE_DICE_MIN) as usize].to_string();
    }
    attribute_to_dice_components(value).to_string()
}

/// Dice count and bonus for any attribute value; `(0, 0)` below 4.
pub fn attribute_to_dice_components(value: i32) -> DiceComponents {
    if value < ATTRIBUTE_DICE_MIN {
        return DiceComponents::default();
    }
    let steps = value - ATTRIBUTE_DICE_MIN;
    DiceComponents::new(steps / 4 + 1, steps % 4)
}

/// Attribute points available: configured base plus event-table extras.
pub fn total_attribute_points(state: &CharacterState, config: &ChargenConfig) -> i32 {
    config
        .attribute_points
        .saturating_add(state.extra_attribute_points)
}

/// Points already placed on attributes.
pub fn attribute_points_used(state: &CharacterState) -> i32 {
    state
        .attributes
        .iter()
        .map(|(_, attribute)| attribute.assigned_chunk.unwrap_or(0))
        .fold(0, i32::saturating_add)
}

/// Points still unplaced under the free-points model. Negative when
/// overspent.
pub fn remaining_free_points(state: &CharacterState, config: &ChargenConfig) -> i32 {
    total_attribute_points(state, config).saturating_sub(attribute_points_used(state))
}
