//! Derivation functions.
//!
//! Everything here is recomputed from [`CharacterState`](crate::state::CharacterState)
//! on read and never stored:
//!
//! ```text
//! [ attributes ]  base + modifiers + assigned points → dice
//!      ↓
//! [ derived ]     Kroppsbyggnad → Grundrustning / Grundskada
//! [ wisdom ]      Visdom → WisdomEntry (forced statuses, bonus pools)
//!      ↓
//! [ skills ]      skill dice, unit totals
//! ```

pub mod attributes;
pub mod derived;
pub mod dice;
pub mod skills;
pub mod wisdom;

pub use attributes::{
    attribute_points_used, attribute_to_dice, attribute_to_dice_components,
    final_attribute_value, final_value_of, pre_spend, remaining_free_points,
    total_attribute_points,
};
pub use derived::{
    grundrustning, grundrustning_with_mod, grundskada, grundskada_components,
    grundskada_with_mod,
};
pub use dice::DiceComponents;
pub use skills::{
    desensitization_threshold_reached, skill_value_to_dice, total_units_available,
    total_units_spent,
};
pub use wisdom::{wisdom_entry, wisdom_entry_of, wisdom_pool_entry};
