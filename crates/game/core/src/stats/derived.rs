//! Grundrustning and Grundskada, derived from Kroppsbyggnad.
//!
//! Table lookup for 4..=24. Below 4 the first row applies; above 24 both
//! values follow their arithmetic progressions.

use super::dice::DiceComponents;
use crate::tables::{
    GRUNDSKADA_BONUS_PATTERN, KROPPSBYGGNAD_MIN, KROPPSBYGGNAD_TABLE, kroppsbyggnad_row,
};

fn clamped_row(kb: i32) -> Option<(i32, &'static str)> {
    if kb < KROPPSBYGGNAD_MIN {
        return KROPPSBYGGNAD_TABLE.first().copied();
    }
    kroppsbyggnad_row(kb)
}

/// Base armor for a Kroppsbyggnad value.
pub fn grundrustning(kb: i32) -> i32 {
    match clamped_row(kb) {
        Some((armor, _)) => armor,
        None if kb <= 8 => 0,
        None => (kb - 7) / 2,
    }
}

/// Base armor with the character's flat modifier.
pub fn grundrustning_with_mod(kb: i32, modifier: i32) -> i32 {
    grundrustning(kb) + modifier
}

/// Base damage dice for a Kroppsbyggnad value.
pub fn grundskada(kb: i32) -> String {
    grundskada_components(kb).to_string()
}

pub fn grundskada_components(kb: i32) -> DiceComponents {
    if let Some(dice) = clamped_row(kb).and_then(|(_, damage)| DiceComponents::parse(damage)) {
        return dice;
    }
    let steps = kb - KROPPSBYGGNAD_MIN;
    DiceComponents::new(
        steps / 4 + 1,
        GRUNDSKADA_BONUS_PATTERN[(steps % 4) as usize],
    )
}

/// Base damage with a signed modifier on the bonus term only.
///
/// The die count never changes; the bonus may go negative (`"1T6-1"`).
pub fn grundskada_with_mod(kb: i32, modifier: i32) -> String {
    grundskada_components(kb)
        .with_bonus_offset(modifier)
        .to_string()
}
