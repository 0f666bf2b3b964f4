//! Dice notation: `NT6`, `NT6+B`, `NT6-B`.

use std::fmt;

/// A die count and a signed flat bonus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DiceComponents {
    pub num_dice: i32,
    pub bonus: i32,
}

impl DiceComponents {
    pub const fn new(num_dice: i32, bonus: i32) -> Self {
        Self { num_dice, bonus }
    }

    /// Parses table notation such as `"3T6+2"` or `"2T6"`.
    pub fn parse(notation: &str) -> Option<Self> {
        let (dice, rest) = notation.split_once("T6")?;
        let num_dice = dice.parse().ok()?;
        let bonus = match rest.as_bytes().first() {
            None => 0,
            Some(b'+') => rest[1..].parse().ok()?,
            Some(b'-') => -rest[1..].parse::<i32>().ok()?,
            Some(_) => return None,
        };
        Some(Self { num_dice, bonus })
    }

    pub const fn with_bonus_offset(self, offset: i32) -> Self {
        Self {
            num_dice: self.num_dice,
            bonus: self.bonus.saturating_add(offset),
        }
    }
}

impl fmt::Display for DiceComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T6", self.num_dice)?;
        match self.bonus {
            0 => Ok(()),
            bonus if bonus > 0 => write!(f, "+{bonus}"),
            bonus => write!(f, "{bonus}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_render_table_notation() {
        for notation in ["1T6", "2T6+1", "4T6+3", "3T6-1"] {
            let parsed = DiceComponents::parse(notation);
            assert_eq!(parsed.map(|dice| dice.to_string()).as_deref(), Some(notation));
        }
        assert_eq!(DiceComponents::parse("-"), None);
        assert_eq!(DiceComponents::parse("2T6*2"), None);
    }

    #[test]
    fn negative_bonus_renders_minus_suffix() {
        let dice = DiceComponents::new(1, 2).with_bonus_offset(-3);
        assert_eq!(dice.to_string(), "1T6-1");
    }
}
