//! Attribute names, distribution models and the attribute dice table.

/// The eight character attributes, in sheet order.
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
    strum::EnumCount,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    #[strum(serialize = "Förflyttning")]
    #[cfg_attr(feature = "serde", serde(rename = "Förflyttning"))]
    Forflyttning,
    #[strum(serialize = "Intryck")]
    #[cfg_attr(feature = "serde", serde(rename = "Intryck"))]
    Intryck,
    #[strum(serialize = "Kroppsbyggnad")]
    #[cfg_attr(feature = "serde", serde(rename = "Kroppsbyggnad"))]
    Kroppsbyggnad,
    #[strum(serialize = "Livskraft")]
    #[cfg_attr(feature = "serde", serde(rename = "Livskraft"))]
    Livskraft,
    #[strum(serialize = "Reaktion")]
    #[cfg_attr(feature = "serde", serde(rename = "Reaktion"))]
    Reaktion,
    #[strum(serialize = "Självkontroll")]
    #[cfg_attr(feature = "serde", serde(rename = "Självkontroll"))]
    Sjalvkontroll,
    #[strum(serialize = "Vaksamhet")]
    #[cfg_attr(feature = "serde", serde(rename = "Vaksamhet"))]
    Vaksamhet,
    /// Never rolled as dice; drives the Wisdom table instead.
    #[strum(serialize = "Visdom")]
    #[cfg_attr(feature = "serde", serde(rename = "Visdom"))]
    Visdom,
}

impl Attribute {
    /// All attributes in sheet order.
    pub const ALL: [Attribute; 8] = [
        Attribute::Forflyttning,
        Attribute::Intryck,
        Attribute::Kroppsbyggnad,
        Attribute::Livskraft,
        Attribute::Reaktion,
        Attribute::Sjalvkontroll,
        Attribute::Vaksamhet,
        Attribute::Visdom,
    ];
}

/// How the attribute point pool is handed out.
///
/// Chunk models hand out a fixed multiset of point values, one per attribute.
/// `FreePoints` lets the player type any nonnegative amount per attribute.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionModel {
    #[strum(serialize = "Balanserad")]
    #[cfg_attr(feature = "serde", serde(rename = "Balanserad"))]
    Balanced,
    #[strum(serialize = "Fokuserad")]
    #[cfg_attr(feature = "serde", serde(rename = "Fokuserad"))]
    Focused,
    #[strum(serialize = "Fria poäng")]
    #[cfg_attr(feature = "serde", serde(rename = "Fria poäng"))]
    FreePoints,
}

const BALANCED_CHUNKS: [i32; 8] = [10, 6, 6, 6, 4, 4, 2, 2];
const FOCUSED_CHUNKS: [i32; 8] = [10, 10, 8, 8, 4, 0, 0, 0];

impl DistributionModel {
    /// Ordered chunk values; empty for free points.
    pub const fn chunks(self) -> &'static [i32] {
        match self {
            DistributionModel::Balanced => &BALANCED_CHUNKS,
            DistributionModel::Focused => &FOCUSED_CHUNKS,
            DistributionModel::FreePoints => &[],
        }
    }

    pub const fn uses_chunks(self) -> bool {
        !matches!(self, DistributionModel::FreePoints)
    }

    /// Value of the chunk at `index`, if the model has one there.
    pub fn chunk(self, index: usize) -> Option<i32> {
        self.chunks().get(index).copied()
    }
}

/// First attribute value covered by the dice table.
pub const ATTRIBUTE_DICE_MIN: i32 = 4;
/// Last attribute value covered by the dice table.
pub const ATTRIBUTE_DICE_MAX: i32 = 24;

/// Attribute value → dice, indexed from [`ATTRIBUTE_DICE_MIN`].
///
/// Every fourth step adds a die; within a group of four the bonus runs +0..+3.
pub const ATTRIBUTE_TO_DICE: [&str; 21] = [
    "1T6", "1T6+1", "1T6+2", "1T6+3", // 4-7
    "2T6", "2T6+1", "2T6+2", "2T6+3", // 8-11
    "3T6", "3T6+1", "3T6+2", "3T6+3", // 12-15
    "4T6", "4T6+1", "4T6+2", "4T6+3", // 16-19
    "5T6", "5T6+1", "5T6+2", "5T6+3", // 20-23
    "6T6", // 24
];
