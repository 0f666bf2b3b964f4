//! Unit categories and the compatibility matrix deciding which pool may fund
//! which spending category.

/// Label of a unit pool's category. Group allocations pick one of these;
/// [`UnitCategory::Free`] is the free pool's list.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitCategory {
    #[strum(serialize = "Kunskapsenheter")]
    #[cfg_attr(feature = "serde", serde(rename = "Kunskapsenheter"))]
    Knowledge,
    #[strum(serialize = "Mystikenheter")]
    #[cfg_attr(feature = "serde", serde(rename = "Mystikenheter"))]
    Mystic,
    #[strum(serialize = "Rörelseenheter")]
    #[cfg_attr(feature = "serde", serde(rename = "Rörelseenheter"))]
    Movement,
    #[strum(serialize = "Sociala enheter")]
    #[cfg_attr(feature = "serde", serde(rename = "Sociala enheter"))]
    Social,
    #[strum(serialize = "Stridsenheter")]
    #[cfg_attr(feature = "serde", serde(rename = "Stridsenheter"))]
    Combat,
    #[strum(serialize = "Vildmarksenheter")]
    #[cfg_attr(feature = "serde", serde(rename = "Vildmarksenheter"))]
    Wilderness,
    #[strum(serialize = "Valfria enheter")]
    #[cfg_attr(feature = "serde", serde(rename = "Valfria enheter"))]
    Free,
}

/// What a unit is spent on. Every spending target carries exactly one.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
pub enum SpendingCategory {
    #[strum(serialize = "Kunskapsfärdigheter")]
    KnowledgeSkills,
    #[strum(serialize = "Mystikfärdigheter")]
    MysticSkills,
    #[strum(serialize = "Rörelsefärdigheter")]
    MovementSkills,
    #[strum(serialize = "Sociala färdigheter")]
    SocialSkills,
    #[strum(serialize = "Stridsfärdigheter")]
    CombatSkills,
    #[strum(serialize = "Vildmarksfärdigheter")]
    WildernessSkills,
    /// Dynamic skills without a kind code. No pool funds these.
    #[strum(serialize = "Övriga färdigheter")]
    OtherSkills,
    #[strum(serialize = "Expertiser")]
    Expertises,
    #[strum(serialize = "Hantverk")]
    Crafts,
    #[strum(serialize = "Kännetecken")]
    Traits,
    /// Never fundable from any unit pool, not even free units.
    #[strum(serialize = "Förmågor")]
    Abilities,
    #[strum(serialize = "Avtrubbning_Utsatthet")]
    DesensitizationExposure,
    #[strum(serialize = "Avtrubbning_Våld")]
    DesensitizationViolence,
    #[strum(serialize = "Avtrubbning_Övernaturligt")]
    DesensitizationSupernatural,
    #[strum(serialize = "Språk")]
    Languages,
    #[strum(serialize = "Mysterier")]
    Mysteries,
}

use SpendingCategory as S;

const KNOWLEDGE_LIST: [SpendingCategory; 3] = [S::KnowledgeSkills, S::Expertises, S::Languages];
const MYSTIC_LIST: [SpendingCategory; 3] = [
    S::MysticSkills,
    S::DesensitizationSupernatural,
    S::Mysteries,
];
const MOVEMENT_LIST: [SpendingCategory; 2] = [S::MovementSkills, S::Crafts];
const SOCIAL_LIST: [SpendingCategory; 3] =
    [S::SocialSkills, S::Traits, S::DesensitizationExposure];
const COMBAT_LIST: [SpendingCategory; 2] = [S::CombatSkills, S::DesensitizationViolence];
const WILDERNESS_LIST: [SpendingCategory; 3] = [
    S::WildernessSkills,
    S::Crafts,
    S::DesensitizationExposure,
];
const FREE_LIST: [SpendingCategory; 14] = [
    S::KnowledgeSkills,
    S::MysticSkills,
    S::MovementSkills,
    S::SocialSkills,
    S::CombatSkills,
    S::WildernessSkills,
    S::Expertises,
    S::Crafts,
    S::Traits,
    S::DesensitizationExposure,
    S::DesensitizationViolence,
    S::DesensitizationSupernatural,
    S::Languages,
    S::Mysteries,
];

/// Spending list of the Wisdom expertise-bonus pool.
pub const EXPERTISE_ONLY: [SpendingCategory; 1] = [S::Expertises];

impl UnitCategory {
    /// Categories a pool of this kind may fund.
    pub const fn spending_list(self) -> &'static [SpendingCategory] {
        match self {
            UnitCategory::Knowledge => &KNOWLEDGE_LIST,
            UnitCategory::Mystic => &MYSTIC_LIST,
            UnitCategory::Movement => &MOVEMENT_LIST,
            UnitCategory::Social => &SOCIAL_LIST,
            UnitCategory::Combat => &COMBAT_LIST,
            UnitCategory::Wilderness => &WILDERNESS_LIST,
            UnitCategory::Free => &FREE_LIST,
        }
    }

    pub fn can_fund(self, category: SpendingCategory) -> bool {
        self.spending_list().contains(&category)
    }
}

/// The three desensitization tracks.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DesensitizationCategory {
    #[strum(serialize = "Utsatthet")]
    #[cfg_attr(feature = "serde", serde(rename = "Utsatthet"))]
    Exposure,
    #[strum(serialize = "Våld")]
    #[cfg_attr(feature = "serde", serde(rename = "Våld"))]
    Violence,
    #[strum(serialize = "Övernaturligt")]
    #[cfg_attr(feature = "serde", serde(rename = "Övernaturligt"))]
    Supernatural,
}

impl DesensitizationCategory {
    pub const ALL: [DesensitizationCategory; 3] = [
        DesensitizationCategory::Exposure,
        DesensitizationCategory::Violence,
        DesensitizationCategory::Supernatural,
    ];

    pub const fn spending_category(self) -> SpendingCategory {
        match self {
            DesensitizationCategory::Exposure => S::DesensitizationExposure,
            DesensitizationCategory::Violence => S::DesensitizationViolence,
            DesensitizationCategory::Supernatural => S::DesensitizationSupernatural,
        }
    }

    /// Unit categories that can buy this track.
    pub const fn buyable_with(self) -> &'static [UnitCategory] {
        match self {
            DesensitizationCategory::Exposure => &[
                UnitCategory::Social,
                UnitCategory::Wilderness,
                UnitCategory::Free,
            ],
            DesensitizationCategory::Violence => &[UnitCategory::Combat, UnitCategory::Free],
            DesensitizationCategory::Supernatural => &[UnitCategory::Mystic, UnitCategory::Free],
        }
    }
}

/// Desensitization values at which a new step is reached.
pub const DESENSITIZATION_THRESHOLDS: [i32; 5] = [5, 10, 15, 20, 25];

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn free_units_fund_everything_but_abilities_and_other_skills() {
        for category in SpendingCategory::iter() {
            let expected = !matches!(category, S::Abilities | S::OtherSkills);
            assert_eq!(UnitCategory::Free.can_fund(category), expected, "{category}");
        }
    }

    #[test]
    fn buyable_with_agrees_with_spending_lists() {
        for track in DesensitizationCategory::ALL {
            for unit in UnitCategory::iter() {
                assert_eq!(
                    track.buyable_with().contains(&unit),
                    unit.can_fund(track.spending_category()),
                    "{track} / {unit}"
                );
            }
        }
    }
}
