//! Unit pool allocations and the non-skill spending targets.

use crate::tables::{DesensitizationCategory, UnitCategory};

/// Units that may only be spent on one named skill.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecificUnitAllocation {
    pub skill: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: i32,
}

impl SpecificUnitAllocation {
    pub fn new(skill: impl Into<String>, units: i32) -> Self {
        Self {
            skill: skill.into(),
            units,
        }
    }
}

/// Units spendable on anything in the category's spending list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupUnitAllocation {
    pub group: UnitCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: i32,
}

impl GroupUnitAllocation {
    pub const fn new(group: UnitCategory, units: i32) -> Self {
        Self { group, units }
    }
}

/// Points bought on each desensitization track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Desensitization {
    #[cfg_attr(feature = "serde", serde(rename = "Utsatthet"))]
    pub exposure: i32,
    #[cfg_attr(feature = "serde", serde(rename = "Våld"))]
    pub violence: i32,
    #[cfg_attr(feature = "serde", serde(rename = "Övernaturligt"))]
    pub supernatural: i32,
}

impl Desensitization {
    pub fn get(&self, category: DesensitizationCategory) -> i32 {
        match category {
            DesensitizationCategory::Exposure => self.exposure,
            DesensitizationCategory::Violence => self.violence,
            DesensitizationCategory::Supernatural => self.supernatural,
        }
    }

    pub fn set(&mut self, category: DesensitizationCategory, value: i32) {
        let slot = match category {
            DesensitizationCategory::Exposure => &mut self.exposure,
            DesensitizationCategory::Violence => &mut self.violence,
            DesensitizationCategory::Supernatural => &mut self.supernatural,
        };
        *slot = value;
    }

    pub fn total(&self) -> i32 {
        self.exposure.max(0) + self.violence.max(0) + self.supernatural.max(0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LanguageKind {
    #[cfg_attr(feature = "serde", serde(rename = "tal"))]
    Spoken,
    #[cfg_attr(feature = "serde", serde(rename = "skrift"))]
    Written,
}

/// One purchased language; each costs one unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanguageEntry {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: LanguageKind,
}

impl LanguageEntry {
    pub fn new(name: impl Into<String>, kind: LanguageKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// One purchased mystery; each costs one unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MysteryEntry {
    pub name: String,
}

impl MysteryEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
