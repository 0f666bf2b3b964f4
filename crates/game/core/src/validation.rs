//! Advisory rule checks.
//!
//! Validation never blocks an edit; it reports what a finished character
//! would still violate so the UI can show it next to the field.

use crate::config::ChargenConfig;
use crate::state::CharacterState;
use crate::stats::{
    attribute_points_used, final_attribute_value, remaining_free_points, total_attribute_points,
    total_units_available, total_units_spent, wisdom_entry,
};
use crate::tables::{
    Attribute, DistributionModel, MAX_SKILL_VALUE, SkillStatus, TOTAL_KNOWLEDGE_SKILLS,
    is_fixed_skill,
};
use crate::units::is_feasible;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    Error,
    Warning,
}

/// One message tied to a form field (an attribute or skill name, or a section
/// key such as `"chunks"` or `"units"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationIssue {
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Validates against the default rules.
pub fn validate(state: &CharacterState) -> Vec<ValidationIssue> {
    validate_with(state, &ChargenConfig::default())
}

pub fn validate_with(state: &CharacterState, config: &ChargenConfig) -> Vec<ValidationIssue> {
    let mut issues = validate_attributes(state, config);
    issues.extend(validate_skills(state));
    issues.extend(validate_units(state));
    issues
}

pub fn validate_attributes(state: &CharacterState, config: &ChargenConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let Some(model) = state.distribution_model else {
        issues.push(ValidationIssue::error(
            "distributionModel",
            "Välj en fördelningsmodell (Balanserad eller Fokuserad)",
        ));
        return issues;
    };

    if model.uses_chunks() {
        let unassigned = state
            .attributes
            .iter()
            .filter(|(_, attribute)| !attribute.is_assigned())
            .count();
        if unassigned > 0 {
            issues.push(ValidationIssue::error(
                "chunks",
                format!("{unassigned} klumpsumma(or) ej tilldelade"),
            ));
        }
    }

    if model == DistributionModel::FreePoints {
        issues.extend(validate_free_points(state, config));
    }

    for (attribute, attribute_state) in state.attributes.iter() {
        let final_value = final_attribute_value(attribute_state);
        if attribute_state.is_assigned() && final_value < config.min_final_attribute_value {
            issues.push(ValidationIssue::error(
                attribute.as_ref(),
                format!(
                    "{attribute} slutvärde ({final_value}) är under minimum ({})",
                    config.min_final_attribute_value
                ),
            ));
        }
    }

    issues
}

fn validate_free_points(state: &CharacterState, config: &ChargenConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let max = config.max_free_points_per_attribute;

    for attribute in Attribute::ALL {
        let points = state.attributes.get(attribute).assigned_chunk.unwrap_or(0);
        if points > max {
            issues.push(ValidationIssue::error(
                attribute.as_ref(),
                format!("{attribute} har {points} poäng (max {max})"),
            ));
        }
    }

    let total = total_attribute_points(state, config);
    let remaining = remaining_free_points(state, config);
    if remaining < 0 {
        issues.push(ValidationIssue::error(
            "attributePoints",
            format!(
                "{} av {total} attributpoäng använda ({} för många)",
                attribute_points_used(state),
                remaining.unsigned_abs()
            ),
        ));
    } else if remaining > 0 {
        issues.push(ValidationIssue::warning(
            "attributePoints",
            format!("{remaining} attributpoäng kvar att fördela"),
        ));
    }

    issues
}

pub fn validate_skills(state: &CharacterState) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for skill in state.all_skills() {
        let value = skill.value();
        if value > MAX_SKILL_VALUE {
            issues.push(ValidationIssue::error(
                skill.name.as_str(),
                format!("{} värde ({value}) överstiger max ({MAX_SKILL_VALUE})", skill.name),
            ));
        }
        if skill.status == Some(SkillStatus::Incompetent) && value > 1 {
            issues.push(ValidationIssue::error(
                skill.name.as_str(),
                format!(
                    "{} är Inkompetent och kan inte ha värde över 1 (har {value})",
                    skill.name
                ),
            ));
        }
        if skill.status == Some(SkillStatus::Blocked) && skill.spent_units > 0 {
            issues.push(ValidationIssue::error(
                skill.name.as_str(),
                format!("{} är Blockerad — inga enheter kan spenderas", skill.name),
            ));
        }
    }

    for skill in &state.dynamic_skills {
        if is_fixed_skill(&skill.name) {
            issues.push(ValidationIssue::warning(
                skill.name.as_str(),
                format!("{} finns redan som fast färdighet", skill.name),
            ));
        }
    }

    let wisdom = final_attribute_value(&state.attributes.visdom);
    let entry = wisdom_entry(wisdom);

    let required = entry.incompetent_count as usize;
    let marked = state.incompetent_skills.len();
    if required > 0 && marked != required {
        issues.push(ValidationIssue::error(
            "incompetentSkills",
            format!(
                "Visdom {wisdom} kräver {required} Inkompetenta kunskapsfärdigheter ({marked} markerade)"
            ),
        ));
    }

    let required = (entry.base_value_count as usize).min(TOTAL_KNOWLEDGE_SKILLS);
    let marked = state.base_value_skills.len();
    if required > 0 && required < TOTAL_KNOWLEDGE_SKILLS && marked != required {
        issues.push(ValidationIssue::error(
            "baseValueSkills",
            format!(
                "Visdom {wisdom} ger {required} kunskapsfärdigheter Grundvärde 1 ({marked} markerade)"
            ),
        ));
    }

    issues
}

pub fn validate_units(state: &CharacterState) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for alloc in &state.specific_units {
        if !state.has_skill(&alloc.skill) {
            issues.push(ValidationIssue::warning(
                "specificUnits",
                format!("Specifika enheter för okänd färdighet {}", alloc.skill),
            ));
        }
    }

    let available = total_units_available(state);
    let spent = total_units_spent(state);
    if spent > available {
        issues.push(ValidationIssue::error(
            "units",
            format!("{} enheter för mycket spenderade", spent - available),
        ));
    } else if !is_feasible(state) {
        issues.push(ValidationIssue::error(
            "units",
            "Spenderade enheter saknar kompatibla enheter",
        ));
    }
    if available > spent {
        issues.push(ValidationIssue::warning(
            "units",
            format!("{} enheter kvar att spendera", available - spent),
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::CharacterAction;
    use crate::engine::apply;
    use crate::state::{GroupUnitAllocation, Skill, SpecificUnitAllocation};
    use crate::tables::{DynamicSkillKind, UnitCategory};

    fn messages(issues: &[ValidationIssue]) -> Vec<String> {
        issues.iter().map(|issue| issue.message.clone()).collect()
    }

    fn spend(state: &mut CharacterState, name: &str, units: i32) {
        for skill in state.all_skills_mut().filter(|skill| skill.name == name) {
            skill.spent_units = units;
        }
    }

    #[test]
    fn missing_model_short_circuits_attributes() {
        let issues = validate_attributes(&CharacterState::new(), &ChargenConfig::default());
        assert_eq!(
            messages(&issues),
            vec!["Välj en fördelningsmodell (Balanserad eller Fokuserad)"]
        );
    }

    #[test]
    fn unassigned_chunks_and_low_finals() {
        let state = apply(
            &CharacterState::new(),
            &CharacterAction::SetDistributionModel(Some(DistributionModel::Focused)),
        );
        let mut state = apply(&state, &CharacterAction::assign_chunk(Attribute::Intryck, 7));
        state.attributes.intryck.base = 2;

        let issues = validate_attributes(&state, &ChargenConfig::default());
        assert_eq!(
            messages(&issues),
            vec![
                "7 klumpsumma(or) ej tilldelade",
                "Intryck slutvärde (2) är under minimum (4)",
            ]
        );
    }

    #[test]
    fn free_points_limits() {
        let mut state = CharacterState::new();
        state.distribution_model = Some(DistributionModel::FreePoints);
        for attribute in Attribute::ALL {
            state.attributes.get_mut(attribute).base = 6;
            state.attributes.get_mut(attribute).assigned_chunk = Some(5);
        }
        state.attributes.visdom.assigned_chunk = Some(12);

        let issues = validate_attributes(&state, &ChargenConfig::default());
        assert_eq!(
            messages(&issues),
            vec![
                "Visdom har 12 poäng (max 10)",
                "47 av 40 attributpoäng använda (7 för många)",
            ]
        );
        assert!(issues.iter().all(ValidationIssue::is_error));

        state.attributes.visdom.assigned_chunk = Some(2);
        let issues = validate_attributes(&state, &ChargenConfig::default());
        assert_eq!(messages(&issues), vec!["3 attributpoäng kvar att fördela"]);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn skill_status_violations() {
        let mut state = CharacterState::new();
        state.attributes.visdom.base = 16;
        state
            .all_skills_mut()
            .filter(|skill| skill.name == "Geografi")
            .for_each(|skill| skill.status = Some(SkillStatus::Incompetent));
        spend(&mut state, "Geografi", 2);
        state
            .all_skills_mut()
            .filter(|skill| skill.name == "Klättra")
            .for_each(|skill| skill.status = Some(SkillStatus::Blocked));
        spend(&mut state, "Klättra", 1);
        state
            .dynamic_skills
            .push(Skill::dynamic("Dansa", DynamicSkillKind::Trait).with_spent_units(9));

        let issues = validate_skills(&state);
        assert_eq!(
            messages(&issues),
            vec![
                "Geografi är Inkompetent och kan inte ha värde över 1 (har 2)",
                "Klättra är Blockerad — inga enheter kan spenderas",
                "Dansa värde (9) överstiger max (8)",
                "Dansa finns redan som fast färdighet",
                "Visdom 16 ger 10 kunskapsfärdigheter Grundvärde 1 (0 markerade)",
            ]
        );
        assert_eq!(issues[3].severity, Severity::Warning);
    }

    #[test]
    fn low_visdom_requires_incompetent_marks() {
        let mut state = CharacterState::new();
        state.attributes.visdom.base = 7;
        state.incompetent_skills = vec!["Historia".into(), "Teologi".into()];

        let issues = validate_skills(&state);
        assert_eq!(
            messages(&issues),
            vec!["Visdom 7 kräver 6 Inkompetenta kunskapsfärdigheter (2 markerade)"]
        );
    }

    #[test]
    fn unit_budget_messages() {
        let mut state = CharacterState::new();
        state.free_units = 5;
        state
            .specific_units
            .push(SpecificUnitAllocation::new("Okänd", 1));
        spend(&mut state, "Charm", 2);

        let issues = validate_units(&state);
        assert_eq!(
            messages(&issues),
            vec![
                "Specifika enheter för okänd färdighet Okänd",
                "4 enheter kvar att spendera",
            ]
        );
        assert_eq!(issues[1].severity, Severity::Warning);

        state.free_units = 0;
        state.specific_units.clear();
        let issues = validate_units(&state);
        assert_eq!(messages(&issues), vec!["2 enheter för mycket spenderade"]);
    }

    #[test]
    fn extreme_values_are_reported_without_overflow() {
        let mut state = CharacterState::new();
        state.distribution_model = Some(DistributionModel::FreePoints);
        state.attributes.intryck.assigned_chunk = Some(i32::MAX);
        state.attributes.reaktion.assigned_chunk = Some(i32::MAX);
        state.free_units = i32::MAX;
        state.group_units = vec![
            GroupUnitAllocation::new(UnitCategory::Social, i32::MAX),
            GroupUnitAllocation::new(UnitCategory::Combat, i32::MAX),
        ];

        let issues = validate(&state);
        assert!(
            messages(&issues).contains(&"6442450941 enheter kvar att spendera".to_string())
        );
        assert!(
            issues
                .iter()
                .any(|issue| issue.field == "attributePoints" && issue.is_error())
        );
    }

    #[test]
    fn misrouted_allocation_is_reported() {
        let mut state = CharacterState::new();
        state
            .specific_units
            .push(SpecificUnitAllocation::new("Simma", 2));
        spend(&mut state, "Dansa", 2);

        let issues = validate_units(&state);
        assert_eq!(
            messages(&issues),
            vec!["Spenderade enheter saknar kompatibla enheter"]
        );
    }

    #[test]
    fn clean_character_has_no_issues() {
        let state = apply(
            &CharacterState::new(),
            &CharacterAction::SetDistributionModel(Some(DistributionModel::Balanced)),
        );
        let mut state = [
            (Attribute::Forflyttning, 0),
            (Attribute::Intryck, 1),
            (Attribute::Kroppsbyggnad, 2),
            (Attribute::Livskraft, 3),
            (Attribute::Reaktion, 4),
            (Attribute::Sjalvkontroll, 5),
            (Attribute::Vaksamhet, 6),
            (Attribute::Visdom, 7),
        ]
        .into_iter()
        .fold(state, |state, (attribute, chunk)| {
            apply(&state, &CharacterAction::assign_chunk(attribute, chunk))
        });
        for attribute in Attribute::ALL {
            state.attributes.get_mut(attribute).base = 10;
        }
        state = apply(&state, &CharacterAction::SetAttributeBase {
            attribute: Attribute::Visdom,
            value: 10,
        });
        state = apply(&state, &CharacterAction::SetFreeUnits(2));
        state = apply(&state, &CharacterAction::set_skill_units("Charm", 2));

        // Visdom 12 grants four base-value knowledge skills.
        for name in ["Filosofi", "Historia", "Teologi", "Undervisa"] {
            state = apply(&state, &CharacterAction::ToggleBaseValueSkill {
                skill: name.into(),
            });
        }

        assert_eq!(validate(&state), Vec::new());
    }
}
