use crate::state::{
    Attributes, CharacterState, Desensitization, GroupUnitAllocation, LanguageEntry,
    MysteryEntry, Skill, SpecificUnitAllocation,
};
use crate::tables::{
    Attribute, DesensitizationCategory, DistributionModel, KNOWLEDGE_SKILLS, SkillStatus,
    is_knowledge_skill,
};

/// Wraps mutable access to [`CharacterState`] with structured sub-reducers.
pub struct StateReducer<'a> {
    state: &'a mut CharacterState,
}

impl<'a> StateReducer<'a> {
    pub fn new(state: &'a mut CharacterState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CharacterState {
        self.state
    }

    pub fn replace(&mut self, state: CharacterState) {
        *self.state = state;
    }

    pub fn attributes(&mut self) -> AttributesReducer<'_> {
        AttributesReducer { state: self.state }
    }

    pub fn skills(&mut self) -> SkillsReducer<'_> {
        SkillsReducer {
            skills: &mut self.state.skills,
            dynamic_skills: &mut self.state.dynamic_skills,
        }
    }

    pub fn knowledge(&mut self) -> KnowledgeReducer<'_> {
        KnowledgeReducer {
            skills: &mut self.state.skills,
            incompetent_skills: &mut self.state.incompetent_skills,
            base_value_skills: &mut self.state.base_value_skills,
        }
    }

    pub fn units(&mut self) -> UnitsReducer<'_> {
        UnitsReducer {
            specific_units: &mut self.state.specific_units,
            group_units: &mut self.state.group_units,
            free_units: &mut self.state.free_units,
        }
    }

    pub fn extras(&mut self) -> ExtrasReducer<'_> {
        ExtrasReducer {
            desensitization: &mut self.state.desensitization,
            languages: &mut self.state.languages,
            mysteries: &mut self.state.mysteries,
        }
    }

    pub fn sheet(&mut self) -> SheetReducer<'_> {
        SheetReducer { state: self.state }
    }
}

/// Attribute values, the distribution model and the chunk ledger.
pub struct AttributesReducer<'a> {
    state: &'a mut CharacterState,
}

impl<'a> AttributesReducer<'a> {
    fn attributes(&mut self) -> &mut Attributes {
        &mut self.state.attributes
    }

    pub fn set_model(&mut self, model: Option<DistributionModel>) {
        self.attributes().clear_chunks();
        self.state.chunk_assignments.clear();
        self.state.distribution_model = model;
    }

    pub fn set_base(&mut self, attribute: Attribute, value: i32) {
        self.attributes().get_mut(attribute).base = value;
    }

    pub fn set_modifiers(&mut self, attribute: Attribute, value: i32) {
        self.attributes().get_mut(attribute).modifiers = value;
    }

    /// Returns the attribute displaced from `chunk_index`, if any.
    ///
    /// No-op without a chunk model or when the index is out of range.
    pub fn assign_chunk(&mut self, attribute: Attribute, chunk_index: usize) -> Option<Attribute> {
        if !self.state.uses_chunks() {
            return None;
        }
        let value = self.state.chunks().get(chunk_index).copied()?;

        let displaced = self
            .state
            .chunk_assignments
            .remove(&chunk_index)
            .filter(|&holder| holder != attribute);
        if let Some(holder) = displaced {
            self.attributes().get_mut(holder).assigned_chunk = None;
        }
        if let Some(previous) = self.state.chunk_index_of(attribute) {
            self.state.chunk_assignments.remove(&previous);
        }

        self.state.chunk_assignments.insert(chunk_index, attribute);
        self.attributes().get_mut(attribute).assigned_chunk = Some(value);
        displaced
    }

    /// Frees `chunk_index`; returns the attribute that held it.
    pub fn unassign_chunk(&mut self, chunk_index: usize) -> Option<Attribute> {
        let holder = self.state.chunk_assignments.remove(&chunk_index)?;
        self.attributes().get_mut(holder).assigned_chunk = None;
        Some(holder)
    }

    /// Free-points entry, floored at 0. No-op under any other model, where
    /// points only arrive through the chunk ledger.
    pub fn set_points(&mut self, attribute: Attribute, value: i32) {
        if self.state.distribution_model != Some(DistributionModel::FreePoints) {
            return;
        }
        self.attributes().get_mut(attribute).assigned_chunk = Some(value.max(0));
    }
}

/// Skill rows addressed by name. A name may match a fixed and a dynamic row;
/// edits apply to both.
pub struct SkillsReducer<'a> {
    skills: &'a mut Vec<Skill>,
    dynamic_skills: &'a mut Vec<Skill>,
}

impl<'a> SkillsReducer<'a> {
    fn named<'s>(&'s mut self, name: &'s str) -> impl Iterator<Item = &'s mut Skill> + 's {
        self.skills
            .iter_mut()
            .chain(self.dynamic_skills.iter_mut())
            .filter(move |skill| skill.name == name)
    }

    pub fn set_spent_units(&mut self, name: &str, units: i32) {
        for skill in self.named(name) {
            skill.spent_units = units;
        }
    }

    pub fn set_status(&mut self, name: &str, status: Option<SkillStatus>) {
        for skill in self.named(name) {
            skill.status = status;
        }
    }

    pub fn set_base_value(&mut self, name: &str, value: i32) {
        for skill in self.named(name) {
            skill.base_value = value;
        }
    }

    /// Appends a dynamic skill; blank names are ignored.
    pub fn add_dynamic(&mut self, skill: Skill) -> bool {
        if skill.name.trim().is_empty() {
            return false;
        }
        self.dynamic_skills.push(skill);
        true
    }

    /// Removes every dynamic skill called `name`; returns how many.
    pub fn remove_dynamic(&mut self, name: &str) -> usize {
        let before = self.dynamic_skills.len();
        self.dynamic_skills.retain(|skill| skill.name != name);
        before - self.dynamic_skills.len()
    }
}

/// Knowledge-skill selections driven by Visdom and their mirror on the fixed
/// skill rows.
pub struct KnowledgeReducer<'a> {
    skills: &'a mut Vec<Skill>,
    incompetent_skills: &'a mut Vec<String>,
    base_value_skills: &'a mut Vec<String>,
}

impl<'a> KnowledgeReducer<'a> {
    fn knowledge_rows(&mut self) -> impl Iterator<Item = &mut Skill> {
        self.skills
            .iter_mut()
            .filter(|skill| is_knowledge_skill(&skill.name))
    }

    /// Returns false for names outside the knowledge list.
    pub fn toggle_incompetent(&mut self, name: &str) -> bool {
        if !is_knowledge_skill(name) {
            return false;
        }
        let selected = toggle(self.incompetent_skills, name);
        let status = selected.then_some(SkillStatus::Incompetent);
        for skill in self.skills.iter_mut().filter(|skill| skill.name == name) {
            skill.status = status;
        }
        true
    }

    /// Returns false for names outside the knowledge list.
    pub fn toggle_base_value(&mut self, name: &str) -> bool {
        if !is_knowledge_skill(name) {
            return false;
        }
        let selected = toggle(self.base_value_skills, name);
        let base_value = i32::from(selected);
        for skill in self.skills.iter_mut().filter(|skill| skill.name == name) {
            skill.base_value = base_value;
        }
        true
    }

    pub fn incompetent_selected(&self) -> usize {
        self.incompetent_skills.len()
    }

    pub fn base_value_selected(&self) -> usize {
        self.base_value_skills.len()
    }

    pub fn force_all_incompetent(&mut self) {
        *self.incompetent_skills = KNOWLEDGE_SKILLS.iter().map(|name| name.to_string()).collect();
        for skill in self.knowledge_rows() {
            skill.status = Some(SkillStatus::Incompetent);
        }
    }

    /// Clears the selection and the Incompetent marks it had forced.
    pub fn release_all_incompetent(&mut self) {
        self.incompetent_skills.clear();
        for skill in self.knowledge_rows() {
            if skill.status == Some(SkillStatus::Incompetent) {
                skill.status = None;
            }
        }
    }

    pub fn force_all_base_value(&mut self) {
        *self.base_value_skills = KNOWLEDGE_SKILLS.iter().map(|name| name.to_string()).collect();
        for skill in self.knowledge_rows() {
            skill.base_value = 1;
        }
    }

    /// Clears the selection and the base values it had forced.
    pub fn release_all_base_value(&mut self) {
        self.base_value_skills.clear();
        for skill in self.knowledge_rows() {
            if skill.base_value == 1 {
                skill.base_value = 0;
            }
        }
    }
}

/// Flips `name` in `list`; returns whether it is now selected.
fn toggle(list: &mut Vec<String>, name: &str) -> bool {
    match list.iter().position(|entry| entry == name) {
        Some(index) => {
            list.remove(index);
            false
        }
        None => {
            list.push(name.to_string());
            true
        }
    }
}

/// Unit pool allocations. Negative amounts floor to 0.
pub struct UnitsReducer<'a> {
    specific_units: &'a mut Vec<SpecificUnitAllocation>,
    group_units: &'a mut Vec<GroupUnitAllocation>,
    free_units: &'a mut i32,
}

impl<'a> UnitsReducer<'a> {
    pub fn set_specific(&mut self, allocations: &[SpecificUnitAllocation]) {
        *self.specific_units = allocations
            .iter()
            .map(|alloc| SpecificUnitAllocation::new(alloc.skill.as_str(), alloc.units.max(0)))
            .collect();
    }

    pub fn set_group(&mut self, allocations: &[GroupUnitAllocation]) {
        *self.group_units = allocations
            .iter()
            .map(|alloc| GroupUnitAllocation::new(alloc.group, alloc.units.max(0)))
            .collect();
    }

    pub fn set_free(&mut self, units: i32) {
        *self.free_units = units.max(0);
    }
}

/// Desensitization, languages and mysteries.
pub struct ExtrasReducer<'a> {
    desensitization: &'a mut Desensitization,
    languages: &'a mut Vec<LanguageEntry>,
    mysteries: &'a mut Vec<MysteryEntry>,
}

impl<'a> ExtrasReducer<'a> {
    pub fn set_desensitization(&mut self, category: DesensitizationCategory, value: i32) {
        self.desensitization.set(category, value.max(0));
    }

    pub fn add_language(&mut self, language: LanguageEntry) {
        self.languages.push(language);
    }

    pub fn remove_language(&mut self, index: usize) -> Option<LanguageEntry> {
        (index < self.languages.len()).then(|| self.languages.remove(index))
    }

    pub fn add_mystery(&mut self, mystery: MysteryEntry) {
        self.mysteries.push(mystery);
    }

    pub fn remove_mystery(&mut self, index: usize) -> Option<MysteryEntry> {
        (index < self.mysteries.len()).then(|| self.mysteries.remove(index))
    }
}

/// Sheet-level counters that feed display only.
pub struct SheetReducer<'a> {
    state: &'a mut CharacterState,
}

impl<'a> SheetReducer<'a> {
    pub fn set_extra_attribute_points(&mut self, value: i32) {
        self.state.extra_attribute_points = value;
    }

    pub fn set_grundrustning_mod(&mut self, value: i32) {
        self.state.grundrustning_mod = value;
    }

    pub fn set_grundskada_mod(&mut self, value: i32) {
        self.state.grundskada_mod = value;
    }

    pub fn set_step(&mut self, step: i32) {
        self.state.current_step = step;
    }
}
