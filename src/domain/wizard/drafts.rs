//! In-form drafts for the list steps.
//!
//! Skills and languages are edited as a local list plus one pending input.
//! Nothing here touches the document; the controller commits the list when
//! the step is submitted.

use crate::domain::cv::{LanguageEntry, Proficiency};
use crate::domain::foundation::ValidationError;
use crate::domain::validation::{FieldErrors, Validate};

/// Draft of the skills list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsForm {
    skills: Vec<String>,
    pending: String,
}

impl SkillsForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing list, e.g. the document's current skills.
    pub fn from_skills(skills: &[String]) -> Self {
        Self {
            skills: skills.to_vec(),
            pending: String::new(),
        }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn set_pending(&mut self, value: impl Into<String>) {
        self.pending = value.into();
    }

    /// Commits the pending input as a skill.
    ///
    /// The input is trimmed; blank input and exact duplicates are rejected
    /// and left in place so the user can correct them.
    pub fn add_pending(&mut self) -> Result<(), ValidationError> {
        let skill = self.pending.trim();
        if skill.is_empty() {
            return Err(ValidationError::empty_field("skill", "Skill is required"));
        }
        if self.skills.iter().any(|s| s == skill) {
            return Err(ValidationError::invalid_format(
                "skill",
                "Skill has already been added",
            ));
        }
        self.skills.push(skill.to_string());
        self.pending.clear();
        Ok(())
    }

    /// Removes the skill at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.skills.len()).then(|| self.skills.remove(index))
    }

    /// The committed list; any pending input is dropped.
    pub fn into_items(self) -> Vec<String> {
        self.skills
    }
}

/// Draft of the languages list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguagesForm {
    languages: Vec<LanguageEntry>,
    pending_language: String,
    pending_proficiency: Option<Proficiency>,
}

impl LanguagesForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_languages(languages: &[LanguageEntry]) -> Self {
        Self {
            languages: languages.to_vec(),
            ..Self::default()
        }
    }

    pub fn languages(&self) -> &[LanguageEntry] {
        &self.languages
    }

    pub fn set_pending_language(&mut self, value: impl Into<String>) {
        self.pending_language = value.into();
    }

    pub fn set_pending_proficiency(&mut self, proficiency: Proficiency) {
        self.pending_proficiency = Some(proficiency);
    }

    /// Commits the pending language once both the name and the proficiency
    /// are filled in.
    pub fn add_pending(&mut self) -> Result<(), FieldErrors> {
        let language = self.pending_language.trim();
        let mut errors = match LanguageEntry::new(language, Proficiency::Basic).validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => errors,
        };
        let Some(proficiency) = self.pending_proficiency else {
            errors.push(ValidationError::empty_field(
                "proficiency",
                "Proficiency level is required",
            ));
            return Err(errors);
        };
        errors.into_result()?;

        self.languages.push(LanguageEntry::new(language, proficiency));
        self.pending_language.clear();
        self.pending_proficiency = None;
        Ok(())
    }

    /// Removes the entry at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<LanguageEntry> {
        (index < self.languages.len()).then(|| self.languages.remove(index))
    }

    /// The committed list; an incomplete pending entry is dropped.
    pub fn into_items(self) -> Vec<LanguageEntry> {
        self.languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_trimmed_skill_and_clears_input() {
        let mut form = SkillsForm::new();
        form.set_pending("  Rust ");
        form.add_pending().unwrap();
        assert_eq!(form.skills(), &["Rust".to_string()]);
        assert_eq!(form.pending(), "");
    }

    #[test]
    fn rejects_blank_and_duplicate_skills() {
        let mut form = SkillsForm::from_skills(&["Rust".to_string()]);
        form.set_pending("   ");
        assert!(form.add_pending().is_err());
        form.set_pending("Rust");
        let err = form.add_pending().unwrap_err();
        assert_eq!(err.field(), "skill");
        assert_eq!(form.skills().len(), 1);
        assert_eq!(form.pending(), "Rust");
    }

    #[test]
    fn remove_ignores_out_of_range() {
        let mut form = SkillsForm::from_skills(&["Go".to_string(), "Rust".to_string()]);
        assert_eq!(form.remove(5), None);
        assert_eq!(form.remove(0), Some("Go".to_string()));
        assert_eq!(form.into_items(), vec!["Rust".to_string()]);
    }

    #[test]
    fn into_items_drops_pending_skill() {
        let mut form = SkillsForm::new();
        form.set_pending("Half-typed");
        assert!(form.into_items().is_empty());
    }

    #[test]
    fn language_needs_name_and_proficiency() {
        let mut form = LanguagesForm::new();
        form.set_pending_language("French");
        let errors = form.add_pending().unwrap_err();
        assert_eq!(errors.fields(), vec!["proficiency"]);

        form.set_pending_proficiency(Proficiency::Advanced);
        form.add_pending().unwrap();
        assert_eq!(
            form.languages(),
            &[LanguageEntry::new("French", Proficiency::Advanced)]
        );
    }

    #[test]
    fn blank_language_reports_both_fields() {
        let mut form = LanguagesForm::new();
        let errors = form.add_pending().unwrap_err();
        assert_eq!(errors.fields(), vec!["language", "proficiency"]);
    }

    #[test]
    fn incomplete_language_is_dropped_on_commit() {
        let mut form = LanguagesForm::from_languages(&[LanguageEntry::new(
            "English",
            Proficiency::NativeFluent,
        )]);
        form.set_pending_language("German");
        assert_eq!(form.into_items().len(), 1);
    }
}
