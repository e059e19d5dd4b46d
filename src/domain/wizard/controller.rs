//! Wizard controller - step navigation gated by completion predicates.
//!
//! The controller owns the step pointer and decides when the user may
//! leave a step. Submissions validate a form's input against its schema
//! and only then hand it to the document's typed operations.

use thiserror::Error;

use crate::domain::cv::{CvDocument, PersonalInfoPatch, RecordItem, ScalarCollection};
use crate::domain::foundation::DomainError;
use crate::domain::validation::{FieldErrors, Validate};

use super::{LanguagesForm, SkillsForm, WizardProgress, WizardState, WizardStep};

/// Result of trying to move forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The pointer moved to this step.
    Moved(WizardStep),
    /// Advanced past the last step; the preview signal is raised.
    PreviewRequested,
    /// The current step is incomplete; the pointer did not move.
    Blocked(FieldErrors),
}

impl AdvanceOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, AdvanceOutcome::Blocked(_))
    }
}

/// Failure of a step submission that touches an existing record.
#[derive(Debug, Clone, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Invalid(#[from] FieldErrors),

    #[error(transparent)]
    Store(#[from] DomainError),
}

/// Drives the wizard over a document it does not own.
#[derive(Debug, Clone, Default)]
pub struct WizardController {
    state: WizardState,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> WizardStep {
        self.state.current()
    }

    pub fn progress(&self) -> WizardProgress {
        WizardProgress::for_step(self.state.current())
    }

    /// Whether `step` may be left, given the document as it stands.
    ///
    /// Only personal info gates progress; every list step may be left empty.
    pub fn step_completion(step: WizardStep, document: &CvDocument) -> Result<(), FieldErrors> {
        match step {
            WizardStep::PersonalInfo => document.personal_info().validate(),
            WizardStep::Education
            | WizardStep::Experience
            | WizardStep::Skills
            | WizardStep::Languages
            | WizardStep::Certifications => Ok(()),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    /// Moves to the next step if the current one is complete. From the last
    /// step this raises the preview signal instead of moving.
    pub fn advance(&mut self, document: &CvDocument) -> AdvanceOutcome {
        if let Err(errors) = Self::step_completion(self.state.current(), document) {
            return AdvanceOutcome::Blocked(errors);
        }
        if self.state.step_forward() {
            AdvanceOutcome::Moved(self.state.current())
        } else {
            self.state.request_preview();
            AdvanceOutcome::PreviewRequested
        }
    }

    /// Moves one step back without validating. A no-op on the first step.
    pub fn retreat(&mut self) -> WizardStep {
        self.state.step_back();
        self.state.current()
    }

    /// Raises the preview signal from any step.
    pub fn jump_to_preview(&mut self) {
        self.state.request_preview();
    }

    /// Consumes the preview signal.
    pub fn take_preview_request(&mut self) -> bool {
        self.state.take_preview_request()
    }

    /// Jumps directly to a step the user already reached. Returns false and
    /// stays put for steps further ahead.
    pub fn go_to(&mut self, step: WizardStep) -> bool {
        self.state.jump_to(step)
    }

    /// Back to the first step with no history, as on a fresh session.
    pub fn reset(&mut self) {
        self.state = WizardState::new();
    }

    // ───────────────────────────────────────────────────────────────
    // Submissions
    // ───────────────────────────────────────────────────────────────

    /// Validates the personal info that would result from merging `patch`,
    /// then merges it and advances.
    ///
    /// # Errors
    ///
    /// The per-field failures of the merged candidate. The document is not
    /// touched and the step does not change.
    pub fn submit_personal_info(
        &mut self,
        document: &mut CvDocument,
        patch: PersonalInfoPatch,
    ) -> Result<AdvanceOutcome, FieldErrors> {
        document.personal_info().merged(&patch).validate()?;
        document.set_personal_info(patch);
        Ok(self.advance(document))
    }

    /// Validates a record and appends it. The step does not change.
    ///
    /// Returns the new length of the record's collection.
    pub fn submit_record(
        &mut self,
        document: &mut CvDocument,
        item: RecordItem,
    ) -> Result<usize, FieldErrors> {
        item.validate()?;
        Ok(document.append_item(item))
    }

    /// Validates a record and overwrites the one at `index`.
    pub fn submit_record_edit(
        &mut self,
        document: &mut CvDocument,
        index: usize,
        item: RecordItem,
    ) -> Result<(), SubmissionError> {
        item.validate()?;
        document.replace_item(index, item)?;
        Ok(())
    }

    /// Commits the skills list and advances.
    pub fn submit_skills(&mut self, document: &mut CvDocument, form: SkillsForm) -> AdvanceOutcome {
        document.set_scalar_collection(ScalarCollection::Skills(form.into_items()));
        self.advance(document)
    }

    /// Commits the languages list and advances.
    pub fn submit_languages(
        &mut self,
        document: &mut CvDocument,
        form: LanguagesForm,
    ) -> AdvanceOutcome {
        document.set_scalar_collection(ScalarCollection::Languages(form.into_items()));
        self.advance(document)
    }
}
