//! CvSession - One user's editing session.
//!
//! Owns the document, the wizard, the template selection and the export
//! status. Every wizard path checks for a selected template first; store
//! errors are logged here before they reach the caller.

use serde::Serialize;
use thiserror::Error;

use crate::domain::cv::{
    CommandOutcome, CvCommand, CvDocument, DocumentRevision, PersonalInfoPatch, RecordCollection,
    RecordItem,
};
use crate::domain::export::{ExportArtifact, ExportFormat, ExportStatus};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, StateMachine, TemplateId};
use crate::domain::template::{Template, TemplateCatalog, TemplateSelection};
use crate::domain::validation::FieldErrors;
use crate::domain::wizard::{
    AdvanceOutcome, LanguagesForm, SkillsForm, SubmissionError, WizardController, WizardProgress,
    WizardStep,
};

use super::handlers::{ExportCvCommand, ExportCvHandler, ExportFailure};

/// Error returned by session operations.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// Missing template, bad index, stale revision and the like.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The submitted form failed validation. Nothing was changed.
    #[error(transparent)]
    Invalid(#[from] FieldErrors),

    #[error(transparent)]
    Export(#[from] ExportFailure),
}

impl From<SubmissionError> for SessionError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Invalid(errors) => SessionError::Invalid(errors),
            SubmissionError::Store(err) => SessionError::Domain(err),
        }
    }
}

impl SessionError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SessionError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn domain_error(&self) -> Option<&DomainError> {
        match self {
            SessionError::Domain(err) => Some(err),
            _ => None,
        }
    }
}

/// Read-only view handed to a preview screen.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvPreview<'a> {
    pub document: &'a CvDocument,
    pub template: &'a Template,
    pub revision: DocumentRevision,
}

/// A single-user CV editing session.
#[derive(Debug, Clone)]
pub struct CvSession {
    id: SessionId,
    catalog: TemplateCatalog,
    document: CvDocument,
    wizard: WizardController,
    selection: TemplateSelection,
    export_status: ExportStatus,
    last_artifact: Option<ExportArtifact>,
}

impl Default for CvSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CvSession {
    /// Starts a session over the built-in catalog.
    pub fn new() -> Self {
        Self::with_catalog(TemplateCatalog::seeded().clone())
    }

    pub fn with_catalog(catalog: TemplateCatalog) -> Self {
        let id = SessionId::new();
        tracing::debug!(session = %id, "Session started");
        Self {
            id,
            catalog,
            document: CvDocument::new(),
            wizard: WizardController::new(),
            selection: TemplateSelection::new(),
            export_status: ExportStatus::Idle,
            last_artifact: None,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn document(&self) -> &CvDocument {
        &self.document
    }

    pub fn wizard(&self) -> &WizardController {
        &self.wizard
    }

    pub fn current_step(&self) -> WizardStep {
        self.wizard.current_step()
    }

    pub fn progress(&self) -> WizardProgress {
        self.wizard.progress()
    }

    pub fn templates(&self) -> &[Template] {
        self.catalog.all()
    }

    pub fn selected_template(&self) -> Option<&Template> {
        self.selection.selected()
    }

    pub fn export_status(&self) -> ExportStatus {
        self.export_status
    }

    pub fn last_artifact(&self) -> Option<&ExportArtifact> {
        self.last_artifact.as_ref()
    }

    // ───────────────────────────────────────────────────────────────
    // Template selection
    // ───────────────────────────────────────────────────────────────

    /// Selects a catalog template, replacing any previous choice.
    ///
    /// # Errors
    ///
    /// `TemplateNotFound` for an id that is not in the catalog.
    pub fn select_template(&mut self, id: &TemplateId) -> Result<&Template, DomainError> {
        let template = self.catalog.get(id)?.clone();
        tracing::info!(session = %self.id, template = %template.id, name = %template.name, "Template selected");
        self.selection.select(template);
        self.selection.require()
    }

    pub fn clear_template(&mut self) {
        self.selection.clear();
    }

    fn require_template(&self) -> Result<&Template, DomainError> {
        self.selection.require().map_err(|err| {
            tracing::debug!(session = %self.id, "Wizard used without a template");
            err
        })
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    pub fn advance(&mut self) -> Result<AdvanceOutcome, DomainError> {
        self.require_template()?;
        let outcome = self.wizard.advance(&self.document);
        self.log_advance(&outcome);
        Ok(outcome)
    }

    pub fn retreat(&mut self) -> Result<WizardStep, DomainError> {
        self.require_template()?;
        Ok(self.wizard.retreat())
    }

    /// Jumps back to a step already reached.
    pub fn go_to(&mut self, step: WizardStep) -> Result<bool, DomainError> {
        self.require_template()?;
        Ok(self.wizard.go_to(step))
    }

    pub fn jump_to_preview(&mut self) -> Result<(), DomainError> {
        self.require_template()?;
        self.wizard.jump_to_preview();
        Ok(())
    }

    pub fn take_preview_request(&mut self) -> bool {
        self.wizard.take_preview_request()
    }

    // ───────────────────────────────────────────────────────────────
    // Submissions
    // ───────────────────────────────────────────────────────────────

    pub fn submit_personal_info(
        &mut self,
        patch: PersonalInfoPatch,
    ) -> Result<AdvanceOutcome, SessionError> {
        self.require_template()?;
        let outcome = self
            .wizard
            .submit_personal_info(&mut self.document, patch)
            .map_err(|errors| self.log_rejected("personal_info", errors))?;
        self.log_advance(&outcome);
        Ok(outcome)
    }

    /// Validates and appends a record. Returns the collection's new length.
    pub fn submit_record(&mut self, item: RecordItem) -> Result<usize, SessionError> {
        self.require_template()?;
        let collection = item.collection();
        let len = self
            .wizard
            .submit_record(&mut self.document, item)
            .map_err(|errors| self.log_rejected(collection.as_str(), errors))?;
        tracing::debug!(%collection, len, revision = %self.document.revision(), "Record added");
        Ok(len)
    }

    pub fn submit_record_edit(&mut self, index: usize, item: RecordItem) -> Result<(), SessionError> {
        self.require_template()?;
        let collection = item.collection();
        match self.wizard.submit_record_edit(&mut self.document, index, item) {
            Ok(()) => {
                tracing::debug!(%collection, index, "Record replaced");
                Ok(())
            }
            Err(SubmissionError::Store(err)) => Err(self.log_store_error(err).into()),
            Err(SubmissionError::Invalid(errors)) => {
                Err(self.log_rejected(collection.as_str(), errors).into())
            }
        }
    }

    pub fn submit_skills(&mut self, form: SkillsForm) -> Result<AdvanceOutcome, DomainError> {
        self.require_template()?;
        let outcome = self.wizard.submit_skills(&mut self.document, form);
        self.log_advance(&outcome);
        Ok(outcome)
    }

    pub fn submit_languages(&mut self, form: LanguagesForm) -> Result<AdvanceOutcome, DomainError> {
        self.require_template()?;
        let outcome = self.wizard.submit_languages(&mut self.document, form);
        self.log_advance(&outcome);
        Ok(outcome)
    }

    /// Removes a record by position.
    pub fn remove_record(
        &mut self,
        collection: RecordCollection,
        index: usize,
    ) -> Result<(), DomainError> {
        self.require_template()?;
        self.document
            .remove_item(collection, index)
            .map_err(|err| self.log_store_error(err))
    }

    /// Applies a raw store command, bypassing form validation.
    pub fn apply(&mut self, command: CvCommand) -> Result<CommandOutcome, DomainError> {
        self.document
            .apply(command)
            .map_err(|err| self.log_store_error(err))
    }

    /// Like [`apply`](Self::apply), rejected if the document moved past `expected`.
    pub fn apply_at_revision(
        &mut self,
        expected: DocumentRevision,
        command: CvCommand,
    ) -> Result<CommandOutcome, DomainError> {
        self.document
            .apply_at_revision(expected, command)
            .map_err(|err| self.log_store_error(err))
    }

    // ───────────────────────────────────────────────────────────────
    // Preview & export
    // ───────────────────────────────────────────────────────────────

    pub fn preview(&self) -> Result<CvPreview<'_>, DomainError> {
        let template = self.require_template()?;
        Ok(CvPreview {
            document: &self.document,
            template,
            revision: self.document.revision(),
        })
    }

    /// Exports the document with the selected template.
    ///
    /// The document and wizard are untouched whatever the outcome.
    pub async fn export(
        &mut self,
        handler: &ExportCvHandler,
        format: ExportFormat,
    ) -> Result<&ExportArtifact, SessionError> {
        let template = self.selection.require()?;
        let cmd = ExportCvCommand {
            document: &self.document,
            template,
            format,
        };
        let artifact = handler.handle(cmd, &mut self.export_status).await?;
        Ok(self.last_artifact.insert(artifact))
    }

    /// Returns a finished or failed export to idle.
    pub fn dismiss_export(&mut self) -> Result<(), DomainError> {
        self.export_status = self
            .export_status
            .transition_to(ExportStatus::Idle)
            .map_err(|err| DomainError::new(ErrorCode::InvalidStateTransition, err.message()))?;
        Ok(())
    }

    /// Clears the document, the wizard and any export. The template stays
    /// selected.
    pub fn start_over(&mut self) {
        self.document.reset();
        self.wizard.reset();
        self.export_status = ExportStatus::Idle;
        self.last_artifact = None;
        tracing::info!(session = %self.id, revision = %self.document.revision(), "Session started over");
    }

    // ───────────────────────────────────────────────────────────────
    // Logging helpers
    // ───────────────────────────────────────────────────────────────

    fn log_advance(&self, outcome: &AdvanceOutcome) {
        match outcome {
            AdvanceOutcome::Moved(step) => {
                tracing::debug!(session = %self.id, step = %step, "Advanced")
            }
            AdvanceOutcome::PreviewRequested => {
                tracing::debug!(session = %self.id, "Preview requested")
            }
            AdvanceOutcome::Blocked(errors) => {
                tracing::debug!(
                    session = %self.id,
                    step = %self.wizard.current_step(),
                    fields = ?errors.fields(),
                    "Advance blocked"
                )
            }
        }
    }

    fn log_rejected(&self, form: &str, errors: FieldErrors) -> FieldErrors {
        tracing::debug!(session = %self.id, form, fields = ?errors.fields(), "Submission rejected");
        errors
    }

    fn log_store_error(&self, err: DomainError) -> DomainError {
        tracing::error!(
            session = %self.id,
            code = %err.code,
            revision = %self.document.revision(),
            error = %err,
            "Document store rejected operation"
        );
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cv::Education;

    fn template_id(raw: &str) -> TemplateId {
        TemplateId::new(raw).unwrap()
    }

    fn session_with_template() -> CvSession {
        let mut session = CvSession::new();
        session.select_template(&template_id("1")).unwrap();
        session
    }

    fn valid_patch() -> PersonalInfoPatch {
        PersonalInfoPatch::default()
            .full_name("Alan Turing")
            .email("alan@example.com")
            .phone("0123456789")
            .address("Wilmslow, Cheshire")
            .summary("Mathematician, logician and pioneer of theoretical computer science.")
    }

    #[test]
    fn wizard_requires_template() {
        let mut session = CvSession::new();

        let err = session.advance().unwrap_err();
        assert_eq!(err.code, ErrorCode::TemplateNotSelected);

        let err = session.submit_personal_info(valid_patch()).unwrap_err();
        assert_eq!(
            err.domain_error().map(|e| e.code),
            Some(ErrorCode::TemplateNotSelected)
        );
        assert_eq!(session.document().personal_info().full_name, "");
    }

    #[test]
    fn preview_requires_template() {
        let session = CvSession::new();
        assert_eq!(
            session.preview().unwrap_err().code,
            ErrorCode::TemplateNotSelected
        );
    }

    #[test]
    fn unknown_template_is_not_found() {
        let mut session = CvSession::new();
        let err = session.select_template(&template_id("42")).unwrap_err();
        assert_eq!(err.code, ErrorCode::TemplateNotFound);
        assert!(session.selected_template().is_none());
    }

    #[test]
    fn invalid_submission_surfaces_field_errors() {
        let mut session = session_with_template();

        let err = session
            .submit_personal_info(valid_patch().email("not-an-email"))
            .unwrap_err();

        assert_eq!(err.field_errors().unwrap().fields(), vec!["email"]);
        assert_eq!(session.current_step(), WizardStep::PersonalInfo);
    }

    #[test]
    fn remove_out_of_range_is_propagated() {
        let mut session = session_with_template();

        let err = session
            .remove_record(RecordCollection::Education, 0)
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::IndexOutOfRange);
    }

    #[test]
    fn stale_revision_is_rejected() {
        let mut session = session_with_template();
        let seen = session.document().revision();
        session
            .apply(CvCommand::AppendItem {
                item: Education::default().into(),
            })
            .unwrap();

        let err = session
            .apply_at_revision(
                seen,
                CvCommand::RemoveItem {
                    collection: RecordCollection::Education,
                    index: 0,
                },
            )
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StaleRevision);
        assert_eq!(session.document().education().len(), 1);
    }

    #[test]
    fn start_over_keeps_template() {
        let mut session = session_with_template();
        session.submit_personal_info(valid_patch()).unwrap();
        assert_eq!(session.current_step(), WizardStep::Education);

        session.start_over();

        assert!(session.document().is_empty());
        assert_eq!(session.current_step(), WizardStep::PersonalInfo);
        assert_eq!(session.export_status(), ExportStatus::Idle);
        assert_eq!(session.selected_template().unwrap().name, "Professional Modern");
    }

    #[test]
    fn preview_exposes_document_and_template() {
        let mut session = session_with_template();
        session.submit_personal_info(valid_patch()).unwrap();

        let preview = session.preview().unwrap();

        assert_eq!(preview.document.personal_info().full_name, "Alan Turing");
        assert_eq!(preview.template.accent.to_hex(), "#2563eb");
        assert_eq!(preview.revision, session.document().revision());
    }

    #[test]
    fn dismiss_from_idle_is_rejected() {
        let mut session = session_with_template();
        let err = session.dismiss_export().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }
}
