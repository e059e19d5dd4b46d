//! ExportCvHandler - Runs a document through render, convert and store.
//!
//! The handler owns the export status transitions: `Generating` while it
//! works, then `Ready` or `Failed`. The document and wizard are only read.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::cv::CvDocument;
use crate::domain::export::{artifact_filename, ExportArtifact, ExportFormat, ExportStatus};
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine, Timestamp, ValidationError};
use crate::domain::template::Template;
use crate::ports::{
    ArtifactStorage, DocumentExportService, DocumentRenderer, ExportError, ExportStyle,
    ExportedDocument, RenderError, StorageError,
};

/// Command to export the current document.
#[derive(Debug, Clone, Copy)]
pub struct ExportCvCommand<'a> {
    pub document: &'a CvDocument,
    pub template: &'a Template,
    pub format: ExportFormat,
}

/// Why an export did not produce an artifact.
#[derive(Debug, Clone, Error)]
pub enum ExportFailure {
    /// An export is already running.
    #[error("An export is already in progress")]
    Busy(#[source] ValidationError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Conversion failed: {0}")]
    Conversion(#[from] ExportError),

    #[error("Saving the export failed: {0}")]
    Storage(#[from] StorageError),
}

impl From<ExportFailure> for DomainError {
    fn from(failure: ExportFailure) -> Self {
        let code = match &failure {
            ExportFailure::Busy(_) => ErrorCode::InvalidStateTransition,
            _ => ErrorCode::ExportFailed,
        };
        DomainError::new(code, failure.to_string())
    }
}

/// Handler for exporting a CV to a file.
pub struct ExportCvHandler {
    renderer: Arc<dyn DocumentRenderer>,
    export_service: Arc<dyn DocumentExportService>,
    storage: Arc<dyn ArtifactStorage>,
}

impl ExportCvHandler {
    pub fn new(
        renderer: Arc<dyn DocumentRenderer>,
        export_service: Arc<dyn DocumentExportService>,
        storage: Arc<dyn ArtifactStorage>,
    ) -> Self {
        Self {
            renderer,
            export_service,
            storage,
        }
    }

    /// Runs the export and moves `status` through its lifecycle.
    ///
    /// On failure `status` ends at `Failed` (or is left alone when an export
    /// was already running) and nothing is written.
    pub async fn handle(
        &self,
        cmd: ExportCvCommand<'_>,
        status: &mut ExportStatus,
    ) -> Result<ExportArtifact, ExportFailure> {
        *status = status
            .transition_to(ExportStatus::Generating)
            .map_err(ExportFailure::Busy)?;

        tracing::info!(format = %cmd.format, template = %cmd.template.id, "Export started");

        match self.run(cmd).await {
            Ok(artifact) => {
                *status = ExportStatus::Ready;
                tracing::info!(
                    path = %artifact.path.display(),
                    size_bytes = artifact.size_bytes,
                    "Export ready"
                );
                Ok(artifact)
            }
            Err(failure) => {
                *status = ExportStatus::Failed;
                tracing::warn!(error = %failure, format = %cmd.format, "Export failed");
                Err(failure)
            }
        }
    }

    async fn run(&self, cmd: ExportCvCommand<'_>) -> Result<ExportArtifact, ExportFailure> {
        // 1. Render markdown in the template's layout
        let markdown = self.renderer.render(cmd.document, cmd.template)?;

        // 2. Convert
        let full_name = cmd.document.personal_info().full_name.as_str();
        let style = ExportStyle::for_template(cmd.template, Some(full_name));
        let exported = match cmd.format {
            ExportFormat::Markdown => ExportedDocument::from_markdown(markdown),
            ExportFormat::Html => {
                ExportedDocument::from_html(self.export_service.to_html(&markdown, &style).await?)
            }
            ExportFormat::Pdf => {
                ExportedDocument::from_pdf(self.export_service.to_pdf(&markdown, &style).await?)
            }
        };

        // 3. Store
        let created_at = Timestamp::now();
        let filename = artifact_filename(full_name, exported.format, created_at);
        let stored = self.storage.write(&filename, &exported.content).await?;

        Ok(ExportArtifact {
            path: stored.path,
            format: exported.format,
            size_bytes: stored.size_bytes,
            checksum: stored.checksum,
            created_at,
        })
    }
}
