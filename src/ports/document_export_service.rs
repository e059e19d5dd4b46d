//! Document Export Service Port - Format conversion interface.
//!
//! This port defines the contract for converting rendered CV markdown to
//! HTML or PDF. The application depends on this trait, while adapters
//! (like PulldownExportService) provide the implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::export::ExportFormat;
use crate::domain::template::{AccentColor, Template};

/// Port for exporting markdown documents to other formats.
///
/// # Contract
///
/// Implementations must:
/// - Convert valid markdown to the target format
/// - Apply the style's accent color as the document's primary color
/// - Report clear errors for conversion failures
///
/// # Usage
///
/// ```rust,ignore
/// let export_service: &dyn DocumentExportService = get_service();
/// let style = ExportStyle::for_template(template, Some("Ada Lovelace"));
///
/// let pdf_bytes = export_service.to_pdf("# Ada Lovelace\n\n...", &style).await?;
/// let html = export_service.to_html("# Ada Lovelace\n\n...", &style).await?;
/// ```
#[async_trait]
pub trait DocumentExportService: Send + Sync {
    /// Convert markdown content to PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if conversion fails or the converter is missing.
    async fn to_pdf(&self, markdown: &str, style: &ExportStyle) -> Result<Vec<u8>, ExportError>;

    /// Convert markdown content to a complete HTML document.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if conversion fails.
    async fn to_html(&self, markdown: &str, style: &ExportStyle) -> Result<String, ExportError>;

    /// Check if the export service is available.
    ///
    /// Used to verify external dependencies (like Pandoc) before a PDF
    /// export is attempted.
    async fn is_available(&self) -> bool;
}

/// Presentation applied during conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportStyle {
    /// Document title; falls back to the first heading when absent.
    pub title: Option<String>,
    pub accent: AccentColor,
}

impl ExportStyle {
    /// Style derived from the selected template.
    pub fn for_template(template: &Template, title: Option<&str>) -> Self {
        Self {
            title: title
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            accent: template.accent,
        }
    }
}

/// Exported document with content and metadata.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedDocument {
    /// Create a new exported document.
    pub fn new(content: Vec<u8>, format: ExportFormat) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            format,
        }
    }

    /// Create from markdown content (no conversion needed).
    pub fn from_markdown(markdown: String) -> Self {
        Self::new(markdown.into_bytes(), ExportFormat::Markdown)
    }

    /// Create from HTML content.
    pub fn from_html(html: String) -> Self {
        Self::new(html.into_bytes(), ExportFormat::Html)
    }

    /// Create from PDF bytes.
    pub fn from_pdf(pdf_bytes: Vec<u8>) -> Self {
        Self::new(pdf_bytes, ExportFormat::Pdf)
    }
}

/// Errors that can occur during document export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// External converter (e.g., Pandoc) is not available.
    #[error("Export service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Conversion to PDF failed.
    #[error("PDF conversion failed: {0}")]
    PdfConversionFailed(String),

    /// Timeout during conversion.
    #[error("Conversion timed out after {0} seconds")]
    Timeout(u64),
}

impl ExportError {
    /// Create a service unavailable error.
    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable(reason.into())
    }

    /// Create a PDF conversion error.
    pub fn pdf_failed(reason: impl Into<String>) -> Self {
        Self::PdfConversionFailed(reason.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::TemplateCatalog;

    // ───────────────────────────────────────────────────────────────
    // ExportStyle tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn style_takes_accent_from_template() {
        let template = &TemplateCatalog::seeded().all()[2];
        let style = ExportStyle::for_template(template, Some("Ada Lovelace"));
        assert_eq!(style.accent.to_hex(), "#1e293b");
        assert_eq!(style.title.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn blank_title_is_dropped() {
        let template = &TemplateCatalog::seeded().all()[0];
        let style = ExportStyle::for_template(template, Some("  "));
        assert_eq!(style.title, None);
    }

    // ───────────────────────────────────────────────────────────────
    // ExportedDocument tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn exported_document_from_markdown_creates_correctly() {
        let doc = ExportedDocument::from_markdown("# Test".to_string());
        assert_eq!(doc.content_type, "text/markdown; charset=utf-8");
        assert_eq!(doc.format, ExportFormat::Markdown);
        assert_eq!(doc.content, b"# Test");
    }

    #[test]
    fn exported_document_from_pdf_creates_correctly() {
        let doc = ExportedDocument::from_pdf(vec![0x25, 0x50, 0x44, 0x46]);
        assert_eq!(doc.content_type, "application/pdf");
        assert_eq!(doc.format, ExportFormat::Pdf);
    }

    // ───────────────────────────────────────────────────────────────
    // ExportError tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn export_error_displays_messages() {
        let err = ExportError::service_unavailable("Pandoc not found");
        assert!(err.to_string().contains("Pandoc not found"));

        let err = ExportError::pdf_failed("Invalid input");
        assert!(err.to_string().contains("PDF conversion failed"));

        assert_eq!(
            ExportError::Timeout(30).to_string(),
            "Conversion timed out after 30 seconds"
        );
    }

    #[test]
    fn document_export_service_is_object_safe() {
        fn check<T: DocumentExportService + ?Sized>() {}
        check::<dyn DocumentExportService>();
    }
}
