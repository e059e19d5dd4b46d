//! Document Renderer Port - CV to markdown.
//!
//! Turns the document into markdown laid out by a template. Conversion to
//! HTML or PDF happens afterwards in a `DocumentExportService`.

use thiserror::Error;

use crate::domain::cv::CvDocument;
use crate::domain::template::Template;

/// Port for rendering a CV as markdown.
///
/// # Contract
///
/// Implementations must:
/// - Emit the template's sections in the template's order
/// - Skip sections with no data rather than printing empty headings
/// - Never mutate or validate the document
///
/// # Usage
///
/// ```rust,ignore
/// let renderer: &dyn DocumentRenderer = get_renderer();
/// let markdown = renderer.render(&document, template)?;
/// ```
pub trait DocumentRenderer: Send + Sync {
    /// Render the full CV.
    ///
    /// # Errors
    ///
    /// `RenderError::EmptyDocument` when there is nothing to render.
    fn render(&self, document: &CvDocument, template: &Template) -> Result<String, RenderError>;
}

/// Errors that can occur while rendering.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// The document holds no data at all.
    #[error("Nothing to render: the CV is empty")]
    EmptyDocument,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_messages() {
        assert!(RenderError::EmptyDocument.to_string().contains("empty"));
    }

    #[test]
    fn document_renderer_is_object_safe() {
        fn check<T: DocumentRenderer + ?Sized>() {}
        check::<dyn DocumentRenderer>();
    }
}
