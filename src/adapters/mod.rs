//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `document` - Markdown rendering, HTML/PDF conversion and file storage

pub mod document;

pub use document::{LocalArtifactStorage, MarkdownCvRenderer, PulldownExportService};
