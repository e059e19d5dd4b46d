//! Document adapters - Implementations for CV rendering, export and storage.
//!
//! - `MarkdownCvRenderer` - Lays a CV out as markdown for a template
//! - `PulldownExportService` - Converts markdown to HTML (pulldown-cmark) or PDF (Pandoc)
//! - `LocalArtifactStorage` - Writes artifacts into a local output directory

mod local_file_storage;
mod markdown_renderer;
mod pulldown_export_service;

pub use local_file_storage::LocalArtifactStorage;
pub use markdown_renderer::{date_range, MarkdownCvRenderer};
pub use pulldown_export_service::PulldownExportService;
