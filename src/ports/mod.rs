//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Export Ports
//!
//! - `DocumentRenderer` - Lays a CV out as markdown for a template
//! - `DocumentExportService` - Converts markdown to HTML or PDF
//! - `ArtifactStorage` - Persists the exported file

mod artifact_storage;
mod document_export_service;
mod document_renderer;

pub use artifact_storage::{ArtifactStorage, StorageError, StoredFile};
pub use document_export_service::{
    DocumentExportService, ExportError, ExportStyle, ExportedDocument,
};
pub use document_renderer::{DocumentRenderer, RenderError};
