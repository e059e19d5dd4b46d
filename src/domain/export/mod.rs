//! Export module - Status, formats and artifacts of the export pipeline.
//!
//! Rendering and conversion live behind ports; this module only holds the
//! values the pipeline produces and the status machine it drives.

mod artifact;
mod format;
mod status;

pub use artifact::{artifact_filename, content_checksum, ExportArtifact};
pub use format::ExportFormat;
pub use status::ExportStatus;
