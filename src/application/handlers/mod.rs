//! Application handlers.
//!
//! Command handlers that coordinate the domain with the ports.

mod export_cv;

pub use export_cv::{ExportCvCommand, ExportCvHandler, ExportFailure};
