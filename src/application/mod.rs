//! Application layer - Sessions and handlers.
//!
//! Orchestrates domain operations and coordinates between ports. The
//! session is the single owner of a user's document; handlers only borrow it.

pub mod handlers;
mod session;

pub use handlers::{ExportCvCommand, ExportCvHandler, ExportFailure};
pub use session::{CvPreview, CvSession, SessionError};
