//! CV module - The document store and its typed records.
//!
//! A `CvDocument` holds personal info plus six ordered collections and is
//! mutated only through typed operations or the equivalent `CvCommand`s.

mod collection;
mod command;
mod document;
mod events;
mod personal_info;
mod records;
mod revision;

pub use collection::{RecordCollection, RecordItem, ScalarCollection};
pub use command::{CommandOutcome, CvCommand};
pub use document::{CvDocument, CvRecord};
pub use events::CvEvent;
pub use personal_info::{PersonalInfo, PersonalInfoPatch};
pub use records::{Certification, Education, Experience, LanguageEntry, Proficiency, Project};
pub use revision::DocumentRevision;
