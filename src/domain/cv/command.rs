//! Closed set of document commands.
//!
//! Every mutation of a [`CvDocument`](super::CvDocument) can be expressed as a
//! `CvCommand` and applied through `CvDocument::apply`. The typed methods on
//! the document remain the primary API; commands exist so a caller can queue,
//! log or replay edits without an untyped dispatch.

use serde::{Deserialize, Serialize};

use super::{DocumentRevision, PersonalInfoPatch, RecordCollection, RecordItem, ScalarCollection};

/// A single document mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CvCommand {
    SetPersonalInfo { patch: PersonalInfoPatch },
    AppendItem { item: RecordItem },
    ReplaceItem { index: usize, item: RecordItem },
    RemoveItem { collection: RecordCollection, index: usize },
    SetScalarCollection { items: ScalarCollection },
    Reset,
}

impl CvCommand {
    /// Short operation name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            CvCommand::SetPersonalInfo { .. } => "set_personal_info",
            CvCommand::AppendItem { .. } => "append_item",
            CvCommand::ReplaceItem { .. } => "replace_item",
            CvCommand::RemoveItem { .. } => "remove_item",
            CvCommand::SetScalarCollection { .. } => "set_scalar_collection",
            CvCommand::Reset => "reset",
        }
    }
}

/// Result of a successfully applied command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    /// False only for merges that left every field as it was.
    pub changed: bool,
    /// Length of the targeted collection after the command, when one was targeted.
    pub len: Option<usize>,
    /// Document revision after the command.
    pub revision: DocumentRevision,
}
