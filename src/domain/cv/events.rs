//! CV document events.

use serde::{Deserialize, Serialize};

use super::{DocumentRevision, RecordCollection};

/// Events recorded by the document for every successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CvEvent {
    /// Personal info fields were merged.
    PersonalInfoUpdated { revision: DocumentRevision },

    /// A record was appended at `index`.
    ItemAppended {
        collection: RecordCollection,
        index: usize,
        revision: DocumentRevision,
    },

    /// The record at `index` was overwritten.
    ItemReplaced {
        collection: RecordCollection,
        index: usize,
        revision: DocumentRevision,
    },

    /// The record at `index` was removed; later records shifted down.
    ItemRemoved {
        collection: RecordCollection,
        index: usize,
        revision: DocumentRevision,
    },

    /// A scalar collection (skills, languages, interests) was replaced.
    CollectionReplaced {
        collection: String,
        len: usize,
        revision: DocumentRevision,
    },

    /// Everything was restored to empty defaults.
    Reset { revision: DocumentRevision },
}

impl CvEvent {
    /// Revision the document reached with this event.
    pub fn revision(&self) -> DocumentRevision {
        match self {
            CvEvent::PersonalInfoUpdated { revision }
            | CvEvent::ItemAppended { revision, .. }
            | CvEvent::ItemReplaced { revision, .. }
            | CvEvent::ItemRemoved { revision, .. }
            | CvEvent::CollectionReplaced { revision, .. }
            | CvEvent::Reset { revision } => *revision,
        }
    }
}
