//! CvDocument aggregate - the in-memory document store.
//!
//! Holds personal info plus the ordered collections of a CV and exposes pure,
//! synchronous state transitions. Nothing here validates field content; that
//! is the job of `domain::validation`, applied by the wizard before a record
//! reaches the store.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

use super::{
    Certification, CommandOutcome, CvCommand, CvEvent, DocumentRevision, Education, Experience,
    LanguageEntry, PersonalInfo, PersonalInfoPatch, Project, RecordCollection, RecordItem,
    ScalarCollection,
};

/// The CV document, one per editing session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvDocument {
    personal_info: PersonalInfo,
    education: Vec<Education>,
    experience: Vec<Experience>,
    projects: Vec<Project>,
    certifications: Vec<Certification>,
    skills: Vec<String>,
    languages: Vec<LanguageEntry>,
    interests: Vec<String>,
    #[serde(skip)]
    revision: DocumentRevision,
    #[serde(skip)]
    events: Vec<CvEvent>,
}

/// A record type that lives in one of the positional collections.
///
/// Gives typed access (`doc.records::<Education>()`) on top of the
/// tagged [`RecordItem`] API.
pub trait CvRecord: Clone + Into<RecordItem> {
    const COLLECTION: RecordCollection;

    fn slice(doc: &CvDocument) -> &[Self];
}

impl CvRecord for Education {
    const COLLECTION: RecordCollection = RecordCollection::Education;

    fn slice(doc: &CvDocument) -> &[Self] {
        &doc.education
    }
}

impl CvRecord for Experience {
    const COLLECTION: RecordCollection = RecordCollection::Experience;

    fn slice(doc: &CvDocument) -> &[Self] {
        &doc.experience
    }
}

impl CvRecord for Project {
    const COLLECTION: RecordCollection = RecordCollection::Projects;

    fn slice(doc: &CvDocument) -> &[Self] {
        &doc.projects
    }
}

impl CvRecord for Certification {
    const COLLECTION: RecordCollection = RecordCollection::Certifications;

    fn slice(doc: &CvDocument) -> &[Self] {
        &doc.certifications
    }
}

impl CvDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    // ───────────────────────────────────────────────────────────────
    // Selectors
    // ───────────────────────────────────────────────────────────────

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn education(&self) -> &[Education] {
        &self.education
    }

    pub fn experience(&self) -> &[Experience] {
        &self.experience
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn certifications(&self) -> &[Certification] {
        &self.certifications
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn languages(&self) -> &[LanguageEntry] {
        &self.languages
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Typed view of a positional collection.
    pub fn records<R: CvRecord>(&self) -> &[R] {
        R::slice(self)
    }

    /// Current length of a positional collection.
    pub fn len(&self, collection: RecordCollection) -> usize {
        match collection {
            RecordCollection::Education => self.education.len(),
            RecordCollection::Experience => self.experience.len(),
            RecordCollection::Projects => self.projects.len(),
            RecordCollection::Certifications => self.certifications.len(),
        }
    }

    /// True when every field holds its empty default.
    pub fn is_empty(&self) -> bool {
        self.personal_info == PersonalInfo::default()
            && self.education.is_empty()
            && self.experience.is_empty()
            && self.projects.is_empty()
            && self.certifications.is_empty()
            && self.skills.is_empty()
            && self.languages.is_empty()
            && self.interests.is_empty()
    }

    pub fn revision(&self) -> DocumentRevision {
        self.revision
    }

    /// Drains the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<CvEvent> {
        std::mem::take(&mut self.events)
    }

    // ───────────────────────────────────────────────────────────────
    // Mutations
    // ───────────────────────────────────────────────────────────────

    /// Merges `patch` into the personal info. Fields absent from the patch
    /// are retained; a patch that changes nothing does not bump the revision.
    pub fn set_personal_info(&mut self, patch: PersonalInfoPatch) -> bool {
        let changed = self.personal_info.merge(patch);
        if changed {
            let revision = self.bump();
            self.record_event(CvEvent::PersonalInfoUpdated { revision });
        }
        changed
    }

    /// Appends a record to the collection named by its variant.
    ///
    /// Returns the new length of that collection.
    pub fn append_item(&mut self, item: RecordItem) -> usize {
        let collection = item.collection();
        let len = match item {
            RecordItem::Education(r) => push(&mut self.education, r),
            RecordItem::Experience(r) => push(&mut self.experience, r),
            RecordItem::Projects(r) => push(&mut self.projects, r),
            RecordItem::Certifications(r) => push(&mut self.certifications, r),
        };
        let revision = self.bump();
        self.record_event(CvEvent::ItemAppended {
            collection,
            index: len - 1,
            revision,
        });
        len
    }

    /// Typed shorthand for [`append_item`](Self::append_item).
    pub fn append<R: CvRecord>(&mut self, record: R) -> usize {
        self.append_item(record.into())
    }

    /// Overwrites the record at `index` in the collection named by `item`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index` is not within the current bounds.
    pub fn replace_item(&mut self, index: usize, item: RecordItem) -> Result<(), DomainError> {
        let collection = item.collection();
        match item {
            RecordItem::Education(r) => replace(&mut self.education, collection, index, r)?,
            RecordItem::Experience(r) => replace(&mut self.experience, collection, index, r)?,
            RecordItem::Projects(r) => replace(&mut self.projects, collection, index, r)?,
            RecordItem::Certifications(r) => {
                replace(&mut self.certifications, collection, index, r)?
            }
        }
        let revision = self.bump();
        self.record_event(CvEvent::ItemReplaced {
            collection,
            index,
            revision,
        });
        Ok(())
    }

    /// Removes the record at `index`; later records shift down by one.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index` is not within the current bounds.
    pub fn remove_item(
        &mut self,
        collection: RecordCollection,
        index: usize,
    ) -> Result<(), DomainError> {
        match collection {
            RecordCollection::Education => remove(&mut self.education, collection, index)?,
            RecordCollection::Experience => remove(&mut self.experience, collection, index)?,
            RecordCollection::Projects => remove(&mut self.projects, collection, index)?,
            RecordCollection::Certifications => {
                remove(&mut self.certifications, collection, index)?
            }
        }
        let revision = self.bump();
        self.record_event(CvEvent::ItemRemoved {
            collection,
            index,
            revision,
        });
        Ok(())
    }

    /// Replaces skills, languages or interests wholesale.
    pub fn set_scalar_collection(&mut self, items: ScalarCollection) {
        let collection = items.name().to_string();
        let len = items.len();
        match items {
            ScalarCollection::Skills(v) => self.skills = v,
            ScalarCollection::Languages(v) => self.languages = v,
            ScalarCollection::Interests(v) => self.interests = v,
        }
        let revision = self.bump();
        self.record_event(CvEvent::CollectionReplaced {
            collection,
            len,
            revision,
        });
    }

    /// Restores every field to its empty default.
    ///
    /// The revision keeps counting so indices captured before the reset
    /// are recognizably stale.
    pub fn reset(&mut self) {
        self.personal_info = PersonalInfo::default();
        self.education.clear();
        self.experience.clear();
        self.projects.clear();
        self.certifications.clear();
        self.skills.clear();
        self.languages.clear();
        self.interests.clear();
        let revision = self.bump();
        self.record_event(CvEvent::Reset { revision });
    }

    // ───────────────────────────────────────────────────────────────
    // Commands
    // ───────────────────────────────────────────────────────────────

    /// Applies a command through the matching typed operation.
    pub fn apply(&mut self, command: CvCommand) -> Result<CommandOutcome, DomainError> {
        let (changed, len) = match command {
            CvCommand::SetPersonalInfo { patch } => (self.set_personal_info(patch), None),
            CvCommand::AppendItem { item } => (true, Some(self.append_item(item))),
            CvCommand::ReplaceItem { index, item } => {
                let collection = item.collection();
                self.replace_item(index, item)?;
                (true, Some(self.len(collection)))
            }
            CvCommand::RemoveItem { collection, index } => {
                self.remove_item(collection, index)?;
                (true, Some(self.len(collection)))
            }
            CvCommand::SetScalarCollection { items } => {
                let len = items.len();
                self.set_scalar_collection(items);
                (true, Some(len))
            }
            CvCommand::Reset => {
                self.reset();
                (true, None)
            }
        };

        Ok(CommandOutcome {
            changed,
            len,
            revision: self.revision,
        })
    }

    /// Applies a command only if the document is still at `expected`.
    ///
    /// # Errors
    ///
    /// `StaleRevision` when the document moved on since the caller read it.
    pub fn apply_at_revision(
        &mut self,
        expected: DocumentRevision,
        command: CvCommand,
    ) -> Result<CommandOutcome, DomainError> {
        if expected != self.revision {
            return Err(DomainError::new(
                ErrorCode::StaleRevision,
                format!(
                    "Command {} was issued at {} but the document is at {}",
                    command.name(),
                    expected,
                    self.revision
                ),
            )
            .with_detail("expected", expected.to_string())
            .with_detail("actual", self.revision.to_string()));
        }
        self.apply(command)
    }

    // ───────────────────────────────────────────────────────────────
    // Internal Helpers
    // ───────────────────────────────────────────────────────────────

    fn bump(&mut self) -> DocumentRevision {
        self.revision = self.revision.increment();
        self.revision
    }

    fn record_event(&mut self, event: CvEvent) {
        self.events.push(event);
    }
}

fn push<T>(items: &mut Vec<T>, item: T) -> usize {
    items.push(item);
    items.len()
}

fn replace<T>(
    items: &mut [T],
    collection: RecordCollection,
    index: usize,
    item: T,
) -> Result<(), DomainError> {
    let len = items.len();
    let slot = items
        .get_mut(index)
        .ok_or_else(|| DomainError::index_out_of_range(collection, index, len))?;
    *slot = item;
    Ok(())
}

fn remove<T>(items: &mut Vec<T>, collection: RecordCollection, index: usize) -> Result<(), DomainError> {
    if index >= items.len() {
        return Err(DomainError::index_out_of_range(collection, index, items.len()));
    }
    items.remove(index);
    Ok(())
}
