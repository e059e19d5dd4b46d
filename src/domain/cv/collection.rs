//! Collection names and the tagged payloads that target them.
//!
//! Positional collections (education, experience, projects, certifications)
//! are edited record by record. Scalar collections (skills, languages,
//! interests) are replaced wholesale after an in-form bulk edit.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::records::{Certification, Education, Experience, LanguageEntry, Project};

/// The record collections that support append, replace and remove by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordCollection {
    Education,
    Experience,
    Projects,
    Certifications,
}

impl RecordCollection {
    pub fn all() -> &'static [RecordCollection] {
        &[
            RecordCollection::Education,
            RecordCollection::Experience,
            RecordCollection::Projects,
            RecordCollection::Certifications,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordCollection::Education => "education",
            RecordCollection::Experience => "experience",
            RecordCollection::Projects => "projects",
            RecordCollection::Certifications => "certifications",
        }
    }
}

impl fmt::Display for RecordCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A record tagged with the collection it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "collection", content = "record", rename_all = "snake_case")]
pub enum RecordItem {
    Education(Education),
    Experience(Experience),
    Projects(Project),
    Certifications(Certification),
}

impl RecordItem {
    /// The collection this record is stored in.
    pub fn collection(&self) -> RecordCollection {
        match self {
            RecordItem::Education(_) => RecordCollection::Education,
            RecordItem::Experience(_) => RecordCollection::Experience,
            RecordItem::Projects(_) => RecordCollection::Projects,
            RecordItem::Certifications(_) => RecordCollection::Certifications,
        }
    }
}

impl From<Education> for RecordItem {
    fn from(value: Education) -> Self {
        RecordItem::Education(value)
    }
}

impl From<Experience> for RecordItem {
    fn from(value: Experience) -> Self {
        RecordItem::Experience(value)
    }
}

impl From<Project> for RecordItem {
    fn from(value: Project) -> Self {
        RecordItem::Projects(value)
    }
}

impl From<Certification> for RecordItem {
    fn from(value: Certification) -> Self {
        RecordItem::Certifications(value)
    }
}

/// Wholesale replacement payload for a scalar collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "collection", content = "items", rename_all = "snake_case")]
pub enum ScalarCollection {
    Skills(Vec<String>),
    Languages(Vec<LanguageEntry>),
    Interests(Vec<String>),
}

impl ScalarCollection {
    pub fn name(&self) -> &'static str {
        match self {
            ScalarCollection::Skills(_) => "skills",
            ScalarCollection::Languages(_) => "languages",
            ScalarCollection::Interests(_) => "interests",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ScalarCollection::Skills(items) | ScalarCollection::Interests(items) => items.len(),
            ScalarCollection::Languages(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
