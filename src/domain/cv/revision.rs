//! Monotonic revision counter for the CV document.

use serde::{Deserialize, Serialize};

/// Revision of a [`CvDocument`](super::CvDocument).
///
/// Every state-changing operation bumps the revision; it never decreases,
/// not even across `reset()`. Callers holding a positional index can
/// compare revisions to detect that the collection moved underneath them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentRevision(u64);

impl DocumentRevision {
    /// Creates the initial revision (1).
    pub fn initial() -> Self {
        Self(1)
    }

    /// Creates a revision from a raw value.
    pub fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw revision number.
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Returns the next revision.
    pub fn increment(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for DocumentRevision {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for DocumentRevision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_revision_is_one() {
        assert_eq!(DocumentRevision::default().as_u64(), 1);
    }

    #[test]
    fn increment_is_monotonic_and_saturates() {
        let r = DocumentRevision::initial();
        assert!(r.increment() > r);
        let max = DocumentRevision::from_raw(u64::MAX);
        assert_eq!(max.increment(), max);
    }

    #[test]
    fn displays_with_prefix() {
        assert_eq!(DocumentRevision::from_raw(7).to_string(), "r7");
    }
}
