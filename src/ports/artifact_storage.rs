//! Artifact Storage Port - Where exported files land.
//!
//! The export handler hands finished bytes to this port; adapters (like
//! `LocalArtifactStorage`) decide where they are written.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Port for persisting export artifacts.
///
/// # Contract
///
/// Implementations must:
/// - Write atomically (no partial file is ever visible under `filename`)
/// - Reject filenames that would escape the storage root
/// - Report the SHA-256 checksum of what was written
///
/// # Usage
///
/// ```rust,ignore
/// let storage: &dyn ArtifactStorage = get_storage();
/// let stored = storage.write("CV_Ada_1654041600000.pdf", &bytes).await?;
/// println!("{} ({} bytes)", stored.path.display(), stored.size_bytes);
/// ```
#[async_trait]
pub trait ArtifactStorage: Send + Sync {
    /// Write `content` under `filename`, replacing any previous file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidFilename` for names outside the root.
    /// A failed write leaves no temp file behind.
    async fn write(&self, filename: &str, content: &[u8]) -> Result<StoredFile, StorageError>;
}

/// Outcome of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub path: PathBuf,
    pub size_bytes: u64,
    /// Hex-encoded SHA-256 of the content.
    pub checksum: String,
}

/// Errors that can occur during artifact storage operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// File was not found.
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// Permission denied accessing the file.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// Filename is empty or points outside the storage root.
    #[error("Invalid artifact filename: {filename}")]
    InvalidFilename { filename: String },

    /// IO error during file operation.
    #[error("IO error: {message}")]
    Io { message: String },
}

impl StorageError {
    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a permission denied error.
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Creates an invalid filename error.
    pub fn invalid_filename(filename: impl Into<String>) -> Self {
        Self::InvalidFilename {
            filename: filename.into(),
        }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filename_message_names_file() {
        let err = StorageError::invalid_filename("../x.pdf");
        assert!(err.to_string().contains("../x.pdf"));
    }

    #[test]
    fn artifact_storage_is_object_safe() {
        fn check<T: ArtifactStorage + ?Sized>() {}
        check::<dyn ArtifactStorage>();
    }
}
