//! Local Filesystem Storage Adapter - Implementation of ArtifactStorage.
//!
//! Writes exported CV files into one output directory using atomic writes
//! and SHA-256 checksums.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::domain::export::content_checksum;
use crate::ports::{ArtifactStorage, StorageError, StoredFile};

/// Maximum artifact size allowed (25 MB).
const MAX_ARTIFACT_BYTES: u64 = 25 * 1024 * 1024;

/// Local filesystem storage for export artifacts.
///
/// # Atomic Writes
///
/// 1. Write content to `{filename}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{filename}`
///
/// A failed write removes its `.tmp` file; only a crash mid-write can leave
/// one behind. No truncated artifact is ever visible.
///
/// # Usage
///
/// ```rust,ignore
/// let storage = LocalArtifactStorage::new("./exports");
/// let stored = storage.write("CV_Ada_Lovelace_1654041600000.pdf", &pdf).await?;
/// println!("Checksum: {}", stored.checksum);
/// ```
#[derive(Debug, Clone)]
pub struct LocalArtifactStorage {
    /// Directory all artifacts are written into.
    output_dir: PathBuf,
}

impl LocalArtifactStorage {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Resolves `filename` inside the output directory.
    ///
    /// Only a single plain path component is accepted.
    fn resolve(&self, filename: &str) -> Result<PathBuf, StorageError> {
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.output_dir.join(filename)),
            _ => Err(StorageError::invalid_filename(filename)),
        }
    }

    fn temp_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    async fn ensure_output_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.output_dir).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })
    }
}

/// RAII guard that removes a temp file on drop unless disarmed.
struct TempFileGuard {
    path: PathBuf,
    armed: bool,
}

impl TempFileGuard {
    fn new(path: PathBuf) -> Self {
        Self { path, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if self.armed {
            // May not exist yet if creation itself failed.
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

fn map_io(path: &Path, action: &str, e: std::io::Error) -> StorageError {
    match e.kind() {
        std::io::ErrorKind::NotFound => StorageError::not_found(path.display().to_string()),
        std::io::ErrorKind::PermissionDenied => {
            StorageError::permission_denied(path.display().to_string())
        }
        _ => StorageError::io(format!("Failed to {} {}: {}", action, path.display(), e)),
    }
}

#[async_trait]
impl ArtifactStorage for LocalArtifactStorage {
    async fn write(&self, filename: &str, content: &[u8]) -> Result<StoredFile, StorageError> {
        let size = content.len() as u64;
        if size > MAX_ARTIFACT_BYTES {
            return Err(StorageError::io(format!(
                "Artifact too large: {} bytes (max: {})",
                size, MAX_ARTIFACT_BYTES
            )));
        }

        let final_path = self.resolve(filename)?;
        self.ensure_output_dir().await?;
        let temp_path = Self::temp_path(&final_path);
        let guard = TempFileGuard::new(temp_path.clone());

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| map_io(&temp_path, "create", e))?;
        file.write_all(content)
            .await
            .map_err(|e| map_io(&temp_path, "write", e))?;
        file.sync_all()
            .await
            .map_err(|e| map_io(&temp_path, "sync", e))?;
        drop(file);

        fs::rename(&temp_path, &final_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })?;
        guard.disarm();

        debug!(path = %final_path.display(), bytes = size, "Artifact written");
        Ok(StoredFile {
            path: final_path,
            size_bytes: size,
            checksum: content_checksum(content),
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
