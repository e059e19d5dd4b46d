//! Exported CV files and their naming.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use crate::domain::foundation::Timestamp;

use super::ExportFormat;

/// A file written by the export pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportArtifact {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub size_bytes: u64,
    /// SHA-256 of the content, lowercase hex.
    pub checksum: String,
    pub created_at: Timestamp,
}

/// Longest name segment, in bytes, kept in an artifact filename.
const MAX_STEM_BYTES: usize = 100;

/// Hex SHA-256 of `content`, as reported in `ExportArtifact::checksum`.
pub fn content_checksum(content: &[u8]) -> String {
    format!("{:x}", Sha256::digest(content))
}

/// Builds `CV_<name>_<millis>.<ext>`.
///
/// Whitespace runs in the name become a single `_` and characters that are
/// not allowed in file names are dropped. The name segment is cut to at
/// most `MAX_STEM_BYTES` on a char boundary. A blank name yields
/// `CV_<millis>.<ext>`.
pub fn artifact_filename(full_name: &str, format: ExportFormat, at: Timestamp) -> String {
    let name = filename_stem(full_name);
    if name.is_empty() {
        format!("CV_{}.{}", at.as_millis(), format.extension())
    } else {
        format!("CV_{}_{}.{}", name, at.as_millis(), format.extension())
    }
}

fn filename_stem(full_name: &str) -> String {
    let mut stem = full_name
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
                .filter(|c| !c.is_control())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    if stem.len() > MAX_STEM_BYTES {
        let mut cut = MAX_STEM_BYTES;
        while !stem.is_char_boundary(cut) {
            cut -= 1;
        }
        stem.truncate(cut);
        stem.truncate(stem.trim_end_matches('_').len());
    }
    stem
}
