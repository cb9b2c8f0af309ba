//! Destinations for finished archives.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::bundle::ArchiveBlob;
use crate::errors::{ExportError, ExportResult};

/// Where an archive ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArchive {
    pub filename: String,
    pub bytes: u64,
    /// Filesystem location, for sinks that write to disk
    pub location: Option<PathBuf>,
}

/// Receives a complete archive under a caller-chosen file name
#[async_trait]
pub trait ArchiveSink: Send + Sync {
    async fn save(&self, filename: &str, blob: ArchiveBlob) -> ExportResult<SavedArchive>;
}

/// Accept only a bare file name ending in `.zip`
pub fn validate_archive_filename(filename: &str) -> ExportResult<()> {
    let stem = filename.strip_suffix(".zip").unwrap_or_default();
    let valid = !stem.is_empty()
        && !stem.starts_with('.')
        && !filename
            .chars()
            .any(|c| matches!(c, '/' | '\\' | ':' | '\0') || c.is_control());
    if valid {
        Ok(())
    } else {
        Err(ExportError::InvalidFilename(filename.to_string()))
    }
}

/// Writes archives into a directory, replacing any file of the same name.
///
/// Each save stages into its own hidden file and renames it into place, so
/// overlapping saves under one name never observe each other's partial data.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ArchiveSink for DirectorySink {
    async fn save(&self, filename: &str, blob: ArchiveBlob) -> ExportResult<SavedArchive> {
        validate_archive_filename(filename)?;
        tokio::fs::create_dir_all(&self.root).await?;

        let target = self.root.join(filename);
        let staging = self
            .root
            .join(format!(".{}.{}.partial", filename, Uuid::new_v4().simple()));
        let bytes = blob.len();

        debug!("Writing {:?} via {:?}", target, staging);
        let written = match tokio::fs::write(&staging, blob.into_bytes()).await {
            Ok(()) => tokio::fs::rename(&staging, &target).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            if let Err(cleanup) = tokio::fs::remove_file(&staging).await {
                warn!("Could not remove staging file {:?}: {}", staging, cleanup);
            }
            return Err(e.into());
        }

        info!("Wrote {:?} ({} bytes)", target, bytes);
        Ok(SavedArchive {
            filename: filename.to_string(),
            bytes,
            location: Some(target),
        })
    }
}

/// Keeps archives in memory, in the order they were saved
#[derive(Debug, Default)]
pub struct MemorySink {
    saved: Mutex<Vec<(String, ArchiveBlob)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Vec<(String, ArchiveBlob)> {
        self.saved
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl ArchiveSink for MemorySink {
    async fn save(&self, filename: &str, blob: ArchiveBlob) -> ExportResult<SavedArchive> {
        validate_archive_filename(filename)?;
        let bytes = blob.len();
        self.saved
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((filename.to_string(), blob));
        Ok(SavedArchive {
            filename: filename.to_string(),
            bytes,
            location: None,
        })
    }
}
