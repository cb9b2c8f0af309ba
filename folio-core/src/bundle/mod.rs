//! Packing a generated project into a single zip archive.
//!
//! Archives are deterministic: entries are written in path order, every
//! directory gets an explicit entry ahead of its contents, and all entries
//! carry the zip epoch (1980-01-01 00:00) as their modification time.

pub mod sink;

use std::collections::BTreeMap;
use std::io::{Cursor, Write};

use tracing::{debug, error, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::config::ExportConfig;
use crate::errors::{ExportError, ExportResult};
use crate::export::ProjectFiles;

pub use sink::{validate_archive_filename, ArchiveSink, DirectorySink, MemorySink, SavedArchive};

pub const ZIP_MIME_TYPE: &str = "application/zip";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOptions {
    pub compression_level: i64,
    pub max_entry_bytes: u64,
    pub max_archive_bytes: u64,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self::from(&ExportConfig::default())
    }
}

impl From<&ExportConfig> for BundleOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            compression_level: config.compression_level,
            max_entry_bytes: config.max_entry_bytes,
            max_archive_bytes: config.max_archive_bytes,
        }
    }
}

/// A finished archive, ready to hand to a sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveBlob {
    bytes: Vec<u8>,
    file_count: usize,
}

impl ArchiveBlob {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of file entries, directories excluded
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    pub fn mime_type(&self) -> &'static str {
        ZIP_MIME_TYPE
    }
}

/// A project file set waiting to be archived
#[derive(Debug, Clone)]
pub struct ArchiveBundle {
    files: ProjectFiles,
    options: BundleOptions,
}

impl ArchiveBundle {
    pub fn new(files: ProjectFiles) -> Self {
        Self {
            files,
            options: BundleOptions::default(),
        }
    }

    pub fn with_options(mut self, options: BundleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn files(&self) -> &ProjectFiles {
        &self.files
    }

    /// Build the archive on the calling thread
    pub fn build(&self) -> ExportResult<ArchiveBlob> {
        write_archive(&self.files, &self.options)
    }

    /// Build the archive on tokio's blocking pool
    pub async fn materialize(&self) -> ExportResult<ArchiveBlob> {
        let files = self.files.clone();
        let options = self.options.clone();
        tokio::task::spawn_blocking(move || write_archive(&files, &options))
            .await
            .map_err(|e| ExportError::TaskFailed(e.to_string()))?
    }

    /// Materialize the archive and offer it to `sink` as `filename`.
    ///
    /// The sink is only called once the archive is complete; any failure
    /// before that returns an error without touching the sink.
    pub async fn save(&self, sink: &dyn ArchiveSink, filename: &str) -> ExportResult<SavedArchive> {
        validate_archive_filename(filename)?;
        let blob = self.materialize().await.map_err(|e| {
            error!("Archive for {} could not be built: {}", filename, e);
            e
        })?;
        info!("Saving {} ({} bytes)", filename, blob.len());
        sink.save(filename, blob).await
    }
}

fn validate_entry_path(path: &str) -> ExportResult<()> {
    let malformed = path.is_empty()
        || path.starts_with('/')
        || path.ends_with('/')
        || path.contains('\\')
        || path
            .split('/')
            .any(|part| part.is_empty() || part == "." || part == "..");
    if malformed {
        return Err(ExportError::InvalidEntryPath(path.to_string()));
    }
    Ok(())
}

/// Every path in `files` plus one `dir/` entry per implied directory
fn archive_entries(files: &ProjectFiles) -> BTreeMap<String, Option<&str>> {
    let mut entries = BTreeMap::new();
    for (path, content) in files {
        let mut end = 0;
        while let Some(offset) = path[end..].find('/') {
            end += offset + 1;
            entries.entry(path[..end].to_string()).or_insert(None);
        }
        entries.insert(path.clone(), Some(content.as_str()));
    }
    entries
}

fn write_archive(files: &ProjectFiles, options: &BundleOptions) -> ExportResult<ArchiveBlob> {
    for (path, content) in files {
        validate_entry_path(path)?;
        let size = content.len() as u64;
        if size > options.max_entry_bytes {
            return Err(ExportError::EntryTooLarge {
                path: path.clone(),
                size,
                limit: options.max_entry_bytes,
            });
        }
    }

    let file_options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(options.compression_level))
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);
    let dir_options = file_options.unix_permissions(0o755);

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (path, content) in archive_entries(files) {
        match content {
            None => writer.add_directory(path.as_str(), dir_options)?,
            Some(content) => {
                writer.start_file(path.as_str(), file_options)?;
                writer.write_all(content.as_bytes())?;
            }
        }
    }
    let bytes = writer.finish()?.into_inner();

    let size = bytes.len() as u64;
    if size > options.max_archive_bytes {
        return Err(ExportError::ArchiveTooLarge {
            size,
            limit: options.max_archive_bytes,
        });
    }

    debug!("Archived {} files into {} bytes", files.len(), size);
    Ok(ArchiveBlob {
        bytes,
        file_count: files.len(),
    })
}
