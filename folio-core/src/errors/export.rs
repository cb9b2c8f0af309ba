//! Export error types
//!
//! Errors raised while rendering a theme, building the project archive or
//! handing it to an archive sink.
//!
//! # Examples
//!
//! ```rust
//! use folio::errors::ExportError;
//!
//! let err = ExportError::EntryTooLarge {
//!     path: "app/page.tsx".to_string(),
//!     size: 12,
//!     limit: 8,
//! };
//! assert!(err.to_string().contains("app/page.tsx"));
//! ```

use thiserror::Error;

/// Export operation errors
#[derive(Error, Debug)]
pub enum ExportError {
    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    TemplateError(String),

    /// Template not embedded in the crate
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Zip archive could not be written
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// A single archive entry exceeds the configured limit
    #[error("Entry '{path}' is {size} bytes, limit is {limit} bytes")]
    EntryTooLarge { path: String, size: u64, limit: u64 },

    /// The archive as a whole exceeds the configured limit
    #[error("Archive is {size} bytes, limit is {limit} bytes")]
    ArchiveTooLarge { size: u64, limit: u64 },

    /// Entry path is empty, absolute or escapes the archive root
    #[error("Invalid archive entry path: {0}")]
    InvalidEntryPath(String),

    /// Download filename is not a bare `.zip` file name
    #[error("Invalid archive filename '{0}': expected a file name ending in .zip")]
    InvalidFilename(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Background archive task did not complete
    #[error("Archive task failed: {0}")]
    TaskFailed(String),
}

impl ExportError {
    /// Errors caused by caller input rather than by the engine itself
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExportError::EntryTooLarge { .. }
                | ExportError::ArchiveTooLarge { .. }
                | ExportError::InvalidEntryPath(_)
                | ExportError::InvalidFilename(_)
                | ExportError::InvalidConfiguration(_)
        )
    }
}

impl From<handlebars::RenderError> for ExportError {
    fn from(err: handlebars::RenderError) -> Self {
        ExportError::TemplateError(err.to_string())
    }
}

impl From<handlebars::TemplateError> for ExportError {
    fn from(err: handlebars::TemplateError) -> Self {
        ExportError::TemplateError(err.to_string())
    }
}
