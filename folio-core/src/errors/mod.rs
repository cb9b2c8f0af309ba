//! Domain-specific error types for folio-core
//!
//! # Error Categories
//!
//! - **ExportError**: project generation, archive construction and saving
//! - **EditError**: rejected editing operations on a portfolio record
//!
//! Missing record fields and unknown theme identifiers are not errors: the
//! normalizer fills defaults and the dispatcher falls back to the canonical
//! theme. Archive construction is the only fatal export failure.
//!
//! # Examples
//!
//! ```rust
//! use folio::errors::{EditError, ExportError};
//!
//! let err = ExportError::InvalidFilename("portfolio.tar".to_string());
//! assert!(err.is_client_error());
//!
//! let err = EditError::IndexOutOfRange {
//!     collection: "projects",
//!     index: 3,
//!     len: 1,
//! };
//! assert_eq!(err.to_string(), "Index 3 is out of range for projects (length 1)");
//! ```

pub mod edit;
pub mod export;

pub use edit::EditError;
pub use export::ExportError;

/// Result type alias for generation and archive operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type alias for record edits
pub type EditResult<T> = Result<T, EditError>;
