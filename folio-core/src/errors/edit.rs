//! Editing error types

use thiserror::Error;

/// Errors raised when an edit cannot be applied to a portfolio record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Indexed update or delete outside the sequence
    #[error("Index {index} is out of range for {collection} (length {len})")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },
}
