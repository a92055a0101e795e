//! Custom error types and result handling for mangarn operations.
//!
//! Every fallible operation returns a [`Result<T>`], a type alias for
//! `std::result::Result<T, Error>`. The parser itself never fails except for
//! [`Error::TitleNotFound`]; every other variant is raised by the grouping stage
//! or by I/O while scanning and writing archives.
//!
use std::path::PathBuf;

use crate::types::Field;

/// Type alias for Results with mangarn errors.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all mangarn operations.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O errors from the standard library
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// ZIP file operation errors
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
    #[error(transparent)]
    Builder(#[from] crate::mangarn::MangarnConfigBuilderError),
    /// No title could be inferred from the file name
    #[error("unable to parse title from file name '{0}'")]
    TitleNotFound(String),
    /// A file in the run belongs to a different series than the first one
    #[error("title mismatch: expected '{expected}', got '{found}' (source: {file_name})")]
    TitleMismatch {
        expected: String,
        found: String,
        file_name: String,
    },
    /// A field required for archiving could not be determined
    #[error("unable to determine {field} (source: {file_name})")]
    FieldUndetermined { field: Field, file_name: String },
    /// Two pages would be stored under the same entry name in one archive
    #[error("duplicate page '{entry}' in archive '{archive}'")]
    DuplicatePage { archive: String, entry: String },
    /// The source directory contained no pages
    #[error("no pages found")]
    NoPages,
    /// Error for invalid file or directory paths
    #[error("The given path '{0:?}' is invalid: {1}")]
    InvalidPath(PathBuf, String),
    /// Error for failed asynchronous tasks
    #[error("Asynchronous task failed: {0}")]
    AsyncTaskError(String),
    /// Error for resources that couldn't be found (e.g., source directory)
    #[error("Not found: {0}")]
    NotFound(String),
}

#[cfg(feature = "serde")]
impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}
