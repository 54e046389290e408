use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors surfaced by file-level document operations.
///
/// Edit operations never fail; out-of-range indices are silently ignored.
pub enum EditorError {
    #[error("{}: {source}", path.display())]
    /// Reading or writing a file failed.
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    #[error("no filename")]
    /// A save was requested for a document that has never been named.
    NoFilename,

    #[error("unsaved changes")]
    /// Replacing the document was refused because it has unsaved changes.
    UnsavedChanges,
}

/// Result alias for fallible document operations.
pub type Result<T> = std::result::Result<T, EditorError>;
