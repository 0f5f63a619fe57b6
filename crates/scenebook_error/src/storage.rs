//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create the directory holding the store file
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write the store file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Failed to read the store file for a reason other than absence
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// Failed to serialize the episode collection
    #[display("Failed to encode store: {}", _0)]
    Encode(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use scenebook_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::FileRead("data.json: permission denied".to_string()));
/// assert!(format!("{}", err).contains("permission denied"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
