//! Source document error types.

/// Specific error conditions for reading a screenplay document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DocumentErrorKind {
    /// The document could not be opened or read
    #[display("Failed to read screenplay: {}", _0)]
    FileRead(String),
}

/// Error type for source document access.
///
/// # Examples
///
/// ```
/// use scenebook_error::{DocumentError, DocumentErrorKind};
///
/// let err = DocumentError::new(DocumentErrorKind::FileRead("ep1.fountain".to_string()));
/// assert!(format!("{}", err).contains("ep1.fountain"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Document Error: {} at line {} in {}", kind, line, file)]
pub struct DocumentError {
    /// The specific error condition
    pub kind: DocumentErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl DocumentError {
    /// Create a new DocumentError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DocumentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
