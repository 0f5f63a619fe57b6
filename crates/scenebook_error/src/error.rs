//! Top-level error wrapper types.

use crate::{ConfigError, DocumentError, JsonError, ReportError, StorageError};

/// Every error condition a scenebook operation can surface.
///
/// # Examples
///
/// ```
/// use scenebook_error::{ConfigError, ScenebookError};
///
/// let err: ScenebookError = ConfigError::new("store_path is empty").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScenebookErrorKind {
    /// Persisted store could not be read or written
    #[from(StorageError)]
    Storage(StorageError),
    /// Source screenplay could not be read
    #[from(DocumentError)]
    Document(DocumentError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Rendered report could not be written
    #[from(ReportError)]
    Report(ReportError),
}

/// Scenebook error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scenebook_error::{DocumentError, DocumentErrorKind, ScenebookErrorKind, ScenebookResult};
///
/// fn read_script() -> ScenebookResult<String> {
///     Err(DocumentError::new(DocumentErrorKind::FileRead("ep1.fountain: not found".to_string())))?
/// }
///
/// let err = read_script().unwrap_err();
/// assert!(matches!(err.kind(), ScenebookErrorKind::Document(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scenebook Error: {}", _0)]
pub struct ScenebookError(Box<ScenebookErrorKind>);

impl ScenebookError {
    /// Create a new error from a kind.
    pub fn new(kind: ScenebookErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScenebookErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ScenebookErrorKind
impl<T> From<T> for ScenebookError
where
    T: Into<ScenebookErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for scenebook operations.
pub type ScenebookResult<T> = std::result::Result<T, ScenebookError>;
