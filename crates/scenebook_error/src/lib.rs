//! Error types for scenebook.
//!
//! This crate provides the error types shared by every scenebook crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Expected outcomes (a duplicate episode, a search with no hits, a malformed
//! line in a screenplay) are plain values and never show up here. Only
//! conditions the caller cannot recover from in-band are errors.
//!
//! # Examples
//!
//! ```
//! use scenebook_error::{ScenebookResult, StorageError, StorageErrorKind};
//!
//! fn save_data() -> ScenebookResult<()> {
//!     Err(StorageError::new(StorageErrorKind::FileWrite("data.json: read-only".to_string())))?
//! }
//!
//! match save_data() {
//!     Ok(()) => println!("Saved"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod document;
mod error;
mod json;
mod report;
mod storage;

pub use config::ConfigError;
pub use document::{DocumentError, DocumentErrorKind};
pub use error::{ScenebookError, ScenebookErrorKind, ScenebookResult};
pub use json::JsonError;
pub use report::ReportError;
pub use storage::{StorageError, StorageErrorKind};
