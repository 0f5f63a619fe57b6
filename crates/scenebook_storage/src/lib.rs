//! Episode storage for scenebook.
//!
//! The store is an ordered collection of [`Episode`] records keyed by their
//! unique name. Ingestion loads it, appends at most one episode and saves it
//! back; queries only read it.
//!
//! # Backends
//!
//! - [`JsonFileStore`]: the `data.json` file, rewritten whole on every save
//! - [`InMemoryStore`]: no persistence, for tests and embedding
//!
//! # Concurrency
//!
//! Load, append and save are not transactional. Two processes ingesting into
//! the same file can each load a stale snapshot, and the last save wins.
//! Only one operation at a time against a given store is supported.
//!
//! # Example
//!
//! ```rust
//! use scenebook_core::Episode;
//! use scenebook_storage::{EpisodeStore, JsonFileStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let mut store = JsonFileStore::new(dir.path().join("data.json"));
//! store.load()?;
//!
//! if !store.contains("ep1") {
//!     store.append(Episode::new("ep1", Vec::new()));
//!     store.save()?;
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod json_file;
mod memory;
mod store;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use store::EpisodeStore;

pub use scenebook_core::Episode;
pub use scenebook_error::{StorageError, StorageErrorKind};
