//! JSON file episode store.
//!
//! The whole collection lives in one pretty-printed JSON array, the format
//! established by earlier versions of the tool:
//!
//! ```text
//! [
//!     {
//!         "episode": "ep1",
//!         "scenes": [ { "scene_number": 1, "scene_heading": "...", ... } ]
//!     }
//! ]
//! ```

use crate::EpisodeStore;
use scenebook_core::Episode;
use scenebook_error::{ScenebookResult, StorageError, StorageErrorKind};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Store persisted as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    episodes: Vec<Episode>,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            episodes: Vec::new(),
        }
    }

    /// Create a store and load it immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> ScenebookResult<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encodes episodes with four-space indentation and raw non-ASCII text.
    fn encode(episodes: &[Episode]) -> ScenebookResult<Vec<u8>> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        episodes.serialize(&mut serializer).map_err(|e| {
            StorageError::new(StorageErrorKind::Encode(e.to_string()))
        })?;
        Ok(buffer)
    }
}

impl EpisodeStore for JsonFileStore {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&mut self) -> ScenebookResult<()> {
        let data = match std::fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No store file yet, starting empty");
                self.episodes = Vec::new();
                return Ok(());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        // Corrupt data is treated as an empty store, never as an error.
        self.episodes = match serde_json::from_slice::<Vec<Episode>>(&data) {
            Ok(episodes) => episodes,
            Err(e) => {
                tracing::warn!(error = %e, "Store file is corrupt, treating as empty");
                Vec::new()
            }
        };

        tracing::debug!(episodes = self.episodes.len(), "Loaded store");
        Ok(())
    }

    fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    fn append(&mut self, episode: Episode) {
        self.episodes.push(episode);
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display(), episodes = self.episodes.len()))]
    fn save(&self) -> ScenebookResult<()> {
        let data = Self::encode(&self.episodes)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, &data).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!(bytes = data.len(), "Saved store");
        Ok(())
    }
}
