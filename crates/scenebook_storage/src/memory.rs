//! In-memory episode store.

use crate::EpisodeStore;
use scenebook_core::Episode;
use scenebook_error::ScenebookResult;
use std::cell::Cell;

/// Store that keeps episodes in memory only.
///
/// `load` keeps the current contents and `save` only counts calls, so tests
/// can assert on persistence behavior without touching the filesystem.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    episodes: Vec<Episode>,
    saves: Cell<usize>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with episodes.
    pub fn with_episodes(episodes: Vec<Episode>) -> Self {
        Self {
            episodes,
            saves: Cell::new(0),
        }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl EpisodeStore for InMemoryStore {
    fn load(&mut self) -> ScenebookResult<()> {
        Ok(())
    }

    fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    fn append(&mut self, episode: Episode) {
        self.episodes.push(episode);
    }

    fn save(&self) -> ScenebookResult<()> {
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
