//! Store trait definition.

use scenebook_core::Episode;
use scenebook_error::ScenebookResult;

/// An ordered collection of episodes with load/save persistence.
///
/// The store does not enforce name uniqueness on [`append`](Self::append);
/// callers check [`contains`](Self::contains) first.
pub trait EpisodeStore {
    /// Replaces the in-memory collection with the persisted one.
    ///
    /// Missing or corrupt persisted data loads as an empty collection rather
    /// than an error.
    ///
    /// # Errors
    ///
    /// Returns an error only when persisted data exists but cannot be read.
    fn load(&mut self) -> ScenebookResult<()>;

    /// Episodes in insertion order.
    fn episodes(&self) -> &[Episode];

    /// Whether an episode with exactly this name is present.
    fn contains(&self, name: &str) -> bool {
        self.episodes().iter().any(|episode| episode.name() == name)
    }

    /// Adds an episode after all existing ones.
    fn append(&mut self, episode: Episode);

    /// Writes the whole collection, replacing any prior persisted state.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be encoded or written.
    fn save(&self) -> ScenebookResult<()>;
}
