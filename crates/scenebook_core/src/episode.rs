//! Episodes: one per ingested screenplay.

use crate::Scene;
use serde::{Deserialize, Serialize};

/// The structured record of one screenplay document.
///
/// # Examples
///
/// ```
/// use scenebook_core::Episode;
///
/// let episode = Episode::new("ep1", Vec::new());
/// assert_eq!(episode.name(), "ep1");
/// assert!(episode.scenes().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Episode {
    /// Unique name, the source file name up to its first dot
    #[serde(rename = "episode")]
    name: String,
    /// Scenes in document order
    #[serde(default)]
    scenes: Vec<Scene>,
}

impl Episode {
    /// Creates an episode from its parsed scenes.
    pub fn new(name: impl Into<String>, scenes: Vec<Scene>) -> Self {
        Self {
            name: name.into(),
            scenes,
        }
    }

    /// Total number of performer appearances across all scenes.
    pub fn entity_count(&self) -> usize {
        self.scenes.iter().map(|scene| scene.entities().len()).sum()
    }
}
