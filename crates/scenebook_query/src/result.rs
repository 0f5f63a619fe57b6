//! Grouped search results.

use crate::SearchAxis;
use scenebook_core::{Entity, Scene};
use serde::Serialize;

/// One qualifying scene with its entities partitioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneMatch<'a> {
    scene: &'a Scene,
    matched: Vec<&'a Entity>,
    other: Vec<&'a Entity>,
}

impl<'a> SceneMatch<'a> {
    pub(crate) fn new(scene: &'a Scene, matched: Vec<&'a Entity>, other: Vec<&'a Entity>) -> Self {
        Self {
            scene,
            matched,
            other,
        }
    }

    /// The scene as stored.
    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    /// Entities that satisfied the search, in scene order.
    pub fn matched(&self) -> &[&'a Entity] {
        &self.matched
    }

    /// Remaining entities, in scene order.
    pub fn other(&self) -> &[&'a Entity] {
        &self.other
    }

    /// Matched entities followed by the others.
    pub fn ordered_entities(&self) -> impl Iterator<Item = &'a Entity> + '_ {
        self.matched.iter().chain(self.other.iter()).copied()
    }
}

/// The qualifying scenes of one episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeMatches<'a> {
    episode: &'a str,
    scenes: Vec<SceneMatch<'a>>,
}

impl<'a> EpisodeMatches<'a> {
    pub(crate) fn new(episode: &'a str, scenes: Vec<SceneMatch<'a>>) -> Self {
        Self { episode, scenes }
    }

    /// Episode name.
    pub fn episode(&self) -> &'a str {
        self.episode
    }

    /// Qualifying scenes in parse order, never empty.
    pub fn scenes(&self) -> &[SceneMatch<'a>] {
        &self.scenes
    }
}

/// Output of a search, ready for rendering.
///
/// Borrows from the episodes it was computed over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct ResultSet<'a> {
    /// Axis searched
    axis: SearchAxis,
    /// Needle as supplied by the caller
    needle: String,
    /// Episodes with at least one qualifying scene, in store order
    groups: Vec<EpisodeMatches<'a>>,
}

impl<'a> ResultSet<'a> {
    pub(crate) fn new(axis: SearchAxis, needle: String, groups: Vec<EpisodeMatches<'a>>) -> Self {
        Self {
            axis,
            needle,
            groups,
        }
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of qualifying scenes across all episodes.
    pub fn scene_count(&self) -> usize {
        self.groups.iter().map(|group| group.scenes.len()).sum()
    }
}
