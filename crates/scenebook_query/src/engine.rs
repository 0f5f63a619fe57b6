//! Search evaluation.

use crate::{EpisodeMatches, ResultSet, SceneMatch, SearchAxis};
use scenebook_core::{Episode, Scene};
use scenebook_storage::EpisodeStore;
use tracing::{debug, instrument};

/// Searches `episodes` for `needle` along `axis`.
///
/// Matching is a case-insensitive substring test. An empty needle matches
/// everything. No match is an empty result set, not an error.
///
/// # Examples
///
/// ```
/// use scenebook_core::{Entity, Episode, Heading, Scene, SettingTag};
/// use scenebook_query::{SearchAxis, search};
///
/// let mut scene = Scene::new(1, "EXT. PARK - DAY #1#", "",
///     Heading::new(SettingTag::Ext, "PARK", "DAY", "#1#"));
/// scene.push_entity(Entity::new("JOHN", "SUIT", "WATCH"));
/// scene.push_entity(Entity::new("JANE", "DRESS", ""));
/// let episodes = vec![Episode::new("ep1", vec![scene])];
///
/// let results = search(&episodes, SearchAxis::Performer, "john");
/// let hit = &results.groups()[0].scenes()[0];
/// assert_eq!(hit.matched()[0].performer(), "JOHN");
/// assert_eq!(hit.other()[0].performer(), "JANE");
/// ```
#[instrument(skip(episodes), fields(episodes = episodes.len()))]
pub fn search<'a>(episodes: &'a [Episode], axis: SearchAxis, needle: &str) -> ResultSet<'a> {
    let lowered = needle.to_lowercase();

    let groups: Vec<EpisodeMatches<'a>> = episodes
        .iter()
        .filter_map(|episode| {
            let scenes: Vec<SceneMatch<'a>> = episode
                .scenes()
                .iter()
                .filter_map(|scene| match axis {
                    SearchAxis::Performer => performer_match(scene, &lowered),
                    SearchAxis::Location => location_match(scene, &lowered),
                })
                .collect();

            (!scenes.is_empty()).then(|| EpisodeMatches::new(episode.name(), scenes))
        })
        .collect();

    let results = ResultSet::new(axis, needle.to_string(), groups);
    debug!(
        groups = results.groups().len(),
        scenes = results.scene_count(),
        "Search complete"
    );
    results
}

/// Searches the episodes currently held by `store`.
pub fn search_store<'a, S>(store: &'a S, axis: SearchAxis, needle: &str) -> ResultSet<'a>
where
    S: EpisodeStore + ?Sized,
{
    search(store.episodes(), axis, needle)
}

fn performer_match<'a>(scene: &'a Scene, needle: &str) -> Option<SceneMatch<'a>> {
    let (matched, other): (Vec<_>, Vec<_>) = scene
        .entities()
        .iter()
        .partition(|entity| entity.performer_contains(needle));

    (!matched.is_empty()).then(|| SceneMatch::new(scene, matched, other))
}

fn location_match<'a>(scene: &'a Scene, needle: &str) -> Option<SceneMatch<'a>> {
    scene
        .location_contains(needle)
        .then(|| SceneMatch::new(scene, scene.entities().iter().collect(), Vec::new()))
}
