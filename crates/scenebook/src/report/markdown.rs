//! Markdown task-list rendering.

use scenebook_core::{Entity, Episode, Scene};
use scenebook_query::{ResultSet, SceneMatch, SearchAxis};

/// Renders search results as markdown, one task item per scene.
///
/// Entities are numbered `artist_1`, `artist_2`, ... with matched performers
/// first. Performer results put a space before the colon of every entry after
/// the first.
pub fn render_markdown(results: &ResultSet<'_>) -> String {
    let mut lines = vec![format!("## search results for \"{}\"", results.needle())];

    for group in results.groups() {
        lines.push(format!("\n# {}", group.episode()));
        for hit in group.scenes() {
            match results.axis() {
                SearchAxis::Performer => push_performer_hit(&mut lines, hit),
                SearchAxis::Location => push_location_hit(&mut lines, hit),
            }
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// Renders every stored episode as a markdown breakdown.
///
/// # Examples
///
/// ```
/// use scenebook::{EpisodeStore, InMemoryStore, ingest_text};
/// use scenebook::report::render_store;
///
/// let mut store = InMemoryStore::new();
/// ingest_text(&mut store, "ep1", "= Opening\nEXT. PARK - DAY #12#\n[JOHN, SUIT, WATCH]\n");
///
/// let text = render_store(store.episodes());
/// assert!(text.starts_with("# EP ep1\n"));
/// assert!(text.contains("\t- artist_1 : JOHN"));
/// ```
pub fn render_store(episodes: &[Episode]) -> String {
    let mut lines = Vec::new();

    for episode in episodes {
        lines.push(format!("# EP {}\n", episode.name()));
        lines.push("## scenes :\n".to_string());

        for scene in episode.scenes() {
            lines.push(format!("- [ ] Scene {}:  ", scene.sequence_number()));
            push_scene_fields(&mut lines, scene);
            lines.push("\tArtists  ".to_string());
            for (idx, entity) in scene.entities().iter().enumerate() {
                push_entity(&mut lines, &format!("artist_{} :", idx + 1), entity);
            }
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

fn push_scene_fields(lines: &mut Vec<String>, scene: &Scene) {
    lines.push(format!("\tSynopsis : {}  ", scene.synopsis()));
    lines.push(format!("\t\tlocation : {}  ", scene.location()));
    lines.push(format!("\t\tsetting : {}  ", scene.setting_tag().bare()));
    lines.push(format!("\t\tTOD : {}  ", scene.time_of_day()));
}

fn push_performer_hit(lines: &mut Vec<String>, hit: &SceneMatch<'_>) {
    let scene = hit.scene();
    lines.push(format!("- [ ] Scene {} :  ", scene.sequence_number()));
    push_scene_fields(lines, scene);
    push_numbered_entities(lines, hit, |idx| {
        if idx == 1 {
            "artist_1:".to_string()
        } else {
            format!("artist_{} :", idx)
        }
    });
}

fn push_location_hit(lines: &mut Vec<String>, hit: &SceneMatch<'_>) {
    let scene = hit.scene();
    lines.push(format!("- [ ] Scene {}", scene.sequence_number()));
    lines.push(format!("  Synopsis: {}  ", scene.synopsis()));
    push_numbered_entities(lines, hit, |idx| format!("artist_{}:", idx));
}

fn push_numbered_entities(
    lines: &mut Vec<String>,
    hit: &SceneMatch<'_>,
    label: impl Fn(usize) -> String,
) {
    lines.push("\n\t Artists  ".to_string());
    for (idx, entity) in hit.ordered_entities().enumerate() {
        if idx > 0 {
            lines.push(String::new());
        }
        push_entity(lines, &label(idx + 1), entity);
    }
}

fn push_entity(lines: &mut Vec<String>, label: &str, entity: &Entity) {
    lines.push(format!("\t- {} {}", label, entity.performer()));
    lines.push(format!("\t\t- costume : {}", entity.costume()));
    lines.push(format!("\t\t- props : {}", entity.props()));
}
