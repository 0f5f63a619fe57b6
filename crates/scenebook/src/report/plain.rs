//! Indented tree rendering for terminals.

use scenebook_core::{Entity, Scene};
use scenebook_query::{ResultSet, SceneMatch, SearchAxis};

const RULE_WIDTH: usize = 75;
const SPACER: &str = "     ";

/// Renders search results as an indented tree framed by dashed rules.
///
/// Performer results list the matching performers as `artist_name` followed
/// by the rest of the scene as `other_artist_N`. Location results list every
/// performer as `artist_N`.
pub fn render_plain(results: &ResultSet<'_>) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let title = match results.axis() {
        SearchAxis::Performer => "Artist",
        SearchAxis::Location => "Location",
    };

    let mut lines = vec![
        rule.clone(),
        format!(
            "Search Results for {}: {}",
            title,
            results.needle().to_lowercase()
        ),
    ];

    for group in results.groups() {
        lines.push(format!("|_{}", group.episode()));
        for hit in group.scenes() {
            push_scene_header(&mut lines, hit.scene());
            match results.axis() {
                SearchAxis::Performer => push_performer_hit(&mut lines, hit),
                SearchAxis::Location => push_location_hit(&mut lines, hit),
            }
            lines.push(String::new());
        }
    }

    lines.push(rule);
    lines.join("\n")
}

fn push_scene_header(lines: &mut Vec<String>, scene: &Scene) {
    lines.push(format!("    |_synopsis : {}", scene.synopsis()));
    lines.push(format!(
        "    |_scene {} : {}, {}",
        scene.sequence_number(),
        scene.setting_tag(),
        scene.time_of_day()
    ));
}

fn push_performer_hit(lines: &mut Vec<String>, hit: &SceneMatch<'_>) {
    lines.push(format!("        |_location : {}", hit.scene().location()));

    for entity in hit.matched() {
        push_entity(lines, "artist_name", entity);
    }

    for (idx, entity) in hit.other().iter().enumerate() {
        lines.push(SPACER.to_string());
        push_entity(lines, &format!("other_artist_{}", idx + 1), entity);
    }
}

fn push_location_hit(lines: &mut Vec<String>, hit: &SceneMatch<'_>) {
    let total = hit.matched().len();
    for (idx, entity) in hit.matched().iter().enumerate() {
        push_entity(lines, &format!("artist_{}", idx + 1), entity);
        if idx + 1 < total {
            lines.push(SPACER.to_string());
        }
    }
}

fn push_entity(lines: &mut Vec<String>, label: &str, entity: &Entity) {
    lines.push(format!("            |_{} : {}", label, entity.performer()));
    lines.push(format!("                |_costume : {}", entity.costume()));
    lines.push(format!("                |_props : {}", entity.props()));
}
