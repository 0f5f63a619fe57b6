use scenebook_core::{Entity, SettingTag};
use scenebook_parser::{LineKind, classify, parse_document, parse_episode};

const SCRIPT: &str = "\
Title: The Park

= John waits for Jane
EXT. PARK - DAY #1#

John paces by the fountain.
[JOHN, SUIT, WATCH]
[JANE, DRESS]

JOHN
You're late.

INT. HALL - NIGHT
[GHOST, SHEET]

= Storm
= The storm breaks
INT/EXT. CAR - NIGHT #3#
[JANE, RAINCOAT, UMBRELLA]

= Never used
";

#[test]
fn test_scenes_follow_document_order() {
    let episode = parse_episode("ep1", SCRIPT);

    assert_eq!(episode.name(), "ep1");
    let numbers: Vec<u32> = episode
        .scenes()
        .iter()
        .map(|scene| *scene.sequence_number())
        .collect();
    assert_eq!(numbers, vec![1, 3]);
}

#[test]
fn test_malformed_heading_leaves_a_numbering_gap() {
    let parsed = parse_document("ep1", SCRIPT);

    assert_eq!(*parsed.headings_seen(), 3);
    assert_eq!(parsed.episode().scenes().len(), 2);
    assert_eq!(parsed.skipped_headings(), 1);
}

#[test]
fn test_elements_after_malformed_heading_go_to_previous_scene() {
    let episode = parse_episode("ep1", SCRIPT);
    let first = &episode.scenes()[0];

    assert_eq!(
        first.entities(),
        &vec![
            Entity::new("JOHN", "SUIT", "WATCH"),
            Entity::new("JANE", "DRESS", ""),
            Entity::new("GHOST", "SHEET", ""),
        ]
    );
}

#[test]
fn test_synopsis_is_consumed_once_and_latest_wins() {
    let episode = parse_episode("ep1", SCRIPT);
    let scenes = episode.scenes();

    assert_eq!(scenes[0].synopsis(), "John waits for Jane");
    assert_eq!(scenes[1].synopsis(), "The storm breaks");
}

#[test]
fn test_synopsis_survives_a_malformed_heading() {
    let script = "= Setup\nEXT. NOWHERE\nEXT. PARK - DAY #1#\nINT. HALL - DAY #2#\n";
    let episode = parse_episode("ep", script);

    assert_eq!(episode.scenes()[0].synopsis(), "Setup");
    assert_eq!(episode.scenes()[1].synopsis(), "");
}

#[test]
fn test_heading_fields_are_decomposed() {
    let episode = parse_episode("ep1", SCRIPT);
    let car = &episode.scenes()[1];

    assert_eq!(car.heading_text(), "INT/EXT. CAR - NIGHT #3#");
    assert_eq!(*car.setting_tag(), SettingTag::IntExt);
    assert_eq!(car.location(), "CAR");
    assert_eq!(car.time_of_day(), "NIGHT");
    assert_eq!(car.identifier(), "#3#");
}

#[test]
fn test_elements_before_first_scene_are_dropped() {
    let script = "[EARLY, COAT]\nEXT. PARK - DAY #1#\n[JOHN, SUIT]\n";
    let episode = parse_episode("ep", script);

    assert_eq!(episode.entity_count(), 1);
    assert_eq!(episode.scenes()[0].entities()[0].performer(), "JOHN");
}

#[test]
fn test_elements_before_any_well_formed_heading_are_dropped() {
    let script = "EXT. PARK\n[JOHN, SUIT]\n";
    let parsed = parse_document("ep", script);

    assert!(parsed.episode().scenes().is_empty());
    assert_eq!(*parsed.headings_seen(), 1);
}

#[test]
fn test_counter_matches_scene_start_lines() {
    let lines = [
        "EXT. A - DAY #1#",
        "INT. B",
        "EXT/INT. C - DUSK #2#",
        "INT/EXT. D - X",
        "EXT.E - DAY #3#",
        "= EXT. F - DAY #4#",
        "INT. G - NIGHT #5#",
    ];
    let script = lines.join("\n");
    let gate_matches = lines
        .iter()
        .filter(|line| matches!(classify(line), LineKind::SceneStart(_)))
        .count() as u32;

    let parsed = parse_document("ep", &script);
    assert_eq!(*parsed.headings_seen(), gate_matches);
    assert_eq!(gate_matches, 5);
    assert_eq!(parsed.episode().scenes().len(), 3);
}

#[test]
fn test_crlf_line_endings_parse_like_lf() {
    let script = "= Sync\r\nEXT. PARK - DAY #1#\r\n[JOHN, SUIT, WATCH]\r\n";
    let episode = parse_episode("ep", script);
    let scene = &episode.scenes()[0];

    assert_eq!(scene.heading_text(), "EXT. PARK - DAY #1#");
    assert_eq!(scene.synopsis(), "Sync");
    assert_eq!(scene.entities()[0].props(), "WATCH");
}

#[test]
fn test_empty_document_yields_empty_episode() {
    let parsed = parse_document("blank", "");

    assert_eq!(parsed.episode().name(), "blank");
    assert!(parsed.episode().scenes().is_empty());
    assert_eq!(*parsed.headings_seen(), 0);
}

#[test]
fn test_cr_only_line_endings_parse_like_lf() {
    let parsed = parse_document("ep", "= Sync\rEXT. PARK - DAY #1#\r[JOHN, SUIT]\r");

    assert_eq!(*parsed.headings_seen(), 1);
    let scene = &parsed.episode().scenes()[0];
    assert_eq!(scene.heading_text(), "EXT. PARK - DAY #1#");
    assert_eq!(scene.synopsis(), "Sync");
    assert_eq!(scene.entities()[0], Entity::new("JOHN", "SUIT", ""));
}

#[test]
fn test_trailing_bare_cr_does_not_break_the_last_heading() {
    let parsed = parse_document("ep", "[X]\nEXT. PARK - DAY #1#\r");

    assert_eq!(*parsed.headings_seen(), 1);
    assert_eq!(parsed.episode().scenes().len(), 1);
    assert_eq!(parsed.episode().scenes()[0].identifier(), "#1#");
}
