//! Tests for plain and markdown report rendering.

use scenebook::report::{
    default_export_path, default_results_path, render_markdown, render_plain, render_results,
    render_store, write_report,
};
use scenebook::{EpisodeStore, InMemoryStore, ReportFormat, SearchAxis, ingest_text, search_store};
use std::path::PathBuf;

const EP1: &str = "\
= John waits
EXT. PARK - DAY #1#
[JOHN, SUIT, WATCH]
[JANE, DRESS]

INT. HALL - NIGHT #2#
[GHOST, SHEET]
";

const EP2: &str = "\
INT/EXT. CAR - NIGHT #5#
[JOHNNY, JACKET, KEYS]
[JOHN, RAINCOAT, UMBRELLA]
";

fn store() -> InMemoryStore {
    let mut store = InMemoryStore::new();
    ingest_text(&mut store, "ep1", EP1);
    ingest_text(&mut store, "ep2", EP2);
    store
}

#[test]
fn test_plain_performer_report() {
    let store = store();
    let results = search_store(&store, SearchAxis::Performer, "Jane");

    let expected = [
        "-".repeat(75).as_str(),
        "Search Results for Artist: jane",
        "|_ep1",
        "    |_synopsis : John waits",
        "    |_scene 1 : EXT., DAY",
        "        |_location : PARK",
        "            |_artist_name : JANE",
        "                |_costume : DRESS",
        "                |_props : ",
        "     ",
        "            |_other_artist_1 : JOHN",
        "                |_costume : SUIT",
        "                |_props : WATCH",
        "",
        "-".repeat(75).as_str(),
    ]
    .join("\n");

    assert_eq!(render_plain(&results), expected);
}

#[test]
fn test_plain_lists_every_matching_performer() {
    let store = store();
    let results = search_store(&store, SearchAxis::Performer, "john");

    let text = render_plain(&results);

    assert!(text.contains("|_ep1"));
    assert!(text.contains("|_ep2"));
    assert!(text.contains("|_artist_name : JOHNNY"));
    assert!(text.contains("|_artist_name : JOHN\n"));
    assert!(!text.contains("other_artist_1 : JOHN"));
}

#[test]
fn test_markdown_performer_report() {
    let store = store();
    let results = search_store(&store, SearchAxis::Performer, "jane");

    let text = render_markdown(&results);

    assert!(text.starts_with("## search results for \"jane\"\n\n# ep1\n- [ ] Scene 1 :  "));
    assert!(text.contains("\t\tsetting : EXT  "));
    assert!(text.contains("\t\tTOD : DAY  "));
    assert!(text.contains("\t- artist_1: JANE\n\t\t- costume : DRESS\n\t\t- props : "));
    assert!(text.contains("\t- artist_2 : JOHN"));
    assert!(!text.contains("ep2"));
}

#[test]
fn test_markdown_location_report() {
    let store = store();
    let results = search_store(&store, SearchAxis::Location, "car");

    let text = render_markdown(&results);

    assert!(text.contains("# ep2\n- [ ] Scene 1\n  Synopsis:   "));
    assert!(text.contains("\t- artist_1: JOHNNY"));
    assert!(text.contains("\t- artist_2: JOHN"));
}

#[test]
fn test_json_report_is_structured() {
    let store = store();
    let results = search_store(&store, SearchAxis::Location, "hall");

    let text = render_results(&results, ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["axis"], "location");
    assert_eq!(value["groups"][0]["episode"], "ep1");
    assert_eq!(value["groups"][0]["scenes"][0]["scene"]["scene_number"], 2);
    assert_eq!(
        value["groups"][0]["scenes"][0]["matched"][0]["artist"],
        "GHOST"
    );
}

#[test]
fn test_store_dump() {
    let store = store();

    let text = render_store(store.episodes());

    assert!(text.starts_with("# EP ep1\n\n## scenes :\n\n- [ ] Scene 1:  \n"));
    assert!(text.contains("\tArtists  \n\t- artist_1 : JOHN\n\t\t- costume : SUIT\n\t\t- props : WATCH"));
    assert!(text.contains("# EP ep2\n"));
    assert!(text.contains("\t\tsetting : INT/EXT  "));
}

#[test]
fn test_store_dump_of_empty_store() {
    assert_eq!(render_store(&[]), "");
}

#[test]
fn test_write_report_creates_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports/john.md");

    write_report(&path, "## search results for \"john\"").unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "## search results for \"john\""
    );
}

#[test]
fn test_markdown_performer_numbering_with_several_matches() {
    let store = store();
    let results = search_store(&store, SearchAxis::Performer, "john");

    let text = render_markdown(&results);

    assert!(text.contains("# ep2\n- [ ] Scene 1 :  "));
    assert!(text.contains("\t- artist_1: JOHNNY"));
    assert!(text.contains("\t- artist_2 : JOHN\n"));
}

#[test]
fn test_default_report_paths() {
    assert_eq!(
        default_results_path("Jane", ReportFormat::Plain),
        PathBuf::from("search_results_jane.txt")
    );
    assert_eq!(
        default_results_path("car/park", ReportFormat::Json),
        PathBuf::from("search_results_car_park.json")
    );
    assert_eq!(default_export_path(), PathBuf::from("formatted_script.md"));
}
