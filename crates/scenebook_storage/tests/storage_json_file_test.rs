//! Tests for the JSON file store backend.

use scenebook_core::{Entity, Episode, Heading, Scene, SettingTag};
use scenebook_storage::{EpisodeStore, JsonFileStore};
use tempfile::TempDir;

fn sample_episode(name: &str) -> Episode {
    let mut scene = Scene::new(
        1,
        "EXT. PARC - JOUR #1#",
        "Zoé attend",
        Heading::new(SettingTag::Ext, "PARC", "JOUR", "#1#"),
    );
    scene.push_entity(Entity::new("ZOÉ", "ROBE", "PARAPLUIE"));
    Episode::new(name, vec![scene])
}

#[test]
fn test_missing_file_loads_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(temp_dir.path().join("data.json")).unwrap();

    assert!(store.episodes().is_empty());
}

#[test]
fn test_corrupt_file_loads_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");
    std::fs::write(&path, "[{\"episode\": \"ep1\", ").unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    assert!(store.episodes().is_empty());
}

#[test]
fn test_empty_file_loads_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");
    std::fs::write(&path, "").unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    assert!(store.episodes().is_empty());
}

#[test]
fn test_wrong_shape_loads_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");
    std::fs::write(&path, r#"{"episode": "ep1"}"#).unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    assert!(store.episodes().is_empty());
}

#[test]
fn test_save_then_load_preserves_order_and_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.append(sample_episode("ep2"));
    store.append(sample_episode("ep1"));
    store.save().unwrap();

    let reloaded = JsonFileStore::open(&path).unwrap();
    let names: Vec<&str> = reloaded
        .episodes()
        .iter()
        .map(|episode| episode.name().as_str())
        .collect();
    assert_eq!(names, vec!["ep2", "ep1"]);
    assert_eq!(reloaded.episodes()[0], sample_episode("ep2"));
}

#[test]
fn test_save_writes_four_space_indent_and_raw_unicode() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");

    let mut store = JsonFileStore::new(&path);
    store.append(sample_episode("ep1"));
    store.save().unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("[\n    {\n        \"episode\": \"ep1\""));
    assert!(text.contains("\"artist\": \"ZOÉ\""));
    assert!(text.contains("\"TOD\": \"JOUR\""));
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested/dir/data.json");

    let mut store = JsonFileStore::new(&path);
    store.append(sample_episode("ep1"));
    store.save().unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn test_save_replaces_prior_contents() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");

    let mut first = JsonFileStore::new(&path);
    first.append(sample_episode("ep1"));
    first.save().unwrap();

    let mut second = JsonFileStore::new(&path);
    second.append(sample_episode("ep9"));
    second.save().unwrap();

    let reloaded = JsonFileStore::open(&path).unwrap();
    assert_eq!(reloaded.episodes().len(), 1);
    assert!(reloaded.contains("ep9"));
    assert!(!reloaded.contains("ep1"));
}

#[test]
fn test_contains_is_exact_and_case_sensitive() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = JsonFileStore::new(temp_dir.path().join("data.json"));
    store.append(sample_episode("Ep1"));

    assert!(store.contains("Ep1"));
    assert!(!store.contains("ep1"));
    assert!(!store.contains("Ep"));
}

#[test]
fn test_append_does_not_enforce_uniqueness() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = JsonFileStore::new(temp_dir.path().join("data.json"));
    store.append(sample_episode("ep1"));
    store.append(sample_episode("ep1"));

    assert_eq!(store.episodes().len(), 2);
}

#[test]
fn test_unreadable_path_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    // A directory where the file should be cannot be read as a file.
    let result = JsonFileStore::open(temp_dir.path());

    assert!(result.is_err());
}
