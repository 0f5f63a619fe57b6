//! Store-level command handlers.

use scenebook::{
    EpisodeStore, JsonFileStore, ScenebookResult, add_episode_file, report::render_store,
    report::write_report,
};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Ingest each file in order, saving the store after every added episode.
#[instrument(skip(store, files), fields(store = %store.path().display(), files = files.len()))]
pub fn add_episodes(store: &mut JsonFileStore, files: &[PathBuf]) -> ScenebookResult<()> {
    let mut added = 0usize;

    for file in files {
        let outcome = add_episode_file(store, file)?;
        if outcome.is_added() {
            added += 1;
        }
        println!("{}", outcome);
    }

    info!(added, total = files.len(), "Ingestion finished");
    Ok(())
}

/// Print each stored episode with its scene and performer counts.
pub fn list_episodes(store: &mut JsonFileStore) -> ScenebookResult<()> {
    store.load()?;

    if store.episodes().is_empty() {
        println!("No episodes in {}", store.path().display());
        return Ok(());
    }

    println!("Episodes in {}:", store.path().display());
    println!("{:-<75}", "");
    for episode in store.episodes() {
        println!(
            "{:<30} {:>5} scenes {:>6} performers",
            episode.name(),
            episode.scenes().len(),
            episode.entity_count()
        );
    }
    println!("{:-<75}", "");
    println!("Total: {} episodes", store.episodes().len());

    Ok(())
}

/// Render the full store as markdown to stdout or a file.
pub fn export_store(store: &mut JsonFileStore, output: Option<&Path>) -> ScenebookResult<()> {
    store.load()?;
    let text = render_store(store.episodes());

    match output {
        Some(path) => {
            write_report(path, &text)?;
            println!("Data exported successfully to {}", path.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}
