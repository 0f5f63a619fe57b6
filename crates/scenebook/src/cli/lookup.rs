//! Lookup command handler.

use scenebook::{
    EpisodeStore, JsonFileStore, ReportFormat, ScenebookResult, SearchAxis,
    report::{render_results, write_report},
    search_store,
};
use std::path::Path;
use tracing::{info, instrument};

/// Search the store and render the results.
#[instrument(skip(store, output), fields(store = %store.path().display()))]
pub fn run_lookup(
    store: &mut JsonFileStore,
    axis: SearchAxis,
    needle: &str,
    format: ReportFormat,
    output: Option<&Path>,
) -> ScenebookResult<()> {
    store.load()?;

    let results = search_store(&*store, axis, needle);
    info!(
        %axis,
        episodes = results.groups().len(),
        scenes = results.scene_count(),
        "Lookup complete"
    );

    let text = render_results(&results, format)?;
    match output {
        Some(path) => {
            write_report(path, &text)?;
            println!("Results saved to {}", path.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}
