//! scenebook CLI binary.
//!
//! This binary provides command-line access to scenebook's functionality:
//! - Ingest Fountain screenplays into the episode store
//! - Look up scenes by performer or location
//! - Export the store as a markdown breakdown

use clap::Parser;
use scenebook::{JsonFileStore, ScenebookConfig, SearchAxis, init_logging, report};

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, add_episodes, export_store, list_episodes, run_lookup};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Load configuration, then let flags override it
    let config = ScenebookConfig::load()?;
    init_logging(cli.verbose, &config.log_level)
        .map_err(|e| format!("Failed to initialize logging: {}", e))?;

    let store_path = cli.store.unwrap_or_else(|| config.store_path.clone());
    tracing::debug!(store = %store_path.display(), "Using episode store");
    let mut store = JsonFileStore::new(store_path);

    // Execute the requested command
    match cli.command {
        Commands::AddEpisode { files } => {
            add_episodes(&mut store, &files)?;
        }

        Commands::Lookup {
            artist,
            location,
            format,
            output,
        } => {
            let (axis, needle) = match (artist, location) {
                (Some(name), _) => (SearchAxis::Performer, name),
                (None, Some(place)) => (SearchAxis::Location, place),
                (None, None) => return Err("one of --artist or --location is required".into()),
            };
            let format = format.unwrap_or(config.report_format);
            let output = output.map(|path| {
                path.unwrap_or_else(|| report::default_results_path(&needle, format))
            });
            run_lookup(&mut store, axis, &needle, format, output.as_deref())?;
        }

        Commands::Export { output } => {
            let output = output.map(|path| path.unwrap_or_else(report::default_export_path));
            export_store(&mut store, output.as_deref())?;
        }

        Commands::List => {
            list_episodes(&mut store)?;
        }
    }

    Ok(())
}
