//! CLI command definitions.

use clap::{ArgGroup, Parser, Subcommand};
use scenebook::ReportFormat;
use std::path::PathBuf;

/// scenebook - Costume and props breakdowns from Fountain screenplays
#[derive(Parser, Debug)]
#[command(name = "scenebook")]
#[command(about = "Costume and props breakdowns from Fountain screenplays", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Episode store to use instead of the configured one
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse Fountain screenplays and append them to the store
    #[command(visible_alias = "addEpisode")]
    AddEpisode {
        /// Screenplay files; the episode name is the file name up to its first dot
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Search stored scenes by performer or location
    #[command(group(ArgGroup::new("axis").required(true).args(["artist", "location"])))]
    Lookup {
        /// Case-insensitive substring of a performer name
        #[arg(long, visible_alias = "performer")]
        artist: Option<String>,

        /// Case-insensitive substring of a scene location
        #[arg(long)]
        location: Option<String>,

        /// Output format (defaults to the configured report_format)
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,

        /// Write the report to a file instead of stdout; without a path,
        /// search_results_<needle>.<ext> in the current directory
        #[arg(long, num_args = 0..=1)]
        output: Option<Option<PathBuf>>,
    },

    /// Render the whole store as a markdown breakdown
    Export {
        /// Write the breakdown to a file instead of stdout; without a path,
        /// formatted_script.md in the current directory
        #[arg(long, num_args = 0..=1)]
        output: Option<Option<PathBuf>>,
    },

    /// List stored episodes with their scene counts
    List,
}
