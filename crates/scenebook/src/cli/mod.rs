//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the scenebook binary.

mod commands;
mod episodes;
mod lookup;

pub use commands::{Cli, Commands};
pub use episodes::{add_episodes, export_store, list_episodes};
pub use lookup::run_lookup;
