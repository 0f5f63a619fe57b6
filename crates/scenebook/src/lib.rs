//! scenebook - costume and props breakdowns from Fountain screenplays.
//!
//! scenebook reads screenplays written in the Fountain plain-text format,
//! extracts every scene together with the performers, costumes and props
//! listed in it, and keeps the result in an append-only JSON store that can
//! be searched by performer or by location.
//!
//! # Screenplay conventions
//!
//! ```text
//! = Synopsis for the next scene
//! EXT. PARK - DAY #12#
//! [JOHN, SUIT, WATCH]
//! [JANE, DRESS]
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use scenebook::{EpisodeStore, IngestOutcome, InMemoryStore, SearchAxis, ingest_text, search_store};
//!
//! let mut store = InMemoryStore::new();
//! let outcome = ingest_text(&mut store, "ep1", "EXT. PARK - DAY #12#\n[JOHN, SUIT, WATCH]\n");
//! assert!(matches!(outcome, IngestOutcome::Added { .. }));
//!
//! let results = search_store(&store, SearchAxis::Performer, "john");
//! assert_eq!(results.scene_count(), 1);
//! ```
//!
//! # Architecture
//!
//! scenebook is organized as a workspace with focused crates:
//!
//! - `scenebook_error` - Error types
//! - `scenebook_core` - Episode, Scene, Entity data model
//! - `scenebook_parser` - Line classification and document parsing
//! - `scenebook_storage` - Episode store trait and backends
//! - `scenebook_query` - Performer and location search
//!
//! This crate re-exports everything and adds ingestion, configuration,
//! report rendering and the `scenebook` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod ingest;
mod logging;
pub mod report;

pub use config::{ReportFormat, ScenebookConfig};
pub use ingest::{IngestOutcome, add_episode_file, episode_name, ingest_file, ingest_text};
pub use logging::init_logging;

// Re-export workspace crates
pub use scenebook_core::*;
pub use scenebook_error::*;
pub use scenebook_parser::{
    LineKind, ParseState, ParsedDocument, classify, decompose_elements, decompose_heading,
    parse_document, parse_episode,
};
pub use scenebook_query::*;
pub use scenebook_storage::{EpisodeStore, InMemoryStore, JsonFileStore};
