//! Rendering search results and store dumps as text.
//!
//! Renderers build their output as a list of lines joined with `\n`; none of
//! them touch the filesystem. [`write_report`] does that separately.

mod markdown;
mod plain;

pub use markdown::{render_markdown, render_store};
pub use plain::render_plain;

use crate::ReportFormat;
use scenebook_error::{JsonError, ReportError, ScenebookResult};
use scenebook_query::ResultSet;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Renders `results` in the requested format.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use scenebook::{InMemoryStore, ReportFormat, SearchAxis, ingest_text, search_store};
/// use scenebook::report::render_results;
///
/// let mut store = InMemoryStore::new();
/// ingest_text(&mut store, "ep1", "EXT. PARK - DAY #12#\n[JOHN, SUIT, WATCH]\n");
/// let results = search_store(&store, SearchAxis::Location, "park");
///
/// let text = render_results(&results, ReportFormat::Plain).unwrap();
/// assert!(text.contains("|_artist_1 : JOHN"));
/// ```
pub fn render_results(results: &ResultSet<'_>, format: ReportFormat) -> ScenebookResult<String> {
    match format {
        ReportFormat::Plain => Ok(render_plain(results)),
        ReportFormat::Markdown => Ok(render_markdown(results)),
        ReportFormat::Json => {
            serde_json::to_string_pretty(results).map_err(|e| JsonError::new(e.to_string()).into())
        }
    }
}

/// File name used when a lookup report is saved without an explicit path.
///
/// Characters other than letters, digits, `-` and `_` in the needle become `_`.
///
/// # Examples
///
/// ```
/// use scenebook::ReportFormat;
/// use scenebook::report::default_results_path;
/// use std::path::PathBuf;
///
/// assert_eq!(
///     default_results_path("John Smith", ReportFormat::Markdown),
///     PathBuf::from("search_results_john_smith.md")
/// );
/// ```
pub fn default_results_path(needle: &str, format: ReportFormat) -> PathBuf {
    let stem: String = needle
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    PathBuf::from(format!("search_results_{}.{}", stem, format.extension()))
}

/// File name used when the store dump is saved without an explicit path.
pub fn default_export_path() -> PathBuf {
    PathBuf::from(format!(
        "formatted_script.{}",
        ReportFormat::Markdown.extension()
    ))
}

/// Writes a rendered report to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
#[instrument(skip(text), fields(path = %path.display(), bytes = text.len()))]
pub fn write_report(path: &Path, text: &str) -> ScenebookResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ReportError::new(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    std::fs::write(path, text)
        .map_err(|e| ReportError::new(format!("Failed to write {}: {}", path.display(), e)))?;

    debug!("Report written");
    Ok(())
}
