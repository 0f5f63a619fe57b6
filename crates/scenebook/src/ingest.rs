//! Screenplay ingestion.

use scenebook_error::{DocumentError, DocumentErrorKind, ScenebookResult};
use scenebook_parser::parse_document;
use scenebook_storage::EpisodeStore;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Result of ingesting one screenplay.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IngestOutcome {
    /// A new episode was appended to the store
    #[display("Data from '{}' successfully added ({} scenes).", episode, scenes)]
    Added {
        /// Episode name
        episode: String,
        /// Scenes created
        scenes: usize,
        /// Scene numbers consumed by malformed headings
        skipped_headings: u32,
    },
    /// An episode with this name already exists; nothing was parsed
    #[display("File '{}' is already in the store. Skipping.", episode)]
    SkippedDuplicate {
        /// Episode name
        episode: String,
    },
    /// The document could not be turned into an episode
    #[display("Could not parse document: {}", reason)]
    ParseError {
        /// What went wrong
        reason: String,
    },
}

impl IngestOutcome {
    /// Whether the store was changed.
    pub fn is_added(&self) -> bool {
        matches!(self, IngestOutcome::Added { .. })
    }
}

/// Derives an episode name from a document path: the file name up to its
/// first dot.
///
/// # Examples
///
/// ```
/// use scenebook::episode_name;
/// use std::path::Path;
///
/// assert_eq!(episode_name(Path::new("scripts/ep1.fountain")).as_deref(), Some("ep1"));
/// assert_eq!(episode_name(Path::new("ep1.draft.fountain")).as_deref(), Some("ep1"));
/// assert_eq!(episode_name(Path::new(".fountain")), None);
/// ```
pub fn episode_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let name = file_name.split('.').next().unwrap_or_default();
    (!name.is_empty()).then(|| name.to_string())
}

/// Parses `text` as episode `name` and appends it unless the name is taken.
///
/// The store is not saved.
#[instrument(skip(store, text), fields(bytes = text.len()))]
pub fn ingest_text<S>(store: &mut S, name: &str, text: &str) -> IngestOutcome
where
    S: EpisodeStore + ?Sized,
{
    if store.contains(name) {
        info!("Episode already present, skipping");
        return IngestOutcome::SkippedDuplicate {
            episode: name.to_string(),
        };
    }

    let parsed = parse_document(name, text);
    let outcome = IngestOutcome::Added {
        episode: name.to_string(),
        scenes: parsed.episode().scenes().len(),
        skipped_headings: parsed.skipped_headings(),
    };
    store.append(parsed.into_episode());

    info!(%outcome, "Episode ingested");
    outcome
}

/// Reads the screenplay at `path` and ingests it under its derived name.
///
/// The duplicate check happens before the file is read. The store is not
/// saved.
///
/// # Errors
///
/// Returns an error if the file cannot be read. A file that is not valid
/// UTF-8, or whose name yields no episode name, is a
/// [`IngestOutcome::ParseError`] instead.
#[instrument(skip(store), fields(path = %path.display()))]
pub fn ingest_file<S>(store: &mut S, path: &Path) -> ScenebookResult<IngestOutcome>
where
    S: EpisodeStore + ?Sized,
{
    let Some(name) = episode_name(path) else {
        warn!("No episode name in file name");
        return Ok(IngestOutcome::ParseError {
            reason: format!("no episode name in '{}'", path.display()),
        });
    };

    if store.contains(&name) {
        info!(episode = %name, "Episode already present, skipping");
        return Ok(IngestOutcome::SkippedDuplicate { episode: name });
    }

    let bytes = std::fs::read(path).map_err(|e| {
        DocumentError::new(DocumentErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "Screenplay is not valid UTF-8");
            return Ok(IngestOutcome::ParseError {
                reason: format!("'{}' is not valid UTF-8: {}", path.display(), e),
            });
        }
    };

    Ok(ingest_text(store, &name, &text))
}

/// Loads the store, ingests the screenplay at `path` and saves the store if
/// an episode was added.
///
/// # Errors
///
/// Returns an error if the store cannot be loaded or saved, or the file
/// cannot be read.
pub fn add_episode_file<S>(store: &mut S, path: &Path) -> ScenebookResult<IngestOutcome>
where
    S: EpisodeStore + ?Sized,
{
    store.load()?;
    let outcome = ingest_file(store, path)?;
    if outcome.is_added() {
        store.save()?;
    }
    Ok(outcome)
}
