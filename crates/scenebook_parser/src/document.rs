//! Document-level parsing state machine.

use crate::{LineKind, classify, decompose_elements, decompose_heading};
use scenebook_core::{Episode, Scene, SettingTag};
use tracing::{debug, instrument};

/// Scan state threaded through the lines of one document.
///
/// # Examples
///
/// ```
/// use scenebook_parser::ParseState;
///
/// let state = ["EXT. PARK #1#", "INT. HALL - NIGHT #2#", "[JOHN, SUIT]"]
///     .into_iter()
///     .fold(ParseState::default(), ParseState::step);
///
/// assert_eq!(*state.scene_counter(), 2);
/// let parsed = state.finish("ep1");
/// assert_eq!(*parsed.episode().scenes()[0].sequence_number(), 2);
/// ```
#[derive(Debug, Clone, Default, derive_getters::Getters)]
pub struct ParseState {
    /// Scenes built so far
    scenes: Vec<Scene>,
    /// Index into `scenes` of the scene receiving element lines
    current_scene: Option<usize>,
    /// Lines that passed the scene-start gate, well-formed or not
    scene_counter: u32,
    /// Synopsis waiting for the next well-formed heading
    pending_synopsis: String,
}

impl ParseState {
    /// Advances the state by one line.
    pub fn step(mut self, line: &str) -> Self {
        match classify(line) {
            LineKind::Synopsis(text) => {
                self.pending_synopsis = text.to_string();
            }
            LineKind::SceneStart(tag) => self.start_scene(tag, line),
            LineKind::ElementList => self.add_elements(line),
            LineKind::Inert => {}
        }
        self
    }

    fn start_scene(&mut self, tag: SettingTag, line: &str) {
        self.scene_counter += 1;

        let Some(heading) = decompose_heading(line) else {
            debug!(
                scene_number = self.scene_counter,
                %tag,
                line,
                "Malformed scene heading, number consumed without a scene"
            );
            return;
        };

        let synopsis = std::mem::take(&mut self.pending_synopsis);
        self.scenes
            .push(Scene::new(self.scene_counter, line, synopsis, heading));
        self.current_scene = Some(self.scenes.len() - 1);
    }

    fn add_elements(&mut self, line: &str) {
        let Some(index) = self.current_scene else {
            debug!(line, "Element list before any scene, dropped");
            return;
        };
        if let Some(entity) = decompose_elements(line) {
            self.scenes[index].push_entity(entity);
        }
    }

    /// Ends the scan, discarding any unconsumed synopsis.
    pub fn finish(self, name: impl Into<String>) -> ParsedDocument {
        if !self.pending_synopsis.is_empty() {
            debug!(synopsis = %self.pending_synopsis, "Trailing synopsis discarded");
        }
        ParsedDocument {
            episode: Episode::new(name, self.scenes),
            headings_seen: self.scene_counter,
        }
    }
}

/// Outcome of parsing one document.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ParsedDocument {
    /// The structured episode
    episode: Episode,
    /// Scene-start lines seen, including malformed headings
    headings_seen: u32,
}

impl ParsedDocument {
    /// Number of scene numbers consumed by malformed headings.
    pub fn skipped_headings(&self) -> u32 {
        self.headings_seen - self.episode.scenes().len() as u32
    }

    /// Consumes the outcome, keeping only the episode.
    pub fn into_episode(self) -> Episode {
        self.episode
    }
}

/// Parses a whole document, keeping the heading count alongside the episode.
#[instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_document(name: &str, text: &str) -> ParsedDocument {
    let parsed = split_lines(text)
        .fold(ParseState::default(), ParseState::step)
        .finish(name);

    debug!(
        scenes = parsed.episode.scenes().len(),
        headings = parsed.headings_seen,
        entities = parsed.episode.entity_count(),
        "Parsed document"
    );
    parsed
}

/// Splits on `\r\n`, `\r` and `\n` alike, without a trailing empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix(['\r', '\n']))
        .unwrap_or(text);
    let mut rest = (!body.is_empty()).then_some(body);

    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(index) => {
                let skip = if current[index..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[index + skip..]);
                Some(&current[..index])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

/// Parses a whole document into an episode named `name`.
pub fn parse_episode(name: &str, text: &str) -> Episode {
    parse_document(name, text).into_episode()
}

#[cfg(test)]
mod tests {
    use super::split_lines;

    fn lines(text: &str) -> Vec<&str> {
        split_lines(text).collect()
    }

    #[test]
    fn test_every_line_ending_breaks_lines() {
        assert_eq!(lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_final_line_ending_adds_no_line() {
        assert_eq!(lines("a\r"), vec!["a"]);
        assert_eq!(lines("a\r\n"), vec!["a"]);
        assert_eq!(lines("a\n"), vec!["a"]);
        assert!(lines("").is_empty());
    }

    #[test]
    fn test_blank_lines_are_kept() {
        assert_eq!(lines("a\r\rb\n\nc"), vec!["a", "", "b", "", "c"]);
    }
}
