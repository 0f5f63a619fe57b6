//! Screenplay parsing for scenebook.
//!
//! Turns the text of a Fountain screenplay into an [`Episode`]. Parsing is a
//! single pass over the document's lines:
//!
//! 1. [`classify`] sorts each line into a [`LineKind`] using ordered rules,
//!    first match wins: synopsis (`= ...`), scene start (`INT. ...`), element
//!    list (any line with `[`), otherwise inert.
//! 2. Scene starts go through [`decompose_heading`], which accepts only the
//!    strict `<tag> <location> - <time> #<digits>#` form.
//! 3. Element lists go through [`decompose_elements`] to yield a performer,
//!    costume and props.
//! 4. [`ParseState`] threads the current scene, the running scene counter and
//!    the pending synopsis through the lines.
//!
//! Parsing never fails. Malformed lines are absorbed: a heading that passes
//! the scene-start gate but not the strict form still consumes a scene number,
//! leaving a gap in the episode's numbering.
//!
//! # Example
//!
//! ```
//! use scenebook_parser::parse_episode;
//!
//! let script = "\
//! = John waits for Jane
//! EXT. PARK - DAY #1#
//! [JOHN, SUIT, WATCH]
//! [JANE, DRESS]
//! ";
//!
//! let episode = parse_episode("ep1", script);
//! let scene = &episode.scenes()[0];
//! assert_eq!(scene.synopsis(), "John waits for Jane");
//! assert_eq!(scene.entities().len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod document;
mod elements;
mod heading;
mod line;

pub use document::{ParseState, ParsedDocument, parse_document, parse_episode};
pub use elements::decompose_elements;
pub use heading::decompose_heading;
pub use line::{LineKind, classify};

pub use scenebook_core::Episode;
