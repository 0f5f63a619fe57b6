//! Search over stored episodes.
//!
//! A search picks an axis ([`SearchAxis::Performer`] or
//! [`SearchAxis::Location`]) and a needle, matched case-insensitively as a
//! substring. Results come back as a [`ResultSet`]: episodes in store order,
//! each with its qualifying scenes in parse order. Episodes without a single
//! qualifying scene are left out entirely.
//!
//! Performer hits split each scene's entities into `matched` and `other`.
//! Location hits qualify the whole scene, so every entity lands in `matched`
//! and `other` stays empty.
//!
//! The engine does no formatting; renderers walk the result set.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod axis;
mod engine;
mod result;

pub use axis::SearchAxis;
pub use engine::{search, search_store};
pub use result::{EpisodeMatches, ResultSet, SceneMatch};
