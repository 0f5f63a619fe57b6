//! Search axes.

use serde::Serialize;

/// Which field a search needle is matched against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum SearchAxis {
    /// Performer names inside scenes
    #[display("artist")]
    Performer,
    /// Scene locations
    #[display("location")]
    Location,
}
