//! Performer appearance records.

use serde::{Deserialize, Serialize};

/// One performer's appearance in a scene.
///
/// # Examples
///
/// ```
/// use scenebook_core::Entity;
///
/// let entity = Entity::new("JANE", "DRESS", "");
/// assert_eq!(entity.performer(), "JANE");
/// assert!(entity.props().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct Entity {
    /// Performer name, never empty
    #[serde(rename = "artist")]
    performer: String,
    /// Costume description, empty when the source line had none
    #[serde(default)]
    costume: String,
    /// Props carried, empty when the source line had none
    #[serde(default)]
    props: String,
}

impl Entity {
    /// Creates an entity from its three fields.
    pub fn new(
        performer: impl Into<String>,
        costume: impl Into<String>,
        props: impl Into<String>,
    ) -> Self {
        Self {
            performer: performer.into(),
            costume: costume.into(),
            props: props.into(),
        }
    }

    /// Case-insensitive substring match against the performer name.
    ///
    /// `needle` must already be lowercase.
    pub fn performer_contains(&self, needle: &str) -> bool {
        self.performer.to_lowercase().contains(needle)
    }
}
