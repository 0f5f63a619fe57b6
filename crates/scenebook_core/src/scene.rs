//! Scenes and their decomposed headings.

use crate::{Entity, SettingTag};
use serde::{Deserialize, Serialize};

/// The four fields of a well-formed scene heading.
///
/// `EXT. PARK - DAY #12#` decomposes into `EXT.`, `PARK`, `DAY` and `#12#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct Heading {
    /// Camera setting
    setting: SettingTag,
    /// Free-text location
    location: String,
    /// Free-text time of day
    time_of_day: String,
    /// `#<digits>#` token, hashes included
    identifier: String,
}

impl Heading {
    /// Creates a heading from its parts.
    pub fn new(
        setting: SettingTag,
        location: impl Into<String>,
        time_of_day: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            setting,
            location: location.into(),
            time_of_day: time_of_day.into(),
            identifier: identifier.into(),
        }
    }
}

/// One heading-delimited unit of an episode.
///
/// Sequence numbers count every line that looked like a heading, including
/// malformed ones that produced no scene, so an episode's numbers may have
/// gaps.
///
/// # Examples
///
/// ```
/// use scenebook_core::{Entity, Heading, Scene, SettingTag};
///
/// let heading = Heading::new(SettingTag::Ext, "PARK", "DAY", "#12#");
/// let mut scene = Scene::new(1, "EXT. PARK - DAY #12#", "", heading);
/// scene.push_entity(Entity::new("JOHN", "SUIT", "WATCH"));
///
/// assert_eq!(*scene.sequence_number(), 1);
/// assert_eq!(scene.location(), "PARK");
/// assert_eq!(scene.entities().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Scene {
    /// 1-based position among heading lines of the document
    #[serde(rename = "scene_number")]
    sequence_number: u32,
    /// Raw heading line
    #[serde(rename = "scene_heading")]
    heading_text: String,
    /// Synopsis line preceding the heading, possibly empty
    #[serde(default)]
    synopsis: String,
    /// Camera setting
    #[serde(rename = "setting")]
    setting_tag: SettingTag,
    /// Free-text location
    location: String,
    /// Free-text time of day
    #[serde(rename = "TOD")]
    time_of_day: String,
    /// `#<digits>#` token; absent in records written by older tools and
    /// omitted on write when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    identifier: String,
    /// Performers in document order
    #[serde(rename = "artists", default)]
    entities: Vec<Entity>,
}

impl Scene {
    /// Creates a scene with no entities yet.
    pub fn new(
        sequence_number: u32,
        heading_text: impl Into<String>,
        synopsis: impl Into<String>,
        heading: Heading,
    ) -> Self {
        let Heading {
            setting,
            location,
            time_of_day,
            identifier,
        } = heading;

        Self {
            sequence_number,
            heading_text: heading_text.into(),
            synopsis: synopsis.into(),
            setting_tag: setting,
            location,
            time_of_day,
            identifier,
            entities: Vec::new(),
        }
    }

    /// Appends a performer in document order.
    pub fn push_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Case-insensitive substring match against the location.
    ///
    /// `needle` must already be lowercase.
    pub fn location_contains(&self, needle: &str) -> bool {
        self.location.to_lowercase().contains(needle)
    }
}
