//! Camera setting tags that open a scene heading.

use serde::{Deserialize, Serialize};

/// The INT./EXT. marker at the start of a scene heading.
///
/// # Examples
///
/// ```
/// use scenebook_core::SettingTag;
///
/// assert_eq!(SettingTag::from_prefix("INT/EXT. CAR - NIGHT"), Some(SettingTag::IntExt));
/// assert_eq!(SettingTag::Ext.to_string(), "EXT.");
/// assert_eq!(SettingTag::ExtInt.bare(), "EXT/INT");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum SettingTag {
    /// Exterior
    #[serde(rename = "EXT.")]
    #[display("EXT.")]
    Ext,
    /// Interior
    #[serde(rename = "INT.")]
    #[display("INT.")]
    Int,
    /// Exterior moving to interior
    #[serde(rename = "EXT/INT.")]
    #[display("EXT/INT.")]
    ExtInt,
    /// Interior moving to exterior
    #[serde(rename = "INT/EXT.")]
    #[display("INT/EXT.")]
    IntExt,
}

impl SettingTag {
    /// The tag exactly as it is written in a heading, trailing dot included.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingTag::Ext => "EXT.",
            SettingTag::Int => "INT.",
            SettingTag::ExtInt => "EXT/INT.",
            SettingTag::IntExt => "INT/EXT.",
        }
    }

    /// The tag with its dot removed, as shown in markdown reports.
    pub fn bare(&self) -> &'static str {
        let tag = self.as_str();
        &tag[..tag.len() - 1]
    }

    /// Finds the tag a line starts with, if any.
    ///
    /// No tag is a prefix of another, so at most one can match.
    pub fn from_prefix(line: &str) -> Option<Self> {
        use strum::IntoEnumIterator;

        Self::iter().find(|tag| line.starts_with(tag.as_str()))
    }
}

impl std::str::FromStr for SettingTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EXT." => Ok(SettingTag::Ext),
            "INT." => Ok(SettingTag::Int),
            "EXT/INT." => Ok(SettingTag::ExtInt),
            "INT/EXT." => Ok(SettingTag::IntExt),
            _ => Err(format!("Unknown setting tag: {}", s)),
        }
    }
}
