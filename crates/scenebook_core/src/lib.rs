//! Core data types for scenebook.
//!
//! A screenplay ingested by scenebook becomes one [`Episode`]: an ordered list
//! of [`Scene`]s, each carrying the performers ([`Entity`]) that appear in it
//! together with their costume and props.
//!
//! The serde representation of these types is the persisted store format, so
//! field names follow the established `data.json` layout (`episode`,
//! `scene_number`, `TOD`, `artists`, ...) rather than the Rust field names.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod entity;
mod episode;
mod scene;
mod setting;

pub use entity::Entity;
pub use episode::Episode;
pub use scene::{Heading, Scene};
pub use setting::SettingTag;
