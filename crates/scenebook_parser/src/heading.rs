//! Strict scene heading decomposition.

use scenebook_core::{Heading, SettingTag};
use std::sync::LazyLock;

static HEADING: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^(EXT\.|INT\.|EXT/INT\.|INT/EXT\.)\s(.+?)\s-\s(.+?)\s(#\d+#)$")
        .expect("Valid heading regex")
});

/// Splits a heading of the form `<tag> <location> - <time_of_day> #<digits>#`.
///
/// Location and time of day are the shortest spans that let the rest of the
/// line match. Returns `None` on any deviation: missing identifier, missing
/// dash separator or trailing text after the identifier.
///
/// # Examples
///
/// ```
/// use scenebook_core::SettingTag;
/// use scenebook_parser::decompose_heading;
///
/// let heading = decompose_heading("EXT. PARK - DAY #12#").unwrap();
/// assert_eq!(*heading.setting(), SettingTag::Ext);
/// assert_eq!(heading.location(), "PARK");
/// assert_eq!(heading.time_of_day(), "DAY");
/// assert_eq!(heading.identifier(), "#12#");
///
/// assert!(decompose_heading("EXT. PARK - DAY").is_none());
/// ```
pub fn decompose_heading(line: &str) -> Option<Heading> {
    let captures = HEADING.captures(line)?;
    let setting: SettingTag = captures[1].parse().ok()?;
    Some(Heading::new(
        setting,
        &captures[2],
        &captures[3],
        &captures[4],
    ))
}
