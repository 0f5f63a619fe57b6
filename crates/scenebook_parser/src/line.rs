//! Line classification.

use scenebook_core::SettingTag;

/// What a single screenplay line means to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `= text`: synopsis for the next scene, trimmed
    Synopsis(&'a str),
    /// Line opening with a setting tag; may still fail strict decomposition
    SceneStart(SettingTag),
    /// Line containing `[`, a performer/costume/props list
    ElementList,
    /// Dialogue, action, formatting
    Inert,
}

type Rule = for<'a> fn(&'a str) -> Option<LineKind<'a>>;

/// Classification rules in precedence order.
const RULES: [Rule; 3] = [synopsis, scene_start, element_list];

/// Classifies one line. Rules are tried in order and the first match wins.
///
/// # Examples
///
/// ```
/// use scenebook_core::SettingTag;
/// use scenebook_parser::{LineKind, classify};
///
/// assert_eq!(classify("=  Storm rolls in "), LineKind::Synopsis("Storm rolls in"));
/// assert_eq!(classify("INT. HALL - NIGHT #2#"), LineKind::SceneStart(SettingTag::Int));
/// assert_eq!(classify("[JOHN, SUIT]"), LineKind::ElementList);
/// assert_eq!(classify("JOHN"), LineKind::Inert);
/// ```
pub fn classify(line: &str) -> LineKind<'_> {
    RULES
        .iter()
        .find_map(|rule| rule(line))
        .unwrap_or(LineKind::Inert)
}

/// `=` then at least one whitespace character, then at least one more character.
fn synopsis(line: &str) -> Option<LineKind<'_>> {
    let rest = line.strip_prefix('=')?;
    let mut chars = rest.chars();
    let gap = chars.next()?;
    if !gap.is_whitespace() || chars.next().is_none() {
        return None;
    }
    Some(LineKind::Synopsis(rest.trim()))
}

/// Setting tag, one whitespace character, at least one more character.
fn scene_start(line: &str) -> Option<LineKind<'_>> {
    let tag = SettingTag::from_prefix(line)?;
    let mut chars = line[tag.as_str().len()..].chars();
    let gap = chars.next()?;
    if !gap.is_whitespace() || chars.next().is_none() {
        return None;
    }
    Some(LineKind::SceneStart(tag))
}

fn element_list(line: &str) -> Option<LineKind<'_>> {
    line.contains('[').then_some(LineKind::ElementList)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synopsis_needs_whitespace_and_text() {
        assert_eq!(synopsis("= a"), Some(LineKind::Synopsis("a")));
        assert_eq!(synopsis("=\tStorm"), Some(LineKind::Synopsis("Storm")));
        assert_eq!(synopsis("=a"), None);
        assert_eq!(synopsis("= "), None);
        assert_eq!(synopsis("==="), None);
        assert_eq!(synopsis(" = indented"), None);
    }

    #[test]
    fn test_whitespace_only_synopsis_captures_empty_text() {
        assert_eq!(synopsis("=   "), Some(LineKind::Synopsis("")));
    }

    #[test]
    fn test_scene_start_needs_whitespace_and_text() {
        assert_eq!(
            scene_start("EXT. X"),
            Some(LineKind::SceneStart(SettingTag::Ext))
        );
        assert_eq!(scene_start("EXT."), None);
        assert_eq!(scene_start("EXT. "), None);
        assert_eq!(scene_start("EXT.PARK"), None);
        assert_eq!(scene_start("int. hall"), None);
    }

    #[test]
    fn test_scene_start_outranks_element_list() {
        assert_eq!(
            classify("EXT. PARK [night]"),
            LineKind::SceneStart(SettingTag::Ext)
        );
    }

    #[test]
    fn test_synopsis_outranks_element_list() {
        assert_eq!(classify("= [JOHN]"), LineKind::Synopsis("[JOHN]"));
    }

    #[test]
    fn test_bracket_anywhere_is_an_element_list() {
        assert_eq!(classify("He nods [JOHN, SUIT]"), LineKind::ElementList);
    }
}
