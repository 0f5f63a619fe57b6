//! Element list decomposition.

use scenebook_core::Entity;

/// Extracts a performer, costume and props from a bracketed element line.
///
/// Every `[` and `]` is removed, the remainder is split on `,` and each field
/// trimmed. Field 0 is the performer, field 1 the costume, field 2 the props;
/// missing fields become empty strings and fields past the third are dropped.
/// A line whose performer field is empty yields nothing.
///
/// # Examples
///
/// ```
/// use scenebook_core::Entity;
/// use scenebook_parser::decompose_elements;
///
/// assert_eq!(
///     decompose_elements("[JOHN, SUIT, WATCH]"),
///     Some(Entity::new("JOHN", "SUIT", "WATCH"))
/// );
/// assert_eq!(decompose_elements("[JANE, DRESS]"), Some(Entity::new("JANE", "DRESS", "")));
/// assert_eq!(decompose_elements("[ ]"), None);
/// ```
pub fn decompose_elements(line: &str) -> Option<Entity> {
    let stripped = line.replace(['[', ']'], "");
    let mut fields = stripped.split(',').map(str::trim);

    let performer = fields.next().filter(|performer| !performer.is_empty())?;
    let costume = fields.next().unwrap_or_default();
    let props = fields.next().unwrap_or_default();

    Some(Entity::new(performer, costume, props))
}
