/* Naming and formatting rules: pure string transforms. */

use crate::schema::types::{AttributeType, CodegenError};

/* Attributes the hand-written core attribute group already exposes; facade
 * generation must skip them or the generated accessors collide with it.
 */
pub const EXCLUDED_ATTRIBUTES: &[&str] = &["class", "style", "id"];

/* Wrap a raw string in Kotlin string-literal quotes. No escaping beyond the
 * surrounding quotes: the schema is assumed free of quote/control characters,
 * and adding escaping would change observable output for existing inputs.
 */
pub fn quote(s: &str) -> String {
    format!("\"{}\"", s)
}

/* Delegate class-name prefix for a raw type-category tag */
pub fn class_prefix(tag: &str) -> Result<&'static str, CodegenError> {
    Ok(AttributeType::from_tag(tag)?.class_prefix())
}

pub fn is_attribute_excluded(name: &str) -> bool {
    EXCLUDED_ATTRIBUTES.contains(&name.to_lowercase().as_str())
}

pub fn is_lower_case(s: &str) -> bool {
    s == s.to_lowercase()
}
