//! Link attributes for rendered menu items.

use indexmap::IndexMap;

use super::node::MenuNode;

/// Attribute carrying the language of a language item's link.
pub const HREFLANG: &str = "hreflang";

/// Add `hreflang` to a rendered link when its item carries a language tag.
///
/// Other attributes are returned as they came in.
pub fn link_attributes(
    mut attributes: IndexMap<String, String>,
    item: &MenuNode,
) -> IndexMap<String, String> {
    if let Some(slug) = &item.language_tag {
        attributes.insert(HREFLANG.to_string(), slug.clone());
    }
    attributes
}
