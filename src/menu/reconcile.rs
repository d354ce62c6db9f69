//! Active-state reconciliation after expansion.
//!
//! A `current-lang` item is not the current page. Its ancestors lose their
//! ancestor/parent styling unless they are also ancestors of a real
//! `current-menu-item`.

use std::collections::HashSet;

use super::ancestors::AncestorIndex;
use super::node::{classes, MenuItemId, MenuNode};

/// Strip misleading active-state classes from an expanded menu.
pub fn reconcile_ancestors(items: &[MenuNode]) -> Vec<MenuNode> {
    let strip = ancestors_to_strip(items);
    strip_ancestry(items, &strip)
}

/// Ids whose ancestry styling must go: ancestors of a `current-lang` item
/// that are not on the path to a `current-menu-item`.
///
/// The path includes the current page itself, so a current page sitting
/// above a `current-lang` item keeps its own ancestry classes.
pub fn ancestors_to_strip(items: &[MenuNode]) -> HashSet<MenuItemId> {
    let index = AncestorIndex::build(items);
    let mut remove_candidates = HashSet::new();
    let mut keep = HashSet::new();

    for item in items {
        if item.has_class(classes::CURRENT_LANG) {
            remove_candidates.extend(index.ancestors_of(item));
        } else if item.has_class(classes::CURRENT_MENU_ITEM) {
            keep.insert(item.id);
            keep.extend(index.ancestors_of(item));
        }
    }

    remove_candidates.difference(&keep).copied().collect()
}

/// Apply a strip set computed by `ancestors_to_strip`.
///
/// Also drops `current-menu-item` from `current-lang` items. Classes
/// unrelated to active state are never touched.
pub fn strip_ancestry(items: &[MenuNode], strip: &HashSet<MenuItemId>) -> Vec<MenuNode> {
    items
        .iter()
        .map(|item| {
            let mut node = item.clone();
            if node.has_class(classes::CURRENT_LANG) {
                node.remove_class(classes::CURRENT_MENU_ITEM);
            }
            if strip.contains(&node.id) {
                for class in classes::ANCESTRY {
                    node.remove_class(class);
                }
            }
            node
        })
        .collect()
}
