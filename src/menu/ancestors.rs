//! Parent-chain lookup over a flat menu.

use std::collections::{HashMap, HashSet};

use super::node::{MenuItemId, MenuNode};

/// Maps each item id to its parent id.
#[derive(Debug, Clone, Default)]
pub struct AncestorIndex {
    parents: HashMap<MenuItemId, Option<MenuItemId>>,
}

impl AncestorIndex {
    /// Index a flat item list. Items sharing an id (language items cloned
    /// from one template) share a parent, so the first occurrence is kept.
    pub fn build(items: &[MenuNode]) -> Self {
        let mut parents = HashMap::with_capacity(items.len());
        for item in items {
            parents.entry(item.id).or_insert(item.parent_id);
        }
        Self { parents }
    }

    /// Ancestor ids of `item`, nearest first.
    pub fn ancestors_of(&self, item: &MenuNode) -> Vec<MenuItemId> {
        self.walk(item.parent_id)
    }

    /// Ancestor ids of the item with `id`, nearest first.
    pub fn ancestors(&self, id: MenuItemId) -> Vec<MenuItemId> {
        self.walk(self.parents.get(&id).copied().flatten())
    }

    // Stops at the root, at an id outside the menu (kept, then stop),
    // or at the first id already collected.
    fn walk(&self, mut next: Option<MenuItemId>) -> Vec<MenuItemId> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();

        while let Some(id) = next {
            if !seen.insert(id) {
                break;
            }
            chain.push(id);
            next = self.parents.get(&id).copied().flatten();
        }

        chain
    }
}
