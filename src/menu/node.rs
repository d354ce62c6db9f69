//! Menu nodes and language switcher options.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Menu item identifier.
pub type MenuItemId = u64;

/// CSS classes the expander and reconciler read or write.
pub mod classes {
    /// Marks the language item for the language being rendered.
    pub const CURRENT_LANG: &str = "current-lang";
    /// Host's "this is the current page" marker.
    pub const CURRENT_MENU_ITEM: &str = "current-menu-item";
    pub const CURRENT_MENU_ANCESTOR: &str = "current-menu-ancestor";
    pub const CURRENT_MENU_PARENT: &str = "current-menu-parent";
    pub const CURRENT_PAGE_PARENT: &str = "current_page_parent";
    pub const CURRENT_PAGE_ANCESTOR: &str = "current_page_ancestor";
    /// Carried by every language item.
    pub const LANG_ITEM: &str = "lang-item";

    /// Ancestor/parent active-state classes.
    pub const ANCESTRY: [&str; 4] = [
        CURRENT_MENU_ANCESTOR,
        CURRENT_MENU_PARENT,
        CURRENT_PAGE_PARENT,
        CURRENT_PAGE_ANCESTOR,
    ];

    /// `lang-item-<slug>`.
    pub fn lang_item_for(slug: &str) -> String {
        format!("{LANG_ITEM}-{slug}")
    }
}

/// Presentation options stored on a language switcher template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SwitcherOptions {
    pub show_flags: bool,
    pub show_names: bool,
    /// Skip the language currently being rendered.
    pub hide_current: bool,
    /// Link every language to its home page, ignoring translations.
    pub force_home: bool,
}

impl Default for SwitcherOptions {
    fn default() -> Self {
        Self {
            show_flags: false,
            show_names: true,
            hide_current: false,
            force_home: false,
        }
    }
}

impl SwitcherOptions {
    /// Display title for a language item.
    pub fn title(&self, language: &Language) -> String {
        match (self.show_flags, self.show_names) {
            (true, true) => format!("{}&nbsp;{}", language.flag, language.name),
            (true, false) => language.flag.clone(),
            _ => language.name.clone(),
        }
    }
}

/// A flat menu entry as handed over by the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MenuNode {
    pub id: MenuItemId,

    #[serde(default)]
    pub parent_id: Option<MenuItemId>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub url: String,

    /// Render position among siblings.
    #[serde(default)]
    pub order_index: i64,

    #[serde(default)]
    pub css_classes: IndexSet<String>,

    /// Set on items produced from a switcher template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_tag: Option<String>,

    /// Present when this node is a language switcher template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_switcher: Option<SwitcherOptions>,
}

impl MenuNode {
    pub fn new(id: MenuItemId, title: impl Into<String>, order_index: i64) -> Self {
        Self {
            id,
            parent_id: None,
            title: title.into(),
            url: String::new(),
            order_index,
            css_classes: IndexSet::new(),
            language_tag: None,
            language_switcher: None,
        }
    }

    pub fn with_parent(mut self, parent_id: MenuItemId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.css_classes.insert(class.into());
        self
    }

    /// Turn this node into a language switcher template.
    pub fn as_language_switcher(mut self, options: SwitcherOptions) -> Self {
        self.language_switcher = Some(options);
        self
    }

    pub fn is_language_switcher_template(&self) -> bool {
        self.language_switcher.is_some()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.css_classes.contains(class)
    }

    /// Remove a class, keeping the order of the others.
    pub fn remove_class(&mut self, class: &str) -> bool {
        self.css_classes.shift_remove(class)
    }
}
