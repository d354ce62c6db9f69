//! Language switcher expansion.
//!
//! Every switcher template becomes one item per language, in language-list
//! order. Order indexes are recomputed in one left-to-right pass: a
//! template's items take consecutive slots starting at the template's slot,
//! and every later item moves down by the number of extra items emitted so far.

use crate::language::{Language, LanguageList};

use super::links::LinkResolver;
use super::node::{classes, MenuNode, SwitcherOptions};

/// What the expander needs besides the menu itself.
pub struct SwitcherContext<'a> {
    pub languages: &'a LanguageList,
    /// Slug of the language being rendered.
    pub current_language: Option<&'a str>,
    pub links: &'a dyn LinkResolver,
}

impl<'a> SwitcherContext<'a> {
    pub fn new(languages: &'a LanguageList, links: &'a dyn LinkResolver) -> Self {
        Self {
            languages,
            current_language: None,
            links,
        }
    }

    pub fn with_current_language(mut self, slug: &'a str) -> Self {
        self.current_language = Some(slug);
        self
    }

    fn is_current(&self, language: &Language) -> bool {
        self.current_language == Some(language.slug.as_str())
    }
}

/// Replace switcher templates with per-language items.
///
/// Without a single default language the items are returned as they are,
/// templates included.
pub fn expand_templates(items: &[MenuNode], ctx: &SwitcherContext<'_>) -> Vec<MenuNode> {
    if ctx.languages.default_language().is_none() {
        return items.to_vec();
    }

    let mut expanded = Vec::with_capacity(items.len() + ctx.languages.len());
    let mut offset: i64 = 0;

    for item in items {
        let Some(options) = item.language_switcher else {
            let mut node = item.clone();
            node.order_index = node.order_index.saturating_add(offset);
            expanded.push(node);
            continue;
        };

        let mut emitted: i64 = 0;
        for language in ctx.languages {
            let is_current = ctx.is_current(language);
            if options.hide_current && is_current {
                continue;
            }

            let mut node = language_item(item, &options, language, is_current, ctx);
            node.order_index = item.order_index.saturating_add(offset).saturating_add(emitted);
            expanded.push(node);
            emitted += 1;
        }
        offset += emitted - 1;
    }

    expanded
}

fn language_item(
    template: &MenuNode,
    options: &SwitcherOptions,
    language: &Language,
    is_current: bool,
    ctx: &SwitcherContext<'_>,
) -> MenuNode {
    let url = if options.force_home {
        None
    } else {
        ctx.links.translation_url(language)
    }
    .unwrap_or_else(|| ctx.links.home_url(language));

    let mut node = template.clone();
    node.title = options.title(language);
    node.url = url;
    node.language_tag = Some(language.slug.clone());
    node.language_switcher = None;
    node.css_classes.insert(classes::LANG_ITEM.to_string());
    node.css_classes.insert(classes::lang_item_for(&language.slug));
    if is_current {
        node.css_classes.insert(classes::CURRENT_LANG.to_string());
    }
    node
}
