//! Shared fixtures for integration tests.

#![allow(dead_code)]

use lang_router::language::{Language, LanguageList};
use lang_router::menu::{MenuNode, SiteLinks, SwitcherOptions};
use lang_router::routing::{RouteTable, RoutingOptions};
use url::Url;

pub const SITE_URL: &str = "https://example.com/";

/// English (default) and French.
pub fn en_fr() -> LanguageList {
    LanguageList::new(vec![
        Language::new("en", "English", "en_US")
            .as_default()
            .with_flag("<img src=\"en.png\" alt=\"English\" />"),
        Language::new("fr", "Français", "fr_FR").with_flag("<img src=\"fr.png\" alt=\"Français\" />"),
    ])
}

/// English (default), French and German.
pub fn en_fr_de() -> LanguageList {
    let mut languages: Vec<Language> = en_fr().iter().cloned().collect();
    languages.push(Language::new("de", "Deutsch", "de_DE"));
    LanguageList::new(languages)
}

pub fn prefixed(hide_default: bool) -> RoutingOptions {
    RoutingOptions {
        use_language_prefix_in_path: true,
        hide_default_language_prefix: hide_default,
    }
}

/// The four language-taxonomy shapes the host owns in prefix mode.
pub fn generic_language_rules() -> Vec<(&'static str, &'static str)> {
    vec![
        ("([^/]+)/feed/(feed|rdf|rss|rss2|atom)/?$", "index.php?lang=$matches[1]&feed=$matches[2]"),
        ("([^/]+)/(feed|rdf|rss|rss2|atom)/?$", "index.php?lang=$matches[1]&feed=$matches[2]"),
        ("([^/]+)/page/?([0-9]{1,})/?$", "index.php?lang=$matches[1]&paged=$matches[2]"),
        ("([^/]+)/?$", "index.php?lang=$matches[1]"),
    ]
}

/// A realistic host table: site feeds, comment feeds, archives, permalinks, pages.
pub fn host_rules() -> RouteTable {
    let mut rules = vec![
        ("feed/(feed|rdf|rss|rss2|atom)/?$", "index.php?&feed=$matches[1]"),
        ("(feed|rdf|rss|rss2|atom)/?$", "index.php?&feed=$matches[1]"),
        ("page/?([0-9]{1,})/?$", "index.php?&paged=$matches[1]"),
        ("comments/feed/(feed|rdf|rss|rss2|atom)/?$", "index.php?&feed=$matches[1]&withcomments=1"),
        ("comments/(feed|rdf|rss|rss2|atom)/?$", "index.php?&feed=$matches[1]&withcomments=1"),
        ("category/(.+?)/?$", "index.php?category_name=$matches[1]"),
        ("author/([^/]+)/feed/(feed|rdf|rss|rss2|atom)/?$", "index.php?author_name=$matches[1]&feed=$matches[2]"),
        ("author/([^/]+)/page/?([0-9]{1,})/?$", "index.php?author_name=$matches[1]&paged=$matches[2]"),
        ("author/([^/]+)/?$", "index.php?author_name=$matches[1]"),
        (
            "([0-9]{4})/([0-9]{1,2})/([0-9]{1,2})/?$",
            "index.php?year=$matches[1]&monthnum=$matches[2]&day=$matches[3]",
        ),
        ("([0-9]{4})/?$", "index.php?year=$matches[1]"),
        (
            "([0-9]{4})/([0-9]{1,2})/([0-9]{1,2})/([^/]+)(/[0-9]+)?/?$",
            "index.php?year=$matches[1]&monthnum=$matches[2]&day=$matches[3]&name=$matches[4]&page=$matches[5]",
        ),
        (
            "([0-9]{4})/([0-9]{1,2})/([0-9]{1,2})/([^/]+)/comment-page-([0-9]{1,})/?$",
            "index.php?year=$matches[1]&monthnum=$matches[2]&day=$matches[3]&name=$matches[4]&cpage=$matches[5]",
        ),
        ("^privacy/?$", "index.php?pagename=privacy"),
    ];
    rules.extend(generic_language_rules());
    rules.push(("(.?.+?)(/[0-9]+)?/?$", "index.php?pagename=$matches[1]&page=$matches[2]"));
    rules.into_iter().collect()
}

pub fn links(languages: &LanguageList, options: &RoutingOptions) -> SiteLinks {
    let site = Url::parse(SITE_URL).expect("fixture URL parses");
    SiteLinks::new(&site, languages, options)
}

pub fn switcher(id: u64, order_index: i64) -> MenuNode {
    MenuNode::new(id, "Languages", order_index)
        .with_class("menu-item")
        .as_language_switcher(SwitcherOptions::default())
}
