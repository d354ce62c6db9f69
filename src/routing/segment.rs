//! Per-language path segments.

use serde::{Deserialize, Serialize};

use crate::language::{Language, LanguageList};

/// Segment prepended to language-scoped rules when the language is not part
/// of the pretty path.
pub const LANGUAGE_BASE: &str = "language/";

/// How languages appear in URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingOptions {
    /// `/fr/...` instead of `/language/fr/...`.
    pub use_language_prefix_in_path: bool,

    /// Drop the default language's prefix entirely.
    pub hide_default_language_prefix: bool,
}

/// Computes the `base` and each language's slug segment.
#[derive(Debug, Clone)]
pub struct SlugSegments<'a> {
    base: &'static str,
    hidden_slug: Option<&'a str>,
}

impl<'a> SlugSegments<'a> {
    /// Without a single default language nothing is hidden.
    pub fn new(languages: &'a LanguageList, options: &RoutingOptions) -> Self {
        let base = if options.use_language_prefix_in_path {
            ""
        } else {
            LANGUAGE_BASE
        };

        let hidden_slug = if options.hide_default_language_prefix {
            languages.default_language().map(|lang| lang.slug.as_str())
        } else {
            None
        };

        Self { base, hidden_slug }
    }

    pub fn base(&self) -> &'static str {
        self.base
    }

    /// Whether the language's prefix is suppressed.
    pub fn is_hidden(&self, language: &Language) -> bool {
        self.hidden_slug == Some(language.slug.as_str())
    }

    /// Empty for the hidden default language, otherwise `base + slug + "/"`.
    pub fn segment(&self, language: &Language) -> String {
        if self.is_hidden(language) {
            String::new()
        } else {
            format!("{}{}/", self.base, language.slug)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn languages() -> LanguageList {
        LanguageList::new(vec![
            Language::new("en", "English", "en_US").as_default(),
            Language::new("fr", "Français", "fr_FR"),
        ])
    }

    #[test]
    fn test_prefix_mode_segments() {
        let list = languages();
        let options = RoutingOptions {
            use_language_prefix_in_path: true,
            hide_default_language_prefix: false,
        };
        let segments = SlugSegments::new(&list, &options);

        assert_eq!(segments.base(), "");
        assert_eq!(segments.segment(list.get("en").unwrap()), "en/");
        assert_eq!(segments.segment(list.get("fr").unwrap()), "fr/");
    }

    #[test]
    fn test_base_mode_segments() {
        let list = languages();
        let segments = SlugSegments::new(&list, &RoutingOptions::default());

        assert_eq!(segments.base(), "language/");
        assert_eq!(segments.segment(list.get("fr").unwrap()), "language/fr/");
    }

    #[test]
    fn test_hidden_default_only_hides_default() {
        let list = languages();
        let options = RoutingOptions {
            use_language_prefix_in_path: true,
            hide_default_language_prefix: true,
        };
        let segments = SlugSegments::new(&list, &options);

        assert_eq!(segments.segment(list.get("en").unwrap()), "");
        assert_eq!(segments.segment(list.get("fr").unwrap()), "fr/");
    }

    #[test]
    fn test_hide_without_default_shows_every_prefix() {
        let list = LanguageList::new(vec![
            Language::new("en", "English", "en_US"),
            Language::new("fr", "Français", "fr_FR"),
        ]);
        let options = RoutingOptions {
            use_language_prefix_in_path: true,
            hide_default_language_prefix: true,
        };
        let segments = SlugSegments::new(&list, &options);

        assert_eq!(segments.segment(list.get("en").unwrap()), "en/");
    }
}
