//! Language and ordered language list.

use serde::{Deserialize, Serialize};

/// A configured language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Language {
    /// URL-safe, unique identifier (e.g. "en", "pt-br").
    pub slug: String,

    /// Display name (e.g. "Français").
    pub name: String,

    /// Locale tag (e.g. "fr_FR").
    pub locale: String,

    /// Whether this is the site's default language.
    #[serde(default, rename = "default")]
    pub is_default: bool,

    /// Flag markup rendered by the language switcher.
    #[serde(default)]
    pub flag: String,
}

impl Language {
    /// Create a non-default language without flag markup.
    pub fn new(slug: impl Into<String>, name: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            locale: locale.into(),
            is_default: false,
            flag: String::new(),
        }
    }

    /// Mark this language as the default one.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Attach flag markup.
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = flag.into();
        self
    }
}

/// Ordered list of configured languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct LanguageList {
    languages: Vec<Language>,
}

impl LanguageList {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Language> {
        self.languages.iter()
    }

    /// Look up a language by slug.
    pub fn get(&self, slug: &str) -> Option<&Language> {
        self.languages.iter().find(|lang| lang.slug == slug)
    }

    /// The default language, if exactly one language is marked default.
    ///
    /// Returns `None` when no language, or more than one, carries the flag.
    pub fn default_language(&self) -> Option<&Language> {
        let mut defaults = self.languages.iter().filter(|lang| lang.is_default);
        match (defaults.next(), defaults.next()) {
            (Some(lang), None) => Some(lang),
            _ => None,
        }
    }

    /// Slugs in render order.
    pub fn slugs(&self) -> Vec<&str> {
        self.languages.iter().map(|lang| lang.slug.as_str()).collect()
    }
}

impl From<Vec<Language>> for LanguageList {
    fn from(languages: Vec<Language>) -> Self {
        Self::new(languages)
    }
}

impl<'a> IntoIterator for &'a LanguageList {
    type Item = &'a Language;
    type IntoIter = std::slice::Iter<'a, Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.iter()
    }
}
