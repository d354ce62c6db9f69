//! Per-language link targets for the language switcher.

use std::collections::HashMap;

use url::Url;

use crate::language::{Language, LanguageList};
use crate::routing::{RoutingOptions, SlugSegments};

/// Supplies the URLs language items point to.
pub trait LinkResolver {
    /// Home page of a language.
    fn home_url(&self, language: &Language) -> String;

    /// URL of the current content translated into `language`, if it exists.
    fn translation_url(&self, _language: &Language) -> Option<String> {
        None
    }
}

/// Home URLs derived from the site URL and routing options, plus optional
/// per-language translation URLs for the content being rendered.
#[derive(Debug, Clone)]
pub struct SiteLinks {
    root: String,
    homes: HashMap<String, String>,
    translations: HashMap<String, String>,
}

impl SiteLinks {
    /// Home URLs follow the compiled routes: the hidden default language lives
    /// at the site root, others under their slug segment.
    pub fn new(site_url: &Url, languages: &LanguageList, options: &RoutingOptions) -> Self {
        let root = with_trailing_slash(site_url);
        let segments = SlugSegments::new(languages, options);

        let homes = languages
            .iter()
            .map(|language| {
                let segment = segments.segment(language);
                let home = root
                    .join(&segment)
                    .map(String::from)
                    .unwrap_or_else(|_| format!("{root}{segment}"));
                (language.slug.clone(), home)
            })
            .collect();

        Self {
            root: root.to_string(),
            homes,
            translations: HashMap::new(),
        }
    }

    /// Register the translated URL of the rendered content for one language.
    pub fn with_translation(mut self, slug: impl Into<String>, url: impl Into<String>) -> Self {
        self.translations.insert(slug.into(), url.into());
        self
    }
}

impl LinkResolver for SiteLinks {
    /// Falls back to the site root for a language these links were not built for.
    fn home_url(&self, language: &Language) -> String {
        match self.homes.get(&language.slug) {
            Some(home) => home.clone(),
            None => {
                tracing::warn!(
                    language = %language.slug,
                    root = %self.root,
                    "No home URL for language, linking the site root"
                );
                self.root.clone()
            }
        }
    }

    fn translation_url(&self, language: &Language) -> Option<String> {
        self.translations.get(&language.slug).cloned()
    }
}

fn with_trailing_slash(url: &Url) -> Url {
    let mut url = url.clone();
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
