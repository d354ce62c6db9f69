//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Exactly one default language, unique URL-safe slugs
//! - Parsable site URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use url::Url;

use crate::config::schema::SiteConfig;

/// A semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("site_url '{0}' is not a valid URL")]
    InvalidSiteUrl(String),

    #[error("no languages configured")]
    NoLanguages,

    #[error("no default language")]
    NoDefaultLanguage,

    #[error("several default languages: {}", .0.join(", "))]
    SeveralDefaultLanguages(Vec<String>),

    #[error("duplicate language slug '{0}'")]
    DuplicateSlug(String),

    #[error("language slug '{0}' is not URL-safe")]
    InvalidSlug(String),

    #[error("language '{0}' has an empty name")]
    EmptyName(String),

    #[error("language '{0}' has an empty locale")]
    EmptyLocale(String),
}

fn slug_pattern() -> &'static Regex {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("slug pattern compiles"))
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if Url::parse(&config.site_url).is_err() {
        errors.push(ValidationError::InvalidSiteUrl(config.site_url.clone()));
    }

    if config.languages.is_empty() {
        errors.push(ValidationError::NoLanguages);
    } else {
        let defaults: Vec<String> = config
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .map(|lang| lang.slug.clone())
            .collect();
        match defaults.len() {
            0 => errors.push(ValidationError::NoDefaultLanguage),
            1 => {}
            _ => errors.push(ValidationError::SeveralDefaultLanguages(defaults)),
        }
    }

    let mut seen = HashSet::new();
    for language in &config.languages {
        if !seen.insert(language.slug.as_str()) {
            errors.push(ValidationError::DuplicateSlug(language.slug.clone()));
        }
        if !slug_pattern().is_match(&language.slug) {
            errors.push(ValidationError::InvalidSlug(language.slug.clone()));
        }
        if language.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName(language.slug.clone()));
        }
        if language.locale.trim().is_empty() {
            errors.push(ValidationError::EmptyLocale(language.slug.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
