//! Rewrite rule compiler.
//!
//! Turns the host's generic routing table into a language-partitioned one.
//! The output is `synthesized rules ++ untouched rules`; synthesized rules
//! (feeds, archives) must be tried before the host's catch-all rules.

use crate::language::{Language, LanguageList};

use super::classify::{classify, RuleCategory, FEED_FORMATS, LANG_QUERY_VAR};
use super::rule::RouteTable;
use super::segment::{RoutingOptions, SlugSegments};

/// Compile `existing` for the configured languages.
///
/// Pure and deterministic. Without a single default language (which includes
/// an empty list) the input table is returned unchanged.
pub fn compile(existing: &RouteTable, languages: &LanguageList, options: &RoutingOptions) -> RouteTable {
    if languages.default_language().is_none() {
        return existing.clone();
    }

    let segments = SlugSegments::new(languages, options);
    let mut synthesized = RouteTable::new();

    if options.use_language_prefix_in_path {
        for language in languages {
            push_language_home_rules(&mut synthesized, &segments, language);
        }
    }

    for language in languages {
        push_comment_feed_rules(&mut synthesized, &segments, language);
    }

    let mut untouched = RouteTable::new();
    for (pattern, target) in existing.iter() {
        match classify(pattern, target) {
            RuleCategory::Feed | RuleCategory::PagedArchive | RuleCategory::LanguageRoot
                if options.use_language_prefix_in_path => {}
            RuleCategory::CommentFeed => {}
            RuleCategory::DateOrAuthorArchive => {
                for language in languages {
                    synthesized.insert(
                        format!("{}{}", segments.segment(language), pattern),
                        scope_target(target, &language.slug),
                    );
                }
            }
            _ => untouched.insert(pattern, target),
        }
    }

    synthesized.followed_by(untouched)
}

/// Feed, short feed, paged and bare rules for one language.
///
/// The bare rule is skipped for a hidden prefix: an empty pattern would
/// shadow the site root.
fn push_language_home_rules(table: &mut RouteTable, segments: &SlugSegments<'_>, language: &Language) {
    let slug = &language.slug;
    let segment = segments.segment(language);

    table.insert(
        format!("{segment}feed/{FEED_FORMATS}/?$"),
        format!("index.php?{LANG_QUERY_VAR}={slug}&feed=$matches[1]"),
    );
    table.insert(
        format!("{segment}{FEED_FORMATS}/?$"),
        format!("index.php?{LANG_QUERY_VAR}={slug}&feed=$matches[1]"),
    );
    table.insert(
        format!("{segment}page/?([0-9]{{1,}})/?$"),
        format!("index.php?{LANG_QUERY_VAR}={slug}&paged=$matches[1]"),
    );
    if !segment.is_empty() {
        table.insert(
            format!("{segment}?$"),
            format!("index.php?{LANG_QUERY_VAR}={slug}"),
        );
    }
}

/// Comment feeds exist per language in both routing modes, hidden prefix included.
fn push_comment_feed_rules(table: &mut RouteTable, segments: &SlugSegments<'_>, language: &Language) {
    let slug = &language.slug;
    let segment = segments.segment(language);

    table.insert(
        format!("{segment}comments/feed/{FEED_FORMATS}/?$"),
        format!("index.php?{LANG_QUERY_VAR}={slug}&feed=$matches[1]&withcomments=1"),
    );
    table.insert(
        format!("{segment}comments/{FEED_FORMATS}/?$"),
        format!("index.php?{LANG_QUERY_VAR}={slug}&feed=$matches[1]&withcomments=1"),
    );
}

/// Inject `lang=<slug>&` right after the first `?` of a target.
fn scope_target(target: &str, slug: &str) -> String {
    match target.split_once('?') {
        Some((script, query)) => format!("{script}?{LANG_QUERY_VAR}={slug}&{query}"),
        None => format!("{target}?{LANG_QUERY_VAR}={slug}"),
    }
}
