//! Rule classification.
//!
//! Generic shapes are recognised by their exact pattern. Archive rules are
//! recognised from the query-var names in their target, never by substring,
//! so `author_name` does not count as `name` and `paged` does not count as `page`.

use super::rule::RouteRule;

/// Query var carrying the language slug.
pub const LANG_QUERY_VAR: &str = "lang";

/// Feed formats accepted by syndication rules.
pub const FEED_FORMATS: &str = "(feed|rdf|rss|rss2|atom)";

/// Language-taxonomy rules the host owns before compilation.
pub const GENERIC_FEED: &str = "([^/]+)/feed/(feed|rdf|rss|rss2|atom)/?$";
pub const GENERIC_SHORT_FEED: &str = "([^/]+)/(feed|rdf|rss|rss2|atom)/?$";
pub const GENERIC_PAGED: &str = "([^/]+)/page/?([0-9]{1,})/?$";
pub const GENERIC_ROOT: &str = "([^/]+)/?$";

/// Site-wide comment feeds the host owns before compilation.
pub const GENERIC_COMMENT_FEED: &str = "comments/feed/(feed|rdf|rss|rss2|atom)/?$";
pub const GENERIC_SHORT_COMMENT_FEED: &str = "comments/(feed|rdf|rss|rss2|atom)/?$";

/// What the compiler does with a rule depends on its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    /// Generic language feed (`lang/feed/rss2`, `lang/rss2`).
    Feed,
    /// Site-wide comment feed.
    CommentFeed,
    /// Generic paged language archive (`lang/page/2`).
    PagedArchive,
    /// Generic bare language root (`lang/`).
    LanguageRoot,
    /// Author or date archive, multiplied per language.
    DateOrAuthorArchive,
    /// Anything else; passed through untouched.
    Other,
}

/// Query vars that make a rule an author or date archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveVar {
    AuthorName,
    Year,
    MonthNum,
    Day,
}

impl ArchiveVar {
    pub const ALL: [ArchiveVar; 4] = [
        ArchiveVar::AuthorName,
        ArchiveVar::Year,
        ArchiveVar::MonthNum,
        ArchiveVar::Day,
    ];

    pub fn query_var(self) -> &'static str {
        match self {
            ArchiveVar::AuthorName => "author_name",
            ArchiveVar::Year => "year",
            ArchiveVar::MonthNum => "monthnum",
            ArchiveVar::Day => "day",
        }
    }
}

/// Query vars that disqualify a rule from being an archive.
///
/// A date rule that also names a single post, a page, or a comment page
/// is a permalink, and multiplying it per language would break it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcludedVar {
    Post,
    Name,
    Page,
    CommentPage,
    PageName,
    Attachment,
}

impl ExcludedVar {
    pub const ALL: [ExcludedVar; 6] = [
        ExcludedVar::Post,
        ExcludedVar::Name,
        ExcludedVar::Page,
        ExcludedVar::CommentPage,
        ExcludedVar::PageName,
        ExcludedVar::Attachment,
    ];

    pub fn query_var(self) -> &'static str {
        match self {
            ExcludedVar::Post => "p",
            ExcludedVar::Name => "name",
            ExcludedVar::Page => "page",
            ExcludedVar::CommentPage => "cpage",
            ExcludedVar::PageName => "pagename",
            ExcludedVar::Attachment => "attachment",
        }
    }
}

/// Names of the query vars in a target, in order.
///
/// `index.php?&feed=$matches[1]&withcomments=1` → `["feed", "withcomments"]`.
pub fn query_vars(target: &str) -> Vec<&str> {
    let Some((_, query)) = target.split_once('?') else {
        return Vec::new();
    };

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').map_or(pair, |(name, _)| name))
        .collect()
}

/// Whether the target already selects a language.
pub fn is_language_scoped(target: &str) -> bool {
    query_vars(target).contains(&LANG_QUERY_VAR)
}

/// Author/date archive predicate.
///
/// True when the target names an archive var and none of the excluded vars.
/// Targets that already carry `lang` are not archives any more: they were
/// produced by an earlier compile.
pub fn is_date_or_author_archive(target: &str) -> bool {
    let vars = query_vars(target);

    let names_archive = ArchiveVar::ALL
        .iter()
        .any(|var| vars.contains(&var.query_var()));
    let names_excluded = ExcludedVar::ALL
        .iter()
        .any(|var| vars.contains(&var.query_var()));

    names_archive && !names_excluded && !vars.contains(&LANG_QUERY_VAR)
}

/// Classify a rule by pattern and target.
pub fn classify(pattern: &str, target: &str) -> RuleCategory {
    match pattern {
        GENERIC_FEED | GENERIC_SHORT_FEED => RuleCategory::Feed,
        GENERIC_PAGED => RuleCategory::PagedArchive,
        GENERIC_ROOT => RuleCategory::LanguageRoot,
        GENERIC_COMMENT_FEED | GENERIC_SHORT_COMMENT_FEED => RuleCategory::CommentFeed,
        _ if is_date_or_author_archive(target) => RuleCategory::DateOrAuthorArchive,
        _ => RuleCategory::Other,
    }
}

impl RouteRule {
    pub fn category(&self) -> RuleCategory {
        classify(&self.pattern, &self.target)
    }
}
