//! Route rules and ordered routing tables.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single rewrite rule: path regex → query-string target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteRule {
    /// Regex over the request path (e.g. `page/?([0-9]{1,})/?$`).
    pub pattern: String,

    /// Query template with positional captures (e.g. `index.php?paged=$matches[1]`).
    pub target: String,
}

impl RouteRule {
    pub fn new(pattern: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            target: target.into(),
        }
    }
}

/// Ordered mapping from pattern to target.
///
/// The host tries patterns top to bottom and stops at the first match, so
/// order is part of the table's meaning. Re-inserting an existing pattern
/// replaces its target in place.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RouteTable {
    rules: IndexMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Insert a rule. An existing pattern keeps its position.
    pub fn insert(&mut self, pattern: impl Into<String>, target: impl Into<String>) {
        self.rules.insert(pattern.into(), target.into());
    }

    pub fn get(&self, pattern: &str) -> Option<&str> {
        self.rules.get(pattern).map(String::as_str)
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.rules.contains_key(pattern)
    }

    /// Remove a rule, keeping the relative order of the others.
    pub fn remove(&mut self, pattern: &str) -> Option<String> {
        self.rules.shift_remove(pattern)
    }

    /// Position of a pattern in match order.
    pub fn position(&self, pattern: &str) -> Option<usize> {
        self.rules.get_index_of(pattern)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.rules.iter().map(|(p, t)| (p.as_str(), t.as_str()))
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> + '_ {
        self.rules.keys().map(String::as_str)
    }

    /// Rules in match order.
    pub fn to_rules(&self) -> Vec<RouteRule> {
        self.iter().map(|(p, t)| RouteRule::new(p, t)).collect()
    }

    /// `self` followed by every rule of `rest` whose pattern is not already present.
    ///
    /// Rules already in `self` win over same-pattern rules from `rest`.
    pub fn followed_by(mut self, rest: RouteTable) -> RouteTable {
        for (pattern, target) in rest.rules {
            self.rules.entry(pattern).or_insert(target);
        }
        self
    }
}

// Order-sensitive: two tables with the same rules in different order route differently.
impl PartialEq for RouteTable {
    fn eq(&self, other: &Self) -> bool {
        self.rules.len() == other.rules.len() && self.rules.iter().eq(other.rules.iter())
    }
}

impl Eq for RouteTable {}

impl FromIterator<RouteRule> for RouteTable {
    fn from_iter<I: IntoIterator<Item = RouteRule>>(iter: I) -> Self {
        let mut table = RouteTable::new();
        for rule in iter {
            table.insert(rule.pattern, rule.target);
        }
        table
    }
}

impl<P: Into<String>, T: Into<String>> FromIterator<(P, T)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let mut table = RouteTable::new();
        for (pattern, target) in iter {
            table.insert(pattern, target);
        }
        table
    }
}
