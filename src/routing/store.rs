//! Active routing table.
//!
//! # Responsibilities
//! - Hold the compiled table the host currently routes with
//! - Recompile and swap it in when configuration changes
//!
//! # Design Decisions
//! - Readers never block: the table is swapped atomically behind an `Arc`
//! - A rebuild always starts from the host's generic rules, never from the
//!   previously compiled table

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::language::LanguageList;
use crate::observability::metrics;

use super::compiler::compile;
use super::rule::RouteTable;
use super::segment::RoutingOptions;

/// Sink for compiled routing tables.
#[derive(Debug)]
pub struct RouteTableStore {
    active: ArcSwap<RouteTable>,
}

impl RouteTableStore {
    pub fn new(initial: RouteTable) -> Self {
        Self {
            active: ArcSwap::from_pointee(initial),
        }
    }

    /// Current table.
    pub fn load(&self) -> Arc<RouteTable> {
        self.active.load_full()
    }

    /// Replace the current table.
    pub fn install(&self, table: RouteTable) {
        tracing::debug!(rules = table.len(), "Installing routing table");
        self.active.store(Arc::new(table));
    }

    /// Compile the host's rules for `languages` and install the result.
    pub fn rebuild(
        &self,
        host_rules: &RouteTable,
        languages: &LanguageList,
        options: &RoutingOptions,
    ) -> Arc<RouteTable> {
        if languages.is_empty() {
            tracing::warn!("No languages configured, installing host rules unchanged");
        } else if languages.default_language().is_none() {
            tracing::warn!(
                languages = languages.len(),
                "No single default language, installing host rules unchanged"
            );
        }

        let compiled = compile(host_rules, languages, options);

        tracing::info!(
            languages = languages.len(),
            host_rules = host_rules.len(),
            rules = compiled.len(),
            prefix_in_path = options.use_language_prefix_in_path,
            hide_default = options.hide_default_language_prefix,
            "Routing table compiled"
        );
        metrics::record_compile(compiled.len());

        let compiled = Arc::new(compiled);
        self.active.store(Arc::clone(&compiled));
        compiled
    }
}

impl Default for RouteTableStore {
    fn default() -> Self {
        Self::new(RouteTable::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn host_rules() -> RouteTable {
        [
            ("([0-9]{4})/?$", "index.php?year=$matches[1]"),
            ("^privacy/?$", "index.php?pagename=privacy"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_install_replaces_table() {
        let store = RouteTableStore::default();
        assert!(store.load().is_empty());

        store.install(host_rules());
        assert_eq!(store.load().len(), 2);
    }

    #[test]
    fn test_rebuild_installs_compiled_table() {
        let store = RouteTableStore::new(host_rules());
        let languages = LanguageList::new(vec![
            Language::new("en", "English", "en_US").as_default(),
            Language::new("fr", "Français", "fr_FR"),
        ]);

        let compiled = store.rebuild(&host_rules(), &languages, &RoutingOptions::default());

        assert!(Arc::ptr_eq(&compiled, &store.load()));
        assert!(store.load().contains("language/fr/([0-9]{4})/?$"));
        assert!(!store.load().contains("([0-9]{4})/?$"));
    }

    #[test]
    fn test_rebuild_starts_from_host_rules() {
        let store = RouteTableStore::default();
        let fr_only = LanguageList::new(vec![Language::new("fr", "Français", "fr_FR").as_default()]);
        let de_only = LanguageList::new(vec![Language::new("de", "Deutsch", "de_DE").as_default()]);

        store.rebuild(&host_rules(), &fr_only, &RoutingOptions::default());
        store.rebuild(&host_rules(), &de_only, &RoutingOptions::default());

        let active = store.load();
        assert!(active.contains("language/de/([0-9]{4})/?$"));
        assert!(!active.contains("language/fr/([0-9]{4})/?$"));
    }

    #[test]
    fn test_readers_keep_old_snapshot() {
        let store = RouteTableStore::new(host_rules());
        let snapshot = store.load();

        store.install(RouteTable::new());

        assert_eq!(snapshot.len(), 2);
        assert!(store.load().is_empty());
    }
}
