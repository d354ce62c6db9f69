//! Multilingual routing and menu presentation for a content platform.
//!
//! Compiles the host's routing table into a language-partitioned one and
//! expands language switcher menu entries into one item per language.

pub mod config;
pub mod language;
pub mod menu;
pub mod observability;
pub mod routing;

pub use config::schema::SiteConfig;
pub use language::{Language, LanguageList};
pub use menu::{expand_templates, reconcile_ancestors, MenuNode};
pub use routing::{compile, RouteTable, RouteTableStore, RoutingOptions};
