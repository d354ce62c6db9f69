//! Site configuration: languages, routing mode, observability.
//!
//! # Data Flow
//! ```text
//! site.toml
//!     → loader.rs (TOML into SiteConfig)
//!     → validation.rs (one default, unique URL-safe slugs, usable site URL)
//!     → routing table rebuild + switcher links
//!
//! Edit on disk:
//!     watcher.rs sees a modify/create event for the file
//!     → loader.rs + validation.rs run again
//!     → the new SiteConfig goes out on the update channel
//! ```
//!
//! # Design Decisions
//! - A loaded SiteConfig is never patched; every edit is a fresh load
//! - Sections default independently, so a file with only `[[languages]]` loads
//! - serde rejects malformed files, validation.rs rejects inconsistent ones
//! - An invalid reload is logged and ignored

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ObservabilityConfig, SiteConfig};
pub use validation::{validate_config, ValidationError};
pub use watcher::ConfigWatcher;
