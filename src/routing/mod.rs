//! Language-aware routing.
//!
//! # Data Flow
//! ```text
//! Host rule table (ordered pattern → target)
//!     + LanguageList + RoutingOptions
//!     → segment.rs (base + per-language slug segment)
//!     → classify.rs (feed / comment feed / paged / root / archive / other)
//!     → compiler.rs (synthesize per-language rules, drop superseded ones)
//!     → store.rs (atomic install of the compiled table)
//! ```
//!
//! # Design Decisions
//! - Compilation is a pure function; logging and metrics live in the store
//! - Order is meaning: synthesized rules come before untouched host rules
//! - Unknown rule shapes are not an error, they pass through unchanged
//! - Matching requests against the table is the host's job, not ours

pub mod classify;
pub mod compiler;
pub mod rule;
pub mod segment;
pub mod store;

pub use classify::{classify, RuleCategory};
pub use compiler::compile;
pub use rule::{RouteRule, RouteTable};
pub use segment::{RoutingOptions, SlugSegments};
pub use store::RouteTableStore;
