//! Configured languages.
//!
//! # Responsibilities
//! - Describe a single configured language (slug, names, flag markup)
//! - Keep the ordered language list used by both the compiler and the menu expander
//! - Answer default-language and slug lookups
//!
//! # Design Decisions
//! - List order is render order; nothing is sorted implicitly
//! - The list is read-only input to compile/expand calls
//! - "Exactly one default" is checked on lookup, not enforced on construction,
//!   so callers can degrade instead of failing

pub mod list;

pub use list::{Language, LanguageList};
