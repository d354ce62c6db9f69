//! Navigation menu language layer.
//!
//! # Data Flow
//! ```text
//! Host menu (flat MenuNode list, switcher templates marked)
//!     → expander.rs (one item per language, order indexes shifted)
//!     → ancestors.rs (parent-chain index over the expanded list)
//!     → reconcile.rs (strip ancestor styling earned only through current-lang)
//!     → host renderer
//!         → attributes.rs (hreflang on language item links)
//!
//! Menu assigned to a location
//!     → resolver.rs (swap in the translated menu, guarded against re-entry)
//! ```
//!
//! # Design Decisions
//! - Both stages return new lists and never mutate their input
//! - Expansion must finish before reconciliation starts
//! - Cycles and dangling parents are bounded by the ancestor walk, not reported
//! - Language items keep the template's id and parent

pub mod ancestors;
pub mod attributes;
pub mod expander;
pub mod links;
pub mod node;
pub mod reconcile;
pub mod render;
pub mod resolver;

pub use ancestors::AncestorIndex;
pub use attributes::link_attributes;
pub use expander::{expand_templates, SwitcherContext};
pub use links::{LinkResolver, SiteLinks};
pub use node::{MenuItemId, MenuNode, SwitcherOptions};
pub use reconcile::reconcile_ancestors;
pub use render::prepare_items;
pub use resolver::{resolve_menu, MenuId, MenuLookupError, MenuSource, NavMenu, RenderContext};
