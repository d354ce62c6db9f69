//! Translated menu lookup.
//!
//! Loading the translated menu runs the host's menu filters again, which
//! calls back into `resolve_menu`. The render context carries an in-flight
//! flag for the duration of one top-level lookup; the nested call sees it
//! and returns its input unchanged.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::metrics;

use super::node::MenuNode;

/// Navigation menu identifier.
pub type MenuId = u64;

/// A navigation menu with its flat item list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavMenu {
    pub id: MenuId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuNode>,
}

/// Errors raised while loading a menu.
#[derive(Debug, Error)]
pub enum MenuLookupError {
    #[error("Menu {0} not found")]
    NotFound(MenuId),

    #[error("Menu source error: {0}")]
    Source(String),
}

/// Request-scoped state for one render.
#[derive(Debug, Default)]
pub struct RenderContext {
    language: Option<String>,
    resolving_menu: bool,
}

impl RenderContext {
    pub fn new(language: Option<String>) -> Self {
        Self {
            language,
            resolving_menu: false,
        }
    }

    /// Slug of the language being rendered.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Whether a translated-menu lookup is in flight.
    pub fn is_resolving_menu(&self) -> bool {
        self.resolving_menu
    }

    fn enter_menu_resolution(&mut self) -> ResolutionGuard<'_> {
        self.resolving_menu = true;
        ResolutionGuard { ctx: self }
    }
}

/// Clears the in-flight flag when dropped, whatever the exit path.
#[derive(Debug)]
pub struct ResolutionGuard<'a> {
    ctx: &'a mut RenderContext,
}

impl Deref for ResolutionGuard<'_> {
    type Target = RenderContext;
    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl DerefMut for ResolutionGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

impl Drop for ResolutionGuard<'_> {
    fn drop(&mut self) {
        self.ctx.resolving_menu = false;
    }
}

/// Host side of translated menus.
pub trait MenuSource {
    /// Id of the translation of `menu_id` into `language`.
    fn translation_of(&self, menu_id: MenuId, language: &str) -> Option<MenuId>;

    /// Load a menu. Implementations may call `resolve_menu` again with `ctx`.
    fn load(&self, menu_id: MenuId, ctx: &mut RenderContext) -> Result<NavMenu, MenuLookupError>;
}

/// Return `menu` translated into the context's language.
///
/// Falls back to `menu` when no language is set, no translation exists, or a
/// lookup is already in flight.
pub fn resolve_menu<S: MenuSource + ?Sized>(
    source: &S,
    menu: NavMenu,
    ctx: &mut RenderContext,
) -> Result<NavMenu, MenuLookupError> {
    if ctx.is_resolving_menu() {
        tracing::trace!(menu_id = menu.id, "Nested menu lookup, returning menu as is");
        metrics::record_menu_reentry_blocked();
        return Ok(menu);
    }

    let Some(language) = ctx.language() else {
        return Ok(menu);
    };
    let Some(translated) = source.translation_of(menu.id, language) else {
        return Ok(menu);
    };

    tracing::debug!(menu_id = menu.id, translated, language, "Loading translated menu");
    let mut guard = ctx.enter_menu_resolution();
    source.load(translated, &mut guard)
}
