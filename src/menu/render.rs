//! Menu preparation for rendering.

use crate::observability::metrics;

use super::expander::{expand_templates, SwitcherContext};
use super::node::MenuNode;
use super::reconcile::{ancestors_to_strip, strip_ancestry};

/// Expand switcher templates, then reconcile active-state classes.
///
/// Reconciliation reads the expanded list, so the two stages always run in
/// this order.
pub fn prepare_items(items: &[MenuNode], ctx: &SwitcherContext<'_>) -> Vec<MenuNode> {
    let templates = items
        .iter()
        .filter(|item| item.is_language_switcher_template())
        .count();

    let expanded = if templates == 0 {
        items.to_vec()
    } else {
        let expanded = expand_templates(items, ctx);
        if expanded.iter().any(MenuNode::is_language_switcher_template) {
            tracing::warn!(
                templates,
                "Language switcher left unexpanded, no single default language"
            );
        } else {
            metrics::record_templates_expanded(templates);
        }
        expanded
    };

    let strip = ancestors_to_strip(&expanded);
    if !strip.is_empty() {
        metrics::record_ancestors_reconciled(strip.len());
    }

    tracing::debug!(
        items = items.len(),
        expanded = expanded.len(),
        templates,
        stripped_ancestors = strip.len(),
        "Menu prepared"
    );

    strip_ancestry(&expanded, &strip)
}
