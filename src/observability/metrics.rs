//! Metrics collection and exposition.
//!
//! # Metrics
//! - `lang_router_compiles_total` (counter): routing table compilations
//! - `lang_router_compiled_rules` (gauge): rules in the last compiled table
//! - `lang_router_menu_templates_expanded_total` (counter): switcher templates split into language items
//! - `lang_router_menu_ancestors_reconciled_total` (counter): items whose ancestry classes were stripped
//! - `lang_router_menu_reentry_blocked_total` (counter): translated-menu lookups short-circuited by the guard

use std::net::SocketAddr;

use metrics::{counter, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder with its HTTP scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_compile(rules: usize) {
    counter!("lang_router_compiles_total").increment(1);
    gauge!("lang_router_compiled_rules").set(rules as f64);
}

pub fn record_templates_expanded(templates: usize) {
    counter!("lang_router_menu_templates_expanded_total").increment(templates as u64);
}

pub fn record_ancestors_reconciled(items: usize) {
    counter!("lang_router_menu_ancestors_reconciled_total").increment(items as u64);
}

pub fn record_menu_reentry_blocked() {
    counter!("lang_router_menu_reentry_blocked_total").increment(1);
}
