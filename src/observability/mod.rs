//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / menu / config produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters and gauges via the metrics facade)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Structured fields, not formatted strings, for counts and flags
//! - Metrics are no-ops until a recorder is installed
//! - Core transforms stay pure; callers around them log and record

pub mod logging;
pub mod metrics;
