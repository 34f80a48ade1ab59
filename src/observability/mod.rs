//! Observability subsystem
//!
//! Structured JSON logging and counters-only metrics.

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::MetricsRegistry;
