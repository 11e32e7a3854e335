//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Both stages produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (decision and render counters, latency)
//!
//! Consumers:
//!     → Log aggregation (stderr, text or JSON)
//!     → Metrics endpoint (Prometheus scrape, serve mode)
//! ```
//!
//! # Design Decisions
//! - Full input/output events logged at debug only (diagnostic, not contract)
//! - Request ID flows through the local service via tower-http
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
