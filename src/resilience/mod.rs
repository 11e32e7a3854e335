//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Render call:
//!     → per-attempt timeout (reqwest client)
//!     → On failure: retries.rs (check if retryable)
//!     → backoff.rs (sleep before the next attempt)
//!     → Attempts exhausted: router fails open
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; the render call always has a deadline
//! - Retries are opt-in; one attempt by default
//! - Giving up never fails the request, it serves the original resource

pub mod backoff;
pub mod retries;

pub use backoff::Backoff;
pub use retries::is_retryable;
