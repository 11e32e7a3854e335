//! Viewer-stage classification subsystem.
//!
//! # Data Flow
//! ```text
//! Viewer request (user-agent, host, uri, querystring)
//!     → bots.rs (is the caller a known crawler?)
//!     → suffixes.rs (is the resource a static asset?)
//!     → classifier.rs (x-target, x-should-render)
//! ```
//!
//! # Design Decisions
//! - Closed, literal substring lists; no scoring or UA parsing
//! - Lists are lower-cased once per process, never per request
//! - Pure function of the request: no I/O, no shared mutable state

pub mod bots;
pub mod classifier;
pub mod suffixes;

pub use bots::{is_bot, BOT_AGENTS};
pub use classifier::{classify, should_render, target_url, ClassifyError};
pub use suffixes::{has_static_suffix, STATIC_SUFFIXES};
