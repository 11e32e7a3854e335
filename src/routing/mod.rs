//! Origin-stage routing subsystem.
//!
//! # Data Flow
//! ```text
//! Origin request (x-target, x-should-render)
//!     → origin.rs (directive check)
//!     → render (RenderService call)
//!     → Rendered: rewrite host/origin/uri/querystring
//!     → Anything else: return request untouched
//! ```
//!
//! # Design Decisions
//! - The directive header is the single source of truth; nothing is recomputed
//! - Fail open: the user-facing fetch never breaks because rendering failed
//! - Malformed renderer success bodies fail loudly (integration bug)

pub mod origin;

pub use origin::{OriginRouter, RouteError};
