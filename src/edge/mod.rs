//! Edge platform envelope.
//!
//! # Data Flow
//! ```text
//! Edge event JSON (Records[0].cf.request)
//!     → event.rs (envelope, record extraction)
//!     → request.rs (uri, querystring, headers, origin override)
//!     → headers.rs (multi-value header map, inter-stage header names)
//! ```
//!
//! # Design Decisions
//! - The envelope is consumed as given; unknown fields round-trip untouched
//! - Stages operate on `EdgeRequest` directly so they can be tested
//!   without building whole events

pub mod event;
pub mod headers;
pub mod request;

pub use event::{EdgeEvent, EventError};
pub use headers::{HeaderEntry, Headers};
pub use request::{CustomOrigin, EdgeRequest, Origin};
