//! Rendering service integration.
//!
//! # Data Flow
//! ```text
//! x-target (absolute URL)
//!     → RenderService::render (trait seam, mockable)
//!     → client.rs (HTTP GET /render?url=..., x-api-key)
//!     → types.rs (RenderOutcome or fatal RenderError)
//! ```
//!
//! # Design Decisions
//! - Non-200 and transport failures are outcomes, not errors
//! - Only a malformed success body is an error
//! - The router depends on the trait, never on reqwest directly

use std::future::Future;

pub mod client;
pub mod types;

pub use client::HttpRenderClient;
pub use types::{parse_render_body, RenderError, RenderOutcome, RenderResult};

/// Capability: fetch the rendered artifact path for an absolute URL.
pub trait RenderService: Send + Sync {
    fn render(
        &self,
        target: &str,
    ) -> impl Future<Output = Result<RenderOutcome, RenderError>> + Send;
}
