//! Edge pre-rendering pipeline.
//!
//! Two stages run at two points of one request's life on the edge:
//!
//! - **viewer request**: [`classify()`] marks crawler traffic for pre-rendering
//!   (`x-target`, `x-should-render`)
//! - **origin request**: [`routing::OriginRouter`] asks the rendering service
//!   for a snapshot and redirects the request to it, or passes through

pub mod classify;
pub mod config;
pub mod edge;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pipeline;
pub mod render;
pub mod resilience;
pub mod routing;

pub use classify::classify;
pub use config::PrerenderConfig;
pub use edge::{EdgeEvent, EdgeRequest};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use render::{HttpRenderClient, RenderService};
pub use routing::OriginRouter;
