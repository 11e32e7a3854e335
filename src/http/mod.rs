//! Local invocation service.
//!
//! # Data Flow
//! ```text
//! POST /viewer-request (edge event JSON)
//!     → server.rs (Axum, request ID, trace, timeout)
//!     → pipeline::handle_viewer_request
//!     → request JSON
//!
//! POST /origin-request (edge event JSON)
//!     → pipeline::handle_origin_request (render call)
//!     → request JSON, or response.rs error mapping
//! ```

pub mod response;
pub mod server;

pub use response::ApiError;
pub use server::HttpServer;
