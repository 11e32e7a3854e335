//! Rendering service types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Successful render response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderResult {
    /// Storage path of the rendered artifact, relative to the renderer origin.
    pub path: String,
}

impl RenderResult {
    /// Request URI that fetches the artifact from the renderer origin.
    pub fn uri(&self) -> String {
        format!("/{}", self.path)
    }
}

/// Result of one render call that the router can act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// HTTP 200 with a usable body.
    Rendered(RenderResult),
    /// Any other status. The body is diagnostic text.
    Rejected { status: u16, body: String },
    /// Connection, timeout or body transfer failure.
    Unreachable(String),
}

impl RenderOutcome {
    /// Label used in logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            RenderOutcome::Rendered(_) => "rendered",
            RenderOutcome::Rejected { .. } => "rejected",
            RenderOutcome::Unreachable(_) => "unreachable",
        }
    }
}

/// Errors that indicate a broken renderer integration rather than a
/// transient condition.
#[derive(Debug, Error)]
pub enum RenderError {
    /// HTTP 200 whose body is not `{"path": "..."}`.
    #[error("rendering service returned an unusable success body: {0}")]
    MalformedResponse(String),

    /// The HTTP client could not be built.
    #[error("failed to build rendering client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Parse a 200 response body. The path is taken verbatim.
pub fn parse_render_body(body: &str) -> Result<RenderResult, RenderError> {
    serde_json::from_str(body)
        .map_err(|e| RenderError::MalformedResponse(format!("{} (body: {})", e, truncate(body))))
}

fn truncate(body: &str) -> &str {
    const MAX: usize = 256;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
