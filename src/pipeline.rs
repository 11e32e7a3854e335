//! Stage handlers over the full edge event.
//!
//! Each handler takes the event the platform delivers, runs one stage on
//! its request and returns the request for the platform to continue with.

use thiserror::Error;

use crate::classify::{classify, ClassifyError};
use crate::edge::{EdgeEvent, EdgeRequest, EventError};
use crate::render::RenderService;
use crate::routing::{OriginRouter, RouteError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Event(#[from] EventError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

impl PipelineError {
    /// True when the caller handed in a bad event, as opposed to a broken
    /// renderer integration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PipelineError::Event(_)
                | PipelineError::Classify(_)
                | PipelineError::Route(RouteError::MissingTarget)
        )
    }
}

/// Viewer-request handler.
pub fn handle_viewer_request(event: EdgeEvent) -> Result<EdgeRequest, PipelineError> {
    log_json("Input event", &event);
    let request = classify(event.into_request()?)?;
    log_json("Output result", &request);
    Ok(request)
}

/// Origin-request handler.
pub async fn handle_origin_request<R: RenderService>(
    event: EdgeEvent,
    router: &OriginRouter<R>,
) -> Result<EdgeRequest, PipelineError> {
    log_json("Input event", &event);
    let request = router.route(event.into_request()?).await?;
    log_json("Output result", &request);
    Ok(request)
}

fn log_json<T: serde::Serialize>(message: &str, value: &T) {
    if tracing::enabled!(tracing::Level::DEBUG) {
        match serde_json::to_string(value) {
            Ok(json) => tracing::debug!(payload = %json, "{}", message),
            Err(e) => tracing::debug!(error = %e, "{}: not serializable", message),
        }
    }
}
