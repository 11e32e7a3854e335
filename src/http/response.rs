//! Error responses for the invocation service.
//!
//! # Design Decisions
//! - Bad events map to 400; the caller can fix them
//! - A broken renderer integration maps to 502
//! - Bodies are JSON `{"error": "..."}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::pipeline::PipelineError;

/// Handler error wrapper.
#[derive(Debug)]
pub struct ApiError(pub PipelineError);

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_input_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::BAD_GATEWAY
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Stage invocation failed");
        } else {
            tracing::warn!(error = %self.0, "Rejected stage invocation");
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ClassifyError;
    use crate::render::RenderError;
    use crate::routing::RouteError;

    #[test]
    fn test_status_mapping() {
        let response = ApiError(PipelineError::Classify(ClassifyError::MissingHeader("host")))
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError(PipelineError::Route(RouteError::Render(
            RenderError::MalformedResponse("no path".into()),
        )))
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
