//! Origin-stage substitution.
//!
//! # Responsibilities
//! - Honor the `x-should-render` directive set by the viewer stage
//! - Call the rendering service for directed requests
//! - Rewrite host, origin, uri and querystring to the rendered artifact
//! - Fail open on any non-success render outcome

use std::time::Instant;

use thiserror::Error;

use crate::config::{OriginConfig, PrerenderConfig};
use crate::edge::headers::{HOST, X_SHOULD_RENDER, X_TARGET};
use crate::edge::{CustomOrigin, EdgeRequest, Headers, Origin};
use crate::observability::metrics;
use crate::render::{RenderError, RenderOutcome, RenderResult, RenderService};

const RENDERER_PROTOCOL: &str = "https";
const RENDERER_PORT: u16 = 443;

#[derive(Debug, Error)]
pub enum RouteError {
    /// The directive is set but the viewer stage left no target.
    #[error("origin request has x-should-render=true but no x-target header")]
    MissingTarget,

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Origin-stage router.
#[derive(Debug)]
pub struct OriginRouter<R> {
    renderer: R,
    domain: String,
    origin: OriginConfig,
}

impl<R: RenderService> OriginRouter<R> {
    pub fn new(renderer: R, domain: impl Into<String>, origin: OriginConfig) -> Self {
        Self {
            renderer,
            domain: domain.into(),
            origin,
        }
    }

    pub fn from_config(renderer: R, config: &PrerenderConfig) -> Self {
        Self::new(renderer, config.renderer.domain.clone(), config.origin.clone())
    }

    /// Route one origin request.
    ///
    /// Returns the request unchanged unless the directive is exactly
    /// `"true"` and the renderer answers with a rendered path.
    pub async fn route(&self, request: EdgeRequest) -> Result<EdgeRequest, RouteError> {
        if request.headers.first_value(X_SHOULD_RENDER) != Some("true") {
            tracing::debug!(uri = %request.uri, "Render not requested, passing through");
            return Ok(request);
        }

        let target = request
            .headers
            .first_value(X_TARGET)
            .ok_or(RouteError::MissingTarget)?
            .to_string();

        tracing::info!(target_url = %target, "Requesting pre-rendered page");
        let start = Instant::now();

        let outcome = match self.renderer.render(&target).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(target_url = %target, error = %e, "Rendering service integration failure");
                metrics::record_render("malformed", start);
                return Err(e.into());
            }
        };
        metrics::record_render(outcome.label(), start);

        match outcome {
            RenderOutcome::Rendered(result) => Ok(self.substitute(request, &result)),
            RenderOutcome::Rejected { status, body } => {
                tracing::warn!(
                    target_url = %target,
                    status,
                    body = %body,
                    "Rendering service rejected request, serving original"
                );
                Ok(request)
            }
            RenderOutcome::Unreachable(reason) => {
                tracing::warn!(
                    target_url = %target,
                    error = %reason,
                    "Rendering service unreachable, serving original"
                );
                Ok(request)
            }
        }
    }

    /// Point the request at the rendered artifact on the renderer origin.
    fn substitute(&self, mut request: EdgeRequest, result: &RenderResult) -> EdgeRequest {
        request.headers.set(HOST, self.domain.clone());
        request.origin = Some(Origin::custom(self.custom_origin()));
        request.querystring.clear();
        request.uri = result.uri();

        tracing::info!(
            uri = %request.uri,
            origin = %self.domain,
            "Request redirected to rendered artifact"
        );
        request
    }

    fn custom_origin(&self) -> CustomOrigin {
        CustomOrigin {
            protocol: RENDERER_PROTOCOL.to_string(),
            domain_name: self.domain.clone(),
            port: RENDERER_PORT,
            path: String::new(),
            ssl_protocols: self.origin.ssl_protocols.clone(),
            read_timeout: self.origin.read_timeout,
            keepalive_timeout: self.origin.keepalive_timeout,
            custom_headers: Headers::new(),
        }
    }
}
