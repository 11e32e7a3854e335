//! HTTP client for the rendering service.
//!
//! # Responsibilities
//! - Build `GET {endpoint}/render?url=<encoded target>` with `x-api-key`
//! - Enforce the per-attempt timeout
//! - Classify responses into `RenderOutcome`, retrying when allowed

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::config::{RendererConfig, RetryConfig};
use crate::edge::headers::X_API_KEY;
use crate::render::types::{parse_render_body, RenderError, RenderOutcome};
use crate::render::RenderService;
use crate::resilience::{is_retryable, Backoff};

/// `RenderService` backed by the rendering service's HTTP API.
#[derive(Clone)]
pub struct HttpRenderClient {
    client: Client,
    base_url: String,
    api_key: String,
    max_attempts: u32,
    backoff: Backoff,
}

impl HttpRenderClient {
    pub fn new(renderer: &RendererConfig, retries: &RetryConfig) -> Result<Self, RenderError> {
        let mut builder = Client::builder().timeout(Duration::from_secs(renderer.timeout_secs));
        if !renderer.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: renderer.base_url(),
            api_key: renderer.api_key.clone(),
            max_attempts: retries.effective_attempts(),
            backoff: Backoff::from_config(retries),
        })
    }

    /// Render API URL for `target`. Every byte outside the unreserved set
    /// is percent-encoded, including `/`, `:`, `?` and `&`.
    pub fn render_url(&self, target: &str) -> String {
        format!("{}/render?url={}", self.base_url, urlencoding::encode(target))
    }

    async fn attempt(&self, url: &str) -> Result<RenderOutcome, RenderError> {
        let response = match self
            .client
            .get(url)
            .header(X_API_KEY, &self.api_key)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Ok(RenderOutcome::Unreachable(e.to_string())),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return Ok(RenderOutcome::Unreachable(e.to_string())),
        };

        if status != StatusCode::OK {
            return Ok(RenderOutcome::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        parse_render_body(&body).map(RenderOutcome::Rendered)
    }
}

impl RenderService for HttpRenderClient {
    async fn render(&self, target: &str) -> Result<RenderOutcome, RenderError> {
        let url = self.render_url(target);
        let mut attempts = 0;

        loop {
            attempts += 1;
            let outcome = self.attempt(&url).await?;

            if attempts >= self.max_attempts || !is_retryable(&outcome) {
                return Ok(outcome);
            }

            let delay = self.backoff.delay(attempts);
            tracing::info!(
                target_url = %target,
                attempt = attempts,
                delay = ?delay,
                outcome = outcome.label(),
                "Retrying render request"
            );
            tokio::time::sleep(delay).await;
        }
    }
}

impl std::fmt::Debug for HttpRenderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRenderClient")
            .field("base_url", &self.base_url)
            .field("max_attempts", &self.max_attempts)
            .finish_non_exhaustive()
    }
}
