//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the renderer is reachable in principle (domain, token, endpoint)
//! - Validate value ranges (timeouts > 0, attempts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PrerenderConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::PrerenderConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("renderer.domain must not be empty")]
    MissingDomain,

    #[error("renderer.domain '{0}' is not a bare host name")]
    InvalidDomain(String),

    #[error("renderer.api_key must not be empty (set WRENDERER_TOKEN)")]
    MissingApiKey,

    #[error("renderer.endpoint '{0}' is not a valid http(s) URL")]
    InvalidEndpoint(String),

    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),

    #[error("retries.base_delay_ms ({base}) exceeds retries.max_delay_ms ({max})")]
    BackoffRange { base: u64, max: u64 },
}

/// Validate a loaded configuration.
pub fn validate_config(config: &PrerenderConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let renderer = &config.renderer;

    if renderer.domain.trim().is_empty() {
        errors.push(ValidationError::MissingDomain);
    } else if !is_bare_host(&renderer.domain) {
        errors.push(ValidationError::InvalidDomain(renderer.domain.clone()));
    }

    if renderer.api_key.trim().is_empty() {
        errors.push(ValidationError::MissingApiKey);
    }

    if let Some(endpoint) = &renderer.endpoint {
        let valid = Url::parse(endpoint)
            .map(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
            .unwrap_or(false);
        if !valid {
            errors.push(ValidationError::InvalidEndpoint(endpoint.clone()));
        }
    }

    if renderer.timeout_secs == 0 {
        errors.push(ValidationError::ZeroValue("renderer.timeout_secs"));
    }
    if config.retries.enabled && config.retries.max_attempts == 0 {
        errors.push(ValidationError::ZeroValue("retries.max_attempts"));
    }
    if config.retries.base_delay_ms > config.retries.max_delay_ms {
        errors.push(ValidationError::BackoffRange {
            base: config.retries.base_delay_ms,
            max: config.retries.max_delay_ms,
        });
    }
    if config.origin.read_timeout == 0 {
        errors.push(ValidationError::ZeroValue("origin.read_timeout"));
    }
    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroValue("listener.request_timeout_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// The domain becomes both a Host header and `origin.custom.domainName`,
/// so it must parse as the host of an https URL and nothing more.
fn is_bare_host(domain: &str) -> bool {
    match Url::parse(&format!("https://{}", domain)) {
        Ok(url) => {
            url.host_str() == Some(domain.to_ascii_lowercase().as_str())
                && url.port().is_none()
                && url.path() == "/"
        }
        Err(_) => false,
    }
}
