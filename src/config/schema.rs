//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! prerender stages. All types derive Serde traits for deserialization
//! from config files.

use serde::{Deserialize, Serialize};

/// Environment variable overriding `renderer.domain`.
pub const ENV_RENDERER_DOMAIN: &str = "WRENDERER_DOMAIN";
/// Environment variable overriding `renderer.api_key`.
pub const ENV_RENDERER_TOKEN: &str = "WRENDERER_TOKEN";
/// Environment variable overriding `renderer.endpoint`.
pub const ENV_RENDERER_ENDPOINT: &str = "WRENDERER_ENDPOINT";

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PrerenderConfig {
    /// Rendering service connection settings.
    pub renderer: RendererConfig,

    /// Retry configuration for the rendering call.
    pub retries: RetryConfig,

    /// Custom origin descriptor written on successful substitution.
    pub origin: OriginConfig,

    /// Local invocation service listener.
    pub listener: ListenerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl PrerenderConfig {
    /// Apply `WRENDERER_*` environment overrides on top of file values.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary lookup. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(domain) = lookup(ENV_RENDERER_DOMAIN) {
            self.renderer.domain = domain;
        }
        if let Some(token) = lookup(ENV_RENDERER_TOKEN) {
            self.renderer.api_key = token;
        }
        if let Some(endpoint) = lookup(ENV_RENDERER_ENDPOINT) {
            self.renderer.endpoint = Some(endpoint);
        }
    }
}

/// Rendering service settings.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Rendering service domain (e.g., "render.example.com").
    pub domain: String,

    /// API token sent as `x-api-key`.
    pub api_key: String,

    /// Base URL override for the render API. Defaults to `https://{domain}`.
    pub endpoint: Option<String>,

    /// Per-attempt timeout for the render call in seconds.
    pub timeout_secs: u64,

    /// Honor HTTP(S)_PROXY / NO_PROXY from the environment.
    pub use_system_proxy: bool,
}

impl RendererConfig {
    /// Base URL the render API is reached at, without trailing slash.
    pub fn base_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://{}", self.domain),
        }
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            domain: String::new(),
            api_key: String::new(),
            endpoint: None,
            timeout_secs: 5,
            use_system_proxy: true,
        }
    }
}

// api_key stays out of logs.
impl std::fmt::Debug for RendererConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererConfig")
            .field("domain", &self.domain)
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("use_system_proxy", &self.use_system_proxy)
            .finish()
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Enable retries.
    pub enabled: bool,

    /// Maximum number of attempts, including the first.
    pub max_attempts: u32,

    /// Base delay for exponential backoff in milliseconds.
    pub base_delay_ms: u64,

    /// Maximum delay for exponential backoff in milliseconds.
    pub max_delay_ms: u64,
}

impl RetryConfig {
    /// Attempts actually made for one render call.
    pub fn effective_attempts(&self) -> u32 {
        if self.enabled {
            self.max_attempts.max(1)
        } else {
            1
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_attempts: 2,
            base_delay_ms: 100,
            max_delay_ms: 1000,
        }
    }
}

/// Custom origin settings used when a request is redirected to the renderer.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OriginConfig {
    /// TLS protocol versions allowed towards the renderer origin.
    pub ssl_protocols: Vec<String>,

    /// Origin read timeout in seconds.
    pub read_timeout: u32,

    /// Origin keep-alive timeout in seconds.
    pub keepalive_timeout: u32,
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            ssl_protocols: vec!["TLSv1.1".to_string(), "TLSv1.2".to_string()],
            read_timeout: 30,
            keepalive_timeout: 30,
        }
    }
}

/// Listener configuration for `serve` mode.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// Per-invocation timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PrerenderConfig::default();
        assert_eq!(config.renderer.timeout_secs, 5);
        assert_eq!(config.origin.ssl_protocols, vec!["TLSv1.1", "TLSv1.2"]);
        assert_eq!(config.origin.read_timeout, 30);
        assert_eq!(config.retries.effective_attempts(), 1);
    }

    #[test]
    fn test_base_url() {
        let mut renderer = RendererConfig {
            domain: "render.example.com".into(),
            ..Default::default()
        };
        assert_eq!(renderer.base_url(), "https://render.example.com");

        renderer.endpoint = Some("http://127.0.0.1:9000/".into());
        assert_eq!(renderer.base_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_overrides() {
        let mut config = PrerenderConfig::default();
        config.renderer.domain = "file.example.com".into();

        config.apply_overrides(|key| match key {
            ENV_RENDERER_TOKEN => Some("secret".to_string()),
            ENV_RENDERER_DOMAIN => Some("  ".to_string()),
            _ => None,
        });

        assert_eq!(config.renderer.api_key, "secret");
        assert_eq!(config.renderer.domain, "file.example.com");
        assert!(config.renderer.endpoint.is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let renderer = RendererConfig {
            api_key: "super-secret".into(),
            ..Default::default()
        };
        let printed = format!("{:?}", renderer);
        assert!(!printed.contains("super-secret"));
    }
}
