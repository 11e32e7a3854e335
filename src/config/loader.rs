//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::PrerenderConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from an optional TOML file, apply environment
/// overrides and validate the result.
pub fn load_config(path: Option<&Path>) -> Result<PrerenderConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Like `load_config` but without validation. The viewer stage needs no
/// renderer settings, so it must not fail on their absence.
pub fn read_config(path: Option<&Path>) -> Result<PrerenderConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => PrerenderConfig::default(),
    };
    config.apply_env();
    Ok(config)
}

/// Parse TOML content without validation or environment overrides.
pub fn parse_config(content: &str) -> Result<PrerenderConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(
            r#"
            [renderer]
            domain = "render.example.com"
            api_key = "token"

            [retries]
            enabled = true
            max_attempts = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.renderer.domain, "render.example.com");
        assert_eq!(config.renderer.timeout_secs, 5);
        assert_eq!(config.retries.effective_attempts(), 3);
        assert_eq!(config.origin.keepalive_timeout, 30);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[renderer\ndomain = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[renderer]\ndomain = \"render.example.com\"\napi_key = \"token\"\ntimeout_secs = 2"
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.renderer.timeout_secs, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Some(Path::new("/nonexistent/prerender.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::Validation(vec![
            ValidationError::MissingDomain,
            ValidationError::ZeroValue("renderer.timeout_secs"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: renderer.domain must not be empty, renderer.timeout_secs must be greater than zero"
        );
    }
}
