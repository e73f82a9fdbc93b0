//! Backend configuration read from environment variables.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Upstream quiz generator endpoint. Generation is disabled when unset.
    pub generator_url: Option<String>,
    pub generator_timeout: Duration,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Env vars:
    /// - HOST: bind address (default "0.0.0.0")
    /// - PORT: bind port (default 3000)
    /// - GENERATOR_URL: upstream generator endpoint
    /// - GENERATOR_TIMEOUT_SECS: upstream request timeout (default 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_var(&lookup, "PORT", 3000)?;
        let generator_url = lookup("GENERATOR_URL").filter(|url| !url.trim().is_empty());
        let timeout_secs = parse_var(&lookup, "GENERATOR_TIMEOUT_SECS", 30)?;

        Ok(Self {
            host,
            port,
            generator_url,
            generator_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Socket address to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.generator_url, None);
        assert_eq!(config.generator_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8000"),
            ("GENERATOR_URL", "http://localhost:9000/generate-quiz"),
            ("GENERATOR_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8000");
        assert_eq!(
            config.generator_url.as_deref(),
            Some("http://localhost:9000/generate-quiz")
        );
        assert_eq!(config.generator_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_blank_generator_url_is_unset() {
        let config = config_from(&[("GENERATOR_URL", "  ")]).unwrap();
        assert_eq!(config.generator_url, None);
    }

    #[test]
    fn test_invalid_port() {
        let error = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(error.to_string(), "Invalid value for PORT: eighty");
    }
}
