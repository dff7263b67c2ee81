use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Prefix of environment variable overrides, nested with `__`.
pub const ENV_PREFIX: &str = "LEGACY_BRIDGE_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port: {0}. Must be between 1 and 65535")]
    InvalidPort(u16),

    #[error("Invalid legacy API base URL: {0:?}. Must start with http:// or https://")]
    InvalidBaseUrl(String),

    #[error("Invalid legacy API timeout: {0}ms. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid cache max_size: {0}. Must be at least 1")]
    InvalidCacheSize(usize),

    #[error("Invalid cache cleanup interval: {0}s. Must be at least 1")]
    InvalidCleanupInterval(u64),

    #[error("Invalid max_attempts: {0}. Must be at least 1")]
    InvalidMaxAttempts(u32),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid API prefix: {0:?}. Must start with '/'")]
    InvalidApiPrefix(String),

    #[error("Invalid CORS origin: {0:?}. Must be an http:// or https:// origin")]
    InvalidCorsOrigin(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .legacy-bridge/config.yaml
    /// 3. .legacy-bridge/local.yaml (optional local overrides)
    /// 4. Environment variables (`LEGACY_BRIDGE_*`, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Self::base()
            .merge(Yaml::file(".legacy-bridge/config.yaml"))
            .merge(Yaml::file(".legacy-bridge/local.yaml"))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honouring env overrides
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Self::base()
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn base() -> Figment {
        Figment::new().merge(Serialized::defaults(Config::default()))
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.server.port == 0 {
            return Err(ConfigError::InvalidPort(config.server.port));
        }

        if !config.server.api_prefix.starts_with('/') {
            return Err(ConfigError::InvalidApiPrefix(
                config.server.api_prefix.clone(),
            ));
        }

        // Credentialed CORS cannot use a wildcard origin
        if let Some(origin) = config
            .server
            .cors_origins
            .iter()
            .find(|origin| !is_http_url(origin))
        {
            return Err(ConfigError::InvalidCorsOrigin(origin.clone()));
        }

        let base_url = &config.legacy_api.base_url;
        if !is_http_url(base_url) {
            return Err(ConfigError::InvalidBaseUrl(base_url.clone()));
        }

        if config.legacy_api.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout(config.legacy_api.timeout_ms));
        }

        if config.cache.max_size == 0 {
            return Err(ConfigError::InvalidCacheSize(config.cache.max_size));
        }

        if config.cache.cleanup_interval_secs == 0 {
            return Err(ConfigError::InvalidCleanupInterval(
                config.cache.cleanup_interval_secs,
            ));
        }

        if config.retry.max_attempts == 0 {
            return Err(ConfigError::InvalidMaxAttempts(config.retry.max_attempts));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
