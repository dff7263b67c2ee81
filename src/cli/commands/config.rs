//! Implementation of the `legacy-bridge config` command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::load_config;
use crate::domain::models::Config;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Configuration file to load instead of `.legacy-bridge/config.yaml`
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub fn execute(args: &ConfigArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    print!("{}", render(config)?);
    Ok(())
}

/// YAML rendering with the API key masked.
fn render(mut config: Config) -> Result<String> {
    if !config.legacy_api.api_key.is_empty() {
        config.legacy_api.api_key = "[REDACTED]".to_string();
    }
    serde_yaml::to_string(&config).context("Failed to serialize configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_masks_api_key() {
        let mut config = Config::default();
        config.legacy_api.api_key = "sk-very-secret".to_string();

        let yaml = render(config).unwrap();
        assert!(!yaml.contains("sk-very-secret"));
        assert!(yaml.contains("[REDACTED]"));
        assert!(yaml.contains("base_url: http://localhost:4000"));
    }

    #[test]
    fn test_render_round_trips_through_yaml() {
        let yaml = render(Config::default()).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.cache.max_size, 100);
        assert_eq!(parsed.retry.max_attempts, 3);
        assert!(parsed.legacy_api.api_key.is_empty());
    }
}
