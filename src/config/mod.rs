mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`) and applies
/// environment overrides.
///
/// A missing file at the default path is not an error: the service can be
/// configured entirely through `GEMINI_API_KEY`. A missing file at an explicit
/// `CONFIG_PATH` is.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let mut config = if explicit_path.is_none() && !Path::new(&config_path).exists() {
        debug!("No {} found, using default configuration", config_path);
        Config::default()
    } else {
        load_from_path(&config_path).await?
    };

    config.apply_overrides(|name| env::var(name).ok());

    Ok(config)
}

/// Reads and parses a YAML config file without applying overrides.
pub async fn load_from_path(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
