// Configuration loader
// Loads settings from ~/.gemchat/config.toml or the GEMINI_API_KEY variable

use anyhow::{bail, Context, Result};
use std::fs;

use super::settings::{Config, TomlConfig};

/// Load configuration from the gemchat config file or environment
pub fn load_config() -> Result<Config> {
    if let Some(config) = try_load_from_file()? {
        return Ok(config);
    }

    // Fall back to environment variable
    if let Ok(api_key) = std::env::var("GEMINI_API_KEY") {
        if !api_key.trim().is_empty() {
            return Ok(Config::new(api_key));
        }
    }

    bail!(
        "No configuration found.\n\n\
         Either set the environment variable:\n  \
         export GEMINI_API_KEY=\"...\"\n\n\
         or create ~/.gemchat/config.toml:\n  \
         api_key = \"...\"\n  \
         model = \"gemini-1.5-flash\""
    )
}

fn try_load_from_file() -> Result<Option<Config>> {
    let config_path = Config::config_path()?;

    if !config_path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let toml_config: TomlConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    let mut config = toml_config.into_config();

    // A file without a key still works if the environment provides one
    if config.api_key.trim().is_empty() {
        if let Ok(api_key) = std::env::var("GEMINI_API_KEY") {
            config.api_key = api_key;
        }
    }

    tracing::debug!("Loaded configuration from {:?}", config_path);
    Ok(Some(config))
}
