// Configuration structs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::session::{Strategy, AVAILABLE_MODELS, DEFAULT_EXAMPLE};

/// Session configuration.
///
/// The API key lives here for the duration of the session and is passed into
/// the turn processor per submission; there is no process-global credential.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key
    pub api_key: String,

    /// Default model for new turns
    pub model: String,

    /// Default sampling temperature
    pub temperature: f32,

    /// Default nucleus sampling cutoff
    pub top_p: f32,

    /// Default maximum output tokens
    pub max_tokens: u32,

    /// Default prompting strategy
    pub strategy: Strategy,

    /// Worked example(s) used by one-shot and few-shot prompting
    pub example_text: String,

    /// Filename for transcript export
    pub export_filename: String,

    /// Pause after a successful response before rendering, in milliseconds.
    /// Purely presentational; 0 disables it.
    pub response_delay_ms: u64,
}

impl Config {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: "gemini-1.5-flash".to_string(),
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 512,
            strategy: Strategy::ZeroShot,
            example_text: DEFAULT_EXAMPLE.to_string(),
            export_filename: "chat_history.txt".to_string(),
            response_delay_ms: 0,
        }
    }

    /// Validate configuration and return helpful errors
    pub fn validate(&self) -> anyhow::Result<()> {
        if !AVAILABLE_MODELS.contains(&self.model.as_str()) {
            anyhow::bail!(
                "Unknown model '{}'\n\nAvailable models: {}",
                self.model,
                AVAILABLE_MODELS.join(", ")
            );
        }

        if !(0.0..=1.0).contains(&self.temperature) {
            anyhow::bail!("temperature must be between 0.0 and 1.0");
        }

        if !(0.0..=1.0).contains(&self.top_p) {
            anyhow::bail!("top_p must be between 0.0 and 1.0");
        }

        if !(100..=2048).contains(&self.max_tokens) {
            anyhow::bail!("max_tokens must be between 100 and 2048");
        }

        Ok(())
    }

    /// Path of the config file: ~/.gemchat/config.toml
    pub fn config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(home.join(".gemchat").join("config.toml"))
    }

    /// Save configuration to TOML at ~/.gemchat/config.toml
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(&TomlConfig::from(self))?;
        std::fs::write(&config_path, toml_string)?;

        tracing::info!("Configuration saved to {:?}", config_path);
        Ok(())
    }
}

/// TOML-serializable config (subset of Config; every field optional on read)
#[derive(Serialize, Deserialize)]
pub(super) struct TomlConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub top_p: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub strategy: Option<Strategy>,
    #[serde(default)]
    pub example_text: Option<String>,
    #[serde(default)]
    pub export_filename: Option<String>,
    #[serde(default)]
    pub response_delay_ms: Option<u64>,
}

impl From<&Config> for TomlConfig {
    fn from(config: &Config) -> Self {
        Self {
            api_key: Some(config.api_key.clone()),
            model: Some(config.model.clone()),
            temperature: Some(config.temperature),
            top_p: Some(config.top_p),
            max_tokens: Some(config.max_tokens),
            strategy: Some(config.strategy),
            example_text: Some(config.example_text.clone()),
            export_filename: Some(config.export_filename.clone()),
            response_delay_ms: Some(config.response_delay_ms),
        }
    }
}

impl TomlConfig {
    /// Merge file values over the built-in defaults
    pub fn into_config(self) -> Config {
        let mut config = Config::new(self.api_key.unwrap_or_default());
        if let Some(model) = self.model {
            config.model = model;
        }
        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }
        if let Some(top_p) = self.top_p {
            config.top_p = top_p;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.max_tokens = max_tokens;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(example_text) = self.example_text {
            config.example_text = example_text;
        }
        if let Some(export_filename) = self.export_filename {
            config.export_filename = export_filename;
        }
        if let Some(delay) = self.response_delay_ms {
            config.response_delay_ms = delay;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("test-key".to_string());
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.strategy, Strategy::ZeroShot);
        assert_eq!(config.export_filename, "chat_history.txt");
        assert_eq!(config.response_delay_ms, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_model() {
        let mut config = Config::new("test-key".to_string());
        config.model = "gpt-4".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let mut config = Config::new("test-key".to_string());
        config.temperature = 1.2;
        assert!(config.validate().is_err());

        let mut config = Config::new("test-key".to_string());
        config.max_tokens = 50;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip_preserves_fields() {
        let mut config = Config::new("test-key".to_string());
        config.model = "gemini-1.5-pro".to_string();
        config.strategy = Strategy::FewShot;
        config.response_delay_ms = 1200;

        let toml_string = toml::to_string_pretty(&TomlConfig::from(&config)).unwrap();
        let parsed: TomlConfig = toml::from_str(&toml_string).unwrap();
        let back = parsed.into_config();

        assert_eq!(back.api_key, "test-key");
        assert_eq!(back.model, "gemini-1.5-pro");
        assert_eq!(back.strategy, Strategy::FewShot);
        assert_eq!(back.response_delay_ms, 1200);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let parsed: TomlConfig = toml::from_str("api_key = \"k\"\nmodel = \"gemini-1.0-pro\"").unwrap();
        let config = parsed.into_config();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.model, "gemini-1.0-pro");
        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.example_text, DEFAULT_EXAMPLE);
    }
}
