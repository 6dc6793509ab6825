// Slash command handling

use anyhow::Result;

use crate::config::Config;
use crate::session::{SessionLog, Strategy, AVAILABLE_MODELS};

pub enum Command {
    Help,
    Quit,
    Model(String),
    Temperature(f32),
    TopP(f32),
    MaxTokens(u32),
    Strategy(Strategy),
    Example(String),
    History,
    Export,
    Save,
    /// Recognized as a command but malformed; carries the complaint
    Invalid(String),
}

impl Command {
    /// Parse a slash command. Returns None for ordinary prompts.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if !input.starts_with('/') {
            return None;
        }

        let (name, rest) = match input.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (input, ""),
        };

        match name {
            "/help" => Some(Command::Help),
            "/quit" | "/exit" => Some(Command::Quit),
            "/history" => Some(Command::History),
            "/export" => Some(Command::Export),
            "/save" => Some(Command::Save),
            "/model" => {
                if rest.is_empty() {
                    Some(Command::Invalid(format!(
                        "Usage: /model <name>  (one of: {})",
                        AVAILABLE_MODELS.join(", ")
                    )))
                } else {
                    Some(Command::Model(rest.to_string()))
                }
            }
            "/temperature" | "/temp" => match rest.parse::<f32>() {
                Ok(value) => Some(Command::Temperature(value)),
                Err(_) => Some(Command::Invalid(
                    "Usage: /temperature <0.0-1.0>".to_string(),
                )),
            },
            "/top-p" | "/topp" => match rest.parse::<f32>() {
                Ok(value) => Some(Command::TopP(value)),
                Err(_) => Some(Command::Invalid("Usage: /top-p <0.0-1.0>".to_string())),
            },
            "/max-tokens" => match rest.parse::<u32>() {
                Ok(value) => Some(Command::MaxTokens(value)),
                Err(_) => Some(Command::Invalid(
                    "Usage: /max-tokens <100-2048>".to_string(),
                )),
            },
            "/strategy" => match rest {
                "zero" | "zero-shot" => Some(Command::Strategy(Strategy::ZeroShot)),
                "one" | "one-shot" => Some(Command::Strategy(Strategy::OneShot)),
                "few" | "few-shot" => Some(Command::Strategy(Strategy::FewShot)),
                _ => Some(Command::Invalid(
                    "Usage: /strategy <zero|one|few>".to_string(),
                )),
            },
            "/example" => {
                if rest.is_empty() {
                    Some(Command::Invalid("Usage: /example <text>".to_string()))
                } else {
                    Some(Command::Example(rest.to_string()))
                }
            }
            other => Some(Command::Invalid(format!(
                "Unknown command '{}'. Type /help for commands.",
                other
            ))),
        }
    }
}

/// Apply a command to the active settings / log and return the text to print
pub fn handle_command(command: Command, config: &mut Config, log: &SessionLog) -> Result<String> {
    match command {
        Command::Help => Ok(format_help()),
        Command::Quit => Ok("Goodbye!".to_string()),
        Command::Invalid(message) => Ok(message),
        Command::Model(model) => {
            if !AVAILABLE_MODELS.contains(&model.as_str()) {
                return Ok(format!(
                    "Unknown model '{}'. Available: {}",
                    model,
                    AVAILABLE_MODELS.join(", ")
                ));
            }
            config.model = model.clone();
            Ok(format!("Model set to {}", model))
        }
        Command::Temperature(value) => {
            if !(0.0..=1.0).contains(&value) {
                return Ok("temperature must be between 0.0 and 1.0".to_string());
            }
            config.temperature = value;
            Ok(format!("Temperature set to {:.2}", value))
        }
        Command::TopP(value) => {
            if !(0.0..=1.0).contains(&value) {
                return Ok("top_p must be between 0.0 and 1.0".to_string());
            }
            config.top_p = value;
            Ok(format!("Top-p set to {:.2}", value))
        }
        Command::MaxTokens(value) => {
            if !(100..=2048).contains(&value) {
                return Ok("max_tokens must be between 100 and 2048".to_string());
            }
            config.max_tokens = value;
            Ok(format!("Max output tokens set to {}", value))
        }
        Command::Strategy(strategy) => {
            config.strategy = strategy;
            Ok(format!("Prompting strategy set to {}", strategy.as_str()))
        }
        Command::Example(text) => {
            config.example_text = text;
            Ok("Example text updated".to_string())
        }
        Command::History => {
            if log.is_empty() {
                Ok("No conversation yet.".to_string())
            } else {
                Ok(log.export())
            }
        }
        Command::Save => {
            config.save()?;
            Ok("Settings saved to ~/.gemchat/config.toml".to_string())
        }
        Command::Export => {
            if log.is_empty() {
                return Ok("Nothing to export yet.".to_string());
            }
            std::fs::write(&config.export_filename, log.export())
                .map_err(|e| anyhow::anyhow!("Failed to write transcript: {}", e))?;
            Ok(format!(
                "Transcript written to {} ({} entries)",
                config.export_filename,
                log.len()
            ))
        }
    }
}

fn format_help() -> String {
    r#"Available commands:
  /help              - Show this help message
  /quit              - Exit the chat
  /model <name>      - Switch model (gemini-1.5-pro, gemini-1.0-pro, gemini-1.5-flash)
  /temperature <t>   - Set sampling temperature (0.0-1.0)
  /top-p <p>         - Set nucleus sampling cutoff (0.0-1.0)
  /max-tokens <n>    - Set maximum output tokens (100-2048)
  /strategy <s>      - Set prompting strategy (zero, one, few)
  /example <text>    - Set the worked example used by one/few-shot
  /history           - Show the conversation so far
  /export            - Write the transcript to chat_history.txt
  /save              - Persist the current settings to the config file

Type any message to chat!"#
        .to_string()
}
