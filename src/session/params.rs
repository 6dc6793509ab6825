// Per-turn generation parameters and prompting strategy

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Gemini models selectable from the UI, in tier order
pub const AVAILABLE_MODELS: &[&str] = &["gemini-1.5-pro", "gemini-1.0-pro", "gemini-1.5-flash"];

/// Default worked example shown for one-shot / few-shot prompting
pub const DEFAULT_EXAMPLE: &str = "Q: What is 19 times 4?\n\
A: Let's think step by step...\n\
19 x 4 = (20 x 4) - 4 = 80 - 4 = 76\n\
So, the answer is 76.";

/// Prompting strategy: how many worked examples precede the user's message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    ZeroShot,
    OneShot,
    FewShot,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::ZeroShot => "zero-shot",
            Strategy::OneShot => "one-shot",
            Strategy::FewShot => "few-shot",
        }
    }

    /// Whether this strategy prepends example text to the prompt
    pub fn uses_examples(&self) -> bool {
        !matches!(self, Strategy::ZeroShot)
    }
}

/// Parameters for one generation call.
///
/// Constructed fresh from the active settings on every submission and passed
/// by value; never stored in the session log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParameters {
    /// Model identifier (one of AVAILABLE_MODELS)
    pub model: String,

    /// Sampling temperature, 0.0 to 1.0
    pub temperature: f32,

    /// Nucleus sampling cutoff, 0.0 to 1.0
    pub top_p: f32,

    /// Maximum output tokens, 100 to 2048
    pub max_tokens: u32,

    /// Prompting strategy for this turn
    pub strategy: Strategy,

    /// Worked example(s), required for non-zero-shot strategies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_text: Option<String>,
}

impl GenerationParameters {
    /// Validate ranges and strategy/example consistency
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.temperature) {
            anyhow::bail!(
                "temperature ({}) out of range - must be between 0.0 and 1.0",
                self.temperature
            );
        }

        if !(0.0..=1.0).contains(&self.top_p) {
            anyhow::bail!(
                "top_p ({}) out of range - must be between 0.0 and 1.0",
                self.top_p
            );
        }

        if !(100..=2048).contains(&self.max_tokens) {
            anyhow::bail!(
                "max_tokens ({}) out of range - must be between 100 and 2048",
                self.max_tokens
            );
        }

        if self.strategy.uses_examples() {
            let has_example = self
                .example_text
                .as_deref()
                .map(|e| !e.trim().is_empty())
                .unwrap_or(false);
            if !has_example {
                anyhow::bail!(
                    "{} prompting requires example text - set one with /example",
                    self.strategy.as_str()
                );
            }
        }

        Ok(())
    }

    /// Assemble the final prompt for this turn.
    ///
    /// Zero-shot sends the prompt verbatim; one-shot and few-shot prepend the
    /// example text with a single newline separator. No truncation and no
    /// local token counting.
    pub fn assemble_prompt(&self, prompt: &str) -> String {
        if !self.strategy.uses_examples() {
            return prompt.to_string();
        }

        let example = self.example_text.as_deref().unwrap_or("");
        format!("{}\n{}", example, prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(strategy: Strategy, example: Option<&str>) -> GenerationParameters {
        GenerationParameters {
            model: "gemini-1.5-flash".to_string(),
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 512,
            strategy,
            example_text: example.map(String::from),
        }
    }

    #[test]
    fn test_zero_shot_prompt_verbatim() {
        let p = params(Strategy::ZeroShot, Some("ignored example"));
        assert_eq!(p.assemble_prompt("What is 2+2?"), "What is 2+2?");
    }

    #[test]
    fn test_one_shot_prepends_example_with_single_newline() {
        let p = params(Strategy::OneShot, Some("Q: 1+1?\nA: 2"));
        assert_eq!(
            p.assemble_prompt("What is 2+2?"),
            "Q: 1+1?\nA: 2\nWhat is 2+2?"
        );
    }

    #[test]
    fn test_few_shot_prepends_example_with_single_newline() {
        let p = params(Strategy::FewShot, Some(DEFAULT_EXAMPLE));
        let assembled = p.assemble_prompt("What is 19 times 5?");
        assert_eq!(
            assembled,
            format!("{}\nWhat is 19 times 5?", DEFAULT_EXAMPLE)
        );
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(params(Strategy::ZeroShot, None).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_temperature_out_of_range() {
        let mut p = params(Strategy::ZeroShot, None);
        p.temperature = 1.5;
        assert!(p.validate().is_err());
        p.temperature = -0.1;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_top_p_out_of_range() {
        let mut p = params(Strategy::ZeroShot, None);
        p.top_p = 2.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_max_tokens_out_of_range() {
        let mut p = params(Strategy::ZeroShot, None);
        p.max_tokens = 99;
        assert!(p.validate().is_err());
        p.max_tokens = 2049;
        assert!(p.validate().is_err());
        p.max_tokens = 100;
        assert!(p.validate().is_ok());
        p.max_tokens = 2048;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_example_for_non_zero_shot() {
        assert!(params(Strategy::OneShot, None).validate().is_err());
        assert!(params(Strategy::FewShot, Some("   ")).validate().is_err());
        assert!(params(Strategy::OneShot, Some("Q: ...\nA: ..."))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_strategy_serde_kebab_case() {
        let json = serde_json::to_string(&Strategy::ZeroShot).unwrap();
        assert_eq!(json, "\"zero-shot\"");
        let back: Strategy = serde_json::from_str("\"few-shot\"").unwrap();
        assert_eq!(back, Strategy::FewShot);
    }
}
