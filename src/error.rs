// Typed errors for a single chat turn

use thiserror::Error;

/// Everything that can go wrong when submitting one message.
///
/// All variants are recoverable: the REPL reports them and returns to the
/// prompt with the session log unchanged.
#[derive(Debug, Error)]
pub enum TurnError {
    /// No API key was provided with the submission
    #[error("no API key configured - set GEMINI_API_KEY or add one to ~/.gemchat/config.toml")]
    MissingCredential,

    /// The prompt was empty or whitespace-only
    #[error("prompt is empty")]
    EmptyPrompt,

    /// The generation call faulted (auth, quota, network, malformed request).
    /// Carries the underlying fault description unmodified.
    #[error("generation failed: {0}")]
    GenerationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_failed_preserves_message() {
        let err = TurnError::GenerationFailed("quota exceeded".to_string());
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_missing_credential_mentions_config() {
        let err = TurnError::MissingCredential;
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
