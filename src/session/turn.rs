// Turn processing: prompt assembly, one generation call, log append

use crate::error::TurnError;
use crate::provider::{GenerationRequest, TextGenerator};

use super::log::{ConversationEntry, SessionLog};
use super::params::GenerationParameters;

/// Session-level state. There is no third state: the submission either
/// completes or faults, and both paths return to Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Submitting,
}

/// Processes one user submission at a time against an external generator.
///
/// Owns the session log exclusively; a successful turn appends exactly two
/// entries (User then Assistant), a failed turn appends none.
pub struct TurnProcessor {
    generator: Box<dyn TextGenerator>,
    log: SessionLog,
    state: SessionState,
}

impl TurnProcessor {
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self {
            generator,
            log: SessionLog::new(),
            state: SessionState::Idle,
        }
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Process one submission: validate, assemble the final prompt, call the
    /// generator exactly once, and on success record the exchange.
    ///
    /// The generated text is returned unmodified. Any fault from the external
    /// call surfaces as `GenerationFailed` carrying the underlying message.
    pub async fn process(
        &mut self,
        prompt: &str,
        params: &GenerationParameters,
        api_key: &str,
    ) -> Result<String, TurnError> {
        self.state = SessionState::Submitting;
        let result = self.process_inner(prompt, params, api_key).await;
        self.state = SessionState::Idle;
        result
    }

    async fn process_inner(
        &mut self,
        prompt: &str,
        params: &GenerationParameters,
        api_key: &str,
    ) -> Result<String, TurnError> {
        if api_key.trim().is_empty() {
            return Err(TurnError::MissingCredential);
        }

        if prompt.trim().is_empty() {
            return Err(TurnError::EmptyPrompt);
        }

        let final_prompt = params.assemble_prompt(prompt);

        let request = GenerationRequest {
            model: params.model.clone(),
            prompt: final_prompt,
            temperature: params.temperature,
            top_p: params.top_p,
            max_tokens: params.max_tokens,
        };

        tracing::debug!(model = %request.model, strategy = params.strategy.as_str(), "Submitting turn");

        let reply = self
            .generator
            .generate(&request)
            .await
            .map_err(|e| TurnError::GenerationFailed(e.to_string()))?;

        // Record the exchange only after the call succeeds: the user's prompt
        // as typed (not the assembled prompt), then the reply.
        self.log.append(ConversationEntry::user(prompt));
        self.log.append(ConversationEntry::assistant(reply.clone()));

        Ok(reply)
    }
}
