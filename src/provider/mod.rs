// Text generation provider abstraction
//
// The turn processor only sees this trait, so the Gemini client can be
// swapped for a stub in tests.

use anyhow::Result;
use async_trait::async_trait;

pub mod gemini;

pub use gemini::GeminiClient;

/// One generation call: final prompt plus the numeric sampling parameters
/// and the model identifier.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

/// Trait for external text-generation services.
///
/// A single call either yields the generated text or a fault with a
/// human-readable message. No streaming, no retry, no cancellation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the request. Called exactly once per turn.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    /// Provider name (e.g., "gemini")
    fn name(&self) -> &str;

    /// Model used when a request doesn't specify one
    fn default_model(&self) -> &str;
}
