//! Inference port for AI model interactions

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Result of an inference request
#[derive(Debug, Clone)]
pub struct InferenceResult {
    /// Generated text
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Tokens consumed, if the backend reports usage
    pub tokens_used: Option<u32>,
    /// Generation time in milliseconds
    pub latency_ms: u64,
}

/// Port for text generation backends
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Generate a completion for the given prompt
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Inference` if the backend fails.
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError>;

    /// Name of the currently active model
    fn current_model(&self) -> String;
}
