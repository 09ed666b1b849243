use std::time::Duration;

pub mod api_error;
pub mod gemini;

pub use gemini::GeminiModel;

/// Generative model interface. Takes a prompt, returns the raw reply text.
#[async_trait::async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, CallFailure>;

    /// Provider metadata
    fn metadata(&self) -> ModelMetadata;
}

#[derive(Debug, Clone)]
pub struct ModelMetadata {
    pub provider: String,
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CallFailure {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Prompt blocked: {0}")]
    Blocked(String),

    #[error("Empty response from model")]
    EmptyResponse,
}
