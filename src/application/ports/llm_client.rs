use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Single non-streaming completion. No retry; a hang in the external
    /// service is only bounded by the transport's own timeout.
    async fn generate(&self, prompt: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
