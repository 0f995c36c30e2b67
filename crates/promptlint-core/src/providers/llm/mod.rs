mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::LlmResponse;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("judge API error (status {status}): {body}")]
    Http { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("judge returned no completion text")]
    EmptyCompletion,
}

/// Seam between the analyzer and the judge service. Object-safe so
/// tests can substitute a scripted client.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// One completion round trip. `model` overrides the client's
    /// configured model for this call only.
    async fn complete(
        &self,
        system: &str,
        user: &str,
        model: Option<&str>,
    ) -> Result<LlmResponse, ProviderError>;

    fn provider_name(&self) -> &'static str;
}
