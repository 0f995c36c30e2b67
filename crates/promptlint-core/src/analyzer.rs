use std::sync::Arc;

use crate::config::AnalyzerConfig;
use crate::errors::AuditError;
use crate::model::{AnalysisRequest, AnalysisResult};
use crate::parse;
use crate::prompt;
use crate::providers::llm::{GeminiClient, LlmClient, ProviderError};

/// Owns the judge round trip: validate the request, build the
/// instruction, call the provider under a deadline, validate the reply.
/// No caching, no retries; every call is an independent round trip.
#[derive(Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    client: Arc<dyn LlmClient>,
}

impl Analyzer {
    /// Analyzer backed by the real Gemini client.
    pub fn from_config(config: AnalyzerConfig) -> Self {
        let client = Arc::new(GeminiClient::new(&config));
        Self { config, client }
    }

    /// Analyzer with a caller-supplied client. Used by tests and by
    /// anything that wants to decorate the provider seam.
    pub fn with_client(config: AnalyzerConfig, client: Arc<dyn LlmClient>) -> Self {
        Self { config, client }
    }

    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResult, AuditError> {
        if request.prompt_text.trim().is_empty() {
            return Err(AuditError::invalid_request("prompt text must not be empty"));
        }

        let system = prompt::system_prompt();
        let user = prompt::user_message(&request.prompt_text);
        let provider = self.client.provider_name();

        let call = self.client.complete(&system, &user, request.model.as_deref());
        let response = match tokio::time::timeout(self.config.timeout, call).await {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => return Err(classify(err, provider)),
            Err(_) => {
                tracing::warn!(provider, timeout_secs = self.config.timeout.as_secs(), "judge call timed out");
                return Err(AuditError::timeout(format!(
                    "judge call exceeded {}s",
                    self.config.timeout.as_secs()
                ))
                .with_provider(provider));
            }
        };

        tracing::debug!(provider, model = %response.model, "judge reply received");
        parse::parse_verdicts(&response.text)
    }

    /// Blocking form of [`Analyzer::analyze`], identical semantics.
    /// Spins up a current-thread runtime; must not be called from
    /// within an async context.
    pub fn analyze_blocking(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResult, AuditError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build current-thread runtime");
        rt.block_on(self.analyze(request))
    }
}

fn classify(err: ProviderError, provider: &'static str) -> AuditError {
    match err {
        ProviderError::Http { status, body } => {
            AuditError::provider_error(format!("judge API error: {}", body))
                .with_status(status)
                .with_provider(provider)
        }
        ProviderError::Transport(e) => {
            AuditError::provider_error(format!("transport error: {}", e)).with_provider(provider)
        }
        // A 200 with no text is the judge misbehaving, not the network.
        ProviderError::EmptyCompletion => {
            AuditError::malformed_response("judge returned no completion text")
                .with_provider(provider)
        }
    }
}
