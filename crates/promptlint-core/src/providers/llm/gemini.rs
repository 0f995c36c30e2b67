use async_trait::async_trait;
use serde_json::json;

use super::{LlmClient, ProviderError};
use crate::config::AnalyzerConfig;
use crate::model::LlmResponse;

/// Client for the Gemini `generateContent` REST API.
pub struct GeminiClient {
    model: String,
    api_key: String,
    api_base: String,
    temperature: f32,
    max_output_tokens: u32,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        model: Option<&str>,
    ) -> Result<LlmResponse, ProviderError> {
        let model = model.unwrap_or(&self.model);
        let url = format!("{}/v1beta/models/{}:generateContent", self.api_base, model);

        let body = json!({
            "system_instruction": { "parts": [{ "text": system }] },
            "contents": [{ "role": "user", "parts": [{ "text": user }] }],
            "generationConfig": {
                "temperature": self.temperature,
                "maxOutputTokens": self.max_output_tokens,
                "responseMimeType": "application/json",
            },
        });

        tracing::debug!(model, "sending judge request");
        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let payload: serde_json::Value = resp.json().await?;
        let text = payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .ok_or(ProviderError::EmptyCompletion)?
            .to_string();

        Ok(LlmResponse {
            text,
            provider: "gemini".to_string(),
            model: model.to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
