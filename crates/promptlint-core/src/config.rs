use std::time::Duration;

use crate::errors::AuditError;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Low temperature: the judge should grade, not improvise.
pub const JUDGE_TEMPERATURE: f32 = 0.2;
pub const JUDGE_MAX_OUTPUT_TOKENS: u32 = 2048;

/// Runtime settings for the analyzer. Built once at process start and
/// shared read-only with every request.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout: Duration,
}

impl AnalyzerConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: JUDGE_TEMPERATURE,
            max_output_tokens: JUDGE_MAX_OUTPUT_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Reads `GEMINI_API_KEY` (required) plus the optional
    /// `GEMINI_API_BASE`, `PROMPTLINT_MODEL` and
    /// `PROMPTLINT_TIMEOUT_SECS` overrides.
    pub fn from_env() -> Result<Self, AuditError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            AuditError::provider_error(
                "API key is missing. Set the GEMINI_API_KEY environment variable.",
            )
        })?;

        let mut config = Self::new(api_key);
        if let Ok(base) = std::env::var("GEMINI_API_BASE") {
            if !base.trim().is_empty() {
                config.api_base = base;
            }
        }
        if let Ok(model) = std::env::var("PROMPTLINT_MODEL") {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }
        if let Ok(secs) = std::env::var("PROMPTLINT_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                AuditError::invalid_request(format!(
                    "PROMPTLINT_TIMEOUT_SECS must be a positive integer, got {:?}",
                    secs
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
