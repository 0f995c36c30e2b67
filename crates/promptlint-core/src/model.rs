use serde::{Deserialize, Serialize};

/// One entry of the static golden-rule catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub id: u8,
    pub name: &'static str,
    pub description: &'static str,
}

/// A prompt submitted for auditing, with an optional judge model override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub prompt_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl AnalysisRequest {
    pub fn new(prompt_text: impl Into<String>) -> Self {
        Self {
            prompt_text: prompt_text.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// The judge's pass/fail call for a single rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleVerdict {
    pub rule_id: u8,
    pub passed: bool,
    pub comment: String,
}

/// A concrete improvement tied to one rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub rule_id: u8,
    pub advice: String,
}

/// A completed audit. `verdicts` always holds exactly one entry per
/// catalog rule, sorted by rule id; anything else is rejected upstream
/// as a malformed judge response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: f64,
    pub summary: String,
    pub strengths: Vec<String>,
    pub verdicts: Vec<RuleVerdict>,
    pub suggestions: Vec<Suggestion>,
}

impl AnalysisResult {
    /// Count of rules the judge marked as failed.
    pub fn failed_count(&self) -> usize {
        self.verdicts.iter().filter(|v| !v.passed).count()
    }
}

/// Raw reply from the judge provider, before validation.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
}
