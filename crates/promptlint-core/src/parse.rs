//! Turns the judge's raw reply into a validated [`AnalysisResult`].
//! Every deviation from the expected shape is a `MalformedResponse`;
//! there are no partial results.

use serde::Deserialize;

use crate::errors::AuditError;
use crate::model::{AnalysisResult, RuleVerdict, Suggestion};
use crate::rules::RULE_COUNT;

#[derive(Deserialize)]
struct JudgePayload {
    overall_score: f64,
    summary: String,
    #[serde(default)]
    strengths: Vec<String>,
    verdicts: Vec<JudgeVerdict>,
    #[serde(default)]
    suggestions: Vec<JudgeSuggestion>,
}

#[derive(Deserialize)]
struct JudgeVerdict {
    rule: u8,
    passed: bool,
    #[serde(default)]
    comment: String,
}

#[derive(Deserialize)]
struct JudgeSuggestion {
    rule: u8,
    advice: String,
}

/// Parse and validate judge output. Tolerates prose or code fences
/// around the JSON object; tolerates nothing about its shape.
pub fn parse_verdicts(raw: &str) -> Result<AnalysisResult, AuditError> {
    let text = raw.trim();
    let start = text
        .find('{')
        .ok_or_else(|| AuditError::malformed_response("no JSON object in judge output"))?;

    let payload: JudgePayload = serde_json::Deserializer::from_str(&text[start..])
        .into_iter::<JudgePayload>()
        .next()
        .ok_or_else(|| AuditError::malformed_response("no JSON value in judge output"))?
        .map_err(|e| AuditError::malformed_response(format!("invalid judge JSON: {}", e)))?;

    if payload.verdicts.len() != RULE_COUNT {
        return Err(AuditError::malformed_response(format!(
            "expected {} verdicts, judge returned {}",
            RULE_COUNT,
            payload.verdicts.len()
        )));
    }

    let mut seen = [false; RULE_COUNT];
    for v in &payload.verdicts {
        let idx = rule_index(v.rule)?;
        if seen[idx] {
            return Err(AuditError::malformed_response(format!(
                "duplicate verdict for rule {}",
                v.rule
            )));
        }
        seen[idx] = true;
    }

    for s in &payload.suggestions {
        rule_index(s.rule)?;
    }

    let mut verdicts: Vec<RuleVerdict> = payload
        .verdicts
        .into_iter()
        .map(|v| RuleVerdict {
            rule_id: v.rule,
            passed: v.passed,
            comment: v.comment,
        })
        .collect();
    verdicts.sort_by_key(|v| v.rule_id);

    Ok(AnalysisResult {
        overall_score: payload.overall_score.clamp(0.0, 10.0),
        summary: payload.summary,
        strengths: payload.strengths,
        verdicts,
        suggestions: payload
            .suggestions
            .into_iter()
            .map(|s| Suggestion {
                rule_id: s.rule,
                advice: s.advice,
            })
            .collect(),
    })
}

fn rule_index(rule: u8) -> Result<usize, AuditError> {
    if (1..=RULE_COUNT as u8).contains(&rule) {
        Ok((rule - 1) as usize)
    } else {
        Err(AuditError::malformed_response(format!(
            "rule id {} outside catalog range 1..={}",
            rule, RULE_COUNT
        )))
    }
}
