//! Console rendering of an audit. Verdicts go to stderr so stdout
//! stays clean for `--json-output` pipelines.

use promptlint_core::model::{AnalysisResult, RuleVerdict};
use promptlint_core::rules;

/// Format a single verdict line. Deterministic, unit-testable.
#[must_use]
pub fn format_verdict_line(verdict: &RuleVerdict) -> String {
    let name = rules::catalog()
        .iter()
        .find(|r| r.id == verdict.rule_id)
        .map(|r| r.name)
        .unwrap_or("Unknown rule");
    let icon = if verdict.passed { "✅" } else { "❌" };
    if verdict.comment.is_empty() {
        format!("{} {:<20}", icon, name)
    } else {
        format!("{} {:<20} {}", icon, name, verdict.comment)
    }
}

/// Severity band for the overall score, mirroring the 0-10 scale.
#[must_use]
pub fn score_band(score: f64) -> &'static str {
    if score >= 8.0 {
        "good"
    } else if score >= 5.0 {
        "fair"
    } else {
        "poor"
    }
}

pub fn print_report(result: &AnalysisResult) {
    eprintln!();
    for verdict in &result.verdicts {
        eprintln!("{}", format_verdict_line(verdict));
    }

    eprintln!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!(
        "Score: {:.1}/10 ({}) — {} of {} rules failed",
        result.overall_score,
        score_band(result.overall_score),
        result.failed_count(),
        result.verdicts.len()
    );
    eprintln!("Summary: {}", result.summary);

    if !result.strengths.is_empty() {
        eprintln!("\nStrengths:");
        for strength in &result.strengths {
            eprintln!(" • {}", strength);
        }
    }

    if !result.suggestions.is_empty() {
        eprintln!("\n⚠️  Improvements needed:");
        for suggestion in &result.suggestions {
            eprintln!(" • Rule {}: {}", suggestion.rule_id, suggestion.advice);
        }
    }

    eprintln!("\nBased on the 10 golden rules of prompting");
}
