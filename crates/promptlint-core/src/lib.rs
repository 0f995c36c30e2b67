//! Core prompt auditing: the golden-rule catalog, the judge prompt,
//! the provider client and the response validation that turns a raw
//! LLM reply into a typed [`model::AnalysisResult`].

pub mod analyzer;
pub mod config;
pub mod errors;
pub mod model;
pub mod parse;
pub mod prompt;
pub mod providers;
pub mod rules;

pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use errors::{AuditError, AuditErrorKind};
pub use model::{AnalysisRequest, AnalysisResult, RuleVerdict, Suggestion};
