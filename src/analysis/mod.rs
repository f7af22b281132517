//! Symptom analysis pipeline
//!
//! Data model, prompt/response handling, rule-based classification, urgency
//! scoring and the orchestration service that ties the analyzers together.

pub mod prompt;
pub mod response;
pub mod rules;
pub mod service;
pub mod types;
pub mod urgency;

pub use rules::{RuleClassification, RuleClassifier, RuleClassify};
pub use service::{TriageError, TriageService};
pub use types::{
    AnalysisResult, EntityCategory, EntityRecord, ModelAnalysis, Severity, SymptomRequest,
    ValidationError, DISCLAIMER,
};
pub use urgency::urgency_score;
