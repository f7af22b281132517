use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minimum accepted symptom description length, in characters.
pub const MIN_SYMPTOM_CHARS: usize = 10;

/// Maximum accepted symptom description length, in characters.
pub const MAX_SYMPTOM_CHARS: usize = 1000;

/// Minimum number of whitespace-separated words in a description.
pub const MIN_SYMPTOM_WORDS: usize = 3;

/// Fixed medical disclaimer attached to every result, regardless of which
/// analyzers contributed.
pub const DISCLAIMER: &str = "This AI analysis is for informational purposes only and should not \
     replace professional medical advice, diagnosis, or treatment. Always \
     consult with a qualified healthcare provider for medical concerns.";

/// Errors raised while constructing a [`SymptomRequest`]
///
/// Validation happens before any analyzer runs; a request that fails here
/// never reaches the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("symptom description too short: {chars} chars (minimum {MIN_SYMPTOM_CHARS})")]
    TooShort { chars: usize },

    #[error("symptom description too long: {chars} chars (maximum {MAX_SYMPTOM_CHARS})")]
    TooLong { chars: usize },

    #[error("symptom description has too few words: {words} (minimum {MIN_SYMPTOM_WORDS})")]
    TooFewWords { words: usize },

    #[error("age out of range: {age} (must be 1-120)")]
    AgeOutOfRange { age: u8 },
}

/// A validated, immutable symptom-analysis request
///
/// Construction via [`SymptomRequest::new`] is the only way to obtain one,
/// so every instance that exists has already passed input validation. No
/// `Deserialize` impl on purpose: transports must deserialize raw fields
/// and go through `new`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomRequest {
    symptoms: String,
    age: Option<u8>,
    gender: Option<String>,
}

impl SymptomRequest {
    /// Validates and builds a request.
    ///
    /// Rejects descriptions shorter than [`MIN_SYMPTOM_CHARS`] characters or
    /// [`MIN_SYMPTOM_WORDS`] words, longer than [`MAX_SYMPTOM_CHARS`]
    /// characters, and ages outside 1-120.
    pub fn new(
        symptoms: impl Into<String>,
        age: Option<u8>,
        gender: Option<String>,
    ) -> Result<Self, ValidationError> {
        let symptoms = symptoms.into().trim().to_string();

        let chars = symptoms.chars().count();
        if chars < MIN_SYMPTOM_CHARS {
            return Err(ValidationError::TooShort { chars });
        }
        if chars > MAX_SYMPTOM_CHARS {
            return Err(ValidationError::TooLong { chars });
        }

        let words = symptoms.split_whitespace().count();
        if words < MIN_SYMPTOM_WORDS {
            return Err(ValidationError::TooFewWords { words });
        }

        if let Some(age) = age {
            if !(1..=120).contains(&age) {
                return Err(ValidationError::AgeOutOfRange { age });
            }
        }

        let gender = gender
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty());

        Ok(Self {
            symptoms,
            age,
            gender,
        })
    }

    pub fn symptoms(&self) -> &str {
        &self.symptoms
    }

    pub fn age(&self) -> Option<u8> {
        self.age
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }
}

/// Severity of the assessed condition
///
/// Exactly four values; every [`AnalysisResult`] carries one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Base triage score used by the urgency scorer.
    pub fn urgency_base(self) -> u8 {
        match self {
            Severity::Low => 2,
            Severity::Medium => 5,
            Severity::High => 7,
            Severity::Critical => 9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" | "moderate" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            other => Err(format!("unknown severity: {}", other)),
        }
    }
}

/// Category assigned to an extracted medical entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Symptom,
    BodyPart,
    Disease,
    Medication,
    SeverityModifier,
    DurationModifier,
    Other,
}

/// A medical term recognized in the request text
///
/// Produced by the entity extractor; read (never mutated) by the
/// orchestrator and the urgency scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub text: String,
    pub category: EntityCategory,
    pub confidence: f32,
}

impl EntityRecord {
    pub fn new(text: impl Into<String>, category: EntityCategory, confidence: f32) -> Self {
        Self {
            text: text.into(),
            category,
            confidence,
        }
    }
}

/// Provenance record for one analyzer invocation
///
/// One is appended per attempted analyzer, success or not. `confidence` is
/// already normalized to 0-100; `error` is present only when `success` is
/// false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelAnalysis {
    pub analyzer: String,
    pub analysis: String,
    pub confidence: u8,
    pub duration_ms: u64,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ModelAnalysis {
    pub fn succeeded(
        analyzer: impl Into<String>,
        analysis: impl Into<String>,
        confidence: u8,
        duration_ms: u64,
    ) -> Self {
        Self {
            analyzer: analyzer.into(),
            analysis: analysis.into(),
            confidence,
            duration_ms,
            success: true,
            error: None,
        }
    }

    pub fn failed(analyzer: impl Into<String>, error: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            analyzer: analyzer.into(),
            analysis: String::new(),
            confidence: 0,
            duration_ms,
            success: false,
            error: Some(error.into()),
        }
    }
}

/// The final aggregated assessment returned to the caller
///
/// Built once per request and immutable afterwards. Always well-formed:
/// severity is one of four values, urgency is within 1-10 and the
/// disclaimer is present on every path, including total degradation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub condition: String,
    pub severity: Severity,
    pub confidence: u8,
    pub advice: String,
    pub recommendations: Vec<String>,
    #[serde(rename = "whenToSeekHelp")]
    pub when_to_seek_help: String,
    pub disclaimer: String,
    pub entities: Vec<String>,
    pub urgency_score: u8,
    pub model_analyses: Vec<ModelAnalysis>,
    pub analyzers_used: String,
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (severity: {}, confidence: {}%, urgency: {}/10)",
            self.condition, self.severity, self.confidence, self.urgency_score
        )
    }
}
