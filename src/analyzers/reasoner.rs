//! Clinical reasoner abstraction
//!
//! The reasoner is the highest-priority analyzer: a remote language service
//! that turns a symptom description into a structured clinical assessment.
//! All implementations must surface failures as `AnalyzerError` values so
//! the orchestrator can degrade to the rule-based fallback instead of
//! failing the request.

use crate::analysis::types::{EntityRecord, Severity};
use crate::analyzers::error::AnalyzerError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Input handed to the reasoner for one request
///
/// Borrowed views into request data owned by the orchestrator; the entity
/// slice may be empty when extraction failed or found nothing.
#[derive(Debug, Clone, Copy)]
pub struct ReasonerInput<'a> {
    pub symptoms: &'a str,
    pub entities: &'a [EntityRecord],
    pub age: Option<u8>,
    pub gender: Option<&'a str>,
}

/// Structured assessment returned by a reasoner
///
/// `confidence` is the raw value as reported by the service; the
/// orchestrator normalizes it into 0-100 during aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalAssessment {
    pub condition: String,
    pub severity: Severity,
    pub confidence: f64,
    pub advice: String,
    pub recommendations: Vec<String>,
    pub when_to_seek_help: String,
}

/// Trait implemented by every clinical-reasoning backend
#[async_trait]
pub trait ClinicalReasoner: Send + Sync {
    /// Produces a structured assessment for the given input.
    ///
    /// Implementations must bound the call with a timeout and map every
    /// failure mode (auth, quota, network, malformed response) to a
    /// distinct `AnalyzerError` variant rather than panicking.
    async fn reason(&self, input: &ReasonerInput<'_>)
        -> Result<ClinicalAssessment, AnalyzerError>;

    /// Human-readable name of this reasoner, used in provenance records.
    fn name(&self) -> &str;

    /// Optional model identifier for logging and diagnostics.
    fn model_info(&self) -> Option<String> {
        None
    }
}
