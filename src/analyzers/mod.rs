//! Analyzer adapters
//!
//! This module provides the trait seams and client implementations for the
//! external analysis capabilities: the local entity-extraction sidecar and
//! the remote clinical-reasoning service. All adapters share the
//! `AnalyzerError` taxonomy so the orchestrator treats them uniformly.

pub mod error;
pub mod extractor;
pub mod mock;
pub mod openai_reasoner;
pub mod reasoner;

pub use error::AnalyzerError;
pub use extractor::{EntityExtractor, NerServiceClient};
pub use openai_reasoner::OpenAiCompatibleReasoner;
pub use reasoner::{ClinicalAssessment, ClinicalReasoner, ReasonerInput};
