//! symtriage - ensemble symptom analysis engine
//!
//! This library turns free-text symptom descriptions into structured
//! health-risk assessments by combining several independent analyzers: a
//! local medical entity extractor, a remote clinical-reasoning language
//! service and a deterministic rule-based classifier. The orchestrator
//! tolerates partial failure of any analyzer, merges the surviving signals
//! into one confidence-weighted verdict and computes a 1-10 urgency score.
//!
//! # Core Concepts
//!
//! - **Analyzers**: pluggable adapters behind trait seams
//!   ([`EntityExtractor`], [`ClinicalReasoner`], [`RuleClassify`]) that each
//!   produce one signal and surface failures as data, never panics
//! - **Fallback cascade**: reasoner first; the rule classifier runs only
//!   when reasoning fails; a static minimal safe response backs both
//! - **Aggregation**: one [`AnalysisResult`] per request with per-analyzer
//!   provenance records and a fixed medical disclaimer on every path
//!
//! # Example Usage
//!
//! ```ignore
//! use symtriage::TriageConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = TriageConfig::default().build_service()?;
//!
//! let result = service
//!     .analyze_text("persistent headache with nausea for two days", Some(34), None)
//!     .await?;
//!
//! println!("{} (urgency {}/10)", result.condition, result.urgency_score);
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`analyzers`]: analyzer trait seams, HTTP adapters and test mocks
//! - [`analysis`]: data model, rule tables, urgency scoring and the
//!   orchestration service
//! - [`config`]: environment-driven configuration and production wiring
//! - [`cli`]: the thin command-line driver
//! - [`util`]: logging setup

// Public modules
pub mod analysis;
pub mod analyzers;
pub mod cli;
pub mod config;
pub mod util;

// Re-export key types for convenient access
pub use analysis::rules::{RuleClassification, RuleClassifier, RuleClassify};
pub use analysis::service::{TriageError, TriageService};
pub use analysis::types::{
    AnalysisResult, EntityCategory, EntityRecord, ModelAnalysis, Severity, SymptomRequest,
    ValidationError,
};
pub use analysis::urgency::urgency_score;
pub use analyzers::error::AnalyzerError;
pub use analyzers::extractor::{EntityExtractor, NerServiceClient};
pub use analyzers::openai_reasoner::OpenAiCompatibleReasoner;
pub use analyzers::reasoner::{ClinicalAssessment, ClinicalReasoner, ReasonerInput};
pub use config::{ConfigError, TriageConfig};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
