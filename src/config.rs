//! Configuration management for symtriage
//!
//! Loads settings from environment variables with sensible defaults and
//! wires the production analyzers into a [`TriageService`]. Configuration is
//! read once at process start and passed explicitly into the engine; nothing
//! in the pipeline does ambient lookup, so tests can substitute fixtures.
//!
//! # Environment Variables
//!
//! - `SYMTRIAGE_REASONER_ENDPOINT`: reasoning service base URL - default: "https://api.openai.com"
//! - `SYMTRIAGE_REASONER_API_KEY`: Bearer token for the reasoning service - **required**
//! - `SYMTRIAGE_REASONER_MODEL`: model identifier - default: "gpt-4o-mini"
//! - `SYMTRIAGE_REASONER_TIMEOUT`: reasoning timeout in seconds - default: "12"
//! - `SYMTRIAGE_NER_ENDPOINT`: local NER sidecar base URL - default: "http://localhost:8001"
//! - `SYMTRIAGE_NER_TIMEOUT`: extraction timeout in seconds - default: "5"
//! - `SYMTRIAGE_RETRY_BACKOFF_MS`: backoff before the single reasoner retry - default: "500"
//! - `SYMTRIAGE_LOG_LEVEL`: logging level - default: "info"

use crate::analysis::rules::RuleClassifier;
use crate::analysis::service::TriageService;
use crate::analyzers::extractor::NerServiceClient;
use crate::analyzers::openai_reasoner::OpenAiCompatibleReasoner;
use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_REASONER_ENDPOINT: &str = "https://api.openai.com";
const DEFAULT_REASONER_MODEL: &str = "gpt-4o-mini";
const DEFAULT_REASONER_TIMEOUT_SECS: u64 = 12;
const DEFAULT_NER_ENDPOINT: &str = "http://localhost:8001";
const DEFAULT_NER_TIMEOUT_SECS: u64 = 5;
const DEFAULT_RETRY_BACKOFF_MS: u64 = 500;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Extra slack the orchestrator-level timeout adds on top of the HTTP
/// client timeout, so the client timeout fires first with the better error.
const ORCHESTRATOR_TIMEOUT_SLACK_SECS: u64 = 3;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reasoner API key not provided
    #[error("Reasoner API key not specified. Set SYMTRIAGE_REASONER_API_KEY")]
    MissingApiKey,

    /// Endpoint is not a usable URL
    #[error("Invalid endpoint for {field}: {value}")]
    InvalidEndpoint { field: String, value: String },

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Main configuration structure for symtriage
///
/// Construct with `Default::default()` to load from environment variables
/// with fallback defaults, then call [`TriageConfig::validate`] before use.
#[derive(Debug, Clone)]
pub struct TriageConfig {
    /// Reasoning service base URL
    pub reasoner_endpoint: String,

    /// Bearer token for the reasoning service
    pub reasoner_api_key: String,

    /// Model identifier for the reasoning service
    pub reasoner_model: String,

    /// Reasoning request timeout in seconds
    pub reasoner_timeout_secs: u64,

    /// Local NER sidecar base URL
    pub ner_endpoint: String,

    /// Extraction request timeout in seconds
    pub ner_timeout_secs: u64,

    /// Backoff before the single reasoner retry, in milliseconds
    pub retry_backoff_ms: u64,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for TriageConfig {
    fn default() -> Self {
        let reasoner_endpoint = env::var("SYMTRIAGE_REASONER_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_REASONER_ENDPOINT.to_string());

        let reasoner_api_key = env::var("SYMTRIAGE_REASONER_API_KEY").unwrap_or_default();

        let reasoner_model = env::var("SYMTRIAGE_REASONER_MODEL")
            .unwrap_or_else(|_| DEFAULT_REASONER_MODEL.to_string());

        let reasoner_timeout_secs = env::var("SYMTRIAGE_REASONER_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REASONER_TIMEOUT_SECS);

        let ner_endpoint =
            env::var("SYMTRIAGE_NER_ENDPOINT").unwrap_or_else(|_| DEFAULT_NER_ENDPOINT.to_string());

        let ner_timeout_secs = env::var("SYMTRIAGE_NER_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_NER_TIMEOUT_SECS);

        let retry_backoff_ms = env::var("SYMTRIAGE_RETRY_BACKOFF_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_BACKOFF_MS);

        let log_level = env::var("SYMTRIAGE_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            reasoner_endpoint,
            reasoner_api_key,
            reasoner_model,
            reasoner_timeout_secs,
            ner_endpoint,
            ner_timeout_secs,
            retry_backoff_ms,
            log_level,
        }
    }
}

impl TriageConfig {
    /// Validates the configuration.
    ///
    /// Checks that timeouts are in a sane range, endpoints look like URLs,
    /// the API key is present and the log level is valid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reasoner_api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        for (field, value) in [
            ("reasoner_endpoint", &self.reasoner_endpoint),
            ("ner_endpoint", &self.ner_endpoint),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(ConfigError::InvalidEndpoint {
                    field: field.to_string(),
                    value: value.clone(),
                });
            }
        }

        for (field, value) in [
            ("reasoner timeout", self.reasoner_timeout_secs),
            ("extraction timeout", self.ner_timeout_secs),
        ] {
            if value == 0 {
                return Err(ConfigError::ValidationFailed(format!(
                    "{} must be at least 1 second",
                    field
                )));
            }
            if value > 120 {
                return Err(ConfigError::ValidationFailed(format!(
                    "{} cannot exceed 2 minutes",
                    field
                )));
            }
        }

        if self.retry_backoff_ms > 10_000 {
            return Err(ConfigError::ValidationFailed(
                "Retry backoff cannot exceed 10 seconds".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    /// Wires the production analyzers into a ready-to-use service.
    pub fn build_service(&self) -> Result<TriageService, ConfigError> {
        self.validate()?;

        let extractor = NerServiceClient::with_timeout(
            self.ner_endpoint.clone(),
            Duration::from_secs(self.ner_timeout_secs),
        );

        let reasoner = OpenAiCompatibleReasoner::with_timeout(
            self.reasoner_endpoint.clone(),
            self.reasoner_api_key.clone(),
            self.reasoner_model.clone(),
            Duration::from_secs(self.reasoner_timeout_secs),
        );

        let service = TriageService::new(
            Arc::new(extractor),
            Arc::new(reasoner),
            Arc::new(RuleClassifier::new()),
        )
        .with_timeouts(
            Duration::from_secs(self.ner_timeout_secs + ORCHESTRATOR_TIMEOUT_SLACK_SECS),
            Duration::from_secs(self.reasoner_timeout_secs + ORCHESTRATOR_TIMEOUT_SLACK_SECS),
        )
        .with_retry_backoff(Duration::from_millis(self.retry_backoff_ms));

        Ok(service)
    }
}

impl fmt::Display for TriageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symtriage Configuration:")?;
        writeln!(f, "  Reasoner Endpoint: {}", self.reasoner_endpoint)?;
        writeln!(f, "  Reasoner Model: {}", self.reasoner_model)?;
        writeln!(
            f,
            "  Reasoner API Key: {}",
            if self.reasoner_api_key.is_empty() {
                "(not set)"
            } else {
                "(set)"
            }
        )?;
        writeln!(f, "  Reasoner Timeout: {}s", self.reasoner_timeout_secs)?;
        writeln!(f, "  NER Endpoint: {}", self.ner_endpoint)?;
        writeln!(f, "  NER Timeout: {}s", self.ner_timeout_secs)?;
        writeln!(f, "  Retry Backoff: {}ms", self.retry_backoff_ms)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
