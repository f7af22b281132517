//! Analyzer error taxonomy
//!
//! This module defines `AnalyzerError`, the shared failure type for every
//! analyzer adapter (entity extractor, clinical reasoner, rule classifier).
//! The orchestrator never propagates these as request failures; they are
//! recovered locally and recorded as failed `ModelAnalysis` entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors that can occur inside an analyzer adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnalyzerError {
    /// API request failed with the given message
    Api {
        message: String,
        status_code: Option<u16>,
    },

    /// Authentication failed or credentials are invalid
    Authentication { message: String },

    /// Quota or rate limit exhausted, retry after the given duration (seconds)
    QuotaExceeded { retry_after: Option<u64> },

    /// Request timed out after the specified duration (in seconds)
    Timeout { seconds: u64 },

    /// Network-related error
    Network { message: String },

    /// Invalid or malformed response from the analyzer
    InvalidResponse {
        message: String,
        raw_response: Option<String>,
    },

    /// The response could not be parsed into a structured assessment
    Parse { message: String, context: String },

    /// The underlying model or service is not available
    ModelUnavailable { message: String },

    /// Configuration error (missing API keys, invalid settings, etc.)
    Configuration { message: String },

    /// Generic error for other cases
    Other { message: String },
}

impl AnalyzerError {
    /// Whether a single bounded retry is worth attempting.
    ///
    /// Only transient failures qualify: timeouts, network errors and
    /// server-side (5xx) API errors. Auth and quota failures are
    /// deterministic; parse failures will not fix themselves within the
    /// request deadline.
    pub fn is_retryable(&self) -> bool {
        match self {
            AnalyzerError::Timeout { .. } | AnalyzerError::Network { .. } => true,
            AnalyzerError::Api { status_code, .. } => {
                matches!(status_code, Some(code) if *code >= 500)
            }
            _ => false,
        }
    }

    /// Whether this is a credentials/quota condition.
    ///
    /// Logged distinctly so operators can tell "service broken" apart from
    /// "service exhausted".
    pub fn is_quota_or_auth(&self) -> bool {
        matches!(
            self,
            AnalyzerError::Authentication { .. } | AnalyzerError::QuotaExceeded { .. }
        )
    }
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzerError::Api {
                message,
                status_code,
            } => {
                if let Some(code) = status_code {
                    write!(f, "API error ({}): {}", code, message)
                } else {
                    write!(f, "API error: {}", message)
                }
            }
            AnalyzerError::Authentication { message } => {
                write!(f, "Authentication failed: {}", message)
            }
            AnalyzerError::QuotaExceeded { retry_after } => {
                if let Some(seconds) = retry_after {
                    write!(f, "Quota exceeded, retry after {} seconds", seconds)
                } else {
                    write!(f, "Quota exceeded")
                }
            }
            AnalyzerError::Timeout { seconds } => {
                write!(f, "Request timed out after {} seconds", seconds)
            }
            AnalyzerError::Network { message } => write!(f, "Network error: {}", message),
            AnalyzerError::InvalidResponse { message, .. } => {
                write!(f, "Invalid response from analyzer: {}", message)
            }
            AnalyzerError::Parse { message, context } => {
                write!(f, "Parse error: {} (context: {})", message, context)
            }
            AnalyzerError::ModelUnavailable { message } => {
                write!(f, "Model unavailable: {}", message)
            }
            AnalyzerError::Configuration { message } => {
                write!(f, "Configuration error: {}", message)
            }
            AnalyzerError::Other { message } => write!(f, "Error: {}", message),
        }
    }
}

impl std::error::Error for AnalyzerError {}
