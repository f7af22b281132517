//! Entity extraction via a local NER inference sidecar
//!
//! This module provides the `EntityExtractor` trait and an HTTP client for a
//! local token-classification service (a biomedical NER model served next to
//! this process). The extractor is never assumed reliable: on failure the
//! orchestrator records the error and continues with an empty entity list.

use crate::analysis::types::{EntityCategory, EntityRecord};
use crate::analyzers::error::AnalyzerError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Default request timeout for the NER sidecar
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Tokens scored below this are discarded.
const SCORE_FLOOR: f32 = 0.7;

/// Tokens this short are model noise, not medical terms.
const MIN_TOKEN_CHARS: usize = 3;

/// Trait implemented by every entity-extraction backend
#[async_trait]
pub trait EntityExtractor: Send + Sync {
    /// Extracts recognized medical terms from raw text.
    ///
    /// Failures must be returned as `AnalyzerError`, never panics; the
    /// orchestrator treats an error exactly like an empty result plus a
    /// failed provenance record.
    async fn extract(&self, text: &str) -> Result<Vec<EntityRecord>, AnalyzerError>;

    /// Human-readable name of this extractor, used in provenance records.
    fn name(&self) -> &str;
}

/// HTTP client for a local token-classification service
///
/// Speaks the HuggingFace token-classification response shape: a list of
/// `{word, entity_group, score}` objects. Thread-safe; share with `Arc`.
pub struct NerServiceClient {
    endpoint: String,
    http_client: Client,
    timeout: Duration,
}

impl NerServiceClient {
    /// Creates a client with the default timeout.
    pub fn new(endpoint: String) -> Self {
        Self::with_timeout(endpoint, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a client with a custom timeout.
    pub fn with_timeout(endpoint: String, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            endpoint,
            http_client,
            timeout,
        }
    }

    /// Checks whether the NER sidecar is reachable.
    ///
    /// Returns `Ok(true)` when healthy, `Ok(false)` when unreachable, and
    /// `Err` only for unexpected transport failures.
    pub async fn health_check(&self) -> Result<bool, AnalyzerError> {
        let url = format!("{}/health", self.endpoint);

        debug!("Checking NER service health at {}", url);

        match self.http_client.get(&url).send().await {
            Ok(response) => {
                let is_healthy = response.status().is_success();
                if is_healthy {
                    info!("NER service health check successful");
                } else {
                    warn!(
                        "NER service health check failed with status: {}",
                        response.status()
                    );
                }
                Ok(is_healthy)
            }
            Err(e) => {
                if e.is_timeout() || e.is_connect() {
                    warn!("Cannot reach NER service at {}", self.endpoint);
                    Ok(false)
                } else {
                    Err(AnalyzerError::Network {
                        message: format!("Health check failed: {}", e),
                    })
                }
            }
        }
    }
}

#[async_trait]
impl EntityExtractor for NerServiceClient {
    async fn extract(&self, text: &str) -> Result<Vec<EntityRecord>, AnalyzerError> {
        let url = format!("{}/extract", self.endpoint);
        let request = ExtractRequest { text };

        debug!("Sending extraction request: text_len={}", text.len());
        let start = Instant::now();

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AnalyzerError::Timeout {
                        seconds: self.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    AnalyzerError::ModelUnavailable {
                        message: format!("NER service unreachable at {}: {}", self.endpoint, e),
                    }
                } else {
                    AnalyzerError::Network {
                        message: format!("Request failed: {}", e),
                    }
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalyzerError::Api {
                message: format!("HTTP {}: {}", status, body),
                status_code: Some(status.as_u16()),
            });
        }

        let tokens: Vec<NerToken> =
            response
                .json()
                .await
                .map_err(|e| AnalyzerError::InvalidResponse {
                    message: format!("JSON parse error: {}", e),
                    raw_response: None,
                })?;

        let entities = collect_entities(tokens);

        info!(
            "Extracted {} entities in {:.2}s",
            entities.len(),
            start.elapsed().as_secs_f64()
        );

        Ok(entities)
    }

    fn name(&self) -> &str {
        "entity-extractor"
    }
}

impl fmt::Debug for NerServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NerServiceClient")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Filters and maps raw model tokens into entity records.
///
/// Subword continuation tokens (`##`-prefixed), short fragments and
/// low-confidence hits are dropped; duplicates keep their first occurrence.
fn collect_entities(tokens: Vec<NerToken>) -> Vec<EntityRecord> {
    let mut seen = HashSet::new();
    let mut entities = Vec::new();

    for token in tokens {
        let word = token.word.trim();
        if word.starts_with("##") || word.chars().count() < MIN_TOKEN_CHARS {
            continue;
        }
        if token.score < SCORE_FLOOR {
            continue;
        }

        let key = word.to_lowercase();
        if !seen.insert(key.clone()) {
            continue;
        }

        entities.push(EntityRecord::new(
            key,
            map_entity_group(&token.entity_group),
            token.score,
        ));
    }

    entities
}

fn map_entity_group(label: &str) -> EntityCategory {
    // Labels arrive as e.g. "B-SIGN_SYMPTOM" or bare "SIGN_SYMPTOM".
    let label = label
        .trim_start_matches("B-")
        .trim_start_matches("I-")
        .to_uppercase();

    match label.as_str() {
        "SIGN_SYMPTOM" | "SYMPTOM" => EntityCategory::Symptom,
        "BODY_PART" | "ORGAN" | "ANATOMY" | "BIOLOGICAL_STRUCTURE" => EntityCategory::BodyPart,
        "DISEASE_DISORDER" | "DISEASE" | "CONDITION" => EntityCategory::Disease,
        "MEDICATION" | "DRUG" | "TREATMENT" => EntityCategory::Medication,
        "SEVERITY" | "SEVERITY_MODIFIER" => EntityCategory::SeverityModifier,
        "DURATION" | "DATE" | "TIME" => EntityCategory::DurationModifier,
        _ => EntityCategory::Other,
    }
}

/// Request body for the extraction endpoint
#[derive(Debug, Serialize)]
struct ExtractRequest<'a> {
    text: &'a str,
}

/// One token-classification hit from the NER model
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NerToken {
    word: String,
    entity_group: String,
    score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(word: &str, group: &str, score: f32) -> NerToken {
        NerToken {
            word: word.to_string(),
            entity_group: group.to_string(),
            score,
        }
    }

    #[test]
    fn test_collect_entities_filters_noise() {
        let tokens = vec![
            token("headache", "B-SIGN_SYMPTOM", 0.95),
            token("##ache", "I-SIGN_SYMPTOM", 0.92),
            token("at", "B-SIGN_SYMPTOM", 0.9),
            token("nausea", "B-SIGN_SYMPTOM", 0.4),
        ];

        let entities = collect_entities(tokens);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "headache");
        assert_eq!(entities[0].category, EntityCategory::Symptom);
    }

    #[test]
    fn test_collect_entities_dedups_case_insensitively() {
        let tokens = vec![
            token("Fever", "B-SIGN_SYMPTOM", 0.91),
            token("fever", "B-SIGN_SYMPTOM", 0.88),
        ];

        let entities = collect_entities(tokens);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "fever");
        // First occurrence wins, including its score.
        assert!((entities[0].confidence - 0.91).abs() < 1e-6);
    }

    #[test]
    fn test_map_entity_group_prefixes() {
        assert_eq!(map_entity_group("B-BODY_PART"), EntityCategory::BodyPart);
        assert_eq!(map_entity_group("I-DISEASE_DISORDER"), EntityCategory::Disease);
        assert_eq!(map_entity_group("severity"), EntityCategory::SeverityModifier);
        assert_eq!(map_entity_group("DURATION"), EntityCategory::DurationModifier);
        assert_eq!(map_entity_group("SOMETHING_ELSE"), EntityCategory::Other);
    }

    #[test]
    fn test_client_debug_does_not_panic() {
        let client = NerServiceClient::new("http://localhost:8001".to_string());
        let debug = format!("{:?}", client);
        assert!(debug.contains("NerServiceClient"));
    }
}
