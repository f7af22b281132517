//! Triage orchestration service
//!
//! `TriageService` drives one request through the analysis pipeline:
//! entity extraction, clinical reasoning (with a single bounded retry), the
//! rule-based fallback when reasoning fails, urgency scoring and final
//! aggregation. Analyzer failures are recovered locally and recorded as
//! data; the caller always receives a well-formed [`AnalysisResult`].
//!
//! The service is stateless apart from read-only configuration, so one
//! instance can serve any number of concurrent requests behind an `Arc`.

use crate::analysis::response::normalize_confidence;
use crate::analysis::rules::{RuleClassification, RuleClassify};
use crate::analysis::types::{
    AnalysisResult, EntityRecord, ModelAnalysis, Severity, SymptomRequest, ValidationError,
    DISCLAIMER,
};
use crate::analysis::urgency::urgency_score;
use crate::analyzers::error::AnalyzerError;
use crate::analyzers::extractor::EntityExtractor;
use crate::analyzers::reasoner::{ClinicalAssessment, ClinicalReasoner, ReasonerInput};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Confidence ceiling for the rule-based fallback path. The non-AI fallback
/// is never reported as more confident than this.
const RULE_CONFIDENCE_CAP: u8 = 65;

/// Confidence reported by the static minimal response.
const STATIC_FALLBACK_CONFIDENCE: u8 = 50;

/// Default timeout for the entity-extraction call
const DEFAULT_EXTRACTOR_TIMEOUT: Duration = Duration::from_secs(5);

/// Default timeout for the reasoning call; a safety net above the
/// reasoner's own HTTP timeout
const DEFAULT_REASONER_TIMEOUT: Duration = Duration::from_secs(15);

/// Default backoff before the single reasoner retry
const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Request-level errors
///
/// Analyzer failures never appear here; they are represented as data inside
/// the result. Only invalid input fails a request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriageError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// The symptom-analysis orchestrator
///
/// Holds one adapter per analyzer behind trait objects so tests can swap in
/// scripted mocks. Construction takes the adapters explicitly; ambient
/// lookup is deliberately avoided (see `TriageConfig::build_service` for the
/// production wiring).
pub struct TriageService {
    extractor: Arc<dyn EntityExtractor>,
    reasoner: Arc<dyn ClinicalReasoner>,
    classifier: Arc<dyn RuleClassify>,
    extractor_timeout: Duration,
    reasoner_timeout: Duration,
    retry_backoff: Duration,
}

impl std::fmt::Debug for TriageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriageService")
            .field("reasoner", &self.reasoner.name())
            .field("extractor", &self.extractor.name())
            .field("classifier", &self.classifier.name())
            .finish()
    }
}

impl TriageService {
    /// Creates a service with default timeouts and retry backoff.
    pub fn new(
        extractor: Arc<dyn EntityExtractor>,
        reasoner: Arc<dyn ClinicalReasoner>,
        classifier: Arc<dyn RuleClassify>,
    ) -> Self {
        Self {
            extractor,
            reasoner,
            classifier,
            extractor_timeout: DEFAULT_EXTRACTOR_TIMEOUT,
            reasoner_timeout: DEFAULT_REASONER_TIMEOUT,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
        }
    }

    /// Overrides the per-analyzer timeouts.
    pub fn with_timeouts(mut self, extractor: Duration, reasoner: Duration) -> Self {
        self.extractor_timeout = extractor;
        self.reasoner_timeout = reasoner;
        self
    }

    /// Overrides the backoff before the single reasoner retry.
    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// Validates raw input and runs the pipeline.
    ///
    /// This is the entry point for transport layers: invalid input is
    /// rejected here, before any analyzer is invoked.
    pub async fn analyze_text(
        &self,
        symptoms: &str,
        age: Option<u8>,
        gender: Option<String>,
    ) -> Result<AnalysisResult, TriageError> {
        let request = SymptomRequest::new(symptoms, age, gender)?;
        Ok(self.analyze(&request).await)
    }

    /// Runs the pipeline for an already validated request.
    ///
    /// Infallible by construction: every analyzer failure degrades to the
    /// next stage of the cascade and the static minimal response has no
    /// external dependency.
    pub async fn analyze(&self, request: &SymptomRequest) -> AnalysisResult {
        let request_id = Uuid::new_v4();
        let start = Instant::now();

        info!(
            request_id = %request_id,
            symptoms_len = request.symptoms().chars().count(),
            "Starting symptom analysis"
        );

        let mut model_analyses = Vec::new();

        let entities = self.run_extraction(request, &mut model_analyses).await;
        let primary = self
            .run_reasoning_cascade(request, &entities, &mut model_analyses)
            .await;

        let urgency = urgency_score(&entities, primary.severity, request.symptoms());

        let when_to_seek_help = primary
            .when_to_seek_help
            .unwrap_or_else(|| when_to_seek_help_for(urgency).to_string());

        let analyzers_used = summarize_analyzers(&model_analyses);

        info!(
            request_id = %request_id,
            severity = %primary.severity,
            urgency = urgency,
            elapsed_ms = start.elapsed().as_millis() as u64,
            analyzers = %analyzers_used,
            "Symptom analysis completed"
        );

        AnalysisResult {
            condition: primary.condition,
            severity: primary.severity,
            confidence: primary.confidence,
            advice: primary.advice,
            recommendations: primary.recommendations,
            when_to_seek_help,
            disclaimer: DISCLAIMER.to_string(),
            entities: entities.iter().map(|e| e.text.clone()).collect(),
            urgency_score: urgency,
            model_analyses,
            analyzers_used,
        }
    }

    /// Entity extraction stage. Failure yields an empty entity list and a
    /// failed provenance record; the pipeline always continues.
    async fn run_extraction(
        &self,
        request: &SymptomRequest,
        model_analyses: &mut Vec<ModelAnalysis>,
    ) -> Vec<EntityRecord> {
        let name = self.extractor.name().to_string();
        let start = Instant::now();

        let outcome = bounded(
            self.extractor_timeout,
            self.extractor.extract(request.symptoms()),
        )
        .await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(entities) => {
                let analysis = if entities.is_empty() {
                    "No medical entities recognized".to_string()
                } else {
                    format!(
                        "Recognized {} medical terms: {}",
                        entities.len(),
                        entities
                            .iter()
                            .take(5)
                            .map(|e| e.text.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    )
                };
                let mean_confidence = if entities.is_empty() {
                    0.0
                } else {
                    entities.iter().map(|e| f64::from(e.confidence)).sum::<f64>()
                        / entities.len() as f64
                };
                model_analyses.push(ModelAnalysis::succeeded(
                    name,
                    analysis,
                    normalize_confidence(mean_confidence),
                    elapsed_ms,
                ));
                entities
            }
            Err(e) => {
                warn!("Entity extraction failed: {}", e);
                model_analyses.push(ModelAnalysis::failed(name, e.to_string(), elapsed_ms));
                Vec::new()
            }
        }
    }

    /// Reasoning stage plus the fallback cascade.
    ///
    /// The rule classifier only runs when the reasoner fails; the static
    /// minimal response only when the classifier fails too (unreachable
    /// with the production classifier).
    async fn run_reasoning_cascade(
        &self,
        request: &SymptomRequest,
        entities: &[EntityRecord],
        model_analyses: &mut Vec<ModelAnalysis>,
    ) -> PrimaryAssessment {
        let input = ReasonerInput {
            symptoms: request.symptoms(),
            entities,
            age: request.age(),
            gender: request.gender(),
        };

        let name = self.reasoner.name().to_string();
        let start = Instant::now();
        let outcome = self.reason_with_retry(&input).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(assessment) => {
                let confidence = normalize_confidence(assessment.confidence);
                model_analyses.push(ModelAnalysis::succeeded(
                    name,
                    assessment.condition.clone(),
                    confidence,
                    elapsed_ms,
                ));
                PrimaryAssessment::from_reasoner(assessment, confidence)
            }
            Err(e) => {
                if e.is_quota_or_auth() {
                    warn!(
                        "Reasoning service degraded (credentials or quota), falling back to rules: {}",
                        e
                    );
                } else {
                    warn!("Clinical reasoner failed, falling back to rules: {}", e);
                }
                model_analyses.push(ModelAnalysis::failed(name, e.to_string(), elapsed_ms));
                self.run_rule_fallback(request, model_analyses)
            }
        }
    }

    /// One reasoner attempt, plus a single retry after backoff when the
    /// failure looks transient.
    async fn reason_with_retry(
        &self,
        input: &ReasonerInput<'_>,
    ) -> Result<ClinicalAssessment, AnalyzerError> {
        let first = bounded(self.reasoner_timeout, self.reasoner.reason(input)).await;

        match first {
            Err(e) if e.is_retryable() => {
                warn!("Reasoner attempt failed ({}), retrying once", e);
                tokio::time::sleep(self.retry_backoff).await;
                bounded(self.reasoner_timeout, self.reasoner.reason(input)).await
            }
            other => other,
        }
    }

    fn run_rule_fallback(
        &self,
        request: &SymptomRequest,
        model_analyses: &mut Vec<ModelAnalysis>,
    ) -> PrimaryAssessment {
        let name = self.classifier.name().to_string();
        let start = Instant::now();
        let outcome = self.classifier.classify(request.symptoms());
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(classification) => {
                let confidence =
                    normalize_confidence(classification.confidence).min(RULE_CONFIDENCE_CAP);
                let analysis = if classification.matched_keywords.is_empty() {
                    format!("Matched category '{}'", classification.category)
                } else {
                    format!(
                        "Matched category '{}' via keywords: {}",
                        classification.category,
                        classification.matched_keywords.join(", ")
                    )
                };
                model_analyses.push(ModelAnalysis::succeeded(
                    name,
                    analysis,
                    confidence,
                    elapsed_ms,
                ));
                PrimaryAssessment::from_rules(&classification, confidence)
            }
            Err(e) => {
                // The production classifier is total; reaching this branch
                // means a broken test double or a programming defect.
                error!("Rule classifier failed, using static fallback: {}", e);
                model_analyses.push(ModelAnalysis::failed(name, e.to_string(), elapsed_ms));
                PrimaryAssessment::static_fallback()
            }
        }
    }
}

/// Whichever analyzer ended up primary, reduced to the fields the final
/// result needs.
struct PrimaryAssessment {
    condition: String,
    severity: Severity,
    confidence: u8,
    advice: String,
    recommendations: Vec<String>,
    /// None means "derive from the urgency band after scoring".
    when_to_seek_help: Option<String>,
}

impl PrimaryAssessment {
    fn from_reasoner(assessment: ClinicalAssessment, confidence: u8) -> Self {
        Self {
            condition: assessment.condition,
            severity: assessment.severity,
            confidence,
            advice: assessment.advice,
            recommendations: assessment.recommendations,
            when_to_seek_help: Some(assessment.when_to_seek_help),
        }
    }

    fn from_rules(classification: &RuleClassification, confidence: u8) -> Self {
        let severity = classification.severity_guess;
        let mut recommendations = vec![
            "Monitor your symptoms closely".to_string(),
            "Keep a detailed symptom diary".to_string(),
            "Stay hydrated and get adequate rest".to_string(),
        ];
        if let Some(extra) = category_recommendation(classification.category) {
            recommendations.push(extra.to_string());
        }
        recommendations.push(match severity {
            Severity::High | Severity::Critical => "Seek prompt medical attention".to_string(),
            _ => "Consult with a healthcare professional if symptoms persist or worsen".to_string(),
        });

        Self {
            condition: classification.condition(),
            severity,
            confidence,
            advice: advice_for_severity(severity).to_string(),
            recommendations,
            when_to_seek_help: None,
        }
    }

    fn static_fallback() -> Self {
        Self {
            condition: "Consult a Healthcare Professional".to_string(),
            severity: Severity::Medium,
            confidence: STATIC_FALLBACK_CONFIDENCE,
            advice: "We're unable to provide an automated analysis at the moment. Please \
                     consult a healthcare professional for proper evaluation of your symptoms."
                .to_string(),
            recommendations: vec![
                "Consult with a healthcare professional".to_string(),
                "Monitor your symptoms closely".to_string(),
                "Seek medical attention if symptoms worsen".to_string(),
                "Keep a record of your symptoms".to_string(),
            ],
            when_to_seek_help: None,
        }
    }
}

fn advice_for_severity(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => {
            "Seek immediate medical attention. This appears to be a serious condition \
             requiring urgent care."
        }
        Severity::High => {
            "Schedule an appointment with a healthcare provider soon. Monitor symptoms closely."
        }
        Severity::Medium => {
            "Consider consulting with a healthcare professional. Monitor symptoms and seek \
             care if they worsen."
        }
        Severity::Low => {
            "Continue monitoring symptoms. Maintain healthy lifestyle practices and consider \
             consulting a healthcare provider if symptoms persist."
        }
    }
}

fn category_recommendation(category: &str) -> Option<&'static str> {
    match category {
        "respiratory" => Some("Consider using a humidifier to ease breathing"),
        "gastrointestinal" => Some("Follow a bland diet until symptoms improve"),
        "musculoskeletal" => Some("Apply ice to reduce inflammation and pain"),
        "cardiovascular" => Some("Monitor your blood pressure if possible"),
        "emergency" => Some("Call emergency services if symptoms are ongoing"),
        _ => None,
    }
}

fn when_to_seek_help_for(urgency: u8) -> &'static str {
    match urgency {
        8..=10 => "Seek immediate emergency medical care. Do not delay.",
        6..=7 => "Contact your healthcare provider today or visit urgent care.",
        4..=5 => {
            "Schedule an appointment with your healthcare provider within the next few days."
        }
        _ => "Monitor symptoms and consult your healthcare provider if they persist or worsen.",
    }
}

fn summarize_analyzers(model_analyses: &[ModelAnalysis]) -> String {
    model_analyses
        .iter()
        .map(|m| {
            if m.success {
                m.analyzer.clone()
            } else {
                format!("{} (failed)", m.analyzer)
            }
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Applies an orchestrator-level timeout on top of whatever transport
/// timeouts the adapter carries; expiry is indistinguishable from an
/// explicit failure of that analyzer.
async fn bounded<T, F>(limit: Duration, fut: F) -> Result<T, AnalyzerError>
where
    F: Future<Output = Result<T, AnalyzerError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(AnalyzerError::Timeout {
            seconds: limit.as_secs(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::EntityCategory;
    use crate::analyzers::mock::{MockClinicalReasoner, MockEntityExtractor, MockRuleClassifier};

    fn assessment(severity: Severity, confidence: f64) -> ClinicalAssessment {
        ClinicalAssessment {
            condition: "Tension headache".to_string(),
            severity,
            confidence,
            advice: "Rest in a quiet room.".to_string(),
            recommendations: vec!["Rest".to_string(), "Hydrate".to_string()],
            when_to_seek_help: "If it becomes sudden and severe.".to_string(),
        }
    }

    fn entities() -> Vec<EntityRecord> {
        vec![
            EntityRecord::new("headache", EntityCategory::Symptom, 0.95),
            EntityRecord::new("head", EntityCategory::BodyPart, 0.85),
        ]
    }

    fn service(
        extractor: MockEntityExtractor,
        reasoner: MockClinicalReasoner,
        classifier: MockRuleClassifier,
    ) -> TriageService {
        TriageService::new(Arc::new(extractor), Arc::new(reasoner), Arc::new(classifier))
            .with_retry_backoff(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_happy_path_uses_reasoner_as_primary() {
        let svc = service(
            MockEntityExtractor::returning(entities()),
            MockClinicalReasoner::returning(assessment(Severity::Low, 80.0)),
            MockRuleClassifier::passthrough(),
        );

        let request =
            SymptomRequest::new("I have a headache for 2 days, mild pain", None, None).unwrap();
        let result = svc.analyze(&request).await;

        assert_eq!(result.condition, "Tension headache");
        assert_eq!(result.severity, Severity::Low);
        assert_eq!(result.confidence, 80);
        assert!((1..=3).contains(&result.urgency_score));
        assert_eq!(result.entities, vec!["headache", "head"]);
        assert_eq!(result.disclaimer, DISCLAIMER);
        // Extractor and reasoner ran; the rule classifier was not invoked.
        assert_eq!(result.model_analyses.len(), 2);
        assert!(result.model_analyses.iter().all(|m| m.success));
    }

    #[tokio::test]
    async fn test_rule_classifier_only_runs_when_reasoner_fails() {
        let classifier = Arc::new(MockRuleClassifier::passthrough());
        let svc = TriageService::new(
            Arc::new(MockEntityExtractor::returning(vec![])),
            Arc::new(MockClinicalReasoner::returning(assessment(
                Severity::Low,
                80.0,
            ))),
            classifier.clone(),
        )
        .with_retry_backoff(Duration::ZERO);

        let request =
            SymptomRequest::new("bad cough with wheezing at night", None, None).unwrap();
        let result = svc.analyze(&request).await;

        assert_eq!(classifier.calls(), 0);
        assert!(!result
            .model_analyses
            .iter()
            .any(|m| m.analyzer == "rule-classifier"));
    }

    #[tokio::test]
    async fn test_reasoner_failure_falls_back_to_rules_with_capped_confidence() {
        let svc = service(
            MockEntityExtractor::returning(vec![]),
            MockClinicalReasoner::failing(AnalyzerError::Authentication {
                message: "bad key".to_string(),
            }),
            MockRuleClassifier::passthrough(),
        );

        let request =
            SymptomRequest::new("bad cough with wheezing at night", None, None).unwrap();
        let result = svc.analyze(&request).await;

        assert_eq!(result.condition, "Possible Respiratory Condition");
        assert_eq!(result.severity, Severity::Medium);
        assert!(result.confidence <= RULE_CONFIDENCE_CAP);
        assert!(result.analyzers_used.contains("clinical-reasoner (failed)"));
        assert!(result.analyzers_used.contains("rule-classifier"));
    }

    #[tokio::test]
    async fn test_total_failure_returns_static_minimal_response() {
        let svc = service(
            MockEntityExtractor::failing(AnalyzerError::ModelUnavailable {
                message: "sidecar down".to_string(),
            }),
            MockClinicalReasoner::failing(AnalyzerError::QuotaExceeded { retry_after: None }),
            MockRuleClassifier::failing(AnalyzerError::Other {
                message: "forced".to_string(),
            }),
        );

        let request =
            SymptomRequest::new("feeling unwell for several days now", None, None).unwrap();
        let result = svc.analyze(&request).await;

        assert_eq!(result.severity, Severity::Medium);
        assert_eq!(result.confidence, STATIC_FALLBACK_CONFIDENCE);
        assert!(result.condition.contains("Healthcare Professional"));
        assert_eq!(result.disclaimer, DISCLAIMER);
        assert!((1..=10).contains(&result.urgency_score));
        // All three attempted, all recorded as failures.
        assert_eq!(result.model_analyses.len(), 3);
        assert!(result.model_analyses.iter().all(|m| !m.success));
    }

    #[tokio::test]
    async fn test_transient_reasoner_failure_is_retried_once() {
        let reasoner = MockClinicalReasoner::returning(assessment(Severity::Medium, 0.7));
        reasoner.push_response(Err(AnalyzerError::Timeout { seconds: 12 }));
        let reasoner = Arc::new(reasoner);

        let svc = TriageService::new(
            Arc::new(MockEntityExtractor::returning(vec![])),
            reasoner.clone(),
            Arc::new(MockRuleClassifier::passthrough()),
        )
        .with_retry_backoff(Duration::ZERO);

        let request =
            SymptomRequest::new("stomach cramps since this morning", None, None).unwrap();
        let result = svc.analyze(&request).await;

        assert_eq!(reasoner.calls(), 2);
        assert_eq!(result.condition, "Tension headache");
        // 0.7 fraction normalized to 70.
        assert_eq!(result.confidence, 70);
    }

    #[tokio::test]
    async fn test_auth_failure_is_not_retried() {
        let reasoner = Arc::new(MockClinicalReasoner::failing(
            AnalyzerError::Authentication {
                message: "expired key".to_string(),
            },
        ));

        let svc = TriageService::new(
            Arc::new(MockEntityExtractor::returning(vec![])),
            reasoner.clone(),
            Arc::new(MockRuleClassifier::passthrough()),
        )
        .with_retry_backoff(Duration::ZERO);

        let request =
            SymptomRequest::new("stomach cramps since this morning", None, None).unwrap();
        let _ = svc.analyze(&request).await;

        assert_eq!(reasoner.calls(), 1);
    }

    #[tokio::test]
    async fn test_extractor_failure_does_not_fail_request() {
        let svc = service(
            MockEntityExtractor::failing(AnalyzerError::Timeout { seconds: 5 }),
            MockClinicalReasoner::returning(assessment(Severity::Low, 80.0)),
            MockRuleClassifier::passthrough(),
        );

        let request =
            SymptomRequest::new("mild sore throat and sniffles", None, None).unwrap();
        let result = svc.analyze(&request).await;

        assert_eq!(result.condition, "Tension headache");
        assert!(result.entities.is_empty());
        let extractor_record = result
            .model_analyses
            .iter()
            .find(|m| m.analyzer == "entity-extractor")
            .unwrap();
        assert!(!extractor_record.success);
        assert!(extractor_record.error.is_some());
    }

    #[tokio::test]
    async fn test_validation_rejects_before_any_analyzer_runs() {
        let extractor = Arc::new(MockEntityExtractor::returning(vec![]));
        let reasoner = Arc::new(MockClinicalReasoner::returning(assessment(
            Severity::Low,
            80.0,
        )));

        let svc = TriageService::new(
            extractor.clone(),
            reasoner.clone(),
            Arc::new(MockRuleClassifier::passthrough()),
        );

        let result = svc.analyze_text("too short", None, None).await;
        assert!(matches!(result, Err(TriageError::Validation(_))));
        assert_eq!(extractor.calls(), 0);
        assert_eq!(reasoner.calls(), 0);
    }

    #[tokio::test]
    async fn test_emergency_scenario_scores_at_least_nine() {
        let svc = service(
            MockEntityExtractor::returning(vec![]),
            MockClinicalReasoner::returning(assessment(Severity::Critical, 90.0)),
            MockRuleClassifier::passthrough(),
        );

        let request =
            SymptomRequest::new("severe chest pain and shortness of breath", None, None).unwrap();
        let result = svc.analyze(&request).await;
        assert!(result.urgency_score >= 9);
    }

    #[tokio::test]
    async fn test_identical_inputs_produce_identical_results() {
        let svc = service(
            MockEntityExtractor::returning(entities()),
            MockClinicalReasoner::returning(assessment(Severity::Low, 80.0)),
            MockRuleClassifier::passthrough(),
        );

        let request =
            SymptomRequest::new("I have a headache for 2 days, mild pain", None, None).unwrap();
        let first = svc.analyze(&request).await;
        let second = svc.analyze(&request).await;

        // Durations can differ between runs; everything else must not.
        let strip = |mut r: AnalysisResult| {
            for m in &mut r.model_analyses {
                m.duration_ms = 0;
            }
            r
        };
        assert_eq!(strip(first), strip(second));
    }

    #[tokio::test]
    async fn test_overrange_confidence_is_normalized() {
        let svc = service(
            MockEntityExtractor::returning(vec![]),
            MockClinicalReasoner::returning(assessment(Severity::Medium, 8500.0)),
            MockRuleClassifier::passthrough(),
        );

        let request =
            SymptomRequest::new("odd pressure behind both eyes", None, None).unwrap();
        let result = svc.analyze(&request).await;
        assert!(result.confidence <= 95);
    }
}
