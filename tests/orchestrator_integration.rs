//! Integration tests for the triage orchestrator using mock analyzers
//!
//! These tests drive the full pipeline through every branch of the fallback
//! cascade without requiring a reasoning service or NER sidecar.

use std::sync::Arc;
use std::time::Duration;

use symtriage::analysis::service::{TriageError, TriageService};
use symtriage::analysis::types::{
    AnalysisResult, EntityCategory, EntityRecord, Severity, SymptomRequest, ValidationError,
};
use symtriage::analyzers::mock::{MockClinicalReasoner, MockEntityExtractor, MockRuleClassifier};
use symtriage::analyzers::reasoner::ClinicalAssessment;
use symtriage::AnalyzerError;

/// Reasoner fixture with the given severity and confidence.
fn assessment(severity: Severity, confidence: f64) -> ClinicalAssessment {
    ClinicalAssessment {
        condition: "Tension headache".to_string(),
        severity,
        confidence,
        advice: "Rest in a quiet, dark room and stay hydrated.".to_string(),
        recommendations: vec![
            "Rest".to_string(),
            "Hydrate".to_string(),
            "Limit screen time".to_string(),
        ],
        when_to_seek_help: "Seek care if the headache becomes sudden and severe.".to_string(),
    }
}

fn headache_entities() -> Vec<EntityRecord> {
    vec![
        EntityRecord::new("headache", EntityCategory::Symptom, 0.95),
        EntityRecord::new("head", EntityCategory::BodyPart, 0.85),
    ]
}

fn service_with(
    extractor: Arc<MockEntityExtractor>,
    reasoner: Arc<MockClinicalReasoner>,
    classifier: Arc<MockRuleClassifier>,
) -> TriageService {
    TriageService::new(extractor, reasoner, classifier).with_retry_backoff(Duration::ZERO)
}

#[tokio::test]
async fn end_to_end_healthy_pipeline() {
    let extractor = Arc::new(MockEntityExtractor::returning(headache_entities()));
    let reasoner = Arc::new(MockClinicalReasoner::returning(assessment(
        Severity::Low,
        80.0,
    )));
    let classifier = Arc::new(MockRuleClassifier::passthrough());

    let service = service_with(extractor.clone(), reasoner.clone(), classifier.clone());
    let result = service
        .analyze_text("I have a headache for 2 days, mild pain", None, None)
        .await
        .unwrap();

    assert_eq!(result.severity, Severity::Low);
    assert_eq!(result.confidence, 80);
    assert!((1..=3).contains(&result.urgency_score));
    assert_eq!(result.entities, vec!["headache", "head"]);

    assert_eq!(extractor.calls(), 1);
    assert_eq!(reasoner.calls(), 1);
    // Cascade only triggers on failure: the classifier never ran.
    assert_eq!(classifier.calls(), 0);
}

#[tokio::test]
async fn severity_and_urgency_are_always_in_range() {
    let scenarios: Vec<(Severity, &str)> = vec![
        (Severity::Low, "mild itchy rash on one arm"),
        (Severity::Medium, "fever and chills since last night"),
        (Severity::High, "worsening abdominal pain with vomiting"),
        (
            Severity::Critical,
            "severe chest pain, can't breathe, slurred speech",
        ),
    ];

    for (severity, text) in scenarios {
        let service = service_with(
            Arc::new(MockEntityExtractor::returning(vec![])),
            Arc::new(MockClinicalReasoner::returning(assessment(severity, 0.9))),
            Arc::new(MockRuleClassifier::passthrough()),
        );

        let result = service.analyze_text(text, None, None).await.unwrap();
        assert!(matches!(
            result.severity,
            Severity::Low | Severity::Medium | Severity::High | Severity::Critical
        ));
        assert!((1..=10).contains(&result.urgency_score));
    }
}

#[tokio::test]
async fn short_input_is_rejected_before_any_analyzer_runs() {
    let extractor = Arc::new(MockEntityExtractor::returning(vec![]));
    let reasoner = Arc::new(MockClinicalReasoner::returning(assessment(
        Severity::Low,
        80.0,
    )));
    let classifier = Arc::new(MockRuleClassifier::passthrough());

    let service = service_with(extractor.clone(), reasoner.clone(), classifier.clone());

    // Under 10 characters.
    let result = service.analyze_text("headache", None, None).await;
    assert!(matches!(
        result,
        Err(TriageError::Validation(ValidationError::TooShort { .. }))
    ));

    // 10+ characters but fewer than 3 words.
    let result = service.analyze_text("bad headache", None, None).await;
    assert!(matches!(
        result,
        Err(TriageError::Validation(ValidationError::TooFewWords { .. }))
    ));

    assert_eq!(extractor.calls(), 0);
    assert_eq!(reasoner.calls(), 0);
    assert_eq!(classifier.calls(), 0);
}

#[tokio::test]
async fn reasoner_failure_promotes_rule_classifier_to_primary() {
    let extractor = Arc::new(MockEntityExtractor::returning(vec![]));
    let reasoner = Arc::new(MockClinicalReasoner::failing(AnalyzerError::QuotaExceeded {
        retry_after: Some(60),
    }));
    let classifier = Arc::new(MockRuleClassifier::passthrough());

    let service = service_with(extractor, reasoner.clone(), classifier.clone());
    let result = service
        .analyze_text("bad cough with wheezing at night", None, None)
        .await
        .unwrap();

    assert_eq!(classifier.calls(), 1);
    assert_eq!(result.condition, "Possible Respiratory Condition");
    assert_eq!(result.severity, Severity::Medium);
    // Non-AI fallback confidence is capped.
    assert!(result.confidence <= 65);

    // Quota exhaustion is deterministic: exactly one reasoner call.
    assert_eq!(reasoner.calls(), 1);

    // Provenance keeps the failed reasoner attempt.
    let reasoner_record = result
        .model_analyses
        .iter()
        .find(|m| m.analyzer == "clinical-reasoner")
        .unwrap();
    assert!(!reasoner_record.success);
    assert!(reasoner_record
        .error
        .as_deref()
        .unwrap()
        .contains("Quota exceeded"));
}

#[tokio::test]
async fn double_failure_returns_static_minimal_response() {
    let service = service_with(
        Arc::new(MockEntityExtractor::failing(
            AnalyzerError::ModelUnavailable {
                message: "sidecar down".to_string(),
            },
        )),
        Arc::new(MockClinicalReasoner::failing(AnalyzerError::Network {
            message: "connection refused".to_string(),
        })),
        Arc::new(MockRuleClassifier::failing(AnalyzerError::Other {
            message: "forced failure".to_string(),
        })),
    );

    let result = service
        .analyze_text("feeling quite unwell for several days", None, None)
        .await
        .unwrap();

    assert_eq!(result.severity, Severity::Medium);
    assert_eq!(result.confidence, 50);
    assert!(result.condition.contains("Healthcare Professional"));
    assert!(!result.disclaimer.is_empty());
    assert!(!result.recommendations.is_empty());
    assert!((1..=10).contains(&result.urgency_score));
}

#[tokio::test]
async fn transient_reasoner_failure_retries_exactly_once() {
    // Every attempt times out; the orchestrator must stop after the second.
    let reasoner = Arc::new(MockClinicalReasoner::failing(AnalyzerError::Timeout {
        seconds: 12,
    }));
    let classifier = Arc::new(MockRuleClassifier::passthrough());

    let service = service_with(
        Arc::new(MockEntityExtractor::returning(vec![])),
        reasoner.clone(),
        classifier.clone(),
    );

    let result = service
        .analyze_text("stomach cramps since this morning", None, None)
        .await
        .unwrap();

    assert_eq!(reasoner.calls(), 2);
    assert_eq!(classifier.calls(), 1);
    assert_eq!(result.condition, "Possible Gastrointestinal Condition");
}

#[tokio::test]
async fn retry_recovers_when_second_attempt_succeeds() {
    let reasoner = MockClinicalReasoner::returning(assessment(Severity::Medium, 0.76));
    reasoner.push_response(Err(AnalyzerError::Network {
        message: "connection reset".to_string(),
    }));
    let reasoner = Arc::new(reasoner);
    let classifier = Arc::new(MockRuleClassifier::passthrough());

    let service = service_with(
        Arc::new(MockEntityExtractor::returning(vec![])),
        reasoner.clone(),
        classifier.clone(),
    );

    let result = service
        .analyze_text("stomach cramps since this morning", None, None)
        .await
        .unwrap();

    assert_eq!(reasoner.calls(), 2);
    assert_eq!(classifier.calls(), 0);
    assert_eq!(result.condition, "Tension headache");
    assert_eq!(result.confidence, 76);
}

#[tokio::test]
async fn out_of_range_confidence_is_rescaled() {
    let service = service_with(
        Arc::new(MockEntityExtractor::returning(vec![])),
        Arc::new(MockClinicalReasoner::returning(assessment(
            Severity::Medium,
            8500.0,
        ))),
        Arc::new(MockRuleClassifier::passthrough()),
    );

    let result = service
        .analyze_text("odd pressure behind both eyes", None, None)
        .await
        .unwrap();

    assert!(result.confidence <= 95);
}

#[tokio::test]
async fn fractional_confidence_is_scaled_to_percent() {
    let service = service_with(
        Arc::new(MockEntityExtractor::returning(vec![])),
        Arc::new(MockClinicalReasoner::returning(assessment(
            Severity::Medium,
            0.82,
        ))),
        Arc::new(MockRuleClassifier::passthrough()),
    );

    let result = service
        .analyze_text("odd pressure behind both eyes", None, None)
        .await
        .unwrap();

    assert_eq!(result.confidence, 82);
}

#[tokio::test]
async fn emergency_keywords_with_critical_severity_score_at_least_nine() {
    let service = service_with(
        Arc::new(MockEntityExtractor::returning(vec![])),
        Arc::new(MockClinicalReasoner::returning(assessment(
            Severity::Critical,
            92.0,
        ))),
        Arc::new(MockRuleClassifier::passthrough()),
    );

    let result = service
        .analyze_text("severe chest pain and shortness of breath", None, None)
        .await
        .unwrap();

    assert!(result.urgency_score >= 9);
}

#[tokio::test]
async fn tie_between_categories_is_deterministic() {
    // "headache" (neurological) and "rash" (dermatological) carry equal
    // weight; declaration order resolves the tie to neurological on every
    // run.
    for _ in 0..5 {
        let service = service_with(
            Arc::new(MockEntityExtractor::returning(vec![])),
            Arc::new(MockClinicalReasoner::failing(AnalyzerError::Timeout {
                seconds: 12,
            })),
            Arc::new(MockRuleClassifier::passthrough()),
        );

        let result = service
            .analyze_text("a headache and a rash since yesterday", None, None)
            .await
            .unwrap();

        assert_eq!(result.condition, "Possible Neurological Condition");
    }
}

#[tokio::test]
async fn repeated_invocations_produce_identical_results() {
    let service = service_with(
        Arc::new(MockEntityExtractor::returning(headache_entities())),
        Arc::new(MockClinicalReasoner::returning(assessment(
            Severity::Low,
            80.0,
        ))),
        Arc::new(MockRuleClassifier::passthrough()),
    );

    let request =
        SymptomRequest::new("I have a headache for 2 days, mild pain", None, None).unwrap();

    let strip_timing = |mut r: AnalysisResult| {
        for m in &mut r.model_analyses {
            m.duration_ms = 0;
        }
        r
    };

    let first = strip_timing(service.analyze(&request).await);
    for _ in 0..3 {
        let next = strip_timing(service.analyze(&request).await);
        assert_eq!(next, first);
    }
}

#[tokio::test]
async fn extractor_failure_keeps_reasoner_as_primary() {
    let service = service_with(
        Arc::new(MockEntityExtractor::failing(AnalyzerError::Timeout {
            seconds: 5,
        })),
        Arc::new(MockClinicalReasoner::returning(assessment(
            Severity::Low,
            80.0,
        ))),
        Arc::new(MockRuleClassifier::passthrough()),
    );

    let result = service
        .analyze_text("mild sore throat and sniffles", None, None)
        .await
        .unwrap();

    assert_eq!(result.condition, "Tension headache");
    assert!(result.entities.is_empty());
    assert!(result.analyzers_used.contains("entity-extractor (failed)"));
    assert!(result.analyzers_used.contains("clinical-reasoner"));
}

#[tokio::test]
async fn every_attempted_analyzer_gets_a_provenance_record() {
    let service = service_with(
        Arc::new(MockEntityExtractor::returning(headache_entities())),
        Arc::new(MockClinicalReasoner::failing(AnalyzerError::Api {
            message: "internal error".to_string(),
            status_code: Some(400),
        })),
        Arc::new(MockRuleClassifier::passthrough()),
    );

    let result = service
        .analyze_text("a headache and a rash since yesterday", None, None)
        .await
        .unwrap();

    let names: Vec<&str> = result
        .model_analyses
        .iter()
        .map(|m| m.analyzer.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["entity-extractor", "clinical-reasoner", "rule-classifier"]
    );

    // Success flags match what actually happened.
    assert!(result.model_analyses[0].success);
    assert!(!result.model_analyses[1].success);
    assert!(result.model_analyses[2].success);
}
