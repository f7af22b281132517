//! Scriptable mock analyzers
//!
//! Used by unit and integration tests to drive the orchestrator through
//! every branch of the fallback cascade without network access. Each mock
//! counts invocations so tests can assert which analyzers actually ran.

use crate::analysis::rules::{RuleClassification, RuleClassify, RuleClassifier};
use crate::analysis::types::EntityRecord;
use crate::analyzers::error::AnalyzerError;
use crate::analyzers::extractor::EntityExtractor;
use crate::analyzers::reasoner::{ClinicalAssessment, ClinicalReasoner, ReasonerInput};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock entity extractor with a scripted response queue
///
/// Queued responses are consumed first; once the queue is empty the fixed
/// response repeats indefinitely.
pub struct MockEntityExtractor {
    queue: Mutex<VecDeque<Result<Vec<EntityRecord>, AnalyzerError>>>,
    fixed: Result<Vec<EntityRecord>, AnalyzerError>,
    calls: AtomicUsize,
}

impl MockEntityExtractor {
    /// Always returns the given entities.
    pub fn returning(entities: Vec<EntityRecord>) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fixed: Ok(entities),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails with the given error.
    pub fn failing(error: AnalyzerError) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fixed: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn push_response(&self, response: Result<Vec<EntityRecord>, AnalyzerError>) {
        self.queue.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntityExtractor for MockEntityExtractor {
    async fn extract(&self, _text: &str) -> Result<Vec<EntityRecord>, AnalyzerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(response) = self.queue.lock().unwrap().pop_front() {
            return response;
        }
        self.fixed.clone()
    }

    fn name(&self) -> &str {
        "entity-extractor"
    }
}

/// Mock clinical reasoner with a scripted response queue
pub struct MockClinicalReasoner {
    queue: Mutex<VecDeque<Result<ClinicalAssessment, AnalyzerError>>>,
    fixed: Result<ClinicalAssessment, AnalyzerError>,
    calls: AtomicUsize,
}

impl MockClinicalReasoner {
    /// Always returns the given assessment.
    pub fn returning(assessment: ClinicalAssessment) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fixed: Ok(assessment),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails with the given error.
    pub fn failing(error: AnalyzerError) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fixed: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn push_response(&self, response: Result<ClinicalAssessment, AnalyzerError>) {
        self.queue.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClinicalReasoner for MockClinicalReasoner {
    async fn reason(
        &self,
        _input: &ReasonerInput<'_>,
    ) -> Result<ClinicalAssessment, AnalyzerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(response) = self.queue.lock().unwrap().pop_front() {
            return response;
        }
        self.fixed.clone()
    }

    fn name(&self) -> &str {
        "clinical-reasoner"
    }

    fn model_info(&self) -> Option<String> {
        Some("mock".to_string())
    }
}

/// Mock rule classifier
///
/// Delegates to the real [`RuleClassifier`] unless configured to fail or to
/// return a fixed classification, so cascade tests can force the terminal
/// static fallback.
pub struct MockRuleClassifier {
    fixed: Option<Result<RuleClassification, AnalyzerError>>,
    inner: RuleClassifier,
    calls: AtomicUsize,
}

impl MockRuleClassifier {
    /// Behaves exactly like the production classifier, but counts calls.
    pub fn passthrough() -> Self {
        Self {
            fixed: None,
            inner: RuleClassifier::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always returns the given classification.
    pub fn returning(classification: RuleClassification) -> Self {
        Self {
            fixed: Some(Ok(classification)),
            inner: RuleClassifier::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails with the given error.
    pub fn failing(error: AnalyzerError) -> Self {
        Self {
            fixed: Some(Err(error)),
            inner: RuleClassifier::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RuleClassify for MockRuleClassifier {
    fn classify(&self, text: &str) -> Result<RuleClassification, AnalyzerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fixed {
            Some(response) => response.clone(),
            None => self.inner.classify(text),
        }
    }

    fn name(&self) -> &str {
        "rule-classifier"
    }
}
