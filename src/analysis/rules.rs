//! Rule-based symptom classification
//!
//! Deterministic, offline keyword matcher used as the low-cost fallback when
//! the clinical reasoner is unavailable, and as a cross-check signal. The
//! category table is declaration-ordered: when two categories accumulate the
//! same matched weight, the earlier declaration wins. The order is therefore
//! behavior-determining and lists the more acute categories first.

use crate::analyzers::error::AnalyzerError;
use crate::analysis::types::Severity;
use serde::Serialize;

/// Confidence assigned when no category matches at all.
const NO_MATCH_CONFIDENCE: f64 = 0.5;

/// One category of the classification table.
struct CategoryRule {
    name: &'static str,
    label: &'static str,
    severity: Severity,
    /// Keyword with its match weight. Matching is case-insensitive substring
    /// containment; weights favour specific phrases over generic words.
    keywords: &'static [(&'static str, u32)],
}

/// Declaration order is the tie-break order: first entry wins equal-weight
/// ties, so the most acute categories come first.
const CATEGORIES: &[CategoryRule] = &[
    CategoryRule {
        name: "emergency",
        label: "Emergency",
        severity: Severity::Critical,
        keywords: &[
            ("unconscious", 3),
            ("severe bleeding", 3),
            ("can't breathe", 3),
            ("cannot breathe", 3),
            ("difficulty breathing", 3),
            ("anaphylaxis", 3),
            ("overdose", 3),
            ("seizure", 2),
            ("stroke", 2),
        ],
    },
    CategoryRule {
        name: "cardiovascular",
        label: "Cardiovascular",
        severity: Severity::High,
        keywords: &[
            ("chest pain", 3),
            ("chest tightness", 2),
            ("palpitations", 2),
            ("irregular heartbeat", 2),
            ("angina", 2),
            ("heart", 1),
            ("blood pressure", 1),
        ],
    },
    CategoryRule {
        name: "respiratory",
        label: "Respiratory",
        severity: Severity::Medium,
        keywords: &[
            ("shortness of breath", 2),
            ("wheezing", 2),
            ("cough", 1),
            ("asthma", 2),
            ("bronchitis", 2),
            ("pneumonia", 2),
            ("breathing", 1),
        ],
    },
    CategoryRule {
        name: "neurological",
        label: "Neurological",
        severity: Severity::Medium,
        keywords: &[
            ("migraine", 2),
            ("numbness", 2),
            ("confusion", 2),
            ("memory loss", 2),
            ("headache", 1),
            ("dizziness", 1),
            ("tingling", 1),
        ],
    },
    CategoryRule {
        name: "gastrointestinal",
        label: "Gastrointestinal",
        severity: Severity::Medium,
        keywords: &[
            ("abdominal pain", 2),
            ("vomiting", 2),
            ("diarrhea", 2),
            ("stomach", 1),
            ("nausea", 1),
            ("constipation", 1),
            ("indigestion", 1),
            ("acid reflux", 1),
        ],
    },
    CategoryRule {
        name: "infectious",
        label: "Infectious",
        severity: Severity::Medium,
        keywords: &[
            ("fever", 2),
            ("infection", 2),
            ("chills", 1),
            ("flu", 1),
            ("sore throat", 1),
            ("swollen glands", 1),
        ],
    },
    CategoryRule {
        name: "musculoskeletal",
        label: "Musculoskeletal",
        severity: Severity::Low,
        keywords: &[
            ("back pain", 2),
            ("arthritis", 2),
            ("sprain", 1),
            ("joint", 1),
            ("muscle", 1),
            ("neck pain", 1),
            ("stiffness", 1),
        ],
    },
    CategoryRule {
        name: "dermatological",
        label: "Dermatological",
        severity: Severity::Low,
        keywords: &[
            ("rash", 1),
            ("itching", 1),
            ("hives", 1),
            ("eczema", 1),
            ("skin", 1),
            ("swelling", 1),
        ],
    },
    CategoryRule {
        name: "urological",
        label: "Urological",
        severity: Severity::Medium,
        keywords: &[
            ("burning urination", 2),
            ("urinary", 2),
            ("urination", 2),
            ("kidney", 2),
            ("bladder", 1),
        ],
    },
    CategoryRule {
        name: "psychological",
        label: "Psychological",
        severity: Severity::Medium,
        keywords: &[
            ("panic", 2),
            ("depression", 2),
            ("anxiety", 1),
            ("insomnia", 1),
            ("stress", 1),
        ],
    },
];

/// Outcome of a rule-based classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleClassification {
    pub category: &'static str,
    pub severity_guess: Severity,
    pub matched_keywords: Vec<&'static str>,
    /// 0..1 fraction, normalized by the orchestrator like any other
    /// analyzer confidence.
    pub confidence: f64,
}

impl RuleClassification {
    /// Human-readable condition line for use as a primary assessment.
    pub fn condition(&self) -> String {
        if self.matched_keywords.is_empty() {
            return "General Symptom Assessment".to_string();
        }
        let label = CATEGORIES
            .iter()
            .find(|c| c.name == self.category)
            .map(|c| c.label)
            .unwrap_or("General");
        format!("Possible {} Condition", label)
    }
}

/// Classifier seam used by the orchestrator
///
/// The production implementation is total; the trait is fallible so tests
/// can force the orchestrator's terminal static fallback.
pub trait RuleClassify: Send + Sync {
    fn classify(&self, text: &str) -> Result<RuleClassification, AnalyzerError>;

    fn name(&self) -> &str;
}

/// The deterministic keyword classifier
///
/// No external dependencies, no I/O, never fails. Always available as the
/// last analyzer in the fallback cascade.
#[derive(Debug, Default, Clone)]
pub struct RuleClassifier;

impl RuleClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl RuleClassify for RuleClassifier {
    fn classify(&self, text: &str) -> Result<RuleClassification, AnalyzerError> {
        let text_lower = text.to_lowercase();

        let mut best: Option<(&CategoryRule, u32, Vec<&'static str>)> = None;

        for rule in CATEGORIES {
            let mut weight = 0u32;
            let mut matched = Vec::new();

            for (keyword, kw_weight) in rule.keywords {
                if text_lower.contains(keyword) {
                    weight += kw_weight;
                    matched.push(*keyword);
                }
            }

            if weight == 0 {
                continue;
            }

            // Strictly-greater keeps the first-declared category on ties.
            match &best {
                Some((_, best_weight, _)) if weight <= *best_weight => {}
                _ => best = Some((rule, weight, matched)),
            }
        }

        let classification = match best {
            Some((rule, weight, matched)) => {
                let total: u32 = rule.keywords.iter().map(|(_, w)| w).sum();
                let confidence = (f64::from(weight) / f64::from(total) * 0.8 + 0.3).min(0.95);
                RuleClassification {
                    category: rule.name,
                    severity_guess: rule.severity,
                    matched_keywords: matched,
                    confidence,
                }
            }
            None => RuleClassification {
                category: "general",
                severity_guess: Severity::Medium,
                matched_keywords: Vec::new(),
                confidence: NO_MATCH_CONFIDENCE,
            },
        };

        Ok(classification)
    }

    fn name(&self) -> &str {
        "rule-classifier"
    }
}
