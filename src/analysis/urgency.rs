//! Urgency scoring
//!
//! Pure, deterministic 1-10 triage score computed from the primary severity,
//! the extracted entities and the raw request text. Kept free of any I/O so
//! it can be tested with literal fixtures.

use crate::analysis::types::{EntityCategory, EntityRecord, Severity};

/// Maximum bonus the emergency keyword groups can add on top of the
/// severity base.
const MAX_KEYWORD_BONUS: u8 = 3;

/// Entity confidence below which severity-modifier entities are ignored.
const MODIFIER_CONFIDENCE_FLOOR: f32 = 0.7;

/// Emergency keyword groups. Each group contributes at most once so that
/// repeated synonyms ("can't breathe ... struggling to breathe") are not
/// over-counted.
const EMERGENCY_GROUPS: &[(&str, &[&str])] = &[
    (
        "breathing",
        &[
            "can't breathe",
            "cannot breathe",
            "difficulty breathing",
            "shortness of breath",
            "struggling to breathe",
        ],
    ),
    (
        "cardiac",
        &["chest pain", "heart attack", "chest tightness"],
    ),
    (
        "consciousness",
        &["unconscious", "passed out", "fainted", "unresponsive", "seizure"],
    ),
    (
        "bleeding",
        &["severe bleeding", "bleeding heavily", "coughing blood", "coughing up blood"],
    ),
    (
        "stroke",
        &["stroke", "face drooping", "slurred speech", "sudden numbness"],
    ),
    (
        "anaphylaxis",
        &["anaphylaxis", "allergic reaction", "throat swelling", "throat closing"],
    ),
    ("intensifier", INTENSIFIERS),
];

const INTENSIFIERS: &[&str] = &["severe", "unbearable", "excruciating", "worst pain"];

/// Computes the 1-10 urgency score for a request.
///
/// Base score comes from the severity label (Low=2, Medium=5, High=7,
/// Critical=9). Each matched emergency keyword group adds +1, capped at +3
/// overall, and the final value is clamped to \[1, 10\].
pub fn urgency_score(entities: &[EntityRecord], severity: Severity, text: &str) -> u8 {
    let base = severity.urgency_base();
    let bonus = keyword_bonus(entities, text).min(MAX_KEYWORD_BONUS);

    (base + bonus).clamp(1, 10)
}

fn keyword_bonus(entities: &[EntityRecord], text: &str) -> u8 {
    let text_lower = text.to_lowercase();
    let mut bonus = 0u8;

    for (group, keywords) in EMERGENCY_GROUPS {
        let text_hit = keywords.iter().any(|kw| text_lower.contains(kw));

        // A confidently extracted severity modifier counts toward the
        // intensifier group even when the raw text phrasing differs.
        let entity_hit = *group == "intensifier"
            && entities.iter().any(|e| {
                e.category == EntityCategory::SeverityModifier
                    && e.confidence >= MODIFIER_CONFIDENCE_FLOOR
                    && INTENSIFIERS.contains(&e.text.to_lowercase().as_str())
            });

        if text_hit || entity_hit {
            bonus += 1;
        }
    }

    bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    fn modifier(text: &str, confidence: f32) -> EntityRecord {
        EntityRecord::new(text, EntityCategory::SeverityModifier, confidence)
    }

    #[parameterized(
        low = { Severity::Low, 2 },
        medium = { Severity::Medium, 5 },
        high = { Severity::High, 7 },
        critical = { Severity::Critical, 9 },
    )]
    fn base_score_without_keywords(severity: Severity, expected: u8) {
        let score = urgency_score(&[], severity, "a dull ache behind the eyes");
        assert_eq!(score, expected);
    }

    #[test]
    fn emergency_keywords_raise_critical_to_ten() {
        let score = urgency_score(
            &[],
            Severity::Critical,
            "severe chest pain and shortness of breath",
        );
        assert!(score >= 9);
        assert_eq!(score, 10);
    }

    #[test]
    fn repeated_synonyms_count_once_per_group() {
        // Two breathing phrases, one group, one point.
        let score = urgency_score(
            &[],
            Severity::Medium,
            "can't breathe, real difficulty breathing since this morning",
        );
        assert_eq!(score, 6);
    }

    #[test]
    fn bonus_is_capped_at_three() {
        let text = "severe chest pain, can't breathe, slurred speech, passed out, bleeding heavily";
        let score = urgency_score(&[], Severity::Low, text);
        assert_eq!(score, 2 + 3);
    }

    #[test]
    fn confident_severity_modifier_entity_counts_as_intensifier() {
        let entities = vec![modifier("excruciating", 0.93)];
        let score = urgency_score(&entities, Severity::Medium, "pain in my left knee all week");
        assert_eq!(score, 6);
    }

    #[test]
    fn low_confidence_modifier_entity_is_ignored() {
        let entities = vec![modifier("excruciating", 0.4)];
        let score = urgency_score(&entities, Severity::Medium, "pain in my left knee all week");
        assert_eq!(score, 5);
    }

    #[test]
    fn mild_headache_scores_low_band() {
        let score = urgency_score(
            &[],
            Severity::Low,
            "I have a headache for 2 days, mild pain",
        );
        assert!((1..=3).contains(&score));
    }

    #[test]
    fn score_is_deterministic() {
        let entities = vec![modifier("severe", 0.88)];
        let text = "severe abdominal pain with vomiting";
        let first = urgency_score(&entities, Severity::High, text);
        for _ in 0..10 {
            assert_eq!(urgency_score(&entities, Severity::High, text), first);
        }
    }

    #[test]
    fn result_always_within_range() {
        for severity in [
            Severity::Low,
            Severity::Medium,
            Severity::High,
            Severity::Critical,
        ] {
            let score = urgency_score(
                &[],
                severity,
                "severe chest pain, unconscious, severe bleeding, can't breathe, stroke",
            );
            assert!((1..=10).contains(&score));
        }
    }
}
