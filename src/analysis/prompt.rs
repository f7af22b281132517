//! Prompt construction for the clinical reasoner
//!
//! Builds the system and user prompts sent to the remote reasoning service.
//! The user prompt is enriched with whatever the entity extractor produced;
//! an empty entity list simply omits that section.

use crate::analysis::types::EntityRecord;
use crate::analyzers::reasoner::ReasonerInput;

/// System prompt for clinical symptom assessment
pub const SYSTEM_PROMPT: &str = "You are a knowledgeable medical AI assistant providing preliminary symptom \
     analysis. Provide accurate, conservative guidance and always emphasize \
     the importance of professional medical consultation for serious \
     concerns. Respond with valid JSON only.";

/// Builds the user prompt for one request.
pub fn build_user_prompt(input: &ReasonerInput<'_>) -> String {
    let mut prompt = String::with_capacity(1024);

    prompt.push_str("Analyze the following symptoms and provide a structured assessment.\n\n");
    prompt.push_str("PATIENT INFORMATION:\n");
    prompt.push_str(&format!("- Symptoms: {}\n", input.symptoms));

    if let Some(age) = input.age {
        prompt.push_str(&format!("- Age: {} years old\n", age));
    }
    if let Some(gender) = input.gender {
        prompt.push_str(&format!("- Gender: {}\n", gender));
    }
    if !input.entities.is_empty() {
        prompt.push_str(&format!(
            "- Recognized medical terms: {}\n",
            entity_summary(input.entities)
        ));
    }

    prompt.push_str(
        r#"
INSTRUCTIONS:
Provide your analysis in the following JSON format only (no additional text):

{
    "condition": "Most likely condition based on symptoms",
    "severity": "Low|Medium|High|Critical",
    "advice": "Primary medical advice and immediate care instructions",
    "confidence": 85,
    "recommendations": [
        "Specific recommendation 1",
        "Specific recommendation 2",
        "Specific recommendation 3"
    ],
    "whenToSeekHelp": "Clear criteria for when to seek immediate medical attention"
}

IMPORTANT GUIDELINES:
- Base severity on symptom urgency: Low (minor issues), Medium (concerning but not urgent), High (needs medical attention soon), Critical (seek immediate emergency care)
- Provide practical, actionable advice
- Include 3-4 specific recommendations for symptom management
- Always include clear criteria for when to seek professional medical help
- Be conservative in assessments - when in doubt, recommend medical consultation
- Do not provide specific drug dosages or prescription medication recommendations
"#,
    );

    prompt
}

fn entity_summary(entities: &[EntityRecord]) -> String {
    entities
        .iter()
        .map(|e| e.text.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::EntityCategory;

    #[test]
    fn prompt_includes_symptoms_and_demographics() {
        let input = ReasonerInput {
            symptoms: "persistent dry cough for a week",
            entities: &[],
            age: Some(42),
            gender: Some("male"),
        };

        let prompt = build_user_prompt(&input);
        assert!(prompt.contains("persistent dry cough for a week"));
        assert!(prompt.contains("Age: 42"));
        assert!(prompt.contains("Gender: male"));
        assert!(prompt.contains("whenToSeekHelp"));
    }

    #[test]
    fn prompt_omits_missing_optional_fields() {
        let input = ReasonerInput {
            symptoms: "mild rash on both arms",
            entities: &[],
            age: None,
            gender: None,
        };

        let prompt = build_user_prompt(&input);
        assert!(!prompt.contains("Age:"));
        assert!(!prompt.contains("Gender:"));
        assert!(!prompt.contains("Recognized medical terms"));
    }

    #[test]
    fn prompt_lists_extracted_entities() {
        let entities = vec![
            EntityRecord::new("cough", EntityCategory::Symptom, 0.9),
            EntityRecord::new("chest", EntityCategory::BodyPart, 0.8),
        ];
        let input = ReasonerInput {
            symptoms: "cough with chest discomfort",
            entities: &entities,
            age: None,
            gender: None,
        };

        let prompt = build_user_prompt(&input);
        assert!(prompt.contains("Recognized medical terms: cough, chest"));
    }
}
