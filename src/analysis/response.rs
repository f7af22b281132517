//! Reasoner response parsing
//!
//! Language services return JSON wrapped in varying amounts of prose and
//! markdown fencing. This module extracts the JSON object, parses it into a
//! [`ClinicalAssessment`] with conservative defaults for missing fields, and
//! provides the confidence normalization used during aggregation.

use crate::analysis::types::Severity;
use crate::analyzers::reasoner::ClinicalAssessment;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Raw wire shape; everything optional so one missing field does not sink
/// the whole assessment.
#[derive(Debug, Clone, Deserialize)]
struct RawAssessment {
    condition: Option<String>,
    severity: Option<String>,
    advice: Option<String>,
    confidence: Option<f64>,
    #[serde(default)]
    recommendations: Vec<String>,
    #[serde(rename = "whenToSeekHelp")]
    when_to_seek_help: Option<String>,
}

/// Parses a reasoner response body into a structured assessment.
pub fn parse_assessment(response: &str) -> Result<ClinicalAssessment, ParseError> {
    debug!("Parsing reasoner response ({} chars)", response.len());

    let json_str = extract_json_from_response(response)?;

    let raw: RawAssessment = serde_json::from_str(&json_str).map_err(|e| {
        warn!("JSON parse error: {}", e);
        ParseError::InvalidJson(format!(
            "{}: {}",
            e,
            json_str.chars().take(100).collect::<String>()
        ))
    })?;

    let condition = raw
        .condition
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ParseError::MissingField("condition".to_string()))?;

    // An out-of-vocabulary severity degrades to Medium rather than failing
    // the assessment outright.
    let severity = match raw.severity.as_deref() {
        Some(s) => s.parse::<Severity>().unwrap_or_else(|_| {
            warn!("Unknown severity '{}', defaulting to Medium", s);
            Severity::Medium
        }),
        None => Severity::Medium,
    };

    let advice = raw.advice.filter(|a| !a.trim().is_empty()).unwrap_or_else(|| {
        "Please consult with a healthcare professional for proper evaluation.".to_string()
    });

    let recommendations = if raw.recommendations.is_empty() {
        vec!["Consult with a healthcare professional".to_string()]
    } else {
        raw.recommendations
    };

    let when_to_seek_help = raw
        .when_to_seek_help
        .filter(|w| !w.trim().is_empty())
        .unwrap_or_else(|| "Seek medical attention if symptoms worsen or persist.".to_string());

    Ok(ClinicalAssessment {
        condition,
        severity,
        confidence: raw.confidence.unwrap_or(75.0),
        advice,
        recommendations,
        when_to_seek_help,
    })
}

/// Locates the JSON object inside a possibly fenced or prose-wrapped
/// response.
pub fn extract_json_from_response(response: &str) -> Result<String, ParseError> {
    let trimmed = response.trim();

    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        return Ok(trimmed.to_string());
    }

    if trimmed.contains("```") {
        return extract_from_markdown_block(trimmed);
    }

    if let Some(start) = trimmed.find('{') {
        if let Some(end) = trimmed.rfind('}') {
            if start < end {
                return Ok(trimmed[start..=end].to_string());
            }
        }
    }

    Err(ParseError::InvalidJson(
        "No JSON object found in response".to_string(),
    ))
}

fn extract_from_markdown_block(text: &str) -> Result<String, ParseError> {
    let re = Regex::new(r"```(?:json)?\s*\n?([\s\S]*?)\n?```").unwrap();

    if let Some(captures) = re.captures(text) {
        if let Some(json_match) = captures.get(1) {
            let json = json_match.as_str().trim();
            if json.starts_with('{') && json.ends_with('}') {
                return Ok(json.to_string());
            }
        }
    }

    Err(ParseError::InvalidJson(
        "Could not extract JSON from markdown block".to_string(),
    ))
}

/// Normalizes an analyzer-reported confidence into 0-100.
///
/// Values in 0..=1 are treated as fractions and scaled; values in 1..=100
/// pass through rounded; anything above 100 is distrusted and clamped to
/// 95; negatives and non-finite values become 0.
pub fn normalize_confidence(raw: f64) -> u8 {
    if !raw.is_finite() || raw <= 0.0 {
        0
    } else if raw <= 1.0 {
        (raw * 100.0).round() as u8
    } else if raw <= 100.0 {
        raw.round() as u8
    } else {
        warn!("Confidence value {} out of range, clamping to 95", raw);
        95
    }
}
