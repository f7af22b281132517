//! Output rendering for analysis results

use crate::analysis::types::AnalysisResult;
use chrono::{DateTime, Utc};

/// Renders a result as a human-readable report.
pub fn render_human(result: &AnalysisResult, generated_at: DateTime<Utc>) -> String {
    let mut out = String::with_capacity(1024);

    out.push_str(&format!("Assessment:  {}\n", result.condition));
    out.push_str(&format!("Severity:    {}\n", result.severity));
    out.push_str(&format!("Confidence:  {}%\n", result.confidence));
    out.push_str(&format!("Urgency:     {}/10\n", result.urgency_score));
    out.push('\n');

    out.push_str(&format!("Advice: {}\n", result.advice));
    out.push('\n');

    if !result.recommendations.is_empty() {
        out.push_str("Recommendations:\n");
        for rec in &result.recommendations {
            out.push_str(&format!("  - {}\n", rec));
        }
        out.push('\n');
    }

    out.push_str(&format!("When to seek help: {}\n", result.when_to_seek_help));

    if !result.entities.is_empty() {
        out.push_str(&format!(
            "\nRecognized terms: {}\n",
            result.entities.join(", ")
        ));
    }

    out.push_str(&format!("\nAnalyzers: {}\n", result.analyzers_used));
    for analysis in &result.model_analyses {
        let status = if analysis.success { "ok" } else { "failed" };
        out.push_str(&format!(
            "  {} [{}] {}ms",
            analysis.analyzer, status, analysis.duration_ms
        ));
        if let Some(error) = &analysis.error {
            out.push_str(&format!(" - {}", error));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "\nGenerated: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("\n{}\n", result.disclaimer));

    out
}

/// Renders a result as pretty-printed JSON.
pub fn render_json(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
