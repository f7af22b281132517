//! Command handlers
//!
//! Each handler runs one CLI command end to end and returns a process exit
//! code. User-facing errors are printed with troubleshooting hints instead
//! of raw error chains.

use crate::analysis::service::TriageError;
use crate::analyzers::extractor::NerServiceClient;
use crate::analyzers::openai_reasoner::OpenAiCompatibleReasoner;
use crate::cli::commands::{AnalyzeArgs, HealthArgs, OutputFormatArg};
use crate::cli::output::{render_human, render_json};
use crate::config::TriageConfig;
use chrono::Utc;
use std::time::Duration;
use tracing::debug;

/// Runs the analyze command.
pub async fn handle_analyze(args: &AnalyzeArgs, quiet: bool) -> i32 {
    let config = TriageConfig::default();
    debug!("Loaded configuration:\n{}", config);

    let service = match config.build_service() {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("\nHelp: check the SYMTRIAGE_* environment variables and try again.");
            return 1;
        }
    };

    let result = service
        .analyze_text(&args.symptoms, args.age, args.gender.clone())
        .await;

    match result {
        Ok(analysis) => {
            match args.format {
                OutputFormatArg::Human => {
                    println!("{}", render_human(&analysis, Utc::now()));
                }
                OutputFormatArg::Json => match render_json(&analysis) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: failed to serialize result: {}", e);
                        return 1;
                    }
                },
            }
            if !quiet && analysis.urgency_score >= 8 {
                eprintln!("Note: this assessment indicates high urgency. If this is an emergency, call your local emergency number.");
            }
            0
        }
        Err(TriageError::Validation(e)) => {
            eprintln!("Error: invalid input: {}", e);
            eprintln!("\nHelp: describe the symptoms in at least a short sentence (10-1000 characters).");
            2
        }
    }
}

/// Runs the health command: checks each configured analyzer and reports.
pub async fn handle_health(args: &HealthArgs) -> i32 {
    let config = TriageConfig::default();
    let timeout = Duration::from_secs(args.timeout);

    let extractor = NerServiceClient::with_timeout(config.ner_endpoint.clone(), timeout);
    let ner_healthy = matches!(extractor.health_check().await, Ok(true));
    println!(
        "entity-extractor  {}  ({})",
        status_label(ner_healthy),
        config.ner_endpoint
    );

    let reasoner_healthy = if config.reasoner_api_key.trim().is_empty() {
        println!(
            "clinical-reasoner unavailable (SYMTRIAGE_REASONER_API_KEY not set)"
        );
        false
    } else {
        let reasoner = OpenAiCompatibleReasoner::with_timeout(
            config.reasoner_endpoint.clone(),
            config.reasoner_api_key.clone(),
            config.reasoner_model.clone(),
            timeout,
        );
        let healthy = matches!(reasoner.health_check().await, Ok(true));
        println!(
            "clinical-reasoner {}  ({})",
            status_label(healthy),
            config.reasoner_endpoint
        );
        healthy
    };

    // The rule classifier has no external dependency.
    println!("rule-classifier   ok  (built-in)");

    if ner_healthy && reasoner_healthy {
        0
    } else {
        println!(
            "\nDegraded analyzers fall back automatically; analysis remains available."
        );
        1
    }
}

fn status_label(healthy: bool) -> &'static str {
    if healthy {
        "ok "
    } else {
        "unavailable"
    }
}
