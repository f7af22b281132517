//! OpenAI-compatible clinical reasoning client
//!
//! HTTP client for a remote reasoning service exposing the OpenAI chat
//! completions API. Single-shot: the retry-with-backoff policy lives in the
//! orchestrator so every reasoner implementation is retried uniformly.
//!
//! Failure modes are mapped to distinct `AnalyzerError` variants so the
//! orchestrator (and operators reading logs) can tell authentication and
//! quota exhaustion apart from transport problems.

use crate::analysis::prompt::{build_user_prompt, SYSTEM_PROMPT};
use crate::analysis::response::parse_assessment;
use crate::analyzers::error::AnalyzerError;
use crate::analyzers::reasoner::{ClinicalAssessment, ClinicalReasoner, ReasonerInput};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Default request timeout for reasoning calls
const DEFAULT_TIMEOUT_SECS: u64 = 12;

/// Generation parameters tuned for consistent clinical output
const TEMPERATURE: f32 = 0.3;
const TOP_P: f32 = 0.9;
const MAX_TOKENS: u32 = 800;

/// Remote clinical reasoner speaking the OpenAI chat completions API
///
/// # Configuration
///
/// - **endpoint**: API base URL (e.g. "https://api.openai.com")
/// - **api_key**: Bearer token for authentication
/// - **model**: model identifier (e.g. "gpt-4o-mini")
/// - **timeout**: request timeout duration
///
/// # Thread Safety
///
/// Thread-safe; share across tasks with `Arc`.
pub struct OpenAiCompatibleReasoner {
    endpoint: String,
    api_key: String,
    model: String,
    http_client: Client,
    timeout: Duration,
}

impl OpenAiCompatibleReasoner {
    /// Creates a reasoner with the default timeout.
    pub fn new(endpoint: String, api_key: String, model: String) -> Self {
        Self::with_timeout(
            endpoint,
            api_key,
            model,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Creates a reasoner with a custom timeout.
    pub fn with_timeout(
        endpoint: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            endpoint,
            api_key,
            model,
            http_client,
            timeout,
        }
    }

    /// Checks whether the reasoning service answers authenticated requests.
    pub async fn health_check(&self) -> Result<bool, AnalyzerError> {
        let url = format!("{}/v1/models", self.endpoint);

        debug!("Checking reasoner health at {}", url);

        match self
            .http_client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
        {
            Ok(response) => Ok(response.status().is_success()),
            Err(e) => {
                if e.is_timeout() || e.is_connect() {
                    warn!("Cannot reach reasoning service at {}", self.endpoint);
                    Ok(false)
                } else {
                    Err(AnalyzerError::Network {
                        message: format!("Health check failed: {}", e),
                    })
                }
            }
        }
    }

    async fn generate(&self, user_prompt: String) -> Result<String, AnalyzerError> {
        let url = format!("{}/v1/chat/completions", self.endpoint);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: user_prompt,
                },
            ],
            temperature: Some(TEMPERATURE),
            top_p: Some(TOP_P),
            max_tokens: Some(MAX_TOKENS),
            stream: Some(false),
        };

        debug!(
            "Sending reasoning request: prompt_length={}",
            request.messages[1].content.len()
        );

        let start = Instant::now();

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!("Reasoning request timed out after {:?}", self.timeout);
                    AnalyzerError::Timeout {
                        seconds: self.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    error!("Cannot connect to reasoning service at {}", self.endpoint);
                    AnalyzerError::Network {
                        message: format!("Connection failed: {}", e),
                    }
                } else {
                    AnalyzerError::Network {
                        message: format!("Request failed: {}", e),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.map_error_status(status, response).await);
        }

        let api_response: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| AnalyzerError::InvalidResponse {
                    message: format!("JSON parse error: {}", e),
                    raw_response: None,
                })?;

        info!(
            "Reasoning completed in {:.2}s",
            start.elapsed().as_secs_f64()
        );

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .map(|message| message.content)
            .ok_or_else(|| AnalyzerError::InvalidResponse {
                message: "No content in reasoning response".to_string(),
                raw_response: None,
            })
    }

    async fn map_error_status(
        &self,
        status: StatusCode,
        response: reqwest::Response,
    ) -> AnalyzerError {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        let body = response.text().await.unwrap_or_default();

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                error!("Reasoning service rejected credentials: {}", body);
                AnalyzerError::Authentication {
                    message: format!("HTTP {}: {}", status, body),
                }
            }
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("Reasoning service quota exhausted (retry_after={:?})", retry_after);
                AnalyzerError::QuotaExceeded { retry_after }
            }
            _ => {
                error!("Reasoning service returned error status {}: {}", status, body);
                AnalyzerError::Api {
                    message: format!("HTTP {}: {}", status, body),
                    status_code: Some(status.as_u16()),
                }
            }
        }
    }
}

#[async_trait]
impl ClinicalReasoner for OpenAiCompatibleReasoner {
    async fn reason(
        &self,
        input: &ReasonerInput<'_>,
    ) -> Result<ClinicalAssessment, AnalyzerError> {
        let prompt = build_user_prompt(input);
        let response_text = self.generate(prompt).await?;

        debug!("Received response with {} characters", response_text.len());

        parse_assessment(&response_text).map_err(|e| AnalyzerError::Parse {
            message: e.to_string(),
            context: response_text.chars().take(200).collect(),
        })
    }

    fn name(&self) -> &str {
        "clinical-reasoner"
    }

    fn model_info(&self) -> Option<String> {
        Some(format!("{} @ {}", self.model, self.endpoint))
    }
}

impl fmt::Debug for OpenAiCompatibleReasoner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiCompatibleReasoner")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Message structure for the chat completions API
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

/// Request structure for the chat completions API
#[derive(Debug, Clone, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
}

/// Response structure from the chat completions API
#[derive(Debug, Clone, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
struct Choice {
    message: Option<Message>,
}
