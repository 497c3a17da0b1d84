//! Completion capability — the only place the experiment talks to a language model.
//!
//! The runner depends on the `Completer` trait, not on any concrete backend.
//! `LlmClient` is the Anthropic Messages API backend; `UnconfiguredCompleter`
//! is the placeholder used when no API key is set, and makes every prompt skip.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Model used when neither the CLI nor the environment names one.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5";
/// Responses are 3–4 sentences; this leaves ample headroom.
const MAX_TOKENS: u32 = 1024;
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Outcome of a completion attempt, as seen by the runner.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No backend is configured. The runner skips the prompt and keeps going.
    #[error("completion capability is not configured")]
    NotConfigured,

    /// Anything else. The runner aborts.
    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// A text-completion capability: prompt text + model identifier in, response text out.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, prompt: &str, model_name: &str) -> Result<String, CompletionError>;
}

/// Placeholder capability. Every call reports `NotConfigured`.
///
/// Used for manual workflows where responses are pasted into `results.jsonl` by hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredCompleter;

#[async_trait]
impl Completer for UnconfiguredCompleter {
    async fn complete(&self, _prompt: &str, _model_name: &str) -> Result<String, CompletionError> {
        Err(CompletionError::NotConfigured)
    }
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Anthropic Messages API backend.
/// Retries on 429 (rate limit) and 5xx internally; the runner never retries.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, api_key })
    }

    /// Makes a raw call to the Messages API, returning the full response object.
    /// Retries on 429 and 5xx with exponential backoff.
    pub async fn call(&self, prompt: &str, model: &str) -> Result<LlmResponse, LlmError> {
        let request_body = build_request(prompt, model);

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message: api_error_message(body),
                });
            }

            let llm_response: LlmResponse = response.json().await?;

            debug!(
                "LLM call succeeded: model={}, input_tokens={}, output_tokens={}",
                model, llm_response.usage.input_tokens, llm_response.usage.output_tokens
            );

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl Completer for LlmClient {
    async fn complete(&self, prompt: &str, model_name: &str) -> Result<String, CompletionError> {
        let response = self.call(prompt, model_name).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(text.to_string())
    }
}

fn build_request<'a>(prompt: &'a str, model: &'a str) -> AnthropicRequest<'a> {
    AnthropicRequest {
        model,
        max_tokens: MAX_TOKENS,
        messages: vec![AnthropicMessage {
            role: "user",
            content: prompt,
        }],
    }
}

/// Pulls `error.message` out of an API error body, falling back to the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<AnthropicError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}
