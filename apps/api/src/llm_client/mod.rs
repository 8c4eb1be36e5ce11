//! LLM client: the single point of entry for all Claude API calls in Folio.
//!
//! No other module may call the Anthropic API directly.
//! One attempt per call. Failures surface to the caller immediately.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::errors::AppError;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
/// The model used for portfolio generation.
pub const MODEL: &str = "claude-sonnet-4-20250514";
const MAX_TOKENS: u32 = 4096;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Anthropic API key not configured. Set ANTHROPIC_API_KEY.")]
    MissingApiKey,

    #[error("transport failure: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Anthropic returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("reply is not JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("reply contained no text")]
    EmptyContent,
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::MissingApiKey => AppError::Configuration(e.to_string()),
            LlmError::Api { status, message } => AppError::Upstream { status, message },
            LlmError::Parse(err) => AppError::MalformedGeneration(err.to_string()),
            LlmError::Http(_) | LlmError::EmptyContent => AppError::Llm(e.to_string()),
        }
    }
}

// Wire types for the Messages API. Only the fields Folio reads are modelled.

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [UserTurn<'a>; 1],
}

#[derive(Serialize)]
struct UserTurn<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<Block>,
    #[serde(default)]
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Block {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct TokenUsage {
    input_tokens: u32,
    output_tokens: u32,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl MessagesResponse {
    fn into_text(self) -> Option<String> {
        self.content.into_iter().find_map(|block| match block {
            Block::Text { text } => Some(text),
            Block::Other => None,
        })
    }
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
}

impl LlmClient {
    /// The key may be absent; calls then fail with [`LlmError::MissingApiKey`].
    pub fn new(api_key: Option<String>) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, api_key })
    }

    /// Sends one user turn and returns the first text block of the reply.
    pub async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let body = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: [UserTurn {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            warn!("Anthropic returned {}: {}", status, raw);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_message(raw),
            });
        }

        let reply: MessagesResponse = response.json().await?;
        if let Some(usage) = &reply.usage {
            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                usage.input_tokens, usage.output_tokens
            );
        }
        reply.into_text().ok_or(LlmError::EmptyContent)
    }

    /// Calls the LLM and parses the text reply as untyped JSON.
    ///
    /// Only syntax is checked here; shape is the caller's concern.
    pub async fn call_json_value(&self, prompt: &str, system: &str) -> Result<Value, LlmError> {
        let text = self.complete(prompt, system).await?;
        parse_json_text(&text)
    }
}

/// Pulls `error.message` out of an Anthropic error body, or keeps the body as is.
fn error_message(raw: String) -> String {
    match serde_json::from_str::<ErrorEnvelope>(&raw) {
        Ok(envelope) => envelope.error.message,
        Err(_) => raw,
    }
}

/// Parses model output as JSON after removing an optional Markdown fence.
pub fn parse_json_text(text: &str) -> Result<Value, LlmError> {
    let body = strip_json_fences(text);
    if body.is_empty() {
        return Err(LlmError::EmptyContent);
    }
    Ok(serde_json::from_str(body)?)
}

/// Removes a surrounding code fence, with or without a language tag.
pub fn strip_json_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(opened) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (`json`, `JSON`, ...) up to the first newline.
    let inner = match opened.find('\n') {
        Some(newline) if opened[..newline].chars().all(|c| c.is_ascii_alphanumeric()) => {
            &opened[newline + 1..]
        }
        _ => opened,
    };
    inner.trim_end().strip_suffix("```").unwrap_or(inner).trim()
}
