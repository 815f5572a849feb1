/// LLM Client: the single point of entry for all language-model calls in the coach.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// Handlers depend on the `AiProvider` trait so tests can substitute a fake.
///
/// Policy: one attempt per request, bounded by the client timeout, no retry.
/// Every caller already has a complete fallback path.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[cfg(test)]
pub mod fake;
pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all coaching calls.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;

/// Why the AI provider could not produce a completion.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed provider response: {0}")]
    Malformed(String),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("AI provider is not configured")]
    NotConfigured,
}

/// Speaker of a conversation turn replayed to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

/// Structured context sent alongside the task prompt.
#[derive(Debug, Clone, Default)]
pub struct PromptContext {
    pub system: String,
    pub history: Vec<ConversationTurn>,
}

impl PromptContext {
    pub fn system(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<ConversationTurn>) -> Self {
        self.history = history;
        self
    }
}

/// A text-completion provider. `AppState` carries it as `Arc<dyn AiProvider>`.
#[async_trait]
pub trait AiProvider: Send + Sync {
    async fn complete(&self, prompt: &str, context: &PromptContext)
        -> Result<String, UpstreamError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
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

/// Anthropic Messages API client.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, UpstreamError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            api_url: ANTHROPIC_API_URL.to_string(),
        })
    }

    /// Points the client at a different Messages endpoint (proxies, mock servers).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

#[async_trait]
impl AiProvider for LlmClient {
    async fn complete(
        &self,
        prompt: &str,
        context: &PromptContext,
    ) -> Result<String, UpstreamError> {
        let mut messages: Vec<AnthropicMessage<'_>> = context
            .history
            .iter()
            .map(|turn| AnthropicMessage {
                role: turn.role.as_str(),
                content: &turn.content,
            })
            .collect();
        messages.push(AnthropicMessage {
            role: "user",
            content: prompt,
        });

        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system: &context.system,
            messages,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let llm_response: LlmResponse =
            serde_json::from_str(&body).map_err(|e| UpstreamError::Malformed(e.to_string()))?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        match llm_response.text().map(str::trim) {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(UpstreamError::EmptyContent),
        }
    }
}

/// Stand-in provider used when no API key is configured.
pub struct DisabledProvider;

#[async_trait]
impl AiProvider for DisabledProvider {
    async fn complete(
        &self,
        _prompt: &str,
        _context: &PromptContext,
    ) -> Result<String, UpstreamError> {
        Err(UpstreamError::NotConfigured)
    }
}
