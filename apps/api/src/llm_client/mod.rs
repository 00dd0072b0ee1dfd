//! Model gateway — the single point of entry for all LLM calls.
//!
//! ARCHITECTURAL RULE: no other module may talk to a model API directly.
//! All LLM interactions go through [`ModelClient`], which consults and
//! populates the response cache transparently.
//!
//! Two interchangeable backends (Anthropic Messages API, OpenAI Chat
//! Completions API) sit behind the [`ModelBackend`] capability. The variant
//! is selected once at construction from configuration; callers never
//! branch on the concrete type.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::{Config, ModelKind, ModelSettings};

pub mod cache;
pub mod prompts;

use cache::ResponseCache;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model returned empty content")]
    EmptyContent,
}

/// The backend capability: one prompt in, one text completion out.
/// No retries here — a failed call propagates to the caller of `run_*`.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    async fn invoke(
        &self,
        prompt: &str,
        system_prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError>;
}

/// Implemented by types that can be requested as structured model output.
/// `TYPE_NAME` doubles as the cache shape tag.
pub trait StructuredOutput: Serialize + DeserializeOwned {
    const TYPE_NAME: &'static str;
}

/// Per-call overrides for a gateway run. Only `max_tokens` can override the
/// backend default; temperature is fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions<'a> {
    pub max_tokens: Option<u32>,
    pub system_prompt: Option<&'a str>,
    pub use_cache: bool,
}

impl Default for RunOptions<'_> {
    fn default() -> Self {
        Self {
            max_tokens: None,
            system_prompt: None,
            use_cache: true,
        }
    }
}

/// The gateway used by the whole matching pipeline.
#[derive(Clone)]
pub struct ModelClient {
    backend: Arc<dyn ModelBackend>,
    cache: ResponseCache,
    default_max_tokens: u32,
    temperature: f32,
}

impl ModelClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let settings = config.backend_settings().clone();
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .context("failed to build HTTP client")?;

        let backend: Arc<dyn ModelBackend> = match config.backend {
            ModelKind::Anthropic => Arc::new(AnthropicBackend {
                client: http,
                settings: settings.clone(),
            }),
            ModelKind::OpenAi => Arc::new(OpenAiBackend {
                client: http,
                settings: settings.clone(),
            }),
        };

        let cache = ResponseCache::new(&config.cache_dir)
            .context("failed to create response cache directory")?;

        Ok(Self {
            backend,
            cache,
            default_max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        backend: Arc<dyn ModelBackend>,
        cache: ResponseCache,
        default_max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            backend,
            cache,
            default_max_tokens,
            temperature,
        }
    }

    /// Runs a plain-text prompt. Cache hit short-circuits the backend call;
    /// on a miss the fresh result is written back tagged as text.
    pub async fn run_text(&self, prompt: &str, opts: RunOptions<'_>) -> Result<String, LlmError> {
        let system = opts.system_prompt.unwrap_or(prompts::DEFAULT_SYSTEM_PROMPT);
        let key = ResponseCache::key(prompt, system);

        if opts.use_cache {
            if let Some(text) = self.cache.get_text(&key) {
                debug!("using cached response");
                return Ok(text);
            }
        }

        let max_tokens = opts.max_tokens.unwrap_or(self.default_max_tokens);
        let text = self
            .backend
            .invoke(prompt, system, max_tokens, self.temperature)
            .await?;

        if opts.use_cache {
            self.cache.put_text(&key, &text);
        }
        Ok(text)
    }

    /// Runs a prompt expecting a JSON response conforming to `T`.
    /// The prompt must embed the expected schema; the system prompt enforces
    /// JSON-only output and code fences are stripped before parsing.
    pub async fn run_json<T: StructuredOutput>(
        &self,
        prompt: &str,
        opts: RunOptions<'_>,
    ) -> Result<T, LlmError> {
        let system = opts
            .system_prompt
            .unwrap_or(prompts::STRUCTURED_SYSTEM_PROMPT);
        let key = ResponseCache::key(prompt, system);

        if opts.use_cache {
            if let Some(value) = self.cache.get_typed::<T>(&key, T::TYPE_NAME) {
                debug!("using cached {} response", T::TYPE_NAME);
                return Ok(value);
            }
        }

        let max_tokens = opts.max_tokens.unwrap_or(self.default_max_tokens);
        let raw = self
            .backend
            .invoke(prompt, system, max_tokens, self.temperature)
            .await?;

        let value: T = serde_json::from_str(strip_json_fences(&raw))?;

        if opts.use_cache {
            self.cache.put_typed(&key, &value, T::TYPE_NAME);
        }
        Ok(value)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Anthropic backend (Messages API)
// ────────────────────────────────────────────────────────────────────────────

pub struct AnthropicBackend {
    client: Client,
    settings: ModelSettings,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
    usage: AnthropicUsage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

#[async_trait]
impl ModelBackend for AnthropicBackend {
    async fn invoke(
        &self,
        prompt: &str,
        system_prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let request_body = AnthropicRequest {
            model: &self.settings.model_name,
            max_tokens,
            temperature,
            system: system_prompt,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.settings.api_key)
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
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: AnthropicResponse = response.json().await?;
        debug!(
            "Anthropic call succeeded: input_tokens={}, output_tokens={}",
            parsed.usage.input_tokens, parsed.usage.output_tokens
        );

        parsed
            .content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.clone())
            .ok_or(LlmError::EmptyContent)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// OpenAI backend (Chat Completions API)
// ────────────────────────────────────────────────────────────────────────────

pub struct OpenAiBackend {
    client: Client,
    settings: ModelSettings,
}

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    usage: Option<OpenAiUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

#[async_trait]
impl ModelBackend for OpenAiBackend {
    async fn invoke(
        &self,
        prompt: &str,
        system_prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let request_body = OpenAiRequest {
            model: &self.settings.model_name,
            max_tokens,
            temperature,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .header("authorization", format!("Bearer {}", self.settings.api_key))
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: OpenAiResponse = response.json().await?;
        if let Some(usage) = &parsed.usage {
            debug!(
                "OpenAI call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Test support
// ────────────────────────────────────────────────────────────────────────────
