/// LLM Client: the single point of entry for all model provider calls.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// Flows depend on the `ModelProvider` trait; `AnthropicProvider` is the
/// production implementation and `StubModel` stands in for it in tests.
///
/// One attempt per call. Retries are the caller's decision.
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;
#[cfg(test)]
pub mod stub;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all flow calls.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("model provider is not configured: {0}")]
    NotConfigured(String),
}

/// A generative-model backend: takes a system prompt and a rendered user
/// prompt, returns the raw text of the model's reply.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Process-scoped provider
// ────────────────────────────────────────────────────────────────────────────

/// Init-once holder for the process-wide provider.
pub struct ProviderCell {
    inner: OnceLock<Arc<dyn ModelProvider>>,
}

impl ProviderCell {
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Installs `provider` if the cell is empty. Returns the provider that
    /// ends up installed, which is the earlier one if the cell was already set.
    pub fn install(&self, provider: Arc<dyn ModelProvider>) -> Arc<dyn ModelProvider> {
        self.inner.get_or_init(|| provider).clone()
    }

    pub fn get(&self) -> Result<Arc<dyn ModelProvider>, LlmError> {
        self.inner.get().cloned().ok_or_else(|| {
            LlmError::NotConfigured("install a provider before the first flow call".to_string())
        })
    }
}

static PROVIDER: ProviderCell = ProviderCell::new();

/// Installs the process-wide provider. Later calls keep the first provider.
pub fn install_provider(provider: Arc<dyn ModelProvider>) -> Arc<dyn ModelProvider> {
    PROVIDER.install(provider)
}

/// Returns the process-wide provider, or `LlmError::NotConfigured`.
pub fn provider() -> Result<Arc<dyn ModelProvider>, LlmError> {
    PROVIDER.get()
}

// ────────────────────────────────────────────────────────────────────────────
// Anthropic Messages API
// ────────────────────────────────────────────────────────────────────────────

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

/// Production provider over the Anthropic Messages API.
#[derive(Clone)]
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
}

impl AnthropicProvider {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        if api_key.trim().is_empty() {
            return Err(LlmError::NotConfigured(
                "ANTHROPIC_API_KEY is empty".to_string(),
            ));
        }
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, api_key })
    }

    /// Makes a raw call to the Messages API, returning the full response object.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
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
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }
}

#[async_trait]
impl ModelProvider for AnthropicProvider {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt, system).await?;
        match response.text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => Err(LlmError::EmptyContent),
        }
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
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

#[cfg(test)]
mod tests {
    use super::stub::StubModel;
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_empty_cell_reports_not_configured() {
        let cell = ProviderCell::new();
        assert!(matches!(cell.get(), Err(LlmError::NotConfigured(_))));
    }

    #[tokio::test]
    async fn test_cell_keeps_first_installed_provider() {
        let cell = ProviderCell::new();
        cell.install(Arc::new(StubModel::replying("first")));
        cell.install(Arc::new(StubModel::replying("second")));

        let provider = cell.get().unwrap();
        assert_eq!(provider.complete("sys", "prompt").await.unwrap(), "first");
    }

    #[test]
    fn test_blank_api_key_is_rejected() {
        assert!(matches!(
            AnthropicProvider::new("  ".to_string()),
            Err(LlmError::NotConfigured(_))
        ));
    }

    #[test]
    fn test_response_text_picks_first_text_block() {
        let json = r#"{
            "content": [
                {"type": "tool_use", "text": null},
                {"type": "text", "text": "{\"message\": \"hi\"}"}
            ],
            "usage": {"input_tokens": 10, "output_tokens": 4}
        }"#;
        let response: LlmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("{\"message\": \"hi\"}"));
    }
}
