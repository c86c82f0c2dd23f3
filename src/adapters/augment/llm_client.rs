//! LLM Extraction Client - AugmentationClient over a messages-style API.
//!
//! Sends posting text with an extraction instruction to an LLM endpoint and
//! decodes the structured JSON it returns. Responses often wrap the payload
//! in prose or markdown fences, so the raw text is carved down to the first
//! balanced JSON object before decoding.
//!
//! # Configuration
//!
//! ```ignore
//! let config = LlmExtractionConfig::new(api_key)
//!     .with_model("claude-3-haiku-20240307")
//!     .with_timeout(Duration::from_secs(20));
//!
//! let client = LlmExtractionClient::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::domain::requirements::AugmentedRequirements;
use crate::ports::{AugmentationClient, AugmentationError};

/// API version header value.
const API_VERSION: &str = "2023-06-01";

/// Extraction instruction sent as the system prompt.
const EXTRACTION_PROMPT: &str = "\
You extract structured hiring requirements from job postings. Respond with \
a single JSON object and nothing else, using exactly these keys: \
required_skills (array of strings), preferred_skills (array of strings), \
years_experience (integer or null), education_level (string or null, one of \
associate/bachelors/masters/doctorate), key_responsibilities (array of \
strings). Skills must be short lowercase tokens.";

/// Configuration for the LLM extraction client.
#[derive(Debug, Clone)]
pub struct LlmExtractionConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

impl LlmExtractionConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "claude-3-haiku-20240307".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            timeout: Duration::from_secs(30),
            max_tokens: 1024,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// AugmentationClient implementation over a messages-style LLM API.
pub struct LlmExtractionClient {
    config: LlmExtractionConfig,
    client: Client,
}

impl LlmExtractionClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: LlmExtractionConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url)
    }

    fn build_request(&self, text: &str) -> MessagesRequest {
        MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            system: EXTRACTION_PROMPT.to_string(),
            messages: vec![ApiMessage {
                role: "user".to_string(),
                content: text.to_string(),
            }],
        }
    }

    async fn send(&self, text: &str) -> Result<MessagesResponse, AugmentationError> {
        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", API_VERSION)
            .header("Content-Type", "application/json")
            .json(&self.build_request(text))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AugmentationError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AugmentationError::network(format!("Connection failed: {}", e))
                } else {
                    AugmentationError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => AugmentationError::AuthenticationFailed,
                _ => AugmentationError::unavailable(format!(
                    "status {}: {}",
                    status,
                    truncate(&body, 200)
                )),
            });
        }

        response
            .json::<MessagesResponse>()
            .await
            .map_err(|e| AugmentationError::parse(e.to_string()))
    }
}

#[async_trait]
impl AugmentationClient for LlmExtractionClient {
    async fn extract_requirements(
        &self,
        text: &str,
    ) -> Result<AugmentedRequirements, AugmentationError> {
        let response = self.send(text).await?;
        let raw = response
            .content
            .first()
            .map(|block| block.text.as_str())
            .unwrap_or_default();

        debug!(response_len = raw.len(), "received augmentation response");

        let json = carve_json(raw)
            .ok_or_else(|| AugmentationError::parse("no JSON object in response"))?;
        serde_json::from_str(&json).map_err(|e| AugmentationError::parse(e.to_string()))
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<ApiMessage>,
}

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Carves the first balanced JSON object out of free text.
///
/// Handles markdown code fences and prose around the payload. Returns None
/// when no balanced object is present.
fn carve_json(raw: &str) -> Option<String> {
    let trimmed = raw.trim();

    // Prefer fenced blocks when present.
    for fence in ["```json", "```"] {
        if let Some(start) = trimmed.find(fence) {
            let after = &trimmed[start + fence.len()..];
            if let Some(end) = after.find("```") {
                if let Some(json) = balanced_object(&after[..end]) {
                    return Some(json);
                }
            }
        }
    }

    balanced_object(trimmed)
}

/// Extracts the first `{ ... }` span with balanced braces, ignoring braces
/// inside string literals.
fn balanced_object(s: &str) -> Option<String> {
    let start = s.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, c) in s[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            _ if in_string => {}
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(s[start..start + i + c.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }
    None
}
