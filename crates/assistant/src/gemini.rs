//! Gemini `generateContent` client

use crate::config::AssistantConfig;
use crate::error::AssistantError;
use crate::prompt::{system_prompt, PRIMING_MESSAGE};
use crate::request::ChatRequest;
use crate::Responder;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn turn(role: &str, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

/// Priming exchange followed by the user's message.
pub fn build_request(request: &ChatRequest) -> Result<GenerateRequest, AssistantError> {
    Ok(GenerateRequest {
        contents: vec![
            Content::turn("user", PRIMING_MESSAGE),
            Content::turn("model", system_prompt(request)?),
            Content::turn("user", request.message.clone()),
        ],
    })
}

/// Text of the first candidate. An empty reply counts as a failure.
pub fn extract_text(response: GenerateResponse) -> Result<String, AssistantError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AssistantError::unavailable("empty reply"));
    }
    Ok(text)
}

/// Talks to the hosted model over HTTPS.
#[derive(Debug, Clone)]
pub struct GeminiResponder {
    client: reqwest::Client,
    config: AssistantConfig,
    api_key: Option<String>,
}

impl GeminiResponder {
    /// Builds the HTTP client. The API key is read from the environment now;
    /// a missing key only surfaces when a reply is requested.
    pub fn new(config: AssistantConfig) -> Result<Self, AssistantError> {
        let api_key = config.api_key_from_env();
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(
        config: AssistantConfig,
        api_key: Option<String>,
    ) -> Result<Self, AssistantError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl Responder for GeminiResponder {
    async fn respond(&self, request: &ChatRequest) -> Result<String, AssistantError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(AssistantError::unavailable(format!(
                "{} is not set",
                self.config.api_key_env
            )));
        };

        let body = build_request(request)?;
        debug!(model = %self.config.model, "sending generateContent request");

        let response = self
            .client
            .post(self.config.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: GenerateResponse = response.json().await?;
        extract_text(parsed)
    }
}

#[cfg(test)]
#[path = "gemini_tests.rs"]
mod gemini_tests;
