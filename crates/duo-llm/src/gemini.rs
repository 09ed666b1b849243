use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::api_error::extract_api_error;
use crate::{CallFailure, LanguageModel, ModelMetadata};

#[derive(Clone)]
pub struct GeminiModel {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiModel {
    pub fn new(api_key: String, model: String, base_url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            base_url,
            timeout,
        }
    }

    fn endpoint(&self) -> Result<reqwest::Url, CallFailure> {
        let model_path = if self.model.starts_with("models/") {
            self.model.clone()
        } else {
            format!("models/{}", self.model)
        };
        let endpoint = format!(
            "{}/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model_path
        );

        let mut url = reqwest::Url::parse(&endpoint)
            .map_err(|e| CallFailure::ApiError(format!("Invalid endpoint {endpoint}: {e}")))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    async fn send(&self, prompt: &str) -> Result<String, CallFailure> {
        let body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [
                        {"text": prompt}
                    ]
                }
            ]
        });

        let response = self
            .client
            .post(self.endpoint()?)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let payload = response.text().await?;

        if status.as_u16() == 429 {
            return Err(CallFailure::RateLimitExceeded);
        }

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(CallFailure::AuthenticationError);
        }

        if !status.is_success() {
            return Err(CallFailure::ApiError(format!(
                "HTTP {}: {}",
                status,
                extract_api_error(&payload)
            )));
        }

        response_text(&payload)
    }
}

#[async_trait]
impl LanguageModel for GeminiModel {
    async fn generate(&self, prompt: &str) -> Result<String, CallFailure> {
        if self.api_key.is_empty() {
            return Err(CallFailure::AuthenticationError);
        }

        tracing::debug!("Gemini request: model={}, {} prompt bytes", self.model, prompt.len());

        let text = tokio::time::timeout(self.timeout, self.send(prompt))
            .await
            .map_err(|_| CallFailure::Timeout(self.timeout))??;

        tracing::debug!("Gemini reply: {} bytes", text.len());
        Ok(text)
    }

    fn metadata(&self) -> ModelMetadata {
        ModelMetadata {
            provider: "gemini".to_string(),
            model: self.model.clone(),
        }
    }
}

/// Concatenated text parts of the first candidate
pub fn response_text(payload: &str) -> Result<String, CallFailure> {
    let parsed: GeminiResponse = serde_json::from_str(payload)
        .map_err(|e| CallFailure::ApiError(format!("Failed to parse response: {}", e)))?;

    if let Some(reason) = parsed
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(CallFailure::Blocked(reason));
    }

    let candidate = parsed
        .candidates
        .into_iter()
        .next()
        .ok_or(CallFailure::EmptyResponse)?;

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if !text.trim().is_empty() {
        return Ok(text);
    }

    let reason = candidate.finish_reason.unwrap_or_default();
    match reason.as_str() {
        "SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT" => {
            Err(CallFailure::Blocked(reason.clone()))
        }
        _ => Err(CallFailure::EmptyResponse),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
