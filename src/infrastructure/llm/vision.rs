use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::domain::{ports::VisionService, DomainError, ImageUpload};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Multimodal image analysis through the Gemini REST API.
pub struct GeminiVision {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiVision {
    pub fn new(model: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: GEMINI_API_BASE.to_string(),
            model: model.into(),
            api_key: api_key.into(),
            timeout,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

fn extract_text(response: GenerateResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let text: Vec<String> = candidate
        .content
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text.join(""))
    }
}

#[async_trait]
impl VisionService for GeminiVision {
    async fn describe(&self, image: &ImageUpload, prompt: &str) -> Result<String, DomainError> {
        let body = json!({
            "contents": [{
                "parts": [
                    { "text": prompt },
                    {
                        "inline_data": {
                            "mime_type": image.mime_type(),
                            "data": BASE64.encode(&image.bytes),
                        }
                    }
                ]
            }]
        });

        let response = self
            .client
            .post(self.api_url())
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::external(format!("Gemini request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(DomainError::external(format!(
                "Gemini returned {status}: {detail}"
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| DomainError::external(format!("Gemini response malformed: {e}")))?;

        extract_text(parsed).ok_or_else(|| DomainError::external("Gemini returned no text"))
    }
}
