use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::domain::{ports::Translator, DomainError};
use crate::infrastructure::config::TranslationConfig;

/// Translation through the public Google Translate web endpoint
/// (`client=gtx`). Source language is auto-detected.
pub struct GoogleTranslate {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl GoogleTranslate {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(15),
        }
    }

    pub fn from_config(config: &TranslationConfig) -> Self {
        Self::new(&config.endpoint)
    }
}

/// The gtx endpoint answers with nested arrays; the first array holds one
/// `[translated, original, ...]` entry per sentence.
fn parse_translation(body: &Value) -> Option<String> {
    let sentences = body.get(0)?.as_array()?;
    let translated: String = sentences
        .iter()
        .filter_map(|s| s.get(0)?.as_str())
        .collect();
    if translated.is_empty() {
        None
    } else {
        Some(translated)
    }
}

#[async_trait]
impl Translator for GoogleTranslate {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, DomainError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let response = self
            .client
            .get(&self.endpoint)
            .timeout(self.timeout)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| DomainError::external(format!("Translation request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(DomainError::external(format!(
                "Translation service returned {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| DomainError::external(format!("Translation response malformed: {e}")))?;

        parse_translation(&body)
            .ok_or_else(|| DomainError::external("Translation response missing text"))
    }
}
