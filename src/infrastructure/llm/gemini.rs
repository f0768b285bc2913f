use async_trait::async_trait;
use rig::client::{CompletionClient, ProviderClient};
use rig::completion::Prompt;
use rig::providers::gemini;
use std::time::Duration;

use crate::domain::{ports::LlmService, DomainError};
use crate::infrastructure::config::LlmConfig;

/// Text completion through the Gemini provider. Credentials come from
/// `GEMINI_API_KEY` in the environment.
pub struct GeminiLlm {
    model: String,
    timeout: Duration,
}

impl GeminiLlm {
    pub fn new(model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            model: model.into(),
            timeout,
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(&config.model, Duration::from_secs(config.timeout_seconds))
    }

    async fn prompt_agent(&self, system: Option<&str>, prompt: &str) -> Result<String, DomainError> {
        let client = gemini::Client::from_env();
        let mut builder = client.agent(&self.model);
        if let Some(system) = system {
            builder = builder.preamble(system);
        }
        let agent = builder.build();

        tokio::time::timeout(self.timeout, agent.prompt(prompt))
            .await
            .map_err(|_| DomainError::timeout("LLM call timed out"))?
            .map_err(|e| DomainError::external(e.to_string()))
    }
}

#[async_trait]
impl LlmService for GeminiLlm {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        self.prompt_agent(None, prompt).await
    }

    async fn complete_with_system(
        &self,
        system: &str,
        prompt: &str,
    ) -> Result<String, DomainError> {
        self.prompt_agent(Some(system), prompt).await
    }
}
