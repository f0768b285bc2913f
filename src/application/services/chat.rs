use std::sync::Arc;
use tracing::instrument;

use crate::application::services::RagService;
use crate::domain::{
    ports::{LlmService, Translator},
    DomainError,
};
use crate::infrastructure::PromptsConfig;

/// Retrieval-augmented chat: translate the user's question into the model's
/// working language, answer from retrieved document chunks, translate back.
pub struct ChatService {
    translator: Arc<dyn Translator>,
    rag: Arc<RagService>,
    llm: Arc<dyn LlmService>,
    prompts: Arc<PromptsConfig>,
    /// Language the LLM and the indexed corpus operate in.
    working_lang: String,
    /// Language answers are returned in.
    user_lang: String,
}

impl ChatService {
    pub fn new(
        translator: Arc<dyn Translator>,
        rag: Arc<RagService>,
        llm: Arc<dyn LlmService>,
        prompts: Arc<PromptsConfig>,
        user_lang: impl Into<String>,
    ) -> Self {
        Self {
            translator,
            rag,
            llm,
            prompts,
            working_lang: "en".to_string(),
            user_lang: user_lang.into(),
        }
    }

    #[instrument(skip(self))]
    pub async fn answer(&self, query: &str) -> Result<String, DomainError> {
        if query.trim().is_empty() {
            return Err(DomainError::validation("Query is required"));
        }

        let question = self.translator.translate(query, &self.working_lang).await?;

        let results = self.rag.retrieve(&question).await?;
        let context = results
            .iter()
            .map(|r| r.chunk.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        let prompt = self.prompts.chat_prompt(&context, &question);
        let answer = self
            .llm
            .complete_with_system(&self.prompts.chat_system, &prompt)
            .await?;

        self.translator.translate(&answer, &self.user_lang).await
    }
}
