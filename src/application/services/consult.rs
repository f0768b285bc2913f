use std::sync::Arc;
use tracing::instrument;

use crate::application::services::translate_or_original;
use crate::domain::{
    ports::{LlmService, Translator},
    DomainError,
};
use crate::infrastructure::PromptsConfig;

/// An LLM answer together with its best-effort translation.
#[derive(Debug, Clone)]
pub struct Consultation {
    pub text: String,
    pub translation: String,
}

/// Single-shot LLM consultations: medication advice from symptoms,
/// specialist suggestion from an illness description.
pub struct ConsultService {
    llm: Arc<dyn LlmService>,
    translator: Arc<dyn Translator>,
    prompts: Arc<PromptsConfig>,
}

impl ConsultService {
    pub fn new(
        llm: Arc<dyn LlmService>,
        translator: Arc<dyn Translator>,
        prompts: Arc<PromptsConfig>,
    ) -> Self {
        Self {
            llm,
            translator,
            prompts,
        }
    }

    #[instrument(skip(self))]
    pub async fn medication_advice(
        &self,
        symptoms: &str,
        lang: &str,
    ) -> Result<Consultation, DomainError> {
        if symptoms.trim().is_empty() {
            return Err(DomainError::validation("Symptoms description required"));
        }
        self.consult(&self.prompts.medication_prompt(symptoms), lang)
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_specialist(
        &self,
        illness: &str,
        lang: &str,
    ) -> Result<Consultation, DomainError> {
        if illness.trim().is_empty() {
            return Err(DomainError::validation("Illness description required"));
        }
        self.consult(&self.prompts.specialist_prompt(illness), lang)
            .await
    }

    async fn consult(&self, prompt: &str, lang: &str) -> Result<Consultation, DomainError> {
        let text = self.llm.complete(prompt).await?;
        let translation = translate_or_original(self.translator.as_ref(), &text, lang).await;
        Ok(Consultation { text, translation })
    }
}
