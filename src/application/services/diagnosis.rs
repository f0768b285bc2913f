use std::sync::Arc;
use tracing::instrument;

use crate::application::services::translate_or_original;
use crate::domain::{
    ports::{Translator, VisionService},
    DomainError, ImageUpload,
};
use crate::infrastructure::PromptsConfig;

#[derive(Debug, Clone)]
pub struct Diagnosis {
    pub diagnosis: String,
    pub translation: String,
}

/// Image analysis: one multimodal call with the fixed diagnostic prompt,
/// then a best-effort translation of the result.
pub struct DiagnosisService {
    vision: Arc<dyn VisionService>,
    translator: Arc<dyn Translator>,
    prompts: Arc<PromptsConfig>,
}

impl DiagnosisService {
    pub fn new(
        vision: Arc<dyn VisionService>,
        translator: Arc<dyn Translator>,
        prompts: Arc<PromptsConfig>,
    ) -> Self {
        Self {
            vision,
            translator,
            prompts,
        }
    }

    #[instrument(skip(self, image), fields(bytes = image.bytes.len()))]
    pub async fn analyze(&self, image: &ImageUpload, lang: &str) -> Result<Diagnosis, DomainError> {
        if image.is_empty() {
            return Err(DomainError::validation("No file selected"));
        }

        let diagnosis = self
            .vision
            .describe(image, &self.prompts.image_diagnosis)
            .await?;
        let translation = translate_or_original(self.translator.as_ref(), &diagnosis, lang).await;

        Ok(Diagnosis {
            diagnosis,
            translation,
        })
    }
}
