use crate::domain::errors::DomainError;
use crate::domain::ImageUpload;
use async_trait::async_trait;

#[async_trait]
pub trait LlmService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;
    async fn complete_with_system(&self, system: &str, prompt: &str)
        -> Result<String, DomainError>;
}

/// Multimodal completion over a single image.
#[async_trait]
pub trait VisionService: Send + Sync {
    async fn describe(&self, image: &ImageUpload, prompt: &str) -> Result<String, DomainError>;
}
