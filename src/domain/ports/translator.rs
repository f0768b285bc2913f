use crate::domain::errors::DomainError;
use async_trait::async_trait;

/// Text translation with automatic source-language detection.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, DomainError>;
}
