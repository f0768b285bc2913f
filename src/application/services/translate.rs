use crate::domain::ports::Translator;
use tracing::warn;

/// Best-effort translation: a failed or empty translation falls back to the
/// original text instead of failing the request.
pub async fn translate_or_original(translator: &dyn Translator, text: &str, lang: &str) -> String {
    match translator.translate(text, lang).await {
        Ok(translated) if !translated.trim().is_empty() => translated,
        Ok(_) => text.to_string(),
        Err(e) => {
            warn!(error = %e, "Translation failed, returning original text");
            text.to_string()
        }
    }
}
