use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::json;

use crate::application::services::translate_or_original;
use crate::domain::{ports::Translator, DomainError};

/// The single response-formatting boundary: every handler failure becomes a
/// status code plus `{error, translation?}` JSON here.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub translation: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, translation: Option<String>) -> Self {
        Self {
            status,
            message: message.into(),
            translation,
        }
    }

    /// Maps a domain error to its HTTP shape. Validation failures carry a
    /// translation of their own message; everything else carries the raw
    /// error plus a translated generic fallback.
    pub async fn from_domain(
        translator: &dyn Translator,
        err: DomainError,
        generic: &str,
        lang: &str,
    ) -> Self {
        match err {
            DomainError::Validation(msg) => {
                let translation = translate_or_original(translator, &msg, lang).await;
                Self::new(StatusCode::BAD_REQUEST, msg, Some(translation))
            }
            DomainError::NotFound(msg) => {
                let translation = translate_or_original(translator, &msg, lang).await;
                Self::new(StatusCode::NOT_FOUND, msg, Some(translation))
            }
            DomainError::Unavailable(_) => {
                tracing::error!(error = %err, "Map service unavailable");
                let translation = translate_or_original(translator, generic, lang).await;
                Self::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    err.to_string(),
                    Some(translation),
                )
            }
            other => {
                tracing::error!(error = %other, "Request failed");
                let translation = translate_or_original(translator, generic, lang).await;
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    other.to_string(),
                    Some(translation),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.translation {
            Some(translation) => json!({
                "error": self.message,
                "translation": translation,
            }),
            None => json!({ "error": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}
