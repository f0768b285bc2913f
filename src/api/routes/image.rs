use axum::{
    extract::{Multipart, State},
    Json,
};
use serde_json::{json, Value};
use std::io::Write;
use std::path::PathBuf;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::domain::{DomainError, ImageUpload};

pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let mut lang = state.default_lang.clone();
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::new(axum::http::StatusCode::BAD_REQUEST, e.to_string(), None))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let bytes = field.bytes().await.map_err(|e| {
                    ApiError::new(axum::http::StatusCode::BAD_REQUEST, e.to_string(), None)
                })?;
                file_bytes = Some(bytes.to_vec());
            }
            Some("lang") => {
                if let Ok(value) = field.text().await {
                    if !value.trim().is_empty() {
                        lang = value;
                    }
                }
            }
            _ => {}
        }
    }

    let Some(bytes) = file_bytes else {
        return Err(ApiError::from_domain(
            state.translator.as_ref(),
            DomainError::validation("No file uploaded"),
            "An error occurred during image analysis",
            &lang,
        )
        .await);
    };

    if bytes.is_empty() {
        return Err(ApiError::from_domain(
            state.translator.as_ref(),
            DomainError::validation("No file selected"),
            "An error occurred during image analysis",
            &lang,
        )
        .await);
    }

    // Spool through a scoped temporary file; the guard inside removes it
    // before this handler returns, whatever the outcome.
    let result = match spool_through_temp(&bytes) {
        Ok((spooled, _path)) => {
            let image = ImageUpload::new(spooled);
            state.diagnosis.analyze(&image, &lang).await
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(diagnosis) => Ok(Json(json!({
            "diagnosis": diagnosis.diagnosis,
            "translation": diagnosis.translation,
            "type": "diagnosis",
        }))),
        Err(err) => Err(ApiError::from_domain(
            state.translator.as_ref(),
            err,
            "An error occurred during image analysis",
            &lang,
        )
        .await),
    }
}

/// Writes the upload to a temporary file and reads it back. The temp file
/// only lives inside this function; its guard removes it on drop, so the
/// file is gone by the time the caller proceeds, on success and on error.
fn spool_through_temp(bytes: &[u8]) -> Result<(Vec<u8>, PathBuf), DomainError> {
    let mut temp = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .map_err(|e| DomainError::internal(format!("Cannot create temp file: {e}")))?;

    temp.write_all(bytes)
        .map_err(|e| DomainError::internal(format!("Cannot write temp file: {e}")))?;
    temp.flush()
        .map_err(|e| DomainError::internal(format!("Cannot flush temp file: {e}")))?;

    let path = temp.path().to_path_buf();
    let spooled = std::fs::read(&path)
        .map_err(|e| DomainError::internal(format!("Cannot read temp file: {e}")))?;

    Ok((spooled, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spool_roundtrips_bytes_and_removes_file() {
        let bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 1, 2, 3];
        let (spooled, path) = spool_through_temp(&bytes).unwrap();

        assert_eq!(spooled, bytes);
        assert!(!path.exists());
    }

    #[test]
    fn test_spool_empty_payload() {
        let (spooled, path) = spool_through_temp(&[]).unwrap();
        assert!(spooled.is_empty());
        assert!(!path.exists());
    }
}
