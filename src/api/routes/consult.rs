use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::error::ApiError;
use crate::api::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MedicationRequest {
    #[serde(default)]
    pub symptoms: String,
    pub lang: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SpecialistRequest {
    #[serde(default)]
    pub illness: String,
    pub lang: Option<String>,
}

pub async fn medication_advice(
    State(state): State<AppState>,
    Json(request): Json<MedicationRequest>,
) -> Result<Json<Value>, ApiError> {
    let lang = request.lang.unwrap_or_else(|| state.default_lang.clone());

    match state
        .consult
        .medication_advice(&request.symptoms, &lang)
        .await
    {
        Ok(result) => Ok(Json(json!({
            "advice": result.text,
            "translation": result.translation,
            "type": "medication",
        }))),
        Err(err) => Err(ApiError::from_domain(
            state.translator.as_ref(),
            err,
            "An error occurred during analysis",
            &lang,
        )
        .await),
    }
}

pub async fn find_specialist(
    State(state): State<AppState>,
    Json(request): Json<SpecialistRequest>,
) -> Result<Json<Value>, ApiError> {
    let lang = request.lang.unwrap_or_else(|| state.default_lang.clone());

    match state.consult.find_specialist(&request.illness, &lang).await {
        Ok(result) => Ok(Json(json!({
            "specialist": result.text,
            "translation": result.translation,
            "type": "specialist",
        }))),
        Err(err) => Err(ApiError::from_domain(
            state.translator.as_ref(),
            err,
            "An error occurred while finding specialist",
            &lang,
        )
        .await),
    }
}
