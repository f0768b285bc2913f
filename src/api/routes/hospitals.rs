use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::domain::DomainError;

#[derive(Debug, Deserialize)]
pub struct HospitalsRequest {
    #[serde(default)]
    pub location: String,
    pub lang: Option<String>,
}

pub async fn find_hospitals(
    State(state): State<AppState>,
    Json(request): Json<HospitalsRequest>,
) -> Result<Json<Value>, ApiError> {
    let lang = request.lang.unwrap_or_else(|| state.default_lang.clone());

    match state.hospitals.find_nearby(&request.location, &lang).await {
        Ok(search) => Ok(Json(json!({
            "location": search.location,
            "facilities": search.facilities,
            "count": search.count,
        }))),
        Err(err) => {
            let generic = if matches!(err, DomainError::Unavailable(_)) {
                "Map service unavailable"
            } else {
                "An error occurred while searching for hospitals"
            };
            Err(ApiError::from_domain(state.translator.as_ref(), err, generic, &lang).await)
        }
    }
}
