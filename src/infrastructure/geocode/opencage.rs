use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::{ports::Geocoder, DomainError, GeoPoint};
use crate::infrastructure::config::GeocoderConfig;

/// Forward geocoding through the OpenCage API.
pub struct OpenCageGeocoder {
    client: Client,
    endpoint: String,
    api_key: String,
    timeout: Duration,
}

impl OpenCageGeocoder {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(15),
        }
    }

    pub fn from_config(config: &GeocoderConfig) -> Self {
        Self::new(&config.endpoint, &config.api_key)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

#[async_trait]
impl Geocoder for OpenCageGeocoder {
    async fn geocode(&self, place: &str) -> Result<Option<GeoPoint>, DomainError> {
        let response = self
            .client
            .get(&self.endpoint)
            .timeout(self.timeout)
            .query(&[("q", place), ("key", &self.api_key), ("limit", "1")])
            .send()
            .await
            .map_err(|e| DomainError::external(format!("Geocoding request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(DomainError::external(format!(
                "Geocoder returned {}",
                response.status()
            )));
        }

        let parsed: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| DomainError::external(format!("Geocoder response malformed: {e}")))?;

        Ok(parsed
            .results
            .into_iter()
            .next()
            .map(|r| GeoPoint::new(r.geometry.lat, r.geometry.lng)))
    }
}
