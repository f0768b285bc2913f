use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::{ports::PlacesService, DomainError, FacilityRecord, GeoPoint};
use crate::infrastructure::config::OverpassConfig;

const UNNAMED_FACILITY: &str = "Unnamed Facility";

/// Health-facility lookup against an Overpass (OpenStreetMap) endpoint.
pub struct OverpassClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl OverpassClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn from_config(config: &OverpassConfig) -> Self {
        Self::new(&config.endpoint)
    }
}

fn build_query(center: GeoPoint, radius_m: u32) -> String {
    let GeoPoint {
        latitude,
        longitude,
    } = center;
    format!(
        "[out:json];\n(\n  \
         node[\"amenity\"=\"hospital\"](around:{radius_m},{latitude},{longitude});\n  \
         node[\"amenity\"=\"clinic\"](around:{radius_m},{latitude},{longitude});\n  \
         node[\"healthcare\"=\"doctor\"](around:{radius_m},{latitude},{longitude});\n);\n\
         out center;"
    )
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
struct Element {
    lat: Option<f64>,
    lon: Option<f64>,
    #[serde(default)]
    tags: Tags,
}

#[derive(Debug, Default, Deserialize)]
struct Tags {
    name: Option<String>,
}

fn to_records(response: OverpassResponse) -> Vec<FacilityRecord> {
    response
        .elements
        .into_iter()
        .filter_map(|element| {
            let latitude = element.lat?;
            let longitude = element.lon?;
            Some(FacilityRecord {
                name: element
                    .tags
                    .name
                    .unwrap_or_else(|| UNNAMED_FACILITY.to_string()),
                latitude,
                longitude,
            })
        })
        .collect()
}

#[async_trait]
impl PlacesService for OverpassClient {
    async fn find_health_facilities(
        &self,
        center: GeoPoint,
        radius_m: u32,
    ) -> Result<Vec<FacilityRecord>, DomainError> {
        let query = build_query(center, radius_m);

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .body(query)
            .send()
            .await
            .map_err(|e| DomainError::unavailable(format!("Overpass request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(DomainError::unavailable(format!(
                "Overpass returned {}",
                response.status()
            )));
        }

        let parsed: OverpassResponse = response
            .json()
            .await
            .map_err(|e| DomainError::external(format!("Overpass response malformed: {e}")))?;

        Ok(to_records(parsed))
    }
}
