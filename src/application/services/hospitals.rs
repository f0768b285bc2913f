use std::sync::Arc;
use tracing::instrument;

use crate::application::services::translate_or_original;
use crate::domain::{
    ports::{Geocoder, PlacesService, Translator},
    DomainError, Facility,
};

#[derive(Debug, Clone)]
pub struct HospitalSearch {
    pub location: String,
    pub facilities: Vec<Facility>,
    pub count: usize,
}

/// Nearby-facility search: geocode the location string, query the map-data
/// backend within the configured radius, translate each facility name.
pub struct HospitalService {
    geocoder: Arc<dyn Geocoder>,
    places: Arc<dyn PlacesService>,
    translator: Arc<dyn Translator>,
    radius_m: u32,
}

impl HospitalService {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        places: Arc<dyn PlacesService>,
        translator: Arc<dyn Translator>,
        radius_m: u32,
    ) -> Self {
        Self {
            geocoder,
            places,
            translator,
            radius_m,
        }
    }

    #[instrument(skip(self))]
    pub async fn find_nearby(
        &self,
        location: &str,
        lang: &str,
    ) -> Result<HospitalSearch, DomainError> {
        if location.trim().is_empty() {
            return Err(DomainError::validation("Location required"));
        }

        let center = self
            .geocoder
            .geocode(location)
            .await?
            .ok_or_else(|| DomainError::validation("Could not find location"))?;

        let records = self
            .places
            .find_health_facilities(center, self.radius_m)
            .await?;

        let mut facilities = Vec::with_capacity(records.len());
        for record in records {
            let name = translate_or_original(self.translator.as_ref(), &record.name, lang).await;
            facilities.push(Facility::from_record(record, name));
        }

        let count = facilities.len();
        Ok(HospitalSearch {
            location: location.to_string(),
            facilities,
            count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FacilityRecord, GeoPoint};
    use async_trait::async_trait;

    struct StaticGeocoder(Option<GeoPoint>);

    #[async_trait]
    impl Geocoder for StaticGeocoder {
        async fn geocode(&self, _place: &str) -> Result<Option<GeoPoint>, DomainError> {
            Ok(self.0)
        }
    }

    struct StaticPlaces(Vec<FacilityRecord>);

    #[async_trait]
    impl PlacesService for StaticPlaces {
        async fn find_health_facilities(
            &self,
            _center: GeoPoint,
            _radius_m: u32,
        ) -> Result<Vec<FacilityRecord>, DomainError> {
            Ok(self.0.clone())
        }
    }

    struct TaggingTranslator;

    #[async_trait]
    impl Translator for TaggingTranslator {
        async fn translate(&self, text: &str, lang: &str) -> Result<String, DomainError> {
            Ok(format!("[{lang}]{text}"))
        }
    }

    fn records() -> Vec<FacilityRecord> {
        vec![
            FacilityRecord {
                name: "City Hospital".to_string(),
                latitude: 30.05,
                longitude: 31.24,
            },
            FacilityRecord {
                name: "Green Clinic".to_string(),
                latitude: 30.06,
                longitude: 31.25,
            },
        ]
    }

    #[tokio::test]
    async fn test_find_nearby_translates_and_links() {
        let service = HospitalService::new(
            Arc::new(StaticGeocoder(Some(GeoPoint::new(30.0, 31.0)))),
            Arc::new(StaticPlaces(records())),
            Arc::new(TaggingTranslator),
            5000,
        );

        let result = service.find_nearby("Cairo", "ar").await.unwrap();

        assert_eq!(result.count, 2);
        assert_eq!(result.count, result.facilities.len());
        assert_eq!(result.facilities[0].name, "[ar]City Hospital");
        assert!(result.facilities[0].maps_link.contains("30.05"));
        assert!(result.facilities[0].maps_link.contains("31.24"));
    }

    #[tokio::test]
    async fn test_unknown_location_is_validation_error() {
        let service = HospitalService::new(
            Arc::new(StaticGeocoder(None)),
            Arc::new(StaticPlaces(Vec::new())),
            Arc::new(TaggingTranslator),
            5000,
        );

        let err = service.find_nearby("Atlantis", "ar").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_empty_location_rejected() {
        let service = HospitalService::new(
            Arc::new(StaticGeocoder(Some(GeoPoint::new(0.0, 0.0)))),
            Arc::new(StaticPlaces(Vec::new())),
            Arc::new(TaggingTranslator),
            5000,
        );

        let err = service.find_nearby("", "ar").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
