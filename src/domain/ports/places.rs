use crate::domain::{errors::DomainError, FacilityRecord, GeoPoint};
use async_trait::async_trait;

#[async_trait]
pub trait PlacesService: Send + Sync {
    /// Lists hospitals, clinics and doctors within `radius_m` meters of
    /// `center`. Transport failures surface as `DomainError::Unavailable`.
    async fn find_health_facilities(
        &self,
        center: GeoPoint,
        radius_m: u32,
    ) -> Result<Vec<FacilityRecord>, DomainError>;
}
