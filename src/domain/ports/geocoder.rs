use crate::domain::{errors::DomainError, GeoPoint};
use async_trait::async_trait;

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves a free-form place name to coordinates. `None` means the
    /// backend returned no match for the query.
    async fn geocode(&self, place: &str) -> Result<Option<GeoPoint>, DomainError>;
}
