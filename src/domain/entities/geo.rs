use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A health facility as returned by the places backend, before translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A health facility as presented to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    pub maps_link: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Facility {
    pub fn from_record(record: FacilityRecord, name: String) -> Self {
        let maps_link = maps_search_link(record.latitude, record.longitude);
        Self {
            name,
            maps_link,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

pub fn maps_search_link(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={latitude},{longitude}")
}
