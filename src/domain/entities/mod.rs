mod document;
mod embedding;
mod geo;
mod image;

pub use document::{chunk_text, DocumentChunk, SearchResult};
pub use embedding::Embedding;
pub use geo::{maps_search_link, Facility, FacilityRecord, GeoPoint};
pub use image::ImageUpload;
