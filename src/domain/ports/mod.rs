mod embedding;
mod geocoder;
mod llm;
mod places;
mod translator;
mod vector_store;

pub use embedding::EmbeddingService;
pub use geocoder::Geocoder;
pub use llm::{LlmService, VisionService};
pub use places::PlacesService;
pub use translator::Translator;
pub use vector_store::VectorStore;
