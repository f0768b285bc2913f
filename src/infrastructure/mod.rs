pub mod config;
pub mod corpus;
pub mod embedding;
pub mod geocode;
pub mod llm;
pub mod places;
pub mod translate;
pub mod vector_store;

pub use config::{Config, PromptsConfig};
pub use embedding::TextEmbedding;
pub use geocode::OpenCageGeocoder;
pub use llm::{GeminiLlm, GeminiVision};
pub use places::OverpassClient;
pub use translate::GoogleTranslate;
pub use vector_store::FileVectorIndex;
