use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub embedding: EmbeddingConfig,
    pub rag: RagConfig,
    pub translation: TranslationConfig,
    pub geocoder: GeocoderConfig,
    pub overpass: OverpassConfig,
    pub index: IndexConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingConfig {
    pub model: String,
    pub dimension: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RagConfig {
    pub top_k: usize,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    pub endpoint: String,
    pub default_target: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocoderConfig {
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverpassConfig {
    pub endpoint: String,
    pub radius_meters: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    pub path: PathBuf,
    pub corpus_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            llm: LlmConfig {
                model: "gemini-1.5-flash".to_string(),
                timeout_seconds: 60,
            },
            embedding: EmbeddingConfig {
                model: "text-embedding-3-small".to_string(),
                dimension: 1536,
            },
            rag: RagConfig {
                top_k: 4,
                chunk_size: 1000,
                chunk_overlap: 200,
            },
            translation: TranslationConfig {
                endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
                default_target: "ar".to_string(),
            },
            geocoder: GeocoderConfig {
                endpoint: "https://api.opencagedata.com/geocode/v1/json".to_string(),
                api_key: String::new(),
            },
            overpass: OverpassConfig {
                endpoint: "https://overpass-api.de/api/interpreter".to_string(),
                radius_meters: 5000,
            },
            index: IndexConfig {
                path: PathBuf::from("medical_index.json"),
                corpus_dir: PathBuf::from("data"),
            },
        }
    }
}

impl Config {
    /// Builds the configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("SERVER_HOST") {
            config.server.host = host;
        }
        if let Some(port) = env_parse("SERVER_PORT") {
            config.server.port = port;
        }
        if let Ok(model) = std::env::var("LLM_MODEL") {
            config.llm.model = model;
        }
        if let Some(timeout) = env_parse("LLM_TIMEOUT_SECONDS") {
            config.llm.timeout_seconds = timeout;
        }
        if let Ok(model) = std::env::var("EMBEDDING_MODEL") {
            config.embedding.model = model;
        }
        if let Some(dimension) = env_parse("EMBEDDING_DIMENSION") {
            config.embedding.dimension = dimension;
        }
        if let Some(top_k) = env_parse("RAG_TOP_K") {
            config.rag.top_k = top_k;
        }
        if let Ok(endpoint) = std::env::var("TRANSLATE_ENDPOINT") {
            config.translation.endpoint = endpoint;
        }
        if let Ok(target) = std::env::var("DEFAULT_TARGET_LANG") {
            config.translation.default_target = target;
        }
        if let Ok(endpoint) = std::env::var("GEOCODER_ENDPOINT") {
            config.geocoder.endpoint = endpoint;
        }
        if let Ok(key) = std::env::var("OPENCAGE_API_KEY") {
            config.geocoder.api_key = key;
        }
        if let Ok(endpoint) = std::env::var("OVERPASS_ENDPOINT") {
            config.overpass.endpoint = endpoint;
        }
        if let Some(radius) = env_parse("SEARCH_RADIUS_METERS") {
            config.overpass.radius_meters = radius;
        }
        if let Ok(path) = std::env::var("INDEX_PATH") {
            config.index.path = PathBuf::from(path);
        }
        if let Ok(dir) = std::env::var("CORPUS_DIR") {
            config.index.corpus_dir = PathBuf::from(dir);
        }

        config
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Prompt templates for the LLM-backed endpoints. `{symptoms}`, `{illness}`,
/// `{context}` and `{question}` are substituted at call time.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptsConfig {
    pub chat_system: String,
    pub chat_user: String,
    pub image_diagnosis: String,
    pub medication_advice: String,
    pub find_specialist: String,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            chat_system: "You are a careful medical assistant. Answer the question using \
                          only the provided context from the medical reference documents. \
                          If the context does not cover the question, say so and recommend \
                          consulting a doctor."
                .to_string(),
            chat_user: "Context:\n{context}\n\nQuestion: {question}".to_string(),
            image_diagnosis: "Analyze this medical image and describe any medical conditions \
                              it might show. Provide a detailed medical analysis including \
                              possible diagnoses, recommended next steps, and when to consult \
                              a doctor. Respond with very simple text, not markdown."
                .to_string(),
            medication_advice: "Given the following symptoms: {symptoms}, provide possible \
                                medications or treatments that might help. Specify \
                                over-the-counter and prescription options if appropriate. \
                                Also, note when to consult a doctor."
                .to_string(),
            find_specialist: "Based on the illness or condition: {illness}, suggest the type \
                              of medical specialist that the person should consult."
                .to_string(),
        }
    }
}

impl PromptsConfig {
    /// Loads prompt overrides from a YAML file, or the defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    pub fn chat_prompt(&self, context: &str, question: &str) -> String {
        self.chat_user
            .replace("{context}", context)
            .replace("{question}", question)
    }

    pub fn medication_prompt(&self, symptoms: &str) -> String {
        self.medication_advice.replace("{symptoms}", symptoms)
    }

    pub fn specialist_prompt(&self, illness: &str) -> String {
        self.find_specialist.replace("{illness}", illness)
    }
}
