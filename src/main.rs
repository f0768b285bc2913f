use anyhow::Context;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use med_assist::api::{create_router, AppState};
use med_assist::application::{
    ChatService, ConsultService, DiagnosisService, HospitalService, RagService,
};
use med_assist::domain::ports::{
    Geocoder, LlmService, PlacesService, Translator, VectorStore, VisionService,
};
use med_assist::infrastructure::{
    Config, FileVectorIndex, GeminiLlm, GeminiVision, GoogleTranslate, OpenCageGeocoder,
    OverpassClient, PromptsConfig, TextEmbedding,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,med_assist=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env();
    let prompts = Arc::new(PromptsConfig::load(Path::new("prompts.yaml"))?);

    let index = FileVectorIndex::load(&config.index.path).with_context(|| {
        format!(
            "Cannot load vector index from {}; run the indexer first",
            config.index.path.display()
        )
    })?;
    info!(chunks = index.len(), "Vector index loaded");
    let index: Arc<dyn VectorStore> = Arc::new(index);

    let embedding = Arc::new(TextEmbedding::from_config(&config.embedding));
    let rag = Arc::new(RagService::new(embedding, index, config.rag.top_k));

    let translator: Arc<dyn Translator> = Arc::new(GoogleTranslate::from_config(&config.translation));
    let llm: Arc<dyn LlmService> = Arc::new(GeminiLlm::from_config(&config.llm));
    let vision: Arc<dyn VisionService> = Arc::new(GeminiVision::new(
        &config.llm.model,
        std::env::var("GEMINI_API_KEY").unwrap_or_default(),
        Duration::from_secs(config.llm.timeout_seconds),
    ));
    let geocoder: Arc<dyn Geocoder> = Arc::new(OpenCageGeocoder::from_config(&config.geocoder));
    let places: Arc<dyn PlacesService> = Arc::new(OverpassClient::from_config(&config.overpass));

    let default_lang = config.translation.default_target.clone();
    let state = AppState {
        chat: Arc::new(ChatService::new(
            translator.clone(),
            rag,
            llm.clone(),
            prompts.clone(),
            &default_lang,
        )),
        consult: Arc::new(ConsultService::new(llm, translator.clone(), prompts.clone())),
        diagnosis: Arc::new(DiagnosisService::new(vision, translator.clone(), prompts)),
        hospitals: Arc::new(HospitalService::new(
            geocoder,
            places,
            translator.clone(),
            config.overpass.radius_meters,
        )),
        translator,
        default_lang,
    };

    let app = create_router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    info!("API server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
