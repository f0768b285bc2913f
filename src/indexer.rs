use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use med_assist::application::IndexService;
use med_assist::infrastructure::{corpus, Config, FileVectorIndex, TextEmbedding};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "indexer=info,med_assist=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env();

    let documents = corpus::load_pdf_documents(&config.index.corpus_dir)?;
    if documents.is_empty() {
        warn!(
            dir = %config.index.corpus_dir.display(),
            "No PDF documents found; writing an empty index"
        );
    } else {
        info!(documents = documents.len(), "Loaded corpus");
    }

    let embedding = Arc::new(TextEmbedding::from_config(&config.embedding));
    let service = IndexService::new(
        embedding,
        config.rag.chunk_size,
        config.rag.chunk_overlap,
    );

    let index = FileVectorIndex::new();
    let written = service.build_into(&index, &documents).await?;
    index.save(&config.index.path)?;

    info!(
        chunks = written,
        path = %config.index.path.display(),
        "Vector index saved"
    );

    Ok(())
}
