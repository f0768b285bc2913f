use std::sync::Arc;
use tracing::{info, instrument};

use crate::domain::{
    chunk_text,
    ports::{EmbeddingService, VectorStore},
    DomainError,
};

/// Offline index construction: chunk each document, embed the chunks,
/// upsert everything into the target store. Every run rebuilds from
/// scratch; there is no incremental update or deduplication.
pub struct IndexService {
    embedding: Arc<dyn EmbeddingService>,
    chunk_size: usize,
    chunk_overlap: usize,
}

impl IndexService {
    pub fn new(embedding: Arc<dyn EmbeddingService>, chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            embedding,
            chunk_size,
            chunk_overlap,
        }
    }

    /// Indexes `(source name, text)` pairs into `store`. Returns the number
    /// of chunks written.
    #[instrument(skip(self, store, documents), fields(documents = documents.len()))]
    pub async fn build_into(
        &self,
        store: &dyn VectorStore,
        documents: &[(String, String)],
    ) -> Result<usize, DomainError> {
        let mut total = 0;

        for (source, text) in documents {
            let chunks = chunk_text(source, text, self.chunk_size, self.chunk_overlap);
            if chunks.is_empty() {
                continue;
            }

            let texts: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();
            let embeddings = self.embedding.embed_batch(&texts).await?;

            for (chunk, embedding) in chunks.iter().zip(embeddings.iter()) {
                store.upsert(chunk, embedding).await?;
            }

            info!(source, chunks = chunks.len(), "Indexed document");
            total += chunks.len();
        }

        Ok(total)
    }
}
