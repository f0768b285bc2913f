use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::RwLock;

use crate::domain::{ports::VectorStore, DocumentChunk, DomainError, Embedding, SearchResult};

#[derive(Debug, Serialize, Deserialize)]
struct IndexEntry {
    chunk: DocumentChunk,
    embedding: Embedding,
}

#[derive(Deserialize)]
struct IndexFile {
    entries: Vec<IndexEntry>,
}

#[derive(Serialize)]
struct IndexFileRef<'a> {
    built_at: DateTime<Utc>,
    entries: &'a [IndexEntry],
}

/// Cosine-similarity vector index held in memory, persisted as a JSON file.
///
/// The indexer builds and saves it; the API server loads it once at startup
/// and only ever reads from it.
pub struct FileVectorIndex {
    entries: RwLock<Vec<IndexEntry>>,
}

impl FileVectorIndex {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let file = File::open(path).map_err(|e| {
            DomainError::internal(format!("Cannot open index {}: {e}", path.display()))
        })?;
        let parsed: IndexFile = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            DomainError::internal(format!("Cannot parse index {}: {e}", path.display()))
        })?;
        Ok(Self {
            entries: RwLock::new(parsed.entries),
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), DomainError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| DomainError::internal(e.to_string()))?;
        let file = File::create(path).map_err(|e| {
            DomainError::internal(format!("Cannot create index {}: {e}", path.display()))
        })?;
        let contents = IndexFileRef {
            built_at: Utc::now(),
            entries: entries.as_slice(),
        };
        serde_json::to_writer(BufWriter::new(file), &contents)
            .map_err(|e| DomainError::internal(format!("Cannot write index: {e}")))
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FileVectorIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorStore for FileVectorIndex {
    async fn upsert(
        &self,
        chunk: &DocumentChunk,
        embedding: &Embedding,
    ) -> Result<(), DomainError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| DomainError::internal(e.to_string()))?;

        entries.retain(|entry| entry.chunk.id != chunk.id);
        entries.push(IndexEntry {
            chunk: chunk.clone(),
            embedding: embedding.clone(),
        });
        Ok(())
    }

    async fn search(
        &self,
        query: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, DomainError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| DomainError::internal(e.to_string()))?;

        let mut results: Vec<SearchResult> = entries
            .iter()
            .map(|entry| SearchResult {
                chunk: entry.chunk.clone(),
                score: query.cosine_similarity(&entry.embedding),
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        results.truncate(top_k);
        Ok(results)
    }
}
