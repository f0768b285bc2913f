use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub id: Uuid,
    pub source: String,
    pub content: String,
    pub chunk_index: usize,
}

impl DocumentChunk {
    pub fn new(source: impl Into<String>, content: impl Into<String>, chunk_index: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: source.into(),
            content: content.into(),
            chunk_index,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub chunk: DocumentChunk,
    pub score: f32,
}

/// Splits text into fixed-size character windows with overlap.
///
/// Each chunk holds at most `chunk_size` characters and shares `overlap`
/// characters with its predecessor. Chunks are indexed sequentially from 0;
/// whitespace-only windows are skipped.
pub fn chunk_text(
    source: &str,
    text: &str,
    chunk_size: usize,
    overlap: usize,
) -> Vec<DocumentChunk> {
    let step = chunk_size.saturating_sub(overlap).max(1);
    let chars: Vec<char> = text.chars().collect();

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut chunk_index = 0;

    while start < chars.len() {
        let end = (start + chunk_size).min(chars.len());
        let content: String = chars[start..end].iter().collect();

        if !content.trim().is_empty() {
            chunks.push(DocumentChunk::new(source, content, chunk_index));
            chunk_index += 1;
        }

        if end == chars.len() {
            break;
        }
        start += step;
    }

    chunks
}
